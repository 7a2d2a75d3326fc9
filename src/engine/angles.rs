//! Круговая арифметика углов барабана.
//!
//! Лента замкнута: символ с индексом `i` висит на угле `i * TAU / len`.
//! Барабан крутится только вперёд, поэтому все дистанции неотрицательные.

use std::f64::consts::TAU;

/// Нормализовать угол в [0, TAU).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped < 0.0 {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Угловой шаг между соседними символами ленты.
pub fn angle_per_symbol(symbol_count: usize) -> f64 {
    TAU / symbol_count as f64
}

/// Угол «приземления» символа с данным индексом.
pub fn angle_for_index(index: usize, symbol_count: usize) -> f64 {
    normalize_angle(index as f64 * angle_per_symbol(symbol_count))
}

/// Сколько нужно провернуть строго вперёд от `from`, чтобы встать на `to`.
/// Всегда в [0, TAU): назад не крутим.
pub fn forward_distance(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}
