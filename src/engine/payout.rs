//! Оценка выплат по финальным позициям барабанов.
//!
//! Никакого RNG: одинаковый вход — одинаковый результат,
//! включая порядок линий (порядок линий из конфига).

use serde::{Deserialize, Serialize};

use crate::domain::config::MachineConfig;
use crate::domain::credits::Credits;
use crate::domain::symbol::SymbolId;
use crate::engine::session::ReelRuntime;

/// Выплата по одной линии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WinLineResult {
    pub line_id: String,
    /// Совпавший символ (символ нулевого барабана).
    pub symbol: SymbolId,
    pub payout: Credits,
    /// Сколько барабанов подряд совпало, начиная с нулевого.
    pub match_length: usize,
}

/// Итог одного спина. Создаётся заново, когда остановился последний
/// барабан; дальше не мутируется и живёт как «последний результат».
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinResult {
    pub total_payout: Credits,
    pub lines: Vec<WinLineResult>,
}

/// Множитель частичного совпадения по длине префикса.
/// Длины вне таблицы не платят (5 из 5 — это уже полное совпадение).
fn partial_match_multiplier(match_length: usize) -> Option<f64> {
    match match_length {
        3 => Some(0.35),
        4 => Some(0.65),
        _ => None,
    }
}

/// Символ, видимый на барабане со смещением от центрального индекса.
/// Лента замкнута, смещение может быть любого знака.
fn offset_symbol(symbols: &[SymbolId], base_index: usize, offset: i32) -> &SymbolId {
    let count = symbols.len() as i64;
    let resolved = (base_index as i64 + offset as i64).rem_euclid(count);
    &symbols[resolved as usize]
}

/// Посчитать выплаты по всем линиям для остановившихся барабанов.
///
/// Полное совпадение: все барабаны линии показывают один символ,
/// выплата `round(base * множитель линии)`.
/// Частичное: префикс совпадений с нулевого барабана длиной 3 или 4,
/// выплата `max(1, round(base * множитель линии * множитель префикса))`.
/// Частичный забег, начинающийся не с нулевого барабана, не платит.
/// Линии с нулевой выплатой в результат не попадают.
pub fn evaluate_spin_result(config: &MachineConfig, reels: &[ReelRuntime]) -> SpinResult {
    let mut lines: Vec<WinLineResult> = Vec::new();

    for line in &config.win_lines {
        let line_symbols: Vec<&SymbolId> = reels
            .iter()
            .enumerate()
            .map(|(reel_index, reel)| {
                offset_symbol(&reel.symbols, reel.current_index, line.offset_for(reel_index))
            })
            .collect();

        let first_symbol = match line_symbols.first() {
            Some(symbol) => *symbol,
            None => continue,
        };
        let definition = match config.symbols.get(first_symbol) {
            Some(definition) => definition,
            None => continue,
        };

        let base_payout = definition.payout.0 as f64;
        let all_match = line_symbols.iter().all(|symbol| *symbol == first_symbol);

        if all_match {
            let payout = (base_payout * line.payout_multiplier).round() as i64;
            if payout > 0 {
                lines.push(WinLineResult {
                    line_id: line.id.clone(),
                    symbol: first_symbol.clone(),
                    payout: Credits(payout as u64),
                    match_length: line_symbols.len(),
                });
            }
            continue;
        }

        // Частичное совпадение: считаем только префикс с нулевого барабана.
        let mut match_length = 1;
        for symbol in line_symbols.iter().skip(1) {
            if *symbol == first_symbol {
                match_length += 1;
            } else {
                break;
            }
        }

        let partial = match partial_match_multiplier(match_length) {
            Some(multiplier) => multiplier,
            None => continue,
        };

        let multiplier = line.payout_multiplier * partial;
        if multiplier <= 0.0 {
            continue;
        }

        let payout = ((base_payout * multiplier).round() as i64).max(1) as u64;
        lines.push(WinLineResult {
            line_id: line.id.clone(),
            symbol: first_symbol.clone(),
            payout: Credits(payout),
            match_length,
        });
    }

    let total_payout = lines
        .iter()
        .fold(Credits::ZERO, |acc, line| acc + line.payout);

    SpinResult {
        total_payout,
        lines,
    }
}
