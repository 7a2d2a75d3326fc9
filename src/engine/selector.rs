//! Случайный выбор исхода: куда и как крутится каждый барабан.
//!
//! Селектор чистый: получает текущее состояние барабана и возвращает
//! `SpinPlan`, ничего не мутируя. План применяет `SlotSession`.

use std::f64::consts::TAU;

use crate::domain::config::MachineConfig;
use crate::domain::SpinId;
use crate::engine::angles::{angle_for_index, forward_distance};
use crate::engine::plan::SpinPlan;
use crate::engine::session::ReelRuntime;
use crate::engine::RandomSource;

/// Минимум лишних полных оборотов на спин.
const MIN_EXTRA_TURNS: u32 = 2;
/// База максимума лишних оборотов; максимум растёт с индексом барабана,
/// поэтому поздние барабаны крутятся заметно дольше.
const BASE_MAX_EXTRA_TURNS: u32 = 4;
/// Прибавка к длительности за каждый следующий барабан, сек.
const DURATION_STAGGER_SECS: f64 = 0.15;
/// Задержка старта за каждый следующий барабан, сек (каскадный запуск).
const DELAY_STAGGER_SECS: f64 = 0.12;

/// Построить план спина для одного (не удержанного) барабана.
///
/// Порядок обращений к RNG фиксирован, на него опираются тесты
/// со скриптованным источником:
///   1) целевой индекс;
///   2) лишние обороты;
///   3) джиттер длительности;
///   4) угловая скорость.
pub fn plan_reel_spin<R: RandomSource>(
    reel: &ReelRuntime,
    reel_index: usize,
    config: &MachineConfig,
    spin_id: SpinId,
    now_secs: f64,
    rng: &mut R,
) -> SpinPlan {
    let symbol_count = reel.symbols.len();

    let target_index = rng.next_int(0, symbol_count as u32 - 1) as usize;
    let landing_angle = angle_for_index(target_index, symbol_count);

    let extra_turns = rng.next_int(MIN_EXTRA_TURNS, BASE_MAX_EXTRA_TURNS + reel_index as u32);
    // Строго вперёд: дистанция до посадочного угла + полные обороты.
    let target_angle = reel.current_angle
        + forward_distance(reel.current_angle, landing_angle)
        + extra_turns as f64 * TAU;

    let (min_duration, max_duration) = config.spin_duration_bounds;
    let (min_velocity, max_velocity) = config.angular_velocity_bounds;

    // Джиттер в верхних 60% диапазона + каскадное удлинение по индексу.
    let jittered = min_duration
        + (max_duration - min_duration) * (rng.next_unit() * 0.6 + 0.4)
        + reel_index as f64 * DURATION_STAGGER_SECS;

    // Если дистанция велика для выбранной скорости, растягиваем
    // длительность: угловая скорость не должна выйти за границу.
    let velocity = min_velocity + (max_velocity - min_velocity) * rng.next_unit();
    let duration_secs = jittered.max((target_angle - reel.current_angle) / velocity);

    SpinPlan {
        key: spin_id * 10 + reel_index as u64,
        start_angle: reel.current_angle,
        target_angle,
        duration_secs,
        delay_secs: reel_index as f64 * DELAY_STAGGER_SECS,
        start_time_secs: now_secs,
        target_index,
    }
}
