//! Движок автомата: планирование спинов, выплаты, сессия.
//!
//! Высокоуровневый объект: `SlotSession`
//! Основные операции:
//!   - `spin` – запросить новый спин
//!   - `complete_reel_spin` – событие аниматора «барабан доехал»
//!   - `toggle_hold` / `release_all_holds` – удержание барабанов

pub mod angles;
pub mod errors;
pub mod payout;
pub mod plan;
pub mod selector;
pub mod session;

pub use errors::ConfigError;
pub use payout::{evaluate_spin_result, SpinResult, WinLineResult};
pub use plan::SpinPlan;
pub use selector::plan_reel_spin;
pub use session::{ReelRuntime, SlotSession};

/// RNG-интерфейс для движка.
/// Реализации живут в infra (обёртки над `rand`); тесты подсовывают
/// свои детерминированные или скриптованные источники.
pub trait RandomSource {
    /// Равномерное целое в [min, max] (обе границы включительно).
    fn next_int(&mut self, min: u32, max: u32) -> u32;

    /// Равномерное число в [0, 1).
    fn next_unit(&mut self) -> f64;
}
