//! Движок «однорукого бандита» (fruit machine) без рендера.
//!
//! Ядро отвечает за:
//! - планирование вращения барабанов (случайный исход + кинематика);
//! - оценку выплат по линиям;
//! - машину состояний сессии (кредиты, удержания, счётчик спинов).
//!
//! Вся 3D/анимация живёт снаружи: аниматор получает `SpinPlan`,
//! сам интерполирует угол по времени и ровно один раз на план
//! вызывает `complete_reel_spin`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::config::MachineConfig;
pub use domain::credits::Credits;
pub use engine::errors::ConfigError;
pub use engine::payout::{SpinResult, WinLineResult};
pub use engine::plan::SpinPlan;
pub use engine::session::{ReelRuntime, SlotSession};
pub use engine::RandomSource;
