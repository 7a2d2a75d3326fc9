//! Доменная модель автомата: символы, барабаны, линии выплат, кредиты, конфиг.

pub mod config;
pub mod credits;
pub mod reel;
pub mod symbol;
pub mod win_line;

/// Идентификатор барабана. Задаётся в конфиге, уникален в рамках машины.
pub type ReelId = u64;
/// Номер спина внутри сессии (монотонный счётчик).
pub type SpinId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Credits и т.п.
pub use config::*;
pub use credits::*;
pub use reel::*;
pub use symbol::*;
pub use win_line::*;
