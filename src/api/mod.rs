//! Внешний API автомата.
//!
//! Здесь описываются:
//! - команды (commands.rs) — кнопки кабинета и события аниматора;
//! - запросы (queries.rs) — только чтение для HUD/табло;
//! - DTO (dto.rs) — снэпшоты состояния для фронта.

pub mod commands;
pub mod dto;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use queries::*;
