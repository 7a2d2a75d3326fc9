use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::credits::Credits;

/// Идентификатор символа ("cherry", "seven" и т.п.).
/// Обёртка над строкой: набор символов приходит из конфига, а не из кода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub String);

impl SymbolId {
    pub fn new(id: impl Into<String>) -> Self {
        SymbolId(id.into())
    }
}

impl From<&str> for SymbolId {
    fn from(id: &str) -> Self {
        SymbolId(id.to_string())
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Описание символа: как он называется и сколько платит.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolDefinition {
    pub id: SymbolId,
    /// Имя для табло/HUD.
    pub label: String,
    /// Базовая выплата за полное совпадение по центральной линии (5 из 5).
    pub payout: Credits,
}
