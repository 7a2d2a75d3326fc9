use serde::{Deserialize, Serialize};

use crate::domain::symbol::SymbolId;
use crate::domain::ReelId;

/// Конфигурация одного барабана: упорядоченная «лента» символов.
///
/// Лента замкнута; её длина задаёт угловой шаг между соседними
/// символами (TAU / len). После загрузки конфига не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReelConfig {
    pub id: ReelId,
    pub symbols: Vec<SymbolId>,
}

impl ReelConfig {
    pub fn new(id: ReelId, symbols: Vec<SymbolId>) -> Self {
        Self { id, symbols }
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}
