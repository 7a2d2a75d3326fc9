use serde::{Deserialize, Serialize};

/// Линия выплат: по одному смещению на барабан относительно
/// приземлившегося центрального индекса.
///
/// Смещение -1 — позиция над центром, +1 — под центром, 0 — центр.
/// Так задаются горизонтали, диагонали и зигзаги.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WinLine {
    pub id: String,
    /// Смещения по барабанам. Если смещений меньше, чем барабанов,
    /// недостающие читаются как 0.
    pub offsets: Vec<i32>,
    /// Множитель линии. Может быть и <1, и >1.
    pub payout_multiplier: f64,
}

impl WinLine {
    pub fn new(id: impl Into<String>, offsets: Vec<i32>, payout_multiplier: f64) -> Self {
        Self {
            id: id.into(),
            offsets,
            payout_multiplier,
        }
    }

    /// Смещение для барабана с данным индексом (отсутствующее = 0).
    pub fn offset_for(&self, reel_index: usize) -> i32 {
        self.offsets.get(reel_index).copied().unwrap_or(0)
    }
}
