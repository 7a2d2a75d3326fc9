use thiserror::Error;

use crate::domain::symbol::SymbolId;
use crate::domain::ReelId;

/// Фатальные ошибки конфигурации автомата.
///
/// Ловятся при загрузке конфига (`MachineConfig::validate`), во время
/// игры не возникают: игровые нарушения предусловий (недостаточно
/// кредитов, спин во время спина) — молчаливые no-op, а не ошибки.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("В конфиге нет ни одного барабана")]
    NoReels,

    #[error("Барабан {0} объявлен дважды")]
    DuplicateReelId(ReelId),

    #[error("У барабана {0} пустая лента символов")]
    EmptyReel(ReelId),

    #[error("Барабан {reel_id} ссылается на символ {symbol}, которого нет в таблице")]
    UnknownSymbol { reel_id: ReelId, symbol: SymbolId },

    #[error("Некорректные границы длительности спина: [{min}, {max}]")]
    BadDurationBounds { min: f64, max: f64 },

    #[error("Некорректные границы угловой скорости: [{min}, {max}]")]
    BadVelocityBounds { min: f64, max: f64 },
}
