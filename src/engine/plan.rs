use serde::{Deserialize, Serialize};

/// Кинематический план одного спина для одного барабана.
///
/// Создаётся селектором, применяется сессией, отдаётся внешнему
/// аниматору. Аниматор сам интерполирует угол по времени (easing на
/// его вкус) и ровно один раз на план вызывает `complete_reel_spin`.
/// Ядро внутри себя время не опрашивает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinPlan {
    /// Уникальный в рамках сессии ключ плана:
    /// `spin_counter * 10 + индекс барабана`.
    pub key: u64,
    /// Угол, с которого начинается вращение (нормализованный угол покоя).
    pub start_angle: f64,
    /// Целевой угол. Может превышать TAU — лишние полные обороты.
    /// Инвариант: `target_angle >= start_angle`.
    pub target_angle: f64,
    /// Длительность движения, сек (задержка не входит).
    pub duration_secs: f64,
    /// Задержка перед стартом движения, сек (каскадный запуск барабанов).
    pub delay_secs: f64,
    /// Метка времени создания плана, сек по часам сессии.
    pub start_time_secs: f64,
    /// Индекс символа, на котором барабан остановится.
    pub target_index: usize,
}
