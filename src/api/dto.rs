use serde::{Deserialize, Serialize};

use crate::domain::credits::Credits;
use crate::domain::{ReelId, SpinId};
use crate::engine::payout::SpinResult;
use crate::engine::plan::SpinPlan;

/// DTO одного барабана для HUD/табло.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReelViewDto {
    pub reel_id: ReelId,
    pub held: bool,
    pub current_index: usize,
    pub current_angle: f64,
    /// Активный план, если барабан сейчас крутится —
    /// это же контракт для аниматора.
    pub spin_plan: Option<SpinPlan>,
}

/// Снэпшот автомата для HUD/табло.
///
/// Реактивность (подписки на срезы состояния) остаётся на стороне
/// фронта: ядро отдаёт снэпшот по запросу, без своих подписок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MachineViewDto {
    pub machine_name: String,
    pub credits: Credits,
    pub spin_cost: Credits,
    pub is_spinning: bool,
    pub pending_stops: usize,
    /// По счётчику фронт отличает «начался новый спин»
    /// от «объявлен результат».
    pub spin_counter: SpinId,
    pub reels: Vec<ReelViewDto>,
    pub last_result: Option<SpinResult>,
}
