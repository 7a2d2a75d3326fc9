use serde::{Deserialize, Serialize};

use crate::domain::ReelId;
use crate::engine::payout::SpinResult;
use crate::engine::session::{ReelRuntime, SlotSession};

use super::dto::{MachineViewDto, ReelViewDto};

/// Запросы «только чтение».
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Полный снэпшот автомата (HUD).
    GetMachine,

    /// Только последний результат (бегущая строка на табло).
    GetLastResult,

    /// Состояние одного барабана.
    GetReel { reel_id: ReelId },
}

/// Результат запроса «только чтение».
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Machine(MachineViewDto),
    LastResult(Option<SpinResult>),
    Reel(Option<ReelViewDto>),
}

/// Обработать запрос по текущему состоянию сессии.
pub fn handle_query(session: &SlotSession, query: Query) -> QueryResponse {
    match query {
        Query::GetMachine => QueryResponse::Machine(build_machine_view(session)),
        Query::GetLastResult => QueryResponse::LastResult(session.last_result().cloned()),
        Query::GetReel { reel_id } => {
            QueryResponse::Reel(session.reel(reel_id).map(build_reel_view))
        }
    }
}

/// Сформировать снэпшот автомата на основе сессии.
pub fn build_machine_view(session: &SlotSession) -> MachineViewDto {
    MachineViewDto {
        machine_name: session.config().name.clone(),
        credits: session.credits(),
        spin_cost: session.config().spin_cost,
        is_spinning: session.is_spinning(),
        pending_stops: session.pending_stops(),
        spin_counter: session.spin_counter(),
        reels: session.reels().iter().map(build_reel_view).collect(),
        last_result: session.last_result().cloned(),
    }
}

fn build_reel_view(reel: &ReelRuntime) -> ReelViewDto {
    ReelViewDto {
        reel_id: reel.id,
        held: reel.held,
        current_index: reel.current_index,
        current_angle: reel.current_angle,
        spin_plan: reel.spin_plan.clone(),
    }
}
