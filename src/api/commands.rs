use serde::{Deserialize, Serialize};

use crate::domain::ReelId;
use crate::engine::session::SlotSession;
use crate::engine::RandomSource;
use crate::infra::clock::SessionClock;

/// Команда верхнего уровня — то, что приходит от кнопок кабинета
/// и от аниматора.
///
/// Недопустимая в текущем состоянии команда молча игнорируется
/// (кнопка «не нажалась»), это не ошибка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Запустить спин (кнопка Spin).
    RequestSpin,

    /// Переключить удержание барабана (кнопки Hold под барабанами).
    ToggleHold { reel_id: ReelId },

    /// Снять все удержания.
    ReleaseAllHolds,

    /// Событие аниматора: барабан доехал до целевого угла.
    CompleteReelSpin { reel_id: ReelId },
}

/// Применить команду к сессии.
/// `clock` даёт метку времени для планов вращения нового спина.
pub fn apply_command<R: RandomSource>(
    session: &mut SlotSession,
    rng: &mut R,
    clock: &SessionClock,
    command: Command,
) {
    match command {
        Command::RequestSpin => session.spin(rng, clock.now_secs()),
        Command::ToggleHold { reel_id } => session.toggle_hold(reel_id),
        Command::ReleaseAllHolds => session.release_all_holds(),
        Command::CompleteReelSpin { reel_id } => session.complete_reel_spin(reel_id),
    }
}
