//! Сессия автомата: машина состояний спина и учёт кредитов.
//!
//! Состояния:
//!   - Idle: `is_spinning == false`, планов нет;
//!   - Spinning: `is_spinning == true`, `pending_stops > 0`;
//!   - «Settling» схлопнуто в обработчик завершения: последний барабан
//!     атомарно доводит сессию до Idle (оценка выплаты + начисление).
//!
//! Все переходы последовательные: события аниматора приходят извне,
//! но выполняются по одному, ядро никогда не блокируется.

use serde::{Deserialize, Serialize};

use crate::domain::config::MachineConfig;
use crate::domain::credits::Credits;
use crate::domain::symbol::SymbolId;
use crate::domain::{ReelId, SpinId};
use crate::engine::angles::{angle_for_index, normalize_angle};
use crate::engine::errors::ConfigError;
use crate::engine::payout::{evaluate_spin_result, SpinResult};
use crate::engine::plan::SpinPlan;
use crate::engine::selector::plan_reel_spin;
use crate::engine::RandomSource;

/// Живое состояние одного барабана.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReelRuntime {
    pub id: ReelId,
    /// Копия ленты из конфига (конфиг неизменяемый).
    pub symbols: Vec<SymbolId>,
    /// Удержание: на следующем спине барабан не крутится.
    pub held: bool,
    /// Индекс символа в центре. Авторитетен только пока `spin_plan == None`.
    pub current_index: usize,
    /// Угол покоя, нормализован в [0, TAU).
    pub current_angle: f64,
    /// Активный план вращения; `Some` ровно пока барабан анимируется.
    pub spin_plan: Option<SpinPlan>,
}

impl ReelRuntime {
    pub fn is_animating(&self) -> bool {
        self.spin_plan.is_some()
    }
}

/// Сессия одного игрока за одним автоматом.
///
/// Владеет всем изменяемым состоянием; живёт от старта процесса до
/// конца сессии, ничего не персистит. Один писатель, никакого
/// разделения между сессиями.
#[derive(Clone, Debug)]
pub struct SlotSession {
    config: MachineConfig,
    credits: Credits,
    is_spinning: bool,
    reels: Vec<ReelRuntime>,
    pending_stops: usize,
    spin_counter: SpinId,
    last_result: Option<SpinResult>,
}

impl SlotSession {
    /// Создать сессию: валидирует конфиг и раскладывает барабаны
    /// на случайные стартовые позиции.
    pub fn new<R: RandomSource>(config: MachineConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let reels = config
            .reels
            .iter()
            .map(|reel_config| {
                let count = reel_config.symbols.len();
                let initial_index = rng.next_int(0, count as u32 - 1) as usize;
                ReelRuntime {
                    id: reel_config.id,
                    symbols: reel_config.symbols.clone(),
                    held: false,
                    current_index: initial_index,
                    current_angle: angle_for_index(initial_index, count),
                    spin_plan: None,
                }
            })
            .collect();

        let credits = config.initial_credits;

        Ok(Self {
            config,
            credits,
            is_spinning: false,
            reels,
            pending_stops: 0,
            spin_counter: 0,
            last_result: None,
        })
    }

    // --- Чтение (HUD, табло, аниматор) ---

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn credits(&self) -> Credits {
        self.credits
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn pending_stops(&self) -> usize {
        self.pending_stops
    }

    /// Монотонный счётчик спинов. По нему фронт отличает
    /// «начался новый спин» от «объявлен результат».
    pub fn spin_counter(&self) -> SpinId {
        self.spin_counter
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    pub fn reels(&self) -> &[ReelRuntime] {
        &self.reels
    }

    pub fn reel(&self, reel_id: ReelId) -> Option<&ReelRuntime> {
        self.reels.iter().find(|reel| reel.id == reel_id)
    }

    // --- Переходы ---

    /// Запросить спин.
    ///
    /// Молчаливый no-op, если уже крутимся или не хватает кредитов:
    /// это штатное поведение кнопки, а не ошибка. Иначе списываем цену
    /// спина, раздаём планы всем не удержанным барабанам и ждём
    /// `complete_reel_spin` от аниматора по каждому из них.
    pub fn spin<R: RandomSource>(&mut self, rng: &mut R, now_secs: f64) {
        if self.is_spinning || self.credits < self.config.spin_cost {
            return;
        }

        let spin_id = self.spin_counter + 1;
        let mut pending_stops = 0;

        for reel_index in 0..self.reels.len() {
            if self.reels[reel_index].held {
                continue;
            }
            let plan = plan_reel_spin(
                &self.reels[reel_index],
                reel_index,
                &self.config,
                spin_id,
                now_secs,
                rng,
            );
            self.reels[reel_index].spin_plan = Some(plan);
            pending_stops += 1;
        }

        self.credits -= self.config.spin_cost;
        self.spin_counter = spin_id;
        self.pending_stops = pending_stops;

        if pending_stops == 0 {
            // Все барабаны удержаны: спин «мгновенный», оцениваем
            // текущую раскладку и остаёмся в Idle.
            let result = evaluate_spin_result(&self.config, &self.reels);
            self.credits += result.total_payout;
            self.last_result = Some(result);
            return;
        }

        self.is_spinning = true;
        self.last_result = None;
    }

    /// Событие от аниматора: барабан доехал до целевого угла.
    ///
    /// План потребляется ровно один раз: дубликаты, неизвестные id и
    /// события по уже остановившемуся барабану игнорируются.
    pub fn complete_reel_spin(&mut self, reel_id: ReelId) {
        let reel = match self.reels.iter_mut().find(|reel| reel.id == reel_id) {
            Some(reel) => reel,
            None => return,
        };
        let plan = match reel.spin_plan.take() {
            Some(plan) => plan,
            None => return,
        };

        reel.current_index = plan.target_index;
        reel.current_angle = normalize_angle(plan.target_angle);

        self.pending_stops = self.pending_stops.saturating_sub(1);
        if self.pending_stops > 0 {
            return;
        }

        // Последний барабан встал: считаем выплату и публикуем результат.
        let result = evaluate_spin_result(&self.config, &self.reels);
        self.credits += result.total_payout;
        self.last_result = Some(result);
        self.is_spinning = false;
    }

    /// Переключить удержание барабана. Разрешено только в покое;
    /// во время спина и для неизвестного id — no-op.
    pub fn toggle_hold(&mut self, reel_id: ReelId) {
        if self.is_spinning {
            return;
        }
        if let Some(reel) = self.reels.iter_mut().find(|reel| reel.id == reel_id) {
            reel.held = !reel.held;
        }
    }

    /// Снять удержание со всех барабанов. Разрешено только в покое.
    pub fn release_all_holds(&mut self) {
        if self.is_spinning {
            return;
        }
        for reel in &mut self.reels {
            reel.held = false;
        }
    }
}
