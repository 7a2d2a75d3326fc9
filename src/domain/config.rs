use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::credits::Credits;
use crate::domain::reel::ReelConfig;
use crate::domain::symbol::{SymbolDefinition, SymbolId};
use crate::domain::win_line::WinLine;
use crate::domain::ReelId;
use crate::engine::errors::ConfigError;

/// Статическое описание автомата: барабаны, таблица символов,
/// линии выплат, цена спина и границы кинематики.
///
/// Инварианты проверяет `validate()` — один раз при загрузке,
/// во время игры конфиг не меняется.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineConfig {
    pub name: String,
    /// Стоимость одного спина.
    pub spin_cost: Credits,
    /// Стартовый баланс сессии.
    pub initial_credits: Credits,
    /// (min, max) длительности вращения, сек.
    pub spin_duration_bounds: (f64, f64),
    /// (min, max) угловой скорости, рад/с. Минимум строго > 0:
    /// скорость делит угловую дистанцию при растягивании длительности.
    pub angular_velocity_bounds: (f64, f64),
    pub reels: Vec<ReelConfig>,
    pub symbols: HashMap<SymbolId, SymbolDefinition>,
    pub win_lines: Vec<WinLine>,
}

impl MachineConfig {
    /// Проверка инвариантов конфига. Нарушение — фатальная ошибка
    /// загрузки, а не игровое состояние.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reels.is_empty() {
            return Err(ConfigError::NoReels);
        }

        let mut seen_ids: HashSet<ReelId> = HashSet::new();
        for reel in &self.reels {
            if !seen_ids.insert(reel.id) {
                return Err(ConfigError::DuplicateReelId(reel.id));
            }
            if reel.symbols.is_empty() {
                return Err(ConfigError::EmptyReel(reel.id));
            }
            for symbol in &reel.symbols {
                if !self.symbols.contains_key(symbol) {
                    return Err(ConfigError::UnknownSymbol {
                        reel_id: reel.id,
                        symbol: symbol.clone(),
                    });
                }
            }
        }

        let (min_duration, max_duration) = self.spin_duration_bounds;
        if min_duration <= 0.0 || min_duration > max_duration {
            return Err(ConfigError::BadDurationBounds {
                min: min_duration,
                max: max_duration,
            });
        }

        let (min_velocity, max_velocity) = self.angular_velocity_bounds;
        if min_velocity <= 0.0 || min_velocity > max_velocity {
            return Err(ConfigError::BadVelocityBounds {
                min: min_velocity,
                max: max_velocity,
            });
        }

        Ok(())
    }

    /// Стоковая машина «Aurora Five»: 5 барабанов по 15 символов,
    /// 6 линий выплат. Используется как дефолт и как фикстура в тестах.
    pub fn aurora_five() -> Self {
        let symbols: HashMap<SymbolId, SymbolDefinition> = [
            symbol("cherry", "Cherry", 10),
            symbol("lemon", "Lemon", 8),
            symbol("plum", "Plum", 12),
            symbol("bell", "Bell", 16),
            symbol("seven", "Seven", 30),
            symbol("diamond", "Diamond", 50),
        ]
        .into_iter()
        .collect();

        let strips: [[&str; 15]; 5] = [
            [
                "cherry", "lemon", "plum", "bell", "seven", "diamond", "lemon", "plum", "cherry",
                "lemon", "plum", "bell", "seven", "diamond", "lemon",
            ],
            [
                "plum", "lemon", "diamond", "cherry", "bell", "seven", "cherry", "lemon", "plum",
                "lemon", "diamond", "cherry", "bell", "seven", "cherry",
            ],
            [
                "lemon", "bell", "plum", "diamond", "seven", "cherry", "bell", "plum", "lemon",
                "bell", "plum", "diamond", "seven", "cherry", "bell",
            ],
            [
                "diamond", "plum", "cherry", "bell", "lemon", "seven", "lemon", "plum", "diamond",
                "plum", "cherry", "bell", "lemon", "seven", "lemon",
            ],
            [
                "cherry", "seven", "diamond", "plum", "lemon", "bell", "plum", "diamond", "cherry",
                "seven", "diamond", "plum", "lemon", "bell", "plum",
            ],
        ];

        let reels = strips
            .iter()
            .enumerate()
            .map(|(index, strip)| {
                ReelConfig::new(
                    index as ReelId + 1,
                    strip.iter().map(|s| SymbolId::from(*s)).collect(),
                )
            })
            .collect();

        let win_lines = vec![
            WinLine::new("center", vec![0, 0, 0, 0, 0], 1.0),
            WinLine::new("top", vec![-1, -1, -1, -1, -1], 0.8),
            WinLine::new("bottom", vec![1, 1, 1, 1, 1], 0.8),
            WinLine::new("v-down", vec![-1, 0, 0, 0, -1], 1.2),
            WinLine::new("v-up", vec![1, 0, 0, 0, 1], 1.2),
            WinLine::new("zig", vec![0, -1, 0, 1, 0], 1.5),
        ];

        Self {
            name: "Aurora Five".to_string(),
            spin_cost: Credits(1),
            initial_credits: Credits(50),
            spin_duration_bounds: (2.5, 3.4),
            angular_velocity_bounds: (7.0, 11.0),
            reels,
            symbols,
            win_lines,
        }
    }
}

fn symbol(id: &str, label: &str, payout: u64) -> (SymbolId, SymbolDefinition) {
    let id = SymbolId::from(id);
    (
        id.clone(),
        SymbolDefinition {
            id,
            label: label.to_string(),
            payout: Credits(payout),
        },
    )
}
