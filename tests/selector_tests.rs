//! Тесты селектора исходов.
//!
//! Проверяют:
//! - монотонность вращения (target_angle >= start_angle, минимум 2 оборота)
//! - согласованность целевого индекса и посадочного угла
//! - каскадные задержки и удлинение по индексу барабана
//! - растягивание длительности под границу угловой скорости
//! - фиксацию метки времени и ключа плана

use std::collections::VecDeque;
use std::f64::consts::TAU;

use slots_engine::domain::config::MachineConfig;
use slots_engine::engine::angles::{angle_for_index, normalize_angle};
use slots_engine::engine::selector::plan_reel_spin;
use slots_engine::engine::session::ReelRuntime;
use slots_engine::engine::RandomSource;
use slots_engine::infra::rng::DeterministicRng;

struct ScriptedRng {
    ints: VecDeque<u32>,
    units: VecDeque<f64>,
}

impl ScriptedRng {
    fn new(ints: &[u32], units: &[f64]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        self.ints
            .pop_front()
            .map(|v| v.clamp(min, max))
            .unwrap_or(min)
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}

fn reel_from_config(config: &MachineConfig, reel_index: usize, at_index: usize) -> ReelRuntime {
    let reel_config = &config.reels[reel_index];
    let count = reel_config.symbols.len();
    ReelRuntime {
        id: reel_config.id,
        symbols: reel_config.symbols.clone(),
        held: false,
        current_index: at_index,
        current_angle: angle_for_index(at_index, count),
        spin_plan: None,
    }
}

/// Кратчайшая угловая разница между двумя нормализованными углами.
fn angular_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % TAU;
    diff.min(TAU - diff)
}

#[test]
fn plan_rotates_strictly_forward_with_extra_turns() {
    let config = MachineConfig::aurora_five();

    for seed in 0..50u64 {
        let mut rng = DeterministicRng::from_seed(seed);
        let reel = reel_from_config(&config, 0, (seed % 15) as usize);

        let plan = plan_reel_spin(&reel, 0, &config, 1, 0.0, &mut rng);

        assert!(plan.target_angle >= plan.start_angle, "no backward spin");
        // Минимум два лишних полных оборота.
        assert!(
            plan.target_angle - plan.start_angle >= 2.0 * TAU - 1e-9,
            "seed {seed}: too short a spin"
        );
    }
}

#[test]
fn plan_lands_exactly_on_target_index_angle() {
    let config = MachineConfig::aurora_five();
    let count = config.reels[0].symbol_count();

    for seed in 0..50u64 {
        let mut rng = DeterministicRng::from_seed(seed);
        let reel = reel_from_config(&config, 0, (seed % 15) as usize);

        let plan = plan_reel_spin(&reel, 0, &config, 1, 0.0, &mut rng);

        assert!(plan.target_index < count);
        let landing = angle_for_index(plan.target_index, count);
        assert!(
            angular_diff(normalize_angle(plan.target_angle), landing) < 1e-9,
            "seed {seed}: target angle must land on target index"
        );
    }
}

#[test]
fn delay_cascades_with_reel_index() {
    let config = MachineConfig::aurora_five();

    for reel_index in 0..5 {
        let mut rng = ScriptedRng::new(&[0, 2], &[0.0, 0.0]);
        let reel = reel_from_config(&config, reel_index, 0);

        let plan = plan_reel_spin(&reel, reel_index, &config, 1, 0.0, &mut rng);

        let expected = reel_index as f64 * 0.12;
        assert!((plan.delay_secs - expected).abs() < 1e-12);
    }
}

#[test]
fn duration_grows_with_reel_index() {
    // Огромная скорость, чтобы нижняя граница по скорости не включалась.
    let mut config = MachineConfig::aurora_five();
    config.angular_velocity_bounds = (1000.0, 1000.0);

    let mut previous = 0.0;
    for reel_index in 0..5 {
        let mut rng = ScriptedRng::new(&[0, 2], &[0.0, 0.0]);
        let reel = reel_from_config(&config, reel_index, 0);

        let plan = plan_reel_spin(&reel, reel_index, &config, 1, 0.0, &mut rng);

        // При нулевом джиттере: min + 0.4 * (max - min) + index * 0.15.
        let expected = 2.5 + 0.4 * (3.4 - 2.5) + reel_index as f64 * 0.15;
        assert!((plan.duration_secs - expected).abs() < 1e-9);
        assert!(plan.duration_secs > previous);
        previous = plan.duration_secs;
    }
}

#[test]
fn duration_is_stretched_to_respect_velocity_bound() {
    let config = MachineConfig::aurora_five();
    // Цель = текущая позиция, 4 лишних оборота, нулевой джиттер,
    // минимальная скорость (7 рад/с).
    let mut rng = ScriptedRng::new(&[0, 4], &[0.0, 0.0]);
    let reel = reel_from_config(&config, 0, 0);

    let plan = plan_reel_spin(&reel, 0, &config, 1, 0.0, &mut rng);

    let distance = plan.target_angle - plan.start_angle;
    assert!((distance - 4.0 * TAU).abs() < 1e-9);

    // 4 * TAU / 7 ≈ 3.59 с — больше джиттерных 2.86 с, длительность растянута.
    let stretched = distance / 7.0;
    assert!((plan.duration_secs - stretched).abs() < 1e-9);
    assert!(distance / plan.duration_secs <= 7.0 + 1e-9);
}

#[test]
fn angular_velocity_never_exceeds_max_bound() {
    let config = MachineConfig::aurora_five();
    let (_, max_velocity) = config.angular_velocity_bounds;

    for seed in 0..50u64 {
        let mut rng = DeterministicRng::from_seed(seed);
        for reel_index in 0..5 {
            let reel = reel_from_config(&config, reel_index, (seed % 15) as usize);
            let plan = plan_reel_spin(&reel, reel_index, &config, 1, 0.0, &mut rng);

            let velocity = (plan.target_angle - plan.start_angle) / plan.duration_secs;
            assert!(
                velocity <= max_velocity + 1e-9,
                "seed {seed}, reel {reel_index}: velocity {velocity} out of bound"
            );
        }
    }
}

#[test]
fn plan_records_timestamp_and_key() {
    let config = MachineConfig::aurora_five();
    let mut rng = ScriptedRng::new(&[3, 2], &[0.0, 0.0]);
    let reel = reel_from_config(&config, 2, 0);

    let plan = plan_reel_spin(&reel, 2, &config, 7, 12.5, &mut rng);

    assert_eq!(plan.start_time_secs, 12.5);
    // spin_id * 10 + индекс барабана.
    assert_eq!(plan.key, 72);
    assert_eq!(plan.target_index, 3);
    assert_eq!(plan.start_angle, reel.current_angle);
}
