use crate::engine::RandomSource;

/// Боевой RNG поверх `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        use rand::Rng;

        rand::thread_rng().gen_range(min..=max)
    }

    fn next_unit(&mut self) -> f64 {
        use rand::Rng;

        rand::thread_rng().gen::<f64>()
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же исходы при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;

        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        use rand::Rng;

        self.inner.gen_range(min..=max)
    }

    fn next_unit(&mut self) -> f64 {
        use rand::Rng;

        self.inner.gen::<f64>()
    }
}
