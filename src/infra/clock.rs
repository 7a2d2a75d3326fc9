//! Часы сессии: монотонные секунды от момента создания.
//!
//! Ядро само время не опрашивает — метка нужна только как
//! `start_time_secs` в планах вращения. Аналог `performance.now()`
//! из браузерного фронта, только в секундах.

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Секунды, прошедшие с создания часов.
    pub fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}
