//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для селектора исходов;
//! - часы сессии для меток времени в планах вращения.

pub mod clock;
pub mod rng;

pub use clock::SessionClock;
pub use rng::*;
