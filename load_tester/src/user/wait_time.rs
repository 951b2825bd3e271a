//!
//! The virtual user wait time.
//!

use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;

///
/// The virtual user wait time.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaitTime {
    /// Always the same duration.
    Constant(Duration),
    /// Uniformly sampled from the inclusive interval.
    Between(Duration, Duration),
}

impl WaitTime {
    ///
    /// A uniform interval in seconds.
    ///
    pub fn between(min_seconds: f64, max_seconds: f64) -> Self {
        Self::Between(
            Duration::from_secs_f64(min_seconds),
            Duration::from_secs_f64(max_seconds),
        )
    }

    ///
    /// Samples the wait duration.
    ///
    pub fn sample(&self, rng: &mut StdRng) -> Duration {
        match *self {
            Self::Constant(duration) => duration,
            Self::Between(min, max) if min >= max => min,
            Self::Between(min, max) => {
                Duration::from_secs_f64(rng.gen_range(min.as_secs_f64()..=max.as_secs_f64()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::WaitTime;

    #[test]
    fn constant() {
        let mut rng = StdRng::seed_from_u64(0);
        let wait_time = WaitTime::Constant(Duration::from_secs(5));
        assert_eq!(wait_time.sample(&mut rng), Duration::from_secs(5));
    }

    #[test]
    fn between() {
        let mut rng = StdRng::seed_from_u64(42);
        let wait_time = WaitTime::between(1.0, 2.0);
        for _ in 0..1000 {
            let sample = wait_time.sample(&mut rng);
            assert!(sample >= Duration::from_secs(1));
            assert!(sample <= Duration::from_secs(2));
        }
    }

    #[test]
    fn between_degenerate() {
        let mut rng = StdRng::seed_from_u64(0);
        let wait_time = WaitTime::between(3.0, 3.0);
        assert_eq!(wait_time.sample(&mut rng), Duration::from_secs(3));
    }
}
