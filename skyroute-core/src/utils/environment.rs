use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type used to print progress information.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps a state external to the search algorithms: randomness source and logger.
///
/// The whole pipeline is single threaded, so a non thread safe random implementation is fine.
#[derive(Clone)]
pub struct Environment {
    /// A wrapped random generator.
    pub random: Arc<dyn Random>,
    /// A logger type which outputs progress information.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an environment which replays the same random draw sequence for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { random: Arc::new(DefaultRandom::default()), logger: Arc::new(|msg: &str| println!("{msg}")) }
    }
}
