use crate::utils::{Clock, DefaultClock, DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which takes a string message.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environmental setup: every source of non determinism (wall clock, randomness)
/// and the logging sink live here, so a caller controls all of them in one place.
pub struct Environment {
    /// A wall clock abstraction.
    pub clock: Arc<dyn Clock>,
    /// A random generator.
    pub random: Arc<dyn Random>,
    /// A logger type.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { clock, random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock::default()), Arc::new(DefaultRandom::default()), Arc::new(|msg| println!("{msg}")))
    }
}
