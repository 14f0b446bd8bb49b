//! Plain data models consumed and produced by the engine.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
