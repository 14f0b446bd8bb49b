//! Format crate exposes the engine to its collaborators: serde wire records for the route
//! repository and UI layers, input validation with coded errors, and the planning and
//! analysis entry points the dashboard calls.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

mod errors;
pub use self::errors::*;

pub mod model;
pub mod validation;

mod api;
pub use self::api::*;
