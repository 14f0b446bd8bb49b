pub mod models;

#[macro_use]
pub mod macros;
