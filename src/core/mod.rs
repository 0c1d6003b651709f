//! Computation engine and the stateless services that wrap it.

pub mod engine;
pub mod services;
