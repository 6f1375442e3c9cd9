//! Application layer — ports (contracts for infrastructure) and services
//! (use-cases driving the domain engine through those ports).

pub mod ports;
pub mod services;
