//! Application services — one module per use-case.

pub mod deploy;
