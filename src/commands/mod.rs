//! Command implementations

pub mod account;
pub mod delete;
pub mod deploy;
pub mod invoke;
pub mod list;
