//! Infrastructure layer — adapters implementing the application ports.

pub mod aws;
pub mod descriptor;
pub mod fs;
