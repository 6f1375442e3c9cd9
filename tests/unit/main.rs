//! Unit tests for lambda-deploy
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod deploy_service;
mod descriptor_file;
