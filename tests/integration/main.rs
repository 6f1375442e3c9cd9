//! Integration tests for lambda-deploy
//!
//! These tests run the real binary but only exercise offline paths: argument
//! parsing, descriptor validation, and artifact reading all happen before
//! any remote call is made.

mod cli_tests;
