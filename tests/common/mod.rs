//! Common test utilities for Dockcraft CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory plus config home
//! - Fixtures: documents shared across tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
