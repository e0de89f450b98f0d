//! Consolidated test utilities for codebox
//!
//! This module provides unified testing utilities for integration tests,
//! driving the real binary against a local HTTP server with canned responses.

pub mod assertions;
pub mod fixtures;
pub mod server;
