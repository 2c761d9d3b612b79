//! Mock implementations and test utilities for the to-do task manager
//!
//! This crate provides testing infrastructure including:
//! - A mock implementation of the TaskStore trait
//! - Fluent test data builders

pub mod builders;
pub mod store;

pub use builders::*;
pub use store::MockTaskStore;
