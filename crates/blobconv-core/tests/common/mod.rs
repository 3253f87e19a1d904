//! Fake capabilities for integration tests.

pub mod readers;
