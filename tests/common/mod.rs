//! Common test utilities for image-dl integration tests

#[allow(dead_code)]
pub mod fixtures;
#[allow(dead_code)]
pub mod presenter;

#[allow(unused_imports)]
pub use fixtures::*;
pub use presenter::*;
