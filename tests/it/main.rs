//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - unit: Single-component tests against the public API
//! - integration: Multi-step editor workflows driven through input signals

mod unit;
