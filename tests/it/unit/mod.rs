//! Unit tests for single components.

mod board_index_tests;
mod geometry_tests;
mod snapshot_tests;
