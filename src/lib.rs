//! Headless mood-board editor core.
//!
//! A host UI forwards pointer and keyboard signals to a [`editor::BoardEditor`]
//! and renders from its state: item positions, render order, selection, edit
//! buffer and pending notifications.

pub mod board;
pub mod board_index;
pub mod constants;
pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod notifications;
pub mod perf;
pub mod script;
pub mod settings;
pub mod spatial_index;
pub mod types;
pub mod upload;
