//! Pointer and keyboard input handling for the board surface.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. A drag is a `DragSession` owned by that
//! state: it is acquired on pointer-down and always released by pointer-up,
//! focus loss, pointer-capture loss, Escape, or deletion of the dragged item.
//!
//! ## Modules
//!
//! - `events` - Input signal types (pointer, keys, modifiers)
//! - `state` - Input state machine enum and the drag session
//! - `coords` - Screen to surface coordinate conversion
//! - `mouse_down` - Pointer-down handling (hit testing, selection, drag/edit start)
//! - `drag` - Pointer-move handling (dragged item position)
//! - `mouse_up` - Pointer-up and implicit drag ends
//! - `keyboard` - Modifier tracking and shortcuts

pub mod coords;
pub mod events;
mod state;
mod mouse_down;
mod drag;
mod mouse_up;
mod keyboard;

pub use events::{InputOutcome, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, PressRegion};
pub use state::{DragEnd, DragEndReason, DragSession, InputState};
