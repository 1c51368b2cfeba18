//! Pointer-move handling - dragged item position.
//!
//! Pointer-move is a hot path: it exits early when idle and touches only the
//! dragged item and its index entry.

use super::coords::CoordinateConverter;
use super::events::{InputOutcome, PointerEvent};
use crate::editor::BoardEditor;
use crate::geometry::drag_position;
use crate::profile_scope;
use tracing::trace;

impl BoardEditor {
    pub fn handle_pointer_move(&mut self, event: PointerEvent) -> InputOutcome {
        profile_scope!("handle_pointer_move");

        let Some((item_id, offset)) = self
            .input_state
            .session()
            .map(|session| (session.item_id(), session.offset()))
        else {
            return InputOutcome::Ignored;
        };
        let pointer = CoordinateConverter::screen_to_surface(event.position, self.surface_origin);
        let bounds = self.drag_bounds();
        let Some(position) = self
            .board
            .place_item(item_id, |size| drag_position(pointer, offset, size, bounds))
        else {
            return InputOutcome::Ignored;
        };
        if let Some(session) = self.input_state.session_mut() {
            session.record_move();
        }
        trace!(item_id, x = position.x, y = position.y, "item dragged");
        InputOutcome::Moved { item_id, position }
    }
}
