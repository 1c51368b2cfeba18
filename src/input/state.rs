//! Input state machine - the single source of truth for the active gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (primary press on an item body, no edit modifier)
//!
//! Dragging -> Idle             (pointer up anywhere, focus lost, capture lost,
//!                               Escape, dragged item deleted)
//! ```
//!
//! Edit mode is orthogonal and lives on the editor, not here.

use crate::geometry::Point;
use crate::types::ItemId;

/// The scoped pointer subscription of one drag.
///
/// Only [`InputState::start_dragging`] creates one and only
/// [`InputState::end_drag`] releases it, so a drag can never outlive its
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    item_id: ItemId,
    /// Pointer minus item origin at drag start, in surface coordinates
    offset: Point,
    /// Item position when the drag started, restored on cancel
    origin: Point,
    moves: u32,
}

impl DragSession {
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Number of position updates applied so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }
}

/// Why a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEndReason {
    PointerUp,
    FocusLost,
    CaptureLost,
    /// Escape: the item returns to its origin
    Cancelled,
    ItemDeleted,
}

/// A released drag session.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub session: DragSession,
    pub reason: DragEndReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Dragging one item
    Dragging(DragSession),
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Get the item ID being dragged, if any
    pub fn dragged_item_id(&self) -> Option<ItemId> {
        self.session().map(DragSession::item_id)
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Acquire the drag session. Any previous session is replaced.
    pub fn start_dragging(&mut self, item_id: ItemId, offset: Point, origin: Point) {
        *self = Self::Dragging(DragSession {
            item_id,
            offset,
            origin,
            moves: 0,
        });
    }

    /// Release the drag session, returning it if one was active.
    pub fn end_drag(&mut self, reason: DragEndReason) -> Option<DragEnd> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(DragEnd { session, reason }),
            Self::Idle => None,
        }
    }
}
