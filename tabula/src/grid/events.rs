//! Grid interaction events.

use crate::target::GridTarget;

/// An interaction delivered to [`Grid::dispatch`](super::Grid::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    Click(GridTarget),
    /// Pointer entered the row at this data index.
    Hover { index: usize },
    /// Pointer left the table body.
    Leave,
}

impl From<GridTarget> for GridEvent {
    fn from(target: GridTarget) -> Self {
        GridEvent::Click(target)
    }
}

/// Whether the grid acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<bool> for EventResult {
    fn from(consumed: bool) -> Self {
        if consumed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}
