//! Event targets carried by rendered elements.
//!
//! Every interactive element of the grid stores a [`GridTarget`] in its
//! data map under [`TARGET_KEY`]. A click on any element is resolved by
//! walking from that element up to the root and taking the innermost
//! target, so a button inside a row never reaches the row's own handler.

use griddom::Element;
use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// Data key holding the encoded target.
pub const TARGET_KEY: &str = "tabula.target";

/// Data key holding an action button's tooltip text.
pub const TOOLTIP_KEY: &str = "tooltip";

/// What a click on an element means to the grid.
///
/// Row indices are positions in the caller's `data` slice, not display
/// positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridTarget {
    /// Column header (sort).
    Header { field: String },
    /// Header checkbox.
    SelectAll,
    /// Per-row checkbox.
    SelectRow { index: usize },
    /// The row body.
    Row { index: usize },
    /// A per-row action button or menu item.
    Action { index: usize, action: usize },
    /// Dropdown trigger of a row.
    MenuToggle { index: usize },
    /// A bulk toolbar button.
    Bulk { action: usize },
    /// A page navigation button.
    Page { page: usize },
    /// A page-size option.
    PageSize { size: usize },
    /// Swallows the click (padding of checkbox and action cells).
    Isolate,
}

impl GridTarget {
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(s: &str) -> Result<Self, TargetError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Target stored on `element`, if any.
    pub fn of(element: &Element) -> Result<Option<Self>, TargetError> {
        element
            .get_data(TARGET_KEY)
            .map(|s| Self::decode(s))
            .transpose()
    }

    /// Like [`of`](Self::of) but missing is an error.
    pub fn require(element: &Element) -> Result<Self, TargetError> {
        Self::of(element)?.ok_or_else(|| TargetError::Missing(element.id.clone()))
    }

    /// Store this target on `element` and make it clickable.
    pub fn attach(&self, element: Element) -> Element {
        element.clickable(true).data(TARGET_KEY, self.encode())
    }

    /// Row index for targets that belong to a row.
    pub fn row_index(&self) -> Option<usize> {
        match self {
            GridTarget::SelectRow { index }
            | GridTarget::Row { index }
            | GridTarget::Action { index, .. }
            | GridTarget::MenuToggle { index } => Some(*index),
            _ => None,
        }
    }
}
