//! Single-column sort state.
//!
//! Clicking a sortable header cycles that field through ascending,
//! descending and unsorted. Clicking a different field starts it at
//! ascending. The controller runs in one of two modes fixed at
//! construction:
//!
//! - uncontrolled: the grid stores the state and orders rows for display
//! - controlled: the caller owns the state; the grid only reports the next
//!   ordering token (`name`, `-name` or `None`) through its callback

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::column::Column;
use crate::model::GridRow;

/// Sort direction of the active field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    Desc,
    #[default]
    None,
}

/// `{ field, direction }`; at most one field is sorted at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    /// No active sort.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    pub fn is_active(&self) -> bool {
        self.direction != SortDirection::None && !self.field.is_empty()
    }

    /// Direction shown on the header of `field`.
    pub fn direction_for(&self, field: &str) -> SortDirection {
        if self.is_active() && self.field == field {
            self.direction
        } else {
            SortDirection::None
        }
    }

    /// State after a click on the header of `field`.
    pub fn next_for(&self, field: &str) -> SortState {
        if !self.is_active() || self.field != field {
            return SortState::asc(field);
        }
        match self.direction {
            SortDirection::Asc => SortState::desc(field),
            SortDirection::Desc | SortDirection::None => SortState::none(),
        }
    }

    /// Ordering token for the query layer: `field`, `-field`, or `None`.
    pub fn ordering_token(&self) -> Option<String> {
        if !self.is_active() {
            return None;
        }
        match self.direction {
            SortDirection::Asc => Some(self.field.clone()),
            SortDirection::Desc => Some(format!("-{}", self.field)),
            SortDirection::None => None,
        }
    }

    /// Inverse of [`ordering_token`](Self::ordering_token).
    pub fn from_ordering_token(token: Option<&str>) -> SortState {
        match token.map(str::trim) {
            None | Some("") | Some("-") => SortState::none(),
            Some(t) => match t.strip_prefix('-') {
                Some(field) => SortState::desc(field),
                None => SortState::asc(t),
            },
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordering_token() {
            Some(t) => f.write_str(&t),
            None => f.write_str("(none)"),
        }
    }
}

/// Callback receiving the next ordering token in controlled mode.
pub type OnSort = Arc<dyn Fn(Option<String>) + Send + Sync>;

/// How the sort state is owned, decided once per grid instance.
#[derive(Clone)]
pub enum SortBinding {
    /// The grid owns the state, starting from `initial`.
    Uncontrolled { initial: SortState },
    /// The caller owns the state and passes it in every render.
    Controlled { on_sort: OnSort },
}

impl SortBinding {
    pub fn uncontrolled() -> Self {
        SortBinding::Uncontrolled {
            initial: SortState::none(),
        }
    }

    pub fn controlled(on_sort: impl Fn(Option<String>) + Send + Sync + 'static) -> Self {
        SortBinding::Controlled {
            on_sort: Arc::new(on_sort),
        }
    }
}

impl Default for SortBinding {
    fn default() -> Self {
        Self::uncontrolled()
    }
}

impl fmt::Debug for SortBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBinding::Uncontrolled { initial } => f
                .debug_struct("Uncontrolled")
                .field("initial", initial)
                .finish(),
            SortBinding::Controlled { .. } => f.write_str("Controlled"),
        }
    }
}

/// Result of a header click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// Column not sortable; nothing changed.
    Ignored,
    /// Uncontrolled: the stored state is now this.
    Updated(SortState),
    /// Controlled: this token was sent to the callback.
    Emitted(Option<String>),
}

/// Owns (or forwards) the sort state of one grid instance.
#[derive(Debug)]
pub struct SortController {
    binding: SortBinding,
    state: SortState,
}

impl SortController {
    pub fn new(binding: SortBinding) -> Self {
        let state = match &binding {
            SortBinding::Uncontrolled { initial } => initial.clone(),
            SortBinding::Controlled { .. } => SortState::none(),
        };
        Self { binding, state }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.binding, SortBinding::Controlled { .. })
    }

    /// The state to display. In controlled mode this is whatever the caller
    /// passed in; the controller never stores it.
    pub fn current(&self, controlled: Option<&SortState>) -> SortState {
        match self.binding {
            SortBinding::Uncontrolled { .. } => self.state.clone(),
            SortBinding::Controlled { .. } => controlled.cloned().unwrap_or_default(),
        }
    }

    /// Handle a click on the header of `column`.
    pub fn click<R>(&mut self, column: &Column<R>, controlled: Option<&SortState>) -> SortOutcome {
        if !column.allow_sorting {
            debug!("sort click on '{}' ignored: not sortable", column.field);
            return SortOutcome::Ignored;
        }

        let next = self.current(controlled).next_for(&column.field);
        match &self.binding {
            SortBinding::Uncontrolled { .. } => {
                debug!("sort {} -> {}", self.state, next);
                self.state = next.clone();
                SortOutcome::Updated(next)
            }
            SortBinding::Controlled { on_sort } => {
                let token = next.ordering_token();
                debug!("sort intent {:?}", token);
                on_sort(token.clone());
                SortOutcome::Emitted(token)
            }
        }
    }
}

/// Display order of `data` under `state`, as indices into `data`.
///
/// Stable; nulls stay last in both directions. `data` itself is untouched.
pub fn sorted_indices<R: GridRow>(data: &[R], state: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    if !state.is_active() {
        return order;
    }

    let values: Vec<_> = data.iter().map(|row| row.value(&state.field)).collect();
    order.sort_by(|&a, &b| {
        let (va, vb) = (&values[a], &values[b]);
        match (va.is_null(), vb.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match state.direction {
                SortDirection::Desc => vb.compare(va),
                _ => va.compare(vb),
            },
        }
    });
    order
}
