//! Per-row and bulk actions.

use std::fmt;
use std::sync::Arc;

use griddom::{Color, Element, Style};
use log::debug;

use crate::target::{GridTarget, TOOLTIP_KEY};

pub type RowHandler<R> = Arc<dyn Fn(&R) + Send + Sync>;
pub type RowPredicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;
pub type BulkHandler<R> = Arc<dyn Fn(&[&R]) + Send + Sync>;

/// Visual weight of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    #[default]
    Default,
    Destructive,
}

/// One action offered on every row it is not hidden for.
pub struct Action<R> {
    pub label: String,
    pub icon: Option<String>,
    pub on_click: RowHandler<R>,
    pub variant: ActionVariant,
    pub hidden: Option<RowPredicate<R>>,
}

impl<R> Clone for Action<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            on_click: Arc::clone(&self.on_click),
            variant: self.variant,
            hidden: self.hidden.clone(),
        }
    }
}

impl<R> fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .field("hidden", &self.hidden.is_some())
            .finish()
    }
}

impl<R> Action<R> {
    pub fn new(label: impl Into<String>, on_click: impl Fn(&R) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            on_click: Arc::new(on_click),
            variant: ActionVariant::Default,
            hidden: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ActionVariant::Destructive;
        self
    }

    /// Hide the action for rows where `predicate` returns true.
    pub fn hidden(mut self, predicate: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.hidden = Some(Arc::new(predicate));
        self
    }

    pub fn is_hidden(&self, row: &R) -> bool {
        self.hidden.as_ref().is_some_and(|hidden| hidden(row))
    }

    pub fn invoke(&self, row: &R) {
        debug!("action '{}' invoked", self.label);
        (self.on_click)(row);
    }
}

/// How row actions are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionMode {
    /// One trigger opening a menu.
    #[default]
    Dropdown,
    /// One icon button per action.
    Icons,
}

pub struct ActionConfig<R> {
    pub mode: ActionMode,
    /// Icons mode only: paint buttons only while the row is hovered.
    pub show_on_hover: bool,
    pub actions: Vec<Action<R>>,
}

impl<R> Clone for ActionConfig<R> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            show_on_hover: self.show_on_hover,
            actions: self.actions.clone(),
        }
    }
}

impl<R> fmt::Debug for ActionConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionConfig")
            .field("mode", &self.mode)
            .field("show_on_hover", &self.show_on_hover)
            .field("actions", &self.actions)
            .finish()
    }
}

impl<R> ActionConfig<R> {
    pub fn new(mode: ActionMode) -> Self {
        Self {
            mode,
            show_on_hover: false,
            actions: Vec::new(),
        }
    }

    pub fn dropdown() -> Self {
        Self::new(ActionMode::Dropdown)
    }

    pub fn icons() -> Self {
        Self::new(ActionMode::Icons)
    }

    pub fn show_on_hover(mut self, show_on_hover: bool) -> Self {
        self.show_on_hover = show_on_hover;
        self
    }

    pub fn action(mut self, action: Action<R>) -> Self {
        self.actions.push(action);
        self
    }
}

/// Actions of `config` visible for `row`, with their index in `config.actions`.
pub fn resolve<'a, R>(config: &'a ActionConfig<R>, row: &R) -> Vec<(usize, &'a Action<R>)> {
    config
        .actions
        .iter()
        .enumerate()
        .filter(|(_, action)| !action.is_hidden(row))
        .collect()
}

/// Where a row's action cell stands for one render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowActionState {
    pub hovered: bool,
    pub menu_open: bool,
}

/// Action cell content for the row at `index`, or `None` when no action
/// is visible for it.
pub fn render_row_actions<R>(
    config: &ActionConfig<R>,
    row: &R,
    index: usize,
    state: RowActionState,
    id: &str,
) -> Option<Element> {
    let visible = resolve(config, row);
    if visible.is_empty() {
        return None;
    }

    let el = match config.mode {
        ActionMode::Dropdown => {
            let trigger = GridTarget::MenuToggle { index }.attach(
                Element::button("⋯")
                    .id(format!("{id}-row-{index}-menu"))
                    .data(TOOLTIP_KEY, "Actions"),
            );
            let mut menu = Element::col().id(format!("{id}-row-{index}-actions")).child(trigger);
            if state.menu_open {
                let items = visible.iter().map(|&(i, action)| {
                    let label = match &action.icon {
                        Some(icon) => format!("{icon} {}", action.label),
                        None => action.label.clone(),
                    };
                    let item = Element::button(label)
                        .id(format!("{id}-row-{index}-action-{i}"))
                        .style(variant_style(action.variant));
                    GridTarget::Action { index, action: i }.attach(item)
                });
                menu = menu.child(
                    Element::col()
                        .id(format!("{id}-row-{index}-menu-items"))
                        .children(items),
                );
            }
            menu
        }
        ActionMode::Icons => {
            let suppressed = config.show_on_hover && !state.hovered;
            let buttons = visible.iter().map(|&(i, action)| {
                let face = action.icon.as_deref().unwrap_or(&action.label);
                let mut style = variant_style(action.variant);
                if suppressed {
                    style = style.transparent();
                }
                let button = Element::button(face)
                    .id(format!("{id}-row-{index}-action-{i}"))
                    .data(TOOLTIP_KEY, action.label.clone())
                    .style(style);
                GridTarget::Action { index, action: i }.attach(button)
            });
            Element::row()
                .id(format!("{id}-row-{index}-actions"))
                .gap(1)
                .children(buttons)
        }
    };
    Some(el)
}

fn variant_style(variant: ActionVariant) -> Style {
    match variant {
        ActionVariant::Default => Style::new(),
        ActionVariant::Destructive => Style::new().foreground(Color::var("destructive")),
    }
}

/// An action applied to every selected row at once.
pub struct BulkAction<R> {
    pub label: String,
    pub icon: Option<String>,
    pub on_click: BulkHandler<R>,
}

impl<R> Clone for BulkAction<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            on_click: Arc::clone(&self.on_click),
        }
    }
}

impl<R> fmt::Debug for BulkAction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkAction")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish()
    }
}

impl<R> BulkAction<R> {
    pub fn new(label: impl Into<String>, on_click: impl Fn(&[&R]) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            on_click: Arc::new(on_click),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn invoke(&self, rows: &[&R]) {
        debug!("bulk action '{}' invoked on {} rows", self.label, rows.len());
        (self.on_click)(rows);
    }
}

pub struct BulkActionConfig<R> {
    pub enabled: bool,
    pub actions: Vec<BulkAction<R>>,
}

impl<R> Clone for BulkActionConfig<R> {
    fn clone(&self) -> Self {
        Self {
            enabled: self.enabled,
            actions: self.actions.clone(),
        }
    }
}

impl<R> fmt::Debug for BulkActionConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkActionConfig")
            .field("enabled", &self.enabled)
            .field("actions", &self.actions)
            .finish()
    }
}

impl<R> Default for BulkActionConfig<R> {
    fn default() -> Self {
        Self {
            enabled: true,
            actions: Vec::new(),
        }
    }
}

impl<R> BulkActionConfig<R> {
    /// Enabled, with no actions yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn action(mut self, action: BulkAction<R>) -> Self {
        self.actions.push(action);
        self
    }
}

/// Toolbar above the table while rows are selected.
pub fn render_bulk_toolbar<R>(config: &BulkActionConfig<R>, selected: usize, id: &str) -> Element {
    let buttons = config.actions.iter().enumerate().map(|(i, action)| {
        let label = match &action.icon {
            Some(icon) => format!("{icon} {}", action.label),
            None => action.label.clone(),
        };
        GridTarget::Bulk { action: i }.attach(Element::button(label).id(format!("{id}-bulk-{i}")))
    });

    Element::row()
        .id(format!("{id}-toolbar"))
        .gap(2)
        .child(Element::text(format!("{selected} selected")).id(format!("{id}-toolbar-count")))
        .children(buttons)
}
