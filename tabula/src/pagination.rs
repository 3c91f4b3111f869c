//! Paging math and page-change intents.
//!
//! The caller owns `{page, page_size, total}` and does the actual fetching.
//! This module only derives what to display and which intents to emit.

use std::fmt;
use std::sync::Arc;

use griddom::{Color, Element, Style};
use log::{debug, trace};

use crate::target::GridTarget;

/// Page-size choices offered when the caller supplies none.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Caller-owned paging state. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            total: 0,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self {
            page,
            page_size,
            total,
            ..Default::default()
        }
    }

    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// `max(1, ceil(total / page_size))`.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Clamp `page` into `[1, total_pages]`.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }

    /// 1-based inclusive row range shown on the current page.
    ///
    /// `None` when there is nothing to show.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.total == 0 || self.page_size == 0 {
            return None;
        }
        let page = self.clamp_page(self.page);
        let start = (page - 1) * self.page_size + 1;
        let end = (page * self.page_size).min(self.total);
        Some((start, end))
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Footer summary text.
    pub fn summary(&self) -> String {
        match self.range() {
            Some((start, end)) => format!("Showing {} to {} of {}", start, end, self.total),
            None => "No results".to_string(),
        }
    }
}

pub type OnPageChange = Arc<dyn Fn(usize) + Send + Sync>;
pub type OnPageSizeChange = Arc<dyn Fn(usize) + Send + Sync>;

/// Callbacks receiving page intents.
#[derive(Clone, Default)]
pub struct PaginationIntents {
    pub on_page_change: Option<OnPageChange>,
    pub on_page_size_change: Option<OnPageSizeChange>,
}

impl PaginationIntents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_page_change(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_page_change = Some(Arc::new(f));
        self
    }

    pub fn on_page_size_change(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_page_size_change = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for PaginationIntents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationIntents")
            .field("on_page_change", &self.on_page_change.is_some())
            .field("on_page_size_change", &self.on_page_size_change.is_some())
            .finish()
    }
}

/// An intent emitted by [`PaginationController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIntent {
    Page(usize),
    PageSize(usize),
}

/// Turns navigation requests into intents over a borrowed state snapshot.
pub struct PaginationController<'a> {
    state: &'a Pagination,
    intents: &'a PaginationIntents,
}

impl<'a> PaginationController<'a> {
    pub fn new(state: &'a Pagination, intents: &'a PaginationIntents) -> Self {
        Self { state, intents }
    }

    /// Request `page`, clamped. Emits nothing if it is already current.
    pub fn go_to(&self, page: usize) -> Vec<PageIntent> {
        let target = self.state.clamp_page(page);
        if target == self.state.page {
            trace!("page {} already current", target);
            return Vec::new();
        }
        debug!("page intent {} -> {}", self.state.page, target);
        if let Some(f) = &self.intents.on_page_change {
            f(target);
        }
        vec![PageIntent::Page(target)]
    }

    pub fn next(&self) -> Vec<PageIntent> {
        self.go_to(self.state.page.saturating_add(1))
    }

    pub fn prev(&self) -> Vec<PageIntent> {
        self.go_to(self.state.page.saturating_sub(1))
    }

    pub fn first(&self) -> Vec<PageIntent> {
        self.go_to(1)
    }

    pub fn last(&self) -> Vec<PageIntent> {
        self.go_to(self.state.total_pages())
    }

    /// Change the page size. Always followed by a reset to page 1.
    ///
    /// Zero is ignored. Picking the current size only resets the page.
    pub fn set_page_size(&self, size: usize) -> Vec<PageIntent> {
        if size == 0 {
            trace!("page size 0 ignored");
            return Vec::new();
        }
        if size == self.state.page_size {
            trace!("page size {} unchanged", size);
            return self.first();
        }
        debug!("page size intent {} -> {}", self.state.page_size, size);
        if let Some(f) = &self.intents.on_page_size_change {
            f(size);
        }
        if let Some(f) = &self.intents.on_page_change {
            f(1);
        }
        vec![PageIntent::PageSize(size), PageIntent::Page(1)]
    }
}

/// Footer under the table: summary, size selector and page buttons.
pub fn render_footer(state: &Pagination, id: &str) -> Element {
    let muted = Style::new().foreground(Color::var("muted"));
    let selected = Style::new().bold();

    let sizes = state.page_size_options.iter().map(|&size| {
        let el = Element::button(size.to_string()).id(format!("{id}-size-{size}"));
        let el = if size == state.page_size {
            el.style(selected.clone())
        } else {
            el
        };
        GridTarget::PageSize { size }.attach(el)
    });

    let last = state.total_pages();
    let nav = |name: &str, label: &str, page: usize, enabled: bool| {
        let el = Element::button(label)
            .id(format!("{id}-page-{name}"))
            .focusable(enabled)
            .disabled(!enabled);
        GridTarget::Page { page }.attach(el)
    };

    Element::row()
        .id(format!("{id}-footer"))
        .gap(2)
        .child(Element::text(state.summary()).id(format!("{id}-summary")).style(muted.clone()))
        .child(
            Element::row()
                .id(format!("{id}-sizes"))
                .gap(1)
                .child(Element::text("Rows per page:").style(muted))
                .children(sizes),
        )
        .child(
            Element::row()
                .id(format!("{id}-nav"))
                .gap(1)
                .child(nav("first", "«", 1, state.can_prev()))
                .child(nav("prev", "‹", state.page.saturating_sub(1).max(1), state.can_prev()))
                .child(
                    Element::text(format!("Page {} of {}", state.clamp_page(state.page), last))
                        .id(format!("{id}-page-label")),
                )
                .child(nav("next", "›", state.clamp_page(state.page + 1), state.can_next()))
                .child(nav("last", "»", last, state.can_next())),
        )
}
