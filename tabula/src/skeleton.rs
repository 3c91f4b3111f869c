//! Placeholder rows shown while loading.
//!
//! Bar widths are random but held stable for a given row count and set of
//! visible columns, so re-rendering during a load does not flicker. The memo
//! lives as long as the generator (one mounted grid); a second loading
//! episode with the same shape reuses the first one's widths.

use std::ops::Range;

use griddom::{Element, Size, Style};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bar widths, in percent of the cell.
pub const WIDTH_RANGE: Range<u8> = 50..90;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ShapeKey {
    row_count: usize,
    fields: Vec<String>,
}

/// Shape of the table being imitated.
#[derive(Debug, Clone, Copy)]
pub struct SkeletonShape<'a> {
    pub row_count: usize,
    pub fields: &'a [String],
    /// Text width of each visible column, same order as `fields`.
    pub widths: &'a [u16],
    pub checkbox: bool,
    pub actions: bool,
}

#[derive(Debug)]
pub struct SkeletonGenerator {
    rng: StdRng,
    memo: Option<(ShapeKey, Vec<Vec<u8>>)>,
}

impl SkeletonGenerator {
    /// `seed` makes the widths reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng, memo: None }
    }

    /// Widths for every placeholder cell, `[row][column]`.
    pub fn widths(&mut self, row_count: usize, fields: &[String]) -> &[Vec<u8>] {
        let key = ShapeKey {
            row_count,
            fields: fields.to_vec(),
        };
        let stale = self.memo.as_ref().is_none_or(|(k, _)| *k != key);
        if stale {
            debug!(
                "generating skeleton widths for {} rows x {} columns",
                row_count,
                fields.len()
            );
            let rows = (0..row_count)
                .map(|_| {
                    (0..fields.len())
                        .map(|_| self.rng.random_range(WIDTH_RANGE))
                        .collect()
                })
                .collect();
            self.memo = Some((key, rows));
        }
        match &self.memo {
            Some((_, rows)) => rows,
            None => &[],
        }
    }

    /// Exactly `shape.row_count` placeholder rows.
    pub fn render(&mut self, shape: SkeletonShape<'_>, id: &str) -> Vec<Element> {
        let widths = self.widths(shape.row_count, shape.fields).to_vec();
        widths
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let mut el = Element::row().id(format!("{id}-skeleton-{r}")).gap(1);
                if shape.checkbox {
                    el = el.child(Element::checkbox(false).disabled(true).focusable(false));
                }
                for (c, &percent) in row.iter().enumerate() {
                    let width = shape.widths.get(c).copied().unwrap_or(10);
                    let bar = Element::placeholder(percent)
                        .width(Size::Percent(f32::from(percent) / 100.0));
                    el = el.child(Element::row().width(Size::Fixed(width)).child(bar));
                }
                if shape.actions {
                    el = el.child(Element::placeholder(100).width(Size::Fixed(3)));
                }
                el.style(Style::new().dim())
            })
            .collect()
    }
}
