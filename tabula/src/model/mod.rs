//! Row data model: dynamic values, records and row identity.

mod key;
mod record;
mod value;

pub use key::RowKey;
pub use record::{GridRow, Record};
pub use value::{Numeric, Value};
