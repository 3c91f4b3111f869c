pub mod element;
pub mod text;
pub mod types;

pub use element::{collect_text, find_all, find_element, path_to, Content, Element};
pub use types::*;
