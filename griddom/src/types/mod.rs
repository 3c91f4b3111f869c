mod color;
mod enums;
mod style;

pub use color::*;
pub use enums::*;
pub use style::*;
