//! Text styling types
//!
//! Only the font subset that rich text runs carry:
//! - [`RunFont`] - Partial font settings of a run
//! - [`Underline`] - Underline styles
//! - [`Color`] - Color representation

mod color;
mod font;

pub use color::Color;
pub use font::{RunFont, Underline};
