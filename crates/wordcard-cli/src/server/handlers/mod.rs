//! API request handlers.

mod images;
mod words;

pub use images::*;
pub use words::*;
