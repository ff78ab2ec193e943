//! Shared models

mod side;
mod span;

pub use side::Side;
pub use span::ByteSpan;
