mod categories;
mod pagination;
pub mod panic;
mod questions;
mod signal;

pub use categories::*;
pub use pagination::*;
pub use questions::*;
pub use signal::*;
