#![forbid(unsafe_code)]

mod merge;
mod names;
mod plot;

pub use merge::*;
pub use names::*;
pub use plot::*;
