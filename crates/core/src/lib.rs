#![forbid(unsafe_code)]

pub mod model;
pub mod spiral;

pub use model::*;
