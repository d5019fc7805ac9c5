mod shortener;

pub use shortener::{HttpShortener, Shortener};
