#![forbid(unsafe_code)]

pub mod model;
pub mod screen;
pub mod time;

pub use time::Clock;
