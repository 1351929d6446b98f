//! Command implementations

mod check;
mod demo;

pub use check::{CheckArgs, check};
pub use demo::demo;
