//! Command implementations

mod poll;

pub use poll::poll;
