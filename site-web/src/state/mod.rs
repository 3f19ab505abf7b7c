//! Context state shared by components

pub mod clock;

pub use clock::{provide_clock, use_clock, Clock};
