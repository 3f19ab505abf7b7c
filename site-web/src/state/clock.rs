//! Clock context
//!
//! The footer derives its copyright year from whatever [`Clock`] is in context. The app
//! provides [`Clock::System`]; tests pin a date with [`Clock::Fixed`].

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local wall clock, read on every call
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => lib_utils::today_local(),
            Clock::Fixed(date) => *date,
        }
    }

    pub fn year(&self) -> i32 {
        self.today().year()
    }
}

pub fn provide_clock(clock: Clock) -> Clock {
    provide_context(clock);
    clock
}

/// The clock in context, or the system clock when none was provided.
pub fn use_clock() -> Clock {
    use_context::<Clock>().unwrap_or_default()
}
