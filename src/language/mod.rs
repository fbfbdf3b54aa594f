// Types representing a calendar-aware span of time

mod magnitude;
mod timespan;

// Re-export all public symbols
pub use magnitude::*;
pub use timespan::*;
