//! Sub-day duration literals such as `1h30m`, `-1.5s` or `500ms`.
//!
//! The grammar is a sequence of number and unit pairs with an optional
//! leading sign. Units are `ns`, `us` (or `µs`, `μs`), `ms`, `s`, `m`, and
//! `h`; numbers may carry a fractional part. A bare `0` is also accepted.
//! Values are held as a [`TimeDelta`] with nanosecond resolution and are
//! limited to the range of a signed 64-bit count of nanoseconds.

mod format;
mod parse;

// Re-export all public symbols
pub use format::*;
pub use parse::*;

pub use chrono::TimeDelta;
