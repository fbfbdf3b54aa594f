// Error reporting for callers of the parser

mod display;

// Re-export all public symbols
pub use display::*;
