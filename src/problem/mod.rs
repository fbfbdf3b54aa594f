// Longer explanations of parse failures, for humans

mod messages;

// Re-export all public symbols
pub use messages::*;
