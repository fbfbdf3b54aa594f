// Compiled-once regular expressions for the recognizers

mod cache;
