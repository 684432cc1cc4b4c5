//! Command-line driver pieces for the earlix recognizer.

pub mod cli;
pub mod input;
pub mod spinner;
