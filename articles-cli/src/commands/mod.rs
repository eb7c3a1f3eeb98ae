//! Command implementations for the articles CLI

pub mod serve;

pub use serve::run_serve;
