//! Resume Shortlist CLI

pub mod cli;
pub mod client;
pub mod error;
pub mod progress;
pub mod report;
pub mod scanner;
