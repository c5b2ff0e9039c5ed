//! resume-intel library
//!
//! Deterministic heuristics for matching a resume against a job posting,
//! scoring interview answers and resume bullets, and generating an
//! ATS-friendly resume reference with a simulated recruiter review.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod review;

pub use config::Config;
pub use error::{Result, ResumeIntelError};
pub use processing::analyzer::ResumeAnalyzer;
