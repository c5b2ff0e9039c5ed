//! Recruiter persona simulation and percentile benchmark

pub mod benchmark;
pub mod simulation;
