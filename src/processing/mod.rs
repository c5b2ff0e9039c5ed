//! Text processing and analysis module

pub mod lexicon;
pub mod text_processor;
pub mod skill_matcher;
pub mod role_classifier;
pub mod profile;
pub mod match_engine;
pub mod quality;
pub mod analyzer;
