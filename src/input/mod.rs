//! Input processing module
//! Turns resume, job posting and profile files into plain text

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
