//! Input processing module
//! Handles file detection, resume loading and job description text extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
