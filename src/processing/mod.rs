//! Resume scoring and keyword matching

pub mod resume;
pub mod lexicon;
pub mod text_processor;
pub mod ats_scorer;
pub mod keyword_matcher;
pub mod analyzer;
