pub mod analyzer;
pub mod classify;
pub mod heuristics;

pub use analyzer::CommentAnalyzer;
pub use classify::ClassificationPipeline;
