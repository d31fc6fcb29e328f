pub mod affiliation;
pub mod analyzer;
pub mod catalog;
pub mod engine;
pub mod ranker;
pub mod summarizer;
pub mod taxonomy;

pub use affiliation::AffiliationResolver;
pub use analyzer::AnswerAnalyzer;
pub use catalog::Catalog;
pub use engine::RecommendationEngine;
pub use ranker::{format_label, MatchRanker};
pub use summarizer::AnalysisSummarizer;
pub use taxonomy::Taxonomy;
