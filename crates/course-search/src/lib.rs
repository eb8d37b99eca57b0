//! Free-text search for course dashboards.
//!
//! This crate provides the boolean query filter shared by the course,
//! published-course and collection lists:
//! - Query tokenization (words, quoted phrases, negation, AND/OR chains)
//! - Evaluation against searchable records, including nested collections
//! - Record profiles for courses, published courses and collections
//! - Versioned search settings

pub mod config;
pub mod error;
pub mod query;
pub mod record;
pub mod types;

// Re-export main types
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use query::{
    evaluate, filter, AndMode, Chain, ChainOperator, EvaluationOptions, QueryParser,
    SearchQueryMatcher, Term, Word,
};
pub use record::{MatchedFields, SearchableRecord};
pub use types::{Course, CourseCollection, PublishedCourse, PublishedItem};
