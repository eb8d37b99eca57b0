//! Free-text query language for course search.
//!
//! This module provides:
//! - Term types (words, quoted phrases, negation, AND/OR chains)
//! - Tokenization of raw search strings
//! - Substring matching with optional case folding
//! - Evaluation of terms against searchable records

mod context;
mod evaluate;
mod expression;
mod matcher;
mod parser;
mod text_match;

// Re-export public types
pub use context::RecordQueryContext;
pub use evaluate::{evaluate, evaluate_indices, AndMode, EvaluationOptions};
pub use expression::{Chain, ChainOperator, Term, Word};
pub use matcher::{filter, SearchQueryMatcher};
pub use parser::{QueryDiagnostic, QueryDiagnosticKind, QueryParser};
pub use text_match::{text_contains, CaseMode, TextNeedle};
