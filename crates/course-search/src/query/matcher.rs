//! Compiled query matcher for filter operations.

use crate::record::SearchableRecord;

use super::evaluate::{evaluate, evaluate_indices, EvaluationOptions};
use super::expression::Term;
use super::parser::QueryParser;

/// A query tokenized once and evaluated against any number of record lists.
#[derive(Debug, Clone)]
pub struct SearchQueryMatcher {
    raw: String,
    terms: Vec<Term>,
    options: EvaluationOptions,
}

impl SearchQueryMatcher {
    /// Compiles a raw query string. Never fails: dropped fragments simply
    /// contribute no terms.
    pub fn compile(raw_query: &str) -> Self {
        Self {
            raw: raw_query.to_string(),
            terms: QueryParser::tokenize(raw_query),
            options: EvaluationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EvaluationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    pub fn terms(&self) -> &[Term] {
        self.terms.as_slice()
    }

    pub fn options(&self) -> EvaluationOptions {
        self.options
    }

    /// True when the query filters nothing out.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the matching records of `records` in result order.
    pub fn filter<'r, R>(&self, records: &'r [R]) -> Vec<&'r R>
    where
        R: SearchableRecord,
    {
        log::debug!(
            "filtering {} records with query '{}' ({} terms)",
            records.len(),
            self.raw,
            self.terms.len()
        );
        let filtered = evaluate(&self.terms, records, self.options);
        log::debug!("query '{}' kept {} records", self.raw, filtered.len());
        filtered
    }

    /// Returns positions into `records` of the matching records, in result order.
    pub fn filter_indices<R>(&self, records: &[R]) -> Vec<usize>
    where
        R: SearchableRecord,
    {
        evaluate_indices(&self.terms, records, self.options)
    }

    /// Returns the non-negated word texts for highlighting matches.
    ///
    /// Texts are deduplicated case-insensitively and kept in discovery order.
    pub fn highlight_terms(&self) -> Vec<String> {
        let mut seen = Vec::<String>::new();
        let mut terms = Vec::new();
        for word in self.terms.iter().flat_map(Term::words) {
            if word.negated() {
                continue;
            }
            let folded = word.text().to_lowercase();
            if seen.contains(&folded) {
                continue;
            }
            seen.push(folded);
            terms.push(word.text().to_string());
        }
        terms
    }
}

/// Filters `records` by a raw query with default options.
///
/// Equivalent to tokenizing the query and evaluating the terms.
pub fn filter<'r, R>(query: &str, records: &'r [R]) -> Vec<&'r R>
where
    R: SearchableRecord,
{
    SearchQueryMatcher::compile(query).filter(records)
}
