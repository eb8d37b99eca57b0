//! Per-call view of a record with its fields folded for comparison.

use std::borrow::Cow;

use crate::record::{MatchedFields, SearchableRecord};

use super::text_match::{CaseMode, TextNeedle};

/// Query context for matching words against one record.
///
/// Fields are folded once for a given [`CaseMode`] so that every word of a
/// query can be tested without re-lowercasing the record. Children are
/// folded recursively.
pub struct RecordQueryContext<'r> {
    primary: Cow<'r, str>,
    secondary: Option<Cow<'r, str>>,
    identifier: Option<Cow<'r, str>>,
    tags: Vec<Cow<'r, str>>,
    references: Vec<Cow<'r, str>>,
    children: Vec<RecordQueryContext<'r>>,
}

impl<'r> RecordQueryContext<'r> {
    pub fn new<R>(record: &'r R, mode: CaseMode) -> Self
    where
        R: SearchableRecord + ?Sized,
    {
        Self {
            primary: mode.fold(record.primary_text()),
            secondary: record.secondary_text().map(|value| mode.fold(value)),
            identifier: record.identifier_text().map(|value| mode.fold(value)),
            tags: record
                .tags()
                .into_iter()
                .map(|value| mode.fold(value))
                .collect(),
            references: record
                .reference_texts()
                .into_iter()
                .map(|value| mode.fold(value))
                .collect(),
            children: record
                .children()
                .into_iter()
                .map(|child| RecordQueryContext::new(child, mode))
                .collect(),
        }
    }

    /// Returns true when any field, or any descendant, contains the needle.
    pub fn matches(&self, needle: &TextNeedle<'_>) -> bool {
        needle.is_in_folded(self.primary.as_ref())
            || self
                .secondary
                .as_deref()
                .is_some_and(|value| needle.is_in_folded(value))
            || self
                .identifier
                .as_deref()
                .is_some_and(|value| needle.is_in_folded(value))
            || self.tags.iter().any(|value| needle.is_in_folded(value))
            || self
                .references
                .iter()
                .any(|value| needle.is_in_folded(value))
            || self.children.iter().any(|child| child.matches(needle))
    }

    /// Reports every field that contains the needle.
    pub fn matched_fields(&self, needle: &TextNeedle<'_>) -> MatchedFields {
        let mut fields = MatchedFields::empty();
        fields.set(
            MatchedFields::PRIMARY,
            needle.is_in_folded(self.primary.as_ref()),
        );
        fields.set(
            MatchedFields::SECONDARY,
            self.secondary
                .as_deref()
                .is_some_and(|value| needle.is_in_folded(value)),
        );
        fields.set(
            MatchedFields::IDENTIFIER,
            self.identifier
                .as_deref()
                .is_some_and(|value| needle.is_in_folded(value)),
        );
        fields.set(
            MatchedFields::TAG,
            self.tags.iter().any(|value| needle.is_in_folded(value)),
        );
        fields.set(
            MatchedFields::REFERENCE,
            self.references
                .iter()
                .any(|value| needle.is_in_folded(value)),
        );
        fields.set(
            MatchedFields::CHILD,
            self.children.iter().any(|child| child.matches(needle)),
        );
        fields
    }

    pub fn primary(&self) -> &str {
        self.primary.as_ref()
    }
}
