//! The contract a record satisfies to take part in free-text search.

use bitflags::bitflags;

/// Text fields and nested children exposed to the query evaluator.
///
/// Implementations are plain field mappings; all matching logic lives in
/// the evaluator. Missing optional fields never match.
pub trait SearchableRecord {
    /// The record's display name. Always searched.
    fn primary_text(&self) -> &str;

    /// A longer description, if any.
    fn secondary_text(&self) -> Option<&str> {
        None
    }

    /// A stable id or path, if any.
    fn identifier_text(&self) -> Option<&str> {
        None
    }

    /// Short labels such as concept names.
    fn tags(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Extra searchable strings that point at related data, e.g. the
    /// source course a published course was made from.
    fn reference_texts(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Nested records. A record matches when any descendant matches.
    fn children(&self) -> Vec<&dyn SearchableRecord> {
        Vec::new()
    }
}

impl<T: SearchableRecord + ?Sized> SearchableRecord for &T {
    fn primary_text(&self) -> &str {
        (**self).primary_text()
    }

    fn secondary_text(&self) -> Option<&str> {
        (**self).secondary_text()
    }

    fn identifier_text(&self) -> Option<&str> {
        (**self).identifier_text()
    }

    fn tags(&self) -> Vec<&str> {
        (**self).tags()
    }

    fn reference_texts(&self) -> Vec<&str> {
        (**self).reference_texts()
    }

    fn children(&self) -> Vec<&dyn SearchableRecord> {
        (**self).children()
    }
}

// ---------------------------------------------------------------------------
// Matched field flags
// ---------------------------------------------------------------------------

bitflags! {
    /// Which fields of a record contained a query word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MatchedFields: u8 {
        const PRIMARY    = 0b0000_0001;
        const SECONDARY  = 0b0000_0010;
        const IDENTIFIER = 0b0000_0100;
        const TAG        = 0b0000_1000;
        const REFERENCE  = 0b0001_0000;
        const CHILD      = 0b0010_0000;
    }
}

impl MatchedFields {
    /// Human-readable name of the highest-priority matched field.
    pub fn describe(self) -> &'static str {
        if self.contains(Self::PRIMARY) {
            "name"
        } else if self.contains(Self::SECONDARY) {
            "description"
        } else if self.contains(Self::IDENTIFIER) {
            "id"
        } else if self.contains(Self::TAG) {
            "tag"
        } else if self.contains(Self::REFERENCE) {
            "source course"
        } else if self.contains(Self::CHILD) {
            "child"
        } else {
            "none"
        }
    }
}
