//! Substring matching for query words.

use std::borrow::Cow;

use memchr::memmem;

/// How a needle is compared against record text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Sensitive,
    Insensitive,
}

impl CaseMode {
    /// Folds `value` into the form used for comparison under this mode.
    pub fn fold<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(value),
            Self::Insensitive => Cow::Owned(value.to_lowercase()),
        }
    }
}

/// A needle prepared once and tested against many haystacks.
pub struct TextNeedle<'a> {
    folded: Cow<'a, str>,
    mode: CaseMode,
    finder: memmem::Finder<'static>,
}

impl<'a> TextNeedle<'a> {
    pub fn new(value: &'a str, mode: CaseMode) -> Self {
        let folded = mode.fold(value);
        let finder = memmem::Finder::new(folded.as_bytes()).into_owned();
        Self {
            folded,
            mode,
            finder,
        }
    }

    pub fn text(&self) -> &str {
        self.folded.as_ref()
    }

    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    /// Tests a haystack that has already been folded with [`CaseMode::fold`].
    pub fn is_in_folded(&self, folded_haystack: &str) -> bool {
        self.finder.find(folded_haystack.as_bytes()).is_some()
    }

    /// Folds the haystack under this needle's mode, then tests it.
    pub fn is_in(&self, haystack: &str) -> bool {
        self.is_in_folded(self.mode.fold(haystack).as_ref())
    }
}

/// One-off substring test.
pub fn text_contains(haystack: &str, needle: &str, mode: CaseMode) -> bool {
    TextNeedle::new(needle, mode).is_in(haystack)
}
