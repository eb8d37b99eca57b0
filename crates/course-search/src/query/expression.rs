//! Query term types produced by the tokenizer.

/// Operator joining the operands of a [`Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOperator {
    And,
    Or,
}

impl ChainOperator {
    /// Maps an operator keyword to its operator. Keywords are case-sensitive.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            AND_KEYWORD => Some(Self::And),
            OR_KEYWORD => Some(Self::Or),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => AND_KEYWORD,
            Self::Or => OR_KEYWORD,
        }
    }
}

pub(crate) const AND_KEYWORD: &str = "AND";
pub(crate) const OR_KEYWORD: &str = "OR";

/// Returns true for a bare operator keyword, which is never a searchable word.
pub(crate) fn is_operator_keyword(value: &str) -> bool {
    ChainOperator::from_keyword(value).is_some()
}

/// A single searchable word or quoted phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    negated: bool,
    exact: bool,
}

impl Word {
    /// Builds a word, rejecting text that is empty after trimming.
    pub fn new(text: impl Into<String>, negated: bool, exact: bool) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text,
            negated,
            exact,
        })
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// True when the word carried a leading `-`.
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// True when the word was quote-delimited.
    pub fn exact(&self) -> bool {
        self.exact
    }
}

/// Two or more words joined uniformly by one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    operator: ChainOperator,
    operands: Vec<Word>,
}

impl Chain {
    /// Builds a chain; fewer than two operands is not a chain.
    pub fn new(operator: ChainOperator, operands: Vec<Word>) -> Option<Self> {
        if operands.len() < 2 {
            return None;
        }
        Some(Self { operator, operands })
    }

    pub fn operator(&self) -> ChainOperator {
        self.operator
    }

    pub fn operands(&self) -> &[Word] {
        self.operands.as_slice()
    }
}

/// One top-level unit of a tokenized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Word(Word),
    Chain(Chain),
}

impl Term {
    /// Iterates every word in the term, chain operands included.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        let words: &[Word] = match self {
            Term::Word(word) => std::slice::from_ref(word),
            Term::Chain(chain) => chain.operands(),
        };
        words.iter()
    }
}
