//! Query tokenizer.
//!
//! Scans a raw search string left to right and yields the top-level terms.
//! At each position the longest operator chain wins, then a single word or
//! phrase; anything else is skipped one character at a time. Scanning never
//! fails: dropped fragments are recorded as diagnostics instead.

use crate::error::{Result, SearchError};

use super::expression::{is_operator_keyword, Chain, ChainOperator, Term, Word};

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryDiagnosticKind {
    /// Characters that start neither a word nor a chain.
    MalformedFragment,
    /// A chain mixing `AND` and `OR`; the whole chain is dropped.
    HeterogeneousChain,
    /// An `AND`/`OR` keyword outside of a chain.
    DanglingOperator,
}

impl QueryDiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MalformedFragment => "malformed fragment",
            Self::HeterogeneousChain => "chain mixes AND and OR",
            Self::DanglingOperator => "operator without operands",
        }
    }
}

/// A fragment of the query that contributed no term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDiagnostic {
    /// Byte offset of the fragment in the raw query.
    pub position: usize,
    pub fragment: String,
    pub kind: QueryDiagnosticKind,
}

// ---------------------------------------------------------------------------
// Query parser
// ---------------------------------------------------------------------------

pub struct QueryParser<'a> {
    input: &'a str,
    cursor: usize,
    terms: Vec<Term>,
    diagnostics: Vec<QueryDiagnostic>,
}

impl<'a> QueryParser<'a> {
    /// Tokenizes a raw query into its top-level terms.
    ///
    /// An empty or unparseable query yields no terms, which callers treat
    /// as "no filtering".
    pub fn tokenize(input: &str) -> Vec<Term> {
        QueryParser::new(input).scan().0
    }

    /// Returns the fragments [`QueryParser::tokenize`] would drop.
    pub fn diagnostics(input: &str) -> Vec<QueryDiagnostic> {
        QueryParser::new(input).scan().1
    }

    /// Tokenizes a raw query, failing on the first dropped fragment.
    pub fn parse_strict(input: &str) -> Result<Vec<Term>> {
        let (terms, diagnostics) = QueryParser::new(input).scan();
        match diagnostics.first() {
            None => Ok(terms),
            Some(diagnostic) => Err(SearchError::QueryParse(format!(
                "{} near byte {}: '{}'",
                diagnostic.kind.as_str(),
                diagnostic.position,
                diagnostic.fragment
            ))),
        }
    }

    fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            terms: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn scan(mut self) -> (Vec<Term>, Vec<QueryDiagnostic>) {
        while let Some(ch) = self.input[self.cursor..].chars().next() {
            if ch.is_whitespace() {
                self.cursor += ch.len_utf8();
                continue;
            }

            let start = self.cursor;
            if let Some(chain) = scan_chain(self.input, start) {
                self.cursor = chain.end;
                self.push_chain(chain, start);
                continue;
            }

            if let Some((raw, end)) = scan_word(self.input, start) {
                self.cursor = end;
                if raw.is_operator_keyword() {
                    self.record(QueryDiagnosticKind::DanglingOperator, start, end);
                } else if let Some(word) = raw.into_word() {
                    self.terms.push(Term::Word(word));
                } else {
                    self.record(QueryDiagnosticKind::MalformedFragment, start, end);
                }
                continue;
            }

            self.cursor += ch.len_utf8();
            self.record(QueryDiagnosticKind::MalformedFragment, start, self.cursor);
        }

        (self.terms, self.diagnostics)
    }

    fn push_chain(&mut self, chain: ChainScan<'a>, start: usize) {
        let Some(operator) = chain.uniform_operator() else {
            self.record(QueryDiagnosticKind::HeterogeneousChain, start, chain.end);
            return;
        };

        let mut operands = chain
            .operands
            .into_iter()
            .filter_map(RawWord::into_word)
            .collect::<Vec<_>>();
        match operands.len() {
            0 => self.record(QueryDiagnosticKind::MalformedFragment, start, chain.end),
            1 => self.terms.push(Term::Word(operands.remove(0))),
            _ => {
                if let Some(chain) = Chain::new(operator, operands) {
                    self.terms.push(Term::Chain(chain));
                }
            }
        }
    }

    fn record(&mut self, kind: QueryDiagnosticKind, start: usize, end: usize) {
        // Runs of skipped characters collapse into one fragment.
        if kind == QueryDiagnosticKind::MalformedFragment {
            if let Some(last) = self.diagnostics.last_mut() {
                if last.kind == kind && last.position + last.fragment.len() == start {
                    last.fragment.push_str(&self.input[start..end]);
                    return;
                }
            }
        }

        log::trace!(
            "dropping query fragment '{}' at byte {start}: {}",
            &self.input[start..end],
            kind.as_str()
        );
        self.diagnostics.push(QueryDiagnostic {
            position: start,
            fragment: self.input[start..end].to_string(),
            kind,
        });
    }
}

// ---------------------------------------------------------------------------
// Scanning primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct RawWord<'a> {
    text: &'a str,
    negated: bool,
    exact: bool,
}

impl RawWord<'_> {
    fn is_operator_keyword(&self) -> bool {
        !self.exact && is_operator_keyword(self.text)
    }

    fn into_word(self) -> Option<Word> {
        Word::new(self.text, self.negated, self.exact)
    }
}

struct ChainScan<'a> {
    operators: Vec<ChainOperator>,
    operands: Vec<RawWord<'a>>,
    end: usize,
}

impl ChainScan<'_> {
    fn uniform_operator(&self) -> Option<ChainOperator> {
        let (first, rest) = self.operators.split_first()?;
        rest.iter().all(|operator| operator == first).then_some(*first)
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '\''
}

fn skip_whitespace(input: &str, start: usize) -> usize {
    let rest = &input[start..];
    start + (rest.len() - rest.trim_start().len())
}

/// Scans `-? ( "phrase" | bare-word )` starting exactly at `start`.
fn scan_word(input: &str, start: usize) -> Option<(RawWord<'_>, usize)> {
    let mut cursor = start;
    let negated = input[cursor..].starts_with('-');
    if negated {
        cursor += 1;
    }

    let rest = &input[cursor..];
    if let Some(body) = rest.strip_prefix('"') {
        let close = body.find('"')?;
        let word = RawWord {
            text: &body[..close],
            negated,
            exact: true,
        };
        return Some((word, cursor + close + 2));
    }

    let len = rest
        .char_indices()
        .find(|(_, ch)| !is_word_char(*ch))
        .map_or(rest.len(), |(index, _)| index);
    if len == 0 {
        return None;
    }
    let word = RawWord {
        text: &rest[..len],
        negated,
        exact: false,
    };
    Some((word, cursor + len))
}

/// Scans `whitespace+ (AND|OR) whitespace+`, returning the operator and the
/// offset of the next operand.
fn scan_operator(input: &str, start: usize) -> Option<(ChainOperator, usize)> {
    let keyword_start = skip_whitespace(input, start);
    if keyword_start == start {
        return None;
    }

    let rest = &input[keyword_start..];
    let keyword_len = rest.find(char::is_whitespace)?;
    let operator = ChainOperator::from_keyword(&rest[..keyword_len])?;
    Some((operator, skip_whitespace(input, keyword_start + keyword_len)))
}

/// Scans the longest chain starting at `start`, accepting either operator
/// so that a mixed chain is consumed as one fragment.
fn scan_chain(input: &str, start: usize) -> Option<ChainScan<'_>> {
    let (first, mut end) = scan_word(input, start)?;
    if first.is_operator_keyword() {
        return None;
    }

    let mut operators = Vec::new();
    let mut operands = vec![first];
    while let Some((operator, operand_start)) = scan_operator(input, end) {
        let Some((operand, operand_end)) = scan_word(input, operand_start) else {
            break;
        };
        if operand.is_operator_keyword() {
            break;
        }
        operators.push(operator);
        operands.push(operand);
        end = operand_end;
    }

    if operators.is_empty() {
        return None;
    }
    Some(ChainScan {
        operators,
        operands,
        end,
    })
}
