//! Query evaluation against a list of searchable records.
//!
//! Terms fold left to right into an ordered, deduplicated accumulator:
//! - a plain word appends its matches;
//! - a negated word removes its matches, seeding the accumulator with the
//!   whole input first when it is still empty;
//! - a chain evaluates each operand against the whole input, folds the
//!   operand results with its operator, then appends the folded result.
//!
//! Within one term records keep input order; across terms, discovery order
//! wins. Records are identified by their position in the input slice.

use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};

use crate::record::SearchableRecord;

use super::context::RecordQueryContext;
use super::expression::{Chain, ChainOperator, Term, Word};
use super::text_match::{CaseMode, TextNeedle};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How the operands of an `AND` chain are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AndMode {
    /// Records must match every operand.
    #[default]
    Intersect,
    /// Records may match any operand, same as `OR`.
    Union,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationOptions {
    pub and_mode: AndMode,
    /// When false, quoted phrases match case-insensitively like bare words.
    pub case_sensitive_phrases: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            and_mode: AndMode::Intersect,
            case_sensitive_phrases: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Filters `input` by the tokenized `terms`.
///
/// Returns a deduplicated subsequence of `input` in term discovery order.
/// An empty term list returns the whole input unchanged.
pub fn evaluate<'r, R>(terms: &[Term], input: &'r [R], options: EvaluationOptions) -> Vec<&'r R>
where
    R: SearchableRecord,
{
    evaluate_indices(terms, input, options)
        .into_iter()
        .map(|index| &input[index])
        .collect()
}

/// Like [`evaluate`], but returns positions into `input`.
pub fn evaluate_indices<R>(terms: &[Term], input: &[R], options: EvaluationOptions) -> Vec<usize>
where
    R: SearchableRecord,
{
    if terms.is_empty() {
        return (0..input.len()).collect();
    }

    let mut evaluator = Evaluator::new(input, options);
    let mut acc = OrderedIndexSet::default();
    for term in terms {
        match term {
            Term::Word(word) if word.negated() => {
                if acc.is_empty() {
                    acc.extend(0..input.len());
                }
                let excluded = evaluator.word_matches(word);
                acc.remove_all(&excluded);
            }
            Term::Word(word) => {
                let matched = evaluator.word_matches(word);
                acc.extend(matched);
            }
            Term::Chain(chain) => {
                let folded = evaluator.chain_matches(chain);
                acc.extend(folded.into_vec());
            }
        }
    }

    acc.into_vec()
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

struct Evaluator<'r, R> {
    input: &'r [R],
    options: EvaluationOptions,
    // Folded contexts are built on first use and reused by later words.
    insensitive: Vec<Option<RecordQueryContext<'r>>>,
    sensitive: Vec<Option<RecordQueryContext<'r>>>,
}

impl<'r, R> Evaluator<'r, R>
where
    R: SearchableRecord,
{
    fn new(input: &'r [R], options: EvaluationOptions) -> Self {
        Self {
            input,
            options,
            insensitive: std::iter::repeat_with(|| None).take(input.len()).collect(),
            sensitive: std::iter::repeat_with(|| None).take(input.len()).collect(),
        }
    }

    fn case_mode(&self, word: &Word) -> CaseMode {
        if word.exact() && self.options.case_sensitive_phrases {
            CaseMode::Sensitive
        } else {
            CaseMode::Insensitive
        }
    }

    /// Positions of the records containing the word's text, in input order.
    /// Negation is ignored here; callers decide how to apply it.
    fn word_matches(&mut self, word: &Word) -> Vec<usize> {
        let mode = self.case_mode(word);
        let needle = TextNeedle::new(word.text(), mode);
        let input = self.input;
        let contexts = match mode {
            CaseMode::Sensitive => &mut self.sensitive,
            CaseMode::Insensitive => &mut self.insensitive,
        };

        let mut matched = Vec::new();
        for (index, slot) in contexts.iter_mut().enumerate() {
            let context = slot.get_or_insert_with(|| RecordQueryContext::new(&input[index], mode));
            if context.matches(&needle) {
                log::trace!(
                    "'{}' matched by {} -> {}",
                    word.text(),
                    context.matched_fields(&needle).describe(),
                    input[index].primary_text()
                );
                matched.push(index);
            }
        }
        matched
    }

    /// Operand result: matches for a plain word, the complement within the
    /// input for a negated one.
    fn operand_matches(&mut self, word: &Word) -> OrderedIndexSet {
        let matched = self.word_matches(word);
        if !word.negated() {
            return OrderedIndexSet::from_iter(matched);
        }

        let mut remaining = OrderedIndexSet::from_iter(0..self.input.len());
        remaining.remove_all(&matched);
        remaining
    }

    fn chain_matches(&mut self, chain: &Chain) -> OrderedIndexSet {
        let intersect = chain.operator() == ChainOperator::And
            && self.options.and_mode == AndMode::Intersect;

        let mut operands = chain.operands().iter();
        let Some(first) = operands.next() else {
            return OrderedIndexSet::default();
        };
        let mut folded = self.operand_matches(first);
        for operand in operands {
            let next = self.operand_matches(operand);
            if intersect {
                folded.retain_members_of(&next);
            } else {
                folded.extend(next.into_vec());
            }
        }
        folded.sort();
        folded
    }
}

// ---------------------------------------------------------------------------
// Ordered index set
// ---------------------------------------------------------------------------

/// Insertion-ordered set of record positions.
#[derive(Debug, Default)]
struct OrderedIndexSet {
    order: Vec<usize>,
    members: FnvHashSet<usize>,
}

impl OrderedIndexSet {
    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Appends indices not already present, keeping their relative order.
    fn extend(&mut self, indices: impl IntoIterator<Item = usize>) {
        for index in indices {
            if self.members.insert(index) {
                self.order.push(index);
            }
        }
    }

    fn remove_all(&mut self, indices: &[usize]) {
        let mut removed = false;
        for index in indices {
            removed |= self.members.remove(index);
        }
        if removed {
            let members = &self.members;
            self.order.retain(|index| members.contains(index));
        }
    }

    fn retain_members_of(&mut self, other: &OrderedIndexSet) {
        self.order.retain(|index| other.contains(*index));
        self.members.retain(|index| other.contains(*index));
    }

    /// Reorders members by input position.
    fn sort(&mut self) {
        self.order.sort_unstable();
    }

    fn into_vec(self) -> Vec<usize> {
        self.order
    }
}

impl FromIterator<usize> for OrderedIndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}
