//! Per-budget candidate tables for the pattern fit constraint
//!
//! A word may be placed into a remaining budget `b` when it is no longer
//! than `b` and the residue `b - len` is not in `1..=min_word_len`: a residue
//! of one would leave a dangling separator and smaller residues cannot hold
//! another word. On top of that, a word is only a candidate when the budget
//! left after it (residue minus its separator) can itself be completed, so
//! sampling never walks into a dead end and never needs to redraw.

use crate::text::corpus::Corpus;

/// Candidate corpus indices for every remaining budget of one pattern length
#[derive(Clone, Debug)]
pub struct BudgetTable {
    length: usize,
    candidates: Vec<Vec<usize>>,
}

impl BudgetTable {
    /// Precompute candidates for budgets `0..=length`
    pub fn new(corpus: &Corpus, length: usize, min_word_len: usize) -> Self {
        let mut candidates: Vec<Vec<usize>> = Vec::with_capacity(length + 1);
        // An empty budget is complete
        candidates.push(Vec::new());

        for budget in 1..=length {
            let viable: Vec<usize> = corpus
                .words()
                .iter()
                .enumerate()
                .filter(|(_, word)| {
                    let Some(residue) = budget.checked_sub(word.len()) else {
                        return false;
                    };
                    if violates_fit(residue, min_word_len) {
                        return false;
                    }
                    residue == 0 || is_complete(&candidates, residue - 1)
                })
                .map(|(index, _)| index)
                .collect();
            candidates.push(viable);
        }

        Self { length, candidates }
    }

    /// Pattern length the table was built for
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Corpus indices that may be placed into `budget`
    pub fn candidates(&self, budget: usize) -> &[usize] {
        self.candidates.get(budget).map_or(&[], Vec::as_slice)
    }

    /// Whether some word sequence completes `budget` exactly
    pub fn is_fillable(&self, budget: usize) -> bool {
        is_complete(&self.candidates, budget)
    }

    /// Budgets in `1..=length` that no word sequence can complete
    pub fn unfillable_budgets(&self) -> Vec<usize> {
        (1..=self.length)
            .filter(|&budget| !self.is_fillable(budget))
            .collect()
    }
}

/// Fit constraint: residues `1..=min_word_len` cannot be completed
pub const fn violates_fit(residue: usize, min_word_len: usize) -> bool {
    let floor = if min_word_len == 0 { 1 } else { min_word_len };
    residue >= 1 && residue <= floor
}

fn is_complete(candidates: &[Vec<usize>], budget: usize) -> bool {
    budget == 0 || candidates.get(budget).is_some_and(|c| !c.is_empty())
}
