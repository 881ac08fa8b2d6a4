//! Tests for the fit constraint and per-budget candidate tables

#[cfg(test)]
mod tests {
    use textstereo::algorithm::budget::{BudgetTable, violates_fit};
    use textstereo::text::corpus::Corpus;

    fn animals() -> Corpus {
        Corpus::from_words(["cat", "dog", "bird", "frog", "lamb", "swan"], (3, 6))
            .expect("animal corpus is valid")
    }

    // Tests residues of one to min_word_len are rejected
    // Verified by shifting the residue window by one
    #[test]
    fn test_violates_fit_window() {
        assert!(!violates_fit(0, 3));
        assert!(violates_fit(1, 3));
        assert!(violates_fit(2, 3));
        assert!(violates_fit(3, 3));
        assert!(!violates_fit(4, 3));
        assert!(violates_fit(1, 0));
        assert!(!violates_fit(2, 0));
    }

    // Tests exact fits and four-character residues are both accepted
    // Verified by dropping the residue == 0 shortcut
    #[test]
    fn test_small_budgets() {
        let table = BudgetTable::new(&animals(), 16, 3);

        assert!(table.is_fillable(0));
        assert_eq!(table.candidates(3), &[0, 1]);
        assert_eq!(table.candidates(4), &[2, 3, 4, 5]);
        assert_eq!(table.candidates(8), &[0, 1, 2, 3, 4, 5]);
    }

    // Tests dead-end budgets are detected for a corpus without long words
    // Verified by removing the completion check from candidate filtering
    #[test]
    fn test_unfillable_budgets() {
        let table = BudgetTable::new(&animals(), 16, 3);

        assert_eq!(table.unfillable_budgets(), vec![1, 2, 5, 6, 10]);
        assert!(table.candidates(6).is_empty());
        assert!(table.is_fillable(16));
    }

    // Tests words leading into a dead end are excluded from candidates
    // Verified by accepting every word that satisfies the fit constraint
    #[test]
    fn test_candidates_avoid_dead_ends() {
        let table = BudgetTable::new(&animals(), 16, 3);

        // A four-letter word at 11 would leave budget 6, which cannot be completed
        assert_eq!(table.candidates(11), &[0, 1]);
        assert_eq!(table.candidates(7), &[0, 1]);
    }

    // Tests a corpus of one word length cannot fill an incompatible length
    // Verified by treating all residues as fillable
    #[test]
    fn test_single_length_corpus() {
        let corpus = Corpus::from_words(["apple", "grape", "lemon"], (3, 6))
            .expect("fruit corpus is valid");
        let table = BudgetTable::new(&corpus, 16, 3);

        assert!(!table.is_fillable(16));
        assert!(table.is_fillable(11));
        assert!(table.is_fillable(5));
        assert_eq!(table.length(), 16);
    }

    // Tests out-of-range budgets report no candidates
    // Verified by indexing past the table
    #[test]
    fn test_out_of_range_budget() {
        let table = BudgetTable::new(&animals(), 8, 3);

        assert!(table.candidates(9).is_empty());
        assert!(!table.is_fillable(9));
    }
}
