//! Tests for the seeded random selector

#[cfg(test)]
mod tests {
    use textstereo::algorithm::random::RandomSelector;

    // Tests identical seeds give identical choice sequences
    // Verified by seeding the second selector differently
    #[test]
    fn test_seed_reproducibility() {
        let items: Vec<usize> = (0..100).collect();
        let mut first = RandomSelector::new(7);
        let mut second = RandomSelector::new(7);

        let a: Vec<usize> = (0..20).filter_map(|_| first.choose(&items).copied()).collect();
        let b: Vec<usize> = (0..20).filter_map(|_| second.choose(&items).copied()).collect();

        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }

    // Tests empty inputs yield no selection
    // Verified by returning a default element
    #[test]
    fn test_empty_inputs() {
        let mut selector = RandomSelector::new(1);
        let empty: [u8; 0] = [];

        assert_eq!(selector.choose(&empty), None);
        assert_eq!(selector.index(0), None);
    }

    // Tests indices stay within bounds
    // Verified by using an inclusive range
    #[test]
    fn test_index_bounds() {
        let mut selector = RandomSelector::new(3);
        for _ in 0..200 {
            let index = selector.index(5).expect("non-empty range");
            assert!(index < 5);
        }
    }
}
