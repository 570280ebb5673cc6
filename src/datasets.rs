//! Fixed dataset suite.
//!
//! Small, named integer sequences covering the boundary and stress patterns
//! every algorithm is checked against: empty and single inputs, sorted and
//! reversed runs, duplicates, mixed signs, extreme magnitudes, and patterns
//! that trip naive pivots. The table is static and read-only; consumers take
//! a copy with [`Dataset::to_vec`] before sorting.

/// A named, immutable input sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dataset {
    pub name: &'static str,
    pub values: &'static [i64],
}

impl Dataset {
    pub const fn new(name: &'static str, values: &'static [i64]) -> Self {
        Self { name, values }
    }

    /// Independent copy of the values, safe to sort
    pub fn to_vec(&self) -> Vec<i64> {
        self.values.to_vec()
    }

    /// The values in reference ascending order
    pub fn expected(&self) -> Vec<i64> {
        let mut sorted = self.to_vec();
        sorted.sort_unstable();
        sorted
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

static STANDARD: [Dataset; 36] = [
    Dataset::new("sorted", &[1, 2, 3, 4, 5]),
    Dataset::new("reverse", &[5, 4, 3, 2, 1]),
    Dataset::new("duplicates", &[2, 3, 2, 1, 3, 1]),
    Dataset::new("empty", &[]),
    Dataset::new("random", &[7, 1, 4, 9, 2]),
    Dataset::new("single", &[42]),
    Dataset::new("negatives", &[0, -1, 5, -3, 2]),
    Dataset::new("all_equal", &[7, 7, 7, 7, 7]),
    Dataset::new("near_sorted", &[1, 2, 3, 5, 4, 6, 7]),
    Dataset::new("mixed_small", &[-10, 0, 7, -1, 7, 3, -10]),
    Dataset::new("alternating", &[1, 100, 2, 99, 3, 98, 4, 97]),
    Dataset::new("zeros_negs", &[0, 0, 0, -1, -1, -2, 0, -3]),
    Dataset::new("gapped", &[1000, -1000, 500, -500, 0, 250, -250]),
    Dataset::new("random10_fixed", &[12, -3, 7, 7, 0, -11, 25, 4, 4, -3]),
    // Tiny inputs
    Dataset::new("single_zero", &[0]),
    Dataset::new("single_positive", &[42]),
    Dataset::new("pair_sorted", &[1, 2]),
    Dataset::new("pair_reverse", &[2, 1]),
    Dataset::new("trio_one_inversion", &[1, 3, 2]),
    // Sorted, reversed, nearly sorted
    Dataset::new("sorted_small", &[1, 2, 3, 4, 5]),
    Dataset::new("reverse_small", &[5, 4, 3, 2, 1]),
    Dataset::new("near_sorted_one_swap", &[1, 2, 4, 3, 5, 6]),
    // Duplicates and degenerate distributions
    Dataset::new("duplicates_small", &[2, 3, 2, 1, 3, 1]),
    Dataset::new("two_values_alt", &[1, 0, 1, 0, 1, 0, 1, 0]),
    Dataset::new("duplicates_at_ends", &[5, 5, 1, 2, 3, 3]),
    Dataset::new("min_max_repeat", &[-10, -10, 0, 10, 10]),
    // Signs, zeros, magnitude extremes
    Dataset::new("negatives_mixed", &[0, -1, 5, -3, 2]),
    Dataset::new("zero_heavy", &[0, 0, 0, 0, 1, 0, 0, -1, 0]),
    Dataset::new(
        "large_magnitudes",
        &[2_147_483_647, -2_147_483_648, 0, 999_999_999, -999_999_999],
    ),
    // Patterns that trip naive pivots and loops
    Dataset::new("alternating_high_low", &[1, 100, 2, 99, 3, 98, 4, 97]),
    Dataset::new("sawtooth", &[3, 1, 2, 3, 1, 2, 3, 1, 2]),
    Dataset::new("gapped_values", &[1000, -1000, 500, -500, 0, 250, -250]),
    Dataset::new("random5_fixed", &[7, 1, 4, 9, 2]),
    // Length variety
    Dataset::new("odd_length", &[9, -1, 8, 0, -2]),
    Dataset::new("even_length", &[10, -1, 8, 0, 2, -3]),
    Dataset::new("primeish_length", &[13, 2, 5, 11, 7, 3]),
];

/// An ordered collection of datasets
#[derive(Clone, Copy, Debug)]
pub struct DatasetSuite {
    entries: &'static [Dataset],
}

impl DatasetSuite {
    /// The standard suite every algorithm is verified against
    pub fn standard() -> Self {
        Self { entries: &STANDARD }
    }

    /// A suite over a caller-provided static table
    pub const fn from_static(entries: &'static [Dataset]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [Dataset] {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Dataset> {
        self.entries.iter()
    }

    /// Find a dataset by name
    pub fn get(&self, name: &str) -> Option<&'static Dataset> {
        self.entries.iter().find(|d| d.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|d| d.name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DatasetSuite {
    fn default() -> Self {
        Self::standard()
    }
}
