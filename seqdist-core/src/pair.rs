use crate::error::{SeqDistError, SeqDistResult};

/// Canonical unordered pair of sequence identifiers: the smaller id always
/// comes first, so (2, 1) and (1, 2) name the same alignment. Self-pairs are
/// rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPair {
    first: usize,
    second: usize,
}

impl IndexPair {
    pub fn new(a: usize, b: usize) -> SeqDistResult<Self> {
        if a == b {
            return Err(SeqDistError::malformed(format!(
                "self-pair ({a}, {a}) is not a valid sequence pair"
            )));
        }
        Ok(if a < b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        })
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn second(&self) -> usize {
        self.second
    }
}

/// All unordered index pairs over `n` sequences in lexicographic order.
/// Yields n(n-1)/2 pairs; empty for n < 2.
pub fn index_pairs(n: usize) -> Vec<IndexPair> {
    (0..n)
        .flat_map(|i| {
            ((i + 1)..n).map(move |j| IndexPair {
                first: i,
                second: j,
            })
        })
        .collect()
}
