use crate::error::{SeqDistError, SeqDistResult};
use crate::seq::GappedDnaSeq;

/// The three fixed alignment parameters. The gap score applies per gap
/// column (linear penalty, not affine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            match_score: 5,
            mismatch_score: -2,
            gap_score: -6,
        }
    }
}

impl Scoring {
    #[inline]
    pub fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// Two equal-length gapped rows of one pairwise alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignedPair {
    a: GappedDnaSeq,
    b: GappedDnaSeq,
}

impl AlignedPair {
    pub fn new(a: GappedDnaSeq, b: GappedDnaSeq) -> SeqDistResult<Self> {
        if a.len() != b.len() {
            return Err(SeqDistError::malformed(format!(
                "aligned lengths differ: {} vs {}",
                a.len(),
                b.len()
            )));
        }
        Ok(Self { a, b })
    }

    /// Caller guarantees equal lengths.
    #[inline]
    pub(crate) fn from_parts_unchecked(a: GappedDnaSeq, b: GappedDnaSeq) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &GappedDnaSeq {
        &self.a
    }

    pub fn b(&self) -> &GappedDnaSeq {
        &self.b
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentResult {
    /// Value of the final DP cell.
    pub score: i32,
    pub aligned: AlignedPair,
}
