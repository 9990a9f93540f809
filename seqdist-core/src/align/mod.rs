mod global;
pub mod types;

pub use global::align_global;
pub use types::{AlignedPair, AlignmentResult, Scoring};

use std::collections::BTreeMap;

use crate::pair::{index_pairs, IndexPair};
use crate::seq::DnaSeq;

#[cfg(test)]
mod tests;

/// One alignment per canonical pair. Ordered map, so iteration is
/// deterministic and keyed merges need no sorting.
pub type AlignmentSet = BTreeMap<IndexPair, AlignedPair>;

/// Re-score an alignment column by column: a column with a gap on either
/// side costs the gap score, otherwise match/mismatch applies. For aligner
/// output this reproduces the DP's final cell value.
pub fn alignment_score(aligned: &AlignedPair, scoring: &Scoring) -> i32 {
    aligned
        .a()
        .as_bytes()
        .iter()
        .zip(aligned.b().as_bytes())
        .map(|(&x, &y)| {
            if x == b'-' || y == b'-' {
                scoring.gap_score
            } else {
                scoring.score(x, y)
            }
        })
        .sum()
}

/// Align every unique pair of the input sequences. Each pairwise alignment
/// is independent, so the fan-out runs on the rayon pool when the `parallel`
/// feature is enabled; the merge is keyed by canonical pair.
pub fn align_all(seqs: &[DnaSeq], scoring: &Scoring) -> AlignmentSet {
    let pairs = index_pairs(seqs.len());
    let results: Vec<(IndexPair, AlignedPair)> = par_map!(&pairs, |&pair| {
        let result = align_global(&seqs[pair.first()], &seqs[pair.second()], scoring);
        (pair, result.aligned)
    });
    results.into_iter().collect()
}
