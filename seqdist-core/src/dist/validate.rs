use std::collections::{BTreeMap, BTreeSet};

use crate::align::{AlignedPair, AlignmentSet};
use crate::error::{SeqDistError, SeqDistResult};
use crate::pair::IndexPair;
use crate::seq::GappedDnaSeq;

/// Externally supplied alignment data before any typing is applied: raw
/// (possibly unordered) id pairs mapped to the two aligned strings. This is
/// the one untyped boundary of the crate; everything past
/// [`validate_alignment_map`] is typed.
pub type RawAlignmentMap = BTreeMap<(usize, usize), (String, String)>;

/// Normalize and validate a raw alignment map.
///
/// Fails fast with `MalformedInput` on the first violation: an empty map, a
/// self-pair key, unequal or zero value lengths, characters outside
/// `{A,C,G,T,a,c,g,t,-}`, two raw keys collapsing to the same canonical pair,
/// or key coverage that is not exactly the complete set of unordered pairs
/// over the identifiers mentioned. On success returns the sorted identifiers
/// and a freshly built typed map; caller data is never aliased or mutated.
pub fn validate_alignment_map(
    raw: &RawAlignmentMap,
) -> SeqDistResult<(Vec<usize>, AlignmentSet)> {
    if raw.is_empty() {
        return Err(SeqDistError::malformed("alignment map is empty"));
    }

    let mut normalized = AlignmentSet::new();
    for (&(i, j), (seq_a, seq_b)) in raw {
        let pair = IndexPair::new(i, j)?;
        let a = GappedDnaSeq::new(seq_a.as_bytes().to_vec())?;
        let b = GappedDnaSeq::new(seq_b.as_bytes().to_vec())?;
        let aligned = AlignedPair::new(a, b)?;
        if normalized.insert(pair, aligned).is_some() {
            return Err(SeqDistError::malformed(format!(
                "duplicate alignment for pair ({}, {})",
                pair.first(),
                pair.second()
            )));
        }
    }

    let ids = sorted_ids(&normalized)?;
    Ok((ids, normalized))
}

/// Collect the sorted identifiers of a typed alignment set, checking that the
/// keys cover exactly every unordered pair over them: at least two distinct
/// ids, no pair missing, no pair beyond the complete graph.
pub fn sorted_ids(set: &AlignmentSet) -> SeqDistResult<Vec<usize>> {
    let mut ids = BTreeSet::new();
    for pair in set.keys() {
        ids.insert(pair.first());
        ids.insert(pair.second());
    }
    let ids: Vec<usize> = ids.into_iter().collect();
    if ids.len() < 2 {
        return Err(SeqDistError::malformed(
            "at least two distinct sequence ids are required",
        ));
    }

    // Both the keys and the expected enumeration are in canonical
    // lexicographic order, so a lock-step walk detects the first divergence.
    let mut keys = set.keys();
    for (pos, &i) in ids.iter().enumerate() {
        for &j in ids.iter().skip(pos + 1) {
            let matches = keys
                .next()
                .is_some_and(|key| key.first() == i && key.second() == j);
            if !matches {
                return Err(SeqDistError::malformed(format!(
                    "alignment set does not cover pair ({i}, {j})"
                )));
            }
        }
    }
    if keys.next().is_some() {
        return Err(SeqDistError::malformed(
            "alignment set contains pairs beyond the complete set",
        ));
    }

    Ok(ids)
}
