use crate::align::{AlignedPair, AlignmentSet};
use crate::error::{SeqDistError, SeqDistResult};
use crate::seq::GappedDnaSeq;

use super::validate::{sorted_ids, validate_alignment_map, RawAlignmentMap};

/// Value returned when the mismatch fraction reaches 0.75, where the
/// Jukes-Cantor correction is undefined. Domain-standard cap for maximal
/// divergence.
pub const SATURATION_DISTANCE: f64 = 30.0;

/// Symmetric inter-sequence distance matrix with a zero diagonal. Rows and
/// columns are ordered by the sorted identifier list.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    ids: Vec<usize>,
    data: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    pub fn new(ids: Vec<usize>, data: Vec<f64>) -> Self {
        let n = ids.len();
        assert_eq!(
            data.len(),
            n * n,
            "distance matrix data length mismatch: expected {}, got {}",
            n * n,
            data.len()
        );
        Self { ids, data, n }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, val: f64) {
        self.data[i * self.n + j] = val;
        self.data[j * self.n + i] = val;
    }

    /// Row/column rank of an identifier.
    pub fn position_of(&self, id: usize) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }
}

/// Jukes-Cantor distance between two aligned rows.
///
/// Columns with a gap on either side are skipped; `mismatches` counts the
/// remaining columns where the rows differ. No comparable columns yields 0.0
/// (under-determined, not an error). A mismatch fraction at or above 0.75
/// yields [`SATURATION_DISTANCE`], otherwise -0.75 * ln(1 - 4p/3).
pub fn jukes_cantor(a: &GappedDnaSeq, b: &GappedDnaSeq) -> SeqDistResult<f64> {
    let mut comparable = 0usize;
    let mut mismatches = 0usize;

    for (&x, &y) in a.as_bytes().iter().zip(b.as_bytes()) {
        if x == b'-' || y == b'-' {
            continue;
        }
        comparable += 1;
        if x != y {
            mismatches += 1;
        }
    }

    if comparable == 0 {
        return Ok(0.0);
    }

    let p = mismatches as f64 / comparable as f64;
    if p >= 0.75 {
        return Ok(SATURATION_DISTANCE);
    }

    let correction = 1.0 - 4.0 * p / 3.0;
    // p < 0.75 already forces a positive correction; the guard documents the
    // domain of the logarithm rather than a reachable failure.
    if correction <= 0.0 {
        return Err(SeqDistError::malformed(format!(
            "non-positive Jukes-Cantor correction {correction} for p = {p}"
        )));
    }

    Ok(-0.75 * correction.ln())
}

/// Build the full symmetric distance matrix from a typed alignment set.
///
/// The set must cover exactly the complete graph of pairs over its
/// identifiers (checked by [`sorted_ids`]). Per-pair distances run on the
/// rayon pool when the `parallel` feature is enabled and merge by matrix
/// position; the diagonal is never written and stays 0.0.
pub fn build_distance_matrix(set: &AlignmentSet) -> SeqDistResult<DistanceMatrix> {
    let ids = sorted_ids(set)?;
    let n = ids.len();

    let entries: Vec<(usize, usize, &AlignedPair)> = set
        .iter()
        .map(|(pair, aligned)| {
            let pos_i = ids.partition_point(|&id| id < pair.first());
            let pos_j = ids.partition_point(|&id| id < pair.second());
            (pos_i, pos_j, aligned)
        })
        .collect();

    let results: SeqDistResult<Vec<(usize, usize, f64)>> =
        par_try_map!(&entries, |&(pos_i, pos_j, aligned)| {
            jukes_cantor(aligned.a(), aligned.b()).map(|d| (pos_i, pos_j, d))
        });

    let mut data = vec![0.0f64; n * n];
    for (pos_i, pos_j, d) in results? {
        data[pos_i * n + pos_j] = d;
        data[pos_j * n + pos_i] = d;
    }

    Ok(DistanceMatrix::new(ids, data))
}

/// Raw-boundary path: validate and normalize an untyped map, then build.
pub fn build_distance_matrix_from_raw(raw: &RawAlignmentMap) -> SeqDistResult<DistanceMatrix> {
    let (_ids, set) = validate_alignment_map(raw)?;
    build_distance_matrix(&set)
}
