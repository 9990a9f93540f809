//! Alignment DP uses i for sequence a (rows) and j for sequence b (columns).

use super::types::{AlignedPair, AlignmentResult, Scoring};
use crate::seq::{DnaSeq, GappedDnaSeq};

const DIR_DIAG: u8 = 0;
const DIR_UP: u8 = 1; // consumes a, gap in b
const DIR_LEFT: u8 = 2; // consumes b, gap in a

/// Needleman-Wunsch global alignment with linear gap penalty.
///
/// Fills an (m+1)x(n+1) score matrix plus a parallel direction matrix, then
/// walks the directions back from (m, n) to reconstruct the gapped rows.
/// O(m*n) time and space; total for any pair of (non-empty) inputs.
pub fn align_global(a: &DnaSeq, b: &DnaSeq, scoring: &Scoring) -> AlignmentResult {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let m = a.len();
    let n = b.len();
    let stride = n + 1;
    let gap = scoring.gap_score;

    let mut score = vec![0i32; (m + 1) * stride];
    let mut trace = vec![DIR_DIAG; (m + 1) * stride];

    for i in 1..=m {
        score[i * stride] = i as i32 * gap;
        trace[i * stride] = DIR_UP;
    }
    for j in 1..=n {
        score[j] = j as i32 * gap;
        trace[j] = DIR_LEFT;
    }

    for i in 1..=m {
        for j in 1..=n {
            let diag = score[(i - 1) * stride + j - 1] + scoring.score(a[i - 1], b[j - 1]);
            let up = score[(i - 1) * stride + j] + gap;
            let left = score[i * stride + j - 1] + gap;

            // Tie-breaking policy:
            // DIAG > UP > LEFT (because we use strict > comparisons)
            // Multiple optimal alignments may exist; this is intentional.
            let mut best = diag;
            let mut dir = DIR_DIAG;
            if up > best {
                best = up;
                dir = DIR_UP;
            }
            if left > best {
                best = left;
                dir = DIR_LEFT;
            }
            score[i * stride + j] = best;
            trace[i * stride + j] = dir;
        }
    }

    let final_score = score[m * stride + n];

    let mut aligned_a = Vec::with_capacity(m.max(n));
    let mut aligned_b = Vec::with_capacity(m.max(n));
    let mut i = m;
    let mut j = n;
    while i > 0 || j > 0 {
        let dir = if i == 0 {
            // Top edge: only horizontal moves remain.
            DIR_LEFT
        } else if j == 0 {
            // Left edge: only vertical moves remain.
            DIR_UP
        } else {
            trace[i * stride + j]
        };
        match dir {
            DIR_DIAG => {
                aligned_a.push(a[i - 1]);
                aligned_b.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            DIR_UP => {
                aligned_a.push(a[i - 1]);
                aligned_b.push(b'-');
                i -= 1;
            }
            _ => {
                aligned_a.push(b'-');
                aligned_b.push(b[j - 1]);
                j -= 1;
            }
        }
    }
    aligned_a.reverse();
    aligned_b.reverse();

    AlignmentResult {
        score: final_score,
        aligned: AlignedPair::from_parts_unchecked(
            GappedDnaSeq::from_bytes_unchecked(aligned_a),
            GappedDnaSeq::from_bytes_unchecked(aligned_b),
        ),
    }
}
