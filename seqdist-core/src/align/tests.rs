use proptest::prelude::*;

use super::types::Scoring;
use super::{align_all, align_global, alignment_score};
use crate::pair::{index_pairs, IndexPair};
use crate::seq::DnaSeq;

fn dna(s: &str) -> DnaSeq {
    DnaSeq::new(s.as_bytes().to_vec()).unwrap()
}

#[test]
fn default_scoring() {
    let scoring = Scoring::default();
    assert_eq!(scoring.match_score, 5);
    assert_eq!(scoring.mismatch_score, -2);
    assert_eq!(scoring.gap_score, -6);
}

#[test]
fn identical_sequences() {
    let res = align_global(&dna("ACGT"), &dna("ACGT"), &Scoring::default());
    assert_eq!(res.score, 20);
    assert_eq!(res.aligned.a().as_bytes(), b"ACGT");
    assert_eq!(res.aligned.b().as_bytes(), b"ACGT");
}

#[test]
fn single_internal_gap() {
    let res = align_global(&dna("ACGT"), &dna("AGT"), &Scoring::default());
    assert_eq!(res.score, 9);
    assert_eq!(res.aligned.a().as_bytes(), b"ACGT");
    assert_eq!(res.aligned.b().as_bytes(), b"A-GT");
}

#[test]
fn trailing_gap_prefers_up() {
    let res = align_global(&dna("AT"), &dna("A"), &Scoring::default());
    assert_eq!(res.score, -1);
    assert_eq!(res.aligned.a().as_bytes(), b"AT");
    assert_eq!(res.aligned.b().as_bytes(), b"A-");
}

#[test]
fn short_against_long() {
    let res = align_global(&dna("A"), &dna("ACG"), &Scoring::default());
    assert_eq!(res.score, -7);
    assert_eq!(res.aligned.a().as_bytes(), b"A--");
    assert_eq!(res.aligned.b().as_bytes(), b"ACG");
}

#[test]
fn all_mismatches_beat_gaps() {
    // Two mismatches (-4) score above any gapped variant.
    let res = align_global(&dna("AG"), &dna("GA"), &Scoring::default());
    assert_eq!(res.score, -4);
    assert_eq!(res.aligned.a().as_bytes(), b"AG");
    assert_eq!(res.aligned.b().as_bytes(), b"GA");
}

#[test]
fn rescore_reproduces_dp_score() {
    let scoring = Scoring::default();
    for (a, b) in [
        ("ACGT", "ACGT"),
        ("ACGT", "AGT"),
        ("GATTACA", "GCATGCT"),
        ("A", "TTTT"),
    ] {
        let res = align_global(&dna(a), &dna(b), &scoring);
        assert_eq!(alignment_score(&res.aligned, &scoring), res.score);
    }
}

#[test]
fn align_all_covers_every_pair() {
    let seqs = vec![dna("ACGT"), dna("AGT"), dna("TTTT")];
    let set = align_all(&seqs, &Scoring::default());
    let keys: Vec<IndexPair> = set.keys().copied().collect();
    assert_eq!(keys, index_pairs(3));
    for (pair, aligned) in &set {
        assert_eq!(aligned.a().ungapped(), seqs[pair.first()].as_bytes());
        assert_eq!(aligned.b().ungapped(), seqs[pair.second()].as_bytes());
    }
}

#[test]
fn align_all_trivial_inputs() {
    assert!(align_all(&[], &Scoring::default()).is_empty());
    assert!(align_all(&[dna("ACGT")], &Scoring::default()).is_empty());
}

proptest! {
    #[test]
    fn global_alignment_properties(a in "[ACGT]{1,40}", b in "[ACGT]{1,40}") {
        let scoring = Scoring::default();
        let res = align_global(&dna(&a), &dna(&b), &scoring);
        let ga = res.aligned.a();
        let gb = res.aligned.b();
        prop_assert_eq!(ga.len(), gb.len());
        prop_assert!(ga.len() >= a.len().max(b.len()));
        prop_assert!(ga.len() <= a.len() + b.len());
        prop_assert_eq!(ga.ungapped(), a.as_bytes());
        prop_assert_eq!(gb.ungapped(), b.as_bytes());
        prop_assert_eq!(alignment_score(&res.aligned, &scoring), res.score);
    }
}
