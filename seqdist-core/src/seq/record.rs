use crate::seq::DnaSeq;

/// A labelled sequence. Identity in the core is positional: the record's
/// index in the loaded collection is its identifier downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub label: Box<str>,
    pub seq: DnaSeq,
}

impl SeqRecord {
    pub fn new(label: impl Into<Box<str>>, seq: DnaSeq) -> Self {
        Self {
            label: label.into(),
            seq,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn seq(&self) -> &DnaSeq {
        &self.seq
    }

    pub fn into_seq(self) -> DnaSeq {
        self.seq
    }
}
