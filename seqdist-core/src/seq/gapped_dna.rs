use crate::alphabets::dna;
use crate::error::{SeqDistError, SeqDistResult};

/// One row of a pairwise alignment: `{A, C, G, T}` plus the gap symbol `-`,
/// held uppercase and never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GappedDnaSeq {
    bytes: Vec<u8>,
}

impl GappedDnaSeq {
    pub fn new(mut bytes: Vec<u8>) -> SeqDistResult<Self> {
        if bytes.is_empty() {
            return Err(SeqDistError::malformed("empty aligned sequence"));
        }
        let alphabet = dna::gapped_alphabet();
        for (pos, b) in bytes.iter_mut().enumerate() {
            if !alphabet.contains(*b) {
                return Err(SeqDistError::malformed(format!(
                    "invalid character '{}' at position {pos}",
                    *b as char
                )));
            }
            b.make_ascii_uppercase();
        }
        Ok(Self { bytes })
    }

    /// Caller guarantees non-empty, uppercase `ACGT-` content.
    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Residues with gap columns stripped; empty when every column is a gap.
    pub fn ungapped(&self) -> Vec<u8> {
        self.bytes.iter().copied().filter(|&b| b != b'-').collect()
    }
}
