use crate::alphabets::dna;
use crate::error::{SeqDistError, SeqDistResult};

/// A non-empty nucleotide sequence over `{A, C, G, T}`, held uppercase.
/// Lowercase input is accepted and folded at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(mut bytes: Vec<u8>) -> SeqDistResult<Self> {
        if bytes.is_empty() {
            return Err(SeqDistError::malformed("empty sequence"));
        }
        let alphabet = dna::alphabet();
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

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_seq() {
        let seq = DnaSeq::new(b"ACGT".to_vec()).unwrap();
        assert_eq!(seq.as_bytes(), b"ACGT");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn lowercase_folded() {
        let seq = DnaSeq::new(b"acgT".to_vec()).unwrap();
        assert_eq!(seq.as_bytes(), b"ACGT");
    }

    #[test]
    fn invalid_char_rejected() {
        let err = DnaSeq::new(b"AC#GT".to_vec()).unwrap_err();
        match err {
            SeqDistError::MalformedInput { reason } => {
                assert!(reason.contains('#'));
                assert!(reason.contains("position 2"));
            }
            _ => panic!("expected MalformedInput"),
        }
    }

    #[test]
    fn gap_rejected() {
        assert!(DnaSeq::new(b"AC-GT".to_vec()).is_err());
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            DnaSeq::new(Vec::new()),
            Err(SeqDistError::MalformedInput { .. })
        ));
    }
}
