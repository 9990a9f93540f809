use crate::alphabets::Alphabet;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGTacgt")
}

/// Strict nucleotide alphabet plus the gap symbol `-`.
pub fn gapped_alphabet() -> Alphabet {
    let mut a = alphabet();
    a.insert(b'-');
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
        assert!(alphabet().is_word(b"gattaca"));
    }

    #[test]
    fn is_no_word() {
        assert!(!alphabet().is_word(b"gaUUaca"));
    }

    #[test]
    fn symbol_is_no_word() {
        assert!(!alphabet().is_word(b"#"));
    }

    #[test]
    fn gap_needs_gapped_alphabet() {
        assert!(!alphabet().is_word(b"AC-GT"));
        assert!(gapped_alphabet().is_word(b"AC-GT"));
        assert!(!gapped_alphabet().is_word(b"AC.GT"));
    }
}
