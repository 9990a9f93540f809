pub mod dna;
pub mod gapped_dna;
pub mod record;

pub use dna::DnaSeq;
pub use gapped_dna::GappedDnaSeq;
pub use record::SeqRecord;
