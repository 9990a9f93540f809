pub mod csv;
pub mod seqfile;

pub use csv::{write_distance_matrix, write_distance_matrix_to_path};
pub use seqfile::{read_records_from_bytes, read_records_from_path, read_records_from_reader};
