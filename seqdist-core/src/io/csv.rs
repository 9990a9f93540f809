use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::dist::DistanceMatrix;
use crate::error::SeqDistResult;

/// Write a distance matrix as CSV with six-decimal cells. With `with_ids`
/// set, a header row and a leading id column are emitted.
pub fn write_distance_matrix<W: Write>(
    matrix: &DistanceMatrix,
    writer: W,
    with_ids: bool,
) -> SeqDistResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    if with_ids {
        let mut header = vec![String::from("id")];
        header.extend(matrix.ids().iter().map(|id| id.to_string()));
        wtr.write_record(&header)?;
    }

    for (row, id) in matrix.ids().iter().enumerate() {
        let mut record = Vec::with_capacity(matrix.n() + 1);
        if with_ids {
            record.push(id.to_string());
        }
        for col in 0..matrix.n() {
            record.push(format!("{:.6}", matrix.get(row, col)));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_distance_matrix_to_path(
    matrix: &DistanceMatrix,
    path: impl AsRef<Path>,
    with_ids: bool,
) -> SeqDistResult<()> {
    let file = File::create(path)?;
    write_distance_matrix(matrix, file, with_ids)
}
