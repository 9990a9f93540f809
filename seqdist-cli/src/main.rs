use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use seqdist_core::align::{align_all, Scoring};
use seqdist_core::dist::build_distance_matrix;
use seqdist_core::io::{read_records_from_path, write_distance_matrix};

#[derive(Parser)]
#[command(
    name = "seqdist",
    about = "Pairwise global alignment and Jukes-Cantor distance matrices"
)]
struct Cli {
    /// Sequence file with one '>label sequence' record per line.
    input: PathBuf,

    /// Write the matrix to this file instead of stdout.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// Emit a header row and a leading id column.
    #[clap(long)]
    ids: bool,

    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let records = read_records_from_path(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!("loaded {} sequences", records.len());

    let seqs: Vec<_> = records.into_iter().map(|r| r.into_seq()).collect();
    let alignments = align_all(&seqs, &Scoring::default());
    info!("aligned {} pairs", alignments.len());

    let matrix = build_distance_matrix(&alignments).context("failed to build distance matrix")?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_distance_matrix(&matrix, file, cli.ids)?;
        }
        None => write_distance_matrix(&matrix, io::stdout().lock(), cli.ids)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn end_to_end_matrix() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, ">human ACGT").unwrap();
        writeln!(input, ">mouse ACGA").unwrap();
        input.flush().unwrap();

        let out_dir = tempfile::tempdir().unwrap();
        let out_path = out_dir.path().join("dist.csv");
        let cli = Cli {
            input: input.path().to_path_buf(),
            output: Some(out_path.clone()),
            ids: true,
            log_level: LevelFilter::Off,
        };
        run(&cli).unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("id,0,1"));
        // one mismatch over four columns: -0.75 * ln(2/3)
        assert_eq!(lines.next(), Some("0,0.000000,0.304099"));
        assert_eq!(lines.next(), Some("1,0.304099,0.000000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn too_few_sequences_fails() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, ">human ACGT").unwrap();
        input.flush().unwrap();

        let cli = Cli {
            input: input.path().to_path_buf(),
            output: None,
            ids: false,
            log_level: LevelFilter::Off,
        };
        assert!(run(&cli).is_err());
    }
}
