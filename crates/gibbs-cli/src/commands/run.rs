use crate::cli::RunArgs;
use crate::config::PartialSearchConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use gibbsmotif::{
    core::io::{sequence_file::SequenceFile, traits::RecordFile},
    core::models::sequence::Sequence,
    engine::{progress::ProgressReporter, state::Solution},
    workflows,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: RunArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialSearchConfig::from_file(path)?,
        None => PartialSearchConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    info!("Loading input sequences from {:?}", &args.input);
    let sequences = read_sequences(&args.input)?;
    info!("Loaded {} sequence(s).", sequences.len());

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the Gibbs search workflow...");
    let result = workflows::search::run(&sequences, &config, &reporter)?;

    match &args.output {
        Some(path) => {
            info!("Writing motifs to {:?}", path);
            let mut writer = BufWriter::new(File::create(path)?);
            write_motifs(&mut writer, &result.best, &sequences, args.offsets)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_motifs(&mut writer, &result.best, &sequences, args.offsets)?;
            writer.flush()?;
        }
    }

    if let Some(report_path) = &args.report {
        info!("Writing per-restart report to {:?}", report_path);
        result.write_report(report_path)?;
    }

    if !quiet {
        eprintln!(
            "Consensus: {}  Score: {}  (restart {} of {})",
            result.best.consensus,
            result.best.score,
            result.best.restart + 1,
            result.restarts.len()
        );
    }
    Ok(())
}

pub(crate) fn read_sequences(path: &Path) -> Result<Vec<Sequence>> {
    SequenceFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn write_motifs(
    writer: &mut impl Write,
    solution: &Solution,
    sequences: &[Sequence],
    with_offsets: bool,
) -> io::Result<()> {
    for (index, (motif, sequence)) in solution.motifs.iter().zip(sequences).enumerate() {
        if with_offsets {
            let label = sequence
                .label()
                .map(str::to_string)
                .unwrap_or_else(|| format!("seq{}", index + 1));
            writeln!(writer, "{}\t{}\t{}", motif, motif.offset, label)?;
        } else {
            writeln!(writer, "{}", motif)?;
        }
    }
    Ok(())
}
