use super::run::read_sequences;
use crate::cli::ScoreArgs;
use crate::error::Result;
use gibbsmotif::core::models::motif::{Motif, MotifSet};
use gibbsmotif::core::scoring::consensus::{self, Consensus};
use gibbsmotif::engine::error::EngineError;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: ScoreArgs) -> Result<()> {
    info!("Loading motif set from {:?}", &args.input);
    let (consensus, score) = evaluate(&read_motifs(&args)?)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "Consensus: {}", consensus)?;
    writeln!(writer, "Score: {}", score)?;
    Ok(())
}

fn read_motifs(args: &ScoreArgs) -> Result<MotifSet> {
    let motifs = read_sequences(&args.input)?
        .iter()
        .map(|s| Motif::new(0, s.residues().to_vec()))
        .collect();
    Ok(MotifSet::new(motifs).map_err(EngineError::from)?)
}

fn evaluate(motifs: &MotifSet) -> Result<(Consensus, usize)> {
    let consensus = consensus::consensus(motifs.motifs()).map_err(EngineError::from)?;
    let score = consensus::score_against(&consensus, motifs.motifs());
    Ok((consensus, score))
}
