//! Final standings and CSV result export.

use crate::models::{Tournament, TournamentError, TournamentStatus};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

/// One line of the result file: `rank,name,wins,losses`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub rank: u32,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

/// Errors that can occur while exporting results.
#[derive(Debug)]
pub enum ExportError {
    Tournament(TournamentError),
    Csv(csv::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Tournament(e) => write!(f, "{e}"),
            ExportError::Csv(e) => write!(f, "Could not write results: {e}"),
            ExportError::Io(e) => write!(f, "Could not write results: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Tournament(e) => Some(e),
            ExportError::Csv(e) => Some(e),
            ExportError::Io(e) => Some(e),
        }
    }
}

impl From<TournamentError> for ExportError {
    fn from(e: TournamentError) -> Self {
        ExportError::Tournament(e)
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

/// Ranked standings of a completed tournament.
///
/// Rank 1 is the champion; the rest follow in reverse elimination order, so the
/// last contestant eliminated places second.
pub fn final_standings(tournament: &Tournament) -> Result<Vec<ResultRow>, TournamentError> {
    if tournament.status() != TournamentStatus::Complete {
        return Err(TournamentError::NotComplete);
    }
    let rows = tournament
        .active()
        .iter()
        .chain(tournament.eliminated().iter().rev())
        .zip(1..)
        .map(|(c, rank)| ResultRow {
            rank,
            name: c.name.clone(),
            wins: c.wins,
            losses: c.losses,
        })
        .collect();
    Ok(rows)
}

/// Write the standings as header-less CSV.
pub fn write_results<W: Write>(tournament: &Tournament, writer: W) -> Result<(), ExportError> {
    let rows = final_standings(tournament)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the standings to `path`, replacing any existing file.
pub fn export_results(tournament: &Tournament, path: &Path) -> Result<(), ExportError> {
    if tournament.status() != TournamentStatus::Complete {
        return Err(TournamentError::NotComplete.into());
    }
    let file = std::fs::File::create(path)?;
    write_results(tournament, file)?;
    log::info!("Results for gauntlet {} written to {}", tournament.id, path.display());
    Ok(())
}

/// Parse a result file produced by [`write_results`].
pub fn read_results<R: Read>(reader: R) -> Result<Vec<ResultRow>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);
    let rows = rdr.deserialize().collect::<Result<Vec<ResultRow>, _>>()?;
    Ok(rows)
}
