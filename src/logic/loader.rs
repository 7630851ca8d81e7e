//! Setup: build the contestant pool from a directory of images.

use crate::config::GauntletConfig;
use crate::models::{Contestant, Tournament, TournamentError};
use std::collections::HashSet;
use std::path::Path;

/// Errors that can occur while loading contestants.
#[derive(Debug)]
pub enum LoadError {
    /// The directory could not be read.
    Io(std::io::Error),
    /// Two files share the same stem (e.g. `a.png` and `a.jpg`).
    DuplicateName(String),
    /// The loaded pool was rejected by the tournament.
    Tournament(TournamentError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Could not read contestant directory: {e}"),
            LoadError::DuplicateName(name) => {
                write!(f, "More than one contestant file is named {name:?}")
            }
            LoadError::Tournament(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Tournament(e) => Some(e),
            LoadError::DuplicateName(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<TournamentError> for LoadError {
    fn from(e: TournamentError) -> Self {
        match e {
            TournamentError::DuplicateName(name) => LoadError::DuplicateName(name),
            other => LoadError::Tournament(other),
        }
    }
}

/// Load one contestant per file in `dir` whose extension is in `extensions`.
///
/// Extensions match case-sensitively and may be given with or without the leading
/// dot. Contestants are named by file stem and returned in file-name order.
pub fn load_contestants<S: AsRef<str>>(
    dir: &Path,
    extensions: &[S],
) -> Result<Vec<Contestant>, LoadError> {
    let allowed: HashSet<&str> = extensions
        .iter()
        .map(|e| e.as_ref().trim_start_matches('.'))
        .collect();

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort();

    let mut seen = HashSet::new();
    let mut contestants = Vec::new();
    for path in paths {
        let Some(ext) = path.extension() else {
            log::debug!("Skipping {} (no extension)", path.display());
            continue;
        };
        let Some(ext) = ext.to_str() else {
            log::warn!("Skipping {} (extension is not valid UTF-8)", path.display());
            continue;
        };
        if !allowed.contains(ext) {
            log::debug!("Skipping {} (extension {ext:?} not allowed)", path.display());
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            log::warn!("Skipping {} (name is not valid UTF-8)", path.display());
            continue;
        };
        if !seen.insert(name.to_string()) {
            return Err(LoadError::DuplicateName(name.to_string()));
        }
        contestants.push(Contestant::new(name, path.clone()));
    }

    log::info!("Loaded {} contestant(s) from {}", contestants.len(), dir.display());
    Ok(contestants)
}

/// Load contestants as configured and seat them in a fresh tournament.
pub fn load_tournament(config: &GauntletConfig) -> Result<Tournament, LoadError> {
    let contestants = load_contestants(&config.contestants_dir, &config.extensions)?;
    Ok(Tournament::with_contestants(contestants, config.chances)?)
}
