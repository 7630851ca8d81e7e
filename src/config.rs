//! Run configuration, read from the environment.
//!
//! `GAUNTLET_DIR`, `GAUNTLET_EXTENSIONS` (comma separated), `GAUNTLET_CHANCES` and
//! `GAUNTLET_OUTPUT` override the defaults below.

use std::path::PathBuf;

/// Errors in user-supplied configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// `GAUNTLET_CHANCES` is not a positive integer.
    InvalidChances(String),
    /// `GAUNTLET_EXTENSIONS` lists no extensions.
    NoExtensions,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidChances(v) => {
                write!(f, "Chances must be a positive integer (got {v:?})")
            }
            ConfigError::NoExtensions => write!(f, "At least one image extension is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything needed to run one gauntlet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GauntletConfig {
    /// Directory holding one image per contestant.
    pub contestants_dir: PathBuf,
    /// Accepted image extensions (case-sensitive).
    pub extensions: Vec<String>,
    /// Losses before elimination.
    pub chances: u32,
    /// Where the result CSV is written on completion.
    pub output_path: PathBuf,
}

pub fn default_contestants_dir() -> PathBuf {
    PathBuf::from("img")
}

pub fn default_extensions() -> Vec<String> {
    [".bmp", ".gif", ".jpg", ".jpeg", ".png", ".tiff"]
        .iter()
        .map(|e| e.to_string())
        .collect()
}

pub fn default_chances() -> u32 {
    2
}

pub fn default_output_path() -> PathBuf {
    PathBuf::from("results.csv")
}

impl Default for GauntletConfig {
    fn default() -> Self {
        Self {
            contestants_dir: default_contestants_dir(),
            extensions: default_extensions(),
            chances: default_chances(),
            output_path: default_output_path(),
        }
    }
}

impl GauntletConfig {
    /// Default configuration reading contestants from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            contestants_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn with_chances(mut self, chances: u32) -> Self {
        self.chances = chances;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Build from `GAUNTLET_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup("GAUNTLET_DIR") {
            config.contestants_dir = PathBuf::from(dir);
        }
        if let Some(exts) = lookup("GAUNTLET_EXTENSIONS") {
            let exts: Vec<String> = exts
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect();
            if exts.is_empty() {
                return Err(ConfigError::NoExtensions);
            }
            config.extensions = exts;
        }
        if let Some(chances) = lookup("GAUNTLET_CHANCES") {
            config.chances = match chances.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidChances(chances)),
            };
        }
        if let Some(out) = lookup("GAUNTLET_OUTPUT") {
            config.output_path = PathBuf::from(out);
        }
        Ok(config)
    }
}
