use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::types::{AccountInfo, OperatorTable, Roster, SocialInfo};

/// Errors that can occur when loading input data files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Locations of the input files. Only the roster is required.
#[derive(Debug, Clone, Default)]
pub struct DataPaths {
    pub roster: PathBuf,
    pub profile: Option<PathBuf>,
    pub social: Option<PathBuf>,
    pub operators: Option<PathBuf>,
}

/// Everything the profile dialog reads, resolved up front.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    pub roster: Roster,
    pub account: Option<AccountInfo>,
    pub social: Option<SocialInfo>,
    pub operators: OperatorTable,
}

impl ProfileData {
    pub fn load(paths: &DataPaths) -> Result<Self, DataError> {
        let roster: Roster = load_json(&paths.roster)?;
        let account: Option<AccountInfo> = paths.profile.as_deref().map(load_json).transpose()?;
        let social: Option<SocialInfo> = paths.social.as_deref().map(load_json).transpose()?;
        let operators = match paths.operators.as_deref() {
            Some(path) => load_json(path)?,
            None => OperatorTable::default(),
        };

        tracing::info!(
            roster = roster.len(),
            operators = operators.len(),
            has_profile = account.is_some(),
            has_social = social.is_some(),
            "Profile data loaded"
        );

        Ok(Self {
            roster,
            account,
            social,
            operators,
        })
    }
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|e| DataError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
