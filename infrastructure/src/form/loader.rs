//! Form file loader

use super::file_form::FormFile;
use intake_domain::{DomainError, Questionnaire};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a form file
#[derive(Error, Debug)]
pub enum FormFileError {
    #[error("failed to read form file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse form file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid form: {0}")]
    Invalid(#[from] DomainError),
}

/// Loads questionnaires from TOML form files
pub struct FormLoader;

impl FormLoader {
    pub fn load(path: &Path) -> Result<Questionnaire, FormFileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FormFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FormFile = toml::from_str(&raw).map_err(|source| FormFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let questionnaire = file.into_questionnaire()?;
        debug!(
            "Loaded form with {} questions from {}",
            questionnaire.len(),
            path.display()
        );
        Ok(questionnaire)
    }
}
