//! Records that hold the constants of a corresponding-states reference fluid.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Error type for incomplete parameter information and IO problems.
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error(transparent)]
    FileIO(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("The following component(s) were not found: {0}")]
    ComponentsNotFound(String),
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),
}

/// A named set of model constants.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PureRecord<M> {
    pub name: String,
    pub model_record: M,
}

impl<M> PureRecord<M> {
    /// Create a new `PureRecord`.
    pub fn new(name: &str, model_record: M) -> Self {
        Self {
            name: name.to_owned(),
            model_record,
        }
    }

    /// Read the records of the requested substances from a json file.
    ///
    /// The records are returned in the order in which they were requested.
    pub fn from_json<P>(substances: &[&str], file: P) -> Result<Vec<Self>, ParameterError>
    where
        P: AsRef<Path>,
        M: DeserializeOwned,
    {
        let reader = BufReader::new(File::open(file)?);
        let records: Vec<Self> = serde_json::from_reader(reader)?;
        Self::select(substances, records)
    }

    /// Read the records of the requested substances from a json string.
    pub fn from_json_str(substances: &[&str], json: &str) -> Result<Vec<Self>, ParameterError>
    where
        M: DeserializeOwned,
    {
        let records: Vec<Self> = serde_json::from_str(json)?;
        Self::select(substances, records)
    }

    fn select(substances: &[&str], records: Vec<Self>) -> Result<Vec<Self>, ParameterError> {
        let queried: HashSet<&str> = substances.iter().copied().collect();
        if queried.len() != substances.len() {
            return Err(ParameterError::IncompatibleParameters(
                "A substance was defined more than once.".to_string(),
            ));
        }

        let mut found: Vec<Option<Self>> = substances.iter().map(|_| None).collect();
        for record in records {
            if let Some(i) = substances.iter().position(|&s| s == record.name) {
                found[i] = Some(record);
            }
        }

        let missing: Vec<&str> = substances
            .iter()
            .zip(found.iter())
            .filter(|(_, r)| r.is_none())
            .map(|(&s, _)| s)
            .collect();
        if !missing.is_empty() {
            return Err(ParameterError::ComponentsNotFound(missing.join(", ")));
        }
        Ok(found.into_iter().flatten().collect())
    }
}
