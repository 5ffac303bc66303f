//! Errors raised at the fallible edges: env parsing and fixture loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::TensorShape;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("invalid tensor shape {0:?}: expected four positive integers H,B,S,D")]
    InvalidShape(String),

    #[error("invalid explode factor {0:?}: expected a finite number >= 0")]
    InvalidExplode(String),

    #[error("invalid activation seed {0:?}")]
    InvalidSeed(String),

    #[error("failed to read activation fixture {}: {source}", path.display())]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse activation fixture {}: {source}", path.display())]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("activation fixture is for shape {fixture}, current shape is {requested}")]
    FixtureShapeMismatch {
        fixture: TensorShape,
        requested: TensorShape,
    },

    #[error("activation fixture for {shape} holds {found} values, expected {front} or {full}")]
    FixtureLength {
        shape: TensorShape,
        front: usize,
        full: usize,
        found: usize,
    },
}
