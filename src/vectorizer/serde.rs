use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::Result, utils::matrix::Matrix, vectorizer::vocabulary::Vocabulary};

/// Every output of one corpus run.
///
/// Holds no reference to the documents or the tokenizer, so it can be
/// stored and reloaded on its own. Encoded as CBOR by `to_cbor`/`save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub vocabulary: Vocabulary,
    pub document_term: Matrix<u32>,
    pub tf: Matrix<f64>,
    pub idf: Matrix<f64>,
    pub tf_idf: Matrix<f64>,
    pub similarity: Matrix<f64>,
}

impl Report {
    pub fn doc_num(&self) -> usize {
        self.document_term.n_rows()
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_cbor()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_cbor(&fs::read(path)?)
    }
}
