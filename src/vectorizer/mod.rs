pub mod compare;
pub mod serde;
pub mod similarity;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::VectorizerConfig,
    error::Result,
    utils::matrix::Matrix,
    vectorizer::{
        serde::Report,
        similarity::{cosine_matrix, pairwise, Measure},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::{Tokenizer, UnicodeWordTokenizer},
        vocabulary::Vocabulary,
    },
};

/// Builds the Document-Term, TF, IDF, TF-IDF and similarity matrices of
/// one corpus.
///
/// Holds the documents and tokenizer by reference and the vocabulary by
/// value. Every matrix method tokenizes and vectorizes each document
/// again; `report()` can share one pass across all outputs when
/// `memoize_counts` is set. Both paths give the same numbers.
///
/// `MatrixBuilder<S, Tk, E>`:
/// - `S`: document type (`&str`, `String`, ...)
/// - `Tk`: tokenizer
/// - `E`: weighting formulas (`DefaultTFIDFEngine`)
pub struct MatrixBuilder<'a, S, Tk = UnicodeWordTokenizer, E = DefaultTFIDFEngine>
where
    Tk: ?Sized,
{
    documents: &'a [S],
    tokenizer: &'a Tk,
    vocabulary: Vocabulary,
    config: VectorizerConfig,
    _marker: PhantomData<fn() -> E>,
}

impl<'a, S, Tk, E> MatrixBuilder<'a, S, Tk, E>
where
    S: AsRef<str> + Sync,
    Tk: Tokenizer + Sync + ?Sized,
    E: TFIDFEngine,
{
    /// Build the vocabulary from `documents` themselves
    pub fn new(documents: &'a [S], tokenizer: &'a Tk) -> Self {
        let vocabulary = Vocabulary::from_corpus(documents, tokenizer);
        Self::with_vocabulary(documents, tokenizer, vocabulary)
    }

    /// Use a prepared vocabulary. Every term of every document must be in it
    /// or the matrix methods fail with `Error::UnknownTerm`.
    pub fn with_vocabulary(documents: &'a [S], tokenizer: &'a Tk, vocabulary: Vocabulary) -> Self {
        Self {
            documents,
            tokenizer,
            vocabulary,
            config: VectorizerConfig::default(),
            _marker: PhantomData,
        }
    }

    pub fn config(mut self, config: VectorizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn into_vocabulary(self) -> Vocabulary {
        self.vocabulary
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    fn parallel(&self) -> bool {
        self.config.use_parallel(self.documents.len())
    }

    fn columns(&self) -> Vec<String> {
        self.vocabulary.terms().cloned().collect()
    }

    /// Count vector of one text against the vocabulary
    pub fn vectorize(&self, text: &str) -> Result<Vec<u32>> {
        self.vocabulary.vectorize(text, self.tokenizer)
    }

    /// One count vector per document, in document order
    pub fn count_rows(&self) -> Result<Vec<Vec<u32>>> {
        if self.parallel() {
            self.documents
                .par_iter()
                .map(|doc| self.vectorize(doc.as_ref()))
                .collect()
        } else {
            self.documents
                .iter()
                .map(|doc| self.vectorize(doc.as_ref()))
                .collect()
        }
    }

    fn weigh(&self, counts: &[Vec<u32>], row: fn(&[u32], usize) -> Vec<f64>) -> Matrix<f64> {
        let doc_num = self.documents.len();
        let rows: Vec<Vec<f64>> = if self.parallel() {
            counts.par_iter().map(|c| row(c, doc_num)).collect()
        } else {
            counts.iter().map(|c| row(c, doc_num)).collect()
        };
        Matrix::new(self.columns(), rows)
    }

    fn tf_from(&self, counts: &[Vec<u32>]) -> Matrix<f64> {
        self.weigh(counts, |c, _| E::tf_row(c))
    }

    fn idf_from(&self, counts: &[Vec<u32>]) -> Matrix<f64> {
        self.weigh(counts, E::idf_row)
    }

    fn tf_idf_from(&self, counts: &[Vec<u32>]) -> Matrix<f64> {
        self.weigh(counts, E::tf_idf_row)
    }

    /// Raw counts, one row per document
    pub fn document_term(&self) -> Result<Matrix<u32>> {
        let matrix = Matrix::new(self.columns(), self.count_rows()?);
        debug!(rows = matrix.n_rows(), cols = matrix.n_cols(), "document-term matrix built");
        Ok(matrix)
    }

    /// Term frequency: count over the document's total term count
    pub fn tf(&self) -> Result<Matrix<f64>> {
        let matrix = self.tf_from(&self.count_rows()?);
        debug!(rows = matrix.n_rows(), cols = matrix.n_cols(), "tf matrix built");
        Ok(matrix)
    }

    /// Row-local IDF, see `DefaultTFIDFEngine`
    pub fn idf(&self) -> Result<Matrix<f64>> {
        let matrix = self.idf_from(&self.count_rows()?);
        debug!(rows = matrix.n_rows(), cols = matrix.n_cols(), "idf matrix built");
        Ok(matrix)
    }

    pub fn tf_idf(&self) -> Result<Matrix<f64>> {
        let matrix = self.tf_idf_from(&self.count_rows()?);
        debug!(rows = matrix.n_rows(), cols = matrix.n_cols(), "tf-idf matrix built");
        Ok(matrix)
    }

    /// Cosine similarity of every pair of TF-IDF rows (N×N, symmetric)
    pub fn similarity_matrix(&self) -> Result<Matrix<f64>> {
        let tf_idf = self.tf_idf()?;
        let matrix = cosine_matrix(&tf_idf, self.parallel());
        debug!(docs = matrix.n_rows(), "similarity matrix built");
        Ok(matrix)
    }

    /// Pairwise matrix of TF-IDF rows under any `Measure`
    pub fn distance_matrix(&self, measure: Measure) -> Result<Matrix<f64>> {
        let tf_idf = self.tf_idf()?;
        Ok(pairwise(&tf_idf, measure, self.parallel()))
    }

    /// All five matrices.
    ///
    /// With `memoize_counts` the documents are vectorized once; otherwise
    /// each matrix does its own pass.
    pub fn report(&self) -> Result<Report> {
        let (document_term, tf, idf, tf_idf, similarity) = if self.config.memoize_counts {
            let counts = self.count_rows()?;
            let tf = self.tf_from(&counts);
            let idf = self.idf_from(&counts);
            let tf_idf = self.tf_idf_from(&counts);
            let similarity = cosine_matrix(&tf_idf, self.parallel());
            (Matrix::new(self.columns(), counts), tf, idf, tf_idf, similarity)
        } else {
            (self.document_term()?, self.tf()?, self.idf()?, self.tf_idf()?, self.similarity_matrix()?)
        };
        debug!(
            docs = self.documents.len(),
            terms = self.vocabulary.size(),
            memoized = self.config.memoize_counts,
            "report built"
        );
        Ok(Report {
            vocabulary: self.vocabulary.clone(),
            document_term,
            tf,
            idf,
            tf_idf,
            similarity,
        })
    }
}
