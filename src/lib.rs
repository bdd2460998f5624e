/// This crate turns a document collection into Bag-of-Words, TF, IDF and
/// TF-IDF matrices and a cosine-similarity document distance matrix.
pub mod config;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// Matrix Builder
/// The top-level struct of this crate. It owns the vocabulary of a corpus
/// and produces, one row per document:
/// - the Document-Term matrix (raw counts)
/// - the TF matrix
/// - the IDF matrix
/// - the TF-IDF matrix
/// - the N×N cosine similarity matrix of the TF-IDF rows
///
/// `MatrixBuilder<S, Tk, E>` has the following generic parameters:
/// - `S`: document type (e.g., &str, String)
/// - `Tk`: tokenizer (e.g., UnicodeWordTokenizer, a closure)
/// - `E`: weighting engine (e.g., DefaultTFIDFEngine)
///
/// Rows are 1-based and columns follow vocabulary order, so two runs over
/// the same documents give identical matrices.
pub use vectorizer::MatrixBuilder;

/// Vocabulary
/// Insertion-ordered set of unique terms with O(1) term→column lookup.
/// Built once per corpus with `from_corpus`; it only ever grows.
///
/// # Serialization
/// Supported, as the ordered term list.
pub use vectorizer::vocabulary::Vocabulary;

/// Tokenizer trait and the tokenizers shipped with the crate
/// - `UnicodeWordTokenizer`: Unicode word boundaries, the default
/// - `WhitespaceTokenizer`: whitespace split with punctuation trimmed
/// - `CommandTokenizer`: external tokenizer process
///
/// Closures `Fn(&str) -> Vec<String>` are tokenizers too.
pub use vectorizer::token::{CommandTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};

/// TF IDF Calculation Engine Trait
/// Per-document weighting formulas. `DefaultTFIDFEngine` uses
/// `count / total` for TF and the row-local `log10(N / count)` for IDF.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Vector comparison
/// - `cosine_similarity`: zero-norm or NaN results are 0.0
/// - `Measure`: cosine, euclidean, manhattan, chebyshev
pub use vectorizer::compare::{cosine_similarity, Compare, DefaultCompare};
pub use vectorizer::similarity::{most_similar, Measure};

/// Report
/// All matrices of one run, serializable and storable as CBOR.
pub use vectorizer::serde::Report;

pub use config::VectorizerConfig;
pub use error::{Error, Result};
pub use utils::matrix::Matrix;
