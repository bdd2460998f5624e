use std::{fmt::{self, Display}, hash::Hash};

use indexmap::{Equivalent, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::{Error, Result}, vectorizer::token::Tokenizer};

/// Insertion-ordered set of unique terms.
///
/// `terms()[i]` is the term of column `i` in every matrix built on this
/// vocabulary, and `index_of(terms()[i]) == i`. Terms keep their
/// first-seen order; nothing is ever removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize + Hash + Eq", deserialize = "T: Deserialize<'de> + Hash + Eq"))]
pub struct Vocabulary<T = String>
where
    T: Hash + Eq,
{
    terms: IndexSet<T>,
}

// IndexSet の == は順序を見ないので列順まで比較する
impl<T> PartialEq for Vocabulary<T>
where
    T: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.terms.iter().eq(other.terms.iter())
    }
}

impl<T> Eq for Vocabulary<T> where T: Hash + Eq {}

impl<T> Default for Vocabulary<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self { terms: IndexSet::new() }
    }
}

impl<T> Vocabulary<T>
where
    T: Hash + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `term` at index `size()` unless it is already present
    #[inline]
    pub fn add(&mut self, term: T) {
        self.terms.insert(term);
    }

    /// `add` every element, in order
    pub fn union<I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = T>,
    {
        for term in terms {
            self.add(term);
        }
    }

    /// Column index of `term`
    ///
    /// # Errors
    /// `Error::UnknownTerm` if `term` was never added.
    #[inline]
    pub fn index_of<Q>(&self, term: &Q) -> Result<usize>
    where
        Q: ?Sized + Hash + Equivalent<T> + Display,
    {
        self.terms.get_index_of(term).ok_or_else(|| Error::unknown_term(term))
    }

    #[inline]
    pub fn get_index_of<Q>(&self, term: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.terms.get_index_of(term)
    }

    #[inline]
    pub fn contains<Q>(&self, term: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.terms.contains(term)
    }

    /// Term at column `index`
    #[inline]
    pub fn term(&self, index: usize) -> Option<&T> {
        self.terms.get_index(index)
    }

    /// Terms in column order
    pub fn terms(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.terms.iter()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Count vector of an already tokenized sequence.
    /// Length is always `size()`.
    ///
    /// # Errors
    /// `Error::UnknownTerm` on the first term the vocabulary doesn't hold.
    pub fn count_terms<I, Q>(&self, terms: I) -> Result<Vec<u32>>
    where
        I: IntoIterator,
        I::Item: AsRef<Q>,
        Q: ?Sized + Hash + Equivalent<T> + Display,
    {
        let mut vector = vec![0u32; self.size()];
        for term in terms {
            vector[self.index_of(term.as_ref())?] += 1;
        }
        Ok(vector)
    }
}

impl Vocabulary<String> {
    /// Vocabulary of a single text, in token order
    pub fn from_text<Tk>(text: &str, tokenizer: &Tk) -> Self
    where
        Tk: Tokenizer + ?Sized,
    {
        let mut vocab = Self::new();
        vocab.union(tokenizer.tokenize(text));
        vocab
    }

    /// Fold every document's tokens into one vocabulary,
    /// document order then token order.
    pub fn from_corpus<S, Tk>(documents: &[S], tokenizer: &Tk) -> Self
    where
        S: AsRef<str>,
        Tk: Tokenizer + ?Sized,
    {
        let mut vocab = Self::new();
        for doc in documents {
            vocab.union(Self::from_text(doc.as_ref(), tokenizer).terms);
        }
        debug!(documents = documents.len(), terms = vocab.size(), "vocabulary built");
        vocab
    }

    /// Count vector of `text` against this vocabulary.
    ///
    /// # Errors
    /// `Error::UnknownTerm` when `text` has a token outside the vocabulary.
    /// Vectorizing the corpus the vocabulary was built from never fails.
    pub fn vectorize<Tk>(&self, text: &str, tokenizer: &Tk) -> Result<Vec<u32>>
    where
        Tk: Tokenizer + ?Sized,
    {
        self.count_terms::<_, str>(tokenizer.tokenize(text))
    }
}

impl<T> FromIterator<T> for Vocabulary<T>
where
    T: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vocab = Self::new();
        vocab.union(iter);
        vocab
    }
}

impl<T> Display for Vocabulary<T>
where
    T: Hash + Eq + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::token::UnicodeWordTokenizer;

    #[test]
    fn add_is_idempotent() {
        let mut vocab = Vocabulary::new();
        vocab.add("x".to_string());
        vocab.add("y".to_string());
        vocab.add("x".to_string());
        assert_eq!(vocab.size(), 2);
        assert_eq!(vocab.index_of("x").unwrap(), 0);
        assert_eq!(vocab.index_of("y").unwrap(), 1);
    }

    #[test]
    fn union_keeps_first_seen_order() {
        let mut vocab: Vocabulary<u32> = Vocabulary::new();
        vocab.union([3, 1, 3, 2, 1]);
        assert_eq!(vocab.terms().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn unknown_term_is_an_error() {
        let vocab: Vocabulary = ["a".to_string()].into_iter().collect();
        match vocab.index_of("b") {
            Err(Error::UnknownTerm { term }) => assert_eq!(term, "b"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(vocab.get_index_of("b"), None);
    }

    #[test]
    fn bijection() {
        let vocab = Vocabulary::from_corpus(&["one two three", "two four"], &UnicodeWordTokenizer);
        for (i, term) in vocab.terms().enumerate() {
            assert_eq!(vocab.index_of(term.as_str()).unwrap(), i);
            assert_eq!(vocab.term(i), Some(term));
        }
        assert_eq!(vocab.term(vocab.size()), None);
    }

    #[test]
    fn vectorize_rejects_foreign_text() {
        let vocab = Vocabulary::from_text("red green", &UnicodeWordTokenizer);
        assert_eq!(vocab.vectorize("green green red", &UnicodeWordTokenizer).unwrap(), vec![1, 2]);
        assert!(matches!(
            vocab.vectorize("green blue", &UnicodeWordTokenizer),
            Err(Error::UnknownTerm { .. })
        ));
    }

    #[test]
    fn empty_text_is_zero_vector() {
        let vocab = Vocabulary::from_text("a b c", &UnicodeWordTokenizer);
        assert_eq!(vocab.vectorize("", &UnicodeWordTokenizer).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn display_lists_terms() {
        let vocab = Vocabulary::from_text("b a", &UnicodeWordTokenizer);
        assert_eq!(vocab.to_string(), "[b, a]");
    }
}
