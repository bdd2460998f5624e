use std::cmp::Ordering;

use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{utils::matrix::Matrix, vectorizer::compare::{Compare, DefaultCompare}};

/// Measure used to fill a document×document matrix.
///
/// - Cosine: similarity in [-1, 1]; the default. Row-local IDF can be
///   negative, so TF-IDF rows can be too and their cosine may drop below 0
/// - Euclidean / Manhattan / Chebyshev: distances, 0 on the diagonal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Measure {
    #[default]
    Cosine,
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl Measure {
    #[inline]
    pub fn apply<N>(self, a: &[N], b: &[N]) -> f64
    where
        N: Num + Copy + Into<f64>,
    {
        match self {
            Measure::Cosine => <DefaultCompare as Compare<N>>::cosine_similarity(a, b),
            Measure::Euclidean => <DefaultCompare as Compare<N>>::euclidean_distance(a, b),
            Measure::Manhattan => <DefaultCompare as Compare<N>>::manhattan_distance(a, b),
            Measure::Chebyshev => <DefaultCompare as Compare<N>>::chebyshev_distance(a, b),
        }
    }
}

/// All-pairs matrix over the rows of `matrix`.
///
/// Only the upper triangle (diagonal included) is computed and then
/// mirrored, so `out(i, j) == out(j, i)` holds exactly.
pub fn pairwise<N>(matrix: &Matrix<N>, measure: Measure, parallel: bool) -> Matrix<f64>
where
    N: Num + Copy + Into<f64> + Sync,
{
    let rows: Vec<&[N]> = matrix.rows().collect();
    let n = rows.len();
    let upper = |i: usize| -> Vec<f64> {
        (i..n).map(|j| measure.apply(rows[i], rows[j])).collect()
    };
    let uppers: Vec<Vec<f64>> = if parallel {
        (0..n).into_par_iter().map(upper).collect()
    } else {
        (0..n).map(upper).collect()
    };

    let mut out = vec![vec![0.0; n]; n];
    for (i, tri) in uppers.into_iter().enumerate() {
        for (k, value) in tri.into_iter().enumerate() {
            out[i][i + k] = value;
            out[i + k][i] = value;
        }
    }
    Matrix::square(out)
}

/// Cosine similarity between every pair of rows
pub fn cosine_matrix<N>(matrix: &Matrix<N>, parallel: bool) -> Matrix<f64>
where
    N: Num + Copy + Into<f64> + Sync,
{
    pairwise(matrix, Measure::Cosine, parallel)
}

/// Other documents ranked by similarity to document `i` (1-based),
/// best first; ties go to the lower document number.
/// Empty if `i` is out of range.
pub fn most_similar(similarity: &Matrix<f64>, i: usize) -> Vec<(usize, f64)> {
    let Some(row) = similarity.row(i) else {
        return Vec::new();
    };
    let mut hits: Vec<(usize, f64)> = row
        .iter()
        .enumerate()
        .map(|(j, &score)| (j + 1, score))
        .filter(|&(j, _)| j != i)
        .collect();
    hits.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then(a.0.cmp(&b.0)));
    hits
}
