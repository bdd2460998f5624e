use num::Num;

/// Measures between two dense rows of equal length.
pub trait Compare<N>
where
    N: Num + Copy,
{
    /// dot積
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: &[N], other: &[N]) -> f64;
    /// ||a|| = sqrt(Σ(a_i^2))
    fn norm(vec: &[N]) -> f64;
    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// zero norm or NaN gives 0.0
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64;
    /// ユークリッド距離
    /// d(a, b) = sqrt(Σ((a_i - b_i)^2))
    fn euclidean_distance(vec: &[N], other: &[N]) -> f64;
    /// マンハッタン距離
    /// d(a, b) = Σ(|a_i - b_i|)
    fn manhattan_distance(vec: &[N], other: &[N]) -> f64;
    /// チェビシェフ距離
    /// d(a, b) = max(|a_i - b_i|)
    fn chebyshev_distance(vec: &[N], other: &[N]) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Num + Copy + Into<f64>,
{
    #[inline]
    fn dot(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(vec.len(), other.len(), "Vectors must be of the same length to compute dot product.");
        vec.iter()
            .zip(other)
            .map(|(&a, &b)| a.into() * b.into())
            .sum()
    }

    #[inline]
    fn norm(vec: &[N]) -> f64 {
        vec.iter()
            .map(|&a| {
                let a: f64 = a.into();
                a * a
            })
            .sum::<f64>()
            .sqrt()
    }

    #[inline]
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64 {
        let norm_a = <Self as Compare<N>>::norm(vec);
        let norm_b = <Self as Compare<N>>::norm(other);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        let sim = <Self as Compare<N>>::dot(vec, other) / (norm_a * norm_b);
        // 丸め誤差で自己類似度が 1 を超えないようにする
        if sim.is_nan() { 0.0 } else { sim.clamp(-1.0, 1.0) }
    }

    #[inline]
    fn euclidean_distance(vec: &[N], other: &[N]) -> f64 {
        vec.iter()
            .zip(other)
            .map(|(&a, &b)| {
                let diff = a.into() - b.into();
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }

    #[inline]
    fn manhattan_distance(vec: &[N], other: &[N]) -> f64 {
        vec.iter()
            .zip(other)
            .map(|(&a, &b)| (a.into() - b.into()).abs())
            .sum()
    }

    #[inline]
    fn chebyshev_distance(vec: &[N], other: &[N]) -> f64 {
        vec.iter()
            .zip(other)
            .map(|(&a, &b)| (a.into() - b.into()).abs())
            .fold(0.0, f64::max)
    }
}

/// Cosine similarity of two rows with the zero-vector policy applied
#[inline]
pub fn cosine_similarity<N>(vec: &[N], other: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    <DefaultCompare as Compare<N>>::cosine_similarity(vec, other)
}
