/// Per-document weighting formulas.
///
/// Every method takes one document's raw count vector (vocabulary order)
/// and returns a row of the same length. Rows are computed independently,
/// so implementations must not look at other documents except through
/// `doc_num`.
pub trait TFIDFEngine {
    /// TFの行
    fn tf_row(counts: &[u32]) -> Vec<f64>;

    /// IDFの行
    /// # Arguments
    /// * `counts` - このドキュメントのカウント
    /// * `doc_num` - コーパスのドキュメント数
    fn idf_row(counts: &[u32], doc_num: usize) -> Vec<f64>;

    /// TF-IDFの行
    /// default is the cellwise product of `tf_row` and `idf_row`
    fn tf_idf_row(counts: &[u32], doc_num: usize) -> Vec<f64> {
        Self::tf_row(counts)
            .into_iter()
            .zip(Self::idf_row(counts, doc_num))
            .map(|(tf, idf)| tf * idf)
            .collect()
    }
}

/// デフォルトのエンジン
///
/// - TF: `count / total`, all zero when the document has no terms
/// - IDF: `log10(doc_num / count)`, `0.0` when `count == 0`
///
/// The IDF here is row-local: `count` is this document's own count of
/// the term, not the number of documents containing it. A term that
/// occurs once in each of three documents gets `log10(3)` everywhere,
/// where textbook IDF would give `log10(3/3) = 0`. The formula is kept
/// as is so outputs match the established matrices.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    #[inline]
    pub fn tf_calc(count: u32, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        count as f64 / total as f64
    }

    #[inline]
    pub fn idf_calc(count: u32, doc_num: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        (doc_num as f64 / count as f64).log10()
    }
}

impl TFIDFEngine for DefaultTFIDFEngine {
    fn tf_row(counts: &[u32]) -> Vec<f64> {
        let total: u64 = counts.iter().map(|&c| c as u64).sum();
        counts.iter().map(|&c| Self::tf_calc(c, total)).collect()
    }

    fn idf_row(counts: &[u32], doc_num: usize) -> Vec<f64> {
        counts.iter().map(|&c| Self::idf_calc(c, doc_num)).collect()
    }

    fn tf_idf_row(counts: &[u32], doc_num: usize) -> Vec<f64> {
        let total: u64 = counts.iter().map(|&c| c as u64).sum();
        counts
            .iter()
            .map(|&c| Self::tf_calc(c, total) * Self::idf_calc(c, doc_num))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn tf_divides_by_row_total() {
        let tf = DefaultTFIDFEngine::tf_row(&[3, 1, 0, 4]);
        assert_eq!(tf, vec![0.375, 0.125, 0.0, 0.5]);
    }

    #[test]
    fn tf_of_empty_document_is_zero() {
        assert_eq!(DefaultTFIDFEngine::tf_row(&[0, 0, 0]), vec![0.0; 3]);
        assert!(DefaultTFIDFEngine::tf_row(&[]).is_empty());
    }

    #[test]
    fn idf_uses_own_count() {
        let idf = DefaultTFIDFEngine::idf_row(&[3, 1, 0], 3);
        assert!((idf[0] - 0.0).abs() < EPS);
        assert!((idf[1] - 3f64.log10()).abs() < EPS);
        assert_eq!(idf[2], 0.0);
    }

    #[test]
    fn idf_can_go_negative() {
        // own count above the document count
        let idf = DefaultTFIDFEngine::idf_row(&[10], 2);
        assert!((idf[0] - 0.2f64.log10()).abs() < EPS);
        assert!(idf[0] < 0.0);
    }

    #[test]
    fn fused_tf_idf_matches_product() {
        let counts = [2, 0, 5, 1];
        let fused = DefaultTFIDFEngine::tf_idf_row(&counts, 4);
        let tf = DefaultTFIDFEngine::tf_row(&counts);
        let idf = DefaultTFIDFEngine::idf_row(&counts, 4);
        for j in 0..counts.len() {
            assert_eq!(fused[j], tf[j] * idf[j]);
        }
    }
}
