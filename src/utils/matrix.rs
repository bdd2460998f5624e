use std::fmt::{self, Display};

use num::Num;
use serde::{Deserialize, Serialize};

const DEFAULT_PRECISION: usize = 4;

/// Dense row-major table with labelled columns.
///
/// Rows are documents and are addressed 1-based (`row(1)` is the first
/// document), matching how the matrices are printed. Columns are
/// 0-based positions into `columns()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<N> {
    columns: Vec<String>,
    rows: Vec<Vec<N>>,
}

impl<N> Matrix<N>
where
    N: Num + Copy,
{
    pub fn new(columns: Vec<String>, rows: Vec<Vec<N>>) -> Self {
        debug_assert!(
            rows.iter().all(|r| r.len() == columns.len()),
            "every row must have one cell per column"
        );
        Self { columns, rows }
    }

    /// N×N table labelled `1..=N` on the column axis
    pub fn square(rows: Vec<Vec<N>>) -> Self {
        let columns = (1..=rows.len()).map(|i| i.to_string()).collect();
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based row
    pub fn row(&self, i: usize) -> Option<&[N]> {
        i.checked_sub(1).and_then(|i| self.rows.get(i)).map(Vec::as_slice)
    }

    /// Cell at 1-based row `i`, 0-based column `j`
    pub fn get(&self, i: usize, j: usize) -> Option<N> {
        self.row(i).and_then(|r| r.get(j)).copied()
    }

    /// Cell at 1-based row `i` in the column labelled `column`
    pub fn get_by_label(&self, i: usize, column: &str) -> Option<N> {
        let j = self.columns.iter().position(|c| c == column)?;
        self.get(i, j)
    }

    /// Rows in order, 0-based
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[N]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<Vec<N>> {
        self.rows
    }

    /// Sum of 1-based row `i`
    pub fn row_sum(&self, i: usize) -> Option<N> {
        self.row(i).map(|r| r.iter().fold(N::zero(), |acc, &v| acc + v))
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

/// `{}` prints 4 decimals for float cells, `{:.N}` picks N.
/// Integer cells ignore the precision.
impl<N> Display for Matrix<N>
where
    N: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(DEFAULT_PRECISION);
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.iter().map(|v| format!("{v:.prec$}")).collect())
            .collect();

        let index_width = self.rows.len().to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(j, label)| {
                cells
                    .iter()
                    .filter_map(|r| r.get(j))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(label.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (label, w) in self.columns.iter().zip(&widths) {
            write!(f, "  {label:>w$}")?;
        }
        writeln!(f)?;
        for (i, row) in cells.iter().enumerate() {
            write!(f, "{:>index_width$}", i + 1)?;
            for (cell, w) in row.iter().zip(&widths) {
                write!(f, "  {cell:>w$}")?;
            }
            writeln!(f)?;
        }
        write!(f, "[{} rows x {} columns]", self.rows.len(), self.columns.len())
    }
}
