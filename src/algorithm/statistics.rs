//! Aggregation and distribution statistics
//!
//! Pure functions over plain values: categorical counting, equal-width
//! histogram binning, Gaussian kernel density estimation and two-way cross
//! tabulation. The chart data in [`crate::algorithm::analysis`] is built
//! from these.

use std::collections::{BTreeMap, BTreeSet};
use std::f64::consts::PI;
use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Count occurrences per distinct value, keyed by first appearance
fn count_with_first_seen<I, T>(values: I) -> Vec<(T, usize, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut counts: FxHashMap<T, (usize, usize)> = FxHashMap::default();
    for (idx, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((idx, 0)).1 += 1;
    }
    counts
        .into_iter()
        .map(|(value, (first_seen, count))| (value, first_seen, count))
        .collect()
}

/// Count occurrences of each distinct value, most frequent first
///
/// Ties keep the order in which the values first appear.
pub fn value_counts<I, T>(values: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    count_with_first_seen(values)
        .into_iter()
        .sorted_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)))
        .map(|(value, _, count)| (value, count))
        .collect()
}

/// Count occurrences of each distinct value, in order of first appearance
pub fn counts_in_appearance_order<I, T>(values: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    count_with_first_seen(values)
        .into_iter()
        .sorted_by_key(|(_, first_seen, _)| *first_seen)
        .map(|(value, _, count)| (value, count))
        .collect()
}

/// Count occurrences of each distinct key, ordered by key ascending
pub fn counts_by_key<I, K>(keys: I) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = K>,
    K: Ord,
{
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0usize) += 1;
    }
    counts.into_iter().collect()
}

/// Equal-width histogram over a set of values
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Number of values per bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin values into `bins` equal-width bins spanning their range
    ///
    /// Every bin is half-open except the last, which also holds the
    /// maximum. When all values are equal the range is widened to
    /// `[v - 0.5, v + 0.5]`. Returns `None` for no values or zero bins.
    #[must_use]
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return None;
        }

        let (mut lo, mut hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for v in finite {
            let idx = (((v - lo) / (hi - lo)) * bins as f64).floor() as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        Some(Self { edges, counts })
    }

    #[must_use]
    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if !self.counts.is_empty() => (hi - lo) / self.counts.len() as f64,
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (
            self.edges.first().copied().unwrap_or(0.0),
            self.edges.last().copied().unwrap_or(0.0),
        )
    }

    /// Total number of binned values
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterate over `(left edge, right edge, count)` per bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .iter()
            .tuple_windows()
            .zip(&self.counts)
            .map(|((left, right), count)| (*left, *right, *count))
    }
}

/// Evenly spaced points over `[start, end]`, both ends included
#[must_use]
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Sample standard deviation (n - 1 denominator)
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

/// Kernel bandwidth by Scott's rule: `std * n^(-1/5)`
///
/// `None` when there are fewer than two values or they do not vary.
#[must_use]
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let std = sample_std(values)?;
    if std <= 0.0 || !std.is_finite() {
        return None;
    }
    Some(std * (values.len() as f64).powf(-0.2))
}

/// Gaussian kernel density estimate evaluated at each grid point
///
/// The estimate integrates to one over the real line.
#[must_use]
pub fn gaussian_kde(values: &[f64], grid: &[f64]) -> Option<Vec<f64>> {
    let bandwidth = scott_bandwidth(values)?;
    let norm = 1.0 / (values.len() as f64 * bandwidth * (2.0 * PI).sqrt());

    Some(
        grid.iter()
            .map(|&x| {
                values
                    .iter()
                    .map(|&v| {
                        let z = (x - v) / bandwidth;
                        (-0.5 * z * z).exp()
                    })
                    .sum::<f64>()
                    * norm
            })
            .collect(),
    )
}

/// Two-way table of counts over (row label, column label) pairs
///
/// Rows and columns are ordered lexicographically and every combination
/// is present, with 0 for pairs that never occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossTab {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    /// `counts[row][column]`
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    /// Tabulate (row, column) pairs
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut cells: BTreeMap<(String, String), usize> = BTreeMap::new();
        let mut columns = BTreeSet::new();
        for (row, column) in pairs {
            columns.insert(column.clone());
            *cells.entry((row, column)).or_insert(0) += 1;
        }

        let columns: Vec<String> = columns.into_iter().collect();
        let rows: Vec<String> = cells.keys().map(|(row, _)| row.clone()).dedup().collect();

        let counts = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| {
                        cells
                            .get(&(row.clone(), column.clone()))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            columns,
            counts,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count for a (row, column) pair, 0 when either label is unknown
    #[must_use]
    pub fn count(&self, row: &str, column: &str) -> usize {
        let row_idx = self.rows.iter().position(|r| r == row);
        let col_idx = self.columns.iter().position(|c| c == column);
        match (row_idx, col_idx) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    /// Sum of one row across all columns
    #[must_use]
    pub fn row_total(&self, row_idx: usize) -> usize {
        self.counts.get(row_idx).map_or(0, |row| row.iter().sum())
    }

    /// Sum of every cell
    #[must_use]
    pub fn total(&self) -> usize {
        (0..self.rows.len()).map(|idx| self.row_total(idx)).sum()
    }

    /// Keep the `n` rows with the highest totals, highest first
    ///
    /// Rows with equal totals keep their label order. All columns are kept,
    /// even those that are zero in every remaining row.
    #[must_use]
    pub fn top_rows(&self, n: usize) -> Self {
        let keep: Vec<usize> = (0..self.rows.len())
            .sorted_by(|a, b| self.row_total(*b).cmp(&self.row_total(*a)).then(a.cmp(b)))
            .take(n)
            .collect();

        Self {
            rows: keep.iter().map(|&idx| self.rows[idx].clone()).collect(),
            columns: self.columns.clone(),
            counts: keep.iter().map(|&idx| self.counts[idx].clone()).collect(),
        }
    }
}
