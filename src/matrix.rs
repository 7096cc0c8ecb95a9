use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{VertexDistance, format_distance, is_reachable};

/// Square, row-major matrix of shortest distances returned by an all-pairs query.
///
/// A snapshot: it owns its buffer and never changes when the graph it was
/// computed from gains edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub(crate) fn from_raw(size: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        DistanceMatrix { size, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from < self.size && to < self.size {
            Some(self.data[from * self.size + to])
        } else {
            None
        }
    }

    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_some_and(is_reachable)
    }

    /// Panics if `from` is out of range.
    pub fn row(&self, from: usize) -> &[f64] {
        assert!(from < self.size, "row {} out of range", from);
        &self.data[from * self.size..(from + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics, and an empty matrix has no rows anyway
        self.data.chunks_exact(self.size.max(1))
    }

    pub fn distances_from(&self, from: usize) -> impl Iterator<Item = VertexDistance> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .map(|(vertex, &distance)| VertexDistance::new(vertex, distance))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Rows with unreachable cells as `None`, e.g. for JSON output where
    /// infinity has no representation.
    pub fn finite_rows(&self) -> Vec<Vec<Option<f64>>> {
        self.rows()
            .map(|row| row.iter().map(|&d| d.is_finite().then_some(d)).collect())
            .collect()
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        assert!(
            from < self.size && to < self.size,
            "index ({}, {}) out of range for {}x{} matrix",
            from,
            to,
            self.size,
            self.size
        );
        &self.data[from * self.size + to]
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for from in 0..self.size {
            for to in 0..self.size {
                writeln!(f, "{} -> {}: {}", from, to, format_distance(self[(from, to)]))?;
            }
        }
        Ok(())
    }
}
