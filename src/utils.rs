use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "bincode")]
use bincode::{Decode, Encode};

/// Sentinel for "no edge" in the weight matrix and "no path" in a distance matrix.
pub const INFINITY: f64 = f64::INFINITY;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Decode, Encode))]
pub struct VertexDistance {
    pub vertex: usize,
    pub distance: f64,
}

impl VertexDistance {
    pub fn new(vertex: usize, distance: f64) -> Self {
        VertexDistance { vertex, distance }
    }

    pub fn is_reachable(&self) -> bool {
        is_reachable(self.distance)
    }
}

impl Eq for VertexDistance {}
#[allow(clippy::non_canonical_partial_ord_impl)]
impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.distance.partial_cmp(&other.distance) {
            Some(Ordering::Equal) => Some(self.vertex.cmp(&other.vertex)),
            other => other,
        }
    }
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

#[inline]
pub fn is_reachable(distance: f64) -> bool {
    distance != INFINITY
}

/// Formats a distance with one decimal, or `unreachable` for [`INFINITY`].
pub fn format_distance(distance: f64) -> String {
    if is_reachable(distance) {
        format!("{:.1}", distance)
    } else {
        "unreachable".to_string()
    }
}
