#[cfg(feature = "bincode")]
use bincode::{Decode, Encode};
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::utils::{INFINITY, is_reachable};

/// Directed graph over a fixed number of vertices, stored as a dense
/// row-major weight matrix.
///
/// `weights[i * vertices + j]` is the direct weight of `i -> j`: zero on the
/// diagonal, [`INFINITY`] where no edge was inserted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Decode, Encode))]
pub struct DistanceGraph {
    vertices: usize,
    weights: Vec<f64>,
}

impl DistanceGraph {
    /// Panics if `vertices * vertices` overflows `usize`; the loaders check
    /// this with [`cell_count`] first.
    pub fn new(vertices: usize) -> Self {
        let mut weights = vec![INFINITY; vertices * vertices];
        for i in 0..vertices {
            weights[i * vertices + i] = 0.0;
        }
        DistanceGraph { vertices, weights }
    }

    /// Builds a graph and inserts every `(from, to, weight)` triple with
    /// [`add_edge`](Self::add_edge), so out-of-range triples are dropped.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut graph = DistanceGraph::new(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    #[inline]
    fn contains(&self, vertex: usize) -> bool {
        vertex < self.vertices
    }

    /// Sets the weight of `from -> to`, overwriting any earlier weight.
    ///
    /// Does nothing when either endpoint is out of range. A self-loop
    /// overwrites the zero diagonal; that is left to the caller.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        if self.contains(from) && self.contains(to) {
            self.weights[from * self.vertices + to] = weight;
        } else {
            trace!(
                "dropping edge {} -> {}: graph has {} vertices",
                from, to, self.vertices
            );
        }
    }

    /// Like [`add_edge`](Self::add_edge) but reports an out-of-range endpoint
    /// instead of ignoring it.
    pub fn try_add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        for vertex in [from, to] {
            if !self.contains(vertex) {
                return Err(GraphError::IndexOutOfRange {
                    vertex,
                    vertex_count: self.vertices,
                });
            }
        }
        self.weights[from * self.vertices + to] = weight;
        Ok(())
    }

    /// The stored direct weight of `from -> to` (not a shortest distance).
    pub fn weight(&self, from: usize, to: usize) -> Option<f64> {
        if self.contains(from) && self.contains(to) {
            Some(self.weights[from * self.vertices + to])
        } else {
            None
        }
    }

    pub(crate) fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Finite off-diagonal cells, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.vertices;
        self.weights
            .iter()
            .enumerate()
            .filter_map(move |(idx, &weight)| {
                let (from, to) = (idx / n, idx % n);
                (from != to && is_reachable(weight)).then_some((from, to, weight))
            })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Reads a graph in the DIMACS shortest-path format:
    ///
    /// ```text
    /// c comment
    /// p sp <vertices> <arcs>
    /// a <from> <to> <weight>
    /// ```
    ///
    /// Vertex ids are 1-based. Arcs naming a vertex above the declared count
    /// are dropped like any other out-of-range edge.
    pub fn parse_dimacs<R: BufRead>(reader: R) -> Result<DistanceGraph> {
        let mut graph: Option<DistanceGraph> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            match parts[0] {
                "c" => continue,
                "p" => {
                    if graph.is_some() {
                        return Err(parse_error(line_no, "duplicate problem line"));
                    }
                    if parts.len() < 3 || parts[1] != "sp" {
                        return Err(parse_error(line_no, "expected `p sp <vertices> <arcs>`"));
                    }
                    let vertices = parse_field::<usize>(parts[2], line_no, "vertex count")?;
                    if cell_count(vertices).is_none() {
                        return Err(parse_error(
                            line_no,
                            &format!("vertex count {} is too large", vertices),
                        ));
                    }
                    graph = Some(DistanceGraph::new(vertices));
                }
                "a" => {
                    let Some(g) = graph.as_mut() else {
                        return Err(parse_error(line_no, "arc before problem line"));
                    };
                    if parts.len() < 4 {
                        return Err(parse_error(line_no, "expected `a <from> <to> <weight>`"));
                    }
                    let from = parse_vertex_id(parts[1], line_no)?;
                    let to = parse_vertex_id(parts[2], line_no)?;
                    let weight = parse_field::<f64>(parts[3], line_no, "weight")?;
                    g.add_edge(from, to, weight);
                }
                other => {
                    return Err(parse_error(
                        line_no,
                        &format!("unknown line type `{}`", other),
                    ));
                }
            }
        }

        graph.ok_or_else(|| parse_error(0, "missing problem line"))
    }

    pub fn from_dimacs_file(path: &Path) -> Result<DistanceGraph> {
        let file = File::open(path)?;
        Self::parse_dimacs(BufReader::new(file))
    }

    #[cfg(feature = "bincode")]
    pub fn from_file(path: &Path) -> Result<DistanceGraph> {
        let file = File::open(path)?;
        let config = bincode::config::standard();
        let mut reader = BufReader::new(file);
        let graph: DistanceGraph = bincode::decode_from_std_read(&mut reader, config)?;

        let expected = cell_count(graph.vertices).ok_or(GraphError::TooManyVertices {
            vertices: graph.vertices,
        })?;
        if graph.weights.len() != expected {
            return Err(GraphError::MalformedMatrix {
                expected,
                found: graph.weights.len(),
            });
        }
        Ok(graph)
    }

    #[cfg(feature = "bincode")]
    pub fn to_file(&self, path: &Path) -> Result<()> {
        use std::io::Write;

        let file = File::create(path)?;
        let config = bincode::config::standard();
        let mut writer = std::io::BufWriter::new(file);

        bincode::encode_into_std_write(self, &mut writer, config)?;
        writer.flush()?;

        Ok(())
    }

    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::Graph<usize, f64> {
        let mut pg_graph = petgraph::Graph::new();
        let nodes: Vec<_> = (0..self.vertices).map(|i| pg_graph.add_node(i)).collect();

        for (from, to, weight) in self.edges() {
            pg_graph.add_edge(nodes[from], nodes[to], weight);
        }
        pg_graph
    }
}

/// Cells in a `vertices x vertices` matrix, `None` on overflow.
pub fn cell_count(vertices: usize) -> Option<usize> {
    vertices.checked_mul(vertices)
}

fn parse_error(line: usize, message: &str) -> GraphError {
    GraphError::Parse {
        line,
        message: message.to_string(),
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize, what: &str) -> Result<T> {
    field
        .parse::<T>()
        .map_err(|_| parse_error(line, &format!("invalid {} `{}`", what, field)))
}

fn parse_vertex_id(field: &str, line: usize) -> Result<usize> {
    parse_field::<usize>(field, line, "vertex id")?
        .checked_sub(1)
        .ok_or_else(|| parse_error(line, "vertex ids are 1-based"))
}

/// Prints the adjacency matrix, one row per line, `INF` for missing edges.
impl fmt::Display for DistanceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.weights.chunks_exact(self.vertices.max(1)) {
            let cells: Vec<String> = row
                .iter()
                .map(|&w| {
                    if is_reachable(w) {
                        format!("{:.1}", w)
                    } else {
                        "INF".to_string()
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
