//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n m`, followed by `m` non-comment-lines
//! `u label v` representing the labelled directed edge `LabelledEdge(u, label, v)`.
//! Nodes are 0-indexed. Later lines overwrite the label of an earlier edge with the
//! same endpoints.

use std::io::Lines;

use tracing::debug;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader = EdgeListEdgesReader::try_new(reader, &self.comment_identifier)?;
        let n = edges_reader.number_of_nodes();

        let mut edges = Vec::new();
        while let Some(edge) = edges_reader.try_next_edge()? {
            edges.push(edge);
        }

        raise_error_unless!(
            edges.len() == edges_reader.number_of_edges() as usize,
            ErrorKind::InvalidData,
            format!(
                "Header announces {} edges, but {} were found.",
                edges_reader.number_of_edges(),
                edges.len()
            )
        );

        debug!(n, m = edges.len(), "read edge list");
        Ok(G::from_edges(n, edges))
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, io::*};
    ///
    /// let input = "3 2\n0 5 1\n# comment\n1 -2 2\n";
    /// let g = AdjList::try_read_edge_list(input.as_bytes()).unwrap();
    ///
    /// assert_eq!(g.ordered_edges(), vec![LabelledEdge(0, 5, 1), LabelledEdge(1, -2, 2)]);
    /// ```
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Line-based parser of the EdgeList-Format that consumes the reader
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    pub fn try_new(reader: R, comment_identifier: &'a str) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            comment_identifier,
        };

        let header = edge_list_reader
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        let mut parts = header.split_whitespace();
        edge_list_reader.number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        edge_list_reader.number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        Ok(edge_list_reader)
    }

    /// Returns the parsed number of edges in the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next non-comment-line if it exists or propagate an error.
    /// Blank lines are skipped as well.
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an edge from the next non-comment-line
    pub fn try_next_edge(&mut self) -> Result<Option<LabelledEdge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();
        let from: Node = parse_next_value!(parts, "Source node");
        let label: Label = parse_next_value!(parts, "Label");
        let dest: Node = parse_next_value!(parts, "Target node");

        raise_error_unless!(
            from < self.number_of_nodes && dest < self.number_of_nodes,
            ErrorKind::InvalidData,
            format!(
                "Edge ({from},{dest}) out of range for {} nodes.",
                self.number_of_nodes
            )
        );

        Ok(Some(LabelledEdge(from, label, dest)))
    }
}
