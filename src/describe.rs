//! Renderer-agnostic description of an automaton.
//!
//! [`describe_automaton`] turns the full transition table into nodes and labeled edges. How
//! they get laid out and drawn is up to the consumer; [`AutomatonGraph::to_dot`] is provided
//! for Graphviz and [`AutomatonGraph::to_ron`] for anything that wants structured data.

use std::fmt::{Display, Formatter};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::engine::pattern_label;
use crate::failure::build_failure_table;
use crate::{Automaton, SearchError, Symbol};

const EPSILON: &str = "ε";

/// One automaton state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// State index
    pub id: usize,
    /// Display label, `q<id>`
    pub label: String,
    /// Whether the scan starts here
    pub initial: bool,
    /// Whether reaching this state means a full match
    pub accepting: bool,
}

/// What an edge stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Consumes the symbol in its label
    Transition,
    /// KMP failure link, taken without consuming anything
    Failure,
}

/// A labeled directed edge between two states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source state
    pub from: usize,
    /// Target state
    pub to: usize,
    /// Symbol label, `ε` for failure links
    pub label: String,
    /// Kind of the edge
    pub kind: EdgeKind,
}

/// Directed graph of an automaton, ready to be handed to a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonGraph {
    /// The pattern the automaton recognizes
    pub pattern: String,
    /// One node per state, in state order
    pub nodes: Vec<GraphNode>,
    /// Edges, grouped by source state
    pub edges: Vec<GraphEdge>,
}

fn nodes(pattern_len: usize) -> Vec<GraphNode> {
    (0..=pattern_len)
        .map(|id| GraphNode {
            id,
            label: format!("q{id}"),
            initial: id == 0,
            accepting: id == pattern_len,
        })
        .collect()
}

/// Describes every transition of `automaton`: one node per state, one edge per
/// `(state, symbol)` pair. Self-loops and edges back to earlier states are kept as is.
pub fn describe_automaton<T: Symbol>(automaton: &Automaton<T>) -> AutomatonGraph {
    let edges = automaton
        .transitions()
        .map(|t| GraphEdge {
            from: t.from,
            to: t.to,
            label: t.symbol.label(),
            kind: EdgeKind::Transition,
        })
        .collect();

    AutomatonGraph {
        pattern: pattern_label(automaton.pattern()),
        nodes: nodes(automaton.pattern().len()),
        edges,
    }
}

/// Describes the compact KMP view of `pattern`: the forward edge of each state labeled
/// with the expected symbol, plus an `ε` failure link from every state `i > 0` to
/// `failure[i - 1]`.
///
/// Unlike [`describe_automaton`] this needs no alphabet.
pub fn describe_failure_links<T: Symbol>(pattern: &[T]) -> Result<AutomatonGraph, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }
    let failure = build_failure_table(pattern);

    let mut edges = Vec::with_capacity(2 * pattern.len());
    for (i, symbol) in pattern.iter().enumerate() {
        if i > 0 {
            edges.push(GraphEdge {
                from: i,
                to: failure[i - 1],
                label: EPSILON.to_string(),
                kind: EdgeKind::Failure,
            });
        }
        edges.push(GraphEdge {
            from: i,
            to: i + 1,
            label: symbol.label(),
            kind: EdgeKind::Transition,
        });
    }
    let m = pattern.len();
    edges.push(GraphEdge {
        from: m,
        to: failure[m - 1],
        label: EPSILON.to_string(),
        kind: EdgeKind::Failure,
    });

    Ok(AutomatonGraph {
        pattern: pattern_label(pattern),
        nodes: nodes(m),
        edges,
    })
}

/// Graphviz view of a graph
struct Dot<'a>(&'a AutomatonGraph);

impl Display for Dot<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let graph = self.0;
        writeln!(f, "digraph \"{}\" {{", escape_dot(&graph.pattern))?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    start [shape=point, style=invis];")?;
        for node in &graph.nodes {
            let shape = if node.accepting { "doublecircle" } else { "circle" };
            writeln!(f, "    {} [shape={shape}, label=\"{}\"];", node.id, escape_dot(&node.label))?;
        }
        for node in graph.nodes.iter().filter(|node| node.initial) {
            writeln!(f, "    start -> {};", node.id)?;
        }
        for edge in &graph.edges {
            let style = match edge.kind {
                EdgeKind::Transition => "",
                EdgeKind::Failure => ", style=dashed",
            };
            writeln!(
                f,
                "    {} -> {} [label=\"{}\"{style}];",
                edge.from,
                edge.to,
                escape_dot(&edge.label)
            )?;
        }
        writeln!(f, "}}")
    }
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl AutomatonGraph {
    /// The accepting nodes
    pub fn accepting(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|node| node.accepting)
    }

    /// Renders the graph in Graphviz DOT
    pub fn to_dot(&self) -> String {
        Dot(self).to_string()
    }

    /// Serializes the graph to pretty-printed RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Renders the graph as a transition table: one row per state, one column per edge
    /// label. The initial state is marked `>`, the accepting one `*`.
    pub fn to_table(&self) -> String {
        let labels: IndexSet<&str> = self.edges.iter().map(|edge| edge.label.as_str()).collect();

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(self.nodes.len() + 1);
        let mut header = vec![String::new()];
        header.extend(labels.iter().map(|label| label.to_string()));
        rows.push(header);

        for node in &self.nodes {
            let marker = match (node.initial, node.accepting) {
                (true, _) => '>',
                (false, true) => '*',
                (false, false) => ' ',
            };
            let mut row = vec![format!("{marker} {}", node.label)];
            for label in &labels {
                let targets: Vec<String> = self
                    .edges
                    .iter()
                    .filter(|edge| edge.from == node.id && edge.label == *label)
                    .map(|edge| format!("q{}", edge.to))
                    .collect();
                row.push(if targets.is_empty() {
                    String::from("-")
                } else {
                    targets.join(",")
                });
            }
            rows.push(row);
        }

        let widths: Vec<usize> = (0..rows[0].len())
            .map(|col| rows.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
            .collect();

        let mut table = String::new();
        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            table.push_str(line.trim_end());
            table.push('\n');
        }
        table
    }
}
