// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use dockerfile_rdf::*;
use oxrdf::Term;

/// Reads and builds a graph from Dockerfile text.
pub fn graph_of(dockerfile: &str) -> Result<Graph> {
  build(&read_instructions(dockerfile)?)
}

/// Returns true if the graph holds the given triple.
pub fn has<P, O>(graph: &Graph, subject: &NamedNode, predicate: P, object: O) -> bool
where
  P: Into<NamedNode>,
  O: Into<Term>
{
  graph.contains(&Triple::new(subject.clone(), predicate, object))
}

/// A plain string literal.
pub fn literal(value: &str) -> Literal {
  Literal::new_simple_literal(value)
}
