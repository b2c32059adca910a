// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use oxrdf::vocab::{rdf, xsd};
use oxrdf::{NamedOrBlankNodeRef, TermRef, TripleRef};

pub use oxrdf::{Graph, Literal, NamedNode, Term, Triple};

/// An `xsd:integer` literal.
pub fn integer(n: usize) -> Literal {
  Literal::new_typed_literal(n.to_string(), xsd::INTEGER)
}

/// Convenience methods over `oxrdf::Graph` for the named-node-only graphs
/// built here.
pub trait GraphExt {
  /// Adds a triple, returning false if it was already present.
  fn add<P, O>(&mut self, subject: &NamedNode, predicate: P, object: O) -> bool
  where
    P: Into<NamedNode>,
    O: Into<Term>;

  /// All objects of triples with the given subject and predicate.
  fn objects(&self, subject: &NamedNode, predicate: &NamedNode) -> Vec<Term>;

  /// All named subjects of triples with the given predicate and object.
  fn subjects(&self, predicate: &NamedNode, object: &Term) -> Vec<NamedNode>;

  /// All named subjects with the given `rdf:type`.
  fn instances(&self, class: &NamedNode) -> Vec<NamedNode> {
    let rdf_type = NamedNode::from(rdf::TYPE);
    self.subjects(&rdf_type, &Term::from(class.clone()))
  }
}

impl GraphExt for Graph {
  fn add<P, O>(&mut self, subject: &NamedNode, predicate: P, object: O) -> bool
  where
    P: Into<NamedNode>,
    O: Into<Term>
  {
    self.insert(&Triple::new(subject.clone(), predicate, object))
  }

  fn objects(&self, subject: &NamedNode, predicate: &NamedNode) -> Vec<Term> {
    self.iter()
      .filter(|t| {
        if let NamedOrBlankNodeRef::NamedNode(s) = t.subject {
          s == subject.as_ref() && t.predicate == predicate.as_ref()
        } else {
          false
        }
      })
      .map(|t| t.object.into_owned())
      .collect()
  }

  fn subjects(&self, predicate: &NamedNode, object: &Term) -> Vec<NamedNode> {
    self.iter()
      .filter(|t| t.predicate == predicate.as_ref() && t.object == object.as_ref())
      .filter_map(|t| match t.subject {
        NamedOrBlankNodeRef::NamedNode(s) => Some(s.into_owned()),
        _ => None
      })
      .collect()
  }
}

/// The triples of a graph in a stable order (by their N-Triples form), so a
/// graph always serializes the same way regardless of insertion order.
pub fn sorted_triples(graph: &Graph) -> Vec<TripleRef<'_>> {
  let mut triples: Vec<TripleRef<'_>> = graph.iter().collect();
  triples.sort_by_cached_key(|t| t.to_string());

  triples
}

/// Returns the lexical value if this term is a literal, otherwise None.
pub fn literal_value(term: &Term) -> Option<&str> {
  match term.as_ref() {
    TermRef::Literal(lit) => Some(lit.value()),
    _ => None
  }
}
