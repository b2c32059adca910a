// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::io::Write;

use oxttl::{NTriplesSerializer, TurtleSerializer};
use snafu::ResultExt;

use crate::error::*;
use crate::graph::{sorted_triples, Graph};
use crate::vocab::PREFIXES;

/// An output syntax for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  /// One absolute `<s> <p> <o> .` statement per line.
  NTriples,

  /// Prefix declarations followed by statements grouped by subject.
  Turtle
}

impl Default for Format {
  fn default() -> Self {
    Format::NTriples
  }
}

fn turtle_serializer() -> Result<TurtleSerializer> {
  PREFIXES.iter()
    .try_fold(TurtleSerializer::new(), |serializer, (prefix, namespace)| {
      serializer
        .with_prefix(*prefix, namespace.iri())
        .context(InvalidIriError { iri: namespace.iri() })
    })
}

/// Writes a graph to `writer` in the given format. Triples are written in a
/// stable order so the same graph always produces the same bytes.
pub fn write_graph<W: Write>(graph: &Graph, format: Format, writer: W) -> Result<()> {
  let triples = sorted_triples(graph);

  let mut writer = match format {
    Format::NTriples => {
      let mut serializer = NTriplesSerializer::new().for_writer(writer);
      for triple in triples {
        serializer.serialize_triple(triple).context(WriteError)?;
      }

      serializer.finish()
    },
    Format::Turtle => {
      let mut serializer = turtle_serializer()?.for_writer(writer);
      for triple in triples {
        serializer.serialize_triple(triple).context(WriteError)?;
      }

      serializer.finish().context(WriteError)?
    }
  };

  writer.flush().context(WriteError)
}

/// Serializes a graph to a string in the given format.
pub fn serialize(graph: &Graph, format: Format) -> Result<String> {
  let mut buf = Vec::new();
  write_graph(graph, format, &mut buf)?;

  Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
  use indoc::indoc;
  use oxrdf::vocab::{rdf, rdfs};
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::graph::*;
  use crate::vocab::*;

  fn sample() -> Graph {
    let mut graph = Graph::new();
    let step = D.term("step/abc");

    graph.add(&step, rdf::TYPE, PROV.term("Activity"));
    graph.add(&step, DCKR.term("order"), integer(1));
    graph.add(&step, rdfs::LABEL, Literal::new_simple_literal("RUN echo \"hi\"\n"));

    graph
  }

  #[test]
  fn ntriples() -> Result<()> {
    assert_eq!(serialize(&sample(), Format::NTriples)?, indoc!(r#"
      <http://purl.org/dckr/resource/step/abc> <http://purl.org/dckr/vocab#order> "1"^^<http://www.w3.org/2001/XMLSchema#integer> .
      <http://purl.org/dckr/resource/step/abc> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/ns/prov#Activity> .
      <http://purl.org/dckr/resource/step/abc> <http://www.w3.org/2000/01/rdf-schema#label> "RUN echo \"hi\"\n" .
    "#));

    Ok(())
  }

  #[test]
  fn turtle() -> Result<()> {
    let out = serialize(&sample(), Format::Turtle)?;

    for (prefix, namespace) in PREFIXES {
      let declaration = format!("{}: <{}>", prefix, namespace.iri());
      assert!(out.contains(&declaration), "missing {} in {}", declaration, out);
    }

    assert!(out.contains("prov:Activity"));
    assert!(out.contains("dckr:order"));
    assert!(!out.contains("<http://www.w3.org/ns/prov#Activity>"));

    Ok(())
  }

  #[test]
  fn empty_graph() -> Result<()> {
    assert_eq!(serialize(&Graph::new(), Format::NTriples)?, "");

    Ok(())
  }
}
