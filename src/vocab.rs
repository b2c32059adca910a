// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

//! Namespaces and node identifiers.
//!
//! Every node IRI is a pure function of Dockerfile content: base images are
//! keyed by their (URL-encoded) reference, steps and derived images by the MD5
//! of the raw instruction text, agents by the MD5 of the MAINTAINER value and
//! packages by their name. Textually identical instructions therefore map to
//! the same nodes.

use oxrdf::NamedNode;
use snafu::ResultExt;

use crate::error::*;

/// A fixed IRI prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace(&'static str);

impl Namespace {
  pub const fn new(iri: &'static str) -> Namespace {
    Namespace(iri)
  }

  /// The namespace IRI itself.
  pub fn iri(&self) -> &'static str {
    self.0
  }

  /// Appends a local name to this namespace. The local name must not
  /// contain characters that are invalid in an IRI.
  pub fn term(&self, local: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("{}{}", self.0, local))
  }
}

pub const DCKR: Namespace = Namespace::new("http://purl.org/dckr/vocab#");
pub const PROV: Namespace = Namespace::new("http://www.w3.org/ns/prov#");
pub const FOAF: Namespace = Namespace::new("http://xmlns.com/foaf/0.1/");
pub const D: Namespace = Namespace::new("http://purl.org/dckr/resource/");

pub const RDF: Namespace = Namespace::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#");
pub const RDFS: Namespace = Namespace::new("http://www.w3.org/2000/01/rdf-schema#");
pub const XSD: Namespace = Namespace::new("http://www.w3.org/2001/XMLSchema#");

/// Prefix bindings, in the order they are declared in Turtle output.
pub const PREFIXES: &[(&str, Namespace)] = &[
  ("dckr", DCKR),
  ("prov", PROV),
  ("foaf", FOAF),
  ("d", D),
  ("rdf", RDF),
  ("rdfs", RDFS),
  ("xsd", XSD),
];

/// Hex MD5 digest of some instruction text.
pub fn content_hash(content: &str) -> String {
  format!("{:x}", md5::compute(content.as_bytes()))
}

/// The node for a base image, e.g. `d:image/ubuntu%3A18.04`.
///
/// Each `/`-separated segment of the reference is encoded individually so
/// namespaced repositories keep their path structure.
pub fn base_image_iri(reference: &str) -> NamedNode {
  let encoded: Vec<String> = reference.split('/')
    .map(|segment| urlencoding::encode(segment).into_owned())
    .collect();

  D.term(&format!("image/{}", encoded.join("/")))
}

/// The node for the image produced by an instruction.
pub fn image_iri(content: &str) -> NamedNode {
  D.term(&format!("image/{}", content_hash(content)))
}

/// The node for the build step that runs an instruction.
pub fn step_iri(content: &str) -> NamedNode {
  D.term(&format!("step/{}", content_hash(content)))
}

/// The node for a maintainer.
pub fn agent_iri(mailbox: &str) -> NamedNode {
  D.term(&content_hash(mailbox))
}

/// The node for an apt package. Fails if the name cannot appear in an IRI,
/// e.g. `a{b}`.
pub fn package_iri(name: &str) -> Result<NamedNode> {
  let iri = format!("{}package/apt/{}", D.iri(), name);

  NamedNode::new(iri.as_str()).context(InvalidIriError { iri })
}
