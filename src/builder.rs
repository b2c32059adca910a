// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

//! Maps instruction records onto a provenance graph.
//!
//! Each instruction becomes a `prov:Activity` (the build step) that uses the
//! previous image and generates a new one, giving a linear chain of
//! `prov:Entity` images from the base image named by `FROM` to the final
//! image, which is attributed to the maintainer.

use oxrdf::vocab::rdfs;
use oxrdf::vocab::rdf::TYPE as RDF_TYPE;
use tracing::{debug, info, warn};

use crate::error::*;
use crate::graph::{integer, Graph, GraphExt, Literal, NamedNode};
use crate::image::BaseImage;
use crate::packages::{extract_packages, uses_apt};
use crate::reader::InstructionRecord;
use crate::vocab::*;

const FROM: &str = "FROM";
const MAINTAINER: &str = "MAINTAINER";
const RUN: &str = "RUN";

/// Options controlling graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
  /// Fail with `NoMaintainerError` when no `MAINTAINER` is declared. If
  /// false, the final attribution edge is skipped with a warning instead.
  pub require_maintainer: bool
}

impl Default for BuildOptions {
  fn default() -> Self {
    BuildOptions {
      require_maintainer: true
    }
  }
}

/// The state threaded through each step of the image chain.
struct Chain {
  graph: Graph,
  previous_image: NamedNode,
  maintainer: Option<NamedNode>,
  step_index: usize
}

fn add_image_types(graph: &mut Graph, image: &NamedNode) {
  graph.add(image, RDF_TYPE, PROV.term("Entity"));
  graph.add(image, RDF_TYPE, DCKR.term("DockerImage"));
}

/// Adds a base image node, returning its IRI.
fn add_base_image(graph: &mut Graph, reference: &str) -> NamedNode {
  let image = BaseImage::parse(reference);
  let iri = base_image_iri(&image.reference);

  debug!(image = %image, "adding base image");

  add_image_types(graph, &iri);
  graph.add(&iri, DCKR.term("repo"), Literal::new_simple_literal(image.repo));
  if let Some(tag) = image.tag {
    graph.add(&iri, DCKR.term("tag"), Literal::new_simple_literal(tag));
  }

  iri
}

/// Adds every `FROM` image to the graph and returns the last one, which is
/// the base of the chain.
fn register_base_images(records: &[InstructionRecord]) -> Result<(Graph, NamedNode)> {
  let (graph, base, count) = records.iter()
    .filter(|record| record.is(FROM))
    .fold((Graph::new(), None, 0), |(mut graph, _, count), record| {
      let iri = add_base_image(&mut graph, record.value());
      (graph, Some(iri), count + 1)
    });

  let base = base.ok_or(Error::MissingBaseImageError)?;

  if count > 1 {
    warn!(
      count,
      base = base.as_str(),
      "multiple FROM instructions, only the last is used as the base image"
    );
  }

  Ok((graph, base))
}

fn add_maintainer(graph: &mut Graph, mailbox: &str) -> NamedNode {
  let agent = agent_iri(mailbox);

  graph.add(&agent, RDF_TYPE, FOAF.term("Person"));
  graph.add(&agent, RDF_TYPE, PROV.term("Agent"));
  graph.add(&agent, FOAF.term("mbox"), Literal::new_simple_literal(mailbox));

  agent
}

fn add_packages(graph: &mut Graph, step: &NamedNode, command: &str) {
  let tokens: Vec<&str> = command.split_whitespace().collect();
  if !uses_apt(&tokens) {
    return;
  }

  for name in extract_packages(&tokens) {
    let package = match package_iri(&name) {
      Ok(package) => package,
      Err(e) => {
        warn!(package = name.as_str(), "skipping package: {}", e);
        continue;
      }
    };

    graph.add(&package, RDF_TYPE, DCKR.term("DebianPackage"));
    graph.add(&package, RDF_TYPE, PROV.term("Entity"));
    graph.add(&package, rdfs::LABEL, Literal::new_simple_literal(name));
    graph.add(step, PROV.term("used"), package);
  }
}

/// Adds the step and resulting image for a single instruction.
fn add_step(chain: Chain, record: &InstructionRecord) -> Chain {
  let Chain { mut graph, previous_image, mut maintainer, step_index } = chain;
  let step = step_iri(record.content());

  debug!(index = step_index, instruction = record.instruction(), "adding step");

  graph.add(&step, RDF_TYPE, PROV.term("Activity"));
  graph.add(&step, PROV.term("used"), previous_image.clone());
  graph.add(&step, rdfs::LABEL, Literal::new_simple_literal(record.content()));
  graph.add(&step, DCKR.term("order"), integer(step_index));

  if record.is(MAINTAINER) {
    maintainer = Some(add_maintainer(&mut graph, record.value()));
  } else if record.is(RUN) {
    add_packages(&mut graph, &step, record.value());
  }

  let image = image_iri(record.content());
  add_image_types(&mut graph, &image);
  graph.add(&image, PROV.term("wasGeneratedBy"), step);
  graph.add(&image, PROV.term("wasDerivedFrom"), previous_image);

  Chain {
    graph,
    previous_image: image,
    maintainer,
    step_index: step_index + 1
  }
}

impl Chain {
  fn new(graph: Graph, base_image: NamedNode) -> Chain {
    Chain {
      graph,
      previous_image: base_image,
      maintainer: None,
      step_index: 1
    }
  }

  /// Attributes the final image to the maintainer.
  fn finish(self, options: &BuildOptions) -> Result<Graph> {
    let Chain { mut graph, previous_image, maintainer, .. } = self;

    match maintainer {
      Some(agent) => {
        graph.add(&previous_image, PROV.term("wasAttributedTo"), agent);
      },
      None if options.require_maintainer => return Err(Error::NoMaintainerError),
      None => warn!(
        image = previous_image.as_str(),
        "no MAINTAINER instruction, final image is unattributed"
      )
    }

    Ok(graph)
  }
}

/// Builds a provenance graph from an ordered list of instructions using the
/// default options.
///
/// # Example
/// ```
/// use dockerfile_rdf::*;
///
/// let records = read_instructions(r#"
///   FROM ubuntu:18.04
///   MAINTAINER a@b.com
///   RUN apt-get install -y curl
/// "#)?;
///
/// let graph = build(&records)?;
/// let curl = package_iri("curl")?;
/// assert_eq!(graph.instances(&DCKR.term("DebianPackage")), vec![curl.clone()]);
/// assert!(graph.contains(&Triple::new(
///   curl,
///   oxrdf::vocab::rdfs::LABEL,
///   Literal::new_simple_literal("curl")
/// )));
/// # Ok::<(), dockerfile_rdf::Error>(())
/// ```
pub fn build(records: &[InstructionRecord]) -> Result<Graph> {
  build_with(records, &BuildOptions::default())
}

/// Builds a provenance graph from an ordered list of instructions.
pub fn build_with(records: &[InstructionRecord], options: &BuildOptions) -> Result<Graph> {
  let (graph, base_image) = register_base_images(records)?;

  let graph = records.iter()
    .fold(Chain::new(graph, base_image), add_step)
    .finish(options)?;

  info!(
    steps = records.len(),
    triples = graph.len(),
    "built provenance graph"
  );

  Ok(graph)
}
