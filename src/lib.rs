// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

#![forbid(unsafe_code)]

//! # Dockerfile provenance graphs
//!
//! Maps the build instructions of a Dockerfile onto an RDF graph using the
//! [W3C PROV] ontology: every instruction is a build step (`prov:Activity`)
//! that uses the previous image and generates a new one, apt packages
//! installed by `RUN` steps become `dckr:DebianPackage` entities, and the final
//! image is attributed to the `MAINTAINER`.
//!
//! Node identifiers are derived from content alone, so the same Dockerfile
//! always yields the same graph.
//!
//! ## Quick start
//!
//! ```rust
//! use dockerfile_rdf::*;
//!
//! let records = read_instructions(r#"
//!   FROM ubuntu:18.04
//!   MAINTAINER someone@example.com
//!   RUN apt-get update && apt-get install -y curl
//! "#).unwrap();
//!
//! let graph = build(&records).unwrap();
//! print!("{}", serialize(&graph, Format::NTriples).unwrap());
//! ```
//!
//! [W3C PROV]: https://www.w3.org/TR/prov-o/

#[macro_use] extern crate pest_derive;

mod error;
mod parser;
mod util;
mod image;
mod reader;
mod packages;
mod graph;
mod serialize;
mod builder;
pub mod vocab;

pub use error::*;
pub use parser::*;
pub use image::*;
pub use reader::*;
pub use packages::*;
pub use graph::*;
pub use serialize::*;
pub use builder::*;
pub use vocab::*;

#[cfg(test)] mod test_util;
