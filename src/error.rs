// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::path::PathBuf;

use pest::iterators::Pair;
use snafu::Snafu;

use crate::parser::*;

/// A Dockerfile mapping error.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
  #[snafu(display(
    "could not read Dockerfile {}: {}", path.display(), source
  ))]
  InputNotFoundError {
    path: PathBuf,
    source: std::io::Error
  },

  #[snafu(display(
    "could not parse Dockerfile: {}", source
  ))]
  ParseError {
    source: pest::error::Error<Rule>
  },

  #[snafu(display(
    "error unescaping string: {:?}", source
  ))]
  UnescapeError {
    source: enquote::Error
  },

  #[snafu(display(
    "unable to parse Dockerfile"
  ))]
  UnknownParseError,

  #[snafu(display(
    "malformed instruction: {}", message
  ))]
  MalformedInstructionError {
    message: String
  },

  #[snafu(display(
    "Dockerfile has no FROM instruction, the image chain has no base"
  ))]
  MissingBaseImageError,

  #[snafu(display(
    "Dockerfile has no MAINTAINER instruction, the final image cannot be attributed"
  ))]
  NoMaintainerError,

  #[snafu(display(
    "invalid IRI {}: {}", iri, source
  ))]
  InvalidIriError {
    iri: String,
    source: oxrdf::IriParseError
  },

  #[snafu(display(
    "could not write graph: {}", source
  ))]
  WriteError {
    source: std::io::Error
  }
}

/// A Dockerfile mapping Result.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper to create an unexpected token error.
pub(crate) fn unexpected_token(record: Pair<Rule>) -> Error {
  Error::MalformedInstructionError {
    message: format!("unexpected token {:?}", record.as_rule())
  }
}
