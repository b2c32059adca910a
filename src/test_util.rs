// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use pest::Parser;
use snafu::ResultExt;

use crate::error::*;
use crate::parser::{DockerfileParser, Pair, Rule};
use crate::reader::InstructionRecord;

/// Parses a string with a particular syntax rule and hands the resulting pair
/// to `func`.
///
/// Individual rules have no `~ EOI` requirement, so this only checks that the
/// rule matches a prefix of `input`.
pub fn parse_direct<T, F>(input: &str, rule: Rule, func: F) -> Result<T>
where
  F: Fn(Pair) -> Result<T>
{
  let pair = DockerfileParser::parse(rule, input)
    .context(ParseError)?
    .next()
    .ok_or(Error::UnknownParseError)?;

  func(pair)
}

/// Builds a record that is known to be valid.
pub fn record(instruction: &str, value: &str, content: &str) -> InstructionRecord {
  InstructionRecord::new(instruction, value, content).unwrap()
}
