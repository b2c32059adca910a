// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::fs;
use std::path::Path;

use pest::Parser;
use snafu::ResultExt;
use tracing::debug;

use crate::error::*;
use crate::parser::*;
use crate::util::*;

/// A single Dockerfile instruction as read from source.
///
/// Records can only be built through `InstructionRecord::new`, which rejects
/// records missing a keyword, a value or source content, so anything
/// downstream may rely on all three being present.
///
/// # Example
///
/// ```
/// use dockerfile_rdf::InstructionRecord;
///
/// let record = InstructionRecord::new("run", "apt-get install curl", "run apt-get install curl")?;
/// assert_eq!(record.instruction(), "RUN");
/// assert!(record.is("RUN"));
/// # Ok::<(), dockerfile_rdf::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionRecord {
  instruction: String,
  value: String,
  content: String
}

impl InstructionRecord {
  /// Creates a validated record. The keyword is upper-cased.
  pub fn new<I, V, C>(instruction: I, value: V, content: C) -> Result<InstructionRecord>
  where
    I: Into<String>,
    V: Into<String>,
    C: Into<String>
  {
    let instruction = instruction.into().to_ascii_uppercase();
    let value = value.into();
    let content = content.into();

    if instruction.is_empty() || !instruction.chars().all(|c| c.is_ascii_alphabetic()) {
      return Err(Error::MalformedInstructionError {
        message: format!("invalid instruction keyword {:?}", instruction)
      });
    }

    if value.trim().is_empty() {
      return Err(Error::MalformedInstructionError {
        message: format!("{} instruction requires arguments", instruction)
      });
    }

    if content.trim().is_empty() {
      return Err(Error::MalformedInstructionError {
        message: format!("{} instruction has no source content", instruction)
      });
    }

    Ok(InstructionRecord {
      instruction, value, content
    })
  }

  pub(crate) fn from_record(record: Pair) -> Result<InstructionRecord> {
    let content = record.as_str().to_string();
    let mut keyword = None;
    let mut arguments = None;

    for field in record.into_inner() {
      match field.as_rule() {
        Rule::keyword => keyword = Some(field.as_str()),
        Rule::arguments => arguments = Some(field),
        Rule::line_continuation => (),
        _ => return Err(unexpected_token(field))
      }
    }

    let keyword = keyword.ok_or_else(|| Error::MalformedInstructionError {
      message: "instructions require a keyword".into()
    })?;

    let arguments = arguments.ok_or_else(|| Error::MalformedInstructionError {
      message: format!("{} instruction requires arguments", keyword.to_ascii_uppercase())
    })?;

    let value = normalize_value(&join_arguments(arguments)?)?;

    InstructionRecord::new(keyword, value, content)
  }

  /// The upper-cased instruction keyword, e.g. `RUN`.
  pub fn instruction(&self) -> &str {
    &self.instruction
  }

  /// The instruction arguments, normalized to a single line.
  pub fn value(&self) -> &str {
    &self.value
  }

  /// The raw source text of the instruction, including its line terminator
  /// when it has one.
  pub fn content(&self) -> &str {
    &self.content
  }

  /// Returns true if this record's keyword matches, ignoring case.
  pub fn is(&self, keyword: &str) -> bool {
    self.instruction.eq_ignore_ascii_case(keyword)
  }
}

/// Reads an ordered list of instruction records from Dockerfile text.
///
/// Blank lines and comments are skipped and escaped line breaks join an
/// instruction's lines into a single record.
///
/// ```
/// use dockerfile_rdf::read_instructions;
///
/// let records = read_instructions(r#"
///   FROM ubuntu:18.04
///   ## install things
///   RUN apt-get update && \
///       apt-get install -y curl
/// "#)?;
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].value(), "apt-get update && apt-get install -y curl");
/// # Ok::<(), dockerfile_rdf::Error>(())
/// ```
pub fn read_instructions(input: &str) -> Result<Vec<InstructionRecord>> {
  let dockerfile = DockerfileParser::parse(Rule::dockerfile, input)
    .context(ParseError)?
    .next()
    .ok_or(Error::UnknownParseError)?;

  let mut records = Vec::new();

  for record in dockerfile.into_inner() {
    match record.as_rule() {
      Rule::instruction => records.push(InstructionRecord::from_record(record)?),
      Rule::EOI => continue,
      _ => return Err(unexpected_token(record))
    }
  }

  debug!(count = records.len(), "read dockerfile instructions");

  Ok(records)
}

/// Reads instruction records from a Dockerfile on disk.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<InstructionRecord>> {
  let path = path.as_ref();
  let input = fs::read_to_string(path).context(InputNotFoundError { path })?;

  read_instructions(&input)
}

#[cfg(test)]
mod tests {
  use indoc::indoc;
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::test_util::*;

  #[test]
  fn single_instruction() -> Result<()> {
    let record = parse_direct(
      "run apt-get install -y curl",
      Rule::instruction,
      InstructionRecord::from_record
    )?;

    assert_eq!(record.instruction(), "RUN");
    assert_eq!(record.value(), "apt-get install -y curl");
    assert_eq!(record.content(), "run apt-get install -y curl");

    Ok(())
  }

  #[test]
  fn continuation_with_comments() -> Result<()> {
    let records = read_instructions(indoc!(r#"
      RUN apt-get update && \
          # implicitly escaped
          apt-get install -y \

          curl
      CMD ["bash"]
    "#))?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].value(), "apt-get update && apt-get install -y curl");
    assert_eq!(records[0].content(), indoc!(r#"
      RUN apt-get update && \
          # implicitly escaped
          apt-get install -y \

          curl
    "#));

    assert_eq!(records[1], record("CMD", "bash", "CMD [\"bash\"]\n"));

    Ok(())
  }

  #[test]
  fn content_keeps_line_terminator() -> Result<()> {
    let records = read_instructions("FROM x\nRUN make\n")?;

    assert_eq!(records[1].content(), "RUN make\n");
    assert_eq!(records[1].value(), "make");
    assert_eq!(
      crate::vocab::step_iri(records[1].content()).as_str(),
      "http://purl.org/dckr/resource/step/f319fdb6680cb853d66c0f7bb00c9d32"
    );

    // the last line may end at EOF, and CRLF is kept verbatim
    let records = read_instructions("FROM x\r\nRUN make")?;
    assert_eq!(records[0].content(), "FROM x\r\n");
    assert_eq!(records[1].content(), "RUN make");

    Ok(())
  }

  #[test]
  fn exec_form() -> Result<()> {
    let records = read_instructions(indoc!(r#"
      RUN ["apt-get", \
           "install", "-y", "curl"]
    "#))?;

    assert_eq!(records[0].value(), "apt-get install -y curl");

    Ok(())
  }

  #[test]
  fn comments_and_blank_lines() -> Result<()> {
    let records = read_instructions(indoc!(r#"
      # syntax=docker/dockerfile:1

      FROM alpine:3.11
        # indented comment
      MAINTAINER someone@example.com"#))?;

    assert_eq!(records, vec![
      record("FROM", "alpine:3.11", "FROM alpine:3.11\n"),
      record("MAINTAINER", "someone@example.com", "MAINTAINER someone@example.com"),
    ]);

    Ok(())
  }

  #[test]
  fn missing_arguments() {
    assert!(matches!(
      read_instructions("FROM ubuntu\nRUN\n"),
      Err(Error::MalformedInstructionError { .. })
    ));

    assert!(matches!(
      read_instructions("FROM ubuntu\nRUN   \n"),
      Err(Error::MalformedInstructionError { .. })
    ));
  }

  #[test]
  fn not_an_instruction() {
    assert!(matches!(
      read_instructions("FROM ubuntu\n[oops]\n"),
      Err(Error::ParseError { .. })
    ));
  }

  #[test]
  fn record_validation() {
    assert!(InstructionRecord::new("", "x", "x").is_err());
    assert!(InstructionRecord::new("RUN2", "x", "RUN2 x").is_err());
    assert!(InstructionRecord::new("RUN", " ", "RUN").is_err());
    assert!(InstructionRecord::new("RUN", "x", "").is_err());
    assert!(InstructionRecord::new("run", "x", "run x").is_ok());
  }

  #[test]
  fn missing_file() {
    assert!(matches!(
      read_file("/nonexistent/Dockerfile"),
      Err(Error::InputNotFoundError { .. })
    ));
  }
}
