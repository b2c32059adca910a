// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use enquote::unquote;
use lazy_static::lazy_static;
use regex::Regex;
use snafu::ResultExt;

use crate::error::*;
use crate::parser::*;

lazy_static! {
  static ref EXEC_FORM: Regex = Regex::new(
    r#"^\[\s*(?:"(?:[^"\\]|\\.)*"\s*(?:,\s*"(?:[^"\\]|\\.)*"\s*)*)?\]$"#
  ).unwrap();

  static ref EXEC_STRING: Regex = Regex::new(r#""(?:[^"\\]|\\.)*""#).unwrap();
}

/// Joins the argument chunks of an `arguments` node, dropping any escaped
/// line breaks (and comments inside them) between chunks.
pub(crate) fn join_arguments(arguments: Pair) -> Result<String> {
  let mut ret = String::new();

  for field in arguments.into_inner() {
    match field.as_rule() {
      Rule::argument_chunk => ret.push_str(field.as_str()),
      Rule::line_continuation => (),
      _ => return Err(unexpected_token(field))
    }
  }

  Ok(ret)
}

/// Given a string ostensibly containing a JSON-style string array (exec form),
/// returns the unescaped array of strings, or None if the string is not an
/// exec form array.
pub(crate) fn parse_string_array(s: &str) -> Result<Option<Vec<String>>> {
  if !EXEC_FORM.is_match(s) {
    return Ok(None);
  }

  let mut ret = Vec::new();
  for field in EXEC_STRING.find_iter(s) {
    ret.push(unquote(field.as_str()).context(UnescapeError)?);
  }

  Ok(Some(ret))
}

/// Normalizes instruction arguments into a single-line value.
///
/// Exec form arrays are unquoted and joined with spaces; anything else has its
/// whitespace runs collapsed to a single space.
pub(crate) fn normalize_value(raw: &str) -> Result<String> {
  let raw = raw.trim();

  match parse_string_array(raw)? {
    Some(args) => Ok(args.join(" ")),
    None => Ok(raw.split_whitespace().collect::<Vec<_>>().join(" "))
  }
}
