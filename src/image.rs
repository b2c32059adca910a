// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::fmt;

/// A base image reference as named by a `FROM` instruction.
///
/// The reference is split naively on `:`: the first segment is the repository
/// and the second, if any, is the tag. Registry ports and digests are not
/// special-cased, so `localhost:5000/foo` has the repository `localhost`.
///
/// ```
/// use dockerfile_rdf::BaseImage;
///
/// let image = BaseImage::parse("ubuntu:18.04");
/// assert_eq!(image.repo, "ubuntu");
/// assert_eq!(image.tag, Some("18.04".to_string()));
/// assert_eq!(format!("{}", image), "ubuntu:18.04");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseImage {
  /// the full reference as written, used to key the image node
  pub reference: String,

  /// the repository name, e.g. `ubuntu`
  pub repo: String,

  /// an optional tag, e.g. `18.04`
  pub tag: Option<String>
}

impl BaseImage {
  /// Parses a `BaseImage` from a `FROM` value. Not fallible.
  pub fn parse(s: &str) -> BaseImage {
    let mut parts = s.split(':');
    let repo = parts.next().unwrap_or_default().to_string();
    let tag = parts.next().map(String::from);

    BaseImage {
      reference: s.to_string(),
      repo, tag
    }
  }
}

impl fmt::Display for BaseImage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.reference)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_untagged() {
    assert_eq!(BaseImage::parse("ubuntu"), BaseImage {
      reference: "ubuntu".into(),
      repo: "ubuntu".into(),
      tag: None
    });
  }

  #[test]
  fn parse_extra_segments() {
    // only the first two segments are significant
    let image = BaseImage::parse("localhost:5000/foo:1.0");
    assert_eq!(image.repo, "localhost");
    assert_eq!(image.tag, Some("5000/foo".into()));
    assert_eq!(image.reference, "localhost:5000/foo:1.0");
  }
}
