// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::collections::HashSet;

use lazy_static::lazy_static;

/// The apt command whose arguments are scanned for package names.
pub const APT_GET: &str = "apt-get";

const COMMAND_SEPARATOR: &str = "&&";

lazy_static! {
  /// Tokens in an `apt-get` command that are never package names.
  static ref APT_DISCARDS: HashSet<&'static str> = [
    // shell operators
    "&&", "||", ";", "|", "\\",

    APT_GET,

    // subcommands
    "install", "update", "upgrade", "dist-upgrade", "remove", "purge",
    "autoremove", "clean", "autoclean",

    // flags
    "-y", "--yes", "-q", "-qq", "--quiet", "--no-install-recommends",
    "--no-install-suggests", "--force-yes", "--allow-unauthenticated",
    "--fix-missing",
  ].iter().copied().collect();
}

/// Returns true if any token is an `apt-get` invocation.
pub fn uses_apt<S: AsRef<str>>(tokens: &[S]) -> bool {
  tokens.iter().any(|t| t.as_ref() == APT_GET)
}

/// Recovers apt package names from a whitespace-split shell command.
///
/// The tokens are split into commands at each `&&`. Only commands containing
/// `apt-get` are considered, and from those every token that isn't a known
/// shell operator, apt subcommand or flag is kept, in order.
///
/// This is a heuristic rather than a shell parser: quoting, variables and
/// subshells are not understood.
///
/// ```
/// use dockerfile_rdf::extract_packages;
///
/// let tokens = ["apt-get", "install", "-y", "curl", "&&", "rm", "-rf", "/tmp/x"];
/// assert_eq!(extract_packages(&tokens), vec!["curl"]);
/// ```
pub fn extract_packages<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
  tokens
    .split(|t| t.as_ref() == COMMAND_SEPARATOR)
    .filter(|command| uses_apt(command))
    .flat_map(|command| command.iter())
    .map(|t| t.as_ref())
    .filter(|t| !APT_DISCARDS.contains(*t))
    .map(String::from)
    .collect()
}
