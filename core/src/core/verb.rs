// routescope/src/core/verb.rs

//! HTTP verbs a route can be declared for.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
  Get,
  Post,
  Put,
  Patch,
  Delete,
  Options,
  Head,
  Connect,
  Trace,
  /// Any other method name, stored upper-cased.
  Other(String),
}

impl Verb {
  pub fn as_str(&self) -> &str {
    match self {
      Verb::Get => "GET",
      Verb::Post => "POST",
      Verb::Put => "PUT",
      Verb::Patch => "PATCH",
      Verb::Delete => "DELETE",
      Verb::Options => "OPTIONS",
      Verb::Head => "HEAD",
      Verb::Connect => "CONNECT",
      Verb::Trace => "TRACE",
      Verb::Other(name) => name,
    }
  }
}

impl FromStr for Verb {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let upper = s.trim().to_ascii_uppercase();
    Ok(match upper.as_str() {
      "GET" => Verb::Get,
      "POST" => Verb::Post,
      "PUT" => Verb::Put,
      "PATCH" => Verb::Patch,
      "DELETE" => Verb::Delete,
      "OPTIONS" => Verb::Options,
      "HEAD" => Verb::Head,
      "CONNECT" => Verb::Connect,
      "TRACE" => Verb::Trace,
      _ => Verb::Other(upper),
    })
  }
}

impl fmt::Display for Verb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
