use std::fmt;

use fancy_regex::Regex;

use crate::error::{Error, Result};
use crate::flags::Flags;

/// A compiled regex together with the source and flags it was built from.
///
/// `source` is kept exactly as synthesized; engine-level flags are applied
/// through an inline prefix when compiling so they never leak into it.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    flags: Flags,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: impl Into<String>, flags: Flags) -> Result<Pattern> {
        let source = source.into();
        let compiled = format!("{}{}", flags.inline_prefix(), source);
        let regex = Regex::new(&compiled).map_err(|source_err| Error::Compile {
            pattern: source.clone(),
            source: source_err,
        })?;
        Ok(Pattern { source, flags, regex })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// `self|other`, compiled with `flags`.
    pub fn alternate(&self, other: &Pattern, flags: Flags) -> Result<Pattern> {
        Pattern::new(format!("{}|{}", self.source, other.source), flags)
    }

    pub(crate) fn runtime_error(&self, source: fancy_regex::Error) -> Error {
        Error::Runtime {
            pattern: self.source.clone(),
            source,
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
