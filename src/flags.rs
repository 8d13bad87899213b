use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::Error;

bitflags! {
    /// JS-style regex flags carried alongside a pattern source.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// `g`: iterate over every match instead of stopping at the first.
        const GLOBAL = 1 << 0;
        /// `i`
        const IGNORE_CASE = 1 << 1;
        /// `m`: `^` and `$` match at line boundaries.
        const MULTILINE = 1 << 2;
        /// `s`: `.` also matches `\n`.
        const DOT_ALL = 1 << 3;
        /// `u`: accepted for compatibility, the engine is always unicode aware.
        ///
        /// With or without it, `\d` and `\w` in the built-in fragments
        /// match any Unicode digit or word character (`٣`, `é`), not just
        /// ASCII. Register an explicit class such as `[0-9]+` as a custom
        /// type where ASCII-only matching matters.
        const UNICODE = 1 << 4;
        /// `y`: matches must start where the previous one ended (offset 0 first).
        const STICKY = 1 << 5;
    }
}

// Canonical rendering order, same as a JS RegExp's `flags` property.
const FLAG_CHARS: [(char, Flags); 6] = [
    ('g', Flags::GLOBAL),
    ('i', Flags::IGNORE_CASE),
    ('m', Flags::MULTILINE),
    ('s', Flags::DOT_ALL),
    ('u', Flags::UNICODE),
    ('y', Flags::STICKY),
];

impl Flags {
    pub fn from_char(c: char) -> Result<Flags, Error> {
        FLAG_CHARS
            .iter()
            .find(|(flag_char, _)| *flag_char == c)
            .map(|(_, flag)| *flag)
            .ok_or(Error::UnknownFlag(c))
    }

    /// Parses a list of flag strings such as `["g", "i"]`; empty entries are ignored.
    pub fn from_list<S: AsRef<str>>(list: &[S]) -> Result<Flags, Error> {
        list.iter()
            .try_fold(Flags::empty(), |acc, s| Ok(acc | s.as_ref().parse::<Flags>()?))
    }

    pub fn is_global(self) -> bool {
        self.contains(Flags::GLOBAL)
    }

    pub fn is_sticky(self) -> bool {
        self.contains(Flags::STICKY)
    }

    /// Inline group prefix for the flags the engine understands, e.g. `(?im)`.
    pub(crate) fn inline_prefix(self) -> String {
        let mut inline = String::new();
        if self.contains(Flags::IGNORE_CASE) {
            inline.push('i');
        }
        if self.contains(Flags::MULTILINE) {
            inline.push('m');
        }
        if self.contains(Flags::DOT_ALL) {
            inline.push('s');
        }
        if inline.is_empty() {
            inline
        } else {
            format!("(?{})", inline)
        }
    }
}

impl FromStr for Flags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .try_fold(Flags::empty(), |acc, c| Ok(acc | Flags::from_char(c)?))
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, flag) in FLAG_CHARS {
            if self.contains(flag) {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
