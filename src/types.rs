//! Type tables mapping semantic type names to regex fragments.

use indexmap::IndexMap;
use phf::{Map, phf_map};

/// Built-in fragments, fixed for the life of the process.
pub const BUILTIN_TYPES: Map<&'static str, &'static str> = phf_map! {
    "any_number" => r"\d+",
    "any_char" => r".*?",
    "any_word" => r"\w+",
    "lowercase_word" => r"[a-z]+",
    "uppercase_word" => r"[A-Z]+",
    "first_word" => r"[A-Za-z]+",
    "alphanumeric" => r"[a-zA-Z0-9]+",
    "non_alphanumeric" => r"[^a-zA-Z0-9]+",
    "neg_positive_number" => r"[+-]?\d+(\.\d+)?",
    "hex" => r"[A-Fa-f0-9]+",
    "ascii" => r"[\x20-\x7E]+",
};

/// Characters that need a preceding `\` when emitted as literal text.
pub const SPECIAL_CHARACTERS: [char; 13] = [
    '(', ')', '[', ']', '{', '}', '.', '*', '+', '?', '^', '$', '|',
];

pub fn builtin_fragment(name: &str) -> Option<&'static str> {
    BUILTIN_TYPES.get(name).copied()
}

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// Appends `c` to `out`, escaping it if it is a regex metacharacter.
pub fn push_escaped(out: &mut String, c: char) {
    if is_special(c) {
        out.push('\\');
    }
    out.push(c);
}

/// Escapes every metacharacter in `text`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

/// Caller-defined fragments owned by one generator.
///
/// Entries keep their insertion order; re-adding a name overwrites its
/// fragment in place. Fragments are not validated here, a malformed one only
/// surfaces when the next synthesized pattern is compiled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomTypes {
    entries: IndexMap<String, String>,
}

impl CustomTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, fragment: impl Into<String>) {
        self.entries.insert(name.into(), fragment.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CustomTypes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut types = CustomTypes::new();
        for (name, fragment) in iter {
            types.insert(name, fragment);
        }
        types
    }
}

/// Resolves a fragment for emission: built-ins win over custom entries.
pub fn resolve_fragment<'a>(name: &str, custom: &'a CustomTypes) -> Option<&'a str> {
    builtin_fragment(name).or_else(|| custom.get(name))
}
