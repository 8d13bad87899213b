use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::Error;

/// Literal text(s) in an example that a type should replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Values {
    One(String),
    Many(Vec<String>),
}

impl Values {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Values::One(value) => std::slice::from_ref(value),
            Values::Many(values) => values,
        };
        values.iter().map(String::as_str)
    }

    fn push(&mut self, value: String) {
        match self {
            Values::One(first) => *self = Values::Many(vec![std::mem::take(first), value]),
            Values::Many(values) => values.push(value),
        }
    }
}

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Values::One(value.to_string())
    }
}

impl From<String> for Values {
    fn from(value: String) -> Self {
        Values::One(value)
    }
}

impl From<Vec<&str>> for Values {
    fn from(values: Vec<&str>) -> Self {
        Values::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Values {
    fn from(values: Vec<String>) -> Self {
        Values::Many(values)
    }
}

impl<const N: usize> From<[&str; N]> for Values {
    fn from(values: [&str; N]) -> Self {
        Values::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Type name to literal values, in the order the caller supplied them.
///
/// Order matters: when two literals first occur at the same offset in the
/// example, the later entry wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    entries: IndexMap<String, Values>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Annotations::insert`].
    pub fn with(mut self, type_name: impl Into<String>, values: impl Into<Values>) -> Self {
        self.insert(type_name, values);
        self
    }

    /// Sets the values for `type_name`, replacing any previous ones.
    pub fn insert(&mut self, type_name: impl Into<String>, values: impl Into<Values>) {
        self.entries.insert(type_name.into(), values.into());
    }

    /// Appends one literal to `type_name`, creating the entry if needed.
    pub fn push(&mut self, type_name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.entries.entry(type_name.into()) {
            indexmap::map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(Values::One(value));
            }
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&Values> {
        self.entries.get(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Values)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Values>> FromIterator<(K, V)> for Annotations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut annotations = Annotations::new();
        for (type_name, values) in iter {
            annotations.insert(type_name, values);
        }
        annotations
    }
}

/// A single `NAME=VALUE` pair, as given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok(Assignment {
                name: name.to_string(),
                value: value.to_string(),
            }),
            _ => Err(Error::InvalidAnnotation(s.to_string())),
        }
    }
}

impl FromIterator<Assignment> for Annotations {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        let mut annotations = Annotations::new();
        for Assignment { name, value } in iter {
            annotations.push(name, value);
        }
        annotations
    }
}
