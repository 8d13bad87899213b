use crate::annotation::Annotations;
use crate::error::Result;
use crate::flags::Flags;
use crate::matcher::Matcher;
use crate::pattern::Pattern;
use crate::synthesizer::Synthesizer;
use crate::types::{self, CustomTypes};

/// Builds regexes from annotated examples and runs queries against the
/// pattern it currently holds.
///
/// A generator is meant for a single owner. Share one across threads only
/// behind a lock; nothing inside synchronizes the held pattern or the custom
/// type table.
///
/// ```
/// use regmake::{Annotations, Flags, RegexMaker};
///
/// let mut maker = RegexMaker::new();
/// let annotations = Annotations::new()
///     .with("any_number", ["2"])
///     .with("any_word", "p");
/// let source = maker.synthesize("p-[2rem]", &annotations, true, Flags::GLOBAL, None);
/// assert_eq!(source, r"(\w+)-\[(\d+)rem\]");
/// assert_eq!(maker.match_str("p-[2rem]"), vec!["p-[2rem]", "p", "2"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegexMaker {
    custom: CustomTypes,
    current: Option<Pattern>,
}

impl RegexMaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern produced by the last successful `synthesize` or `combine`.
    pub fn current(&self) -> Option<&Pattern> {
        self.current.as_ref()
    }

    pub fn builtin_types(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        types::BUILTIN_TYPES.entries().map(|(k, v)| (*k, *v))
    }

    /// Rewrites `example` into a regex source and holds the compiled result.
    ///
    /// Returns an empty string if the source fails to compile; the error is
    /// logged and the held pattern is left as it was. Use
    /// [`RegexMaker::try_synthesize`] to get the error instead.
    pub fn synthesize(
        &mut self,
        example: &str,
        annotations: &Annotations,
        capture_values: bool,
        flags: Flags,
        new_types: Option<&Annotations>,
    ) -> String {
        match self.try_synthesize(example, annotations, capture_values, flags, new_types) {
            Ok(source) => source,
            Err(err) => {
                log::error!("Error synthesizing pattern from {:?}: {}", example, err);
                String::new()
            }
        }
    }

    pub fn try_synthesize(
        &mut self,
        example: &str,
        annotations: &Annotations,
        capture_values: bool,
        flags: Flags,
        new_types: Option<&Annotations>,
    ) -> Result<String> {
        let source = Synthesizer::new(&self.custom, capture_values)
            .synthesize(example, annotations, new_types);
        log::debug!("Synthesized pattern: {:?}", source);
        let pattern = Pattern::new(source.clone(), flags)?;
        self.current = Some(pattern);
        Ok(source)
    }

    /// Synthesizes `example` and ORs it onto the held pattern as
    /// `old|new`, compiled with `flags` (earlier flags are not carried over).
    ///
    /// An empty `example` is a no-op and returns `None`. With nothing held
    /// yet this is the same as [`RegexMaker::synthesize`]. Failures are
    /// logged and also return `None`, leaving the held pattern untouched.
    pub fn combine(
        &mut self,
        example: &str,
        annotations: &Annotations,
        capture_values: bool,
        flags: Flags,
        new_types: Option<&Annotations>,
    ) -> Option<&Pattern> {
        match self.try_combine(example, annotations, capture_values, flags, new_types) {
            Ok(true) => self.current.as_ref(),
            Ok(false) => None,
            Err(err) => {
                log::error!("Error combining pattern from {:?}: {}", example, err);
                None
            }
        }
    }

    /// Returns whether the held pattern changed.
    pub fn try_combine(
        &mut self,
        example: &str,
        annotations: &Annotations,
        capture_values: bool,
        flags: Flags,
        new_types: Option<&Annotations>,
    ) -> Result<bool> {
        if example.is_empty() {
            return Ok(false);
        }
        let Some(old) = self.current.clone() else {
            self.try_synthesize(example, annotations, capture_values, flags, new_types)?;
            return Ok(true);
        };
        let source = Synthesizer::new(&self.custom, capture_values)
            .synthesize(example, annotations, new_types);
        let new = Pattern::new(source, flags)?;
        let combined = old.alternate(&new, flags)?;
        log::debug!("Combined pattern: {}", combined);
        self.current = Some(combined);
        Ok(true)
    }

    /// Adds or overwrites a custom type. The fragment is only checked when a
    /// pattern using it is next compiled.
    pub fn add_custom(&mut self, name: impl Into<String>, fragment: impl Into<String>) {
        self.custom.insert(name, fragment);
    }

    pub fn remove_custom(&mut self, name: &str) {
        self.custom.remove(name);
    }

    /// Live handle to the custom type table.
    ///
    /// Changes made through it are changes to this generator's table and are
    /// seen by every later synthesis. Use [`RegexMaker::custom_snapshot`] for
    /// an independent copy.
    pub fn get_custom(&mut self) -> &mut CustomTypes {
        &mut self.custom
    }

    pub fn custom_snapshot(&self) -> CustomTypes {
        self.custom.clone()
    }

    pub fn test(&self, s: &str) -> bool {
        self.query(false, |pattern| Matcher::test(pattern, s))
    }

    /// First match and its groups, or `[""]`.
    pub fn match_str(&self, s: &str) -> Vec<String> {
        self.query(vec![String::new()], |pattern| Matcher::match_first(pattern, s))
    }

    /// Same contract as [`RegexMaker::match_str`]: one attempt from the start of `s`.
    pub fn exec(&self, s: &str) -> Vec<String> {
        self.match_str(s)
    }

    /// All matches flattened; only the groups when `fetch_captures` is set.
    /// Returns `[]` when nothing matches.
    pub fn match_all(&self, s: &str, fetch_captures: bool) -> Vec<String> {
        self.query(Vec::new(), |pattern| Matcher::match_all(pattern, s, fetch_captures))
    }

    /// Replaces matches of `override_pattern`, or of the held pattern, in `s`.
    pub fn replace(&self, s: &str, replacement: &str, override_pattern: Option<&Pattern>) -> String {
        let Some(pattern) = override_pattern.or(self.current.as_ref()) else {
            return s.to_string();
        };
        Matcher::replace(pattern, s, replacement).unwrap_or_else(|err| {
            log::error!("Error replacing in {:?}: {}", s, err);
            s.to_string()
        })
    }

    fn query<T>(&self, no_match: T, run: impl FnOnce(&Pattern) -> Result<T>) -> T {
        let Some(pattern) = self.current.as_ref() else {
            return no_match;
        };
        run(pattern).unwrap_or_else(|err| {
            log::error!("Error running {}: {}", pattern, err);
            no_match
        })
    }
}
