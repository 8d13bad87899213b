use fancy_regex::Captures;

use crate::error::Result;
use crate::pattern::Pattern;

pub struct Matcher;

impl Matcher {
    pub fn test(pattern: &Pattern, s: &str) -> Result<bool> {
        if !pattern.flags().is_sticky() {
            return pattern.regex().is_match(s).map_err(|e| pattern.runtime_error(e));
        }
        let mut found = false;
        Self::visit(pattern, s, false, |_| found = true)?;
        Ok(found)
    }

    /// First match followed by its groups; `[""]` when nothing matches.
    ///
    /// Groups that did not take part in the match come back as empty strings
    /// so later groups keep their positions.
    pub fn match_first(pattern: &Pattern, s: &str) -> Result<Vec<String>> {
        let mut values = Vec::new();
        Self::visit(pattern, s, false, |caps| {
            values = caps
                .iter()
                .map(|m| m.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect();
        })?;
        if values.is_empty() {
            values.push(String::new());
        }
        Ok(values)
    }

    /// Every match, flattened. Without the `g` flag only the first match is
    /// considered. Absent groups are skipped; `[]` when nothing matches.
    pub fn match_all(pattern: &Pattern, s: &str, fetch_captures: bool) -> Result<Vec<String>> {
        let skip = if fetch_captures { 1 } else { 0 };
        let mut values = Vec::new();
        Self::visit(pattern, s, pattern.flags().is_global(), |caps| {
            values.extend(
                caps.iter()
                    .skip(skip)
                    .flatten()
                    .map(|m| m.as_str().to_string()),
            );
        })?;
        Ok(values)
    }

    /// Substitutes matches of `pattern` with `replacement`, which may refer to
    /// groups as `$1` or `${name}`. Every match is replaced when `pattern` is
    /// global, otherwise only the first.
    ///
    /// Empty matches follow the engine's iteration rules: an empty match
    /// directly after a non-empty one is skipped, so `a*` over `"aab"` gives
    /// `"xbx"` rather than a JS engine's `"xxbx"`. The same rule applies to
    /// `match_all`.
    pub fn replace(pattern: &Pattern, s: &str, replacement: &str) -> Result<String> {
        let mut out = String::with_capacity(s.len());
        let mut last = 0;
        Self::visit(pattern, s, pattern.flags().is_global(), |caps| {
            if let Some(whole) = caps.get(0) {
                out.push_str(&s[last..whole.start()]);
                caps.expand(replacement, &mut out);
                last = whole.end();
            }
        })?;
        out.push_str(&s[last..]);
        Ok(out)
    }

    // Feeds each accepted match to `f`: just the first one unless `every` is
    // set. Sticky patterns only accept a match that starts at offset 0 or
    // right where the previous one ended.
    fn visit<F>(pattern: &Pattern, s: &str, every: bool, mut f: F) -> Result<()>
    where
        F: FnMut(&Captures),
    {
        let sticky = pattern.flags().is_sticky();
        let mut expected_start = 0;
        for caps in pattern.regex().captures_iter(s) {
            let caps = caps.map_err(|e| pattern.runtime_error(e))?;
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if sticky && whole.start() != expected_start {
                break;
            }
            expected_start = whole.end();
            f(&caps);
            if !every {
                break;
            }
        }
        Ok(())
    }
}
