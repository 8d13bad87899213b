//! Rewrites an annotated example string into a regex source.
//!
//! Literal values are located against the untouched example and recorded as
//! spans keyed by their start offset. Only once every annotation has been
//! scanned is the pattern emitted, so offsets never shift while annotations
//! are being applied.
//!
//! Each literal is matched at its *first* occurrence only. A literal that
//! repeats later in the example leaves the later copies as plain text.

use std::collections::BTreeMap;

use crate::annotation::Annotations;
use crate::types::{self, CustomTypes};

/// Characters `start..end` of the example are replaced by `type_name`'s fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub type_name: String,
}

/// Spans keyed by start offset; a later span at the same offset replaces the earlier one.
pub type SpanTable = BTreeMap<usize, Span>;

pub struct Synthesizer<'a> {
    custom: &'a CustomTypes,
    capture_values: bool,
}

impl<'a> Synthesizer<'a> {
    pub fn new(custom: &'a CustomTypes, capture_values: bool) -> Self {
        Synthesizer { custom, capture_values }
    }

    /// Builds the regex source for `example`.
    ///
    /// `annotations` resolve against the built-in table only and `new_types`
    /// against the custom table only; both feed the same span table.
    pub fn synthesize(
        &self,
        example: &str,
        annotations: &Annotations,
        new_types: Option<&Annotations>,
    ) -> String {
        let mut spans = SpanTable::new();
        Self::collect_spans(example, annotations, types::builtin_fragment, &mut spans);
        if let Some(new_types) = new_types {
            Self::collect_spans(example, new_types, |name| self.custom.get(name), &mut spans);
        }
        log::debug!("Spans for {:?}: {:?}", example, spans);
        self.emit(example, &spans)
    }

    /// Records a span for the first occurrence of every literal whose type
    /// `lookup` knows about. Unknown types and absent literals are skipped.
    pub fn collect_spans<'f, F>(
        example: &str,
        annotations: &Annotations,
        lookup: F,
        spans: &mut SpanTable,
    ) where
        F: Fn(&str) -> Option<&'f str>,
    {
        for (type_name, values) in annotations.iter() {
            if lookup(type_name).is_none() {
                continue;
            }
            for value in values.iter() {
                if value.is_empty() {
                    log::warn!("Skipping empty literal for type {:?}", type_name);
                    continue;
                }
                let Some(start) = example.find(value) else {
                    continue;
                };
                let end = start + value.len();
                spans.insert(
                    start,
                    Span {
                        start,
                        end,
                        type_name: type_name.to_string(),
                    },
                );
            }
        }
    }

    /// Walks `example`, replacing recorded spans with their fragment and
    /// escaping everything else.
    pub fn emit(&self, example: &str, spans: &SpanTable) -> String {
        let mut pattern = String::with_capacity(example.len() * 2);
        let mut i = 0;
        while let Some(c) = example[i..].chars().next() {
            match spans.get(&i) {
                Some(span) => {
                    if let Some(fragment) = types::resolve_fragment(&span.type_name, self.custom) {
                        if self.capture_values {
                            pattern.push('(');
                            pattern.push_str(fragment);
                            pattern.push(')');
                        } else {
                            pattern.push_str(fragment);
                        }
                    }
                    i = span.end;
                }
                None => {
                    types::push_escaped(&mut pattern, c);
                    i += c.len_utf8();
                }
            }
        }
        pattern
    }
}
