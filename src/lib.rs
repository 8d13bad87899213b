mod annotation;
mod cli;
mod error;
mod flags;
mod generator;
mod matcher;
mod pattern;
mod synthesizer;
mod types;

pub use annotation::{Annotations, Assignment, Values};
pub use cli::{run, run_with, Cli};
pub use error::{Error, Result};
pub use flags::Flags;
pub use generator::RegexMaker;
pub use pattern::Pattern;
pub use synthesizer::{Span, SpanTable, Synthesizer};
pub use types::{escape, CustomTypes, BUILTIN_TYPES, SPECIAL_CHARACTERS};
