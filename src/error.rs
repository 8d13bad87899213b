use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown regex flag {0:?}, expected one of \"gimsuy\"")]
    UnknownFlag(char),

    #[error("failed to compile pattern {pattern:?}")]
    Compile {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("failed to run pattern {pattern:?}")]
    Runtime {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("expected NAME=VALUE, got {0:?}")]
    InvalidAnnotation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
