use std::fmt;
use thiserror::Error;

/// Which code vocabulary a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Language,
    Script,
    Scheme,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CodeKind::Language => "language",
            CodeKind::Script => "script",
            CodeKind::Scheme => "transliteration scheme",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Unknown {kind} code: '{code}'")]
    Unknown { kind: CodeKind, code: String },
}
