/// Crate Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed token or inconsistent spec; `offset` is the index of the
    /// offending character, or the input length when only the final
    /// validation failed
    Parse { input: String, offset: usize },
}

impl Error {
    pub(crate) fn parse(input: &str, offset: usize) -> Self {
        Self::Parse {
            input: input.to_owned(),
            offset,
        }
    }

    /// Original text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::Parse { input, .. } => input,
        }
    }

    /// Character offset of the failure
    pub fn offset(&self) -> usize {
        match self {
            Self::Parse { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { input, offset } => {
                write!(f, "cannot parse roll spec [{input}] at position [{offset}]")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
