use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized chord root in `{chord}`")]
    UnrecognizedRoot { chord: String },

    #[error("accidental must either be 'b' or '#', got `{0}`")]
    InvalidAccidental(String),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` when the error (or the error a line failure wraps) is
    /// an unrecognized chord root.
    pub fn is_unrecognized_root(&self) -> bool {
        match self {
            Self::UnrecognizedRoot { .. } => true,
            Self::Line { source, .. } => source.is_unrecognized_root(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
