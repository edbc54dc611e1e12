use thiserror::Error;

/// Result type for the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised during passphrase generation.
#[derive(Debug, Error)]
pub enum Error {
    /// No wordlist was provided in the options.
    #[error("no wordlist provided")]
    InvalidWordlist,

    /// The requested word count was zero.
    #[error("invalid word count: must be positive")]
    InvalidWordCount,

    /// A roll-code had no word mapped to it. This signals a malformed or
    /// sparse wordlist table, not a normal runtime condition.
    #[error("no word fetched for roll value {roll}")]
    InvalidWordFetched { roll: u32 },

    /// The entropy source failed to produce a value. Never retried against
    /// a weaker source.
    #[error("failed to get random value")]
    Randomness(#[from] rand::Error),

    /// A word roll failed while assembling a passphrase. Carries the
    /// 1-based index of the word that failed.
    #[error("failed to generate word {index}")]
    Word {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Strips word-index context so callers can match on the underlying
    /// failure kind.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Word { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
