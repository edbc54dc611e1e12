//! Diceware passphrase generation.
//!
//! Words are selected by simulating physical dice rolls with a
//! cryptographically secure random source and joined with a configurable
//! separator. Optional entropy enhancement inserts random special characters
//! without colliding with the separator.

pub mod error;
pub mod generator;
pub mod rng;
pub mod wordlist;

pub use error::{Error, Result};
pub use generator::{roll_word, roll_words, simple_roll_words, PassphraseOptions};
pub use rng::{OsRandom, RandomSource};
pub use wordlist::{Wordlist, WordlistTable};
