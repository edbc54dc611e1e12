use crate::error::{Error, Result};
use crate::rng::{OsRandom, RandomSource};
use crate::wordlist::{self, Wordlist};
use zeroize::Zeroizing;

/// Options for a single passphrase generation.
///
/// Ephemeral: constructed per call and consumed by [`roll_words`]. A `None`
/// random source means the secure OS-backed default, constructed at the call
/// boundary.
pub struct PassphraseOptions<'a> {
    /// Number of words in the passphrase. Must be positive.
    pub word_count: usize,

    /// String placed between words. Common choices are spaces, hyphens
    /// and dots.
    pub separator: String,

    /// Wordlist to roll words from. Required; `None` fails with
    /// [`Error::InvalidWordlist`].
    pub wordlist: Option<&'a dyn Wordlist>,

    /// Insert random special characters into a prefix of the words.
    pub enhance_entropy: bool,

    /// Source of randomness. Defaults to [`OsRandom`] when `None`.
    pub random_source: Option<Box<dyn RandomSource + 'a>>,
}

impl Default for PassphraseOptions<'_> {
    /// Six words separated by spaces, rolled from the EFF long-style list
    /// with the secure default random source and no entropy enhancement.
    fn default() -> Self {
        Self {
            word_count: 6,
            separator: " ".to_string(),
            wordlist: Some(wordlist::eff_long()),
            enhance_entropy: false,
            random_source: None,
        }
    }
}

/// Rolls a single random word from the wordlist.
///
/// Simulates `wordlist.rolls()` throws of a `wordlist.sides()`-sided die,
/// first throw most significant, and fetches the word at the resulting
/// roll-code. A roll-code with no mapped word fails with
/// [`Error::InvalidWordFetched`]; it is not retried, since it signals a
/// malformed or sparse table rather than bad luck.
pub fn roll_word(wordlist: &dyn Wordlist, rng: &mut dyn RandomSource) -> Result<String> {
    let mut roll = 0u32;

    for _ in 0..wordlist.rolls() {
        // Dice are 1-indexed.
        let face = rng.next(wordlist.sides())? + 1;
        roll = roll * 10 + face;
    }

    match wordlist.fetch(roll) {
        Some(word) if !word.is_empty() => Ok(word.to_string()),
        _ => Err(Error::InvalidWordFetched { roll }),
    }
}

/// Generates a passphrase according to the given options.
///
/// Returns either a fully formed passphrase or an error; a failure at any
/// point aborts the whole generation and no partial passphrase escapes.
/// Word-roll failures are wrapped with the 1-based index of the word that
/// failed, with the underlying kind reachable via [`Error::root_cause`].
pub fn roll_words(mut opts: PassphraseOptions<'_>) -> Result<Zeroizing<String>> {
    let list = opts.wordlist.ok_or(Error::InvalidWordlist)?;

    if opts.word_count == 0 {
        return Err(Error::InvalidWordCount);
    }

    let mut rng = opts
        .random_source
        .take()
        .unwrap_or_else(|| Box::new(OsRandom));

    let mut words = Vec::with_capacity(opts.word_count);
    for index in 1..=opts.word_count {
        let word = roll_word(list, rng.as_mut()).map_err(|source| Error::Word {
            index,
            source: Box::new(source),
        })?;
        words.push(word);
    }

    if opts.enhance_entropy {
        enhance_words(&mut words, &opts.separator, rng.as_mut())?;
    }

    Ok(Zeroizing::new(words.join(&opts.separator)))
}

/// Inserts one random special character into each word of a randomly sized
/// prefix of `words`.
///
/// At least one word is always enhanced. A rolled character that occurs in
/// the separator is discarded and re-rolled, so splitting the passphrase on
/// the separator still yields exactly `words.len()` segments.
fn enhance_words(
    words: &mut [String],
    separator: &str,
    rng: &mut dyn RandomSource,
) -> Result<()> {
    let num_to_enhance = rng.next(words.len() as u32)? as usize + 1;

    let mut i = 0;
    while i < num_to_enhance {
        let enhancer = roll_word(wordlist::extra_entropy(), rng)?;

        if separator.contains(enhancer.as_str()) {
            continue;
        }

        // Insertion points run from just after the first character to the
        // end of the word.
        let pos = rng.next(words[i].len() as u32)? as usize;
        words[i].insert_str(pos + 1, &enhancer);
        i += 1;
    }

    Ok(())
}

/// Convenience wrapper over [`roll_words`] for callers that do not need
/// custom options.
pub fn simple_roll_words(
    word_count: usize,
    separator: &str,
    wordlist: &dyn Wordlist,
    enhance_entropy: bool,
) -> Result<Zeroizing<String>> {
    roll_words(PassphraseOptions {
        word_count,
        separator: separator.to_string(),
        wordlist: Some(wordlist),
        enhance_entropy,
        random_source: None,
    })
}
