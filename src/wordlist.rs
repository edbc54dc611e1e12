use std::collections::HashMap;
use std::sync::OnceLock;

const EFF_LONG_DATA: &str = include_str!("../assets/eff_long_wordlist.txt");
const EFF_SHORT_DATA: &str = include_str!("../assets/eff_short_wordlist.txt");

#[cfg(test)]
const EFF_LONG_SHA256: &str =
    "8a8d25897934ea4f96d23770fcb21d507faade6cfe668ea24606dbbdbb9aed1e";
#[cfg(test)]
const EFF_SHORT_SHA256: &str =
    "2f58c81ce16ddfc0348cb3eb9c2e7203da70c8a890f86ec3e8642de58b0a95c7";

/// A table of words addressable by simulated dice rolls.
///
/// A roll-code is the decimal concatenation of `rolls()` die results, each in
/// `[1, sides()]`, first roll most significant. Gaps in a table resolve to
/// `None` at this layer; signalling an error for them is the word roller's
/// responsibility.
pub trait Wordlist {
    /// Returns the word at the given roll-code, if one is mapped.
    fn fetch(&self, roll: u32) -> Option<&str>;

    /// Number of dice rolled to produce one word's roll-code.
    fn rolls(&self) -> u32;

    /// Number of sides on each die.
    fn sides(&self) -> u32;
}

/// Map-backed [`Wordlist`] implementation.
pub struct WordlistTable {
    rolls: u32,
    sides: u32,
    words: HashMap<u32, String>,
}

impl WordlistTable {
    /// Creates a table from a roll-code to word mapping.
    ///
    /// # Panics
    ///
    /// Panics if `rolls` or `sides` is zero.
    pub fn new(rolls: u32, sides: u32, words: HashMap<u32, String>) -> Self {
        assert!(rolls >= 1, "wordlist requires at least one die roll");
        assert!(sides >= 1, "dice require at least one side");
        Self {
            rolls,
            sides,
            words,
        }
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Wordlist for WordlistTable {
    fn fetch(&self, roll: u32) -> Option<&str> {
        self.words.get(&roll).map(String::as_str)
    }

    fn rolls(&self) -> u32 {
        self.rolls
    }

    fn sides(&self) -> u32 {
        self.sides
    }
}

fn parse_table(data: &str, rolls: u32, expected: usize) -> WordlistTable {
    let words: HashMap<u32, String> = data
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let (code, word) = line.split_once('\t').or_else(|| line.split_once(' '))?;
            Some((code.trim().parse().ok()?, word.trim().to_string()))
        })
        .collect();

    assert_eq!(
        words.len(),
        expected,
        "wordlist must contain exactly {} words",
        expected
    );

    WordlistTable::new(rolls, 6, words)
}

static EFF_LONG: OnceLock<WordlistTable> = OnceLock::new();
static EFF_SHORT: OnceLock<WordlistTable> = OnceLock::new();
static EXTRA_ENTROPY: OnceLock<WordlistTable> = OnceLock::new();

/// EFF long-style wordlist: five 6-sided dice, 7776 words.
///
/// This is the default list used by [`PassphraseOptions::default`].
///
/// [`PassphraseOptions::default`]: crate::PassphraseOptions::default
pub fn eff_long() -> &'static WordlistTable {
    EFF_LONG.get_or_init(|| parse_table(EFF_LONG_DATA, 5, 7776))
}

/// EFF short-style wordlist: four 6-sided dice, 1296 words.
pub fn eff_short() -> &'static WordlistTable {
    EFF_SHORT.get_or_init(|| parse_table(EFF_SHORT_DATA, 4, 1296))
}

// Symbols and digits in a two-die pattern, after diceware.com.
const EXTRA_ENTROPY_CHARS: [(u32, &str); 36] = [
    (11, "~"),
    (12, "!"),
    (13, "@"),
    (14, "#"),
    (15, "$"),
    (16, "%"),
    (21, "^"),
    (22, "&"),
    (23, "*"),
    (24, "("),
    (25, ")"),
    (26, "-"),
    (31, "_"),
    (32, "="),
    (33, "+"),
    (34, "{"),
    (35, "}"),
    (36, "["),
    (41, "]"),
    (42, "|"),
    (43, "."),
    (44, ":"),
    (45, ";"),
    (46, "/"),
    (51, "?"),
    (52, ">"),
    (53, "<"),
    (54, "1"),
    (55, "2"),
    (56, "3"),
    (61, "4"),
    (62, "5"),
    (63, "6"),
    (64, "7"),
    (65, "8"),
    (66, "9"),
];

/// Special characters and digits used to enhance passphrase entropy:
/// two 6-sided dice, 36 single-character entries.
pub fn extra_entropy() -> &'static WordlistTable {
    EXTRA_ENTROPY.get_or_init(|| {
        let words = EXTRA_ENTROPY_CHARS
            .iter()
            .map(|&(code, c)| (code, c.to_string()))
            .collect();
        WordlistTable::new(2, 6, words)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};
    use std::collections::HashSet;

    /// Every roll-code producible by `rolls` dice with `sides` faces.
    fn all_roll_codes(rolls: u32, sides: u32) -> Vec<u32> {
        let mut codes = vec![0u32];
        for _ in 0..rolls {
            codes = codes
                .iter()
                .flat_map(|&code| (1..=sides).map(move |face| code * 10 + face))
                .collect();
        }
        codes
    }

    #[test]
    fn test_eff_long_loaded() {
        let table = eff_long();
        assert_eq!(table.len(), 7776);
        assert_eq!(table.rolls(), 5);
        assert_eq!(table.sides(), 6);
    }

    #[test]
    fn test_eff_short_loaded() {
        let table = eff_short();
        assert_eq!(table.len(), 1296);
        assert_eq!(table.rolls(), 4);
        assert_eq!(table.sides(), 6);
    }

    #[test]
    fn test_eff_long_covers_every_roll_code() {
        let table = eff_long();
        for code in all_roll_codes(5, 6) {
            let word = table.fetch(code);
            assert!(
                word.is_some_and(|w| !w.is_empty()),
                "roll-code {} has no word",
                code
            );
        }
    }

    #[test]
    fn test_eff_short_covers_every_roll_code() {
        let table = eff_short();
        for code in all_roll_codes(4, 6) {
            let word = table.fetch(code);
            assert!(
                word.is_some_and(|w| !w.is_empty()),
                "roll-code {} has no word",
                code
            );
        }
    }

    #[test]
    fn test_eff_long_no_duplicates() {
        let table = eff_long();
        let unique: HashSet<_> = table.words.values().collect();
        assert_eq!(unique.len(), table.len(), "wordlist contains duplicates");
    }

    #[test]
    fn test_eff_short_no_duplicates() {
        let table = eff_short();
        let unique: HashSet<_> = table.words.values().collect();
        assert_eq!(unique.len(), table.len(), "wordlist contains duplicates");
    }

    #[test]
    fn test_fetch_unmapped_code_is_none() {
        assert_eq!(eff_long().fetch(1), None);
        assert_eq!(eff_short().fetch(77777), None);
    }

    #[test]
    fn test_extra_entropy_table() {
        let table = extra_entropy();
        assert_eq!(table.len(), 36);
        assert_eq!(table.rolls(), 2);
        assert_eq!(table.sides(), 6);

        for code in all_roll_codes(2, 6) {
            let c = table.fetch(code).unwrap();
            assert_eq!(c.chars().count(), 1, "enhancer {:?} is not one char", c);
        }
    }

    #[test]
    fn test_extra_entropy_known_entries() {
        let table = extra_entropy();
        assert_eq!(table.fetch(11), Some("~"));
        assert_eq!(table.fetch(26), Some("-"));
        assert_eq!(table.fetch(54), Some("1"));
        assert_eq!(table.fetch(66), Some("9"));
    }

    #[test]
    fn test_wordlist_integrity() {
        let long_hash = format!("{:x}", Sha256::digest(EFF_LONG_DATA.as_bytes()));
        assert_eq!(long_hash, EFF_LONG_SHA256);

        let short_hash = format!("{:x}", Sha256::digest(EFF_SHORT_DATA.as_bytes()));
        assert_eq!(short_hash, EFF_SHORT_SHA256);
    }

    #[test]
    #[should_panic(expected = "at least one die roll")]
    fn test_zero_rolls_rejected() {
        WordlistTable::new(0, 6, HashMap::new());
    }

    #[test]
    #[should_panic(expected = "at least one side")]
    fn test_zero_sides_rejected() {
        WordlistTable::new(2, 0, HashMap::new());
    }
}
