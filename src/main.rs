use anyhow::Result;
use clap::{Parser, ValueEnum};
use diceware::{roll_words, wordlist, PassphraseOptions};

#[derive(Parser)]
#[command(
    name = "diceware",
    version,
    about = "Generate diceware passphrases with simulated dice rolls"
)]
struct Cli {
    /// Number of words per passphrase
    #[arg(short, long, default_value_t = 6)]
    words: usize,

    /// Separator placed between words
    #[arg(short, long, default_value = " ")]
    separator: String,

    /// Wordlist to roll from
    #[arg(short = 'l', long, value_enum, default_value = "long")]
    wordlist: List,

    /// Insert random special characters into some of the words
    #[arg(short, long)]
    enhance: bool,

    /// Number of passphrases to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum List {
    Long,
    Short,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let list: &dyn diceware::Wordlist = match cli.wordlist {
        List::Long => wordlist::eff_long(),
        List::Short => wordlist::eff_short(),
    };

    for _ in 0..cli.count {
        let passphrase = roll_words(PassphraseOptions {
            word_count: cli.words,
            separator: cli.separator.clone(),
            wordlist: Some(list),
            enhance_entropy: cli.enhance,
            random_source: None,
        })?;

        println!("{}", *passphrase);
    }

    Ok(())
}
