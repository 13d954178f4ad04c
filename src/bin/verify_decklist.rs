//! Verify a decklist file against a set list.
//!
//! ## Usage
//!
//! ```text
//! verify_decklist deck.txt DOM M19 GRN --printings printings.json
//! verify_decklist deck.txt --printings printings.bin --unique
//! ```
//!
//! With no sets listed, every set in the snapshot's universe is legal.
//! Exit status: 0 when the deck is legal, 1 when it is not, 2 on errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use randard_legality::core::{FormatRules, SetCodes};
use randard_legality::legality::Verdict;
use randard_legality::parser::{read_decklist, DecklistSource};
use randard_legality::printings::PrintingSnapshot;

#[derive(Debug, Parser)]
#[command(
    name = "verify_decklist",
    about = "Verifies that a .txt decklist is valid for a format consisting of the given sets"
)]
struct Args {
    /// Decklist text file.
    decklist: PathBuf,

    /// Legal set codes. Defaults to every set in the snapshot.
    sets: Vec<String>,

    /// Printing snapshot (`.json`, or bincode for any other extension).
    #[arg(long)]
    printings: PathBuf,

    /// Copy limit per card.
    #[arg(long, default_value_t = 4)]
    max_cards: u32,

    /// Minimum main deck size.
    #[arg(long, default_value_t = 60)]
    min_deck_size: u64,

    /// Maximum main deck size.
    #[arg(long)]
    max_deck_size: Option<u64>,

    /// Minimum sideboard size.
    #[arg(long, default_value_t = 0)]
    min_sideboard_size: u64,

    /// Maximum sideboard size.
    #[arg(long, default_value_t = 15)]
    max_sideboard_size: u64,

    /// Also check the one-card-per-set variant and print the pairing.
    #[arg(long)]
    unique: bool,
}

impl Args {
    fn rules(&self) -> FormatRules {
        let mut rules = FormatRules::default()
            .with_max_cards(self.max_cards)
            .with_min_deck_size(self.min_deck_size)
            .with_min_sideboard_size(self.min_sideboard_size)
            .with_max_sideboard_size(self.max_sideboard_size);
        rules.max_deck_size = self.max_deck_size;
        rules
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let snapshot = PrintingSnapshot::load(&args.printings)?;
    let submission = read_decklist(DecklistSource::file(&args.decklist))?;

    let legal: Option<SetCodes> = if args.sets.is_empty() {
        None
    } else {
        Some(args.sets.iter().map(String::as_str).collect())
    };

    let verifier = snapshot.verifier(args.rules());
    let verdict = verifier.verify_submission(&submission, legal.as_ref());
    let mut legal_deck = verdict.is_valid();

    match &verdict {
        Verdict::Valid => println!("Valid"),
        Verdict::Invalid { violations } => {
            for violation in violations {
                println!("{violation}");
            }
        }
    }

    if args.unique {
        match verifier.assign_unique(&submission, legal.as_ref()) {
            Some(assignment) => {
                let mut pairs: Vec<_> = assignment.iter().collect();
                pairs.sort();
                for (card, set) in pairs {
                    println!("{card}: {set}");
                }
            }
            None => {
                println!("No one-card-per-set assignment exists");
                legal_deck = false;
            }
        }
    }

    Ok(legal_deck)
}
