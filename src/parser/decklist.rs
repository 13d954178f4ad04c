//! Line-oriented decklist text parser.
//!
//! Accepted layout:
//!
//! ```text
//! Deck
//! 4 Llanowar Elves
//! 4x Giant Growth
//! 20 Forest
//!
//! Sideboard
//! 3 Naturalize
//! ```
//!
//! The optional first-line header is any word containing `deck`
//! (`Deck`, `Maindeck`, `Decklist:`). Any line whose first word contains
//! `side` starts the sideboard. All other non-blank lines are
//! `<quantity>[x] <card name>`.

use crate::core::{Decklist, Submission};

use super::error::DecklistError;

/// Which half of the submission lines are currently added to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Main,
    Side,
}

/// Parse decklist text into maindeck and sideboard.
///
/// Stops at the first malformed line.
///
/// ```
/// use randard_legality::parser::parse_decklist;
///
/// let submission = parse_decklist("Deck\n4 Dispel\n56 Island\nSideboard\n2 Negate\n").unwrap();
/// assert_eq!(submission.maindeck.total(), 60);
/// assert_eq!(submission.sideboard.count("Negate"), 2);
/// ```
pub fn parse_decklist(text: &str) -> Result<Submission, DecklistError> {
    let mut maindeck = Decklist::new();
    let mut sideboard = Decklist::new();
    let mut section = Section::Main;
    let mut first_entry = true;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (token, rest) = split_first_token(line);
        let lowered = token.to_lowercase();
        let is_first = std::mem::replace(&mut first_entry, false);

        if is_first && lowered.contains("deck") {
            log::trace!("line {line_no}: maindeck header {token:?}");
            continue;
        }
        if lowered.contains("side") {
            log::trace!("line {line_no}: sideboard header {token:?}");
            section = Section::Side;
            continue;
        }

        let quantity = parse_quantity(token).ok_or_else(|| DecklistError::InvalidQuantity {
            line: line_no,
            token: token.to_string(),
        })?;
        if rest.is_empty() {
            return Err(DecklistError::MissingCardName { line: line_no });
        }

        let target = match section {
            Section::Main => &mut maindeck,
            Section::Side => &mut sideboard,
        };
        target.add(rest, quantity);
    }

    log::debug!(
        "parsed decklist: {} maindeck cards ({} distinct), {} sideboard cards ({} distinct)",
        maindeck.total(),
        maindeck.len(),
        sideboard.total(),
        sideboard.len()
    );

    Ok(Submission::new(maindeck, sideboard))
}

/// Split a trimmed line into its first word and the trimmed remainder.
fn split_first_token(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (line, ""),
    }
}

/// Parse `4`, `4x` or `4X`.
fn parse_quantity(token: &str) -> Option<u32> {
    token
        .strip_suffix(|c: char| c.eq_ignore_ascii_case(&'x'))
        .unwrap_or(token)
        .parse()
        .ok()
}
