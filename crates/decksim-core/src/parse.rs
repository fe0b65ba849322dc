//! Line-oriented deck and combo grammar.
//!
//! Both inputs share the same framing: lines are trimmed, blank lines and
//! `#` comments are ignored. Malformed lines are reported as warnings and
//! skipped; a run proceeds with whatever parsed.
//!
//! Deck lines are `<count> <card name>`; the reserved name `total` declares
//! a target deck size, padded with [`FILLER_CARD`](crate::FILLER_CARD) when
//! the enumerated cards fall short.
//!
//! Each combo line is one AND-group: terms separated by `+`, where a term is
//! either a requirement or `(<requirement>|<requirement>|...)`. Requirement
//! forms: `<card name>` (at least one), `<n> <card name>` (exactly n), and
//! `-<n> <card name>` (at least n copies must remain undrawn).

use crate::model::combo::{AndGroup, Combo, OrGroup};
use crate::model::deck::Deck;
use crate::model::requirement::Requirement;

#[derive(Debug, Clone, Default)]
pub struct DeckParse {
    pub deck: Deck,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ComboParse {
    pub combo: Combo,
    pub warnings: Vec<String>,
}

fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Splits `<count> <name>` where count is a decimal integer and name is
/// non-empty. Returns `None` when the line does not fit that shape.
fn split_count(line: &str) -> Option<(u32, &str)> {
    let (head, rest) = line.split_once(' ')?;
    let count = head.parse().ok()?;
    let name = rest.trim();
    if name.is_empty() { None } else { Some((count, name)) }
}

pub fn parse_deck(text: &str) -> DeckParse {
    let mut deck = Deck::new();
    let mut warnings = Vec::new();
    let mut total = None;
    for line in content_lines(text) {
        match split_count(line) {
            Some((count, "total")) => total = Some(count as usize),
            Some((count, name)) => deck.push(name, count),
            None => warnings.push(format!("ignoring malformed deck line: {line}")),
        }
    }
    if let Some(total) = total {
        deck.pad_to(total);
    }
    DeckParse { deck, warnings }
}

fn parse_requirement(term: &str) -> Option<Requirement> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    if let Some(rest) = term.strip_prefix('-') {
        let (count, name) = split_count(rest)?;
        return Some(Requirement::remaining(name, count));
    }
    if let Some((count, name)) = split_count(term) {
        return Some(Requirement::exactly(name, count));
    }
    Some(Requirement::at_least(term, 1))
}

pub fn parse_combo(text: &str) -> ComboParse {
    let mut groups = Vec::new();
    let mut warnings = Vec::new();
    'line: for line in content_lines(text) {
        let mut terms = Vec::new();
        for term in line.split('+') {
            let term = term.trim();
            let inner = term
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'));
            let or_group = if let Some(inner) = inner {
                let mut options = Vec::new();
                for option in inner.split('|') {
                    match parse_requirement(option) {
                        Some(requirement) => options.push(requirement),
                        None => {
                            warnings.push(format!("ignoring malformed combo line: {line}"));
                            continue 'line;
                        }
                    }
                }
                OrGroup::new(options)
            } else {
                match parse_requirement(term) {
                    Some(requirement) => OrGroup::single(requirement),
                    None => {
                        warnings.push(format!("ignoring malformed combo line: {line}"));
                        continue 'line;
                    }
                }
            };
            terms.push(or_group);
        }
        groups.push(AndGroup::new(terms));
    }
    ComboParse {
        combo: Combo::new(groups),
        warnings,
    }
}
