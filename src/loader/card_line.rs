//! Card line grammar
//!
//! A card line is `<quantity> <name>`: optional leading whitespace, one or
//! more ASCII digits, at least one whitespace character, then the name.

use crate::core::{CardLineEntry, FormattedLine};
use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::digit1,
    combinator::{map_res, rest},
    sequence::{preceded, separated_pair},
    IResult,
};

fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn whitespace1(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

fn quantity(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>())(input)
}

fn card_line(input: &str) -> IResult<&str, (u32, &str)> {
    preceded(whitespace0, separated_pair(quantity, whitespace1, rest))(input)
}

/// Parse a single card line into an entry.
///
/// Returns `None` for anything that is not a card line, including a zero
/// quantity or a name that is only whitespace.
pub fn parse_card_line(line: &str) -> Option<CardLineEntry> {
    let (_, (count, name)) = card_line(line).ok()?;
    let name = name.trim();

    if count == 0 || name.is_empty() {
        return None;
    }

    Some(CardLineEntry::new(count, name))
}

/// Format one line. Blank lines yield `None`; everything else is either a
/// card entry or the original text passed through.
pub fn format_card_line(line: &str) -> Option<FormattedLine> {
    if line.trim().is_empty() {
        return None;
    }

    Some(match parse_card_line(line) {
        Some(entry) => FormattedLine::Card(entry),
        None => FormattedLine::Unparsed(line.to_string()),
    })
}

/// Format a sequence of raw lines, dropping blanks and keeping order.
pub fn format_card_lines<I, S>(lines: I) -> Vec<FormattedLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| format_card_line(line.as_ref()))
        .collect()
}

/// True when every formatted line is a card entry. Empty input is valid.
pub fn card_lines_valid(entries: &[FormattedLine]) -> bool {
    entries.iter().all(FormattedLine::is_card)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(quantity: u32, name: &str) -> FormattedLine {
        FormattedLine::Card(CardLineEntry::new(quantity, name))
    }

    fn unparsed(line: &str) -> FormattedLine {
        FormattedLine::Unparsed(line.to_string())
    }

    #[test]
    fn test_format_multiple_valid_lines() {
        let input = ["1 card name", "2 other card name", "3 weird  card  name"];
        assert_eq!(
            format_card_lines(input),
            vec![
                card(1, "card name"),
                card(2, "other card name"),
                card(3, "weird  card  name"),
            ]
        );
    }

    #[test]
    fn test_format_drops_blank_lines() {
        let input = ["1 card name", "2 other card name", "", " ", "\t", "3 weird  card  name"];
        assert_eq!(
            format_card_lines(input),
            vec![
                card(1, "card name"),
                card(2, "other card name"),
                card(3, "weird  card  name"),
            ]
        );
    }

    #[test]
    fn test_format_passes_invalid_lines_through() {
        assert_eq!(format_card_lines(Vec::<String>::new()), vec![]);
        assert_eq!(format_card_lines(["wow"]), vec![unparsed("wow")]);
        assert_eq!(
            format_card_lines(["hellow world", "hi universe"]),
            vec![unparsed("hellow world"), unparsed("hi universe")]
        );
    }

    #[test]
    fn test_format_mixed_lines_keep_order() {
        let input = ["1 card name", "2 other card name", "", "3 weird  card  name", "wow"];
        assert_eq!(
            format_card_lines(input),
            vec![
                card(1, "card name"),
                card(2, "other card name"),
                card(3, "weird  card  name"),
                unparsed("wow"),
            ]
        );
    }

    #[test]
    fn test_parse_card_line_edges() {
        assert_eq!(parse_card_line("  4   spaced out  "), Some(CardLineEntry::new(4, "spaced out")));
        assert_eq!(parse_card_line("12\tTabbed Card"), Some(CardLineEntry::new(12, "Tabbed Card")));
        assert_eq!(parse_card_line("007 agent"), Some(CardLineEntry::new(7, "agent")));
        assert_eq!(parse_card_line("1card"), None);
        assert_eq!(parse_card_line("-1 card"), None);
        assert_eq!(parse_card_line("0 card"), None);
        assert_eq!(parse_card_line("3   "), None);
        assert_eq!(parse_card_line("99999999999 card"), None);
        assert_eq!(parse_card_line("name: my deck"), None);
    }

    #[test]
    fn test_card_lines_valid() {
        assert!(card_lines_valid(&[]));
        assert!(card_lines_valid(&[card(1, "card name")]));
        assert!(card_lines_valid(&[card(1, "card name"), card(2, "other card name")]));
        assert!(!card_lines_valid(&[unparsed("wow")]));
        assert!(!card_lines_valid(&[card(1, "card name"), unparsed("wow"), card(3, "x")]));
    }
}
