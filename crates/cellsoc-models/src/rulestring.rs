//! Birth/survival rulestrings such as `B3/S23`.
//!
//! A rulestring has one `B` section and one `S` section separated by `/`,
//! in either order. Each section lists neighbour counts (digits 0-8) and
//! may be empty. Letters are case-insensitive and surrounding whitespace is
//! ignored.

use std::error::Error;
use std::fmt;

/// Largest neighbour count a rulestring may name.
pub const MAX_COUNT: u32 = 8;

/// Errors from parsing a birth/survival rulestring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleParseError {
    /// The input is empty or whitespace.
    Empty,
    /// A required section is absent.
    MissingSection {
        /// `'B'` or `'S'`.
        section: char,
    },
    /// A section appears more than once.
    DuplicateSection {
        /// `'B'` or `'S'`.
        section: char,
    },
    /// A character that is neither a section letter, a digit, nor `/`.
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Character index within the trimmed input.
        position: usize,
    },
    /// A digit above the largest possible neighbour count.
    CountOutOfRange {
        /// The digit that was given.
        count: u32,
    },
}

impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty rulestring"),
            Self::MissingSection { section } => write!(f, "rulestring has no {section} section"),
            Self::DuplicateSection { section } => {
                write!(f, "rulestring has more than one {section} section")
            }
            Self::UnexpectedChar { ch, position } => {
                write!(f, "unexpected character {ch:?} at position {position}")
            }
            Self::CountOutOfRange { count } => {
                write!(f, "neighbour count {count} exceeds {MAX_COUNT}")
            }
        }
    }
}

impl Error for RuleParseError {}

/// Parse a rulestring into `(birth, survive)` bitmasks, bit `n` set when
/// count `n` is listed.
pub(crate) fn parse(input: &str) -> Result<(u16, u16), RuleParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(RuleParseError::Empty);
    }

    let mut birth: Option<u16> = None;
    let mut survive: Option<u16> = None;
    let mut position = 0;

    for section in text.split('/') {
        let mut chars = section.chars();
        let letter = match chars.next() {
            Some(c) => c,
            None => {
                return Err(RuleParseError::UnexpectedChar {
                    ch: '/',
                    position,
                })
            }
        };
        let slot = match letter.to_ascii_uppercase() {
            'B' => &mut birth,
            'S' => &mut survive,
            other => {
                return Err(RuleParseError::UnexpectedChar {
                    ch: other,
                    position,
                })
            }
        };
        if slot.is_some() {
            return Err(RuleParseError::DuplicateSection {
                section: letter.to_ascii_uppercase(),
            });
        }

        let mut mask = 0u16;
        for (i, ch) in chars.enumerate() {
            let count = ch.to_digit(10).ok_or(RuleParseError::UnexpectedChar {
                ch,
                position: position + 1 + i,
            })?;
            if count > MAX_COUNT {
                return Err(RuleParseError::CountOutOfRange { count });
            }
            mask |= 1 << count;
        }
        *slot = Some(mask);
        position += section.chars().count() + 1;
    }

    let birth = birth.ok_or(RuleParseError::MissingSection { section: 'B' })?;
    let survive = survive.ok_or(RuleParseError::MissingSection { section: 'S' })?;
    Ok((birth, survive))
}

/// Format bitmasks back into canonical `B.../S...` form.
pub(crate) fn format(birth: u16, survive: u16, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = |mask: u16| -> String {
        (0..=MAX_COUNT)
            .filter(|n| mask & (1 << n) != 0)
            .filter_map(|n| char::from_digit(n, 10))
            .collect()
    };
    write!(f, "B{}/S{}", digits(birth), digits(survive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_conway() {
        assert_eq!(parse("B3/S23"), Ok((1 << 3, (1 << 2) | (1 << 3))));
    }

    #[test]
    fn section_order_and_case_are_free() {
        assert_eq!(parse("s23/b3"), parse("B3/S23"));
        assert_eq!(parse("  B36/S23 "), Ok(((1 << 3) | (1 << 6), (1 << 2) | (1 << 3))));
    }

    #[test]
    fn empty_sections_are_allowed() {
        assert_eq!(parse("B/S"), Ok((0, 0)));
        assert_eq!(parse("B2/S"), Ok((1 << 2, 0)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse(""), Err(RuleParseError::Empty));
        assert_eq!(
            parse("B3"),
            Err(RuleParseError::MissingSection { section: 'S' })
        );
        assert_eq!(
            parse("B3/B2"),
            Err(RuleParseError::DuplicateSection { section: 'B' })
        );
        assert_eq!(
            parse("B3/S2x"),
            Err(RuleParseError::UnexpectedChar {
                ch: 'x',
                position: 5
            })
        );
        assert_eq!(
            parse("B9/S23"),
            Err(RuleParseError::CountOutOfRange { count: 9 })
        );
        assert!(matches!(
            parse("B3//S23"),
            Err(RuleParseError::UnexpectedChar { ch: '/', .. })
        ));
        assert!(matches!(
            parse("X3/S23"),
            Err(RuleParseError::UnexpectedChar { ch: 'X', position: 0 })
        ));
    }

    #[test]
    fn error_display() {
        let e = RuleParseError::CountOutOfRange { count: 9 };
        assert_eq!(e.to_string(), "neighbour count 9 exceeds 8");
    }
}
