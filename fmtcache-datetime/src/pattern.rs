//! Pattern compiler.
//!
//! Patterns use the classic letter syntax: runs of an ASCII letter form a
//! field whose width is the run length, text between single quotes is copied
//! verbatim (`''` is a literal quote) and any other character is a literal.
//!
//! | Letter | Field                     | Letter | Field                     |
//! |--------|---------------------------|--------|---------------------------|
//! | `G`    | era                       | `H`    | hour of day (0-23)        |
//! | `y`    | year                      | `k`    | hour of day (1-24)        |
//! | `M`    | month                     | `K`    | hour of am/pm (0-11)      |
//! | `L`    | stand-alone month         | `h`    | hour of am/pm (1-12)      |
//! | `d`    | day of month              | `m`    | minute                    |
//! | `D`    | day of year               | `s`    | second                    |
//! | `E`    | day name                  | `S`    | millisecond               |
//! | `u`    | day number (1 = Monday)   | `z`    | zone name                 |
//! | `a`    | am/pm marker              | `Z`    | RFC 822 offset            |
//! | `w`    | ISO week of year          | `X`    | ISO 8601 offset           |

use fmtcache_core::InvalidPatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Era,
    Year,
    Month,
    StandaloneMonth,
    DayOfMonth,
    DayOfYear,
    DayName,
    DayNumber,
    AmPm,
    HourOfDay,
    HourOfDay1To24,
    HourOfHalfDay,
    HourOfHalfDay1To12,
    Minute,
    Second,
    Millisecond,
    ZoneName,
    RfcOffset,
    IsoOffset,
    WeekOfYear,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        let field = match letter {
            'G' => Field::Era,
            'y' => Field::Year,
            'M' => Field::Month,
            'L' => Field::StandaloneMonth,
            'd' => Field::DayOfMonth,
            'D' => Field::DayOfYear,
            'E' => Field::DayName,
            'u' => Field::DayNumber,
            'a' => Field::AmPm,
            'H' => Field::HourOfDay,
            'k' => Field::HourOfDay1To24,
            'K' => Field::HourOfHalfDay,
            'h' => Field::HourOfHalfDay1To12,
            'm' => Field::Minute,
            's' => Field::Second,
            'S' => Field::Millisecond,
            'z' => Field::ZoneName,
            'Z' => Field::RfcOffset,
            'X' => Field::IsoOffset,
            'w' => Field::WeekOfYear,
            _ => return None,
        };
        Some(field)
    }
}

/// One compiled element of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Field { field: Field, width: usize },
}

/// Compiles `pattern` into tokens.
///
/// # Errors
///
/// - the pattern is empty
/// - a quote is never closed
/// - a letter has no field meaning
/// - `X` is repeated more than three times
pub fn compile(pattern: &str) -> Result<Vec<Token>, InvalidPatternError> {
    if pattern.is_empty() {
        return Err(InvalidPatternError::new(pattern, 0, "empty pattern"));
    }

    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if c == '\'' {
            if chars.next_if(|&(_, next)| next == '\'').is_some() {
                literal.push('\'');
                continue;
            }
            let mut closed = false;
            while let Some((_, q)) = chars.next() {
                if q == '\'' {
                    if chars.next_if(|&(_, next)| next == '\'').is_some() {
                        literal.push('\'');
                    } else {
                        closed = true;
                        break;
                    }
                } else {
                    literal.push(q);
                }
            }
            if !closed {
                return Err(InvalidPatternError::new(
                    pattern,
                    position,
                    "unterminated quote",
                ));
            }
        } else if c.is_ascii_alphabetic() {
            let field = Field::from_letter(c).ok_or_else(|| {
                InvalidPatternError::new(pattern, position, format!("illegal pattern letter '{c}'"))
            })?;
            let mut width = 1;
            while chars.next_if(|&(_, next)| next == c).is_some() {
                width += 1;
            }
            if field == Field::IsoOffset && width > 3 {
                return Err(InvalidPatternError::new(
                    pattern,
                    position,
                    "'X' may be repeated at most 3 times",
                ));
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Field { field, width });
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(field: Field, width: usize) -> Token {
        Token::Field { field, width }
    }

    fn literal(text: &str) -> Token {
        Token::Literal(text.to_string())
    }

    #[test]
    fn test_compile_fields_and_literals() {
        let tokens = compile("yyyy-MM-dd HH:mm").unwrap();
        assert_eq!(
            tokens,
            vec![
                field(Field::Year, 4),
                literal("-"),
                field(Field::Month, 2),
                literal("-"),
                field(Field::DayOfMonth, 2),
                literal(" "),
                field(Field::HourOfDay, 2),
                literal(":"),
                field(Field::Minute, 2),
            ]
        );
    }

    #[test]
    fn test_compile_quoted_text() {
        let tokens = compile("h 'o''clock' a").unwrap();
        assert_eq!(
            tokens,
            vec![
                field(Field::HourOfHalfDay1To12, 1),
                literal(" o'clock "),
                field(Field::AmPm, 1),
            ]
        );
        assert_eq!(compile("''").unwrap(), vec![literal("'")]);
        assert_eq!(compile("'yyyy'").unwrap(), vec![literal("yyyy")]);
    }

    #[test]
    fn test_compile_rejects_empty_pattern() {
        let err = compile("").unwrap_err();
        assert_eq!(err.position(), 0);
        assert_eq!(err.reason(), "empty pattern");
    }

    #[test]
    fn test_compile_rejects_unterminated_quote() {
        let err = compile("yyyy-'MM").unwrap_err();
        assert_eq!(err.position(), 5);
        assert_eq!(err.reason(), "unterminated quote");
    }

    #[test]
    fn test_compile_rejects_unknown_letter() {
        let err = compile("yyyy-qq").unwrap_err();
        assert_eq!(err.position(), 5);
        assert_eq!(err.pattern(), "yyyy-qq");
        assert!(err.reason().contains("'q'"));
    }

    #[test]
    fn test_compile_rejects_long_iso_offset() {
        assert!(compile("XXX").is_ok());
        let err = compile("HH XXXX").unwrap_err();
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_non_ascii_text_is_literal() {
        assert_eq!(
            compile("d° é").unwrap(),
            vec![field(Field::DayOfMonth, 1), literal("° é")]
        );
    }
}
