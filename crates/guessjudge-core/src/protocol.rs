//! Line protocol shared by the test data and the contestant channel.
//!
//! Both sides speak newline-delimited text. Lines are decoded lossily so a
//! contestant that writes garbage bytes gets a malformed-guess verdict
//! instead of crashing the judge.

use std::io::{self, BufRead};

use crate::number::Integer;

/// One line of contestant input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessLine {
    /// Only whitespace. Skipped without using an attempt.
    Blank,
    /// A well-formed guess.
    Guess(Integer),
    /// Anything else; holds the trimmed text.
    Malformed(String),
}

/// Read the next line, including its `\n` if present.
///
/// Returns `Ok(None)` at end of input. A trailing line without a newline is
/// still returned.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Parse a decimal integer of any size, ignoring surrounding whitespace.
pub fn parse_integer(text: &str) -> Option<Integer> {
    text.trim().parse().ok()
}

/// Classify a raw contestant line.
pub fn classify_guess(line: &str) -> GuessLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return GuessLine::Blank;
    }
    match parse_integer(trimmed) {
        Some(guess) => GuessLine::Guess(guess),
        None => GuessLine::Malformed(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_lines_until_eof() {
        let mut input = Cursor::new("50\n25\n37");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("50\n"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("25\n"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("37"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn read_line_tolerates_invalid_utf8() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let line = read_line(&mut input).unwrap().unwrap();
        assert_eq!(classify_guess(&line), GuessLine::Malformed(line.trim().to_string()));
    }

    #[test]
    fn parse_integer_forms() {
        assert_eq!(parse_integer("42"), Some(Integer::from(42)));
        assert_eq!(parse_integer("  42 \r\n"), Some(Integer::from(42)));
        assert_eq!(parse_integer("+7"), Some(Integer::from(7)));
        assert_eq!(parse_integer("-3"), Some(Integer::from(-3)));
        assert_eq!(parse_integer("1_0"), Some(Integer::from(10)));
        assert_eq!(parse_integer("oops"), None);
        assert_eq!(parse_integer("4 2"), None);
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn classify_blank_and_malformed() {
        assert_eq!(classify_guess("\n"), GuessLine::Blank);
        assert_eq!(classify_guess("   \t\r\n"), GuessLine::Blank);
        assert_eq!(classify_guess(" 17 \n"), GuessLine::Guess(Integer::from(17)));
        assert_eq!(
            classify_guess("abc\n"),
            GuessLine::Malformed("abc".to_string())
        );
    }

    #[test]
    fn oversized_integers_are_guesses() {
        let GuessLine::Guess(guess) = classify_guess("99999999999999999999\n") else {
            panic!("expected a guess");
        };
        assert_eq!(guess.to_string(), "99999999999999999999");
        assert!(matches!(
            classify_guess("-99999999999999999999"),
            GuessLine::Guess(_)
        ));
    }
}
