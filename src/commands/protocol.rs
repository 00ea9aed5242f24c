//! Command language
//!
//! Parses one line of player input into a [`Command`].

use crate::core::parse_letter;

/// A parsed player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `replace X by Y` or `X = Y`
    Replace { cipher: char, plain: char },
    /// `freq`
    Freq,
    /// `hint`
    Hint,
    /// `help`
    Help,
    /// `exit`
    Exit,
    /// Anything else
    Invalid,
}

impl Command {
    /// Parse a command line
    ///
    /// Tokens are separated by whitespace and matched case-insensitively.
    /// Letters are returned uppercase.
    ///
    /// # Examples
    /// ```
    /// use cryptograms::commands::Command;
    ///
    /// assert_eq!(Command::parse("replace q by e"), Command::Replace { cipher: 'Q', plain: 'E' });
    /// assert_eq!(Command::parse("Q = E"), Command::Replace { cipher: 'Q', plain: 'E' });
    /// assert_eq!(Command::parse("HINT"), Command::Hint);
    /// assert_eq!(Command::parse("replace q with e"), Command::Invalid);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Self::from_tokens(&tokens)
    }

    /// Interpret already tokenized input
    #[must_use]
    pub fn from_tokens(tokens: &[&str]) -> Self {
        match tokens {
            [replace, cipher, by, plain]
                if replace.eq_ignore_ascii_case("replace") && by.eq_ignore_ascii_case("by") =>
            {
                Self::replacement(cipher, plain)
            }
            [cipher, "=", plain] => Self::replacement(cipher, plain),
            [word] => match word.to_ascii_lowercase().as_str() {
                "freq" => Self::Freq,
                "hint" => Self::Hint,
                "help" => Self::Help,
                "exit" => Self::Exit,
                _ => Self::Invalid,
            },
            _ => Self::Invalid,
        }
    }

    fn replacement(cipher: &str, plain: &str) -> Self {
        match (parse_letter(cipher), parse_letter(plain)) {
            (Some(cipher), Some(plain)) => Self::Replace { cipher, plain },
            _ => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_replace_forms() {
        let expected = Command::Replace {
            cipher: 'X',
            plain: 'A',
        };
        assert_eq!(Command::parse("replace x by a"), expected);
        assert_eq!(Command::parse("REPLACE X BY A"), expected);
        assert_eq!(Command::parse("x = a"), expected);
        assert_eq!(Command::parse("  X   =   a  "), expected);
    }

    #[test]
    fn parses_single_word_commands() {
        assert_eq!(Command::parse("freq"), Command::Freq);
        assert_eq!(Command::parse("hint"), Command::Hint);
        assert_eq!(Command::parse("Help"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Exit);
    }

    #[test]
    fn rejects_malformed_replacements() {
        for line in [
            "replace x = a",
            "replace x by",
            "replace xy by a",
            "replace x by 1",
            "x = ?",
            "x == a",
            "x a",
            "= a",
            "x = a b",
        ] {
            assert_eq!(Command::parse(line), Command::Invalid, "accepted {line:?}");
        }
    }

    #[test]
    fn rejects_unknown_and_empty_input() {
        assert_eq!(Command::parse(""), Command::Invalid);
        assert_eq!(Command::parse("solve"), Command::Invalid);
        assert_eq!(Command::parse("freq please"), Command::Invalid);
    }

    #[test]
    fn from_tokens_matches_parse() {
        assert_eq!(
            Command::from_tokens(&["replace", "b", "by", "c"]),
            Command::parse("replace b by c")
        );
    }
}
