use crate::errors::{Result, VerifyError};

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Query { key: String, value: String },
}

impl Command {
    /// `exit` (any case) ends the session. Anything else must be `key,value`;
    /// only the first comma splits, so the value may itself contain commas.
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            return Ok(Command::Exit);
        }
        let (key, value) = line.split_once(',').ok_or(VerifyError::MalformedInput)?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return Err(VerifyError::MalformedInput);
        }
        Ok(Command::Query { key: key.to_string(), value: value.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query(key: &str, value: &str) -> Command {
        Command::Query { key: key.into(), value: value.into() }
    }

    #[test]
    fn exit_any_case() {
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("  EXIT \n").unwrap(), Command::Exit);
    }

    #[test]
    fn splits_on_first_comma_only() {
        assert_eq!(Command::parse(" acne , ziana ").unwrap(), query("acne", "ziana"));
        assert_eq!(Command::parse("acne,ziana,extra").unwrap(), query("acne", "ziana,extra"));
    }

    #[test]
    fn malformed_lines() {
        for line in ["acne", "", ",ziana", "acne,", " , "] {
            assert!(
                matches!(Command::parse(line), Err(VerifyError::MalformedInput)),
                "expected malformed for {line:?}"
            );
        }
    }
}
