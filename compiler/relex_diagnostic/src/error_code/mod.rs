//! Error codes for scan diagnostics.

use std::fmt;

/// Error codes for scan diagnostics.
///
/// Format: `L####`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Input no token definition recognizes
    L0001,
    /// Token of the wrong kind where the parser expected another
    L0002,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::L0001 => "L0001",
            ErrorCode::L0002 => "L0002",
        }
    }

    /// One-line summary, for `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::L0001 => "unrecognized input",
            ErrorCode::L0002 => "unexpected token kind",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_strings() {
        assert_eq!(ErrorCode::L0001.as_str(), "L0001");
        assert_eq!(ErrorCode::L0002.to_string(), "L0002");
        assert_eq!(ErrorCode::L0001.description(), "unrecognized input");
    }
}
