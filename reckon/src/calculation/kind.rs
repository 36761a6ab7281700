use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use super::Error;

/// The supported calculation operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "lowercase"))]
pub enum Kind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Exponentiation,
    NthRoot,
    Modulus,
}

impl Kind {
    /// The type-name token accepted by [`create`](crate::Calculation::create).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::Exponentiation => "exponentiation",
            Self::NthRoot => "nthroot",
            Self::Modulus => "modulus",
        }
    }

    /// Message rendered when a variant receives fewer inputs than it
    /// requires. Subtraction and Division share a generic wording; the
    /// remaining variants name themselves.
    pub(crate) fn insufficient_inputs_message(self) -> String {
        match self {
            Self::Subtraction | Self::Division => {
                "inputs must be a list with at least two numbers".to_string()
            }
            kind => format!("{kind} requires at least two inputs"),
        }
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition" => Ok(Self::Addition),
            "subtraction" => Ok(Self::Subtraction),
            "multiplication" => Ok(Self::Multiplication),
            "division" => Ok(Self::Division),
            "exponentiation" => Ok(Self::Exponentiation),
            "nthroot" => Ok(Self::NthRoot),
            "modulus" => Ok(Self::Modulus),
            other => Err(Error::UnsupportedType(other.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Kind; 7] = [
        Kind::Addition,
        Kind::Subtraction,
        Kind::Multiplication,
        Kind::Division,
        Kind::Exponentiation,
        Kind::NthRoot,
        Kind::Modulus,
    ];

    #[test]
    fn tokens_round_trip() {
        for kind in ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn rejects_unknown_token() {
        let err = "absolutevalue".parse::<Kind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(ref t) if t == "absolutevalue"));
    }

    #[test]
    fn token_match_is_case_sensitive() {
        assert!("Addition".parse::<Kind>().is_err());
        assert!("NTHROOT".parse::<Kind>().is_err());
    }
}
