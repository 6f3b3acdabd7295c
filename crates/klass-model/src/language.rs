use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the KLASS API serves names and descriptions in.
///
/// The wire form is the lowercase two-letter code: "nb" (bokmål),
/// "nn" (nynorsk) or "en" (English). Bokmål is the API default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "nb")]
    Nb,
    #[serde(rename = "nn")]
    Nn,
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Nb => "nb",
            Language::Nn => "nn",
            Language::En => "en",
        }
    }

    /// All valid codes, for error messages.
    pub const ALL: [&'static str; 3] = ["nb", "nn", "en"];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nb" => Ok(Language::Nb),
            "nn" => Ok(Language::Nn),
            "en" => Ok(Language::En),
            other => Err(format!(
                "unknown language '{other}', expected one of: {}",
                Language::ALL.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("NB".parse::<Language>().unwrap(), Language::Nb);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert!("no".parse::<Language>().is_err());
    }

    #[test]
    fn wire_form_is_lowercase() {
        assert_eq!(Language::Nn.to_string(), "nn");
    }
}
