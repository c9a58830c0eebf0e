use serde::{Deserialize, Serialize};

/// Decentralization stage of a protocol.
///
/// Curated documents encode this either as a number (0, 1, 2) or as a
/// letter flag, "R" for protocols whose assessment is still under review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stage {
    Ranked(u8),
    Flag(String),
}

impl Stage {
    pub fn review() -> Self {
        Stage::Flag("R".into())
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Ranked(n) => write!(f, "Stage {n}"),
            Stage::Flag(s) if s == "R" => write!(f, "Review"),
            Stage::Flag(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_letter_forms() {
        let ranked: Stage = serde_json::from_str("2").unwrap();
        assert_eq!(ranked, Stage::Ranked(2));

        let review: Stage = serde_json::from_str("\"R\"").unwrap();
        assert_eq!(review, Stage::review());
    }

    #[test]
    fn roundtrips_to_the_same_json_form() {
        assert_eq!(serde_json::to_string(&Stage::Ranked(0)).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Stage::review()).unwrap(), "\"R\"");
    }

    #[test]
    fn display() {
        assert_eq!(Stage::Ranked(1).to_string(), "Stage 1");
        assert_eq!(Stage::review().to_string(), "Review");
    }
}
