use serde::{Deserialize, Serialize};

/// One entry of a protocol's risk-score vector, as rendered by the rosette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    L,
    M,
    H,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::L => "Low",
            RiskLevel::M => "Medium",
            RiskLevel::H => "High",
        };
        write!(f, "{label}")
    }
}
