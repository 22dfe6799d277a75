//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::query::Algorithm;

/// Algorithm selection for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    /// Non-negative weights only (Dijkstra-style frontier expansion)
    #[value(alias = "dijkstra", alias = "dijkstras")]
    LabelSetting,
    /// Signed weights, no negative cycles (Bellman-Ford-style relaxation)
    #[value(alias = "bellman-ford", alias = "bellmanford")]
    LabelCorrecting,
}

impl std::fmt::Display for AlgorithmArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Algorithm::from(*self))
    }
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::LabelSetting => Algorithm::LabelSetting,
            AlgorithmArg::LabelCorrecting => Algorithm::LabelCorrecting,
        }
    }
}
