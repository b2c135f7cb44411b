use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the current session is in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Idle,
    ImageSelected,
    Analyzing,
    AnalysisReady,
    Error,
}

impl Stage {
    /// Whether the Analyze affordance should be enabled.
    pub fn can_analyze(self) -> bool {
        self == Stage::ImageSelected
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::ImageSelected => "image-selected",
            Stage::Analyzing => "analyzing",
            Stage::AnalysisReady => "analysis-ready",
            Stage::Error => "error",
        };
        f.write_str(name)
    }
}
