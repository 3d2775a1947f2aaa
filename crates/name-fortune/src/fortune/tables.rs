use super::numerology::NumerologyOracle;
use super::strokes::{StrokeTable, StrokeTableError};
use super::talents::ThreeTalentsEvaluator;
use crate::config::EngineConfig;
use tracing::info;

/// Read-only lookup tables, built once at startup and shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct FortuneTables {
    pub strokes: StrokeTable,
    pub oracle: NumerologyOracle,
    pub talents: ThreeTalentsEvaluator,
}

impl FortuneTables {
    pub fn standard() -> Self {
        Self::with_strokes(StrokeTable::default())
    }

    pub fn with_strokes(strokes: StrokeTable) -> Self {
        Self {
            strokes,
            oracle: NumerologyOracle::standard(),
            talents: ThreeTalentsEvaluator::standard(),
        }
    }

    /// Applies the configured fallback and merges the optional CSV stroke table.
    pub fn from_config(config: &EngineConfig) -> Result<Self, StrokeTableError> {
        let mut strokes = StrokeTable::standard(config.fallback_strokes);
        if let Some(path) = &config.stroke_table {
            let loaded = strokes.extend_from_path(path)?;
            info!(path = %path.display(), loaded, "merged stroke table overrides");
        }
        Ok(Self::with_strokes(strokes))
    }
}

impl Default for FortuneTables {
    fn default() -> Self {
        Self::standard()
    }
}
