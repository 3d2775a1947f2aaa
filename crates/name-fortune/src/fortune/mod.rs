//! Name fortune scoring: stroke counts, five grids, 81-number numerology, three talents,
//! life aspects, age phases and the weighted overall score.
//!
//! Every stage is a pure function over the immutable [`FortuneTables`]; the
//! [`FortuneEngine`] wires them together and is safe to share across threads.

pub mod aspects;
pub mod domain;
pub mod elements;
pub mod engine;
pub mod grids;
pub mod guidance;
pub mod numerology;
pub mod overall;
pub mod phases;
pub mod router;
pub mod strokes;
pub mod structure;
mod tables;
pub mod talents;

#[cfg(test)]
mod tests;

pub use aspects::{AspectResult, AspectSelection, GridInfluence, LifeAspect};
pub use domain::{
    AnalysisWarning, Character, Element, FortuneTier, Grid, GridKind, NameStructure, StrokeCounts,
};
pub use elements::{ElementInteraction, ElementRelation};
pub use engine::{AnalysisDepth, AnalysisRequest, FortuneEngine, FortuneReport};
pub use grids::FiveGrids;
pub use numerology::{NumerologyCategory, NumerologyEntry, NumerologyOracle};
pub use overall::{OverallBreakdown, OverallScore};
pub use phases::{AgePhase, AgePhaseResult};
pub use router::fortune_router;
pub use strokes::{StrokeTable, StrokeTableError};
pub use tables::FortuneTables;
pub use talents::{TalentsNarrative, ThreeTalentsAnalysis, ThreeTalentsEvaluator};

use thiserror::Error;

/// Failures that abort an analysis. No partial report is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FortuneError {
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    #[error("grid value {0} has no numerology entry")]
    InvalidGridValue(u32),
    #[error("unknown life aspect '{0}'")]
    UnknownAspect(String),
}

impl FortuneError {
    pub(crate) fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
