use super::aspects::{self, AspectResult, AspectSelection, LifeAspect};
use super::domain::{AnalysisWarning, Element, FortuneTier, GridKind, NameStructure, StrokeCounts};
use super::grids::{self, FiveGrids};
use super::guidance::{self, Advice, Predictions};
use super::numerology::{NumerologyCategory, NumerologyEntry};
use super::overall::{self, OverallScore};
use super::phases::{self, AgePhase, AgePhaseResult};
use super::strokes::StrokeTableError;
use super::structure;
use super::tables::FortuneTables;
use super::talents::ThreeTalentsAnalysis;
use super::FortuneError;
use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Requested analysis level, echoed back in the report. Every level produces the
/// full profile; predictions and advice are controlled by their request flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDepth {
    Basic,
    Detailed,
    #[default]
    Comprehensive,
}

impl AnalysisDepth {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Detailed => "detailed",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisDepth {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "detailed" => Ok(Self::Detailed),
            "comprehensive" => Ok(Self::Comprehensive),
            other => Err(format!(
                "unknown analysis type '{other}' (expected basic, detailed or comprehensive)"
            )),
        }
    }
}

fn default_true() -> bool {
    true
}

fn all_aspects() -> Vec<String> {
    AspectSelection::all().into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub full_name: String,
    #[serde(default)]
    pub analysis_type: AnalysisDepth,
    /// Aspect keys or Chinese labels; `all` selects every aspect.
    #[serde(default = "all_aspects")]
    pub include_aspects: Vec<String>,
    #[serde(default = "default_true")]
    pub include_predictions: bool,
    #[serde(default = "default_true")]
    pub include_advice: bool,
}

impl AnalysisRequest {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            analysis_type: AnalysisDepth::default(),
            include_aspects: all_aspects(),
            include_predictions: true,
            include_advice: true,
        }
    }

    pub fn with_depth(mut self, depth: AnalysisDepth) -> Self {
        self.analysis_type = depth;
        self
    }

    pub fn with_aspects(mut self, aspects: AspectSelection) -> Self {
        self.include_aspects = aspects.into();
        self
    }

    pub fn without_predictions(mut self) -> Self {
        self.include_predictions = false;
        self
    }

    pub fn without_advice(mut self) -> Self {
        self.include_advice = false;
        self
    }
}

/// Numerology reading of one grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridNumerology {
    pub grid: GridKind,
    pub label: &'static str,
    pub value: u32,
    pub element: Element,
    /// Table key after folding values above 81.
    pub number: u32,
    pub tier: FortuneTier,
    pub category: NumerologyCategory,
    pub meaning: &'static str,
    pub influence: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneReport {
    pub full_name: String,
    pub analysis_type: AnalysisDepth,
    pub name_structure: NameStructure,
    pub stroke_counts: StrokeCounts,
    pub five_grids: FiveGrids,
    pub numerology_analysis: Vec<GridNumerology>,
    pub three_talents_analysis: ThreeTalentsAnalysis,
    pub aspect_analysis: BTreeMap<LifeAspect, AspectResult>,
    pub age_analysis: BTreeMap<AgePhase, AgePhaseResult>,
    pub overall_score: OverallScore,
    pub warnings: Vec<AnalysisWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Predictions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<Advice>,
}

/// Stateless scorer over shared read-only tables. Cheap to clone, safe to share.
#[derive(Debug, Clone)]
pub struct FortuneEngine {
    tables: Arc<FortuneTables>,
}

impl FortuneEngine {
    pub fn new(tables: Arc<FortuneTables>) -> Self {
        Self { tables }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(FortuneTables::standard()))
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, StrokeTableError> {
        Ok(Self::new(Arc::new(FortuneTables::from_config(config)?)))
    }

    pub fn tables(&self) -> &FortuneTables {
        &self.tables
    }

    pub fn numerology(&self, number: u32) -> Result<&NumerologyEntry, FortuneError> {
        self.tables.oracle.lookup(number)
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Result<FortuneReport, FortuneError> {
        let full_name = structure::normalize_full_name(&request.full_name)?;
        let name_structure = structure::parse(&full_name)?;
        let selection = AspectSelection::parse(&request.include_aspects)?;
        debug!(
            name = %full_name,
            layout = %name_structure.layout(),
            depth = %request.analysis_type,
            "analyzing name"
        );

        let stroke_counts = self.tables.strokes.counts(&name_structure);
        let warnings: Vec<AnalysisWarning> = stroke_counts
            .estimated()
            .map(|character| AnalysisWarning::UnknownCharacter {
                character: character.glyph,
                fallback_strokes: character.strokes,
            })
            .collect();
        for warning in &warnings {
            warn!(name = %full_name, "{}", warning.summary());
        }

        let five_grids = grids::compute_grids(&name_structure, &stroke_counts);
        let numerology_analysis = self.grid_numerology(&five_grids)?;
        let three_talents_analysis = self.tables.talents.evaluate(&five_grids);

        let oracle = &self.tables.oracle;
        let aspect_results = aspects::score_aspects(&selection, &five_grids, oracle)?;
        let overall_score =
            overall::aggregate(&five_grids, oracle, &three_talents_analysis, &aspect_results)?;

        let age_analysis = phases::score_phases(&five_grids, oracle)?
            .into_iter()
            .map(|result| (result.phase, result))
            .collect();
        let predictions = if request.include_predictions {
            Some(guidance::predictions(&five_grids, oracle, &aspect_results)?)
        } else {
            None
        };
        let advice = if request.include_advice {
            Some(guidance::advice(&five_grids, oracle, &aspect_results)?)
        } else {
            None
        };

        debug!(
            name = %full_name,
            score = overall_score.score,
            tier = ?overall_score.tier,
            "analysis complete"
        );

        Ok(FortuneReport {
            full_name,
            analysis_type: request.analysis_type,
            name_structure,
            stroke_counts,
            five_grids,
            numerology_analysis,
            three_talents_analysis,
            aspect_analysis: aspect_results
                .into_iter()
                .map(|result| (result.aspect, result))
                .collect(),
            age_analysis,
            overall_score,
            warnings,
            predictions,
            advice,
        })
    }

    fn grid_numerology(&self, grids: &FiveGrids) -> Result<Vec<GridNumerology>, FortuneError> {
        grids
            .iter()
            .map(|grid| -> Result<GridNumerology, FortuneError> {
                let entry = self.tables.oracle.lookup(grid.value)?;
                Ok(GridNumerology {
                    grid: grid.kind,
                    label: grid.kind.label(),
                    value: grid.value,
                    element: grid.element,
                    number: entry.number,
                    tier: entry.tier,
                    category: entry.category,
                    meaning: entry.meaning,
                    influence: grid.kind.influence(),
                })
            })
            .collect()
    }
}

impl Default for FortuneEngine {
    fn default() -> Self {
        Self::standard()
    }
}
