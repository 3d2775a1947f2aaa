use super::aspects::AspectResult;
use super::domain::{round_score, FortuneTier, GridKind};
use super::grids::FiveGrids;
use super::numerology::NumerologyOracle;
use super::talents::ThreeTalentsAnalysis;
use super::FortuneError;
use serde::Serialize;

const GRIDS_WEIGHT: f64 = 0.5;
const TALENTS_WEIGHT: f64 = 0.2;
const ASPECTS_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallBreakdown {
    pub grids: u8,
    pub three_talents: u8,
    /// Mean aspect score; absent when no aspect was selected.
    pub aspects: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub score: u8,
    pub tier: FortuneTier,
    pub label: &'static str,
    pub breakdown: OverallBreakdown,
}

/// Weighted grid numerology score (weights sum to 1.0).
pub fn grid_component(grids: &FiveGrids, oracle: &NumerologyOracle) -> Result<f64, FortuneError> {
    GridKind::ordered()
        .into_iter()
        .map(|kind| -> Result<f64, FortuneError> {
            let entry = oracle.lookup(grids.get(kind).value)?;
            Ok(kind.overall_weight() * f64::from(entry.score()))
        })
        .sum()
}

/// Combines grids (50%), three talents (20%) and the mean aspect score (30%).
///
/// With no aspects selected the remaining 70% is renormalized so the score
/// stays on the same 0-100 scale.
pub fn aggregate(
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
    talents: &ThreeTalentsAnalysis,
    aspects: &[AspectResult],
) -> Result<OverallScore, FortuneError> {
    let grids_score = grid_component(grids, oracle)?;
    let talents_score = f64::from(talents.score);
    let aspects_mean = if aspects.is_empty() {
        None
    } else {
        let sum: f64 = aspects.iter().map(|aspect| f64::from(aspect.score)).sum();
        Some(sum / aspects.len() as f64)
    };

    let raw = match aspects_mean {
        Some(mean) => {
            grids_score * GRIDS_WEIGHT + talents_score * TALENTS_WEIGHT + mean * ASPECTS_WEIGHT
        }
        None => {
            (grids_score * GRIDS_WEIGHT + talents_score * TALENTS_WEIGHT)
                / (GRIDS_WEIGHT + TALENTS_WEIGHT)
        }
    };
    let score = round_score(raw);
    let tier = FortuneTier::from_score(score);

    Ok(OverallScore {
        score,
        tier,
        label: tier.label(),
        breakdown: OverallBreakdown {
            grids: round_score(grids_score),
            three_talents: talents.score,
            aspects: aspects_mean.map(round_score),
        },
    })
}
