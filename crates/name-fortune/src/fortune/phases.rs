use super::domain::{FortuneTier, GridKind};
use super::grids::FiveGrids;
use super::guidance;
use super::numerology::NumerologyOracle;
use super::FortuneError;
use serde::{Deserialize, Serialize};

/// Five age bands. Youth, prime and midlife all read the person grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgePhase {
    Childhood,
    Youth,
    Prime,
    Midlife,
    Elder,
}

impl AgePhase {
    pub const fn all() -> [Self; 5] {
        [
            Self::Childhood,
            Self::Youth,
            Self::Prime,
            Self::Midlife,
            Self::Elder,
        ]
    }

    pub const fn grid(self) -> GridKind {
        match self {
            Self::Childhood => GridKind::Earth,
            Self::Youth | Self::Prime | Self::Midlife => GridKind::Person,
            Self::Elder => GridKind::Total,
        }
    }

    /// Inclusive age bounds; the elder band is open-ended.
    pub const fn bounds(self) -> (u32, Option<u32>) {
        match self {
            Self::Childhood => (0, Some(12)),
            Self::Youth => (13, Some(25)),
            Self::Prime => (26, Some(40)),
            Self::Midlife => (41, Some(55)),
            Self::Elder => (56, None),
        }
    }

    pub fn for_age(age: u32) -> Self {
        Self::all()
            .into_iter()
            .find(|phase| match phase.bounds() {
                (low, Some(high)) => (low..=high).contains(&age),
                (low, None) => age >= low,
            })
            .unwrap_or(Self::Elder)
    }

    pub fn age_range(self) -> String {
        match self.bounds() {
            (low, Some(high)) => format!("{low}-{high}"),
            (low, None) => format!("{low}+"),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Childhood => "幼年期",
            Self::Youth => "青年期",
            Self::Prime => "壮年期",
            Self::Midlife => "中年期",
            Self::Elder => "晚年期",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Childhood => "基础运势，性格形成期",
            Self::Youth => "学业发展，初入社会",
            Self::Prime => "事业发展，成家立业",
            Self::Midlife => "事业巅峰，承上启下",
            Self::Elder => "享受成果，颐养天年",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgePhaseResult {
    pub phase: AgePhase,
    pub label: &'static str,
    pub age_range: String,
    pub description: &'static str,
    pub score: u8,
    pub tier: FortuneTier,
    pub influencing_grid: GridKind,
    pub grid_value: u32,
    pub number_meaning: &'static str,
    pub traits: &'static [&'static str],
}

/// Scores a phase from its single governing grid, without blending.
pub fn score_phase(
    phase: AgePhase,
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
) -> Result<AgePhaseResult, FortuneError> {
    let grid = grids.get(phase.grid());
    let entry = oracle.lookup(grid.value)?;
    let score = entry.score();
    let tier = FortuneTier::from_score(score);

    Ok(AgePhaseResult {
        phase,
        label: phase.label(),
        age_range: phase.age_range(),
        description: phase.description(),
        score,
        tier,
        influencing_grid: grid.kind,
        grid_value: grid.value,
        number_meaning: entry.meaning,
        traits: guidance::phase_traits(phase, tier),
    })
}

pub fn score_phases(
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
) -> Result<Vec<AgePhaseResult>, FortuneError> {
    AgePhase::all()
        .into_iter()
        .map(|phase| score_phase(phase, grids, oracle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_every_age_once() {
        assert_eq!(AgePhase::for_age(0), AgePhase::Childhood);
        assert_eq!(AgePhase::for_age(12), AgePhase::Childhood);
        assert_eq!(AgePhase::for_age(13), AgePhase::Youth);
        assert_eq!(AgePhase::for_age(25), AgePhase::Youth);
        assert_eq!(AgePhase::for_age(26), AgePhase::Prime);
        assert_eq!(AgePhase::for_age(41), AgePhase::Midlife);
        assert_eq!(AgePhase::for_age(56), AgePhase::Elder);
        assert_eq!(AgePhase::for_age(120), AgePhase::Elder);
        assert_eq!(AgePhase::Elder.age_range(), "56+");
        assert_eq!(AgePhase::Youth.age_range(), "13-25");
    }

    #[test]
    fn phases_read_their_governing_grid() {
        let oracle = NumerologyOracle::standard();
        // earth 1 (great), person 2 (bad), total 7 (good)
        let grids = FiveGrids::from_values([5, 2, 1, 6, 7]);
        let results = score_phases(&grids, &oracle).expect("scores");

        let scores: Vec<(AgePhase, u8, u32)> = results
            .iter()
            .map(|result| (result.phase, result.score, result.grid_value))
            .collect();
        assert_eq!(
            scores,
            vec![
                (AgePhase::Childhood, 90, 1),
                (AgePhase::Youth, 40, 2),
                (AgePhase::Prime, 40, 2),
                (AgePhase::Midlife, 40, 2),
                (AgePhase::Elder, 75, 7),
            ]
        );
        assert_eq!(results[0].tier, FortuneTier::Great);
        assert_eq!(results[4].influencing_grid, GridKind::Total);
    }

    #[test]
    fn phase_tier_is_rederived_from_base_score() {
        let oracle = NumerologyOracle::standard();
        let grids = FiveGrids::from_values([5, 17, 1, 6, 7]);
        let prime = score_phase(AgePhase::Prime, &grids, &oracle).expect("scores");
        assert_eq!(prime.score, 75);
        assert_eq!(prime.tier, FortuneTier::Good);
        assert!(!prime.traits.is_empty());
    }
}
