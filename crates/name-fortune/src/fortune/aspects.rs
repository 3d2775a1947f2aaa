use super::domain::{FortuneTier, GridKind};
use super::grids::FiveGrids;
use super::guidance;
use super::numerology::NumerologyOracle;
use super::FortuneError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The six life aspects, each read from a fixed primary/secondary grid pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeAspect {
    Career,
    Wealth,
    Relationships,
    Health,
    Education,
    Family,
}

impl LifeAspect {
    pub const fn all() -> [Self; 6] {
        [
            Self::Career,
            Self::Wealth,
            Self::Relationships,
            Self::Health,
            Self::Education,
            Self::Family,
        ]
    }

    pub const fn primary(self) -> GridKind {
        match self {
            Self::Career => GridKind::Person,
            Self::Wealth => GridKind::Total,
            Self::Relationships => GridKind::Outer,
            Self::Health => GridKind::Earth,
            Self::Education => GridKind::Earth,
            Self::Family => GridKind::Heaven,
        }
    }

    pub const fn secondary(self) -> GridKind {
        match self {
            Self::Career => GridKind::Outer,
            Self::Wealth => GridKind::Person,
            Self::Relationships => GridKind::Earth,
            Self::Health => GridKind::Heaven,
            Self::Education => GridKind::Person,
            Self::Family => GridKind::Earth,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Relationships => "relationships",
            Self::Health => "health",
            Self::Education => "education",
            Self::Family => "family",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Career => "事业运",
            Self::Wealth => "财运",
            Self::Relationships => "感情运",
            Self::Health => "健康运",
            Self::Education => "学业运",
            Self::Family => "家庭运",
        }
    }

    /// What the secondary grid contributes to this aspect.
    pub const fn secondary_role(self) -> &'static str {
        match self {
            Self::Career => "影响人际关系和外在机遇",
            Self::Wealth => "影响理财能力和财富观念",
            Self::Relationships => "影响感情基础和婚姻运势",
            Self::Health => "影响先天体质和健康基础",
            Self::Education => "影响学习能力和智慧发展",
            Self::Family => "影响家庭和睦和亲情关系",
        }
    }
}

impl FromStr for LifeAspect {
    type Err = FortuneError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let candidate = raw.trim();
        Self::all()
            .into_iter()
            .find(|aspect| {
                aspect.key().eq_ignore_ascii_case(candidate) || aspect.label() == candidate
            })
            .ok_or_else(|| FortuneError::UnknownAspect(candidate.to_string()))
    }
}

/// Which aspects an analysis scores. Kept in canonical order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AspectSelection {
    aspects: Vec<LifeAspect>,
}

impl AspectSelection {
    pub fn all() -> Self {
        Self {
            aspects: LifeAspect::all().to_vec(),
        }
    }

    pub fn none() -> Self {
        Self {
            aspects: Vec::new(),
        }
    }

    /// Parses aspect names; `all` anywhere in the list selects every aspect.
    pub fn parse<I, S>(names: I) -> Result<Self, FortuneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chosen = Vec::new();
        for name in names {
            let name = name.as_ref();
            if name.trim().eq_ignore_ascii_case("all") {
                return Ok(Self::all());
            }
            chosen.push(name.parse::<LifeAspect>()?);
        }

        let aspects = LifeAspect::all()
            .into_iter()
            .filter(|aspect| chosen.contains(aspect))
            .collect();
        Ok(Self { aspects })
    }

    pub fn aspects(&self) -> &[LifeAspect] {
        &self.aspects
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }
}

impl Default for AspectSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl TryFrom<Vec<String>> for AspectSelection {
    type Error = FortuneError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(names)
    }
}

impl From<AspectSelection> for Vec<String> {
    fn from(selection: AspectSelection) -> Self {
        if selection.aspects.len() == LifeAspect::all().len() {
            return vec!["all".to_string()];
        }
        selection
            .aspects
            .iter()
            .map(|aspect| aspect.key().to_string())
            .collect()
    }
}

/// A grid feeding an aspect score, with the numerology tier read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridInfluence {
    pub grid: GridKind,
    pub value: u32,
    pub tier: FortuneTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectResult {
    pub aspect: LifeAspect,
    pub label: &'static str,
    pub score: u8,
    pub tier: FortuneTier,
    pub primary: GridInfluence,
    pub secondary: GridInfluence,
    pub secondary_role: &'static str,
    pub suggestions: &'static [&'static str],
}

fn influence(
    kind: GridKind,
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
) -> Result<GridInfluence, FortuneError> {
    let grid = grids.get(kind);
    let entry = oracle.lookup(grid.value)?;
    Ok(GridInfluence {
        grid: kind,
        value: grid.value,
        tier: entry.tier,
    })
}

/// Blends the primary (0.7) and secondary (0.3) base scores, then re-derives the tier.
pub fn score_aspect(
    aspect: LifeAspect,
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
) -> Result<AspectResult, FortuneError> {
    let primary = influence(aspect.primary(), grids, oracle)?;
    let secondary = influence(aspect.secondary(), grids, oracle)?;

    // weights in tenths keep the half-way case exact
    let weighted = u32::from(primary.tier.base_score()) * 7
        + u32::from(secondary.tier.base_score()) * 3;
    let score = ((weighted + 5) / 10).min(100) as u8;
    let tier = FortuneTier::from_score(score);

    Ok(AspectResult {
        aspect,
        label: aspect.label(),
        score,
        tier,
        primary,
        secondary,
        secondary_role: aspect.secondary_role(),
        suggestions: guidance::aspect_suggestions(aspect, tier),
    })
}

pub fn score_aspects(
    selection: &AspectSelection,
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
) -> Result<Vec<AspectResult>, FortuneError> {
    selection
        .aspects()
        .iter()
        .map(|&aspect| score_aspect(aspect, grids, oracle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_grid_table_matches_traditional_pairs() {
        let expected = [
            (LifeAspect::Career, GridKind::Person, GridKind::Outer),
            (LifeAspect::Wealth, GridKind::Total, GridKind::Person),
            (LifeAspect::Relationships, GridKind::Outer, GridKind::Earth),
            (LifeAspect::Health, GridKind::Earth, GridKind::Heaven),
            (LifeAspect::Education, GridKind::Earth, GridKind::Person),
            (LifeAspect::Family, GridKind::Heaven, GridKind::Earth),
        ];
        for (aspect, primary, secondary) in expected {
            assert_eq!(aspect.primary(), primary, "{aspect:?}");
            assert_eq!(aspect.secondary(), secondary, "{aspect:?}");
        }
    }

    #[test]
    fn score_blends_and_reclassifies() {
        let oracle = NumerologyOracle::standard();
        // person 1 (great), outer 2 (bad): 90 * 0.7 + 40 * 0.3 = 75
        let grids = FiveGrids::from_values([3, 1, 5, 2, 11]);
        let career = score_aspect(LifeAspect::Career, &grids, &oracle).expect("scores");
        assert_eq!(career.primary.tier, FortuneTier::Great);
        assert_eq!(career.secondary.tier, FortuneTier::Bad);
        assert_eq!(career.score, 75);
        assert_eq!(career.tier, FortuneTier::Good);
    }

    #[test]
    fn half_way_scores_round_up() {
        let oracle = NumerologyOracle::standard();
        // person 7 (good), outer 2 (bad): 52.5 + 12 = 64.5
        let grids = FiveGrids::from_values([3, 7, 5, 2, 11]);
        let career = score_aspect(LifeAspect::Career, &grids, &oracle).expect("scores");
        assert_eq!(career.score, 65);
        assert_eq!(career.tier, FortuneTier::Neutral);
    }

    #[test]
    fn suggestions_follow_the_derived_tier() {
        let oracle = NumerologyOracle::standard();
        let grids = FiveGrids::from_values([2, 2, 2, 2, 2]);
        let wealth = score_aspect(LifeAspect::Wealth, &grids, &oracle).expect("scores");
        assert_eq!(wealth.tier, FortuneTier::Bad);
        assert_eq!(
            wealth.suggestions,
            guidance::aspect_suggestions(LifeAspect::Wealth, FortuneTier::Bad)
        );
    }

    #[test]
    fn selection_parses_names_and_labels() {
        let selection = AspectSelection::parse(["health", "事业运", "Health"]).expect("parses");
        assert_eq!(
            selection.aspects(),
            &[LifeAspect::Career, LifeAspect::Health]
        );

        let everything = AspectSelection::parse(["career", "all"]).expect("parses");
        assert_eq!(everything, AspectSelection::all());

        let error = AspectSelection::parse(["luck"]).expect_err("unknown aspect");
        assert_eq!(error, FortuneError::UnknownAspect("luck".to_string()));
    }

    #[test]
    fn selection_deserializes_from_name_lists() {
        let selection: AspectSelection =
            serde_json::from_str(r#"["wealth","family"]"#).expect("valid list");
        assert_eq!(
            selection.aspects(),
            &[LifeAspect::Wealth, LifeAspect::Family]
        );

        let all: AspectSelection = serde_json::from_str(r#"["all"]"#).expect("valid list");
        assert_eq!(serde_json::to_string(&all).expect("serializes"), r#"["all"]"#);

        assert!(serde_json::from_str::<AspectSelection>(r#"["fame"]"#).is_err());
    }
}
