use serde::{Deserialize, Serialize};
use std::fmt;

/// The five cyclic elements (wuxing) attached to every grid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const fn ordered() -> [Self; 5] {
        [Self::Wood, Self::Fire, Self::Earth, Self::Metal, Self::Water]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fortune classification shared by numerology entries and every derived score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneTier {
    Great,
    Good,
    Neutral,
    Bad,
    Terrible,
}

impl FortuneTier {
    pub const fn base_score(self) -> u8 {
        match self {
            Self::Great => 90,
            Self::Good => 75,
            Self::Neutral => 60,
            Self::Bad => 40,
            Self::Terrible => 20,
        }
    }

    /// Re-classifies a combined score. Thresholds are inclusive lower bounds.
    pub const fn from_score(score: u8) -> Self {
        if score >= 85 {
            Self::Great
        } else if score >= 70 {
            Self::Good
        } else if score >= 50 {
            Self::Neutral
        } else if score >= 35 {
            Self::Bad
        } else {
            Self::Terrible
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Great => "大吉",
            Self::Good => "吉",
            Self::Neutral => "中",
            Self::Bad => "凶",
            Self::Terrible => "大凶",
        }
    }

    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::Great | Self::Good)
    }

    pub const fn is_unfavorable(self) -> bool {
        matches!(self, Self::Bad | Self::Terrible)
    }
}

/// Rounds a raw weighted score half away from zero and clamps it into `0..=100`.
pub fn round_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Names of the five grids derived from a name's stroke counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    Heaven,
    Person,
    Earth,
    Outer,
    Total,
}

impl GridKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Heaven,
            Self::Person,
            Self::Earth,
            Self::Outer,
            Self::Total,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Heaven => "天格",
            Self::Person => "人格",
            Self::Earth => "地格",
            Self::Outer => "外格",
            Self::Total => "总格",
        }
    }

    /// Life area the grid is traditionally read for.
    pub const fn influence(self) -> &'static str {
        match self {
            Self::Heaven => "祖先遗传，先天条件",
            Self::Person => "性格、才能、事业",
            Self::Earth => "青少年运势、基础运",
            Self::Outer => "社交能力、人际关系",
            Self::Total => "中晚年运势、总体运程",
        }
    }

    /// Weight of the grid inside the overall grid component; weights sum to 1.0.
    pub const fn overall_weight(self) -> f64 {
        match self {
            Self::Heaven => 0.10,
            Self::Person => 0.30,
            Self::Earth => 0.20,
            Self::Outer => 0.15,
            Self::Total => 0.25,
        }
    }
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single glyph of the analyzed name with its resolved stroke count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub glyph: char,
    pub strokes: u32,
    /// True when the stroke count came from the fallback instead of the table.
    pub estimated: bool,
}

/// Surname / given-name partition of a full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameStructure {
    pub full_name: String,
    pub surname: String,
    pub given_name: String,
    pub characters: Vec<char>,
}

impl NameStructure {
    pub fn surname_len(&self) -> usize {
        self.surname.chars().count()
    }

    pub fn given_name_len(&self) -> usize {
        self.given_name.chars().count()
    }

    pub fn is_compound_surname(&self) -> bool {
        self.surname_len() == 2
    }

    /// Layout such as `1+2` (surname length + given-name length).
    pub fn layout(&self) -> String {
        format!("{}+{}", self.surname_len(), self.given_name_len())
    }
}

/// Per-character stroke counts split along the name structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeCounts {
    pub surname: Vec<Character>,
    pub given_name: Vec<Character>,
    pub total: u32,
}

impl StrokeCounts {
    pub fn surname_strokes(&self) -> impl Iterator<Item = u32> + '_ {
        self.surname.iter().map(|character| character.strokes)
    }

    pub fn given_name_strokes(&self) -> impl Iterator<Item = u32> + '_ {
        self.given_name.iter().map(|character| character.strokes)
    }

    pub fn estimated(&self) -> impl Iterator<Item = &Character> {
        self.surname
            .iter()
            .chain(self.given_name.iter())
            .filter(|character| character.estimated)
    }
}

/// One of the five computed grids. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub kind: GridKind,
    pub value: u32,
    pub element: Element,
}

/// Non-fatal findings surfaced alongside a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    UnknownCharacter {
        character: char,
        #[serde(rename = "fallbackStrokes")]
        fallback_strokes: u32,
    },
}

impl AnalysisWarning {
    pub fn summary(&self) -> String {
        match self {
            AnalysisWarning::UnknownCharacter {
                character,
                fallback_strokes,
            } => format!(
                "stroke count for '{character}' not in table; using fallback {fallback_strokes}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds_are_inclusive() {
        assert_eq!(FortuneTier::from_score(100), FortuneTier::Great);
        assert_eq!(FortuneTier::from_score(85), FortuneTier::Great);
        assert_eq!(FortuneTier::from_score(84), FortuneTier::Good);
        assert_eq!(FortuneTier::from_score(70), FortuneTier::Good);
        assert_eq!(FortuneTier::from_score(69), FortuneTier::Neutral);
        assert_eq!(FortuneTier::from_score(50), FortuneTier::Neutral);
        assert_eq!(FortuneTier::from_score(49), FortuneTier::Bad);
        assert_eq!(FortuneTier::from_score(35), FortuneTier::Bad);
        assert_eq!(FortuneTier::from_score(34), FortuneTier::Terrible);
        assert_eq!(FortuneTier::from_score(0), FortuneTier::Terrible);
    }

    #[test]
    fn rounding_happens_before_classification() {
        assert_eq!(round_score(84.4), 84);
        assert_eq!(FortuneTier::from_score(round_score(84.4)), FortuneTier::Good);
        assert_eq!(round_score(84.5), 85);
    }

    #[test]
    fn round_score_clamps_out_of_range_input() {
        assert_eq!(round_score(-3.0), 0);
        assert_eq!(round_score(140.2), 100);
        assert_eq!(round_score(f64::NAN), 0);
    }

    #[test]
    fn base_scores_reclassify_to_their_own_tier() {
        for tier in [
            FortuneTier::Great,
            FortuneTier::Good,
            FortuneTier::Neutral,
            FortuneTier::Bad,
            FortuneTier::Terrible,
        ] {
            assert_eq!(FortuneTier::from_score(tier.base_score()), tier);
        }
    }

    #[test]
    fn grid_weights_sum_to_one() {
        let sum: f64 = GridKind::ordered()
            .iter()
            .map(|kind| kind.overall_weight())
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
