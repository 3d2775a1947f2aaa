use super::domain::{Element, FortuneTier};
use super::elements::{ElementInteraction, ElementRelation};
use super::grids::FiveGrids;
use serde::Serialize;
use std::collections::HashMap;

const DEFAULT_MEANING: &str = "三才配置一般，需要综合分析";

/// Overall reading of the heaven→person and person→earth relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentsNarrative {
    Harmonious,
    Mixed,
    NeedsReinforcement,
}

impl TalentsNarrative {
    pub fn from_relations(heaven_person: ElementRelation, person_earth: ElementRelation) -> Self {
        match (
            heaven_person == ElementRelation::Generates,
            person_earth == ElementRelation::Generates,
        ) {
            (true, true) => Self::Harmonious,
            (true, false) | (false, true) => Self::Mixed,
            (false, false) => Self::NeedsReinforcement,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Harmonious => "三才配置优良，各方面发展顺利",
            Self::Mixed => "三才配置尚可，部分方面发展较好",
            Self::NeedsReinforcement => "三才配置一般，需要后天努力调和",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeTalentsAnalysis {
    pub elements: [Element; 3],
    /// Display form such as `金-水-木`.
    pub configuration: String,
    pub tier: FortuneTier,
    pub meaning: &'static str,
    pub score: u8,
    pub heaven_person: ElementInteraction,
    pub person_earth: ElementInteraction,
    pub narrative: TalentsNarrative,
    pub narrative_description: &'static str,
}

/// Looks up heaven/person/earth element triplets in the curated combination table.
#[derive(Debug, Clone)]
pub struct ThreeTalentsEvaluator {
    combinations: HashMap<[Element; 3], (FortuneTier, &'static str)>,
}

impl ThreeTalentsEvaluator {
    pub fn standard() -> Self {
        let combinations = COMBINATIONS
            .iter()
            .map(|&(elements, tier, meaning)| (elements, (tier, meaning)))
            .collect();
        Self { combinations }
    }

    /// Total over all 125 triplets; uncurated ones read as neutral.
    pub fn evaluate(&self, grids: &FiveGrids) -> ThreeTalentsAnalysis {
        let elements = grids.talent_elements();
        let [heaven, person, earth] = elements;
        let (tier, meaning) = self
            .combinations
            .get(&elements)
            .copied()
            .unwrap_or((FortuneTier::Neutral, DEFAULT_MEANING));

        let heaven_person = ElementInteraction::new(heaven, person);
        let person_earth = ElementInteraction::new(person, earth);
        let narrative = TalentsNarrative::from_relations(heaven_person.relation, person_earth.relation);

        ThreeTalentsAnalysis {
            elements,
            configuration: format!("{heaven}-{person}-{earth}"),
            tier,
            meaning,
            score: tier.base_score(),
            heaven_person,
            person_earth,
            narrative,
            narrative_description: narrative.description(),
        }
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

impl Default for ThreeTalentsEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

const COMBINATIONS: &[([Element; 3], FortuneTier, &str)] = &[
    (
        [Element::Metal, Element::Metal, Element::Metal],
        FortuneTier::Good,
        "性格刚强，富有活动力，但容易急躁",
    ),
    (
        [Element::Metal, Element::Metal, Element::Wood],
        FortuneTier::Bad,
        "虽有成功运，但基础不稳，易生意外",
    ),
    (
        [Element::Metal, Element::Metal, Element::Water],
        FortuneTier::Great,
        "成功顺利，能达到目的，境遇安固",
    ),
    (
        [Element::Metal, Element::Metal, Element::Fire],
        FortuneTier::Bad,
        "虽可成功，但境遇不安，易生心肺疾病",
    ),
    (
        [Element::Metal, Element::Metal, Element::Earth],
        FortuneTier::Great,
        "可获得意外成功发展，名利双收",
    ),
    (
        [Element::Metal, Element::Wood, Element::Metal],
        FortuneTier::Bad,
        "成功运被压抑，不能有所伸张",
    ),
    (
        [Element::Metal, Element::Wood, Element::Wood],
        FortuneTier::Good,
        "有成功运，基础尚稳固，但易陷于孤独",
    ),
    (
        [Element::Metal, Element::Wood, Element::Water],
        FortuneTier::Great,
        "有成功运和发展运，一生平安",
    ),
    (
        [Element::Metal, Element::Wood, Element::Fire],
        FortuneTier::Bad,
        "虽有一时的成功，但境遇不安",
    ),
    (
        [Element::Metal, Element::Wood, Element::Earth],
        FortuneTier::Good,
        "可获得意外成功发展，但要注意基础",
    ),
    (
        [Element::Metal, Element::Water, Element::Metal],
        FortuneTier::Great,
        "成功运佳，可以达到希望的目的",
    ),
    (
        [Element::Metal, Element::Water, Element::Wood],
        FortuneTier::Great,
        "有成功运，基础安定，能获得幸福",
    ),
    (
        [Element::Metal, Element::Water, Element::Water],
        FortuneTier::Great,
        "成功运极佳，基础运也佳",
    ),
    (
        [Element::Metal, Element::Water, Element::Fire],
        FortuneTier::Good,
        "可以成功，但要防意外",
    ),
    (
        [Element::Metal, Element::Water, Element::Earth],
        FortuneTier::Great,
        "成功运佳，可以实现希望",
    ),
    (
        [Element::Metal, Element::Fire, Element::Metal],
        FortuneTier::Bad,
        "虽有成功运，但基础不稳",
    ),
    (
        [Element::Metal, Element::Fire, Element::Wood],
        FortuneTier::Bad,
        "成功运被压抑，易生不平不满",
    ),
    (
        [Element::Metal, Element::Fire, Element::Water],
        FortuneTier::Bad,
        "一时虽可成功，但境遇不安",
    ),
    (
        [Element::Metal, Element::Fire, Element::Fire],
        FortuneTier::Bad,
        "虽可成功于一时，但易生破乱",
    ),
    (
        [Element::Metal, Element::Fire, Element::Earth],
        FortuneTier::Good,
        "可获得意外成功发展",
    ),
    (
        [Element::Metal, Element::Earth, Element::Metal],
        FortuneTier::Great,
        "可获得意外成功发展，名利双收",
    ),
    (
        [Element::Metal, Element::Earth, Element::Wood],
        FortuneTier::Good,
        "虽可成功，但基础不太安定",
    ),
    (
        [Element::Metal, Element::Earth, Element::Water],
        FortuneTier::Great,
        "可获得意外成功发展",
    ),
    (
        [Element::Metal, Element::Earth, Element::Fire],
        FortuneTier::Good,
        "可获得意外成功发展",
    ),
    (
        [Element::Metal, Element::Earth, Element::Earth],
        FortuneTier::Great,
        "可获得意外成功发展，名利双收",
    ),
];
