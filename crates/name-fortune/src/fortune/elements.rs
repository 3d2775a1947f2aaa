use super::domain::Element;
use serde::{Deserialize, Serialize};

impl Element {
    /// Maps any integer onto the element cycle by its last digit (0 counts as 10).
    pub fn of(n: i64) -> Self {
        let digit = match n.rem_euclid(10) {
            0 => 10,
            digit => digit,
        };

        match digit {
            1 | 2 => Self::Wood,
            3 | 4 => Self::Fire,
            5 | 6 => Self::Earth,
            7 | 8 => Self::Metal,
            _ => Self::Water,
        }
    }

    /// The element this one feeds in the generating cycle.
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one restrains in the overcoming cycle.
    pub const fn overcomes(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }
}

/// Relationship of one element towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    Generates,
    GeneratedBy,
    Overcomes,
    OvercomeBy,
    Same,
    Neutral,
}

impl ElementRelation {
    pub fn between(from: Element, to: Element) -> Self {
        if from == to {
            Self::Same
        } else if from.generates() == to {
            Self::Generates
        } else if to.generates() == from {
            Self::GeneratedBy
        } else if from.overcomes() == to {
            Self::Overcomes
        } else if to.overcomes() == from {
            Self::OvercomeBy
        } else {
            Self::Neutral
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Generates => "相生",
            Self::GeneratedBy => "受生",
            Self::Overcomes => "相克",
            Self::OvercomeBy => "受克",
            Self::Same => "同类",
            Self::Neutral => "无关",
        }
    }
}

/// Relation of an ordered element pair with its traditional reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInteraction {
    pub from: Element,
    pub to: Element,
    pub relation: ElementRelation,
    pub description: &'static str,
}

impl ElementInteraction {
    pub fn new(from: Element, to: Element) -> Self {
        let relation = ElementRelation::between(from, to);
        Self {
            from,
            to,
            relation,
            description: describe(from, relation),
        }
    }
}

fn describe(from: Element, relation: ElementRelation) -> &'static str {
    match (relation, from) {
        (ElementRelation::Generates, Element::Wood) => "木生火，相生关系，有助于发展",
        (ElementRelation::Generates, Element::Fire) => "火生土，相生关系，稳定发展",
        (ElementRelation::Generates, Element::Earth) => "土生金，相生关系，财运亨通",
        (ElementRelation::Generates, Element::Metal) => "金生水，相生关系，智慧增长",
        (ElementRelation::Generates, Element::Water) => "水生木，相生关系，生机勃勃",
        (ElementRelation::Overcomes, Element::Wood) => "木克土，相克关系，需要调和",
        (ElementRelation::Overcomes, Element::Earth) => "土克水，相克关系，阻碍发展",
        (ElementRelation::Overcomes, Element::Water) => "水克火，相克关系，冲突较多",
        (ElementRelation::Overcomes, Element::Fire) => "火克金，相克关系，压力较大",
        (ElementRelation::Overcomes, Element::Metal) => "金克木，相克关系，发展受限",
        (ElementRelation::GeneratedBy, _) => "受生关系，得到扶助",
        (ElementRelation::OvercomeBy, _) => "受克关系，易受压制",
        (ElementRelation::Same, _) | (ElementRelation::Neutral, _) => "关系平和",
    }
}
