//! Fixed lookup tables turning scored tiers and elements into predictions and advice.
//!
//! Nothing here composes free text: every phrase is a static table entry chosen by
//! tier, element, grid or aspect, and the structured fields carry the rest.

use super::aspects::{AspectResult, LifeAspect};
use super::domain::{Element, FortuneTier, GridKind};
use super::grids::FiveGrids;
use super::numerology::{NumerologyCategory, NumerologyOracle};
use super::phases::AgePhase;
use super::FortuneError;
use serde::Serialize;

pub fn aspect_suggestions(aspect: LifeAspect, tier: FortuneTier) -> &'static [&'static str] {
    use FortuneTier::*;
    use LifeAspect::*;

    match (aspect, tier) {
        (Career, Great) => &["把握机遇，积极进取", "发挥领导才能，创造佳绩"],
        (Career, Good) => &["稳步发展，注重积累", "加强人际关系建设"],
        (Career, Neutral) => &["脚踏实地，持续努力", "提升专业技能"],
        (Career, Bad) => &["谨慎决策，避免冒险", "寻求贵人帮助"],
        (Career, Terrible) => &["保守经营，等待时机", "考虑转换发展方向"],
        (Wealth, Great) => &["合理投资，财富增值", "把握商机，扩大收入"],
        (Wealth, Good) => &["稳健理财，积少成多", "开源节流，增加储蓄"],
        (Wealth, Neutral) => &["谨慎投资，避免损失", "培养理财意识"],
        (Wealth, Bad) => &["控制支出，避免借贷", "寻找稳定收入来源"],
        (Wealth, Terrible) => &["严格预算，量入为出", "避免高风险投资"],
        (Relationships, Great) => &["珍惜缘分，用心经营", "主动表达，增进感情"],
        (Relationships, Good) => &["真诚待人，建立信任", "注重沟通，化解矛盾"],
        (Relationships, Neutral) => &["耐心等待，不急不躁", "提升自我，吸引良缘"],
        (Relationships, Bad) => &["反思自我，改善性格", "避免冲突，保持和谐"],
        (Relationships, Terrible) => &["专注自我提升", "暂时避免重大感情决定"],
        (Health, Great) => &["保持良好习惯", "适度运动，增强体质"],
        (Health, Good) => &["注意劳逸结合", "定期体检，预防疾病"],
        (Health, Neutral) => &["规律作息，均衡饮食", "适当锻炼，增强免疫"],
        (Health, Bad) => &["注意休息，避免过劳", "关注身体信号，及时就医"],
        (Health, Terrible) => &["重视健康，积极治疗", "调整生活方式"],
        (Education, Great) => &["把握学习机会", "发挥聪明才智，取得佳绩"],
        (Education, Good) => &["勤奋学习，稳步提升", "培养良好学习习惯"],
        (Education, Neutral) => &["坚持不懈，持续努力", "寻找适合的学习方法"],
        (Education, Bad) => &["加倍努力，弥补不足", "寻求老师和同学帮助"],
        (Education, Terrible) => &["调整学习策略", "考虑专业方向调整"],
        (Family, Great) => &["维护家庭和谐", "承担家庭责任"],
        (Family, Good) => &["关爱家人，增进亲情", "营造温馨家庭氛围"],
        (Family, Neutral) => &["多与家人沟通", "平衡工作与家庭"],
        (Family, Bad) => &["化解家庭矛盾", "增进相互理解"],
        (Family, Terrible) => &["反思家庭关系", "寻求专业帮助"],
    }
}

pub fn phase_traits(phase: AgePhase, tier: FortuneTier) -> &'static [&'static str] {
    use AgePhase::*;
    use FortuneTier::*;

    match (phase, tier) {
        (Childhood, Great) => &["聪明伶俐", "健康成长", "家庭和睦"],
        (Childhood, Good) => &["性格开朗", "学习能力强", "受人喜爱"],
        (Childhood, Neutral) => &["平稳成长", "需要引导", "基础一般"],
        (Childhood, Bad) => &["需要关注", "可能有挫折", "需要耐心培养"],
        (Childhood, Terrible) => &["需要特别关爱", "可能面临困难", "需要专业指导"],
        (Youth, Great) => &["学业有成", "才华出众", "前途光明"],
        (Youth, Good) => &["努力上进", "逐步成长", "机会较多"],
        (Youth, Neutral) => &["需要努力", "发展平稳", "机会一般"],
        (Youth, Bad) => &["面临挑战", "需要坚持", "可能有挫折"],
        (Youth, Terrible) => &["困难较多", "需要调整方向", "寻求帮助"],
        (Prime, Great) => &["事业有成", "家庭幸福", "社会地位高"],
        (Prime, Good) => &["稳步发展", "收获颇丰", "受人尊重"],
        (Prime, Neutral) => &["平稳发展", "需要努力", "机会适中"],
        (Prime, Bad) => &["压力较大", "需要调整", "可能有变动"],
        (Prime, Terrible) => &["面临困境", "需要重新规划", "寻求突破"],
        (Midlife, Great) => &["事业巅峰", "财富积累", "影响力大"],
        (Midlife, Good) => &["成就显著", "经验丰富", "地位稳固"],
        (Midlife, Neutral) => &["稳中求进", "经验积累", "影响适中"],
        (Midlife, Bad) => &["可能有危机", "需要谨慎", "调整策略"],
        (Midlife, Terrible) => &["面临重大挑战", "需要重新定位", "寻求转机"],
        (Elder, Great) => &["享受成果", "子孙满堂", "德高望重"],
        (Elder, Good) => &["生活安逸", "身体健康", "受人尊敬"],
        (Elder, Neutral) => &["平安度过", "生活平稳", "享受天伦"],
        (Elder, Bad) => &["可能有困扰", "需要关爱", "注意健康"],
        (Elder, Terrible) => &["需要照顾", "可能有疾病", "需要支持"],
    }
}

fn short_term_focus(person: FortuneTier, outer: FortuneTier) -> &'static str {
    match (person == FortuneTier::Great, outer == FortuneTier::Great) {
        (true, true) => "把握机遇，积极进取，人际关系和事业发展都很有利",
        (true, false) => "个人能力强，但需要注意人际关系的处理",
        (false, true) => "人际关系良好，可以借助外力发展",
        (false, false) => "需要稳步发展，避免急躁冒进",
    }
}

/// Months (1-12) in which `(person + month)` is divisible by three.
pub fn opportunity_months(person_value: u32) -> Vec<u8> {
    (1..=12u8)
        .filter(|month| (person_value + u32::from(*month)) % 3 == 0)
        .collect()
}

/// Life stage an important age falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Growth,
    Development,
    Maturity,
    Harvest,
}

impl LifeStage {
    pub const fn for_age(age: u32) -> Self {
        if age < 25 {
            Self::Growth
        } else if age < 40 {
            Self::Development
        } else if age < 60 {
            Self::Maturity
        } else {
            Self::Harvest
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Growth => "成长期",
            Self::Development => "发展期",
            Self::Maturity => "成熟期",
            Self::Harvest => "收获期",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Growth => "性格形成和基础建立的重要时期",
            Self::Development => "事业发展和人生定向的关键时期",
            Self::Maturity => "成就巩固和影响力扩大的重要时期",
            Self::Harvest => "享受成果和传承智慧的重要时期",
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            Self::Growth => "注重学习和品格培养",
            Self::Development => "把握机遇，积极进取",
            Self::Maturity => "稳固成就，承担责任",
            Self::Harvest => "享受生活，传承经验",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantPeriod {
    pub age: u32,
    pub stage: LifeStage,
    pub description: &'static str,
    pub advice: &'static str,
}

/// Ages keyed off the person and total grids, sorted ascending.
pub fn important_periods(grids: &FiveGrids) -> Vec<ImportantPeriod> {
    let person = grids.person.value;
    let total = grids.total.value;
    let mut ages = vec![
        person % 60 + 18,
        total % 60 + 25,
        (person + total) % 60 + 35,
    ];
    ages.sort_unstable();

    ages.into_iter()
        .filter(|age| (1..100).contains(age))
        .map(|age| {
            let stage = LifeStage::for_age(age);
            ImportantPeriod {
                age,
                stage,
                description: stage.description(),
                advice: stage.advice(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Caution {
    WeakGrid {
        grid: GridKind,
        value: u32,
        category: NumerologyCategory,
    },
    WeakAspect {
        aspect: LifeAspect,
    },
    Note {
        text: &'static str,
    },
}

fn weak_grids(
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
) -> Result<Vec<(GridKind, u32, NumerologyCategory)>, FortuneError> {
    let mut weak = Vec::new();
    for grid in grids.iter() {
        let entry = oracle.lookup(grid.value)?;
        if entry.tier.is_unfavorable() {
            weak.push((grid.kind, grid.value, entry.category));
        }
    }
    Ok(weak)
}

fn cautions(
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
    aspects: &[AspectResult],
) -> Result<Vec<Caution>, FortuneError> {
    let mut cautions: Vec<Caution> = weak_grids(grids, oracle)?
        .into_iter()
        .map(|(grid, value, category)| Caution::WeakGrid {
            grid,
            value,
            category,
        })
        .collect();
    cautions.extend(
        aspects
            .iter()
            .filter(|result| result.tier.is_unfavorable())
            .map(|result| Caution::WeakAspect {
                aspect: result.aspect,
            }),
    );

    if cautions.is_empty() {
        cautions.push(Caution::Note {
            text: "整体运势较好，保持积极心态即可",
        });
    } else {
        cautions.push(Caution::Note {
            text: "运势有起伏是正常现象，关键在于如何应对和改善",
        });
        cautions.push(Caution::Note {
            text: "建议结合个人实际情况，理性看待运势分析结果",
        });
    }
    Ok(cautions)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortTermOutlook {
    pub tier: FortuneTier,
    pub focus: &'static str,
    pub opportunity_months: Vec<u8>,
    /// Aspects rated good or better, worth pushing this year.
    pub develop: Vec<LifeAspect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumTermOutlook {
    pub tier: FortuneTier,
    /// Ages around which a turning point is expected.
    pub turning_points: Vec<u32>,
    pub improve: Vec<LifeAspect>,
    pub challenges: Vec<GridKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongTermOutlook {
    pub tier: FortuneTier,
    pub achievement_areas: Vec<LifeAspect>,
    pub life_lesson: &'static str,
    pub late_life: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Predictions {
    pub short_term: ShortTermOutlook,
    pub medium_term: MediumTermOutlook,
    pub long_term: LongTermOutlook,
    pub important_periods: Vec<ImportantPeriod>,
    pub cautions: Vec<Caution>,
}

fn aspects_where(
    aspects: &[AspectResult],
    keep: impl Fn(FortuneTier) -> bool,
) -> Vec<LifeAspect> {
    aspects
        .iter()
        .filter(|result| keep(result.tier))
        .map(|result| result.aspect)
        .collect()
}

pub fn predictions(
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
    aspects: &[AspectResult],
) -> Result<Predictions, FortuneError> {
    let person = oracle.lookup(grids.person.value)?;
    let outer = oracle.lookup(grids.outer.value)?;
    let total = oracle.lookup(grids.total.value)?;

    let life_lesson = if person.meaning.contains("刚强") {
        "学会柔和处事"
    } else {
        "学会坚持不懈"
    };

    Ok(Predictions {
        short_term: ShortTermOutlook {
            tier: person.tier,
            focus: short_term_focus(person.tier, outer.tier),
            opportunity_months: opportunity_months(grids.person.value),
            develop: aspects_where(aspects, FortuneTier::is_favorable),
        },
        medium_term: MediumTermOutlook {
            tier: total.tier,
            turning_points: vec![grids.person.value, grids.total.value],
            improve: aspects_where(aspects, FortuneTier::is_unfavorable),
            challenges: weak_grids(grids, oracle)?
                .into_iter()
                .map(|(grid, _, _)| grid)
                .collect(),
        },
        long_term: LongTermOutlook {
            tier: total.tier,
            achievement_areas: aspects_where(aspects, |tier| tier == FortuneTier::Great),
            life_lesson,
            late_life: total.meaning,
        },
        important_periods: important_periods(grids),
        cautions: cautions(grids, oracle, aspects)?,
    })
}

/// Colour, direction and season associated with the person grid's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyAdvice {
    pub element: Element,
    pub colors: &'static str,
    pub direction: &'static str,
    pub season: &'static str,
}

impl LuckyAdvice {
    pub const fn for_element(element: Element) -> Self {
        let (colors, direction, season) = match element {
            Element::Metal => ("白色、金色", "西方", "秋季"),
            Element::Wood => ("绿色", "东方", "春季"),
            Element::Water => ("黑色、蓝色", "北方", "冬季"),
            Element::Fire => ("红色", "南方", "夏季"),
            Element::Earth => ("黄色、棕色", "中央", "长夏"),
        };
        Self {
            element,
            colors,
            direction,
            season,
        }
    }
}

const IMPROVEMENT_METHODS: &[&str] = &[
    "保持积极心态，相信自己的能力",
    "多行善事，积累福德",
    "选择有利的颜色和方位",
    "佩戴适合的吉祥物品",
    "在有利的时间做重要决定",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanFocus {
    Strength,
    Improve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub aspect: LifeAspect,
    pub focus: PlanFocus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub overall: Option<&'static str>,
    pub improvement_methods: &'static [&'static str],
    /// Grids whose numerology is unfavorable.
    pub precautions: Vec<GridKind>,
    pub lucky: LuckyAdvice,
    pub life_planning: Vec<PlanItem>,
}

pub fn advice(
    grids: &FiveGrids,
    oracle: &NumerologyOracle,
    aspects: &[AspectResult],
) -> Result<Advice, FortuneError> {
    let person = oracle.lookup(grids.person.value)?;
    let overall = match person.tier {
        FortuneTier::Great => Some("姓名数理优良，应该充分发挥自身优势"),
        tier if tier.is_unfavorable() => Some("姓名数理有不足，建议通过后天努力改善"),
        _ => None,
    };

    let life_planning = aspects
        .iter()
        .filter_map(|result| {
            let focus = match result.tier {
                FortuneTier::Great => PlanFocus::Strength,
                tier if tier.is_unfavorable() => PlanFocus::Improve,
                _ => return None,
            };
            Some(PlanItem {
                aspect: result.aspect,
                focus,
            })
        })
        .collect();

    Ok(Advice {
        overall,
        improvement_methods: IMPROVEMENT_METHODS,
        precautions: weak_grids(grids, oracle)?
            .into_iter()
            .map(|(grid, _, _)| grid)
            .collect(),
        lucky: LuckyAdvice::for_element(grids.person.element),
        life_planning,
    })
}
