use super::domain::FortuneTier;
use super::FortuneError;
use serde::Serialize;

pub const NUMEROLOGY_SPAN: u32 = 81;

/// Traditional auspiciousness grade printed alongside each number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumerologyCategory {
    GreatAuspicious,
    Auspicious,
    HalfAuspicious,
    HalfInauspicious,
    Inauspicious,
    GreatInauspicious,
}

impl NumerologyCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::GreatAuspicious => "大吉",
            Self::Auspicious => "吉",
            Self::HalfAuspicious => "半吉",
            Self::HalfInauspicious => "半凶",
            Self::Inauspicious => "凶",
            Self::GreatInauspicious => "大凶",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyEntry {
    pub number: u32,
    pub tier: FortuneTier,
    pub category: NumerologyCategory,
    pub meaning: &'static str,
}

impl NumerologyEntry {
    pub const fn score(&self) -> u8 {
        self.tier.base_score()
    }
}

/// Read-only table of the 81 numerology entries.
#[derive(Debug, Clone)]
pub struct NumerologyOracle {
    entries: Vec<NumerologyEntry>,
}

impl NumerologyOracle {
    pub fn standard() -> Self {
        let entries = NUMEROLOGY_TABLE
            .iter()
            .zip(1..)
            .map(|(&(tier, category, meaning), number)| NumerologyEntry {
                number,
                tier,
                category,
                meaning,
            })
            .collect();
        Self { entries }
    }

    /// Brings any positive integer into `1..=81`; values already in range are kept.
    /// Zero has no table key.
    pub const fn reduce(n: u32) -> Option<u32> {
        match n.checked_sub(1) {
            Some(offset) => Some((offset % NUMEROLOGY_SPAN) + 1),
            None => None,
        }
    }

    pub fn lookup(&self, n: u32) -> Result<&NumerologyEntry, FortuneError> {
        let key = Self::reduce(n).ok_or(FortuneError::InvalidGridValue(n))?;
        self.entries
            .get((key - 1) as usize)
            .ok_or(FortuneError::InvalidGridValue(n))
    }

    pub fn entries(&self) -> &[NumerologyEntry] {
        &self.entries
    }
}

impl Default for NumerologyOracle {
    fn default() -> Self {
        Self::standard()
    }
}

const NUMEROLOGY_TABLE: [(FortuneTier, NumerologyCategory, &str); NUMEROLOGY_SPAN as usize] = [
    // 1-10
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "太极之数，万物开泰，生发无穷，利禄亨通",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::GreatInauspicious,
        "两仪之数，混沌未开，进退保守，志望难达",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "三才之数，天地人和，大事大业，繁荣昌隆",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::GreatInauspicious,
        "四象之数，待于生发，万事慎重，不具营谋",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "五行之数，五行俱权，循环相生，圆通畅达",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "六爻之数，发展变化，天赋美德，吉祥安泰",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::Auspicious,
        "七政之数，精悍严谨，天赋之力，吉星照耀",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "八卦之数，乾坎艮震，巽离坤兑，无穷无尽",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::GreatInauspicious,
        "大成之数，蕴涵凶险，或成或败，难以把握",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::GreatInauspicious,
        "终数之数，雪暗飘零，偶或有成，回顾茫然",
    ),
    // 11-20
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "旱苗逢雨，枯木逢春，稳健着实，必得人望",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "无理之数，发展薄弱，虽生不足，难酬志向",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "天才之数，多才多艺，忍柔当事，鸣奏大雅",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "破兆之数，家庭缘薄，孤独遭难，谋事不达",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "福寿之数，福寿圆满，富贵荣誉，涵养雅量",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "厚重之数，厚德载物，安富尊荣，财官双美",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::HalfAuspicious,
        "刚强之数，权威刚强，突破万难，如能容忍",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "铁镜重磨，权威显达，博得名利，且养柔德",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "多难之数，风云蔽日，辛苦重来，虽有智谋",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "屋下藏金，非业破运，灾难重重，进退维谷",
    ),
    // 21-30
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "明月中天，万物确立，官运亨通，大搏名利",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "秋草逢霜，怀才不遇，忧愁怨苦，事不如意",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "壮丽之数，旭日东升，壮丽壮观，权威旺盛",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "掘藏得金，家门余庆，金钱丰盈，白手成家",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::HalfAuspicious,
        "荣俊之数，资性英敏，才能奇特，克服傲慢",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "变怪之数，英雄豪杰，波澜重叠，而奏大功",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "增长之数，欲望无止，自我强烈，多受毁谤",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "阔水浮萍，遭难之数，豪杰气概，四海漂泊",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::HalfAuspicious,
        "智谋之数，财力归集，名闻海内，成就大业",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "非运之数，沉浮不定，凶吉难变，若明若暗",
    ),
    // 31-40
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "春日花开，智勇得志，博得名利，统领众人",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "宝马金鞍，侥幸多望，若得长上，其成功",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "旭日升天，鸾凤相会，名闻天下，隆昌至极",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::GreatInauspicious,
        "破家之数，见识短小，辛苦遭逢，灾祸至极",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::Auspicious,
        "高楼望月，温和平静，智达通畅，文昌技艺",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "波澜重叠，沉浮万状，侠肝义胆，舍己成仁",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "猛虎出林，权威显达，热诚忠信，宜着雅量",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "磨铁成针，意志薄弱，刻意经营，才识不凡",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::HalfAuspicious,
        "富贵之数，富贵荣华，财帛丰盈，暗藏险象",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "退安之数，谨慎保安，智谋胆略，知难而退",
    ),
    // 41-50
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "有德之数，纯阳独秀，德高望重，和顺畅达",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "寒蝉在柳，博识多能，精通世情，如能专心",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "散财破产，虽有智能，意志薄弱，诸事不如意",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::GreatInauspicious,
        "烦闷之数，破家亡身，暗藏惨淡，事不如意",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::Auspicious,
        "顺风之数，新生泰和，乘风扬帆，智谋经纬",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "浪里淘金，载宝沉舟，扬帆遇雨，始入困境",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "点石成金，花开之象，万事如意，祯祥吉庆",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::Auspicious,
        "古松立鹤，智谋兼备，德量荣达，威望成师",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "转变之数，吉临则吉，凶来则凶，转凶为吉",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "小舟入海，吉凶参半，须防倾覆，始保安然",
    ),
    // 51-60
    (
        FortuneTier::Good,
        NumerologyCategory::HalfAuspicious,
        "沉浮之数，盛衰交加，波澜重叠，始保安然",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::Auspicious,
        "达眼之数，先见之明，智谋超群，名利双收",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "曲卷之数，外祥内忧，外祸内安，先富后贫",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "石上栽花，难望成功，忧闷烦来，辛惨不绝",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "善恶之数，外美内苦，先吉后凶，先凶后吉",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "浪里行舟，历尽艰险，四周障碍，万事龃龌",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::HalfAuspicious,
        "日照春松，寒雪青松，夜莺吟春，必遭一过",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "晚行遇雨，半凶半吉，先吉后凶，先凶后吉",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "寒蝉悲风，时运不济，缺乏实行，不如更名",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "无谋之数，争名夺利，黑暗无光，切莫妄动",
    ),
    // 61-70
    (
        FortuneTier::Good,
        NumerologyCategory::Auspicious,
        "牡丹芙蓉，花开富贵，名利双收，定享天赋",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "衰败之数，内外不和，志望难达，凶祸频来",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "舟出平海，富贵繁荣，身心安泰，雨露惠泽",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "骨肉分离，孤独悲愁，难望成功，破败凶祸",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "巨流归海，天长地久，家运隆昌，五福临门",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "岩头步马，进退维谷，艰难不堪，凶祸交加",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "通达之数，天赋幸运，四通八达，家道繁昌",
    ),
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "顺风吹帆，智谋经纬，家道昌隆，富贵东来",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "非业之数，惨淡经营，不无功效，艰难困苦",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "残菊逢霜，寂寞无碍，惨淡忧愁，晚景凄凉",
    ),
    // 71-80
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "石上金花，内忧外患，贯彻始终，定可成功",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "劳苦之数，毫无实益，如无智谋，难望成功",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::HalfAuspicious,
        "志高力微，努力奋斗，忘己利他，志在四方",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "残菊经霜，秋叶寂寞，无能无智，辛苦繁多",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "退守之数，保守平安，智谋胆略，难望大成",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "离散破财，骨肉分离，内外不和，虽劳无功",
    ),
    (
        FortuneTier::Good,
        NumerologyCategory::HalfAuspicious,
        "家庭有悦，半吉半凶，能获援护，陷落不幸",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::HalfInauspicious,
        "晚苦之数，祸福参半，先苦后甘，先甘后苦",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "云头望月，身疲力尽，穷迫不伸，精神不定",
    ),
    (
        FortuneTier::Bad,
        NumerologyCategory::Inauspicious,
        "遁世之数，辛苦不绝，意志薄弱，缺乏勇气",
    ),
    // 81-81
    (
        FortuneTier::Great,
        NumerologyCategory::GreatAuspicious,
        "万物回春，还元复始，最吉之数，还本归元",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_number_once() {
        let oracle = NumerologyOracle::standard();
        assert_eq!(oracle.entries().len(), 81);
        for (index, entry) in oracle.entries().iter().enumerate() {
            assert_eq!(entry.number as usize, index + 1);
            assert!(!entry.meaning.is_empty());
        }
    }

    #[test]
    fn known_entries_match_traditional_readings() {
        let oracle = NumerologyOracle::standard();

        let one = oracle.lookup(1).expect("entry 1");
        assert_eq!(one.tier, FortuneTier::Great);
        assert_eq!(one.category, NumerologyCategory::GreatAuspicious);

        let twelve = oracle.lookup(12).expect("entry 12");
        assert_eq!(twelve.tier, FortuneTier::Bad);

        let seventeen = oracle.lookup(17).expect("entry 17");
        assert_eq!(seventeen.tier, FortuneTier::Good);
        assert_eq!(seventeen.category.label(), "半吉");

        let last = oracle.lookup(81).expect("entry 81");
        assert_eq!(last.tier, FortuneTier::Great);
        assert!(last.meaning.contains("还本归元"));
    }

    #[test]
    fn values_above_81_wrap_into_range() {
        let oracle = NumerologyOracle::standard();
        assert_eq!(NumerologyOracle::reduce(81), Some(81));
        assert_eq!(NumerologyOracle::reduce(82), Some(1));
        assert_eq!(NumerologyOracle::reduce(163), Some(1));
        assert_eq!(NumerologyOracle::reduce(u32::MAX), Some((u32::MAX - 1) % 81 + 1));
        assert_eq!(oracle.lookup(82).expect("wraps").number, 1);
        assert_eq!(oracle.lookup(100).expect("wraps").number, 19);
    }

    #[test]
    fn lookup_is_total_for_positive_integers() {
        let oracle = NumerologyOracle::standard();
        for n in 1..=2_000 {
            let entry = oracle.lookup(n).expect("positive input always resolves");
            assert!((1..=81).contains(&entry.number));
        }
        assert!(oracle.lookup(u32::MAX).is_ok());
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(NumerologyOracle::reduce(0), None);

        let oracle = NumerologyOracle::standard();
        match oracle.lookup(0) {
            Err(FortuneError::InvalidGridValue(0)) => {}
            other => panic!("expected invalid grid value, got {other:?}"),
        }
    }
}
