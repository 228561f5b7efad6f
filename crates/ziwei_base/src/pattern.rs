//! Star patterns (格局) recognized from major-star placement.
//!
//! Each pattern is pure data: a [`PatternRule`] naming its stars and the
//! sector relation they must satisfy, plus score and reading. A single
//! evaluator, [`PatternRule::holds`], interprets every rule.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::element::{Element, element_label};
use crate::star::Star;
use crate::star_placement::Placement;

/// Sector relation a pattern requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRule {
    /// Absolute difference of the two stars' sector indices equals `distance`.
    Pair { stars: [Star; 2], distance: u8 },
    /// Every star sits on a sector index divisible by 3.
    AllOnTriad { stars: [Star; 4] },
}

impl PatternRule {
    /// Whether `placement` satisfies the rule. Absent stars never match.
    pub fn holds(&self, placement: &Placement) -> bool {
        match self {
            Self::Pair { stars, distance } => {
                match (placement.get(stars[0]), placement.get(stars[1])) {
                    (Some(a), Some(b)) => a.index().abs_diff(b.index()) == *distance,
                    _ => false,
                }
            }
            Self::AllOnTriad { stars } => stars
                .iter()
                .all(|&s| placement.get(s).is_some_and(|sec| sec.index() % 3 == 0)),
        }
    }

    pub fn stars(&self) -> &[Star] {
        match self {
            Self::Pair { stars, .. } => &stars[..],
            Self::AllOnTriad { stars } => &stars[..],
        }
    }
}

/// The 19 recognized patterns, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StarPattern {
    ZiFuChaoYuan,
    JiYueTongLiang,
    TaiYangTaiYin,
    WuQuTianXiang,
    QiShaPoJun,
    ZiWeiTianJi,
    ZiWeiTaiYang,
    ZiWeiLianZhen,
    TianFuTaiYin,
    TianFuTanLang,
    TianFuJuMen,
    TianJiTaiYin,
    TianJiJuMen,
    TaiYangLianZhen,
    WuQuLianZhen,
    WuQuTanLang,
    TianXiangTanLang,
    TianLiangTanLang,
    QiShaLianZhen,
}

pub const ALL_PATTERNS: [StarPattern; 19] = [
    StarPattern::ZiFuChaoYuan,
    StarPattern::JiYueTongLiang,
    StarPattern::TaiYangTaiYin,
    StarPattern::WuQuTianXiang,
    StarPattern::QiShaPoJun,
    StarPattern::ZiWeiTianJi,
    StarPattern::ZiWeiTaiYang,
    StarPattern::ZiWeiLianZhen,
    StarPattern::TianFuTaiYin,
    StarPattern::TianFuTanLang,
    StarPattern::TianFuJuMen,
    StarPattern::TianJiTaiYin,
    StarPattern::TianJiJuMen,
    StarPattern::TaiYangLianZhen,
    StarPattern::WuQuLianZhen,
    StarPattern::WuQuTanLang,
    StarPattern::TianXiangTanLang,
    StarPattern::TianLiangTanLang,
    StarPattern::QiShaLianZhen,
];

const fn pair(a: Star, b: Star, distance: u8) -> PatternRule {
    PatternRule::Pair {
        stars: [a, b],
        distance,
    }
}

impl StarPattern {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiFuChaoYuan => "紫府朝垣",
            Self::JiYueTongLiang => "机月同梁",
            Self::TaiYangTaiYin => "太阳太阴",
            Self::WuQuTianXiang => "武曲天相",
            Self::QiShaPoJun => "七杀破军",
            Self::ZiWeiTianJi => "紫微天机",
            Self::ZiWeiTaiYang => "紫微太阳",
            Self::ZiWeiLianZhen => "紫微廉贞",
            Self::TianFuTaiYin => "天府太阴",
            Self::TianFuTanLang => "天府贪狼",
            Self::TianFuJuMen => "天府巨门",
            Self::TianJiTaiYin => "天机太阴",
            Self::TianJiJuMen => "天机巨门",
            Self::TaiYangLianZhen => "太阳廉贞",
            Self::WuQuLianZhen => "武曲廉贞",
            Self::WuQuTanLang => "武曲贪狼",
            Self::TianXiangTanLang => "天相贪狼",
            Self::TianLiangTanLang => "天梁贪狼",
            Self::QiShaLianZhen => "七杀廉贞",
        }
    }

    pub const fn rule(self) -> PatternRule {
        use Star::*;
        match self {
            Self::ZiFuChaoYuan => pair(ZiWei, TianFu, 6),
            Self::JiYueTongLiang => PatternRule::AllOnTriad {
                stars: [TianJi, TaiYin, TianTong, TianLiang],
            },
            Self::TaiYangTaiYin => pair(TaiYang, TaiYin, 6),
            Self::WuQuTianXiang => pair(WuQu, TianXiang, 3),
            Self::QiShaPoJun => pair(QiSha, PoJun, 3),
            Self::ZiWeiTianJi => pair(ZiWei, TianJi, 1),
            Self::ZiWeiTaiYang => pair(ZiWei, TaiYang, 2),
            Self::ZiWeiLianZhen => pair(ZiWei, LianZhen, 5),
            Self::TianFuTaiYin => pair(TianFu, TaiYin, 3),
            Self::TianFuTanLang => pair(TianFu, TanLang, 4),
            Self::TianFuJuMen => pair(TianFu, JuMen, 5),
            Self::TianJiTaiYin => pair(TianJi, TaiYin, 2),
            Self::TianJiJuMen => pair(TianJi, JuMen, 4),
            Self::TaiYangLianZhen => pair(TaiYang, LianZhen, 3),
            Self::WuQuLianZhen => pair(WuQu, LianZhen, 2),
            Self::WuQuTanLang => pair(WuQu, TanLang, 1),
            Self::TianXiangTanLang => pair(TianXiang, TanLang, 2),
            Self::TianLiangTanLang => pair(TianLiang, TanLang, 5),
            Self::QiShaLianZhen => pair(QiSha, LianZhen, 1),
        }
    }

    pub const fn elements(self) -> &'static [Element] {
        use Element::*;
        match self {
            Self::ZiFuChaoYuan => &[Earth],
            Self::JiYueTongLiang => &[Water, Wood],
            Self::TaiYangTaiYin => &[Fire, Water],
            Self::WuQuTianXiang => &[Metal, Water],
            Self::QiShaPoJun => &[Metal],
            Self::ZiWeiTianJi => &[Earth, Wood],
            Self::ZiWeiTaiYang => &[Earth, Fire],
            Self::ZiWeiLianZhen => &[Earth, Fire, Water],
            Self::TianFuTaiYin => &[Earth, Water],
            Self::TianFuTanLang => &[Earth, Wood, Water],
            Self::TianFuJuMen => &[Earth],
            Self::TianJiTaiYin => &[Wood, Water],
            Self::TianJiJuMen => &[Wood, Earth],
            Self::TaiYangLianZhen => &[Fire, Water],
            Self::WuQuLianZhen => &[Metal, Water, Fire],
            Self::WuQuTanLang => &[Metal, Wood, Water],
            Self::TianXiangTanLang => &[Water, Wood],
            Self::TianLiangTanLang => &[Earth, Water, Wood],
            Self::QiShaLianZhen => &[Metal, Fire],
        }
    }

    pub const fn score(self) -> f64 {
        match self {
            Self::ZiFuChaoYuan => 0.9,
            Self::JiYueTongLiang => 0.8,
            Self::TaiYangTaiYin => 0.7,
            Self::WuQuTianXiang => 0.75,
            Self::QiShaPoJun => 0.65,
            Self::ZiWeiTianJi | Self::ZiWeiTaiYang => 0.85,
            Self::ZiWeiLianZhen => 0.8,
            Self::TianFuTaiYin => 0.75,
            Self::TianFuTanLang => 0.7,
            Self::TianFuJuMen => 0.65,
            Self::TianJiTaiYin => 0.7,
            Self::TianJiJuMen => 0.6,
            Self::TaiYangLianZhen | Self::WuQuLianZhen => 0.7,
            Self::WuQuTanLang => 0.65,
            Self::TianXiangTanLang | Self::TianLiangTanLang => 0.6,
            Self::QiShaLianZhen => 0.55,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ZiFuChaoYuan => "紫府朝垣格，主富贵双全，一生顺遂",
            Self::JiYueTongLiang => "机月同梁格，主聪明巧智，适合文职或技术工作",
            Self::TaiYangTaiYin => "太阳太阴格，主阴阳调和，一生多贵人相助",
            Self::WuQuTianXiang => "武曲天相格，主刚毅果决，适合从事金融或管理工作",
            Self::QiShaPoJun => "七杀破军格，主人生多变，需经历磨练方能成功",
            Self::ZiWeiTianJi => "紫微天机格，主智慧过人，善于谋略规划",
            Self::ZiWeiTaiYang => "紫微太阳格，主贵气十足，适合从政或公众事业",
            Self::ZiWeiLianZhen => "紫微廉贞格，主才华横溢，但需注意人际关系",
            Self::TianFuTaiYin => "天府太阴格，主温和富态，擅长理财持家",
            Self::TianFuTanLang => "天府贪狼格，主多才多艺，交际能力强",
            Self::TianFuJuMen => "天府巨门格，主性格耿直，适合法律或研究工作",
            Self::TianJiTaiYin => "天机太阴格，主心思细腻，适合艺术或策划工作",
            Self::TianJiJuMen => "天机巨门格，主口才出众，适合销售或教育工作",
            Self::TaiYangLianZhen => "太阳廉贞格，主热情积极，但需注意情绪管理",
            Self::WuQuLianZhen => "武曲廉贞格，主坚毅果敢，适合军警或工程工作",
            Self::WuQuTanLang => "武曲贪狼格，主敢作敢为，适合创业或冒险事业",
            Self::TianXiangTanLang => "天相贪狼格，主八面玲珑，适合公关或外交工作",
            Self::TianLiangTanLang => "天梁贪狼格，主聪明伶俐，但需注意脚踏实地",
            Self::QiShaLianZhen => "七杀廉贞格，主性格刚烈，需注意克制冲动",
        }
    }
}

impl Display for StarPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized pattern with its tabled attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternMatch {
    pub pattern: StarPattern,
    pub name: &'static str,
    /// Element label, e.g. `"土火"`.
    pub element: String,
    pub score: f64,
    pub description: &'static str,
}

impl From<StarPattern> for PatternMatch {
    fn from(p: StarPattern) -> Self {
        Self {
            pattern: p,
            name: p.name(),
            element: element_label(p.elements()),
            score: p.score(),
            description: p.description(),
        }
    }
}

/// All patterns whose rule holds, in table order.
pub fn identify_patterns(placement: &Placement) -> Vec<PatternMatch> {
    ALL_PATTERNS
        .into_iter()
        .filter(|p| p.rule().holds(placement))
        .map(PatternMatch::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::Sector;
    use crate::star_placement::{Polarity, place_major_stars};

    fn placement(entries: &[(Star, i64)]) -> Placement {
        entries.iter().map(|&(s, i)| (s, Sector::wrap(i))).collect()
    }

    #[test]
    fn every_rule_uses_major_stars() {
        for p in ALL_PATTERNS {
            assert!(p.rule().stars().iter().all(|s| s.is_major()), "{p}");
        }
    }

    #[test]
    fn descriptions_start_with_name() {
        for p in ALL_PATTERNS {
            assert!(p.description().starts_with(p.name()), "{p}");
        }
    }

    #[test]
    fn empty_placement_matches_nothing() {
        assert!(identify_patterns(&Placement::default()).is_empty());
    }

    #[test]
    fn pair_uses_plain_difference() {
        let rule = StarPattern::ZiWeiTianJi.rule();
        assert!(rule.holds(&placement(&[(Star::ZiWei, 4), (Star::TianJi, 3)])));
        // ring-adjacent but index difference 11
        assert!(!rule.holds(&placement(&[(Star::ZiWei, 0), (Star::TianJi, 11)])));
    }

    #[test]
    fn triad_rule() {
        let rule = StarPattern::JiYueTongLiang.rule();
        let on = placement(&[
            (Star::TianJi, 0),
            (Star::TaiYin, 3),
            (Star::TianTong, 6),
            (Star::TianLiang, 9),
        ]);
        assert!(rule.holds(&on));
        let off = placement(&[
            (Star::TianJi, 0),
            (Star::TaiYin, 3),
            (Star::TianTong, 6),
            (Star::TianLiang, 10),
        ]);
        assert!(!rule.holds(&off));
    }

    #[test]
    fn missing_star_never_matches() {
        let p = placement(&[(Star::ZiWei, 0)]);
        assert!(!StarPattern::ZiFuChaoYuan.rule().holds(&p));
    }

    #[test]
    fn match_carries_table_values() {
        let p = placement(&[(Star::ZiWei, 0), (Star::TianFu, 6)]);
        let found = identify_patterns(&p);
        assert_eq!(found.len(), 1);
        let m = &found[0];
        assert_eq!(m.pattern, StarPattern::ZiFuChaoYuan);
        assert_eq!(m.element, "土");
        assert_eq!(m.score, 0.9);
        assert_eq!(m.description, "紫府朝垣格，主富贵双全，一生顺遂");
    }

    #[test]
    fn fixture_day15_bureau5() {
        let p = place_major_stars(15, 5, Polarity::YangMale).unwrap();
        let names: Vec<&str> = identify_patterns(&p).iter().map(|m| m.name).collect();
        assert_eq!(names, ["紫府朝垣", "紫微天机", "紫微太阳"]);
    }

    #[test]
    fn zi_fu_always_opposite() {
        // 紫微 and 天府 anchor on opposite sectors for every input
        for day in 1..=30 {
            for bureau in 2..=6 {
                for pol in [Polarity::YangMale, Polarity::YinMale] {
                    let p = place_major_stars(day, bureau, pol).unwrap();
                    let found = identify_patterns(&p);
                    assert_eq!(found[0].pattern, StarPattern::ZiFuChaoYuan);
                }
            }
        }
    }
}
