//! Plain-text chart report.

use std::fmt::{self, Write};

use ziwei_base::{ALL_ELEMENTS, Placement};

use crate::chart_types::{BirthRecord, NatalChart};

const RULE_WIDTH: usize = 50;

/// Render the multi-section text report for a computed chart.
pub fn render_report(birth: &BirthRecord, chart: &NatalChart) -> String {
    let mut out = String::new();
    // fmt::Write for String never returns Err
    let _ = write_report(&mut out, birth, chart);
    out
}

/// Write the text report into any formatter sink, propagating its errors.
pub fn write_report<W: Write>(out: &mut W, birth: &BirthRecord, chart: &NatalChart) -> fmt::Result {
    writeln!(out, "紫微斗数命盘分析报告")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "出生时间: {}年{}月{}日 {} ({})",
        birth.year,
        birth.month,
        birth.day,
        birth.hour,
        birth.gender.name()
    )?;
    let lunar = &chart.lunar;
    writeln!(
        out,
        "农历: {}年{}{}月{}日 {}时",
        lunar.year,
        if lunar.is_leap_month { "闰" } else { "" },
        lunar.month,
        lunar.day,
        chart.hour_branch
    )?;
    writeln!(out, "年干支: {}", chart.pillars.year)?;
    writeln!(out, "月干支: {}", chart.pillars.month)?;
    writeln!(out, "日干支: {}", chart.pillars.day)?;
    writeln!(out, "时干支: {}", chart.pillars.hour)?;
    writeln!(out, "纳音: {}", chart.na_yin)?;
    writeln!(out, "五行局: {}", chart.bureau)?;
    writeln!(out, "阴阳: {}", chart.polarity)?;
    writeln!(out, "命宫: {}", chart.life_palace)?;
    writeln!(out, "身宫: {}", chart.body_palace)?;

    writeln!(out, "\n主星分布:")?;
    write_placement(out, &chart.major_stars)?;
    writeln!(out, "\n辅星分布:")?;
    write_placement(out, &chart.aux_stars)?;

    writeln!(out, "\n四化星:")?;
    for (kind, star) in chart.transforms.entries() {
        writeln!(out, "  {}: {}", kind.name(), star)?;
    }

    writeln!(out, "\n格局分析:")?;
    if chart.patterns.is_empty() {
        writeln!(out, "  无")?;
    }
    for m in &chart.patterns {
        writeln!(out, "  {} [{}] {:.2}: {}", m.name, m.element, m.score, m.description)?;
    }

    let balance = &chart.element_balance;
    writeln!(out, "\n五行平衡分析:")?;
    for e in ALL_ELEMENTS {
        writeln!(
            out,
            "  {}: {:.1} ({:.1}%)",
            e.name(),
            balance.counts.get(e),
            balance.ratios.get(e) * 100.0
        )?;
    }
    writeln!(out, "  最强五行: {}", balance.strongest.name())?;
    writeln!(out, "  最弱五行: {}", balance.weakest.name())?;
    writeln!(out, "  缺失五行: {}", balance.deficiency.label())?;
    Ok(())
}

fn write_placement<W: Write>(out: &mut W, placement: &Placement) -> fmt::Result {
    for (star, sector) in placement.iter() {
        writeln!(out, "  {}: {}宫 ({})", star, sector.index(), sector.palace())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::natal_chart_for_birth;
    use crate::chart_types::ChartConfig;
    use ziwei_base::{Gender, HourInput};

    /// Accepts `limit` bytes, then fails every write.
    struct ShortSink {
        buf: String,
        limit: usize,
    }

    impl Write for ShortSink {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.buf.len() + s.len() > self.limit {
                return Err(fmt::Error);
            }
            self.buf.push_str(s);
            Ok(())
        }
    }

    fn report_1990() -> String {
        let birth = BirthRecord::new(1990, 7, 7, HourInput::Clock(0), Gender::Male);
        let chart = natal_chart_for_birth(&birth, &ChartConfig::default()).unwrap();
        render_report(&birth, &chart)
    }

    #[test]
    fn header_lines() {
        let r = report_1990();
        assert!(r.starts_with("紫微斗数命盘分析报告\n"));
        assert!(r.contains("农历: 1990年闰5月15日 子时\n"));
        assert!(r.contains("年干支: 庚午\n"));
        assert!(r.contains("时干支: 癸子\n"));
        assert!(r.contains("五行局: 土五局\n"));
        assert!(r.contains("命宫: 迁移\n"));
        assert!(r.contains("身宫: 夫妻\n"));
    }

    #[test]
    fn star_sections() {
        let r = report_1990();
        assert!(r.contains("  紫微: 8宫 (事业)\n"));
        assert!(r.contains("  地劫: 3宫 (子女)\n"));
        assert!(r.contains("  年干禄: 太阳\n"));
        assert!(r.contains("  自化忌: 天同\n"));
    }

    #[test]
    fn pattern_and_balance_sections() {
        let r = report_1990();
        assert!(r.contains("  紫府朝垣 [土] 0.90: 紫府朝垣格，主富贵双全，一生顺遂\n"));
        assert!(r.contains("  水: 5.0 (35.7%)\n"));
        assert!(r.contains("  最强五行: 水\n"));
        assert!(r.contains("  缺失五行: 金、木、火\n"));
    }

    #[test]
    fn write_report_propagates_sink_error() {
        let birth = BirthRecord::new(1990, 7, 7, HourInput::Clock(0), Gender::Male);
        let chart = natal_chart_for_birth(&birth, &ChartConfig::default()).unwrap();
        let mut sink = ShortSink {
            buf: String::new(),
            limit: 64,
        };
        assert_eq!(write_report(&mut sink, &birth, &chart), Err(fmt::Error));
        assert!(sink.buf.starts_with("紫微斗数命盘分析报告\n"));
    }

    #[test]
    fn write_report_matches_render() {
        let birth = BirthRecord::new(1990, 7, 7, HourInput::Clock(0), Gender::Male);
        let chart = natal_chart_for_birth(&birth, &ChartConfig::default()).unwrap();
        let mut out = String::new();
        write_report(&mut out, &birth, &chart).unwrap();
        assert_eq!(out, render_report(&birth, &chart));
    }
}
