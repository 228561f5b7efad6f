use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ziwei_base::{
    Gender, HourInput, Stem, ZiweiError, day_stem_branch, hour_stem_branch, locate_palaces,
    locate_palaces_for_solar, month_stem_branch, solar_to_lunar, year_pillar,
};
use ziwei_chart::{
    BirthRecord, CatalogItem, ChartConfig, FeeSchedule, RecommendationConfig, RecommendationList,
    natal_chart_for_birth, numerology_for_birth, recommend, render_report,
};
use ziwei_time::{SolarDate, TabularLunarCalendar};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart
    Chart {
        /// Gregorian birth date (YYYY-MM-DD)
        date: SolarDate,
        /// Clock hour 0-23 or branch name (子, Zi, ...)
        hour: HourInput,
        /// male / female (男 / 女)
        gender: Gender,
        /// Stem for self-transformations (defaults to the year stem)
        #[arg(long)]
        self_stem: Option<Stem>,
        /// Ratio below which an element is deficient
        #[arg(long, default_value = "0.15")]
        deficiency_threshold: f64,
    },
    /// Life number and digit patterns of a birth date
    Numerology {
        /// Gregorian birth date (YYYY-MM-DD)
        date: SolarDate,
    },
    /// Life and Body palaces from a lunar month and hour
    Palace {
        /// Lunar month 1-12
        month: u8,
        /// Clock hour 0-23 or branch name
        hour: HourInput,
    },
    /// Life and Body palaces from a Gregorian date and hour
    PalaceSolar {
        /// Gregorian date (YYYY-MM-DD)
        date: SolarDate,
        /// Clock hour 0-23 or branch name
        hour: HourInput,
    },
    /// Lunar date of a Gregorian date
    Lunar {
        /// Gregorian date (YYYY-MM-DD)
        date: SolarDate,
    },
    /// Year, month, day and hour stem-branch pairs
    Ganzhi {
        /// Gregorian date (YYYY-MM-DD)
        date: SolarDate,
        /// Clock hour 0-23 or branch name
        hour: HourInput,
    },
    /// Rank a JSON catalog against a birth chart
    Recommend {
        /// Gregorian birth date (YYYY-MM-DD)
        date: SolarDate,
        /// Clock hour 0-23 or branch name
        hour: HourInput,
        /// male / female (男 / 女)
        gender: Gender,
        /// Path to a JSON array of catalog items
        #[arg(long)]
        catalog: PathBuf,
        /// Feng-shui house tag (repeatable)
        #[arg(long = "house-tag")]
        house_tags: Vec<String>,
        /// Skip Na Yin element matching for the month/day list
        #[arg(long)]
        no_nayin: bool,
        /// Fee for the month/day list
        #[arg(long, default_value = "10.0")]
        month_day_fee: f64,
        /// Fee for the feng-shui list
        #[arg(long, default_value = "15.0")]
        fengshui_fee: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Chart {
            date,
            hour,
            gender,
            self_stem,
            deficiency_threshold,
        } => {
            let birth = birth_record(date, hour, gender);
            let config = ChartConfig {
                self_transform_stem: self_stem,
                deficiency_threshold,
            };
            let chart = or_exit(natal_chart_for_birth(&birth, &config));
            if json {
                print_json(&chart);
            } else {
                print!("{}", render_report(&birth, &chart));
            }
        }

        Commands::Numerology { date } => {
            let birth = birth_record(date, HourInput::Clock(0), Gender::Male);
            let report = or_exit(numerology_for_birth(&birth));
            if json {
                print_json(&report);
            } else {
                println!("生命数字: {}", report.life_number);
                if report.patterns.is_empty() {
                    println!("数字磁场: 无");
                }
                for m in &report.patterns {
                    println!(
                        "{} {} [{}] {}",
                        m.combo,
                        m.pattern,
                        m.element.name(),
                        m.description
                    );
                }
            }
        }

        Commands::Palace { month, hour } => {
            let branch = or_exit(hour.hour_branch());
            let pair = or_exit(locate_palaces(month, branch));
            if json {
                print_json(&pair);
            } else {
                println!("命宫: {} ({})", pair.life_palace(), pair.life);
                println!("身宫: {} ({})", pair.body_palace(), pair.body);
            }
        }

        Commands::PalaceSolar { date, hour } => {
            let pair = or_exit(locate_palaces_for_solar(&TabularLunarCalendar, date, hour));
            if json {
                print_json(&pair);
            } else {
                println!("命宫: {} ({})", pair.life_palace(), pair.life);
                println!("身宫: {} ({})", pair.body_palace(), pair.body);
            }
        }

        Commands::Lunar { date } => {
            let birth = or_exit(solar_to_lunar(&TabularLunarCalendar, date, HourInput::Clock(0)));
            let l = birth.lunar;
            if json {
                print_json(&l);
            } else {
                println!(
                    "{date} → 农历 {}年{}{}月{}日",
                    l.year,
                    if l.is_leap_month { "闰" } else { "" },
                    l.month,
                    l.day
                );
            }
        }

        Commands::Ganzhi { date, hour } => {
            let year = or_exit(year_pillar(date.year()));
            let month = or_exit(month_stem_branch(year.stem_branch, date.month()));
            let day = day_stem_branch(date);
            let hour = hour_stem_branch(day, or_exit(hour.hour_branch()));
            if json {
                print_json(&serde_json::json!({
                    "year": year.stem_branch,
                    "month": month,
                    "day": day,
                    "hour": hour,
                    "na_yin": year.na_yin,
                    "bureau": year.bureau,
                }));
            } else {
                println!("年: {} ({}, {})", year.stem_branch, year.na_yin, year.bureau);
                println!("月: {month}");
                println!("日: {day}");
                println!("时: {hour}");
            }
        }

        Commands::Recommend {
            date,
            hour,
            gender,
            catalog,
            house_tags,
            no_nayin,
            month_day_fee,
            fengshui_fee,
        } => {
            let items = load_catalog(&catalog);
            debug!(items = items.len(), path = %catalog.display(), "catalog loaded");
            let birth = birth_record(date, hour, gender);
            let chart = or_exit(natal_chart_for_birth(&birth, &ChartConfig::default()));
            let numerology = or_exit(numerology_for_birth(&birth));
            let config = RecommendationConfig {
                fees: FeeSchedule {
                    month_day: month_day_fee,
                    fengshui: fengshui_fee,
                    ..FeeSchedule::default()
                },
                match_nayin_elements: !no_nayin,
            };
            let rec = recommend(&items, &chart, &numerology, &house_tags, &config);
            if json {
                print_json(&rec);
            } else {
                print_list("年度推荐", &rec.year);
                print_list("月日推荐", &rec.month_day);
                print_list("风水推荐", &rec.fengshui);
            }
        }
    }
}

fn birth_record(date: SolarDate, hour: HourInput, gender: Gender) -> BirthRecord {
    BirthRecord::new(date.year(), date.month(), date.day(), hour, gender)
}

fn or_exit<T>(result: Result<T, ZiweiError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn load_catalog(path: &Path) -> Vec<CatalogItem> {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read catalog {}: {e}", path.display());
        std::process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Invalid catalog {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn print_list(title: &str, list: &RecommendationList) {
    println!("{title} (费用 {:.2}):", list.fee);
    if list.items.is_empty() {
        println!("  无");
    }
    for item in &list.items {
        println!(
            "  #{} {} [{} / {:?}]",
            item.id,
            item.name,
            item.element.name(),
            item.price_tier
        );
    }
}
