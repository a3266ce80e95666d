use bazi_rs::{
    ALL_PILLAR_POSITIONS, BaZiChart, BaziError, BirthTime, LuckPillarConfig, Reading, Sexagenary,
    annual_pillars, decode, parse_pillar, parse_sex, parse_stem, ten_god,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bazi", about = "Four Pillars (BaZi) chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars, void branches and Ten-Gods for a birth time
    Chart {
        /// Local birth time (YYYY-MM-DDThh[:mm])
        #[arg(long)]
        date: String,
    },
    /// Decade luck pillars
    Luck {
        /// Local birth time (YYYY-MM-DDThh[:mm])
        #[arg(long)]
        date: String,
        /// Sex of the subject: male or female
        #[arg(long)]
        sex: String,
        /// Number of decades
        #[arg(long, default_value = "10")]
        count: usize,
        /// Age at which the first decade begins
        #[arg(long, default_value = "3")]
        onset: i32,
    },
    /// Annual pillars for a range of years
    Annual {
        /// Local birth time (YYYY-MM-DDThh[:mm])
        #[arg(long)]
        date: String,
        /// First Gregorian year
        #[arg(long, allow_negative_numbers = true)]
        from: i32,
        /// Number of years
        #[arg(long, default_value = "10")]
        count: usize,
    },
    /// Ten-God of a stem seen from a day stem
    TenGod {
        /// Day stem (pinyin or Han)
        day: String,
        /// Other stem (pinyin or Han)
        other: String,
    },
    /// Decode a sexagenary index, or look up the index of a pillar
    Cycle {
        /// Integer index (any value, wraps mod 60) or pillar such as 庚辰 / Geng-Chen
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { date } => {
            let birth = parse_birth(&date);
            let chart = BaZiChart::from_birth(&birth);
            let gods = chart.stem_ten_gods();
            println!("Birth: {birth}");
            println!("{:<6} {:<6} {:<12} {:<16} Hidden", "Pillar", "", "Name", "Ten-God");
            for pos in ALL_PILLAR_POSITIONS {
                let p = chart.pillar(pos);
                let god = gods[pos.index() as usize];
                let hidden = chart
                    .hidden_ten_gods(pos)
                    .iter()
                    .map(|(s, g)| format!("{}:{}", s.han(), g.han()))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!(
                    "{:<6} {:<6} {:<12} {:<16} {}",
                    pos.name(),
                    p.han(),
                    p.name(),
                    format!("{} {}", god.han(), god.name()),
                    hidden
                );
            }
            let (v1, v2) = chart.void_branches();
            println!("Void: {}{} ({} {})", v1.han(), v2.han(), v1.name(), v2.name());
        }

        Commands::Luck {
            date,
            sex,
            count,
            onset,
        } => {
            let sex = require(parse_sex(&sex));
            let birth = parse_birth(&date);
            let config = LuckPillarConfig {
                onset_age: onset,
                count,
            };
            let reading = Reading::with_config(birth, sex, &config);
            let luck = reading.luck();
            println!(
                "Chart: {}  Sex: {}  Direction: {}",
                reading.chart(),
                sex.name(),
                luck.direction().name()
            );
            println!(
                "{:>3}  {:<6} {:>9}  {:>11}  {:<20} Branch",
                "#", "Pillar", "Ages", "Years", "Stem"
            );
            for p in luck {
                println!(
                    "{:>3}  {:<6} {:>4}-{:<4}  {:>5}-{:<5}  {:<20} {}",
                    p.order + 1,
                    p.pillar.han(),
                    p.start_age,
                    p.end_age,
                    p.start_year,
                    p.end_year,
                    p.stem_ten_god.name(),
                    p.branch_ten_god.name()
                );
            }
        }

        Commands::Annual { date, from, count } => {
            let birth = parse_birth(&date);
            let day_stem = BaZiChart::from_birth(&birth).day_stem();
            println!("Day master: {} ({})", day_stem.han(), day_stem.name());
            println!("{:>6}  {:<6} {:>4}  {:<20} Branch", "Year", "Pillar", "Age", "Stem");
            for a in annual_pillars(from, count, birth.date().year(), day_stem) {
                println!(
                    "{:>6}  {:<6} {:>4}  {:<20} {}",
                    a.year,
                    a.pillar.han(),
                    a.age,
                    a.stem_ten_god.name(),
                    a.branch_ten_god.name()
                );
            }
        }

        Commands::TenGod { day, other } => {
            let d = require(parse_stem(&day));
            let o = require(parse_stem(&other));
            let god = ten_god(d, o);
            println!("{} -> {}: {} ({})", d.han(), o.han(), god.name(), god.han());
        }

        Commands::Cycle { value } => match value.trim().parse::<i64>() {
            Ok(index) => {
                let p = decode(index);
                println!(
                    "{} -> {} ({})",
                    Sexagenary::new(index).index(),
                    p.han(),
                    p.name()
                );
            }
            Err(_) => {
                let p = require(parse_pillar(&value));
                let idx = require(p.sexagenary().map_err(BaziError::from));
                println!("{} ({}) -> {}", p.han(), p.name(), idx.index());
            }
        },
    }
}

fn parse_birth(text: &str) -> BirthTime {
    require(text.parse::<BirthTime>().map_err(BaziError::from))
}

fn require<T>(result: Result<T, BaziError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}
