use std::path::PathBuf;

use clap::Parser;
use starjudge::{Grade, Session, StarConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starjudge", about = "Judge hand-drawn paths: is it a star, and how perfect?")]
struct Cli {
    /// JSON file with one path or an array of paths
    #[arg(short, long)]
    input: PathBuf,

    /// JSON preset for the analysis parameters (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep every Nth raw point before analysis
    #[arg(long)]
    sample_rate: Option<usize>,

    /// Minimum raw points for a path to be considered
    #[arg(long)]
    min_points: Option<usize>,

    /// Fewest star tips accepted
    #[arg(long)]
    star_points_min: Option<usize>,

    /// Most star tips accepted
    #[arg(long)]
    star_points_max: Option<usize>,

    /// Perfection at or above this is a perfect star
    #[arg(long)]
    perfect_threshold: Option<f64>,

    /// Perfection at or above this is a good star
    #[arg(long)]
    good_threshold: Option<f64>,

    /// Print the sub-score breakdown for every star
    #[arg(short, long)]
    breakdown: bool,

    /// Log analysis details (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "starjudge=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => StarConfig::default(),
    };
    if let Some(v) = cli.sample_rate {
        config.sample_rate = v;
    }
    if let Some(v) = cli.min_points {
        config.min_points = v;
    }
    if let Some(v) = cli.star_points_min {
        config.star_points_min = v;
    }
    if let Some(v) = cli.star_points_max {
        config.star_points_max = v;
    }
    if let Some(v) = cli.perfect_threshold {
        config.perfect_threshold = v;
    }
    if let Some(v) = cli.good_threshold {
        config.good_threshold = v;
    }
    config.validate()?;

    let paths = starjudge::input::load_paths(&cli.input)?;
    let total_points: usize = paths.iter().map(Vec::len).sum();
    eprintln!();
    eprintln!("  Load        {} paths \u{00b7} {} points  ({})", paths.len(), total_points, cli.input.display());

    let verdicts = starjudge::judge_all(&paths, &config);

    let mut session = Session::new();
    for (i, (path, verdict)) in paths.iter().zip(&verdicts).enumerate() {
        let grade = Grade::of(verdict, &config);
        session.record(grade);
        match verdict.perfection() {
            Some(p) => eprintln!("  Path {:<6} {:>4} pts \u{00b7} {}  ({:.3})", i + 1, path.len(), grade, p),
            None => eprintln!("  Path {:<6} {:>4} pts \u{00b7} {}", i + 1, path.len(), grade),
        }
        if cli.breakdown {
            if let Some(scores) = &verdict.breakdown {
                eprint!("{}", scores);
            }
        }
    }

    eprintln!();
    eprintln!(
        "  Result      {} perfect \u{00b7} {} attempts since last perfect",
        session.perfect_stars, session.attempts,
    );
    eprintln!();

    Ok(())
}
