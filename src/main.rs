//! Command-line front end: read a keypoints file, run the pipeline, print
//! the report as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use swinglab::pose::PoseSequence;
use swinglab::report::AnalysisReport;
use swinglab::{AnalyzerConfig, SwingAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "swinglab")]
#[command(version, about = "Deterministic golf swing scoring from pose keypoints")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a keypoint clip and print the report as JSON
    Analyze {
        /// Pose keypoints file (JSON)
        keypoints: PathBuf,

        /// Scoring policy file (JSON); built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write the default scoring policy to a file, ready to edit
    InitConfig {
        /// Destination path for the policy JSON
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Commands::Analyze { keypoints, config } => analyze(&keypoints, config.as_deref()),
        Commands::InitConfig { path } => {
            AnalyzerConfig::default().save(&path)?;
            eprintln!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}

fn analyze(keypoints: &Path, config: Option<&Path>) -> Result<()> {
    let contents = fs::read_to_string(keypoints)
        .with_context(|| format!("Failed to read keypoints from {}", keypoints.display()))?;
    let sequence: PoseSequence = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse keypoints from {}", keypoints.display()))?;

    let config = match config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };

    let analyzer = SwingAnalyzer::new(config)?;
    let analysis = analyzer.analyze(&sequence)?;
    let report = AnalysisReport::from_analysis(&analysis);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
