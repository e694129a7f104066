//----------------------------------------
// Command line front end
//----------------------------------------
use std::fmt::Write;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dtcompute::compute::compute_design;
use dtcompute::compute::types::{
    AllocationReport, AllocationStrategy, PerMeasure, PrecisionTarget, Prevalences, StudyDesign,
};

const DEFAULT_HALF_WIDTH: f64 = 0.01;
const DEFAULT_THRESHOLD: f64 = 0.9;

#[derive(Parser, Debug)]
#[command(name = "dtcompute")]
#[command(version)]
#[command(about = "Test accuracy calculator: people to sample from two groups", long_about = None)]
struct Cli {
    /// Significance level alpha (0 to 1). The probability of rejecting the
    /// null hypothesis when it is true; a common choice is 0.05
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,

    /// Prevalence in group 1 (0 to 1): the proportion of sick individuals in
    /// the first population
    #[arg(long = "prevalence-group1", default_value_t = 0.1)]
    prevalence_group1: f64,

    /// Prevalence in group 2 (0 to 1): the proportion of sick individuals in
    /// the second population
    #[arg(long = "prevalence-group2", default_value_t = 0.65)]
    prevalence_group2: f64,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Show intermediate values, and debug logs unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Expected sensitivity and specificity with the wanted interval half-width
    Direct(DirectArgs),
    /// Minimum acceptable sensitivity and specificity
    Threshold(ThresholdArgs),
}

#[derive(Args, Debug)]
struct DirectArgs {
    /// Sensitivity (0 to 1): the probability that the test correctly
    /// identifies a sick individual as sick
    #[arg(long, default_value_t = 0.99)]
    sensitivity: f64,

    /// Specificity (0 to 1): the probability that the test correctly
    /// identifies a healthy individual as healthy
    #[arg(long, default_value_t = 0.99)]
    specificity: f64,

    /// W (positive): tolerance for the interval of both estimates [default: 0.01]
    #[arg(long, conflicts_with_all = ["sensitivity_half_width", "specificity_half_width"])]
    half_width: Option<f64>,

    /// W for the sensitivity interval only
    #[arg(long, requires = "specificity_half_width")]
    sensitivity_half_width: Option<f64>,

    /// W for the specificity interval only
    #[arg(long, requires = "sensitivity_half_width")]
    specificity_half_width: Option<f64>,
}

#[derive(Args, Debug)]
struct ThresholdArgs {
    /// Minimum acceptable sensitivity and specificity, in [0, 1) [default: 0.9]
    #[arg(long, conflicts_with_all = ["sensitivity_threshold", "specificity_threshold"])]
    threshold: Option<f64>,

    /// Minimum acceptable sensitivity only
    #[arg(long, requires = "specificity_threshold")]
    sensitivity_threshold: Option<f64>,

    /// Minimum acceptable specificity only
    #[arg(long, requires = "sensitivity_threshold")]
    specificity_threshold: Option<f64>,
}

fn per_measure(
    shared: Option<f64>,
    sensitivity: Option<f64>,
    specificity: Option<f64>,
    default: f64,
) -> PerMeasure {
    match (sensitivity, specificity) {
        (Some(sensitivity), Some(specificity)) => PerMeasure::Independent {
            sensitivity,
            specificity,
        },
        _ => PerMeasure::Shared(shared.unwrap_or(default)),
    }
}

impl Cli {
    fn study_design(&self) -> StudyDesign {
        let precision = match &self.mode {
            Mode::Direct(args) => PrecisionTarget::Direct {
                sensitivity: args.sensitivity,
                specificity: args.specificity,
                half_width: per_measure(
                    args.half_width,
                    args.sensitivity_half_width,
                    args.specificity_half_width,
                    DEFAULT_HALF_WIDTH,
                ),
            },
            Mode::Threshold(args) => PrecisionTarget::Threshold(per_measure(
                args.threshold,
                args.sensitivity_threshold,
                args.specificity_threshold,
                DEFAULT_THRESHOLD,
            )),
        };
        StudyDesign {
            precision,
            alpha: self.alpha,
            prevalences: Prevalences::new(self.prevalence_group1, self.prevalence_group2),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fmt_baseline(necessary: Option<u64>) -> String {
    match necessary {
        Some(n) => n.to_string(),
        None => String::from("unbounded"),
    }
}

fn render_text(report: &AllocationReport, verbose: bool) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let allocation = &report.allocation;
    writeln!(out, "People from group 1: {}", allocation.people_from_group1)?;
    writeln!(out, "People from group 2: {}", allocation.people_from_group2)?;
    writeln!(out, "Gain from using both sources: {}", allocation.gain)?;

    if verbose {
        let targets = &report.targets;
        writeln!(out)?;
        writeln!(out, "Z: {:.6}", targets.z)?;
        writeln!(out, "M1 (diseased needed): {:.3}", targets.m1)?;
        writeln!(out, "M2 (non-diseased needed): {:.3}", targets.m2)?;
        writeln!(out, "Ideal proportion: {:.4}", targets.ideal_proportion)?;
        match report.strategy {
            AllocationStrategy::Split { q } => {
                writeln!(out, "Strategy: split, q = {q:.4}")?;
            }
            AllocationStrategy::SingleGroup(group) => {
                writeln!(out, "Strategy: {group} only")?;
            }
        }
        writeln!(
            out,
            "Group 1 alone would need: {}",
            fmt_baseline(report.necessary_group1)
        )?;
        writeln!(
            out,
            "Group 2 alone would need: {}",
            fmt_baseline(report.necessary_group2)
        )?;
        writeln!(
            out,
            "Expected diseased / non-diseased: {:.1} / {:.1}",
            report.expected_yield.diseased, report.expected_yield.non_diseased
        )?;
    }
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let design = cli.study_design();
    tracing::debug!(?design, "resolved command line");
    let report = compute_design(&design).context("failed to compute allocation")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        let text = render_text(&report, cli.verbose).context("failed to render report")?;
        print!("{text}");
    }
    Ok(())
}
