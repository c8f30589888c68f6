use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::Level;

use alphafold_singularity::config;
use alphafold_singularity::container;
use alphafold_singularity::plan::{InvocationPlan, Model, PlanInput, Preset};

#[derive(Parser)]
#[command(name = "alphafold-singularity", version)]
#[command(about = "Singularity launch script for AlphaFold")]
struct Cli {
    /// Paths to FASTA files, each containing one sequence. All FASTA paths
    /// must have a unique basename as the basename is used to name the
    /// output directories for each prediction.
    #[arg(short = 'f', long, required = true, num_args = 1..)]
    fasta_paths: Vec<PathBuf>,

    /// Maximum template release date to consider (ISO-8601, YYYY-MM-DD).
    /// Important if folding historical test sets. Defaults to today.
    #[arg(short = 't', long, value_parser = parse_date)]
    max_template_date: Option<NaiveDate>,

    /// Preset model configuration.
    #[arg(short, long, value_enum, default_value_t = Preset::FullDbs)]
    preset: Preset,

    /// Run multiple JAX model evaluations to obtain a timing that excludes
    /// the compilation time.
    #[arg(short, long)]
    benchmark: bool,

    /// Models to run. Defaults to all of them.
    #[arg(short, long, value_enum, num_args = 1..)]
    models: Vec<Model>,

    /// Databases directory (target of scripts/download_all_databases.sh).
    #[arg(short, long, default_value = "./databases/")]
    data_dir: PathBuf,

    /// Output directory for results.
    #[arg(short, long, default_value = "results/")]
    output_dir: PathBuf,

    /// Config file overriding the runtime, image and mount settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the command without running it.
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Fill in the defaults that depend on more than a literal: every model
    /// when `--models` is omitted, and `today` as the template cutoff.
    fn into_plan_input(self, today: NaiveDate) -> PlanInput {
        let models = if self.models.is_empty() {
            Model::ALL.to_vec()
        } else {
            self.models
        };

        PlanInput {
            fasta_paths: self.fasta_paths,
            data_dir: self.data_dir,
            output_dir: self.output_dir,
            models,
            max_template_date: self.max_template_date.unwrap_or(today),
            preset: self.preset,
            benchmark: self.benchmark,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let cfg = config::load(&cwd, cli.config.as_deref())?;

    let dry_run = cli.dry_run;
    let input = cli.into_plan_input(chrono::Local::now().date_naive());

    let plan = InvocationPlan::build(&cfg, &input, &cwd)?;
    let cmd = plan.to_command();
    println!("Executing: {}", cmd.display());

    if dry_run {
        return Ok(ExitCode::SUCCESS);
    }

    let result = container::run(&cmd)?;
    Ok(ExitCode::from(result.process_exit_code()))
}
