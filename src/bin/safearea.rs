use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "safearea", version)]
struct Cli {
    /// Log adjuster activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scenario and print one JSON line per frame report.
    Replay(ReplayArgs),
    /// Parse and validate a configuration file, then print it back.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the scenario's output mode.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Also print frames that did not change anything.
    #[arg(long, default_value_t = false)]
    all: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input configuration JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Disabled,
    Anchor,
    Padding,
}

impl From<ModeChoice> for safearea::OutputMode {
    fn from(value: ModeChoice) -> Self {
        match value {
            ModeChoice::Disabled => Self::Disabled,
            ModeChoice::Anchor => Self::Anchor,
            ModeChoice::Padding => Self::Padding,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let mut scenario = safearea::Scenario::from_path(&args.in_path)
        .with_context(|| format!("load scenario '{}'", args.in_path.display()))?;
    if let Some(mode) = args.mode {
        scenario.config.mode = mode.into();
    }

    let reports = safearea::replay(&scenario).context("replay scenario")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut changed = 0usize;
    for report in &reports {
        if report.change.is_some() {
            changed += 1;
        } else if !args.all {
            continue;
        }
        let line = serde_json::to_string(report).context("serialize frame report")?;
        writeln!(out, "{line}").context("write frame report")?;
    }

    eprintln!("{changed} of {} frames changed", reports.len());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = safearea::SafeAreaConfig::from_path(&args.in_path)
        .with_context(|| format!("load config '{}'", args.in_path.display()))?;
    let json = serde_json::to_string_pretty(&config).context("serialize config")?;
    println!("{json}");
    Ok(())
}
