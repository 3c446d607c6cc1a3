mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use polyparade_core::{Roster, ShowcaseKind, Transcript, run_showcase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Section titles and rendered lines
    Console,
    /// The transcript as pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "polyparade", version)]
#[command(about = "Runs the movement and superhero polymorphism showcases")]
struct Args {
    /// Showcases to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    showcases: String,

    /// List all available showcases and exit
    #[arg(long)]
    list_showcases: bool,

    /// Roster JSON file to use instead of the bundled cast
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_showcases(&args)? {
        return Ok(());
    }

    let roster = load_roster(args.roster.as_deref())?;
    let kinds = expand_showcases(&args.showcases);
    let transcript = run_showcases(&kinds, &roster);
    write_report(&args, &transcript)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn maybe_list_showcases(args: &Args) -> Result<bool> {
    if !args.list_showcases {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available showcases:")?;
    for kind in ShowcaseKind::ALL {
        writeln!(
            output_target.writer(),
            "  {:10} - {}",
            kind.key(),
            kind.description()
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn load_roster(path: Option<&Path>) -> Result<Roster> {
    let Some(path) = path else {
        return Roster::builtin().context("bundled roster is invalid");
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    Roster::from_json(&json).with_context(|| format!("invalid roster {}", path.display()))
}

fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Resolve showcase keys in the order given; `all` expands to every
/// showcase and repeated keys run once.
fn expand_showcases(showcases_arg: &str) -> Vec<ShowcaseKind> {
    let mut kinds = Vec::new();
    for key in split_csv(showcases_arg) {
        let resolved: Vec<ShowcaseKind> = if key == "all" {
            ShowcaseKind::ALL.to_vec()
        } else if let Some(kind) = ShowcaseKind::from_key(&key) {
            vec![kind]
        } else {
            eprintln!("⚠️  Unknown showcase: {}", key.yellow());
            continue;
        };
        for kind in resolved {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    }
    kinds
}

fn run_showcases(kinds: &[ShowcaseKind], roster: &Roster) -> Transcript {
    let mut transcript = Transcript::default();
    log::info!(
        "running {} showcases with {} heroes",
        kinds.len(),
        roster.heroes.len()
    );
    for &kind in kinds {
        transcript.extend(run_showcase(kind, roster));
    }
    transcript
}

fn write_report(args: &Args, transcript: &Transcript) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => report::generate_json_report(output_target.writer(), transcript)?,
        ReportFormat::Console => {
            if transcript.is_empty() {
                writeln!(&mut output_target, "No showcases executed.")?;
            } else {
                report::generate_console_report(output_target.writer(), transcript)?;
            }
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
