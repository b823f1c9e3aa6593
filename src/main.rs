use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use fitness_tracker::config::{TrackerConfig, DEFAULT_CONFIG_PATH};
use fitness_tracker::driver::write_message;
use fitness_tracker::{
    read_package, run_batch, summarize, BatchOptions, ErrorPolicy, MessageLocale, OutputFormat,
};

#[derive(Parser)]
#[command(name = "fitness-tracker", about = "Workout summary calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize every configured package (the demo batch when none are configured).
    Run(RunArgs),
    /// Summarize a single package given on the command line.
    Summarize(SummarizeArgs),
    /// Write a starter config file.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct OutputArgs {
    #[arg(long)]
    locale: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone, Default)]
struct RunArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    on_error: Option<String>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
struct SummarizeArgs {
    #[arg(long = "type")]
    workout_type: String,
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    data: Vec<f64>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    path: PathBuf,
    #[arg(long)]
    force: bool,
}

fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => run_packages(args),
        Command::Summarize(args) => run_summarize(args),
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn run_packages(args: RunArgs) -> Result<(), String> {
    let (config, _) = TrackerConfig::load(args.config)?;
    let mut options = apply_output_args(config.to_options()?, &args.output)?;
    if let Some(value) = args.on_error {
        options.on_error = ErrorPolicy::from_str(&value)
            .ok_or_else(|| format!("invalid error policy (abort|skip): {}", value))?;
    }

    let packages = config.packages();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_batch(&packages, &options, &mut out).map_err(|err| err.to_string())?;
    out.flush()
        .map_err(|err| format!("failed writing stdout: {}", err))?;

    if report.skipped > 0 {
        eprintln!("Skipped {} of {} packages", report.skipped, packages.len());
    }
    Ok(())
}

fn run_summarize(args: SummarizeArgs) -> Result<(), String> {
    let (config, _) = TrackerConfig::load(args.config)?;
    let options = apply_output_args(config.to_options()?, &args.output)?;

    let workout = read_package(&args.workout_type, &args.data).map_err(|err| err.to_string())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let message = summarize(&workout).map_err(|err| err.to_string())?;
    write_message(&mut out, &message, &options).map_err(|err| err.to_string())
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    if args.path.exists() && !args.force {
        return Err(format!(
            "config already exists: {} (pass --force to overwrite)",
            args.path.display()
        ));
    }
    TrackerConfig::sample().write(&args.path)?;
    println!("Wrote {}", args.path.display());
    Ok(())
}

fn apply_output_args(mut options: BatchOptions, args: &OutputArgs) -> Result<BatchOptions, String> {
    if let Some(value) = args.locale.as_deref() {
        options.locale = MessageLocale::from_str(value)
            .ok_or_else(|| format!("invalid locale (en|ru): {}", value))?;
    }
    if args.json {
        options.format = OutputFormat::Json;
    }
    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
