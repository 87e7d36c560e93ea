//! # Ampsize CLI Application
//!
//! Command-line front end for the sizing engine: converts power to current
//! (or back), then recommends a wire size and copper busbar.
//!
//! ```text
//! ampsize calc --system 3W_220 --power 50000
//! ampsize calc --system custom --voltage 400 --three-phase --current 120 --format json
//! ampsize tables --kind busbar
//! ampsize interactive
//! ```

mod interactive;
mod output;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use ampsize_core::tables::{validate_tables, TableIssue};
use ampsize_core::voltage::parse_token;
use ampsize_core::{
    calculate_with_config, load_settings_or_default, resolve, save_settings, CalcError, CalcResult, ModeKind,
    OutputStyle, Settings,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ampsize")]
#[command(about = "Current, power, wire gauge and busbar sizing calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (JSON); a missing file means defaults
    #[arg(long, global = true, env = "AMPSIZE_SETTINGS", default_value = "ampsize.json")]
    settings: PathBuf,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one sizing calculation
    Calc {
        /// Voltage system: 4W_380, 3W_220, 1P3W_220 or custom
        #[arg(short, long)]
        system: Option<String>,

        /// Line voltage for the custom system (V)
        #[arg(long, allow_negative_numbers = true)]
        voltage: Option<f64>,

        /// Custom system is three-phase
        #[arg(long)]
        three_phase: bool,

        #[command(flatten)]
        value: ValueArgs,

        /// Output format (defaults to the settings file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the reference tables
    Tables {
        /// Which table to print
        #[arg(short, long, value_enum, default_value = "all")]
        kind: TableKind,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Prompt for inputs line by line
    Interactive,

    /// Show or create the settings file
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// Exactly one of power or current; the choice sets the mode
#[derive(Args)]
#[group(required = true, multiple = false)]
struct ValueArgs {
    /// Load power in watts (power to current)
    #[arg(short, long, allow_negative_numbers = true)]
    power: Option<f64>,

    /// Current in amperes (current to power)
    #[arg(short, long, allow_negative_numbers = true)]
    current: Option<f64>,
}

impl ValueArgs {
    fn mode(&self) -> ampsize_core::CalculationMode {
        match (self.power, self.current) {
            (Some(power), _) => ModeKind::Forward.with_value(power),
            (None, Some(current)) => ModeKind::Backward.with_value(current),
            // clap's group guarantees one of the two
            (None, None) => ModeKind::Forward.with_value(f64::NAN),
        }
    }
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings as JSON
    Show,
    /// Write a default settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripts
    Json,
}

impl From<OutputStyle> for OutputFormat {
    fn from(style: OutputStyle) -> Self {
        match style {
            OutputStyle::Human => OutputFormat::Human,
            OutputStyle::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TableKind {
    Wire,
    Busbar,
    All,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    report_table_issues(&validate_tables());

    let exit_code = match cli.command {
        Commands::Calc {
            system,
            voltage,
            three_phase,
            value,
            format,
        } => handle_calc(&cli.settings, system.as_deref(), voltage, three_phase, &value, format),
        Commands::Tables { kind, format } => handle_tables(kind, format),
        Commands::Interactive => handle_interactive(&cli.settings),
        Commands::Settings { action } => handle_settings(&cli.settings, action),
    };

    process::exit(exit_code);
}

/// Log each table problem; the tool keeps running either way
fn report_table_issues(issues: &[TableIssue]) {
    for issue in issues {
        warn!(%issue, "reference table issue; selections may not be the smallest adequate size");
    }
}

fn load_settings_reporting(path: &Path) -> Option<Settings> {
    match load_settings_or_default(path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

fn handle_calc(
    settings_path: &Path,
    system: Option<&str>,
    voltage: Option<f64>,
    three_phase: bool,
    value: &ValueArgs,
    format: Option<OutputFormat>,
) -> i32 {
    let Some(settings) = load_settings_reporting(settings_path) else {
        return 1;
    };
    let format = format.unwrap_or_else(|| settings.output.into());
    let mode = value.mode();

    let outcome = (|| -> CalcResult<_> {
        let system = match system {
            Some(token) => parse_token(token, voltage, three_phase)?,
            None => settings.default_voltage_system,
        };
        let config = resolve(system.as_ref())?;
        let result = calculate_with_config(&config, mode)?;
        Ok((system, config, result))
    })();

    let mut stdout = io::stdout().lock();
    let written = match (&outcome, format) {
        (Ok((system, config, result)), OutputFormat::Human) => {
            let label = system.map(|s| s.display_name()).unwrap_or_default();
            output::print_result_human(&mut stdout, &label, config, &mode, result)
        }
        (Ok((_, config, result)), OutputFormat::Json) => output::print_result_json(&mut stdout, config, &mode, result),
        (Err(e), OutputFormat::Human) => output::print_error_human(&mut io::stderr(), e),
        (Err(e), OutputFormat::Json) => output::print_error_json(&mut stdout, e),
    };
    if let Err(e) = written.and_then(|_| stdout.flush()) {
        eprintln!("Error: failed to write output: {}", e);
        return 1;
    }

    match outcome {
        Ok(_) => 0,
        Err(e) => {
            debug!(code = e.error_code(), "calculation rejected");
            1
        }
    }
}

fn handle_tables(kind: TableKind, format: OutputFormat) -> i32 {
    let (wire, busbar) = match kind {
        TableKind::Wire => (true, false),
        TableKind::Busbar => (false, true),
        TableKind::All => (true, true),
    };

    let mut stdout = io::stdout().lock();
    let written = match format {
        OutputFormat::Json => output::print_tables_json(&mut stdout, wire, busbar),
        OutputFormat::Human => output::print_tables_human(&mut stdout, wire, busbar),
    };

    match written {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: failed to write output: {}", e);
            1
        }
    }
}

fn handle_interactive(settings_path: &Path) -> i32 {
    let Some(settings) = load_settings_reporting(settings_path) else {
        return 1;
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    match interactive::run(&mut input, &mut stdout, &settings) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_settings(settings_path: &Path, action: SettingsAction) -> i32 {
    match action {
        SettingsAction::Show => {
            let Some(settings) = load_settings_reporting(settings_path) else {
                return 1;
            };
            match serde_json::to_string_pretty(&settings) {
                Ok(json) => {
                    println!("{}", json);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", CalcError::from(e));
                    1
                }
            }
        }
        SettingsAction::Init { force } => {
            if settings_path.exists() && !force {
                eprintln!(
                    "Error: {} already exists (use --force to overwrite)",
                    settings_path.display()
                );
                return 1;
            }
            match save_settings(&Settings::default(), settings_path) {
                Ok(()) => {
                    println!("Wrote {}", settings_path.display());
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    }
}
