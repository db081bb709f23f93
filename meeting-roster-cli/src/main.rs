mod error;
mod report;

use std::io::{self, BufWriter, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use meeting_roster_config::{get_config, RosterOverrides};
use meeting_roster_optimizer::run;
use meeting_roster_telemetry::setup_telemetry;
use tracing::{debug, error};

use crate::error::CliError;
use crate::report::{JsonLinesReport, TextReport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Text,
    /// one JSON event per line
    Json,
}

/// Prints a monthly meeting schedule for all employees, filling the early
/// days of the month first.
///
/// Every employee meets once a month. Meetings only happen Monday to Friday
/// and never extend past the end of the workday. The final meeting may have
/// fewer employees than the others.
#[derive(Parser, Debug)]
#[command(name = "meeting-roster", version, allow_negative_numbers = true)]
struct Cli {
    /// Year of the roster (2000-2100)
    #[arg(long)]
    year: Option<i64>,

    /// Month of the roster (1-12)
    #[arg(long)]
    month: Option<i64>,

    /// Number of employees to schedule (at least 2)
    #[arg(long)]
    employees: Option<i64>,

    /// Employees per meeting (1 up to the number of employees)
    #[arg(long)]
    per_meeting: Option<i64>,

    /// Meeting rooms available in every slot (1-50)
    #[arg(long)]
    rooms: Option<i64>,

    /// Meeting length in hours (1-4)
    #[arg(long)]
    duration: Option<i64>,

    /// Hour employees start working (0-23)
    #[arg(long)]
    start_hour: Option<i64>,

    /// Hour employees finish work, every meeting ends by then
    #[arg(long)]
    end_hour: Option<i64>,

    /// TOML file with defaults, `roster.toml` is used if present
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Log what the scheduler is doing to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    const fn overrides(&self) -> RosterOverrides {
        RosterOverrides {
            year: self.year,
            month: self.month,
            employees: self.employees,
            employees_per_meeting: self.per_meeting,
            meeting_rooms: self.rooms,
            meeting_duration: self.duration,
            start_hour: self.start_hour,
            end_hour: self.end_hour,
        }
    }
}

fn print_roster(cli: &Cli) -> Result<(), CliError> {
    let config = get_config(cli.config.as_deref(), &cli.overrides())?;
    let params = config.validate()?;
    debug!(?params, "validated parameters");

    let mut out = BufWriter::new(io::stdout().lock());
    match cli.format {
        Format::Text => {
            run(&params, &mut TextReport::new(&mut out))?;
        }
        Format::Json => {
            run(&params, &mut JsonLinesReport::new(&mut out))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_telemetry(cli.verbose);

    match print_roster(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let CliError::Validation(errors) = &err {
                for error in errors.errors() {
                    eprintln!("error: {error}");
                }
            } else {
                error!("{err}");
            }
            err.exit_code()
        }
    }
}
