mod table;

use std::{
    fmt::{self, Display},
    io::{self, Write},
    path::PathBuf,
};

use nscale::params::{ParameterError, ScaleParameters};
use structopt::StructOpt;

pub const USAGE: &str = "usage: nscale [-m] [-i] N startVal [outfile.txt]";

/// Generate equal-tempered frequency tables for N notes to the octave
#[derive(StructOpt)]
#[structopt(name = "nscale", usage = "nscale [-m] [-i] N startVal [outfile.txt]")]
struct MainOptions {
    /// Interpret startVal as a MIDI note number instead of a frequency in Hz
    #[structopt(short = "m")]
    midi: bool,

    /// Print the interval ratio of each step as well as its frequency
    #[structopt(short = "i")]
    show_interval: bool,

    /// Number of equal divisions of the octave, 1-24
    #[structopt(name = "N")]
    notes: String,

    /// Start frequency in Hz or, with -m, MIDI note number (0-127)
    #[structopt(name = "startVal")]
    start_value: String,

    /// Text file the table is written to in addition to the console
    #[structopt(name = "outfile.txt", parse(from_os_str))]
    output_file: Option<PathBuf>,
}

impl MainOptions {
    fn run(self, app: &mut App) -> CliResult<()> {
        let params = ScaleParameters::parse(
            &self.notes,
            &self.start_value,
            self.midi,
            self.show_interval,
            self.output_file,
        )?;
        log::debug!("Scale parameters: {params:?}");

        for warning in params.warnings() {
            log::warn!("{warning:?}");
            app.errln(warning)?;
        }

        table::print_table(app, &params)
    }
}

pub fn run_in_shell_env(args: impl IntoIterator<Item = String>) -> CliResult<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();

    run_with_io(args, stdout.lock(), stderr.lock())
}

pub fn run_with_io(
    args: impl IntoIterator<Item = String>,
    output: impl Write,
    error: impl Write,
) -> CliResult<()> {
    let mut app = App {
        output: Box::new(output),
        error: Box::new(error),
    };

    let options = MainOptions::from_iter_safe(scan_leading_flags(args)?)
        .map_err(|err| CliError::CommandError(err.message))?;

    options.run(&mut app)
}

/// Reads the `-m`/`-i` flags preceding the positional arguments.
///
/// Scanning stops at the first token not starting with `-`. Only the second character of a flag
/// token is significant, i.e. `-midi` counts as `-m`. The result is a canonical argument list
/// where all positional arguments follow a `--` separator, so that they may start with `-`.
fn scan_leading_flags(args: impl IntoIterator<Item = String>) -> CliResult<Vec<String>> {
    let mut args = args.into_iter();
    let program_name = args.next().unwrap_or_else(|| "nscale".to_owned());
    let mut args = args.peekable();

    let mut midi = false;
    let mut show_interval = false;
    while let Some(arg) = args.next_if(|arg| arg.starts_with('-')) {
        match arg.chars().nth(1) {
            Some('m') => midi = true,
            Some('i') => show_interval = true,
            _ => return Err(CliError::UnrecognizedOption(arg)),
        }
    }

    let positionals: Vec<_> = args.collect();
    match positionals.len() {
        0 | 1 => return Err(CliError::InsufficientArguments),
        2 | 3 => {}
        _ => return Err(CliError::TooManyArguments(positionals[3].clone())),
    }

    let mut canonical_args = vec![program_name];
    if midi {
        canonical_args.push("-m".to_owned());
    }
    if show_interval {
        canonical_args.push("-i".to_owned());
    }
    canonical_args.push("--".to_owned());
    canonical_args.extend(positionals);
    Ok(canonical_args)
}

struct App<'a> {
    output: Box<dyn 'a + Write>,
    error: Box<dyn 'a + Write>,
}

impl App<'_> {
    pub fn writeln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.output, "{message}")
    }

    pub fn errln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.error, "{message}")
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    IoError(io::Error),
    CommandError(String),
    UnrecognizedOption(String),
    InsufficientArguments,
    TooManyArguments(String),
    InvalidParameter(ParameterError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(err) => write!(f, "error: {err}"),
            CliError::CommandError(message) => write!(f, "{message}"),
            CliError::UnrecognizedOption(option) => {
                write!(f, "error: unrecognized option {option}")
            }
            CliError::InsufficientArguments => {
                write!(f, "insufficient arguments\n{USAGE}")
            }
            CliError::TooManyArguments(arg) => {
                write!(f, "error: too many arguments, unexpected '{arg}'\n{USAGE}")
            }
            CliError::InvalidParameter(err) => write!(f, "{err}"),
        }
    }
}

impl From<ParameterError> for CliError {
    fn from(v: ParameterError) -> Self {
        CliError::InvalidParameter(v)
    }
}

impl From<io::Error> for CliError {
    fn from(v: io::Error) -> Self {
        CliError::IoError(v)
    }
}
