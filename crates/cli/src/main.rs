// gridport - delimited text (CSV/TSV) to Excel workbook converter
//
// Interactive when run without arguments (native file dialogs); scriptable
// when paths are passed on the command line.

mod exit_codes;
mod lock;
mod prompt;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use gridport_config::Settings;
use gridport_io::{csv, xlsx};

use exit_codes::{EXIT_ERROR, EXIT_IO_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use prompt::{NativePrompter, Prompter};

#[derive(Parser)]
#[command(name = "gridport")]
#[command(about = "Convert CSV/TSV files to Excel workbooks")]
#[command(version)]
#[command(after_help = "\
Run without arguments for file-picker dialogs.

Examples:
  gridport data.csv
  gridport data.csv -o report.xlsx
  gridport export.txt -d ';' -o clean.xlsx -q")]
struct Cli {
    /// Input file (omit to choose via file dialog)
    input: Option<PathBuf>,

    /// Output .xlsx file (default: input path with the extension swapped)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Field delimiter (default: auto-detect comma vs tab)
    #[arg(long, short = 'd')]
    delimiter: Option<char>,

    /// Suppress non-error console notes
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut prompter = NativePrompter;
    let mut ctx = AppContext {
        settings: Settings::load(),
        prompter: &mut prompter,
        quiet: cli.quiet,
    };

    match run(cli, &mut ctx) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Everything a run needs beyond its arguments. Built once in main,
/// dropped when the run ends.
struct AppContext<'a> {
    settings: Settings,
    prompter: &'a mut dyn Prompter,
    quiet: bool,
}

impl AppContext<'_> {
    /// Console note, mirrored as a message box when `dialog` is set.
    fn notify(&mut self, dialog: bool, title: &str, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
        if dialog {
            self.prompter.info(title, message);
        }
    }
}

fn run(cli: Cli, ctx: &mut AppContext) -> Result<(), CliError> {
    let forced_delimiter = cli.delimiter.map(parse_delimiter).transpose()?;

    // Dialog-driven when no input path was given on the command line
    let interactive = cli.input.is_none();

    let input = match cli.input {
        Some(path) => path,
        None => {
            let start_dir = ctx.settings.effective_start_dir();
            match ctx.prompter.pick_input(&start_dir) {
                Some(path) => path,
                None => {
                    ctx.notify(true, "No input", "No input file selected. Exiting...");
                    return Ok(());
                }
            }
        }
    };

    if !input.exists() {
        return Err(CliError::io(format!("cannot read {}: no such file", input.display())));
    }

    let delimiter = forced_delimiter.unwrap_or_else(|| csv::detect_delimiter(&input));
    let doc = csv::import_with_delimiter(&input, delimiter)
        .map_err(|e| CliError::parse(format!("{}: {e}", input.display())))?;

    if doc.is_empty() {
        ctx.notify(interactive, "Nothing to convert", "Input file is empty. Exiting...");
        return Ok(());
    }

    let output = match cli.output {
        Some(path) => ensure_xlsx_extension(path),
        None if interactive => {
            let suggested = suggest_output(&input);
            match ctx.prompter.pick_output(&suggested) {
                Some(path) => ensure_xlsx_extension(path),
                None => {
                    ctx.notify(true, "No output", "No output file selected. Exiting...");
                    return Ok(());
                }
            }
        }
        None => suggest_output(&input),
    };

    let output = if lock::is_locked(&output) {
        match lock::resolve_locked_output(output, &mut *ctx.prompter) {
            Some(path) => path,
            None => {
                ctx.notify(false, "Cancelled", "Operation cancelled. Exiting...");
                return Ok(());
            }
        }
    } else {
        output
    };

    let result = xlsx::export(&doc, &output).map_err(|e| CliError {
        code: EXIT_ERROR,
        message: e,
        hint: None,
    })?;

    log::info!(
        "wrote {} rows ({} cells) in {} ms",
        result.rows_written,
        result.cells_written,
        result.export_duration_ms
    );

    if !ctx.quiet {
        println!("File converted and saved to: {}", output.display());
    }
    if interactive && ctx.settings.show_success_dialog {
        ctx.prompter.info(
            "Success",
            &format!("File conversion complete!\nSaved to: {}", output.display()),
        );
    }

    Ok(())
}

/// A forced delimiter must fit in one byte.
fn parse_delimiter(c: char) -> Result<u8, CliError> {
    u8::try_from(c).map_err(|_| {
        CliError::args(format!("delimiter must be a single ASCII character, got {c:?}"))
            .with_hint("use -d ',' or -d $'\\t'")
    })
}

/// Default output path: input path with the extension swapped to .xlsx.
fn suggest_output(input: &Path) -> PathBuf {
    input.with_extension("xlsx")
}

/// Append .xlsx when the chosen path has no extension at all (save dialogs
/// on some platforms return the bare typed name).
fn ensure_xlsx_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("xlsx")
    } else {
        path
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO_ERROR, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE_ERROR, message: msg.into(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
