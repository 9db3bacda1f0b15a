//! The `cfresolve` command-line front end.
//!
//! Mirrors the shape of `cpond8-sutra`'s CLI: a `clap`-derived argument
//! struct, a `run` entry point that dispatches on the subcommand, and a
//! single place error diagnostics get printed before the process exits
//! non-zero.

use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::template::{params_from_pairs, Template};

#[derive(Debug, Parser)]
#[command(
    name = "cfresolve",
    version,
    about = "Resolves CloudFormation-style intrinsic functions in a template."
)]
pub struct CfResolveArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a template's Resources section and print the result as JSON.
    Resolve {
        /// Path to the template JSON file.
        #[arg(required = true)]
        file: PathBuf,

        /// A `KEY=VALUE` parameter override; may be repeated.
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Write the resolved JSON here instead of stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Pretty-print the resolved JSON.
        #[arg(long)]
        pretty: bool,
    },
}

/// Parses arguments from `std::env::args`, runs the requested command,
/// and exits the process with a non-zero status on failure. Diagnostics
/// are rendered through `miette` so a malformed intrinsic points back at
/// the failing key rather than printing a bare `Debug` error.
pub fn run() {
    let args = CfResolveArgs::parse();

    if let Err(err) = dispatch(&args.command) {
        print_error(&err);
        std::process::exit(1);
    }
}

fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::Resolve {
            file,
            params,
            output,
            pretty,
        } => handle_resolve(file, params, output.as_deref(), *pretty),
    }
}

fn handle_resolve(
    file: &std::path::Path,
    params: &[String],
    output: Option<&std::path::Path>,
    pretty: bool,
) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", file.display()))?;
    let doc: serde_json::Value = serde_json::from_str(&source)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to parse {} as JSON", file.display()))?;

    let extra_params = params_from_pairs(params.iter().map(String::as_str));
    let resolved = Template::parse(doc)
        .resolve(&extra_params)
        .map_err(miette::Report::new)?;

    let json = resolved.resources.to_json();
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    }
    .into_diagnostic()?;

    match output {
        Some(path) => std::fs::write(path, rendered).into_diagnostic()?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn print_error(err: &miette::Report) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(&mut stderr, "error");
    let _ = stderr.reset();
    eprintln!(": {err:?}");
}
