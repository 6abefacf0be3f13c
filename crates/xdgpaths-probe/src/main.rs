mod logging;
mod render;

use clap::Parser;
use xdgpaths::{PathKind, ProgramPaths};

use logging::{level_for_verbosity, StderrLogger};
use render::{render, render_one, Format};

#[derive(Parser)]
#[command(name = "xdgpaths-probe", version, about = "Print the XDG locations of a program")]
struct Cli {
    /// Program name used as the directory component
    program: String,

    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Print a single location, e.g. config_dir or log-file
    #[arg(short = 'k', long)]
    only: Option<PathKind>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    StderrLogger::init(level_for_verbosity(cli.verbose))?;

    let paths = ProgramPaths::new(cli.program);
    log::debug!("Resolving locations for {}", paths.program_name());

    let snapshot = paths.snapshot();
    let output = match cli.only {
        Some(kind) => render_one(&snapshot, kind, cli.format)?,
        None => render(&snapshot, cli.format)?,
    };
    print!("{}", output);
    Ok(())
}
