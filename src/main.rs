//! playqr command-line entrypoint

#[cfg(not(feature = "encoder"))]
compile_error!(
    "playqr requires the `encoder` feature (QR encoder backend). \
     Install with `cargo install playqr` or build with `--features encoder`."
);

use clap::Parser;
use playqr::driver::{self, Invocation};
use playqr::output::render_report;
use playqr::{PlayqrConfig, Positionals, Result, cli, logging};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "playqr",
    version,
    about = "Generate printable QR codes for Subsoccer instant play",
    after_help = "Positional forms:\n  playqr\n  playqr GAME_ID [SIZE]\n  playqr URL [GAME_ID [SIZE]]\n\nA first argument starting with \"http\" is always read as the URL; use --game-id for such identifiers."
)]
struct Cli {
    /// URL [GAME_ID [SIZE]] or GAME_ID [SIZE]
    #[arg(value_name = "ARGS", num_args = 0..=3)]
    args: Vec<String>,

    /// Optional configuration file (toml/yaml). Defaults to playqr.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Instant play page to link to (overrides positional URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Table identifier appended as game_id (overrides positional GAME_ID)
    #[arg(long, value_name = "ID")]
    game_id: Option<String>,

    /// Image edge length in pixels (overrides positional SIZE)
    #[arg(long, value_name = "PX", value_parser = cli::parse_size_arg)]
    size: Option<u32>,

    /// Write the PNG here instead of qr_<GAME_ID>.png
    #[arg(long, short, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Do not ask for a table identifier when none was given
    #[arg(long)]
    no_prompt: bool,

    /// Decode the written image and check it links to the expected URL
    #[arg(long)]
    verify: bool,

    /// Print a JSON summary on stdout; progress goes to stderr
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn invocation(&self) -> Result<Invocation> {
        let mut invocation = Invocation::from_positionals(Positionals::parse(self.args.as_slice())?);

        if let Some(ref url) = self.base_url {
            invocation.base_url = Some(url.clone());
        }
        if let Some(ref id) = self.game_id {
            invocation.game_id = Some(id.clone());
        }
        if let Some(size) = self.size {
            invocation.size = Some(size);
        }
        invocation.output = self.output.clone();
        invocation.prompt = !self.no_prompt;
        invocation.verify = self.verify;

        Ok(invocation)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("playqr error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = PlayqrConfig::load(cli.config.as_deref())?;
    // Dropped at the end of `run`, flushing the log file.
    let _log_guard = logging::init(&config.logging)?;

    let invocation = cli.invocation()?;
    info!(?invocation, "Starting QR generation");

    let mut console: Box<dyn Write> = if cli.json {
        Box::new(io::stderr().lock())
    } else {
        Box::new(io::stdout().lock())
    };
    let mut input = io::stdin().lock();

    let report = driver::run(&config.generator, &invocation, &mut input, &mut console)?;
    let rendered = render_report(&report);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rendered.json)?);
    } else {
        for line in &rendered.human {
            writeln!(console, "{line}")?;
        }
    }
    console.flush()?;

    Ok(())
}
