//! Orchestration of a single generation run
//!
//! Console I/O is passed in so the flow can run against scripted input.

use crate::cli::Positionals;
use crate::config::GeneratorOptions;
use crate::error::{Error, Result};
use crate::generator::{GeneratedQr, generate_qr};
use crate::link::{instant_play_url, output_filename};
use crate::output;
use crate::qr::QrDecoder;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Everything the command line asked for, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Base URL override
    pub base_url: Option<String>,
    /// Table identifier; empty counts as absent
    pub game_id: Option<String>,
    /// Image size override in pixels
    pub size: Option<u32>,
    /// Output path override
    pub output: Option<PathBuf>,
    /// Ask on the console when no identifier was given
    pub prompt: bool,
    /// Decode the written file and compare with the URL
    pub verify: bool,
}

impl Invocation {
    /// Invocation carrying only positional values, prompting enabled.
    pub fn from_positionals(positionals: Positionals) -> Self {
        Self {
            base_url: positionals.base_url,
            game_id: positionals.game_id,
            size: positionals.size,
            prompt: true,
            ..Self::default()
        }
    }
}

/// Result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Identifier that ended up in the URL (may be empty)
    pub game_id: String,
    /// Whether the written image was decoded and matched
    pub verified: bool,
    /// Generation details
    pub generated: GeneratedQr,
}

/// Resolve the invocation against `options`, generate the code and print progress.
///
/// Progress, the identifier prompt and the final human-readable report are
/// written to `console`; `input` is read at most once, for the prompt.
pub fn run<R, W>(
    options: &GeneratorOptions,
    invocation: &Invocation,
    input: &mut R,
    console: &mut W,
) -> Result<Report>
where
    R: BufRead,
    W: Write,
{
    for line in output::banner() {
        writeln!(console, "{line}")?;
    }

    let base_url = invocation
        .base_url
        .clone()
        .unwrap_or_else(|| options.base_url.clone());
    let size = invocation.size.unwrap_or(options.size);

    let mut game_id = invocation.game_id.clone().unwrap_or_default();
    if game_id.is_empty() && invocation.prompt {
        game_id = prompt_game_id(input, console)?;
    }

    let url = instant_play_url(&base_url, &game_id);
    if !game_id.is_empty() {
        writeln!(console, "Linked to Table ID: {game_id}")?;
    }
    tracing::debug!(%url, game_id = %game_id, size, "Resolved instant play link");

    let path = invocation
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(output_filename(&game_id, &options.default_filename)));

    for line in output::generating(&url) {
        writeln!(console, "{line}")?;
    }
    let generated = generate_qr(&url, &path, size)?;

    let verified = if invocation.verify {
        verify(&generated)?;
        true
    } else {
        false
    };

    Ok(Report {
        game_id,
        verified,
        generated,
    })
}

fn prompt_game_id<R: BufRead, W: Write>(input: &mut R, console: &mut W) -> Result<String> {
    writeln!(console, "{}", output::prompt_tip())?;
    write!(console, "{}", output::GAME_ID_PROMPT)?;
    console.flush()?;

    let mut line = String::new();
    // EOF leaves the line empty, same as pressing Enter.
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn verify(generated: &GeneratedQr) -> Result<()> {
    let decoded = QrDecoder::new().decode_file(&generated.output)?;
    if decoded != generated.url {
        return Err(Error::VerificationMismatch {
            expected: generated.url.clone(),
            actual: decoded,
        });
    }
    tracing::info!(path = %generated.output.display(), "Verified QR payload");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn invocation_in(dir: &std::path::Path, positionals: &[&str]) -> Invocation {
        let mut invocation = Invocation::from_positionals(Positionals::parse(positionals).unwrap());
        let name = output_filename(
            invocation.game_id.as_deref().unwrap_or(""),
            "default.png",
        );
        invocation.output = Some(dir.join(name));
        invocation
    }

    #[test]
    fn positional_id_skips_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = invocation_in(dir.path(), &["A1"]);
        let mut input = Cursor::new("should not be read\n");
        let mut console: Vec<u8> = Vec::new();

        let report = run(
            &GeneratorOptions::default(),
            &invocation,
            &mut input,
            &mut console,
        )
        .unwrap();

        assert_eq!(report.game_id, "A1");
        assert_eq!(input.position(), 0);
        let text = String::from_utf8(console).unwrap();
        assert!(!text.contains(output::GAME_ID_PROMPT));
        assert!(text.contains("Linked to Table ID: A1"));
    }

    #[test]
    fn prompt_answer_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let mut invocation = Invocation::from_positionals(Positionals::default());
        invocation.output = Some(dir.path().join("out.png"));
        let mut console: Vec<u8> = Vec::new();

        let report = run(
            &GeneratorOptions::default(),
            &invocation,
            &mut Cursor::new("  table5 \n"),
            &mut console,
        )
        .unwrap();

        assert_eq!(report.game_id, "table5");
        assert_eq!(
            report.generated.url,
            "http://192.168.1.100:8000/instant-play.html?game_id=table5"
        );
        assert!(String::from_utf8(console).unwrap().contains(output::GAME_ID_PROMPT));
    }

    #[test]
    fn no_prompt_leaves_identifier_empty() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            output: Some(dir.path().join("plain.png")),
            ..Invocation::default()
        };
        let mut console: Vec<u8> = Vec::new();

        let report = run(
            &GeneratorOptions::default(),
            &invocation,
            &mut Cursor::new("ignored\n"),
            &mut console,
        )
        .unwrap();

        assert_eq!(report.game_id, "");
        assert_eq!(report.generated.url, GeneratorOptions::default().base_url);
    }

    #[test]
    fn verify_reads_back_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut invocation = invocation_in(dir.path(), &["B2", "300"]);
        invocation.verify = true;

        let report = run(
            &GeneratorOptions::default(),
            &invocation,
            &mut Cursor::new(""),
            &mut Vec::<u8>::new(),
        )
        .unwrap();

        assert!(report.verified);
        assert_eq!(report.generated.size, 300);
    }

    #[test]
    fn options_supply_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = GeneratorOptions {
            base_url: "https://subsoccer.app/instant-play.html?venue=7".to_string(),
            size: 320,
            default_filename: "venue.png".to_string(),
        };
        let invocation = invocation_in(dir.path(), &["T3"]);

        let report = run(&options, &invocation, &mut Cursor::new(""), &mut Vec::<u8>::new()).unwrap();

        assert_eq!(report.generated.size, 320);
        assert_eq!(
            report.generated.url,
            "https://subsoccer.app/instant-play.html?venue=7&game_id=T3"
        );
    }
}
