//! Helpers for rendering the generation report

use crate::driver::Report;
use serde_json::{Value, json};

const RULE_WIDTH: usize = 60;

/// Prompt shown when no table identifier was given.
pub const GAME_ID_PROMPT: &str = "Enter Game ID (press Enter to skip): ";

/// Combined structured and human-readable representation of a report
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// Structured JSON representation suitable for scripts
    pub json: Value,
    /// Human-readable lines for terminal presentation
    pub human: Vec<String>,
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title block printed at startup.
pub fn banner() -> Vec<String> {
    vec![
        rule(),
        "SUBSOCCER INSTANT PLAY - QR CODE GENERATOR".to_string(),
        rule(),
        String::new(),
    ]
}

/// Hint printed right before the identifier prompt.
pub fn prompt_tip() -> &'static str {
    "Tip: You can add a unique Table ID/Name."
}

/// Lines announcing the start of generation.
pub fn generating(url: &str) -> Vec<String> {
    vec![
        "Generating Subsoccer Instant Play QR Code...".to_string(),
        format!("URL: {url}"),
    ]
}

/// Render a finished report into both JSON and human-readable forms.
pub fn render_report(report: &Report) -> RenderedReport {
    let generated = &report.generated;
    let game_id = (!report.game_id.is_empty()).then_some(report.game_id.as_str());

    let json = json!({
        "url": generated.url,
        "game_id": game_id,
        "output": generated.output.display().to_string(),
        "size": generated.size,
        "qr_version": generated.qr_version,
        "ecc_level": generated.ecc_level,
        "verified": report.verified,
    });

    let mut human = vec![
        format!("QR code saved: {}", generated.output.display()),
        format!("Size: {0}x{0}px", generated.size),
    ];
    if report.verified {
        human.push("Verified: image decodes to the encoded URL".to_string());
    }
    human.push(String::new());
    human.push("Ready to print! Use this for your table stickers.".to_string());
    human.push(String::new());
    human.extend(next_steps());

    RenderedReport { json, human }
}

/// Fixed printing instructions shown after a successful run.
pub fn next_steps() -> Vec<String> {
    let mut lines = vec![rule(), "NEXT STEPS:".to_string(), rule()];
    lines.extend(
        [
            "1. Open the QR code image",
            "2. Print on sticker paper or laminate",
            "3. Place on Subsoccer table",
            "4. Players scan and play instantly!",
        ]
        .map(String::from),
    );
    lines.push(String::new());
    lines
}
