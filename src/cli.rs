//! Positional argument grammar
//!
//! ```text
//! positionals := ε | URL [ID [SIZE]] | ID [SIZE]
//! URL         := token beginning with "http"
//! SIZE        := positive decimal integer
//! ```
//!
//! Any first token beginning with `http` is taken as the base URL, including
//! identifiers that happen to start that way. The `--game-id` flag is the
//! unambiguous alternative.

use crate::error::{Error, Result};

/// Prefix marking a positional token as a base URL override.
pub const URL_PREFIX: &str = "http";

/// Values supplied positionally, each tagged by its grammar role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positionals {
    /// Base URL override
    pub base_url: Option<String>,
    /// Table identifier
    pub game_id: Option<String>,
    /// Image edge length in pixels
    pub size: Option<u32>,
}

impl Positionals {
    /// Classify positional tokens according to the grammar above.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        match *args.as_slice() {
            [] => Ok(Self::default()),
            [url, ref rest @ ..] if is_url(url) => match *rest {
                [] => Ok(Self::with(Some(url), None, None)),
                [id] => Ok(Self::with(Some(url), Some(id), None)),
                [id, size] => Ok(Self::with(Some(url), Some(id), Some(parse_size(size)?))),
                [_, _, extra, ..] => Err(unexpected(extra, "URL [GAME_ID [SIZE]]")),
            },
            [id] => Ok(Self::with(None, Some(id), None)),
            [id, size] => Ok(Self::with(None, Some(id), Some(parse_size(size)?))),
            [_, _, extra, ..] => Err(unexpected(extra, "GAME_ID [SIZE]")),
        }
    }

    fn with(base_url: Option<&str>, game_id: Option<&str>, size: Option<u32>) -> Self {
        Self {
            base_url: base_url.map(str::to_string),
            game_id: game_id.map(str::to_string),
            size,
        }
    }
}

/// Whether a positional token is read as a base URL.
pub fn is_url(token: &str) -> bool {
    token.starts_with(URL_PREFIX)
}

/// Parse a pixel size; zero and non-numeric values are rejected.
pub fn parse_size(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(Error::InvalidSize(value.to_string())),
        Ok(size) => Ok(size),
    }
}

/// [`parse_size`] shaped as a clap `value_parser`.
pub fn parse_size_arg(value: &str) -> std::result::Result<u32, String> {
    parse_size(value).map_err(|e| e.to_string())
}

fn unexpected(token: &str, form: &str) -> Error {
    Error::Usage(format!("unexpected argument '{token}', expected {form}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let empty: [&str; 0] = [];
        assert_eq!(Positionals::parse(&empty).unwrap(), Positionals::default());
    }

    #[test]
    fn test_url_only() {
        let parsed = Positionals::parse(&["https://subsoccer.app/instant-play.html"]).unwrap();
        assert_eq!(
            parsed.base_url.as_deref(),
            Some("https://subsoccer.app/instant-play.html")
        );
        assert_eq!(parsed.game_id, None);
        assert_eq!(parsed.size, None);
    }

    #[test]
    fn test_url_id_size() {
        let parsed =
            Positionals::parse(&["https://subsoccer.app/instant-play.html", "table9", "600"])
                .unwrap();
        assert_eq!(parsed.game_id.as_deref(), Some("table9"));
        assert_eq!(parsed.size, Some(600));
    }

    #[test]
    fn test_id_shortcut() {
        let parsed = Positionals::parse(&["A1"]).unwrap();
        assert_eq!(parsed.base_url, None);
        assert_eq!(parsed.game_id.as_deref(), Some("A1"));

        let parsed = Positionals::parse(&["B2", "300"]).unwrap();
        assert_eq!(parsed.game_id.as_deref(), Some("B2"));
        assert_eq!(parsed.size, Some(300));
    }

    #[test]
    fn test_http_prefixed_identifier_is_a_url() {
        let parsed = Positionals::parse(&["httpTable", "7"]).unwrap();
        assert_eq!(parsed.base_url.as_deref(), Some("httpTable"));
        assert_eq!(parsed.game_id.as_deref(), Some("7"));
        assert_eq!(parsed.size, None);
    }

    #[test]
    fn test_bad_sizes() {
        assert!(matches!(
            Positionals::parse(&["B2", "big"]),
            Err(Error::InvalidSize(_))
        ));
        assert!(matches!(
            Positionals::parse(&["http://a.test", "t1", "0"]),
            Err(Error::InvalidSize(_))
        ));
        assert!(matches!(parse_size("-3"), Err(Error::InvalidSize(_))));
        assert_eq!(parse_size(" 250 ").unwrap(), 250);
    }

    #[test]
    fn test_size_arg_reports_message() {
        assert_eq!(parse_size_arg("640"), Ok(640));
        let err = parse_size_arg("0").unwrap_err();
        assert!(err.contains("Invalid size '0'"), "{err}");
    }

    #[test]
    fn test_extra_tokens_rejected() {
        assert!(matches!(
            Positionals::parse(&["B2", "300", "extra"]),
            Err(Error::Usage(_))
        ));
        assert!(matches!(
            Positionals::parse(&["http://a.test", "t1", "300", "extra"]),
            Err(Error::Usage(_))
        ));
    }
}
