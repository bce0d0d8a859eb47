//! Instant play link construction
//!
//! The identifier is appended verbatim as the `game_id` query parameter; no
//! percent-encoding is applied, so callers must supply query-safe values.

/// Query parameter carrying the table identifier.
pub const GAME_ID_PARAM: &str = "game_id";

/// Filename used when no identifier was supplied.
pub const DEFAULT_FILENAME: &str = "subsoccer_instant_play_qr.png";

/// Build the final instant play URL for an optional table identifier.
///
/// An empty identifier returns `base_url` unchanged. Otherwise the parameter
/// is joined with `&` when the base already carries a query string and with
/// `?` when it does not.
pub fn instant_play_url(base_url: &str, game_id: &str) -> String {
    if game_id.is_empty() {
        return base_url.to_string();
    }

    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{GAME_ID_PARAM}={game_id}")
}

/// Output filename for a table: `qr_<id>.png`, or `default_filename` without an id.
pub fn output_filename(game_id: &str, default_filename: &str) -> String {
    if game_id.is_empty() {
        default_filename.to_string()
    } else {
        format!("qr_{game_id}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://192.168.1.100:8000/instant-play.html";

    #[test]
    fn test_empty_id_keeps_base_url() {
        assert_eq!(instant_play_url(BASE, ""), BASE);
        assert_eq!(
            instant_play_url("https://x.test/p?lang=fi", ""),
            "https://x.test/p?lang=fi"
        );
    }

    #[test]
    fn test_question_mark_separator() {
        assert_eq!(
            instant_play_url(BASE, "table5"),
            "http://192.168.1.100:8000/instant-play.html?game_id=table5"
        );
    }

    #[test]
    fn test_ampersand_separator_when_query_present() {
        let url = instant_play_url("https://subsoccer.app/play?lang=fi", "A1");
        assert_eq!(url, "https://subsoccer.app/play?lang=fi&game_id=A1");
        assert_eq!(url.matches('?').count(), 1);
    }

    #[test]
    fn test_identifier_is_not_escaped() {
        assert_eq!(
            instant_play_url("https://a.test/", "x y&z"),
            "https://a.test/?game_id=x y&z"
        );
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("", DEFAULT_FILENAME), DEFAULT_FILENAME);
        assert_eq!(output_filename("table9", DEFAULT_FILENAME), "qr_table9.png");
        assert_eq!(output_filename("B2", "custom.png"), "qr_B2.png");
    }
}
