use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::credential::AccessCredential;

const KEY_PLACEHOLDER: &str = "${key}";
const TIMESTAMP_PLACEHOLDER: &str = "${timestamp}";

/// Fill the presentation template with a credential and its issuance time.
///
/// Only the first occurrence of each placeholder is replaced. Key text is
/// never scanned for placeholders.
pub fn render_key_page(
    template: &str,
    credential: &AccessCredential,
    issued_at: DateTime<Utc>,
) -> String {
    let timestamp = issued_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    template
        .replacen(TIMESTAMP_PLACEHOLDER, &timestamp, 1)
        .replacen(KEY_PLACEHOLDER, &escape_html(credential.as_str()), 1)
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_render_fills_placeholders() {
        let template = "<p>${key}</p><small>${timestamp}</small>";
        let page = render_key_page(template, &AccessCredential::new("KEY-42"), issued_at());

        assert_eq!(
            page,
            "<p>KEY-42</p><small>2026-03-01T12:30:45.000Z</small>"
        );
    }

    #[test]
    fn test_render_replaces_first_occurrence_only() {
        let template = "${key} ${key}";
        let page = render_key_page(template, &AccessCredential::new("K"), issued_at());

        assert_eq!(page, "K ${key}");
    }

    #[test]
    fn test_render_escapes_key() {
        let page = render_key_page(
            "${key}",
            &AccessCredential::new("<script>\"x\"</script>"),
            issued_at(),
        );

        assert_eq!(page, "&lt;script&gt;&quot;x&quot;&lt;/script&gt;");
    }

    #[test]
    fn test_key_text_is_not_treated_as_placeholder() {
        let page = render_key_page(
            "${key}|${timestamp}",
            &AccessCredential::new("${timestamp}"),
            issued_at(),
        );

        assert_eq!(page, "${timestamp}|2026-03-01T12:30:45.000Z");
    }

    #[test]
    fn test_render_without_placeholders() {
        let page = render_key_page("static", &AccessCredential::new("K"), issued_at());
        assert_eq!(page, "static");
    }
}
