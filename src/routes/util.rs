//! Shared URL/form parsing and HTML helpers for panel route handlers.

/// Parse a URL-encoded form body into key-value pairs.
/// Handles `key=value&key2=value2` format (from HTMX POST bodies).
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let val = parts.next().unwrap_or("");
            Some((percent_decode(key), percent_decode(val)))
        })
        .collect()
}

/// Percent-decode a URL-encoded value.
///
/// Decodes into raw bytes first and converts once at the end: multi-byte
/// UTF-8 sequences (deity names are free text) arrive as one `%XX` escape
/// per byte and must not be widened byte-by-byte.
pub fn percent_decode(input: &str) -> String {
    let mut bytes = Vec::with_capacity(input.len());
    let mut iter = input.bytes();
    while let Some(b) = iter.next() {
        if b == b'%' {
            let hi = iter.next().unwrap_or(b'0');
            let lo = iter.next().unwrap_or(b'0');
            let hex = [hi, lo];
            if let Ok(s) = core::str::from_utf8(&hex) {
                if let Ok(val) = u8::from_str_radix(s, 16) {
                    bytes.push(val);
                    continue;
                }
            }
            bytes.push(b'%');
            bytes.push(hi);
            bytes.push(lo);
        } else if b == b'+' {
            bytes.push(b' ');
        } else {
            bytes.push(b);
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Parse a query string into key-value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let q = query.strip_prefix('?').unwrap_or(query);
    parse_form_body(q)
}

/// Helper to get a value by key from a list of key-value pairs.
pub fn get_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Upstream HTTP status forwarded by the bridge in the `status` query param.
/// Absent or unparsable counts as 0 — the network-level failure marker.
pub fn get_status(params: &[(String, String)]) -> u16 {
    get_param(params, "status")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Percent-encode a value for a query-string slot. Phone numbers start with
/// `+`, which form decoding would otherwise turn into a space.
pub fn percent_encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(b as char)
            }
            _ => result.push_str(&format!("%{:02X}", b)),
        }
    }
    result
}

/// Escape a user-sourced string for interpolation into an HTML fragment.
pub fn html_escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_body_works() {
        let pairs = parse_form_body("name=Helios&phone=%2B15551234");
        assert_eq!(pairs.len(), 2);
        assert_eq!(get_param(&pairs, "name"), Some("Helios"));
        assert_eq!(get_param(&pairs, "phone"), Some("+15551234"));
    }

    #[test]
    fn parse_form_body_empty() {
        let pairs = parse_form_body("");
        assert!(pairs.is_empty());
    }

    #[test]
    fn percent_decode_plus_as_space() {
        assert_eq!(percent_decode("war+god"), "war god");
    }

    #[test]
    fn percent_decode_hex() {
        assert_eq!(percent_decode("war%20god"), "war god");
    }

    #[test]
    fn percent_decode_multibyte_utf8() {
        assert_eq!(percent_decode("H%C3%A9lios"), "Hélios");
        assert_eq!(percent_decode("war+god+%E2%9A%A1"), "war god ⚡");
    }

    #[test]
    fn parse_query_strips_prefix() {
        let pairs = parse_query("?phone=%2B1555&status=200");
        assert_eq!(get_param(&pairs, "phone"), Some("+1555"));
    }

    #[test]
    fn status_param_parses() {
        let pairs = parse_query("?status=404");
        assert_eq!(get_status(&pairs), 404);
    }

    #[test]
    fn missing_or_bad_status_is_zero() {
        assert_eq!(get_status(&parse_query("")), 0);
        assert_eq!(get_status(&parse_query("?status=abc")), 0);
    }

    #[test]
    fn percent_encode_roundtrips_phone_numbers() {
        let encoded = percent_encode("+15551234");
        assert_eq!(encoded, "%2B15551234");
        assert_eq!(percent_decode(&encoded), "+15551234");
    }

    #[test]
    fn html_escape_covers_markup_chars() {
        assert_eq!(
            html_escape(r#"<b>"War & Peace"</b>'s"#),
            "&lt;b&gt;&quot;War &amp; Peace&quot;&lt;/b&gt;&#39;s"
        );
        assert_eq!(html_escape("Ares"), "Ares");
    }
}
