//! Tokenizer and value parsers for layout configuration strings.
//!
//! Splits on `&` and `=`, percent-decodes each side, and dispatches on the
//! lowercased key.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::request::LayoutRequest;
use crate::constraint::DeviceType;
use crate::orientation::DeviceOrientation;

/// Parse a configuration string into a request + warnings.
pub(crate) fn parse_query(query: &str) -> (LayoutRequest, Vec<ParseWarning>) {
    let mut req = LayoutRequest::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        dispatch_key(&key, &value, &mut req, &mut warnings);
    }

    if !warnings.is_empty() {
        log::debug!("layout query {query:?}: {} warning(s)", warnings.len());
    }
    (req, warnings)
}

fn dispatch_key(key: &str, value: &str, req: &mut LayoutRequest, warnings: &mut Vec<ParseWarning>) {
    match key {
        "w" | "width" => set_or_invalid(
            &mut req.width,
            parse_extent(value),
            "w",
            value,
            "expected a positive number of pixels",
            warnings,
        ),
        "h" | "height" => set_or_invalid(
            &mut req.height,
            parse_extent(value),
            "h",
            value,
            "expected a positive number of pixels",
            warnings,
        ),
        "cards" | "count" => set_or_invalid(
            &mut req.cards,
            parse_count(value),
            "cards",
            value,
            "expected a whole number of cards",
            warnings,
        ),
        "device" => set_or_invalid(
            &mut req.device,
            DeviceType::parse(value),
            "device",
            value,
            "expected mobile|phone|tablet|desktop",
            warnings,
        ),
        "orientation" => set_or_invalid(
            &mut req.orientation,
            DeviceOrientation::parse(value),
            "orientation",
            value,
            "expected portrait|landscape",
            warnings,
        ),
        "dpr" | "zoom" => set_or_invalid(
            &mut req.pixel_ratio,
            parse_dpr(value),
            "dpr",
            value,
            "expected a positive ratio such as 2 or 2x",
            warnings,
        ),
        "touch" => set_or_invalid(
            &mut req.touch,
            parse_bool(value),
            "touch",
            value,
            "expected true|false",
            warnings,
        ),
        "optimize" => set_or_invalid(
            &mut req.optimize,
            parse_bool(value),
            "optimize",
            value,
            "expected true|false",
            warnings,
        ),
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Set a field, warning on duplicate; warn and keep the old value when the
/// new one does not parse.
fn set_or_invalid<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &'static str,
    value: &str,
    reason: &'static str,
    warnings: &mut Vec<ParseWarning>,
) {
    match parsed {
        Some(v) => {
            if field.is_some() {
                warnings.push(ParseWarning::DuplicateKey {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
            *field = Some(v);
        }
        None => warnings.push(ParseWarning::ValueInvalid {
            key,
            value: String::from(value),
            reason,
        }),
    }
}

// ---- Value parsers ----

/// Container extent, optional trailing "px".
fn parse_extent(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s.strip_suffix("px").unwrap_or(s);
    s.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_count(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}

/// Parse DPR/zoom value, stripping trailing "x" suffix.
fn parse_dpr(s: &str) -> Option<f64> {
    let s = s.trim().trim_end_matches('x').trim_end_matches('X');
    s.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    // Accept strings copied straight from a URL.
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
