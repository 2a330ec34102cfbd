//! Helper function library exposed to templates.
//!
//! The plain functions are engine-independent; the `*_filter` wrappers adapt
//! them to Tera's filter signature.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use declgen_core::domain::{DomainError, DomainResult};

/// Runs of anything that is not a hex digit collapse to one underscore.
static NON_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9A-Fa-f]+").expect("non-hex pattern is valid"));

/// Trim whitespace and mustache braces from both ends.
///
/// `" {{{ EXTERNAL_ADDRESS }}}"` becomes `"EXTERNAL_ADDRESS"`.
pub fn strip_markers(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '{' || c == '}')
}

/// Remove trailing CR/LF characters only.
pub fn chomp(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}

/// Serialize `value` as YAML; null becomes the empty string.
///
/// Multi-line strings come out double-quoted on one line. A block scalar
/// would be indented from column 0 and break when spliced in after a nested
/// key.
pub fn to_yaml(value: &Value) -> Result<String, serde_yaml::Error> {
    match value {
        Value::Null => Ok(String::new()),
        // a JSON string literal is also a valid YAML double-quoted scalar
        Value::String(s) if s.contains(['\n', '\r']) => Ok(format!("{value}\n")),
        _ => serde_yaml::to_string(value),
    }
}

/// Derive an AS3-safe virtual server name from an address or CIDR block.
///
/// Plain addresses get their host prefix length appended (`_32` or `_128`);
/// CIDR blocks are reduced to their network address.
pub fn vip_identifier(text: &str) -> DomainResult<String> {
    let invalid = |reason: &str| DomainError::InvalidAddress {
        value: text.to_string(),
        reason: reason.to_string(),
    };

    let canonical = match text.split_once('/') {
        Some((address, prefix)) => {
            let address: IpAddr = address
                .parse()
                .map_err(|_| invalid("invalid CIDR address"))?;
            let prefix = parse_prefix(prefix, max_prefix(&address))
                .ok_or_else(|| invalid("invalid CIDR prefix length"))?;
            format!("{}/{}", network_address(address, prefix), prefix)
        }
        None => {
            let address: IpAddr = text.parse().map_err(|_| invalid("invalid IP address"))?;
            match address {
                IpAddr::V4(v4) => format!("{}_32", v4),
                IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                    Some(v4) => format!("{}_32", v4),
                    None => format!("{}_128", v6),
                },
            }
        }
    };

    Ok(format!("vip_{}", NON_HEX.replace_all(&canonical, "_")))
}

/// Prefix every line with `spaces` spaces, after a leading newline.
///
/// Blank lines stay blank; trailing newlines are dropped.
pub fn nindent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    let mut out = String::with_capacity(text.len() + spaces * 8);
    for line in text.lines() {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
    }
    out
}

fn max_prefix(address: &IpAddr) -> u8 {
    match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

fn parse_prefix(text: &str, max: u8) -> Option<u8> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u8>().ok().filter(|p| *p <= max)
}

fn network_address(address: IpAddr, prefix: u8) -> IpAddr {
    match address {
        IpAddr::V4(v4) => {
            let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
            IpAddr::V4((u32::from(v4) & mask).into())
        }
        IpAddr::V6(v6) => {
            let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
            IpAddr::V6((u128::from(v6) & mask).into())
        }
    }
}

// ── Tera filters ──────────────────────────────────────────────────────────────

type Args = HashMap<String, Value>;

fn string_arg<'a>(filter: &str, value: &'a Value) -> tera::Result<&'a str> {
    value.as_str().ok_or_else(|| {
        tera::Error::msg(format!(
            "filter `{}` expects a string, got {}",
            filter, value
        ))
    })
}

pub fn strip_markers_filter(value: &Value, _: &Args) -> tera::Result<Value> {
    Ok(Value::String(
        strip_markers(string_arg("strip_markers", value)?).to_string(),
    ))
}

pub fn chomp_filter(value: &Value, _: &Args) -> tera::Result<Value> {
    Ok(Value::String(chomp(string_arg("chomp", value)?).to_string()))
}

pub fn to_yaml_filter(value: &Value, _: &Args) -> tera::Result<Value> {
    to_yaml(value)
        .map(Value::String)
        .map_err(|e| tera::Error::chain("filter `to_yaml` failed to serialize value", e))
}

pub fn vip_identifier_filter(value: &Value, _: &Args) -> tera::Result<Value> {
    vip_identifier(string_arg("vip_identifier", value)?)
        .map(Value::String)
        .map_err(|e| tera::Error::chain("filter `vip_identifier` failed", e))
}

pub fn nindent_filter(value: &Value, args: &Args) -> tera::Result<Value> {
    let spaces = args
        .get("spaces")
        .and_then(Value::as_u64)
        .ok_or_else(|| tera::Error::msg("filter `nindent` requires an integer `spaces` argument"))?;
    Ok(Value::String(nindent(
        string_arg("nindent", value)?,
        spaces as usize,
    )))
}

/// Register every helper filter on `tera`.
pub fn register(tera: &mut tera::Tera) {
    tera.register_filter("strip_markers", strip_markers_filter);
    tera.register_filter("chomp", chomp_filter);
    tera.register_filter("to_yaml", to_yaml_filter);
    tera.register_filter("vip_identifier", vip_identifier_filter);
    tera.register_filter("nindent", nindent_filter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strip_markers_trims_braces_and_space() {
        assert_eq!(strip_markers(" {{{ test }}}"), "test");
        assert_eq!(strip_markers("{ test }"), "test");
        assert_eq!(strip_markers("{{ test }}\n"), "test");
        assert_eq!(strip_markers("test"), "test");
        assert_eq!(strip_markers("{{ a b }}"), "a b");
        assert_eq!(strip_markers(""), "");
    }

    #[test]
    fn chomp_only_trims_trailing_newlines() {
        assert_eq!(chomp("test\r\n"), "test");
        assert_eq!(chomp("test\n\n"), "test");
        assert_eq!(chomp("  test\n"), "  test");
        assert_eq!(chomp("a\nb\n"), "a\nb");
        assert_eq!(chomp("test  "), "test  ");
    }

    #[test]
    fn to_yaml_of_null_is_empty() {
        assert_eq!(to_yaml(&Value::Null).unwrap(), "");
    }

    #[test]
    fn to_yaml_serializes_structures() {
        assert_eq!(to_yaml(&json!("plain")).unwrap(), "plain\n");
        assert_eq!(to_yaml(&json!(["a", "b"])).unwrap(), "- a\n- b\n");
        assert_eq!(to_yaml(&json!({"k": 1})).unwrap(), "k: 1\n");

        // markers must survive as a string, not become a flow mapping
        let quoted = to_yaml(&json!("{{{ ADMIN_PASSWORD }}}")).unwrap();
        let back: String = serde_yaml::from_str(&quoted).unwrap();
        assert_eq!(back, "{{{ ADMIN_PASSWORD }}}");
    }

    #[test]
    fn to_yaml_keeps_multiline_strings_on_one_line() {
        let text = to_yaml(&json!("first\nsecond\r\n")).unwrap();
        assert_eq!(text, "\"first\\nsecond\\r\\n\"\n");

        let nested = format!("outer:\n  label: {}\n", chomp(&text));
        let doc: serde_yaml::Value = serde_yaml::from_str(&nested).unwrap();
        assert_eq!(doc["outer"]["label"].as_str(), Some("first\nsecond\r\n"));
    }

    #[test]
    fn vip_identifier_cases() {
        let cases = [
            ("10.0.10.10", "vip_10_0_10_10_32"),
            ("10.0.10.10/32", "vip_10_0_10_10_32"),
            ("10.0.10.10/24", "vip_10_0_10_0_24"),
            ("0.0.0.0/0", "vip_0_0_0_0_0"),
            ("2001:cafe::10", "vip_2001_cafe_10_128"),
            ("2001:cafe::10/128", "vip_2001_cafe_10_128"),
            ("2001:cafe::10/64", "vip_2001_cafe_64"),
        ];
        for (input, expected) in cases {
            assert_eq!(vip_identifier(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn vip_identifier_rejects_garbage() {
        for input in ["", "500.400.300.200", "10.0.0.1/33", "10.0.0.1/", "10.0.0.1/+8", "bigip"] {
            assert!(
                matches!(
                    vip_identifier(input),
                    Err(DomainError::InvalidAddress { ref value, .. }) if value == input
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn nindent_prefixes_lines() {
        assert_eq!(nindent("a: 1\nb: 2\n", 2), "\n  a: 1\n  b: 2");
        assert_eq!(nindent("a\n\nb", 4), "\n    a\n\n    b");
        assert_eq!(nindent("", 4), "");
    }

    #[test]
    fn filters_reject_non_strings() {
        assert!(chomp_filter(&json!(1), &Args::new()).is_err());
        assert!(nindent_filter(&json!("x"), &Args::new()).is_err());
        assert_eq!(
            nindent_filter(
                &json!("x"),
                &Args::from([("spaces".to_string(), json!(2))])
            )
            .unwrap(),
            json!("\n  x")
        );
    }
}
