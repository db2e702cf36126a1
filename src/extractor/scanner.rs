use std::sync::LazyLock;

use regex::Regex;

static MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:#|//|--|;)\s*)?\[([A-Za-z0-9_.\-]+)\]\s*(.*)$").ok()
});

static KEY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:^|[\s,;])([A-Za-z_][A-Za-z0-9_]*):").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkedLine<'a> {
    pub label: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPair<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

pub fn match_marker(line: &str) -> Option<MarkedLine<'_>> {
    let captures = MARKER.as_ref()?.captures(line)?;
    Some(MarkedLine {
        label: captures.get(1)?.as_str(),
        body: captures.get(2)?.as_str(),
    })
}

/// Splits `key: value` pairs. A value runs up to the next key or the end of
/// the body; values that clean up to nothing are still returned, empty.
pub fn split_pairs(body: &str) -> Vec<RawPair<'_>> {
    let Some(key_pattern) = KEY.as_ref() else {
        return Vec::new();
    };

    let keys: Vec<(&str, usize, usize)> = key_pattern
        .captures_iter(body)
        .filter_map(|captures| {
            let key = captures.get(1)?;
            let whole = captures.get(0)?;
            Some((key.as_str(), key.start(), whole.end()))
        })
        .collect();

    keys.iter()
        .enumerate()
        .map(|(index, (key, _, value_start))| {
            let value_end = keys
                .get(index + 1)
                .map_or(body.len(), |(_, next_key_start, _)| *next_key_start);
            RawPair {
                key,
                value: clean_value(&body[*value_start..value_end]),
            }
        })
        .collect()
}

fn clean_value(raw: &str) -> &str {
    let trimmed = raw
        .trim()
        .trim_end_matches([',', ';'])
        .trim_end();
    strip_quotes(trimmed).trim()
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
