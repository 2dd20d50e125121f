//! String extensions
//!
//! Lengths and indices count grapheme clusters, so `"e\u{301}"` has length 1
//! and an emoji flag is a single character. Every index-taking method returns
//! `None` instead of panicking when the index falls outside the string.

use std::collections::HashMap;
use std::ops::Range;

use base64::Engine;
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use rand::distributions::Alphanumeric;
use rand::Rng;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Characters left alone by [`StrExt::url_encoded`]: the URL host set.
const URL_HOST: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Base used to validate relative references in [`StrExt::is_valid_url`].
static RELATIVE_BASE: Lazy<Option<Url>> = Lazy::new(|| Url::parse("http://localhost/").ok());

/// Convenience methods on string slices.
pub trait StrExt {
    /// Number of grapheme clusters.
    fn length(&self) -> usize;

    /// Grapheme clusters as string slices.
    fn graphemes_vec(&self) -> Vec<&str>;

    /// First grapheme cluster.
    fn first_character(&self) -> Option<&str>;

    /// Last grapheme cluster.
    fn last_character(&self) -> Option<&str>;

    /// Whether any scalar falls in a common emoji or pictograph block.
    fn contains_emoji(&self) -> bool;

    /// Whether at least one letter is present.
    fn has_letters(&self) -> bool;

    /// Whether at least one digit is present.
    fn has_numbers(&self) -> bool;

    /// Letters present and no digits.
    fn is_alphabetic_only(&self) -> bool;

    /// Only letters and digits, with at least one of each.
    fn is_alphanumeric_mix(&self) -> bool;

    /// Looks like an e-mail address.
    fn is_email(&self) -> bool;

    /// Whether `pattern` matches anywhere. Invalid patterns never match.
    fn matches_pattern(&self, pattern: &str) -> bool;

    /// Parses as an absolute URL or a relative reference.
    fn is_valid_url(&self) -> bool;

    /// Parses as an absolute URL with a scheme.
    fn is_valid_schemed_url(&self) -> bool;

    /// Absolute URL with the `https` scheme.
    fn is_valid_https_url(&self) -> bool;

    /// Absolute URL with the `http` scheme.
    fn is_valid_http_url(&self) -> bool;

    /// Absolute URL with the `file` scheme.
    fn is_valid_file_url(&self) -> bool;

    /// Parses as a decimal number with either `.` or `,` as separator.
    fn is_numeric(&self) -> bool;

    /// Non-empty and made of digits only.
    fn is_digits(&self) -> bool;

    /// Empty or whitespace only.
    fn is_whitespace_only(&self) -> bool;

    /// `true`/`1` or `false`/`0`, trimmed and case-insensitive.
    fn to_bool(&self) -> Option<bool>;

    /// Integer value.
    fn to_int(&self) -> Option<i64>;

    /// Decimal value using `decimal_separator` between the integer and
    /// fractional parts.
    fn to_float_with(&self, decimal_separator: char) -> Option<f64>;

    /// Date in `YYYY-MM-DD` form.
    fn to_date(&self) -> Option<NaiveDate>;

    /// Date and time in `YYYY-MM-DD HH:MM:SS` form.
    fn to_date_time(&self) -> Option<NaiveDateTime>;

    /// Date parsed with a `strftime` format. Date-only formats give midnight.
    fn to_date_with_format(&self, format: &str) -> Option<NaiveDateTime>;

    /// Absolute URL.
    fn to_url(&self) -> Option<Url>;

    /// Standard base64 of the UTF-8 bytes.
    fn base64_encoded(&self) -> String;

    /// Decoded base64, when the payload is valid UTF-8.
    fn base64_decoded(&self) -> Option<String>;

    /// `"sOme vAriable naMe"` becomes `"someVariableName"`.
    fn camel_cased(&self) -> String;

    /// Diacritics removed: `"Hèllö Wórld!"` becomes `"Hello World!"`.
    fn latinized(&self) -> String;

    /// Leading and trailing whitespace removed.
    fn trimmed(&self) -> &str;

    /// Spaces and newlines removed everywhere.
    fn without_spaces_and_newlines(&self) -> String;

    /// Percent-encoded for use in a URL host.
    fn url_encoded(&self) -> String;

    /// Percent-decoded, or unchanged when the result is not UTF-8.
    fn url_decoded(&self) -> String;

    /// Lowercase, latinized, dash-separated slug.
    fn to_slug(&self) -> String;

    /// Grapheme clusters in reverse order.
    fn reversed(&self) -> String;

    /// First `length` characters followed by `trailing`, when longer than
    /// `length`.
    fn truncated(&self, length: usize, trailing: Option<&str>) -> String;

    /// Most frequent character, ignoring spaces and newlines. Ties go to the
    /// character seen first.
    fn most_common_character(&self) -> Option<String>;

    /// Unicode scalar values.
    fn unicode_array(&self) -> Vec<u32>;

    /// Words split on whitespace and punctuation.
    fn words(&self) -> Vec<&str>;

    /// Number of [`words`](Self::words).
    fn word_count(&self) -> usize;

    /// Character at `index`.
    fn char_at(&self, index: usize) -> Option<&str>;

    /// Characters in the half-open `range`.
    fn substring(&self, range: Range<usize>) -> Option<&str>;

    /// `length` characters from `from`, clamped to the end of the string.
    ///
    /// ```
    /// use gn_text::StrExt;
    /// assert_eq!("Hello World".slicing(6, 5), Some("World"));
    /// assert_eq!("Hello World".slicing(6, 50), Some("World"));
    /// assert_eq!("Hello World".slicing(11, 1), None);
    /// ```
    fn slicing(&self, from: usize, length: usize) -> Option<&str>;

    /// Characters from `start` up to `end`.
    fn slice_from_to(&self, start: usize, end: usize) -> Option<&str>;

    /// Characters from `index` to the end.
    fn slice_at(&self, index: usize) -> Option<&str>;

    /// Prefix check with optional case folding.
    fn starts_with_ci(&self, prefix: &str, case_sensitive: bool) -> bool;

    /// Suffix check with optional case folding.
    fn ends_with_ci(&self, suffix: &str, case_sensitive: bool) -> bool;

    /// Left-pad to `length` characters by cycling `pad`.
    fn padding_start(&self, length: usize, pad: &str) -> String;

    /// Right-pad to `length` characters by cycling `pad`.
    fn padding_end(&self, length: usize, pad: &str) -> String;
}

impl StrExt for str {
    fn length(&self) -> usize {
        self.graphemes(true).count()
    }

    fn graphemes_vec(&self) -> Vec<&str> {
        self.graphemes(true).collect()
    }

    fn first_character(&self) -> Option<&str> {
        self.graphemes(true).next()
    }

    fn last_character(&self) -> Option<&str> {
        self.graphemes(true).next_back()
    }

    fn contains_emoji(&self) -> bool {
        self.chars().any(|c| {
            matches!(
                c as u32,
                0x3030 | 0x00AE | 0x00A9
                    | 0x1D000..=0x1F77F
                    | 0x2100..=0x27BF
                    | 0xFE00..=0xFE0F
                    | 0x1F900..=0x1F9FF
            )
        })
    }

    fn has_letters(&self) -> bool {
        self.chars().any(char::is_alphabetic)
    }

    fn has_numbers(&self) -> bool {
        self.chars().any(char::is_numeric)
    }

    fn is_alphabetic_only(&self) -> bool {
        self.has_letters() && !self.has_numbers()
    }

    fn is_alphanumeric_mix(&self) -> bool {
        self.chars().all(char::is_alphanumeric) && self.has_letters() && self.has_numbers()
    }

    fn is_email(&self) -> bool {
        EMAIL.is_match(self)
    }

    fn matches_pattern(&self, pattern: &str) -> bool {
        match Regex::new(pattern) {
            Ok(re) => re.is_match(self),
            Err(e) => {
                tracing::debug!(pattern, error = %e, "Invalid pattern");
                false
            }
        }
    }

    fn is_valid_url(&self) -> bool {
        if self.is_empty() || self.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }
        Url::parse(self).is_ok()
            || RELATIVE_BASE
                .as_ref()
                .is_some_and(|base| base.join(self).is_ok())
    }

    fn is_valid_schemed_url(&self) -> bool {
        self.to_url().is_some()
    }

    fn is_valid_https_url(&self) -> bool {
        self.to_url().is_some_and(|url| url.scheme() == "https")
    }

    fn is_valid_http_url(&self) -> bool {
        self.to_url().is_some_and(|url| url.scheme() == "http")
    }

    fn is_valid_file_url(&self) -> bool {
        self.to_url().is_some_and(|url| url.scheme() == "file")
    }

    fn is_numeric(&self) -> bool {
        self.to_float_with('.').is_some() || self.to_float_with(',').is_some()
    }

    fn is_digits(&self) -> bool {
        !self.is_empty() && self.chars().all(char::is_numeric)
    }

    fn is_whitespace_only(&self) -> bool {
        self.trim().is_empty()
    }

    fn to_bool(&self) -> Option<bool> {
        match self.trim().to_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    fn to_int(&self) -> Option<i64> {
        self.parse().ok()
    }

    fn to_float_with(&self, decimal_separator: char) -> Option<f64> {
        let text = self.trim();
        let plain = text.chars().all(|c| {
            c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E') || c == decimal_separator
        });
        if text.is_empty() || !plain || !text.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        text.replace(decimal_separator, ".").parse().ok()
    }

    fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d").ok()
    }

    fn to_date_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.trim(), "%Y-%m-%d %H:%M:%S").ok()
    }

    fn to_date_with_format(&self, format: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self, format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(self, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }

    fn to_url(&self) -> Option<Url> {
        Url::parse(self).ok()
    }

    fn base64_encoded(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.as_bytes())
    }

    fn base64_decoded(&self) -> Option<String> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(self).ok()?;
        String::from_utf8(bytes).ok()
    }

    fn camel_cased(&self) -> String {
        let source = self.to_lowercase();
        let Some(first) = source.graphemes(true).next() else {
            return String::new();
        };
        if !source.contains(' ') {
            return source;
        }

        let mut out = String::with_capacity(source.len());
        out.push_str(first);
        let mut upper_next = first.chars().all(char::is_whitespace);
        for c in source[first.len()..].chars() {
            if c.is_whitespace() {
                upper_next = true;
                if c != ' ' && c != '\n' {
                    out.push(c);
                }
            } else if upper_next {
                out.extend(c.to_uppercase());
                upper_next = false;
            } else {
                out.push(c);
            }
        }
        out
    }

    fn latinized(&self) -> String {
        self.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
    }

    fn trimmed(&self) -> &str {
        self.trim()
    }

    fn without_spaces_and_newlines(&self) -> String {
        self.chars().filter(|c| *c != ' ' && *c != '\n').collect()
    }

    fn url_encoded(&self) -> String {
        utf8_percent_encode(self, URL_HOST).to_string()
    }

    fn url_decoded(&self) -> String {
        match percent_decode_str(self).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => self.to_string(),
        }
    }

    fn to_slug(&self) -> String {
        let dashed = self.to_lowercase().latinized().replace(' ', "-");
        let filtered: String = dashed
            .chars()
            .filter(|c| *c == '-' || *c == '&' || c.is_alphanumeric())
            .collect();
        filtered.trim_matches('-').replace("--", "-")
    }

    fn reversed(&self) -> String {
        self.graphemes(true).rev().collect()
    }

    fn truncated(&self, length: usize, trailing: Option<&str>) -> String {
        if length == 0 {
            return self.to_string();
        }
        match byte_offset(self, length) {
            Some(end) if end < self.len() => format!("{}{}", &self[..end], trailing.unwrap_or("")),
            _ => self.to_string(),
        }
    }

    fn most_common_character(&self) -> Option<String> {
        let stripped = self.without_spaces_and_newlines();
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, grapheme) in stripped.graphemes(true).enumerate() {
            counts.entry(grapheme).or_insert((0, position)).0 += 1;
        }
        counts
            .into_iter()
            .max_by(|(_, (a, pa)), (_, (b, pb))| a.cmp(b).then(pb.cmp(pa)))
            .map(|(grapheme, _)| grapheme.to_string())
    }

    fn unicode_array(&self) -> Vec<u32> {
        self.chars().map(u32::from).collect()
    }

    fn words(&self) -> Vec<&str> {
        self.split(|c: char| c.is_whitespace() || is_punctuation(c))
            .filter(|word| !word.is_empty())
            .collect()
    }

    fn word_count(&self) -> usize {
        self.words().len()
    }

    fn char_at(&self, index: usize) -> Option<&str> {
        self.graphemes(true).nth(index)
    }

    fn substring(&self, range: Range<usize>) -> Option<&str> {
        if range.start > range.end {
            return None;
        }
        let start = byte_offset(self, range.start)?;
        let len = byte_offset(&self[start..], range.end - range.start)?;
        Some(&self[start..start + len])
    }

    fn slicing(&self, from: usize, length: usize) -> Option<&str> {
        let count = self.length();
        if from >= count {
            return None;
        }
        match from.checked_add(length) {
            Some(end) if end <= count => self.substring(from..end),
            _ => self.substring(from..count),
        }
    }

    fn slice_from_to(&self, start: usize, end: usize) -> Option<&str> {
        if end < start {
            return None;
        }
        self.substring(start..end)
    }

    fn slice_at(&self, index: usize) -> Option<&str> {
        let count = self.length();
        if index >= count {
            return None;
        }
        self.substring(index..count)
    }

    fn starts_with_ci(&self, prefix: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.starts_with(prefix)
        } else {
            self.to_lowercase().starts_with(&prefix.to_lowercase())
        }
    }

    fn ends_with_ci(&self, suffix: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.ends_with(suffix)
        } else {
            self.to_lowercase().ends_with(&suffix.to_lowercase())
        }
    }

    fn padding_start(&self, length: usize, pad: &str) -> String {
        match padding(self, length, pad) {
            Some(padding) => padding + self,
            None => self.to_string(),
        }
    }

    fn padding_end(&self, length: usize, pad: &str) -> String {
        match padding(self, length, pad) {
            Some(padding) => format!("{self}{padding}"),
            None => self.to_string(),
        }
    }
}

/// Random string of `length` characters drawn from `[a-zA-Z0-9]`.
pub fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Byte offset of the `n`th grapheme; `Some(len)` for `n == count`.
fn byte_offset(s: &str, n: usize) -> Option<usize> {
    s.grapheme_indices(true)
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()))
        .nth(n)
}

fn padding(s: &str, length: usize, pad: &str) -> Option<String> {
    let count = s.length();
    if count >= length || pad.is_empty() {
        return None;
    }
    Some(pad.graphemes(true).cycle().take(length - count).collect())
}

fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '!' | '"' | '#' | '%' | '&' | '\'' | '(' | ')' | '*' | ',' | '-' | '.' | '/' | ':' | ';'
            | '?' | '@' | '[' | '\\' | ']' | '_' | '{' | '}'
            | '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}'
            | '\u{00BF}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{FF01}'..='\u{FF0F}'
            | '\u{FF1A}' | '\u{FF1B}' | '\u{FF1F}'
    )
}
