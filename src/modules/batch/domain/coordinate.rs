//! Coordinate-string parsing for reverse and route inputs.

use serde::{Deserialize, Serialize};

use crate::modules::provider::domain::GeoPoint;

/// Delimiters tried in order when auto-detecting, most common first.
/// The full-width comma shows up in data exported from CJK spreadsheets.
const AUTO_DELIMITERS: [&str; 5] = [",", "，", " ", "|", ";"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelimiterMode {
    Auto,
    Fixed,
}

/// How "lat<delim>lng" strings in the input are split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoordinateFormat {
    pub mode: DelimiterMode,
    pub delimiter: String,
}

impl Default for CoordinateFormat {
    fn default() -> Self {
        Self {
            mode: DelimiterMode::Auto,
            delimiter: ",".to_string(),
        }
    }
}

impl CoordinateFormat {
    pub fn fixed(delimiter: impl Into<String>) -> Self {
        Self {
            mode: DelimiterMode::Fixed,
            delimiter: delimiter.into(),
        }
    }

    /// Parse a raw coordinate string into (lat, lng).
    ///
    /// Never fails loudly: anything that does not contain two finite
    /// numbers comes back as `None` and the caller decides how to report
    /// it. No range check is applied; providers reject out-of-range
    /// values themselves.
    pub fn parse(&self, raw: &str) -> Option<GeoPoint> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match self.mode {
            DelimiterMode::Auto => {
                // First delimiter that yields two non-empty parts is the
                // one: a parse failure after that point means the string
                // is bad, not that another delimiter should be tried.
                for delimiter in AUTO_DELIMITERS {
                    if !raw.contains(delimiter) {
                        continue;
                    }
                    if let Some((lat_text, lng_text)) = split_parts(raw, delimiter) {
                        return parse_pair(lat_text, lng_text);
                    }
                }
                None
            }
            DelimiterMode::Fixed => {
                let (lat_text, lng_text) = split_parts(raw, &self.delimiter)?;
                parse_pair(lat_text, lng_text)
            }
        }
    }
}

/// Split on one delimiter; the first two non-empty parts are the pair.
fn split_parts<'a>(raw: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    if delimiter.is_empty() {
        return None;
    }

    let mut parts = raw.split(delimiter).map(str::trim).filter(|part| !part.is_empty());
    let lat = parts.next()?;
    let lng = parts.next()?;
    Some((lat, lng))
}

fn parse_pair(lat_text: &str, lng_text: &str) -> Option<GeoPoint> {
    let lat = parse_finite(lat_text)?;
    let lng = parse_finite(lng_text)?;
    Some(GeoPoint::new(lat, lng))
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|number| number.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto() -> CoordinateFormat {
        CoordinateFormat::default()
    }

    #[test]
    fn parses_comma_separated_pair() {
        let point = auto().parse("39.9,116.4").unwrap();
        assert_eq!((point.lat, point.lng), (39.9, 116.4));
    }

    #[test]
    fn parses_full_width_comma() {
        let point = auto().parse("39.9，116.4").unwrap();
        assert_eq!((point.lat, point.lng), (39.9, 116.4));
    }

    #[test]
    fn parses_space_pipe_and_semicolon() {
        assert!(auto().parse("39.9 116.4").is_some());
        assert!(auto().parse("39.9|116.4").is_some());
        assert!(auto().parse("39.9;116.4").is_some());
    }

    #[test]
    fn blank_input_is_none() {
        assert!(auto().parse("").is_none());
        assert!(auto().parse("   ").is_none());
    }

    #[test]
    fn non_numeric_parts_are_none() {
        assert!(auto().parse("abc,def").is_none());
        assert!(auto().parse("39.9,abc").is_none());
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(auto().parse("NaN,116.4").is_none());
        assert!(auto().parse("39.9,inf").is_none());
    }

    #[test]
    fn single_value_is_none() {
        assert!(auto().parse("39.9").is_none());
        assert!(auto().parse("39.9,").is_none());
    }

    #[test]
    fn chosen_delimiter_is_final() {
        // The comma splits "39,9 116,4" into enough parts, so the comma
        // is the delimiter; "9 116" then fails to parse and the whole
        // string is rejected rather than re-split on whitespace.
        assert!(auto().parse("39,9 116,4").is_none());
    }

    #[test]
    fn delimiter_without_enough_parts_is_skipped() {
        assert!(auto().parse("39.9,").is_none());
    }

    #[test]
    fn extra_parts_are_ignored() {
        let point = auto().parse("39.9,116.4,50.0").unwrap();
        assert_eq!((point.lat, point.lng), (39.9, 116.4));
    }

    #[test]
    fn fixed_mode_uses_only_the_given_delimiter() {
        let format = CoordinateFormat::fixed("|");
        let point = format.parse("39.9|116.4").unwrap();
        assert_eq!((point.lat, point.lng), (39.9, 116.4));

        assert!(format.parse("39.9,116.4").is_none());
    }
}
