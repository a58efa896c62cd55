//! Scripted event sequences for `linegauge simulate`.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fmt;

/// One scripted host action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub(crate) enum Step {
    /// Scroll surface reports a new offset
    Scroll { offset_x: f32 },
    /// Momentum scrolling ends at an offset
    Settle { offset_x: f32 },
    /// Host imposes a value
    Set { value: i64 },
    /// Host changes the range
    Range { min: i64, max: i64 },
    /// Scroll content finished laying out
    Content,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scroll { offset_x } => write!(f, "scroll:{offset_x}"),
            Self::Settle { offset_x } => write!(f, "settle:{offset_x}"),
            Self::Set { value } => write!(f, "set:{value}"),
            Self::Range { min, max } => write!(f, "range:{min}:{max}"),
            Self::Content => f.write_str("content"),
        }
    }
}

/// Parse a comma-separated script such as `scroll:900,settle:900,set:80`.
pub(crate) fn parse(script: &str) -> Result<Vec<Step>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(token: &str) -> Result<Step> {
    let mut parts = token.split(':');
    let kind = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let step = match (kind, args.as_slice()) {
        ("scroll", [x]) => Step::Scroll {
            offset_x: number(token, x)?,
        },
        ("settle", [x]) => Step::Settle {
            offset_x: number(token, x)?,
        },
        ("set", [v]) => Step::Set {
            value: number(token, v)?,
        },
        ("range", [min, max]) => Step::Range {
            min: number(token, min)?,
            max: number(token, max)?,
        },
        ("content", []) => Step::Content,
        _ => bail!("unrecognized step '{token}'"),
    };
    Ok(step)
}

fn number<T>(token: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("invalid number '{raw}' in step '{token}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_script() {
        let steps = parse("scroll:900, settle:900,set:80,range:1:50,content").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Scroll { offset_x: 900.0 },
                Step::Settle { offset_x: 900.0 },
                Step::Set { value: 80 },
                Step::Range { min: 1, max: 50 },
                Step::Content,
            ]
        );
    }

    #[test]
    fn test_parse_negative_values() {
        let steps = parse("scroll:-40.5,range:-10:10").unwrap();
        assert_eq!(steps[0], Step::Scroll { offset_x: -40.5 });
        assert_eq!(steps[1], Step::Range { min: -10, max: 10 });
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_step() {
        let err = parse("scroll:1,jump:4").unwrap_err();
        assert!(err.to_string().contains("jump:4"));
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        let err = parse("set:eighty").unwrap_err();
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_parse_rejects_missing_argument() {
        assert!(parse("range:1").is_err());
        assert!(parse("content:3").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let script = "scroll:900,set:80,range:1:50,content";
        let text: Vec<String> = parse(script).unwrap().iter().map(ToString::to_string).collect();
        assert_eq!(text.join(","), script);
    }
}
