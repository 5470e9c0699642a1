//! Route template parsing and path matching.
//!
//! # Responsibilities
//! - Parse `literal/{param}/{optional?}/{*catchall}` templates
//! - Match a request path against a parsed template
//! - Bind captured segments and defaults into route values
//!
//! # Design Decisions
//! - Literal segments match case-insensitively (ASCII)
//! - Parameters occupy a whole segment; mixed segments are rejected
//! - Catch-all is only legal as the last segment
//! - Path segments are percent-decoded before comparison and binding
//! - No regex: one linear pass over the segments

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::percent_decode_str;

use crate::error::HarnessError;
use crate::routing::route::{RouteDefaults, RouteValue};

/// One `/`-separated piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Parameter {
        name: String,
        optional: bool,
        catch_all: bool,
    },
}

/// A parsed route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parse a template. Leading and trailing slashes are ignored.
    pub fn parse(raw: &str) -> Result<Self, HarnessError> {
        let trimmed = raw.trim_matches('/');
        let mut segments = Vec::new();

        if !trimmed.is_empty() {
            let pieces: Vec<&str> = trimmed.split('/').collect();
            for (index, piece) in pieces.iter().enumerate() {
                let segment = parse_segment(raw, piece)?;
                if let Segment::Parameter { name, catch_all, .. } = &segment {
                    if *catch_all && index + 1 != pieces.len() {
                        return Err(HarnessError::invalid_template(
                            raw,
                            "catch-all parameter must be the last segment",
                        ));
                    }
                    if segments.iter().any(|s| matches!(s, Segment::Parameter { name: n, .. } if n == name)) {
                        return Err(HarnessError::invalid_template(
                            raw,
                            format!("duplicate parameter `{}`", name),
                        ));
                    }
                }
                segments.push(segment);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The template text as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all parameters, in template order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Parameter { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a request path, returning the bound values on success.
    ///
    /// Defaults sit beneath captured values: a captured segment always wins,
    /// a `Value` default fills a missing one, an `Optional` default binds nothing.
    pub fn matches(&self, path: &str, defaults: &RouteDefaults) -> Option<BTreeMap<String, String>> {
        let parts = decode_segments(path)?;

        let mut values = defaults.bound_values();
        let mut cursor = 0;

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => {
                    let part = parts.get(cursor)?;
                    if !part.eq_ignore_ascii_case(literal) {
                        return None;
                    }
                    cursor += 1;
                }
                Segment::Parameter { name, catch_all: true, optional } => {
                    let rest = parts[cursor.min(parts.len())..].join("/");
                    cursor = parts.len();
                    if !rest.is_empty() {
                        values.insert(name.clone(), rest);
                    } else if !optional && defaults.get(name).is_none() {
                        return None;
                    }
                }
                Segment::Parameter { name, optional, .. } => match parts.get(cursor) {
                    Some(part) => {
                        values.insert(name.clone(), part.clone());
                        cursor += 1;
                    }
                    None => match defaults.get(name) {
                        Some(RouteValue::Value(_)) | Some(RouteValue::Optional) => {}
                        None if *optional => {}
                        None => return None,
                    },
                },
            }
        }

        if cursor < parts.len() {
            return None;
        }

        Some(values)
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a path into percent-decoded segments. `None` if a segment is not UTF-8.
fn decode_segments(path: &str) -> Option<Vec<String>> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Some(Vec::new());
    }
    trimmed
        .split('/')
        .map(|s| percent_decode_str(s).decode_utf8().ok().map(|d| d.into_owned()))
        .collect()
}

fn parse_segment(raw: &str, piece: &str) -> Result<Segment, HarnessError> {
    if piece.is_empty() {
        return Err(HarnessError::invalid_template(raw, "empty segment"));
    }

    let opens = piece.matches('{').count();
    let closes = piece.matches('}').count();
    if opens == 0 && closes == 0 {
        return Ok(Segment::Literal(piece.to_string()));
    }
    if opens != 1 || closes != 1 || !piece.starts_with('{') || !piece.ends_with('}') {
        return Err(HarnessError::invalid_template(
            raw,
            format!("segment `{}` must be a literal or a single parameter", piece),
        ));
    }

    let mut name = &piece[1..piece.len() - 1];
    let catch_all = name.starts_with('*');
    if catch_all {
        name = &name[1..];
    }
    let optional = name.ends_with('?');
    if optional {
        name = &name[..name.len() - 1];
    }

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(HarnessError::invalid_template(
            raw,
            format!("invalid parameter name in `{}`", piece),
        ));
    }

    Ok(Segment::Parameter {
        name: name.to_string(),
        optional,
        catch_all,
    })
}
