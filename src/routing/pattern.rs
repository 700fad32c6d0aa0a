//! Route patterns
//!
//! Parses pattern text such as `/ProductDetails/:id` or `*` and matches it
//! against navigation paths.
//!
//! # Supported Syntax
//!
//! ```text
//! *                    catch-all, matches every path
//! /                    the root path
//! /register            literal segment
//! /dresses/:filter     literal followed by a named parameter
//! ```
//!
//! Literal segments compare ASCII case-insensitively, trailing slashes on
//! the path are ignored and captured values are percent-decoded.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::{all_consuming, map, recognize, value},
    multi::many1,
    sequence::{pair, preceded},
    IResult,
};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use crate::routing::error::{RoutingError, RoutingResult};
use crate::routing::params::Params;
use crate::routing::path::NavigationPath;

/// One segment of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment (ignoring ASCII case)
    Literal(String),
    /// Accepts any non-empty path segment and captures it under this name
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternKind {
    CatchAll,
    Segments(Vec<Segment>),
}

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    kind: PatternKind,
}

impl RoutePattern {
    /// Parse pattern text
    pub fn parse(input: &str) -> RoutingResult<Self> {
        let kind = match all_consuming(parse_pattern)(input) {
            Ok((_, kind)) => kind,
            Err(e) => {
                return Err(RoutingError::InvalidPattern {
                    pattern: input.to_string(),
                    reason: describe_error(input, e),
                })
            }
        };

        if let PatternKind::Segments(segments) = &kind {
            let mut seen = HashSet::new();
            for segment in segments {
                if let Segment::Param(name) = segment {
                    if !seen.insert(name.as_str()) {
                        return Err(RoutingError::DuplicateParam {
                            pattern: input.to_string(),
                            name: name.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { kind })
    }

    /// The pattern that matches every path
    pub fn catch_all() -> Self {
        Self {
            kind: PatternKind::CatchAll,
        }
    }

    /// Build a pattern directly from segments; an empty list is the root
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            kind: PatternKind::Segments(segments),
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self.kind, PatternKind::CatchAll)
    }

    /// Names of the parameters this pattern captures, in order
    pub fn param_names(&self) -> Vec<&str> {
        match &self.kind {
            PatternKind::CatchAll => Vec::new(),
            PatternKind::Segments(segments) => segments
                .iter()
                .filter_map(|s| match s {
                    Segment::Param(name) => Some(name.as_str()),
                    Segment::Literal(_) => None,
                })
                .collect(),
        }
    }

    /// Match a path, returning the captured parameters on success
    pub fn matches(&self, path: &NavigationPath) -> Option<Params> {
        let segments = match &self.kind {
            PatternKind::CatchAll => return Some(Params::new()),
            PatternKind::Segments(segments) => segments,
        };

        let parts = path.segments();
        if parts.len() != segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if !literal.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), decode_segment(part));
                }
            }
        }

        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PatternKind::CatchAll => f.write_str("*"),
            PatternKind::Segments(segments) if segments.is_empty() => f.write_str("/"),
            PatternKind::Segments(segments) => {
                for segment in segments {
                    match segment {
                        Segment::Literal(literal) => write!(f, "/{}", literal)?,
                        Segment::Param(name) => write!(f, "/:{}", name)?,
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::str::FromStr for RoutePattern {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Percent-decode a captured value, keeping the raw text if it is not valid UTF-8
fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .unwrap_or(Cow::Borrowed(raw))
        .into_owned()
}

fn describe_error(input: &str, err: nom::Err<nom::error::Error<&str>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let offset = input.len() - e.input.len();
            if e.input.is_empty() {
                "unexpected end of pattern".to_string()
            } else {
                format!("unexpected input at offset {}: '{}'", offset, e.input)
            }
        }
        nom::Err::Incomplete(_) => "incomplete pattern".to_string(),
    }
}

// ============ Parsers ============

fn parse_pattern(input: &str) -> IResult<&str, PatternKind> {
    alt((
        value(PatternKind::CatchAll, char('*')),
        map(many1(parse_segment), PatternKind::Segments),
        value(PatternKind::Segments(Vec::new()), char('/')),
    ))(input)
}

fn parse_segment(input: &str) -> IResult<&str, Segment> {
    preceded(char('/'), alt((parse_param, parse_literal)))(input)
}

fn parse_param(input: &str) -> IResult<&str, Segment> {
    map(preceded(char(':'), parse_identifier), |name: &str| {
        Segment::Param(name.to_string())
    })(input)
}

fn parse_literal(input: &str) -> IResult<&str, Segment> {
    map(take_while1(is_literal_char), |text: &str| {
        Segment::Literal(text.to_string())
    })(input)
}

fn parse_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn is_literal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}
