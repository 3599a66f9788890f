//! `Zone` era decoding.
//!
//! ```text
//! STDOFF    RULES  FORMAT  [UNTIL]
//! -5:50:36  -      LMT     1883 Nov 18 12:09:24
//! -6:00     US     C%sT    1920
//! ```
//!
//! The UNTIL columns are dropped right to left; each missing one takes its
//! default independently (see [`UntilSpec::resolve`]).

use super::error::DecodeError;
use super::rule::parse_year;
use super::types::{
    parse_time_suffix, Decoded, Month, OnDay, RulesField, UntilSpec, ZoneEraRecord,
};

const MIN_ERA_FIELDS: usize = 3;
const MAX_ERA_FIELDS: usize = 7;

/// Decode one era line (the zone name already removed).
///
/// An empty line, left by a `Zone NAME` header with no columns, is too short
/// like any other line under three columns.
pub fn decode_zone_line(line: &str) -> Decoded<ZoneEraRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    decode_tokens(&tokens, line).into()
}

fn decode_tokens(tokens: &[&str], line: &str) -> Result<ZoneEraRecord, DecodeError> {
    if tokens.len() < MIN_ERA_FIELDS {
        return Err(DecodeError::TooFewFields {
            expected: MIN_ERA_FIELDS,
            found: tokens.len(),
        });
    }
    if tokens.len() > MAX_ERA_FIELDS {
        return Err(DecodeError::TooManyFields {
            expected: MAX_ERA_FIELDS,
            found: tokens.len(),
        });
    }

    let until = parse_until(&tokens[MIN_ERA_FIELDS..])?;

    Ok(ZoneEraRecord {
        offset: tokens[0].to_string(),
        rules: RulesField::parse(tokens[1]),
        format: tokens[2].to_string(),
        until: until.resolve(),
        raw_line: line.to_string(),
    })
}

/// Read the UNTIL components that are present, left to right.
fn parse_until(tokens: &[&str]) -> Result<UntilSpec, DecodeError> {
    let mut spec = UntilSpec::default();
    let mut fields = tokens.iter();

    if let Some(year) = fields.next() {
        spec.year = Some(parse_year(year)?);
    }
    if let Some(month) = fields.next() {
        spec.month = Some(
            Month::from_abbrev(month).ok_or_else(|| DecodeError::UnknownMonth(month.to_string()))?,
        );
    }
    if let Some(day) = fields.next() {
        spec.day = Some(OnDay::parse(day)?);
    }
    if let Some(time) = fields.next() {
        spec.time = Some(parse_time_suffix(time)?);
    }

    Ok(spec)
}
