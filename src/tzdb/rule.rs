//! `Rule` line decoding.
//!
//! ```text
//! Rule  NAME  FROM  TO    -  IN   ON      AT    SAVE  LETTER
//! Rule  US    2007  max   -  Mar  Sun>=8  2:00  1:00  D
//! ```

use super::error::DecodeError;
use super::types::{
    parse_time_suffix, Decoded, Month, OnDay, RuleRecord, MAX_YEAR, MIN_YEAR,
};

const RULE_FIELDS: usize = 10;

/// Decode one full `Rule` line.
///
/// Anything but exactly ten columns, a bare `Rule NAME` included, is
/// [`Decoded::Invalid`].
pub fn decode_rule_line(line: &str) -> Decoded<RuleRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    decode_tokens(&tokens, line).into()
}

fn decode_tokens(tokens: &[&str], line: &str) -> Result<RuleRecord, DecodeError> {
    if tokens.len() < RULE_FIELDS {
        return Err(DecodeError::TooFewFields {
            expected: RULE_FIELDS,
            found: tokens.len(),
        });
    }
    if tokens.len() > RULE_FIELDS {
        return Err(DecodeError::TooManyFields {
            expected: RULE_FIELDS,
            found: tokens.len(),
        });
    }

    let from_year = match tokens[2] {
        "min" => MIN_YEAR,
        year => parse_year(year)?,
    };
    let to_year = match tokens[3] {
        "only" => from_year,
        "max" => MAX_YEAR,
        year => parse_year(year)?,
    };
    if to_year < from_year {
        return Err(DecodeError::YearRange {
            from: from_year,
            to: to_year,
        });
    }

    let in_month =
        Month::from_abbrev(tokens[5]).ok_or_else(|| DecodeError::UnknownMonth(tokens[5].into()))?;
    let on_day = OnDay::parse(tokens[6])?;
    let (at_time, at_time_suffix) = parse_time_suffix(tokens[7])?;

    let letter = match tokens[9] {
        "-" => None,
        letter => Some(letter.to_string()),
    };

    Ok(RuleRecord {
        from_year,
        to_year,
        in_month,
        on_day,
        at_time,
        at_time_suffix,
        delta_offset: tokens[8].to_string(),
        letter,
        raw_line: line.to_string(),
    })
}

pub(crate) fn parse_year(token: &str) -> Result<i32, DecodeError> {
    token
        .parse::<i32>()
        .map_err(|_| DecodeError::InvalidYear(token.to_string()))
}
