//! IANA tz database zone file parsing.
//!
//! The zone files hold three kinds of records:
//!
//! ```text
//! # Rule  NAME  FROM  TO   -  IN   ON      AT    SAVE  LETTER
//! Rule    US    2007  max  -  Mar  Sun>=8  2:00  1:00  D
//!
//! # Zone  NAME             STDOFF    RULES  FORMAT  [UNTIL]
//! Zone    America/Chicago  -5:50:36  -      LMT     1883 Nov 18 12:09:24
//!                          -6:00     US     C%sT    1920
//!                          -6:00     US     C%sT
//!
//! Link    America/Los_Angeles  US/Pacific
//! ```
//!
//! Rules sharing a name form a policy. A zone is a list of eras; only the
//! first line of a Zone names it and continuation lines start with a TAB.
//! A `Link` names its target first and the alias second.
//!
//! # Module Structure
//!
//! - [`line_source`] - comment stripping line reader
//! - [`classify`] - line classification and raw grouping
//! - [`rule`], [`zone`], [`link`] - per-record decoders
//! - [`extractor`] - the driver producing a [`TzDatabase`]

pub mod classify;
mod error;
pub mod extractor;
pub mod line_source;
pub mod link;
pub mod rule;
mod types;
pub mod zone;

pub use classify::{classify, LineClass, ParseState, RawGroups};
pub use error::{DecodeError, ExtractError};
pub use extractor::{
    Extractor, ExtractStats, KindCounts, Summary, TzDatabase, DEFAULT_ZONE_FILES,
};
pub use line_source::LineSource;
pub use link::{resolve_links, ResolvedLinks};
pub use rule::decode_rule_line;
pub use types::{
    parse_time_suffix, sort_policy, Decoded, Month, OnDay, RuleRecord, RulesField, TimeSuffix,
    Until, UntilSpec, Weekday, ZoneEraRecord, MAX_UNTIL_YEAR, MAX_YEAR, MIN_YEAR,
};
pub use zone::decode_zone_line;
