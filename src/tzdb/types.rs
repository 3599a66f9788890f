//! Typed records decoded from the tz database.
//!
//! Every record is an immutable value. Fields that the source format may omit
//! are resolved to explicit values (or `Option`s) at decode time so consumers
//! never re-parse raw tokens.

use std::fmt;

use serde::Serialize;

use super::error::DecodeError;

/// Marker year for a FROM column of `min` (rule has always applied).
pub const MIN_YEAR: i32 = 0;

/// Marker year for a TO column of `max` (rule applies indefinitely).
pub const MAX_YEAR: i32 = MAX_UNTIL_YEAR - 1;

/// UNTIL year of a zone's final, open-ended era.
pub const MAX_UNTIL_YEAR: i32 = 10000;

/// Month of the year, indexed 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Month {
    Jan = 1,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Parse a three-letter English month abbreviation (`Jan` .. `Dec`).
    pub fn from_abbrev(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.abbrev() == name)
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Month index, 1-12.
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Day of the week, indexed 1 (Monday) to 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Mon = 1,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn from_abbrev(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.abbrev() == name)
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// The ON column of a rule (or the DAY component of a zone UNTIL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OnDay {
    /// `18`
    Exact(u8),
    /// `lastSun`
    LastWeekday(Weekday),
    /// `Sun>=8`
    OnOrAfter(Weekday, u8),
    /// `Sun<=25`
    OnOrBefore(Weekday, u8),
}

impl OnDay {
    pub fn parse(token: &str) -> Result<Self, DecodeError> {
        let invalid = || DecodeError::InvalidDay(token.to_string());

        if token.bytes().all(|b| b.is_ascii_digit()) {
            return parse_day_of_month(token).map(OnDay::Exact).ok_or_else(invalid);
        }

        if let Some(weekday) = token.strip_prefix("last") {
            return Weekday::from_abbrev(weekday)
                .map(OnDay::LastWeekday)
                .ok_or_else(invalid);
        }

        if let Some((weekday, day)) = token.split_once(">=") {
            let weekday = Weekday::from_abbrev(weekday).ok_or_else(invalid)?;
            let day = parse_day_of_month(day).ok_or_else(invalid)?;
            return Ok(OnDay::OnOrAfter(weekday, day));
        }

        if let Some((weekday, day)) = token.split_once("<=") {
            let weekday = Weekday::from_abbrev(weekday).ok_or_else(invalid)?;
            let day = parse_day_of_month(day).ok_or_else(invalid)?;
            return Ok(OnDay::OnOrBefore(weekday, day));
        }

        Err(invalid())
    }

    /// Approximate day of month used when ordering rules within a month.
    ///
    /// `lastXxx` sorts after every explicit day.
    pub fn sort_key(&self) -> u8 {
        match self {
            OnDay::Exact(day) | OnDay::OnOrAfter(_, day) | OnDay::OnOrBefore(_, day) => *day,
            OnDay::LastWeekday(_) => 32,
        }
    }
}

fn parse_day_of_month(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u8>().ok().filter(|d| (1..=31).contains(d))
}

impl fmt::Display for OnDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnDay::Exact(day) => write!(f, "{}", day),
            OnDay::LastWeekday(weekday) => write!(f, "last{}", weekday),
            OnDay::OnOrAfter(weekday, day) => write!(f, "{}>={}", weekday, day),
            OnDay::OnOrBefore(weekday, day) => write!(f, "{}<={}", weekday, day),
        }
    }
}

/// Which clock an AT or UNTIL time is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeSuffix {
    /// No suffix letter; wall clock by convention.
    Unspecified,
    /// `w` - local wall clock
    Wall,
    /// `s` - local standard time
    Standard,
    /// `u` - UTC
    Universal,
    /// `g` - UTC (Greenwich)
    Greenwich,
    /// `z` - UTC (Zulu)
    Zulu,
}

impl TimeSuffix {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(TimeSuffix::Wall),
            's' => Some(TimeSuffix::Standard),
            'u' => Some(TimeSuffix::Universal),
            'g' => Some(TimeSuffix::Greenwich),
            'z' => Some(TimeSuffix::Zulu),
            _ => None,
        }
    }

    /// The suffix letter, or `None` for [`TimeSuffix::Unspecified`].
    pub fn as_char(&self) -> Option<char> {
        match self {
            TimeSuffix::Unspecified => None,
            TimeSuffix::Wall => Some('w'),
            TimeSuffix::Standard => Some('s'),
            TimeSuffix::Universal => Some('u'),
            TimeSuffix::Greenwich => Some('g'),
            TimeSuffix::Zulu => Some('z'),
        }
    }

    /// True for the three letters that all denote UTC.
    pub fn is_utc(&self) -> bool {
        matches!(
            self,
            TimeSuffix::Universal | TimeSuffix::Greenwich | TimeSuffix::Zulu
        )
    }
}

/// Split a time string such as `2:00s` into `("2:00", Standard)`.
///
/// The trailing character is the suffix when it is not a digit. Only
/// `w`, `s`, `u`, `g` and `z` are accepted.
pub fn parse_time_suffix(token: &str) -> Result<(String, TimeSuffix), DecodeError> {
    let last = token.chars().next_back().ok_or(DecodeError::MissingTime)?;

    if last.is_ascii_digit() {
        return Ok((token.to_string(), TimeSuffix::Unspecified));
    }

    let suffix = TimeSuffix::from_char(last).ok_or(DecodeError::InvalidSuffix(last))?;
    let time = &token[..token.len() - last.len_utf8()];
    Ok((time.to_string(), suffix))
}

/// One line of a `Rule` policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRecord {
    pub from_year: i32,
    pub to_year: i32,
    pub in_month: Month,
    pub on_day: OnDay,
    pub at_time: String,
    pub at_time_suffix: TimeSuffix,
    /// SAVE column, e.g. `1:00` or `0`.
    pub delta_offset: String,
    /// LETTER column; `-` decodes to `None`.
    pub letter: Option<String>,
    #[serde(skip)]
    pub raw_line: String,
}

impl RuleRecord {
    pub fn is_max(&self) -> bool {
        self.to_year == MAX_YEAR
    }
}

/// Sort a policy into simulation order: `(from_year, month, day)`.
pub fn sort_policy(rules: &mut [RuleRecord]) {
    rules.sort_by_key(|r| (r.from_year, r.in_month, r.on_day.sort_key()));
}

/// The RULES column of a zone era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RulesField {
    /// `-`: standard time always applies.
    None,
    /// A constant DST adjustment such as `1:00`.
    FixedOffset(String),
    /// Name of the policy governing DST.
    Policy(String),
}

impl RulesField {
    pub fn parse(token: &str) -> Self {
        if token == "-" {
            return RulesField::None;
        }
        let unsigned = token.strip_prefix(['-', '+']).unwrap_or(token);
        if unsigned.starts_with(|c: char| c.is_ascii_digit()) {
            RulesField::FixedOffset(token.to_string())
        } else {
            RulesField::Policy(token.to_string())
        }
    }

    pub fn policy_name(&self) -> Option<&str> {
        match self {
            RulesField::Policy(name) => Some(name),
            _ => None,
        }
    }
}

/// The instant at which a zone era ends, with every default applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Until {
    pub year: i32,
    /// True when only the year (or nothing) was given.
    pub year_only: bool,
    pub month: Month,
    pub day: OnDay,
    pub time: String,
    pub time_suffix: TimeSuffix,
}

impl Until {
    pub fn is_unbounded(&self) -> bool {
        self.year == MAX_UNTIL_YEAR
    }
}

/// UNTIL components exactly as present in the source line.
///
/// Trailing components may be omitted left to right; [`UntilSpec::resolve`]
/// is the only place defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UntilSpec {
    pub year: Option<i32>,
    pub month: Option<Month>,
    pub day: Option<OnDay>,
    pub time: Option<(String, TimeSuffix)>,
}

impl UntilSpec {
    /// Apply defaults: year `MAX_UNTIL_YEAR`, January, day 1, `00:00` wall.
    pub fn resolve(self) -> Until {
        let (time, time_suffix) = self
            .time
            .unwrap_or_else(|| ("00:00".to_string(), TimeSuffix::Wall));
        Until {
            year: self.year.unwrap_or(MAX_UNTIL_YEAR),
            year_only: self.month.is_none(),
            month: self.month.unwrap_or(Month::Jan),
            day: self.day.unwrap_or(OnDay::Exact(1)),
            time,
            time_suffix,
        }
    }
}

/// One row of a `Zone` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneEraRecord {
    /// STDOFF column, e.g. `-5:50:36`.
    pub offset: String,
    pub rules: RulesField,
    /// Abbreviation template, e.g. `C%sT` or `GMT/BST`.
    pub format: String,
    pub until: Until,
    #[serde(skip)]
    pub raw_line: String,
}

/// Outcome of decoding one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    Record(T),
    /// The line has a record shape but carries nothing to decode. Counted
    /// apart from failures. Short lines are [`Decoded::Invalid`], not this.
    Ignored,
    Invalid(DecodeError),
}

impl<T> From<Result<T, DecodeError>> for Decoded<T> {
    fn from(result: Result<T, DecodeError>) -> Self {
        match result {
            Ok(record) => Decoded::Record(record),
            Err(e) => Decoded::Invalid(e),
        }
    }
}
