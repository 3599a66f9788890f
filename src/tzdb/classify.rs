//! Line classification and raw line grouping.
//!
//! Zone records span several lines and only the first names the zone, so
//! grouping needs to know whether a Zone block is still open. That is the
//! whole of [`ParseState`]; it is passed into and returned from [`classify`]
//! instead of living in shared fields.

use std::collections::BTreeMap;

/// Whether a Zone block is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParseState {
    #[default]
    Idle,
    /// Continuation lines belong to this zone.
    InZone(String),
}

/// What a single line contributes to the raw groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A full `Rule` line for policy `name`.
    Rule { name: String, line: String },
    /// `Link TARGET ALIAS`.
    Link { alias: String, target: String },
    /// First era of a zone: the columns after the zone name.
    ZoneStart { name: String, era: String },
    /// A TAB-led era line for the open zone.
    ZoneContinuation { name: String, era: String },
    /// Matches no record shape.
    Skip,
}

/// Classify `line` given the current state and return the next state.
pub fn classify(state: ParseState, line: &str) -> (ParseState, LineClass) {
    let tag = line.get(..4).unwrap_or(line);

    match tag {
        "Rule" => match line.split_whitespace().nth(1) {
            Some(name) => (
                ParseState::Idle,
                LineClass::Rule {
                    name: name.to_string(),
                    line: line.to_string(),
                },
            ),
            None => (state, LineClass::Skip),
        },
        "Link" => {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match (tokens.get(1), tokens.get(2)) {
                (Some(target), Some(alias)) => (
                    ParseState::Idle,
                    LineClass::Link {
                        alias: alias.to_string(),
                        target: target.to_string(),
                    },
                ),
                _ => (state, LineClass::Skip),
            }
        }
        "Zone" => {
            let mut tokens = line.split_whitespace().skip(1);
            match tokens.next() {
                Some(name) => {
                    let era = tokens.collect::<Vec<_>>().join(" ");
                    (
                        ParseState::InZone(name.to_string()),
                        LineClass::ZoneStart {
                            name: name.to_string(),
                            era,
                        },
                    )
                }
                None => (state, LineClass::Skip),
            }
        }
        _ => match state {
            ParseState::InZone(name) if line.starts_with('\t') => {
                let class = LineClass::ZoneContinuation {
                    name: name.clone(),
                    era: line.to_string(),
                };
                (ParseState::InZone(name), class)
            }
            state => (state, LineClass::Skip),
        },
    }
}

/// Raw lines collected per record name, in source order.
#[derive(Debug, Clone, Default)]
pub struct RawGroups {
    pub rules: BTreeMap<String, Vec<String>>,
    pub zones: BTreeMap<String, Vec<String>>,
    /// Alias name to every target named for it.
    pub links: BTreeMap<String, Vec<String>>,
}

impl RawGroups {
    /// Add a classified line. Returns false for [`LineClass::Skip`].
    pub fn add(&mut self, class: LineClass) -> bool {
        match class {
            LineClass::Rule { name, line } => push(&mut self.rules, name, line),
            LineClass::Link { alias, target } => push(&mut self.links, alias, target),
            LineClass::ZoneStart { name, era } | LineClass::ZoneContinuation { name, era } => {
                push(&mut self.zones, name, era)
            }
            LineClass::Skip => return false,
        }
        true
    }
}

fn push(table: &mut BTreeMap<String, Vec<String>>, name: String, item: String) {
    table.entry(name).or_default().push(item);
}
