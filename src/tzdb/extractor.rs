//! The stateful driver: scans zone files into raw groups, then decodes them.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use humansize::{format_size, DECIMAL};
use serde::Serialize;

use super::classify::{classify, ParseState, RawGroups};
use super::error::ExtractError;
use super::line_source::LineSource;
use super::link::resolve_links;
use super::rule::decode_rule_line;
use super::types::{sort_policy, Decoded, RuleRecord, ZoneEraRecord};
use super::zone::decode_zone_line;

/// The zone files read from a tz database directory, in order.
pub const DEFAULT_ZONE_FILES: [&str; 9] = [
    "africa",
    "antarctica",
    "asia",
    "australasia",
    "backward",
    "etcetera",
    "europe",
    "northamerica",
    "southamerica",
];

/// A count per record kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub rule: usize,
    pub zone: usize,
    pub link: usize,
}

impl fmt::Display for KindCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.rule, self.zone, self.link)
    }
}

/// Decode-stage failure counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    pub ignored: KindCounts,
    pub invalid: KindCounts,
}

/// Decoded tz database.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TzDatabase {
    /// Zone name to its eras, in source order.
    pub zones: BTreeMap<String, Vec<ZoneEraRecord>>,
    /// Policy name to its rules, in source order.
    pub policies: BTreeMap<String, Vec<RuleRecord>>,
    /// Alias to target zone name.
    pub links: BTreeMap<String, String>,
    #[serde(skip)]
    pub stats: ExtractStats,
    #[serde(skip)]
    raw_names: KindCounts,
    #[serde(skip)]
    raw_lines: KindCounts,
}

impl TzDatabase {
    /// A policy's rules ordered by `(from_year, month, day)`.
    pub fn sorted_policy(&self, name: &str) -> Option<Vec<RuleRecord>> {
        let mut rules = self.policies.get(name)?.clone();
        sort_policy(&mut rules);
        Some(rules)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            groups: self.raw_names,
            lines: self.raw_lines,
            names: KindCounts {
                rule: self.policies.len(),
                zone: self.zones.len(),
                link: self.links.len(),
            },
            rule_entries: self.policies.values().map(Vec::len).sum(),
            zone_entries: self.zones.values().map(Vec::len).sum(),
            ignored: self.stats.ignored,
            invalid: self.stats.invalid,
        }
    }
}

/// Post-parse health report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Distinct names seen while grouping raw lines.
    pub groups: KindCounts,
    /// Raw lines grouped.
    pub lines: KindCounts,
    /// Names present in the decoded maps.
    pub names: KindCounts,
    pub rule_entries: usize,
    pub zone_entries: usize,
    pub ignored: KindCounts,
    pub invalid: KindCounts,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        self.invalid != KindCounts::default()
    }

    /// Emit the summary through `tracing`.
    pub fn log(&self) {
        tracing::info!("-------- Extractor Summary");
        for line in self.to_string().lines() {
            tracing::info!("{}", line);
        }
        tracing::info!("-------- Extractor Summary End");
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Group count (Rule, Zone, Link): {}", self.groups)?;
        writeln!(f, "Line count (Rule, Zone, Link): {}", self.lines)?;
        writeln!(f, "Name count (Rule, Zone, Link): {}", self.names)?;
        writeln!(f, "Rule entry count: {}", self.rule_entries)?;
        writeln!(f, "Zone entry count: {}", self.zone_entries)?;
        writeln!(f, "Ignored lines (Rule, Zone, Link): {}", self.ignored)?;
        write!(f, "Invalid lines (Rule, Zone, Link): {}", self.invalid)
    }
}

/// Scans zone files and decodes them into a [`TzDatabase`].
///
/// Usage:
///
/// ```no_run
/// use std::path::Path;
/// use tzx::tzdb::{Extractor, DEFAULT_ZONE_FILES};
///
/// let db = Extractor::new().parse(Path::new("tzdata"), &DEFAULT_ZONE_FILES)?;
/// db.summary().log();
/// # Ok::<(), tzx::tzdb::ExtractError>(())
/// ```
///
/// The Zone block state carries over from one scanned file to the next.
#[derive(Debug, Default)]
pub struct Extractor {
    state: ParseState,
    groups: RawGroups,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `files` under `dir`, then decode everything.
    ///
    /// Only I/O errors fail; malformed lines are counted in the stats.
    pub fn parse<S: AsRef<str>>(
        mut self,
        dir: &Path,
        files: &[S],
    ) -> Result<TzDatabase, ExtractError> {
        for file in files {
            self.scan_file(&dir.join(file.as_ref()))?;
        }
        Ok(self.finish())
    }

    /// Classify and group every line of one zone file.
    pub fn scan_file(&mut self, path: &Path) -> Result<(), ExtractError> {
        let file = File::open(path).map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);
        tracing::info!(
            file = %path.display(),
            size = %format_size(size, DECIMAL),
            "Processing"
        );

        self.scan_reader(BufReader::new(file))
            .map_err(|source| ExtractError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Classify and group every line from `reader`.
    pub fn scan_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        let mut source = LineSource::new(reader);
        while let Some(line) = source.next_line()? {
            let (state, class) = classify(std::mem::take(&mut self.state), &line);
            self.state = state;
            if !self.groups.add(class) {
                tracing::debug!(line = %line, "Skipping unrecognized line");
            }
        }
        Ok(())
    }

    /// Decode the collected groups.
    pub fn finish(self) -> TzDatabase {
        let RawGroups {
            rules,
            zones,
            links,
        } = self.groups;

        let mut db = TzDatabase {
            raw_names: KindCounts {
                rule: rules.len(),
                zone: zones.len(),
                link: links.len(),
            },
            raw_lines: KindCounts {
                rule: rules.values().map(Vec::len).sum(),
                zone: zones.values().map(Vec::len).sum(),
                link: links.values().map(Vec::len).sum(),
            },
            ..TzDatabase::default()
        };

        for (name, lines) in &rules {
            for line in lines {
                match decode_rule_line(line) {
                    Decoded::Record(rule) => db.policies.entry(name.clone()).or_default().push(rule),
                    Decoded::Ignored => db.stats.ignored.rule += 1,
                    Decoded::Invalid(e) => {
                        tracing::warn!(policy = %name, error = %e, line = %line, "Invalid Rule line");
                        db.stats.invalid.rule += 1;
                    }
                }
            }
        }

        for (name, lines) in &zones {
            for line in lines {
                match decode_zone_line(line) {
                    Decoded::Record(era) => db.zones.entry(name.clone()).or_default().push(era),
                    Decoded::Ignored => db.stats.ignored.zone += 1,
                    Decoded::Invalid(e) => {
                        tracing::warn!(zone = %name, error = %e, line = %line.trim(), "Invalid Zone line");
                        db.stats.invalid.zone += 1;
                    }
                }
            }
        }

        let resolved = resolve_links(&links);
        for (alias, targets) in &resolved.conflicts {
            tracing::warn!(alias = %alias, targets = ?targets, "Conflicting Link targets");
        }
        db.stats.invalid.link += resolved.invalid_lines();
        db.links = resolved.links;

        db
    }
}
