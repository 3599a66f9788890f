//! Tests for parsing whole tz database directories.

use std::fs;

use tzx::tzdb::{
    ExtractError, Extractor, KindCounts, Month, OnDay, RulesField, TimeSuffix, TzDatabase,
    Weekday, DEFAULT_ZONE_FILES, MAX_UNTIL_YEAR, MAX_YEAR,
};

use crate::helpers::{tzdb_dir, write_tzdb};

fn parse_fixture() -> TzDatabase {
    Extractor::new()
        .parse(&tzdb_dir(), &DEFAULT_ZONE_FILES)
        .expect("fixture database should parse")
}

// ============================================================================
// Fixture Database
// ============================================================================

#[test]
fn fixture_parses_without_failures() {
    let summary = parse_fixture().summary();
    assert_eq!(summary.names, KindCounts { rule: 7, zone: 9, link: 4 });
    assert_eq!(summary.lines, KindCounts { rule: 14, zone: 25, link: 4 });
    assert_eq!(summary.rule_entries, 14);
    assert_eq!(summary.zone_entries, 25);
    assert_eq!(summary.ignored, KindCounts::default());
    assert_eq!(summary.invalid, KindCounts::default());
}

#[test]
fn multi_line_zone_keeps_era_order() {
    let db = parse_fixture();
    let atyrau = &db.zones["Asia/Atyrau"];
    assert_eq!(atyrau.len(), 6);

    let untils: Vec<i32> = atyrau.iter().map(|e| e.until.year).collect();
    assert_eq!(untils, vec![1924, 1930, 1981, 1982, 1991, MAX_UNTIL_YEAR]);

    let era = &atyrau[4];
    assert_eq!(era.offset, "5:00");
    assert_eq!(era.rules, RulesField::Policy("RussiaAsia".to_string()));
    assert_eq!(era.format, "+05/+06");
    assert_eq!(era.until.month, Month::Mar);
    assert_eq!(era.until.day, OnDay::Exact(31));
    assert_eq!(era.until.time, "2:00");
    assert_eq!(era.until.time_suffix, TimeSuffix::Standard);
    assert!(atyrau[5].until.is_unbounded());
}

#[test]
fn chicago_until_defaults() {
    let db = parse_fixture();
    let chicago = &db.zones["America/Chicago"];

    assert_eq!(chicago[0].until.year, 1883);
    assert!(!chicago[0].until.year_only);
    assert_eq!(chicago[0].until.month, Month::Nov);
    assert_eq!(chicago[0].until.day, OnDay::Exact(18));
    assert_eq!(chicago[0].until.time, "12:09:24");
    assert_eq!(chicago[0].until.time_suffix, TimeSuffix::Unspecified);

    assert_eq!(chicago[1].until.year, 1920);
    assert!(chicago[1].until.year_only);
    assert_eq!(chicago[1].until.month, Month::Jan);
    assert_eq!(chicago[1].until.day, OnDay::Exact(1));
    assert_eq!(chicago[1].until.time, "00:00");
    assert_eq!(chicago[1].until.time_suffix, TimeSuffix::Wall);
}

#[test]
fn policies_are_decoded() {
    let db = parse_fixture();

    let eu = &db.policies["EU"];
    assert_eq!(eu[0].on_day, OnDay::LastWeekday(Weekday::Sun));
    assert_eq!(eu[0].at_time, "1:00");
    assert_eq!(eu[0].at_time_suffix, TimeSuffix::Universal);
    assert_eq!(eu[0].to_year, MAX_YEAR);
    assert_eq!(eu[1].letter, None);

    let egypt = &db.policies["Egypt"];
    assert_eq!((egypt[0].from_year, egypt[0].to_year), (1940, 1940));
    assert_eq!(egypt[1].on_day, OnDay::Exact(1));

    // Declared after the zone that uses it
    assert_eq!(db.policies["GB-Eire"].len(), 1);

    for rules in db.policies.values() {
        assert!(rules.iter().all(|r| r.to_year >= r.from_year));
    }
}

#[test]
fn links_resolve_to_targets() {
    let db = parse_fixture();
    assert_eq!(db.links["US/Central"], "America/Chicago");
    assert_eq!(db.links["Africa/Accra"], "Africa/Abidjan");
    assert_eq!(db.links["Etc/Universal"], "Etc/UTC");
    assert!(db.links.values().all(|target| db.zones.contains_key(target)));
}

#[test]
fn records_keep_raw_lines() {
    let db = parse_fixture();
    assert_eq!(
        db.policies["Arg"][0].raw_line,
        "Rule\tArg\t2008\tonly\t-\tOct\tSun>=15\t0:00\t1:00\t-"
    );
    assert_eq!(db.zones["Etc/UTC"][0].raw_line, "0 - UTC");
    assert_eq!(db.zones["Africa/Cairo"][1].raw_line, "\t\t\t2:00\tEgypt\tEE%sT");
}

#[test]
fn parsing_twice_is_identical() {
    let first = parse_fixture();
    let second = parse_fixture();
    assert_eq!(first.zones, second.zones);
    assert_eq!(first.policies, second.policies);
    assert_eq!(first.links, second.links);
    assert_eq!(first.summary(), second.summary());
}

// ============================================================================
// Fail-soft Decoding
// ============================================================================

#[test]
fn malformed_lines_are_counted_not_fatal() {
    let dir = write_tzdb(&[
        (
            "europe",
            "Rule EU 1981 max - Mar lastSun 1:00u 1:00 S\n\
             Rule EU 1996 max - Oct lastSun 1:00x 0 -\n\
             Rule EU 19x6 max - Oct lastSun 1:00u 0 -\n\
             Zone Europe/Paris 0:09:21 - LMT 1891 Mar 16\n\
             \t0:09:21 - PMT 1911 Mar 11\n\
             \t1:00 France\n\
             \t1:00 EU CE%sT\n",
        ),
        ("backward", "Link Europe/Paris Europe/Monaco\nLink Europe/Berlin Europe/Monaco\n"),
    ]);

    let db = Extractor::new()
        .parse(dir.path(), &DEFAULT_ZONE_FILES)
        .unwrap();

    assert_eq!(db.stats.invalid, KindCounts { rule: 2, zone: 1, link: 2 });
    assert_eq!(db.policies["EU"].len(), 1);
    assert_eq!(db.zones["Europe/Paris"].len(), 3);
    assert!(db.links.is_empty());
    assert!(db.summary().has_failures());
}

#[test]
fn zone_block_continues_into_next_file() {
    let dir = write_tzdb(&[
        ("europe", "Zone Europe/Lisbon -0:36:45 - LMT 1884\n"),
        ("northamerica", "\t-0:36:45 - LMT 1912 Jan 1 0:00u\n\t0:00 EU WE%sT\n"),
    ]);

    let db = Extractor::new()
        .parse(dir.path(), &DEFAULT_ZONE_FILES)
        .unwrap();
    assert_eq!(db.zones["Europe/Lisbon"].len(), 3);
}

#[test]
fn configured_file_subset() {
    let db = Extractor::new()
        .parse(&tzdb_dir(), &["europe", "backward"])
        .unwrap();
    assert!(db.zones.contains_key("Europe/London"));
    assert!(!db.zones.contains_key("America/Chicago"));
    // Targets outside the subset still resolve; nothing checks them here
    assert_eq!(db.links["US/Central"], "America/Chicago");
}

#[test]
fn missing_zone_file_is_fatal() {
    let dir = write_tzdb(&[]);
    fs::remove_file(dir.path().join("etcetera")).unwrap();

    let err = Extractor::new()
        .parse(dir.path(), &DEFAULT_ZONE_FILES)
        .unwrap_err();
    match &err {
        ExtractError::Open { path, .. } => assert!(path.ends_with("etcetera")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("etcetera"));
}
