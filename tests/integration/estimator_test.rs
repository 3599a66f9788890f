//! Tests for buffer estimation over a parsed database.

use std::collections::BTreeSet;

use tzx::estimator::{BufferSizes, PolicyMap, TransitionSimulator};
use tzx::tzdb::{Extractor, ZoneEraRecord, DEFAULT_ZONE_FILES};
use tzx::{BufferEstimator, BufferExceptions, Config};

use crate::helpers::tzdb_dir;

/// Counts eras plus the rules of referenced policies that overlap the range.
struct RuleCounter;

impl TransitionSimulator for RuleCounter {
    fn estimate_buffer(
        &self,
        _zone_name: &str,
        eras: &[ZoneEraRecord],
        policies: &PolicyMap,
        start_year: i32,
        until_year: i32,
    ) -> BufferSizes {
        let names: BTreeSet<&str> = eras
            .iter()
            .filter_map(|era| era.rules.policy_name())
            .collect();
        let rules = names
            .iter()
            .filter_map(|name| policies.get(*name))
            .flatten()
            .filter(|rule| rule.from_year < until_year && rule.to_year >= start_year)
            .count();
        BufferSizes {
            max_active_count: rules,
            max_buffer_size: eras.len() + rules,
        }
    }
}

#[test]
fn estimates_every_parsed_zone() {
    let db = Extractor::new()
        .parse(&tzdb_dir(), &DEFAULT_ZONE_FILES)
        .unwrap();
    let config = Config::default();
    let estimator = BufferEstimator::from_config(&RuleCounter, &config.estimator);

    let estimate = estimator.estimate_all(&db.zones, &db.policies);

    assert_eq!(estimate.sizes.len(), db.zones.len());
    assert!(estimate.sizes.values().all(|&size| size >= 1));
    assert_eq!(estimate.overall_max, *estimate.sizes.values().max().unwrap());

    // 1 era + 0 overlapping rules + free agent
    assert_eq!(estimate.sizes["Etc/UTC"], 2);
    // 3 eras + 2 US rules from 2007 + free agent
    assert_eq!(estimate.sizes["America/Chicago"], 6);
    // 6 eras + RussiaAsia ends in 1984 + free agent + exception
    assert_eq!(estimate.sizes["Asia/Atyrau"], 8);
}

#[test]
fn exception_table_only_touches_named_zones() {
    let db = Extractor::new()
        .parse(&tzdb_dir(), &DEFAULT_ZONE_FILES)
        .unwrap();

    let with = BufferExceptions::default();
    let without = BufferExceptions::empty();
    let a = BufferEstimator::new(&RuleCounter, &with, 2000, 2050)
        .estimate_all(&db.zones, &db.policies);
    let b = BufferEstimator::new(&RuleCounter, &without, 2000, 2050)
        .estimate_all(&db.zones, &db.policies);

    for (name, size) in &a.sizes {
        let expected = b.sizes[name] + with.extra_slots(name);
        assert_eq!(*size, expected, "{name}");
    }
    assert_eq!(a.sizes["Asia/Atyrau"], b.sizes["Asia/Atyrau"] + 1);
}
