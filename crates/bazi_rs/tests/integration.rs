//! Integration tests for bazi_rs.

use bazi_rs::*;

#[test]
fn reading_end_to_end() {
    let r = Reading::parse("2000-07-15T16", Sex::Male).unwrap();
    let c = r.chart();
    assert_eq!(c.year().sexagenary().unwrap().index(), 16);
    assert_eq!(c.void_branches(), (Branch::Zi, Branch::Chou));
    assert_eq!(r.luck().len(), DEFAULT_LUCK_PILLAR_COUNT);
    assert_eq!(r.luck().onset_age(), DEFAULT_ONSET_AGE);
    assert_eq!(r.stem_ten_gods()[PillarPosition::Day.index() as usize], TenGod::Peer);
}

#[test]
fn sex_flip_flips_direction() {
    let birth = BirthTime::from_parts(1991, 9, 9, 9).unwrap();
    let m = Reading::new(birth, Sex::Male);
    let f = Reading::new(birth, Sex::Female);
    assert_eq!(m.chart(), f.chart());
    assert_eq!(m.luck().direction(), f.luck().direction().opposite());
}

#[test]
fn annual_range_matches_single_lookups() {
    let r = Reading::from_solar(1985, 12, 1, 3, Sex::Female).unwrap();
    let range = r.annual_range(2020, 5);
    for a in &range {
        assert_eq!(*a, r.annual(a.year));
    }
    assert_eq!(range[0].age, 2020 - 1985 + 1);
}

#[test]
fn custom_config_reading() {
    let birth = BirthTime::from_parts(2000, 7, 15, 16).unwrap();
    let config = LuckPillarConfig {
        onset_age: 5,
        count: 8,
    };
    let r = Reading::with_config(birth, Sex::Male, &config);
    assert_eq!(r.luck().len(), 8);
    assert!(r.luck_pillar_at(4).is_none());
    assert_eq!(r.luck_pillar_at(5).map(|p| p.order), Some(0));
}

#[test]
fn errors_display() {
    let e = Reading::from_solar(2023, 2, 29, 0, Sex::Male).unwrap_err();
    assert_eq!(e.to_string(), "invalid calendar date: 2023-02-29");
    let e = parse_sex("other").unwrap_err();
    assert_eq!(e.to_string(), "unknown sex: \"other\"");
}
