//! Integration tests for chart assembly and projections.
//!
//! Golden values use the fixed-cutover calendar and the 2000-01-01 =
//! Jia-Chen day anchor.

use bazi_chart::{
    BaZiChart, ChartError, Direction, LuckPillarSequence, Sex, annual_pillar, annual_pillars,
    hour_pillar, solar_year_pillar,
};
use bazi_cycle::{ALL_STEMS, Branch, Pillar, Stem, TenGod, index_of, ten_god};
use bazi_time::{CivilDate, TimeError};

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

#[test]
fn year_index_of_mid_2000() {
    let c = BaZiChart::from_solar(2000, 7, 15, 16).unwrap();
    assert_eq!(index_of(c.year().stem, c.year().branch).unwrap().index(), 16);
}

#[test]
fn day_pillar_of_anchor() {
    let c = BaZiChart::from_solar(2000, 1, 1, 12).unwrap();
    assert_eq!(c.day(), Pillar::new(Stem::Jia, Branch::Chen));
}

#[test]
fn every_chart_pillar_is_cyclic() {
    let start = CivilDate::new(1995, 1, 1).unwrap();
    for k in (0..3000).step_by(7) {
        let d = start.add_days(k).unwrap();
        for h in [0, 5, 11, 17, 23] {
            let c = BaZiChart::from_solar(d.year(), d.month(), d.day(), h).unwrap();
            for p in c.pillars() {
                assert!(p.is_cyclic(), "{d} {h}: {}", p.name());
            }
        }
    }
}

#[test]
fn void_branches_follow_day_pillar() {
    let start = CivilDate::new(2010, 3, 1).unwrap();
    for k in 0..60 {
        let d = start.add_days(k).unwrap();
        let c = BaZiChart::from_solar(d.year(), d.month(), d.day(), 8).unwrap();
        let (a, b) = c.void_branches();
        assert_eq!(a.forward(1), b);
        assert_eq!((a, b), c.day().void_branches());
    }
}

#[test]
fn rejects_bad_input() {
    assert_eq!(
        BaZiChart::from_solar(2000, 13, 1, 0),
        Err(ChartError::Time(TimeError::InvalidDate {
            year: 2000,
            month: 13,
            day: 1
        }))
    );
    assert!(BaZiChart::from_solar(2000, 1, 1, 99).is_err());
}

#[test]
fn late_and_early_rat_hours_agree() {
    for s in ALL_STEMS {
        assert_eq!(hour_pillar(s, 23), hour_pillar(s, 0));
    }
}

// ---------------------------------------------------------------------------
// Ten-God
// ---------------------------------------------------------------------------

#[test]
fn ten_god_self_is_peer() {
    for s in ALL_STEMS {
        assert_eq!(ten_god(s, s), TenGod::Peer);
    }
}

#[test]
fn ten_god_is_asymmetric() {
    assert_eq!(ten_god(Stem::Jia, Stem::Bing), TenGod::EatingGod);
    assert_eq!(ten_god(Stem::Bing, Stem::Jia), TenGod::IndirectSeal);
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

#[test]
fn flipping_sex_flips_direction() {
    let start = CivilDate::new(1980, 3, 1).unwrap();
    for k in 0..12 {
        let d = start.add_days(365 * k).unwrap();
        let c = BaZiChart::from_solar(d.year(), d.month(), d.day(), 10).unwrap();
        let m = LuckPillarSequence::generate(&c, Sex::Male, d.year(), 10);
        let f = LuckPillarSequence::generate(&c, Sex::Female, d.year(), 10);
        assert_eq!(m.direction().opposite(), f.direction());
        // The two first pillars sit on either side of the month pillar.
        assert_eq!(m.pillars()[0].pillar.backward(2 * m.direction().step()), f.pillars()[0].pillar);
    }
}

#[test]
fn luck_ages_are_contiguous_and_disjoint() {
    let c = BaZiChart::from_solar(1988, 11, 2, 6).unwrap();
    let seq = LuckPillarSequence::generate(&c, Sex::Female, 1988, 10);
    assert_eq!(seq.direction(), Direction::Backward);
    let mut expected_start = 3;
    for p in &seq {
        assert_eq!(p.start_age, expected_start);
        assert_eq!(p.end_age, p.start_age + 9);
        assert_eq!(p.start_year, 1988 + p.start_age);
        expected_start = p.end_age + 1;
    }
    for age in 3..103 {
        assert_eq!(seq.iter().filter(|p| p.contains_age(age)).count(), 1);
    }
}

#[test]
fn annual_age_differences_match_year_differences() {
    let c = BaZiChart::from_solar(1975, 5, 20, 14).unwrap();
    for (y1, y2) in [(1980, 2000), (2024, 2031), (1975, 1976)] {
        let a1 = annual_pillar(y1, 1975, c.day_stem());
        let a2 = annual_pillar(y2, 1975, c.day_stem());
        assert_eq!(a2.age - a1.age, i64::from(y2 - y1));
    }
}

#[test]
fn annual_pillars_cover_a_full_cycle() {
    let v = annual_pillars(1984, 60, 1984, Stem::Wu);
    assert_eq!(v[0].pillar, Pillar::new(Stem::Jia, Branch::Zi));
    assert_eq!(v[59].pillar, Pillar::new(Stem::Gui, Branch::Hai));
    assert_eq!(v[59].age, 60);
}

// ---------------------------------------------------------------------------
// Representable extremes
// ---------------------------------------------------------------------------

#[test]
fn charts_at_i32_year_bounds() {
    let first = BaZiChart::from_solar(i32::MIN, 1, 1, 0).unwrap();
    assert_eq!(first.year(), solar_year_pillar(i32::MIN as i64 - 1));
    let last = BaZiChart::from_solar(i32::MAX, 12, 31, 23).unwrap();
    assert_eq!(last.year(), solar_year_pillar(i32::MAX as i64));
    for c in [first, last] {
        for p in c.pillars() {
            assert!(p.is_cyclic(), "{}", p.name());
        }
    }

    let seq = LuckPillarSequence::generate(&last, Sex::Male, i32::MAX, 10);
    assert_eq!(seq.pillars()[9].end_year, i32::MAX as i64 + 102);
    let a = annual_pillar(i32::MAX, i32::MIN, last.day_stem());
    assert_eq!(a.age, u32::MAX as i64 + 1);
}
