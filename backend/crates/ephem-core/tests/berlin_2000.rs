//! Regression values for a noon chart in Berlin on 2000-01-01 (11:00 UT).

use approx::assert_abs_diff_eq;
use ephem_core::{body_longitude, houses, julian_day, Body, Error, HouseSystem};

fn jd() -> f64 {
    julian_day(2000, 1, 1, 11.0)
}

#[test]
fn julian_day_for_berlin_noon() {
    assert_abs_diff_eq!(jd(), 2_451_544.958_333_333, epsilon = 1e-8);
}

#[test]
fn luminaries() {
    let sun = body_longitude(jd(), Body::Sun).unwrap();
    let moon = body_longitude(jd(), Body::Moon).unwrap();
    // 10°20' Capricorn, 12°49' Scorpio
    assert_abs_diff_eq!(sun, 280.33, epsilon = 0.02);
    assert_abs_diff_eq!(moon, 222.82, epsilon = 0.1);
}

#[test]
fn placidus_angles() {
    let set = houses(jd(), 52.52, 13.405, HouseSystem::Placidus).unwrap();
    assert_abs_diff_eq!(set.midheaven, 278.10, epsilon = 0.02);
    assert_abs_diff_eq!(set.ascendant, 21.57, epsilon = 0.02);
    assert_abs_diff_eq!(set.cusps[0], set.ascendant, epsilon = 1e-9);
    assert_abs_diff_eq!(set.cusps[9], set.midheaven, epsilon = 1e-9);
    assert_abs_diff_eq!(set.cusps[1], 60.08, epsilon = 0.05);
    assert_abs_diff_eq!(set.cusps[10], 296.90, epsilon = 0.05);
}

#[test]
fn all_systems_produce_twelve_ordered_cusps() {
    for system in HouseSystem::ALL {
        let set = houses(jd(), 52.52, 13.405, system).unwrap();
        let total: f64 = (0..12)
            .map(|i| (set.cusps[(i + 1) % 12] - set.cusps[i]).rem_euclid(360.0))
            .sum();
        assert_abs_diff_eq!(total, 360.0, epsilon = 1e-6);
        assert!(set.cusps.iter().all(|c| (0.0..360.0).contains(c)), "{system}");
    }
}

#[test]
fn quadrant_systems_pin_the_angles() {
    for system in HouseSystem::ALL.into_iter().filter(|s| s.is_quadrant()) {
        let set = houses(jd(), 52.52, 13.405, system).unwrap();
        assert_abs_diff_eq!(set.cusps[0], set.ascendant, epsilon = 1e-6);
        assert_abs_diff_eq!(set.cusps[9], set.midheaven, epsilon = 1e-6);
    }
}

#[test]
fn equal_family() {
    let equal = houses(jd(), 52.52, 13.405, HouseSystem::Equal).unwrap();
    assert_abs_diff_eq!(equal.cusps[3], (equal.ascendant + 90.0) % 360.0, epsilon = 1e-6);

    let whole = houses(jd(), 52.52, 13.405, HouseSystem::WholeSign).unwrap();
    assert_abs_diff_eq!(whole.cusps[0], 0.0, epsilon = 1e-9);

    let aries = houses(jd(), 52.52, 13.405, HouseSystem::EqualAries).unwrap();
    assert_abs_diff_eq!(aries.cusps[11], 330.0, epsilon = 1e-9);
}

#[test]
fn tromso_rejects_placidus() {
    let err = houses(jd(), 69.65, 18.96, HouseSystem::Placidus).unwrap_err();
    assert!(matches!(err, Error::PolarLatitude { system: 'P', .. }));
}

#[test]
fn concurrent_calls_agree() {
    let expected = houses(jd(), 52.52, 13.405, HouseSystem::Koch).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let set = houses(jd(), 52.52, 13.405, HouseSystem::Koch).unwrap();
                let sun = body_longitude(jd(), Body::Sun).unwrap();
                (set, sun)
            })
        })
        .collect();
    for handle in handles {
        let (set, sun) = handle.join().unwrap();
        assert_eq!(set, expected);
        assert_abs_diff_eq!(sun, 280.33, epsilon = 0.02);
    }
}
