//! Chart pipeline: validate, convert time, query the engine, assemble.

use crate::engine::{Body, EphemerisEngine};
use crate::error::ChartError;
use crate::models::{
    julian_day_for, AnglePoint, BirthQuery, ChartRequest, ChartResult, HouseCusps, JulianDay,
    SignLocale,
};

/// House (1-12) holding `body`, or `None` when the cusps leave it uncovered.
fn body_house(
    engine: &dyn EphemerisEngine,
    jd: JulianDay,
    cusps: &HouseCusps,
    body: Body,
) -> Result<Option<u8>, ChartError> {
    let lon = engine.body_longitude(jd, body)?;
    let house = cusps.house_of(lon);
    if house.is_none() {
        log::warn!("{body} at {:.4} not covered by any house", lon.degrees());
    }
    Ok(house)
}

/// Compute a validated query.
pub fn compute_for_query(
    engine: &dyn EphemerisEngine,
    query: &BirthQuery,
    locale: SignLocale,
) -> Result<ChartResult, ChartError> {
    let jd = julian_day_for(query)?;
    let positions = engine.houses(jd, query.latitude, query.longitude, query.house_system)?;

    let sun_house = body_house(engine, jd, &positions.cusps, Body::Sun)?;
    let moon_house = body_house(engine, jd, &positions.cusps, Body::Moon)?;

    Ok(ChartResult {
        house_system: query.house_system.to_string(),
        ascendant: AnglePoint::new(positions.ascendant, locale),
        mc: AnglePoint::new(positions.midheaven, locale),
        cusps: positions.cusps,
        sun_house,
        moon_house,
    })
}

/// Full pipeline for a raw request.
pub fn compute_chart(
    engine: &dyn EphemerisEngine,
    request: &ChartRequest,
    locale: SignLocale,
) -> Result<ChartResult, ChartError> {
    let query = BirthQuery::validate(request)?;
    log::debug!(
        "chart for {} {} ({}, {}) {} system {} via {}",
        request.birth_date,
        request.birth_time,
        query.latitude,
        query.longitude,
        query.timezone_name,
        query.house_system,
        engine.name()
    );
    compute_for_query(engine, &query, locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FixtureEngine, HousePositions, NativeEngine};
    use crate::error::{OracleError, ValidationError};

    fn berlin(time: &str, tz: &str, system: Option<&str>) -> ChartRequest {
        ChartRequest {
            birth_date: "2000-01-01".into(),
            birth_time: time.into(),
            lat: 52.52,
            lon: 13.405,
            tzname: tz.into(),
            house_system: system.map(str::to_string),
        }
    }

    #[test]
    fn fixture_pipeline() {
        let engine = FixtureEngine::berlin_2000();
        let chart =
            compute_chart(&engine, &berlin("12:00", "Europe/Berlin", None), SignLocale::English)
                .unwrap();
        assert_eq!(chart.house_system, "P");
        assert_eq!(chart.ascendant.sign, "Aries");
        assert_eq!(chart.mc.sign, "Capricorn");
        assert_eq!(chart.sun_house, Some(10));
        assert_eq!(chart.moon_house, Some(7));
    }

    #[test]
    fn native_pipeline_matches_reference_chart() {
        let chart = compute_chart(
            &NativeEngine,
            &berlin("12:00", "Europe/Berlin", Some(" ")),
            SignLocale::German,
        )
        .unwrap();
        assert_eq!(chart.house_system, "P");
        assert_eq!(chart.ascendant.sign, "Widder");
        assert_eq!(chart.mc.sign, "Steinbock");
        assert_eq!(chart.sun_house, Some(10));
        assert_eq!(chart.moon_house, Some(7));
    }

    #[test]
    fn echoes_normalized_system_code() {
        let chart = compute_chart(
            &NativeEngine,
            &berlin("12:00", "Europe/Berlin", Some(" Whole")),
            SignLocale::English,
        )
        .unwrap();
        assert_eq!(chart.house_system, "W");
    }

    #[test]
    fn validation_runs_before_timezone_lookup() {
        let err = compute_chart(
            &FixtureEngine::default(),
            &berlin("24:00", "Not/AZone", None),
            SignLocale::English,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ChartError::Validation(ValidationError { field: "birthTime", .. })
        ));
    }

    #[test]
    fn unknown_timezone() {
        let err = compute_chart(
            &FixtureEngine::default(),
            &berlin("12:00", "Not/AZone", None),
            SignLocale::English,
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::Timezone(_)));
    }

    #[test]
    fn engine_failures_propagate() {
        let err = compute_chart(
            &FixtureEngine::rejecting("polar circle"),
            &berlin("12:00", "Europe/Berlin", None),
            SignLocale::English,
        )
        .unwrap_err();
        assert_eq!(err, ChartError::Oracle(OracleError::Rejected("polar circle".into())));
    }

    #[test]
    fn uncovered_body_yields_null_house() {
        let flat = HouseCusps::from_degrees([10.0; 12]);
        let engine = FixtureEngine::new(
            HousePositions {
                cusps: flat,
                ascendant: 10.0.into(),
                midheaven: 10.0.into(),
            },
            100.0.into(),
            200.0.into(),
        );
        let chart =
            compute_chart(&engine, &berlin("12:00", "UTC", None), SignLocale::English).unwrap();
        assert_eq!(chart.sun_house, None);
        assert_eq!(chart.moon_house, None);
    }
}
