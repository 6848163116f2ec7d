use road_chainage::{
    ChainageError,
    geodesy::{
        LngLat,
        datum::{
            Datum, bd09_to_gcj02, bd09_to_wgs84, convert, gcj02_to_bd09, gcj02_to_wgs84,
            is_outside_china, wgs84_to_bd09, wgs84_to_gcj02,
        },
    },
};

#[test]
fn wgs84_to_gcj02_known_values() {
    let wuhan = wgs84_to_gcj02(LngLat::new(114.304569, 30.593354));
    assert!(wuhan.fuzzy_eq_eps(LngLat::new(114.310012, 30.590943), 1e-6));

    let beijing = wgs84_to_gcj02(LngLat::new(116.407387, 39.904179));
    assert!(beijing.fuzzy_eq_eps(LngLat::new(116.413629, 39.905582), 1e-6));
}

#[test]
fn gcj02_inverse_is_approximate() {
    let wgs = LngLat::new(116.407387, 39.904179);
    let back = gcj02_to_wgs84(wgs84_to_gcj02(wgs));
    // single correction step, a few decimeters off
    assert!(back.fuzzy_eq_eps(wgs, 1e-5));
    assert!(!back.fuzzy_eq_eps(wgs, 1e-9));
}

#[test]
fn bd09_round_trips() {
    let gcj = LngLat::new(116.41362925566605, 39.905582345020235);
    let bd = gcj02_to_bd09(gcj);
    assert!(bd.fuzzy_eq_eps(LngLat::new(116.42003329878463, 39.911844499917905), 1e-9));
    assert!(bd09_to_gcj02(bd).fuzzy_eq_eps(gcj, 1e-5));

    let wgs = LngLat::new(114.304569, 30.593354);
    assert!(bd09_to_wgs84(wgs84_to_bd09(wgs)).fuzzy_eq_eps(wgs, 2e-5));
}

#[test]
fn convert_dispatches() {
    let p = LngLat::new(114.304569, 30.593354);
    let all = [Datum::Wgs84, Datum::Gcj02, Datum::Bd09];
    for d in all {
        assert_eq!(convert(p, d, d), p);
    }

    assert_eq!(convert(p, Datum::Wgs84, Datum::Gcj02), wgs84_to_gcj02(p));
    assert_eq!(convert(p, Datum::Gcj02, Datum::Wgs84), gcj02_to_wgs84(p));
    assert_eq!(convert(p, Datum::Gcj02, Datum::Bd09), gcj02_to_bd09(p));
    assert_eq!(convert(p, Datum::Bd09, Datum::Gcj02), bd09_to_gcj02(p));
    assert_eq!(convert(p, Datum::Wgs84, Datum::Bd09), wgs84_to_bd09(p));
    assert_eq!(convert(p, Datum::Bd09, Datum::Wgs84), bd09_to_wgs84(p));
    assert_eq!(p.convert(Datum::Wgs84, Datum::Gcj02), wgs84_to_gcj02(p));
}

#[test]
fn conversion_applies_outside_china() {
    let london = LngLat::new(-0.1276, 51.5072);
    assert!(is_outside_china(london));
    // no automatic bounding box check
    assert_ne!(wgs84_to_gcj02(london), london);

    assert!(!is_outside_china(LngLat::new(114.304569, 30.593354)));
    assert!(is_outside_china(LngLat::new(140.0, 35.0)));
    assert!(is_outside_china(LngLat::new(116.0, 0.5)));
}

#[test]
fn datum_names() {
    assert_eq!(Datum::Gcj02.to_string(), "GCJ02");
    assert_eq!("wgs84".parse::<Datum>(), Ok(Datum::Wgs84));
    assert_eq!(" BD09 ".parse::<Datum>(), Ok(Datum::Bd09));
    assert_eq!("GCJ-02".parse::<Datum>(), Ok(Datum::Gcj02));
    assert_eq!(
        "utm".parse::<Datum>(),
        Err(ChainageError::UnknownDatum("utm".to_string()))
    );
    assert_eq!(Datum::default(), Datum::Wgs84);
}
