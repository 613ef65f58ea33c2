use urania::aspects::{
    detect_aspects, AspectCalculator, AspectKind, AspectTable, MotionPolicy, PositionalPolicy,
};
use urania::{ChartPoint, ConfigError, PointId};

fn point(id: PointId, longitude: f64) -> ChartPoint {
    ChartPoint::new(id, longitude, None, 0)
}

#[test]
fn test_trine_detection() {
    let calculator = AspectCalculator::default();
    let aspect = calculator
        .calculate_aspect(&point(PointId::Sun, 10.0), &point(PointId::Moon, 130.0))
        .unwrap();

    assert_eq!(calculator.table().kinds()[aspect.aspect_type].name, "trine");
    assert!(aspect.orb.abs() < 1e-9);
    assert!(aspect.applying);
    assert!(aspect.is_exact());
}

#[test]
fn test_argument_order_does_not_matter() {
    let calculator = AspectCalculator::default();
    let sun = point(PointId::Sun, 10.0);
    let mars = point(PointId::Mars, 72.5);

    let forward = calculator.calculate_aspect(&sun, &mars).unwrap();
    let backward = calculator.calculate_aspect(&mars, &sun).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward.point1, PointId::Sun.index());
    assert_eq!(forward.point2, PointId::Mars.index());
    assert!((forward.orb - 2.5).abs() < 1e-9);
}

#[test]
fn test_separating_when_first_point_is_ahead() {
    let calculator = AspectCalculator::default();
    let aspect = calculator
        .calculate_aspect(&point(PointId::Sun, 130.0), &point(PointId::Moon, 10.0))
        .unwrap();
    assert!(!aspect.applying);
}

#[test]
fn test_no_aspect_outside_orbs() {
    let calculator = AspectCalculator::default();
    assert!(calculator
        .calculate_aspect(&point(PointId::Sun, 0.0), &point(PointId::Moon, 40.0))
        .is_none());
}

#[test]
fn test_same_point_is_skipped() {
    let calculator = AspectCalculator::default();
    assert!(calculator
        .calculate_aspect(&point(PointId::Sun, 0.0), &point(PointId::Sun, 0.0))
        .is_none());
}

#[test]
fn test_wraparound_conjunction() {
    let calculator = AspectCalculator::default();
    let aspect = calculator
        .calculate_aspect(&point(PointId::Venus, 358.0), &point(PointId::Mars, 3.0))
        .unwrap();
    assert_eq!(calculator.table().kinds()[aspect.aspect_type].name, "conjunction");
    assert!((aspect.orb - 5.0).abs() < 1e-9);
}

#[test]
fn test_first_matching_type_wins() {
    let table = AspectTable::new(vec![
        AspectKind::new("wide", 90.0, 10.0),
        AspectKind::new("narrow", 95.0, 2.0),
    ])
    .unwrap();
    let points = vec![point(PointId::Sun, 0.0), point(PointId::Moon, 95.0)];

    let aspects = detect_aspects(&points, &table, &PositionalPolicy);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect_type, 0);
    assert!((aspects[0].orb - 5.0).abs() < 1e-9);
}

#[test]
fn test_detect_visits_each_pair_once() {
    let points = vec![
        point(PointId::Sun, 0.0),
        point(PointId::Moon, 120.0),
        point(PointId::Mercury, 240.0),
    ];
    let aspects = detect_aspects(&points, &AspectTable::reference(), &PositionalPolicy);
    assert_eq!(aspects.len(), 3);
    for aspect in &aspects {
        assert!(aspect.point1 < aspect.point2);
    }
}

#[test]
fn test_motion_policy_uses_speeds() {
    let table = AspectTable::reference();
    // Moon at 85° moving 13°/day toward an exact square with the Sun at 0°
    let points = vec![
        ChartPoint::new(PointId::Sun, 0.0, Some(1.0), 0),
        ChartPoint::new(PointId::Moon, 85.0, Some(13.0), 0),
    ];
    let aspects = detect_aspects(&points, &table, &MotionPolicy::default());
    assert_eq!(aspects.len(), 1);
    assert!(aspects[0].applying);

    let points = vec![
        ChartPoint::new(PointId::Sun, 0.0, Some(1.0), 0),
        ChartPoint::new(PointId::Moon, 95.0, Some(13.0), 0),
    ];
    let aspects = detect_aspects(&points, &table, &MotionPolicy::default());
    assert!(!aspects[0].applying);
}

#[test]
fn test_table_from_columns() {
    let table = AspectTable::from_columns(
        &["conjunction", "opposition"],
        &[0.0, 180.0],
        &[8.0, 8.0],
    )
    .unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1).unwrap().name, "opposition");

    let err = AspectTable::from_columns(&["conjunction"], &[0.0, 180.0], &[8.0]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::TableLengthMismatch {
            names: 1,
            angles: 2,
            orbs: 1
        }
    ));
}

#[test]
fn test_table_validation() {
    assert!(matches!(
        AspectTable::new(Vec::new()),
        Err(ConfigError::EmptyAspectTable)
    ));
    assert!(matches!(
        AspectTable::new(vec![AspectKind::new("square", 90.0, -1.0)]),
        Err(ConfigError::InvalidOrb { .. })
    ));
    assert!(matches!(
        AspectTable::new(vec![AspectKind::new("wide", 200.0, 5.0)]),
        Err(ConfigError::InvalidAngle { .. })
    ));

    let mut kind = AspectKind::new("square", 90.0, 6.0);
    kind.color = "purple".to_string();
    assert!(matches!(
        AspectTable::new(vec![kind]),
        Err(ConfigError::InvalidColor(_))
    ));
}

#[test]
fn test_detection_ignores_input_order() {
    let points = vec![
        point(PointId::Sun, 10.0),
        point(PointId::Moon, 130.0),
        point(PointId::Mars, 72.5),
        point(PointId::Saturn, 190.0),
        point(PointId::Pluto, 251.0),
    ];
    let table = AspectTable::reference();
    let mut forward = detect_aspects(&points, &table, &PositionalPolicy);

    let reversed: Vec<ChartPoint> = points.iter().rev().cloned().collect();
    let mut backward = detect_aspects(&reversed, &table, &PositionalPolicy);

    let key = |a: &urania::Aspect| (a.point1, a.point2);
    forward.sort_by_key(key);
    backward.sort_by_key(key);
    assert!(!forward.is_empty());
    assert_eq!(forward, backward);
}

#[test]
fn test_aspects_follow_pair_order() {
    let points = vec![
        point(PointId::Sun, 0.0),
        point(PointId::Moon, 60.0),
        point(PointId::Mercury, 120.0),
        point(PointId::Venus, 180.0),
    ];
    let aspects = detect_aspects(&points, &AspectTable::reference(), &PositionalPolicy);

    let order: Vec<(usize, usize, usize)> = aspects
        .iter()
        .map(|a| (a.point1, a.point2, a.aspect_type))
        .collect();
    // Reference table order: conjunction, trine, sextile, opposition, square
    assert_eq!(
        order,
        vec![(0, 1, 2), (0, 2, 1), (0, 3, 3), (1, 2, 2), (1, 3, 1), (2, 3, 2)]
    );
}
