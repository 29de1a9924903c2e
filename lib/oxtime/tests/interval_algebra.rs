use oxentail::{Axiom, DataProperty, ObjectProperty, Ontology};
use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNode};
use oxsdatatypes::{DateTime, Decimal, Duration};
use oxtime::vocabulary::{time, trs};
use oxtime::{
    AllenRelation, DateTimeDescription, DurationDescription, InstantPosition, IntervalAlgebra,
    IntervalExtent, RegistryError, TimeDuration, TimeError, TimeInstant, TimeInterval, TimeRegistry,
    declare_instant_feature, declare_interval_feature,
};
use std::str::FromStr;

fn ex(name: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.org/{name}"))
}

fn date_time(value: &str) -> DateTime {
    DateTime::from_str(value).unwrap()
}

fn instant(name: &str, value: &str) -> TimeInstant {
    TimeInstant::from_date_time(ex(name), date_time(value))
}

fn declare(ontology: &mut Ontology, feature: &str, beginning: Option<&str>, end: Option<&str>) {
    declare_interval_feature(
        ontology,
        &TimeRegistry::default(),
        &ex(feature),
        &TimeInterval::from_bounds(
            ex(&format!("{feature}Interval")),
            beginning.map(|value| instant(&format!("{feature}Beginning"), value)),
            end.map(|value| instant(&format!("{feature}End"), value)),
        ),
    )
    .unwrap();
}

fn scenario() -> Ontology {
    let mut ontology = Ontology::new(Some(ex("intervals")));
    declare(
        &mut ontology,
        "A",
        Some("2023-05-05T20:47:15Z"),
        Some("2023-05-08T20:47:15Z"),
    );
    declare(
        &mut ontology,
        "B",
        Some("2023-05-08T20:47:15Z"),
        Some("2023-05-10T20:47:15Z"),
    );
    declare(
        &mut ontology,
        "C",
        Some("2023-04-30T20:47:15Z"),
        Some("2023-05-02T20:47:15Z"),
    );
    declare(&mut ontology, "D", Some("2023-05-03T00:00:00Z"), None);
    ontology
}

#[test]
fn test_after() {
    let ontology = scenario();
    let algebra = IntervalAlgebra::default();
    assert!(
        algebra
            .check_after(&ontology, Some(&ex("A")), Some(&ex("C")))
            .unwrap()
    );
    assert!(
        algebra
            .check_before(&ontology, Some(&ex("C")), Some(&ex("A")))
            .unwrap()
    );
    assert!(
        !algebra
            .check_before(&ontology, Some(&ex("A")), Some(&ex("C")))
            .unwrap()
    );
    // Intervals can be named directly instead of through their feature.
    assert!(
        algebra
            .check_after(&ontology, Some(&ex("AInterval")), Some(&ex("C")))
            .unwrap()
    );
    assert_eq!(
        algebra
            .relations(&ontology, Some(&ex("A")), Some(&ex("B")))
            .unwrap(),
        [AllenRelation::Meets]
    );
    assert!(
        algebra
            .check_met_by(&ontology, Some(&ex("B")), Some(&ex("A")))
            .unwrap()
    );
}

#[test]
fn test_self_relations() {
    let ontology = scenario();
    let algebra = IntervalAlgebra::default();
    let a = Some(&ex("A"));
    assert!(!algebra.check_meets(&ontology, a, a).unwrap());
    assert!(!algebra.check_before(&ontology, a, a).unwrap());
    assert!(!algebra.check_after(&ontology, a, a).unwrap());
    assert!(!algebra.check_during(&ontology, a, a).unwrap());
    assert!(algebra.check_equals(&ontology, a, a).unwrap());
    assert_eq!(
        algebra.relations(&ontology, a, a).unwrap(),
        [AllenRelation::Equals]
    );
}

#[test]
fn test_unresolved_bounds() {
    let ontology = scenario();
    let algebra = IntervalAlgebra::default();
    let (c, d) = (Some(&ex("C")), Some(&ex("D")));
    // D has no end: nothing depending on it can be established.
    assert!(!algebra.check_before(&ontology, d, c).unwrap());
    assert!(!algebra.check_overlaps(&ontology, c, d).unwrap());
    assert!(!algebra.check_contains(&ontology, c, d).unwrap());
    assert!(!algebra.check_equals(&ontology, d, d).unwrap());
    // C ends before D begins, which is enough.
    assert!(algebra.check_before(&ontology, c, d).unwrap());
    // Unknown identifiers are just unknown intervals.
    assert!(
        algebra
            .relations(&ontology, Some(&ex("Unknown")), c)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_view_evaluates_many_pairs() {
    let mut ontology = scenario();
    let algebra = IntervalAlgebra::default();
    let view = algebra.view(&ontology);
    let features: Vec<_> = ["A", "B", "C", "D"].into_iter().map(ex).collect();
    for left in &features {
        for right in &features {
            assert_eq!(
                view.relations(Some(left), Some(right)).unwrap(),
                algebra
                    .relations(&ontology, Some(left), Some(right))
                    .unwrap()
            );
        }
    }
    assert!(matches!(
        view.check(AllenRelation::Before, Some(&ex("C")), Some(&ex("D"))),
        Ok(true)
    ));
    assert!(matches!(
        view.check(AllenRelation::Before, None, Some(&ex("C"))),
        Err(TimeError::MissingIntervalIdentifier("left"))
    ));

    // D gets an end the existing view does not see.
    ontology.add_axiom(Axiom::object_property_assertion(
        ObjectProperty::from(time::HAS_END),
        ex("DInterval"),
        ex("DEnd"),
    ));
    ontology.add_axiom(Axiom::data_property_assertion(
        DataProperty::from(time::IN_XSD_DATE_TIME_STAMP),
        ex("DEnd"),
        Literal::new_typed_literal("2023-05-04T00:00:00Z", xsd::DATE_TIME_STAMP),
    ));
    assert_eq!(view.resolve(&ex("D")).end, None);
    let view = algebra.view(&ontology);
    assert_eq!(
        view.resolve(&ex("D")).end,
        Some(date_time("2023-05-04T00:00:00Z"))
    );
    assert!(matches!(
        view.check(AllenRelation::After, Some(&ex("A")), Some(&ex("D"))),
        Ok(true)
    ));
}

#[test]
fn test_missing_identifier() {
    let ontology = scenario();
    let algebra = IntervalAlgebra::default();
    assert!(matches!(
        algebra.check_before(&ontology, None, Some(&ex("A"))),
        Err(TimeError::MissingIntervalIdentifier("left"))
    ));
    assert!(matches!(
        algebra.check_equals(&ontology, Some(&ex("A")), None),
        Err(TimeError::MissingIntervalIdentifier("right"))
    ));
    assert!(algebra.relations(&ontology, None, None).is_err());
}

#[test]
fn test_missing_bound_from_duration() {
    let registry = TimeRegistry::default();
    let mut ontology = scenario();
    declare(&mut ontology, "E", Some("2023-05-02T20:47:15Z"), None);
    // Extents written by hand can combine a bound and a duration.
    ontology.add_axiom(Axiom::data_property_assertion(
        DataProperty::from(time::HAS_XSD_DURATION),
        ex("EInterval"),
        Literal::new_typed_literal("P3D", xsd::DURATION),
    ));
    let algebra = IntervalAlgebra::new(registry);
    let resolved = algebra.resolve(&ontology, &ex("E"));
    assert_eq!(resolved.end, Some(date_time("2023-05-05T20:47:15Z")));
    assert!(
        algebra
            .check_meets(&ontology, Some(&ex("E")), Some(&ex("A")))
            .unwrap()
    );
    assert!(
        algebra
            .check_met_by(&ontology, Some(&ex("E")), Some(&ex("C")))
            .unwrap()
    );
}

#[test]
fn test_instant_positions() {
    let registry = TimeRegistry::default();
    let mut ontology = Ontology::new(None);
    declare_instant_feature(
        &mut ontology,
        &registry,
        &ex("Launch"),
        &TimeInstant::with_position(
            ex("LaunchInstant"),
            InstantPosition::Numeric {
                trs: trs::UNIX_TIME.into_owned(),
                value: Decimal::from(1_683_319_635),
            },
        ),
    )
    .unwrap();
    declare_instant_feature(
        &mut ontology,
        &registry,
        &ex("Landing"),
        &TimeInstant::with_position(
            ex("LandingInstant"),
            InstantPosition::Description(DateTimeDescription {
                year: 2023,
                month: Some(5),
                day: Some(8),
                hour: Some(20),
                minute: Some(47),
                second: Some(Decimal::from(15)),
            }),
        ),
    )
    .unwrap();
    declare_interval_feature(
        &mut ontology,
        &registry,
        &ex("Flight"),
        &TimeInterval::from_bounds(
            ex("FlightInterval"),
            Some(TimeInstant::new(ex("LaunchInstant"))),
            Some(TimeInstant::new(ex("LandingInstant"))),
        ),
    )
    .unwrap();

    let algebra = IntervalAlgebra::new(registry);
    let flight = algebra.resolve(&ontology, &ex("Flight"));
    assert_eq!(flight.beginning, Some(date_time("2023-05-05T20:47:15Z")));
    assert_eq!(flight.end, Some(date_time("2023-05-08T20:47:15Z")));
    assert!(
        algebra
            .check_started_by(&ontology, Some(&ex("Flight")), Some(&ex("Launch")))
            .unwrap()
    );
    assert!(
        algebra
            .check_finishes(&ontology, Some(&ex("Landing")), Some(&ex("Flight")))
            .unwrap()
    );
}

#[test]
fn test_duration_extents() {
    let registry = TimeRegistry::default();
    let mut ontology = Ontology::new(None);
    let extents = [
        IntervalExtent::Span(Duration::from_str("P1D").unwrap()),
        IntervalExtent::Duration(TimeDuration::new(time::UNIT_DAY.into_owned(), 1)),
        IntervalExtent::Description(DurationDescription {
            hours: Some(Decimal::from(24)),
            ..DurationDescription::default()
        }),
    ];
    for (i, extent) in extents.into_iter().enumerate() {
        declare_interval_feature(
            &mut ontology,
            &registry,
            &ex(&format!("Day{i}")),
            &TimeInterval::new(ex(&format!("Day{i}Interval")), extent),
        )
        .unwrap();
    }
    // A duration alone does not place an interval on the time line.
    let algebra = IntervalAlgebra::new(registry.clone());
    assert!(
        algebra
            .relations(&ontology, Some(&ex("Day0")), Some(&ex("Day1")))
            .unwrap()
            .is_empty()
    );
    assert!(ontology.contains(&Axiom::object_property_assertion(
        ObjectProperty::from(time::HAS_TIME),
        ex("Day1"),
        ex("Day1Interval"),
    )));

    let unknown = declare_interval_feature(
        &mut ontology,
        &registry,
        &ex("Fortnight"),
        &TimeInterval::new(
            ex("FortnightInterval"),
            IntervalExtent::Duration(TimeDuration::new(ex("unitFortnight"), 1)),
        ),
    );
    assert!(matches!(
        unknown,
        Err(TimeError::Registry(RegistryError::UnknownUnit(_)))
    ));
}
