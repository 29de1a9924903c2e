//! [Allen's interval algebra](https://en.wikipedia.org/wiki/Allen%27s_interval_algebra)
//! over the temporal extents declared in an ontology.

use crate::entity::{DateTimeDescription, DurationDescription, InstantPosition};
use crate::error::{TimeError, TimeResult};
use crate::registry::TimeRegistry;
use crate::vocabulary::time;
use oxentail::{Individual, Ontology, ReasonerContext};
use oxrdf::{Literal, NamedNode, NamedNodeRef};
use oxsdatatypes::{DateTime, Decimal, Duration};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The thirteen base relations between two intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllenRelation {
    Before,
    After,
    Meets,
    MetBy,
    Overlaps,
    OverlappedBy,
    Starts,
    StartedBy,
    During,
    Contains,
    Finishes,
    FinishedBy,
    Equals,
}

impl AllenRelation {
    pub fn all() -> &'static [AllenRelation] {
        &[
            Self::Before,
            Self::After,
            Self::Meets,
            Self::MetBy,
            Self::Overlaps,
            Self::OverlappedBy,
            Self::Starts,
            Self::StartedBy,
            Self::During,
            Self::Contains,
            Self::Finishes,
            Self::FinishedBy,
            Self::Equals,
        ]
    }

    /// The `time:intervalX` name of the relation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Before => "intervalBefore",
            Self::After => "intervalAfter",
            Self::Meets => "intervalMeets",
            Self::MetBy => "intervalMetBy",
            Self::Overlaps => "intervalOverlaps",
            Self::OverlappedBy => "intervalOverlappedBy",
            Self::Starts => "intervalStarts",
            Self::StartedBy => "intervalStartedBy",
            Self::During => "intervalDuring",
            Self::Contains => "intervalContains",
            Self::Finishes => "intervalFinishes",
            Self::FinishedBy => "intervalFinishedBy",
            Self::Equals => "intervalEquals",
        }
    }

    /// The relation holding between `right` and `left` when `self` holds between `left` and `right`.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
            Self::Meets => Self::MetBy,
            Self::MetBy => Self::Meets,
            Self::Overlaps => Self::OverlappedBy,
            Self::OverlappedBy => Self::Overlaps,
            Self::Starts => Self::StartedBy,
            Self::StartedBy => Self::Starts,
            Self::During => Self::Contains,
            Self::Contains => Self::During,
            Self::Finishes => Self::FinishedBy,
            Self::FinishedBy => Self::Finishes,
            Self::Equals => Self::Equals,
        }
    }

    /// Whether the relation is established between the two intervals.
    ///
    /// A bound the relation needs that is unknown makes it not established.
    pub fn holds(self, left: &ResolvedInterval, right: &ResolvedInterval) -> bool {
        let (b1, e1, b2, e2) = (left.beginning, left.end, right.beginning, right.end);
        match self {
            Self::Before => lt(e1, b2),
            Self::After => lt(e2, b1),
            Self::Meets => eq(e1, b2),
            Self::MetBy => eq(b1, e2),
            Self::Overlaps => lt(b1, b2) && lt(b2, e1) && lt(e1, e2),
            Self::OverlappedBy => lt(b2, b1) && lt(b1, e2) && lt(e2, e1),
            Self::Starts => eq(b1, b2) && lt(e1, e2),
            Self::StartedBy => eq(b1, b2) && lt(e2, e1),
            Self::During => lt(b2, b1) && lt(e1, e2),
            Self::Contains => lt(b1, b2) && lt(e2, e1),
            Self::Finishes => eq(e1, e2) && lt(b2, b1),
            Self::FinishedBy => eq(e1, e2) && lt(b1, b2),
            Self::Equals => eq(b1, b2) && eq(e1, e2),
        }
    }
}

impl fmt::Display for AllenRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn compare(a: Option<DateTime>, b: Option<DateTime>) -> Option<Ordering> {
    a?.partial_cmp(&b?)
}

fn lt(a: Option<DateTime>, b: Option<DateTime>) -> bool {
    compare(a, b) == Some(Ordering::Less)
}

fn eq(a: Option<DateTime>, b: Option<DateTime>) -> bool {
    compare(a, b) == Some(Ordering::Equal)
}

/// The beginning and end of an interval, as far as the ontology tells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedInterval {
    pub beginning: Option<DateTime>,
    pub end: Option<DateTime>,
}

impl ResolvedInterval {
    pub fn is_complete(&self) -> bool {
        self.beginning.is_some() && self.end.is_some()
    }
}

macro_rules! check_relation {
    ($(#[$attr:meta])* $name:ident, $relation:ident) => {
        $(#[$attr])*
        pub fn $name(
            &self,
            ontology: &Ontology,
            left: Option<&NamedNode>,
            right: Option<&NamedNode>,
        ) -> TimeResult<bool> {
            self.check(AllenRelation::$relation, ontology, left, right)
        }
    };
}

/// Evaluates Allen relations between temporal entities of an ontology.
///
/// Identifiers may be intervals, instants (intervals with the same beginning and end)
/// or features linked to them with `time:hasTime`.
#[derive(Debug, Clone, Default)]
pub struct IntervalAlgebra {
    registry: TimeRegistry,
}

impl IntervalAlgebra {
    pub fn new(registry: TimeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TimeRegistry {
        &self.registry
    }

    check_relation!(check_before, Before);
    check_relation!(check_after, After);
    check_relation!(check_meets, Meets);
    check_relation!(check_met_by, MetBy);
    check_relation!(check_overlaps, Overlaps);
    check_relation!(check_overlapped_by, OverlappedBy);
    check_relation!(check_starts, Starts);
    check_relation!(check_started_by, StartedBy);
    check_relation!(check_during, During);
    check_relation!(check_contains, Contains);
    check_relation!(check_finishes, Finishes);
    check_relation!(check_finished_by, FinishedBy);
    check_relation!(check_equals, Equals);

    /// Checks a single relation.
    ///
    /// Fails only when an identifier is missing. An entity compared with itself is
    /// only ever equal to itself.
    pub fn check(
        &self,
        relation: AllenRelation,
        ontology: &Ontology,
        left: Option<&NamedNode>,
        right: Option<&NamedNode>,
    ) -> TimeResult<bool> {
        self.view(ontology).check(relation, left, right)
    }

    /// All the relations established between `left` and `right`.
    pub fn relations(
        &self,
        ontology: &Ontology,
        left: Option<&NamedNode>,
        right: Option<&NamedNode>,
    ) -> TimeResult<Vec<AllenRelation>> {
        self.view(ontology).relations(left, right)
    }

    /// Reads the beginning and end of the interval, instant or feature `id`.
    pub fn resolve(&self, ontology: &Ontology, id: &NamedNode) -> ResolvedInterval {
        self.view(ontology).resolve(id)
    }

    /// Indexes the temporal facts of `ontology` once, for evaluating many pairs.
    ///
    /// The view does not see axioms added to the ontology after its creation.
    pub fn view(&self, ontology: &Ontology) -> TemporalView<'_> {
        TemporalView {
            registry: &self.registry,
            facts: TemporalFacts::new(ontology),
        }
    }
}

/// The temporal extents of an ontology, as seen by an [`IntervalAlgebra`].
pub struct TemporalView<'a> {
    registry: &'a TimeRegistry,
    facts: TemporalFacts,
}

impl TemporalView<'_> {
    /// Checks a single relation, like [`IntervalAlgebra::check`].
    pub fn check(
        &self,
        relation: AllenRelation,
        left: Option<&NamedNode>,
        right: Option<&NamedNode>,
    ) -> TimeResult<bool> {
        let (left, right) = identifiers(left, right)?;
        if left == right && relation != AllenRelation::Equals {
            return Ok(false);
        }
        Ok(relation.holds(&self.resolve(left), &self.resolve(right)))
    }

    pub fn relations(
        &self,
        left: Option<&NamedNode>,
        right: Option<&NamedNode>,
    ) -> TimeResult<Vec<AllenRelation>> {
        let (left, right) = identifiers(left, right)?;
        let left_interval = self.resolve(left);
        let right_interval = self.resolve(right);
        Ok(AllenRelation::all()
            .iter()
            .copied()
            .filter(|relation| left != right || *relation == AllenRelation::Equals)
            .filter(|relation| relation.holds(&left_interval, &right_interval))
            .collect())
    }

    pub fn resolve(&self, id: &NamedNode) -> ResolvedInterval {
        let facts = &self.facts;
        let mut entity = Individual::Named(id.clone());
        if let Some(extent) = facts.object(&entity, time::HAS_TIME) {
            entity = extent.clone();
        }
        let mut beginning = facts
            .object(&entity, time::HAS_BEGINNING)
            .and_then(|instant| self.instant(instant));
        let mut end = facts
            .object(&entity, time::HAS_END)
            .and_then(|instant| self.instant(instant));
        match (beginning, end) {
            (None, None) => {
                if let Some(position) = self.instant(&entity) {
                    beginning = Some(position);
                    end = Some(position);
                }
            }
            (Some(b), None) => {
                end = self
                    .duration(&entity)
                    .and_then(|d| b.checked_add_duration(d));
            }
            (None, Some(e)) => {
                beginning = self
                    .duration(&entity)
                    .and_then(|d| e.checked_sub_duration(d));
            }
            (Some(_), Some(_)) => {}
        }
        if beginning.is_none() || end.is_none() {
            tracing::debug!(interval = %id, "Temporal extent is not fully known");
        }
        ResolvedInterval { beginning, end }
    }

    fn instant(&self, instant: &Individual) -> Option<DateTime> {
        let facts = &self.facts;
        for property in [time::IN_XSD_DATE_TIME_STAMP, time::IN_XSD_DATE_TIME] {
            if let Some(value) = facts.data(instant, property) {
                if let Ok(date_time) = DateTime::from_str(value.value()) {
                    return Some(date_time);
                }
            }
        }
        if let Some(description) = facts.object(instant, time::IN_DATE_TIME) {
            if let Some(date_time) = date_time_description(facts, description)
                .and_then(|description| description.to_date_time())
            {
                return Some(date_time);
            }
        }
        let position = facts.object(instant, time::IN_TIME_POSITION)?;
        let Individual::Named(trs) = facts.object(position, time::HAS_TRS)? else {
            return None;
        };
        let value = decimal(facts.data(position, time::NUMERIC_POSITION)?)?;
        let position = InstantPosition::Numeric {
            trs: trs.clone(),
            value,
        };
        match position.to_date_time(self.registry) {
            Ok(date_time) => date_time,
            Err(e) => {
                tracing::debug!(error = %e, "Unresolvable time position");
                None
            }
        }
    }

    fn duration(&self, interval: &Individual) -> Option<Duration> {
        let facts = &self.facts;
        if let Some(value) = facts.data(interval, time::HAS_XSD_DURATION) {
            if let Ok(duration) = Duration::from_str(value.value()) {
                return Some(duration);
            }
        }
        if let Some(node) = facts.object(interval, time::HAS_DURATION) {
            if let (Some(Individual::Named(unit)), Some(value)) = (
                facts.object(node, time::UNIT_TYPE),
                facts.data(node, time::NUMERIC_DURATION).and_then(decimal),
            ) {
                match self.registry.duration(unit, value) {
                    Ok(Some(duration)) => return Some(duration),
                    Ok(None) => {}
                    Err(e) => tracing::debug!(error = %e, "Unresolvable duration"),
                }
            }
        }
        let node = facts.object(interval, time::HAS_DURATION_DESCRIPTION)?;
        DurationDescription {
            years: facts.data(node, time::YEARS).and_then(decimal),
            months: facts.data(node, time::MONTHS).and_then(decimal),
            weeks: facts.data(node, time::WEEKS).and_then(decimal),
            days: facts.data(node, time::DAYS).and_then(decimal),
            hours: facts.data(node, time::HOURS).and_then(decimal),
            minutes: facts.data(node, time::MINUTES).and_then(decimal),
            seconds: facts.data(node, time::SECONDS).and_then(decimal),
        }
        .to_duration()
    }
}

fn identifiers<'a>(
    left: Option<&'a NamedNode>,
    right: Option<&'a NamedNode>,
) -> TimeResult<(&'a NamedNode, &'a NamedNode)> {
    Ok((
        left.ok_or(TimeError::MissingIntervalIdentifier("left"))?,
        right.ok_or(TimeError::MissingIntervalIdentifier("right"))?,
    ))
}

/// Reads a Gregorian date time description. Descriptions in another calendar are ignored.
fn date_time_description(
    facts: &TemporalFacts,
    node: &Individual,
) -> Option<DateTimeDescription> {
    if let Some(trs) = facts.object(node, time::HAS_TRS) {
        if trs.iri().is_none_or(|trs| *trs != time::GREGORIAN) {
            return None;
        }
    }
    let component = |property| {
        facts
            .data(node, property)
            .and_then(|value| value.value().trim_start_matches('-').parse().ok())
    };
    Some(DateTimeDescription {
        year: facts.data(node, time::YEAR)?.value().parse().ok()?,
        month: component(time::MONTH),
        day: component(time::DAY),
        hour: component(time::HOUR),
        minute: component(time::MINUTE),
        second: facts.data(node, time::SECOND).and_then(decimal),
    })
}

fn decimal(value: &Literal) -> Option<Decimal> {
    Decimal::from_str(value.value()).ok()
}

/// Object and data property values of the ontology, by subject and property.
struct TemporalFacts {
    objects: FxHashMap<(Individual, NamedNode), Vec<Individual>>,
    data: FxHashMap<(Individual, NamedNode), Vec<Literal>>,
}

impl TemporalFacts {
    fn new(ontology: &Ontology) -> Self {
        let context = ReasonerContext::new(ontology);
        let mut objects = FxHashMap::<_, Vec<_>>::default();
        for assertion in context.object_property_assertions() {
            // Calibrated assertions are always on a named property.
            if let Some(property) = assertion.property.as_property() {
                objects
                    .entry((assertion.source.clone(), property.iri().clone()))
                    .or_default()
                    .push(assertion.target.clone());
            }
        }
        let mut data = FxHashMap::<_, Vec<_>>::default();
        for assertion in context.data_property_assertions() {
            data.entry((assertion.source.clone(), assertion.property.iri().clone()))
                .or_default()
                .push(assertion.target.clone());
        }
        Self { objects, data }
    }

    fn object(&self, subject: &Individual, property: NamedNodeRef<'_>) -> Option<&Individual> {
        self.objects
            .get(&(subject.clone(), property.into_owned()))?
            .first()
    }

    fn data(&self, subject: &Individual, property: NamedNodeRef<'_>) -> Option<&Literal> {
        self.data
            .get(&(subject.clone(), property.into_owned()))?
            .first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(beginning: &str, end: &str) -> ResolvedInterval {
        ResolvedInterval {
            beginning: Some(DateTime::from_str(beginning).unwrap()),
            end: Some(DateTime::from_str(end).unwrap()),
        }
    }

    #[test]
    fn test_exactly_one_relation_holds_between_complete_intervals() {
        let intervals = [
            interval("2023-01-01T00:00:00Z", "2023-01-10T00:00:00Z"),
            interval("2023-01-05T00:00:00Z", "2023-01-15T00:00:00Z"),
            interval("2023-01-10T00:00:00Z", "2023-01-20T00:00:00Z"),
            interval("2023-01-01T00:00:00Z", "2023-01-05T00:00:00Z"),
            interval("2023-01-02T00:00:00Z", "2023-01-03T00:00:00Z"),
            interval("2023-01-12T00:00:00Z", "2023-01-20T00:00:00Z"),
        ];
        for left in &intervals {
            for right in &intervals {
                let holding: Vec<_> = AllenRelation::all()
                    .iter()
                    .filter(|r| r.holds(left, right))
                    .collect();
                assert_eq!(holding.len(), 1, "{left:?} {right:?} {holding:?}");
                assert!(holding[0].inverse().holds(right, left));
            }
        }
    }

    #[test]
    fn test_unknown_bounds_establish_nothing() {
        let complete = interval("2023-01-01T00:00:00Z", "2023-01-10T00:00:00Z");
        let open = ResolvedInterval {
            beginning: Some(DateTime::from_str("2023-02-01T00:00:00Z").unwrap()),
            end: None,
        };
        // Only the end of the left side and the beginning of the right side matter.
        assert!(AllenRelation::Before.holds(&complete, &open));
        for relation in AllenRelation::all() {
            if *relation != AllenRelation::Before {
                assert!(!relation.holds(&complete, &open), "{relation}");
            }
            assert!(
                !relation.holds(&ResolvedInterval::default(), &complete),
                "{relation}"
            );
        }
    }
}
