//! Writes temporal features into an [`Ontology`].
//!
//! Instants, intervals and their descriptions become OWL-Time assertions. Descriptions,
//! positions and durations are anonymous individuals.

use crate::entity::{
    DateTimeDescription, DurationDescription, InstantPosition, IntervalExtent, TimeDuration,
    TimeInstant, TimeInterval,
};
use crate::error::{RegistryError, TimeResult};
use crate::registry::TimeRegistry;
use crate::vocabulary::time;
use oxentail::{
    Assertion, ClassAssertion, ClassExpression, DataProperty, DataPropertyAssertion, Declaration,
    Individual, ObjectProperty, ObjectPropertyAssertion, Ontology, OwlClass,
};
use oxrdf::vocab::xsd;
use oxrdf::{BlankNode, Literal, NamedNode, NamedNodeRef};
use oxsdatatypes::{DateTime, Decimal};

/// Declares `instant` as the temporal extent of `feature`.
pub fn declare_instant_feature(
    ontology: &mut Ontology,
    registry: &TimeRegistry,
    feature: &NamedNode,
    instant: &TimeInstant,
) -> TimeResult<()> {
    check_instant(registry, instant)?;
    let mut writer = Writer { ontology };
    writer.individual(feature);
    writer.object(feature.clone(), time::HAS_TIME, instant.iri().clone())?;
    writer.instant(instant)
}

/// Declares `interval` as the temporal extent of `feature`.
///
/// Fails if the interval refers to a unit or reference system `registry` does not know.
pub fn declare_interval_feature(
    ontology: &mut Ontology,
    registry: &TimeRegistry,
    feature: &NamedNode,
    interval: &TimeInterval,
) -> TimeResult<()> {
    match interval.extent() {
        IntervalExtent::Bounds { beginning, end } => {
            for instant in [beginning, end].into_iter().flatten() {
                check_instant(registry, instant)?;
            }
        }
        IntervalExtent::Duration(duration) => {
            registry.unit(&duration.unit)?;
        }
        IntervalExtent::Description(_) | IntervalExtent::Span(_) => {}
    }
    let mut writer = Writer { ontology };
    writer.individual(feature);
    writer.object(feature.clone(), time::HAS_TIME, interval.iri().clone())?;
    writer.interval(interval)
}

/// Rejects positions in reference systems `registry` does not know, before anything is written.
fn check_instant(registry: &TimeRegistry, instant: &TimeInstant) -> Result<(), RegistryError> {
    match instant.position() {
        Some(InstantPosition::Numeric { trs, value }) => {
            registry.position(trs, *value)?;
        }
        Some(InstantPosition::Description(_)) => registry.calendar(&time::GREGORIAN.into_owned())?,
        Some(InstantPosition::DateTime(_)) | None => {}
    }
    Ok(())
}

struct Writer<'a> {
    ontology: &'a mut Ontology,
}

impl Writer<'_> {
    fn individual(&mut self, iri: &NamedNode) {
        let declaration = Declaration::NamedIndividual(iri.clone());
        if !self.ontology.contains(&declaration.clone().into()) {
            self.ontology.declare_entity(declaration);
        }
    }

    fn typed(
        &mut self,
        individual: impl Into<Individual>,
        class: NamedNodeRef<'_>,
    ) -> TimeResult<()> {
        self.assert(ClassAssertion {
            class: ClassExpression::class(OwlClass::from(class)),
            individual: individual.into(),
        })
    }

    fn object(
        &mut self,
        source: impl Into<Individual>,
        property: NamedNodeRef<'_>,
        target: impl Into<Individual>,
    ) -> TimeResult<()> {
        self.assert(ObjectPropertyAssertion::new(
            ObjectProperty::from(property),
            source,
            target,
        ))
    }

    fn data(
        &mut self,
        source: impl Into<Individual>,
        property: NamedNodeRef<'_>,
        target: Literal,
    ) -> TimeResult<()> {
        self.assert(DataPropertyAssertion {
            property: DataProperty::from(property),
            source: source.into(),
            target,
        })
    }

    fn decimal(
        &mut self,
        source: &Individual,
        property: NamedNodeRef<'_>,
        value: Option<Decimal>,
    ) -> TimeResult<()> {
        match value {
            Some(value) => self.data(
                source.clone(),
                property,
                Literal::new_typed_literal(value.to_string(), xsd::DECIMAL),
            ),
            None => Ok(()),
        }
    }

    fn assert(&mut self, assertion: impl Into<Assertion>) -> TimeResult<()> {
        let assertion = assertion.into();
        if !self.ontology.contains(&assertion.clone().into()) {
            // A conflicting assertion is reported through the ontology warnings.
            self.ontology.declare_assertion(assertion)?;
        }
        Ok(())
    }

    fn instant(&mut self, instant: &TimeInstant) -> TimeResult<()> {
        self.individual(instant.iri());
        self.typed(instant.iri().clone(), time::INSTANT)?;
        match instant.position() {
            None => Ok(()),
            Some(InstantPosition::DateTime(date_time)) => self.date_time(instant.iri(), *date_time),
            Some(InstantPosition::Description(description)) => {
                let node = Individual::from(BlankNode::default());
                self.object(instant.iri().clone(), time::IN_DATE_TIME, node.clone())?;
                self.date_time_description(&node, description)
            }
            Some(InstantPosition::Numeric { trs, value }) => {
                let node = Individual::from(BlankNode::default());
                self.object(instant.iri().clone(), time::IN_TIME_POSITION, node.clone())?;
                self.typed(node.clone(), time::TIME_POSITION)?;
                self.object(node.clone(), time::HAS_TRS, trs.clone())?;
                self.decimal(&node, time::NUMERIC_POSITION, Some(*value))
            }
        }
    }

    fn date_time(&mut self, instant: &NamedNode, date_time: DateTime) -> TimeResult<()> {
        let (property, datatype) = if date_time.timezone().is_some() {
            (time::IN_XSD_DATE_TIME_STAMP, xsd::DATE_TIME_STAMP)
        } else {
            (time::IN_XSD_DATE_TIME, xsd::DATE_TIME)
        };
        self.data(
            instant.clone(),
            property,
            Literal::new_typed_literal(date_time.to_string(), datatype),
        )
    }

    fn date_time_description(
        &mut self,
        node: &Individual,
        description: &DateTimeDescription,
    ) -> TimeResult<()> {
        self.typed(node.clone(), time::DATE_TIME_DESCRIPTION)?;
        self.object(node.clone(), time::HAS_TRS, time::GREGORIAN.into_owned())?;
        self.data(
            node.clone(),
            time::YEAR,
            Literal::new_typed_literal(description.lexical_year(), xsd::G_YEAR),
        )?;
        if let Some(month) = description.month {
            self.data(
                node.clone(),
                time::MONTH,
                Literal::new_typed_literal(format!("--{month:02}"), xsd::G_MONTH),
            )?;
        }
        if let Some(day) = description.day {
            self.data(
                node.clone(),
                time::DAY,
                Literal::new_typed_literal(format!("---{day:02}"), xsd::G_DAY),
            )?;
        }
        for (property, value) in [
            (time::HOUR, description.hour),
            (time::MINUTE, description.minute),
        ] {
            if let Some(value) = value {
                self.data(
                    node.clone(),
                    property,
                    Literal::new_typed_literal(value.to_string(), xsd::NON_NEGATIVE_INTEGER),
                )?;
            }
        }
        self.decimal(node, time::SECOND, description.second)
    }

    fn interval(&mut self, interval: &TimeInterval) -> TimeResult<()> {
        let iri = interval.iri();
        self.individual(iri);
        self.typed(iri.clone(), time::INTERVAL)?;
        match interval.extent() {
            IntervalExtent::Bounds { beginning, end } => {
                for (property, instant) in [
                    (time::HAS_BEGINNING, beginning),
                    (time::HAS_END, end),
                ] {
                    if let Some(instant) = instant {
                        self.object(iri.clone(), property, instant.iri().clone())?;
                        self.instant(instant)?;
                    }
                }
                Ok(())
            }
            IntervalExtent::Description(description) => {
                let node = Individual::from(BlankNode::default());
                self.object(iri.clone(), time::HAS_DURATION_DESCRIPTION, node.clone())?;
                self.duration_description(&node, description)
            }
            IntervalExtent::Duration(duration) => self.duration(iri, duration),
            IntervalExtent::Span(span) => self.data(
                iri.clone(),
                time::HAS_XSD_DURATION,
                Literal::new_typed_literal(span.to_string(), xsd::DURATION),
            ),
        }
    }

    fn duration_description(
        &mut self,
        node: &Individual,
        description: &DurationDescription,
    ) -> TimeResult<()> {
        self.typed(node.clone(), time::DURATION_DESCRIPTION)?;
        for (property, value) in [
            (time::YEARS, description.years),
            (time::MONTHS, description.months),
            (time::WEEKS, description.weeks),
            (time::DAYS, description.days),
            (time::HOURS, description.hours),
            (time::MINUTES, description.minutes),
            (time::SECONDS, description.seconds),
        ] {
            self.decimal(node, property, value)?;
        }
        Ok(())
    }

    fn duration(&mut self, interval: &NamedNode, duration: &TimeDuration) -> TimeResult<()> {
        let node = Individual::from(BlankNode::default());
        self.object(interval.clone(), time::HAS_DURATION, node.clone())?;
        self.typed(node.clone(), time::DURATION)?;
        self.object(node.clone(), time::UNIT_TYPE, duration.unit.clone())?;
        self.decimal(&node, time::NUMERIC_DURATION, Some(duration.value))
    }
}
