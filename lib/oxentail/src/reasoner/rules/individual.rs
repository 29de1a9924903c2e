//! Equality rules: same and different individuals, keys.

use super::{IndividualEquality, RuleName, instances_of, same_as};
use crate::axiom::{Assertion, Axiom, DataPropertyAssertion, ObjectPropertyAssertion};
use crate::entity::Individual;
use crate::ontology::{Ontology, pairs};
use crate::reasoner::calibration::endpoints;
use crate::reasoner::context::ReasonerContext;
use crate::reasoner::inference::{Inference, InferenceCollector};
use oxrdf::Literal;

/// Pairwise `SameIndividual` over the symmetric-transitive closure of sameness, and
/// replacement of same individuals in property assertions.
pub(super) fn same_individual(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let equality = IndividualEquality::new(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::SameIndividual);
    for group in equality.same_groups() {
        for (a, b) in pairs(&group) {
            if equality.are_told_same(a, b) || equality.are_different(a, b) {
                continue;
            }
            collector.infer_unless_known(same_as(a, b), [Axiom::from(same_as(b, a))]);
        }
    }

    for assertion in context.object_property_assertions() {
        for source in equality.group_of(&assertion.source) {
            for target in equality.group_of(&assertion.target) {
                if source == &assertion.source && target == &assertion.target {
                    continue;
                }
                collector.infer_object_assertion(ObjectPropertyAssertion {
                    property: assertion.property.clone(),
                    source: source.clone(),
                    target: target.clone(),
                });
            }
        }
    }
    for assertion in context.data_property_assertions() {
        for source in equality.group_of(&assertion.source) {
            if source != &assertion.source {
                collector.infer(DataPropertyAssertion {
                    property: assertion.property.clone(),
                    source: source.clone(),
                    target: assertion.target.clone(),
                });
            }
        }
    }
    collector.finish()
}

/// Pairwise `DifferentIndividuals` obtained by replacing an individual of a told
/// difference by one of its same individuals.
pub(super) fn different_individuals(ontology: &Ontology) -> Vec<Inference> {
    let equality = IndividualEquality::new(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::DifferentIndividuals);
    for group in equality.different_groups() {
        for (a, b) in pairs(*group) {
            for c in equality.group_of(a) {
                for d in equality.group_of(b) {
                    if c == d || equality.are_told_different(c, d) || equality.are_same(c, d) {
                        continue;
                    }
                    collector.infer_unless_known(
                        Assertion::DifferentIndividuals(vec![c.clone(), d.clone()]),
                        [Axiom::different_individuals(vec![d.clone(), c.clone()])],
                    );
                }
            }
        }
    }
    collector.finish()
}

/// `SameIndividual` for two instances of a keyed class sharing a value for every key
/// property.
///
/// Literals are compared by lexical form and datatype.
pub(super) fn has_key(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let equality = IndividualEquality::new(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::HasKey);
    for key in ontology.key_axioms() {
        if key.object_properties.is_empty() && key.data_properties.is_empty() {
            continue;
        }
        let instances = instances_of(context, &key.class);
        let keys: Vec<(Vec<Vec<&Individual>>, Vec<Vec<&Literal>>)> = instances
            .iter()
            .map(|instance| {
                let objects = key
                    .object_properties
                    .iter()
                    .map(|property| {
                        context
                            .object_property_assertions()
                            .iter()
                            .filter_map(|a| endpoints(property, a))
                            .filter(|(source, _)| source == instance)
                            .map(|(_, target)| target)
                            .collect()
                    })
                    .collect();
                let data = key
                    .data_properties
                    .iter()
                    .map(|property| {
                        context
                            .data_property_assertions()
                            .iter()
                            .filter(|a| &a.property == property && &a.source == *instance)
                            .map(|a| &a.target)
                            .collect()
                    })
                    .collect();
                (objects, data)
            })
            .collect();

        for i in 0..instances.len() {
            for j in i + 1..instances.len() {
                let (a, b) = (instances[i], instances[j]);
                if equality.are_same(a, b) || equality.are_different(a, b) {
                    continue;
                }
                if share_values(&keys[i].0, &keys[j].0) && share_values(&keys[i].1, &keys[j].1) {
                    collector.infer_unless_known(same_as(a, b), [Axiom::from(same_as(b, a))]);
                }
            }
        }
    }
    collector.finish()
}

/// For each key property, do both value lists have a value in common?
fn share_values<T: PartialEq>(left: &[Vec<&T>], right: &[Vec<&T>]) -> bool {
    left.iter()
        .zip(right)
        .all(|(l, r)| l.iter().any(|value| r.contains(value)))
}
