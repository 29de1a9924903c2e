//! Object property axiom rules.
//!
//! Assertions are read calibrated from the context, so a property expression `P` or
//! `ObjectInverseOf(P)` is matched against them with [`endpoints`].

use super::{
    IndividualEquality, RuleName, disjoint_pairs_through_equivalence, listed_together,
    object_property_equivalences, object_property_hierarchy, same_as,
};
use crate::axiom::{Axiom, ClassAssertion, ObjectPropertyAssertion, ObjectPropertyAxiom};
use crate::entity::Individual;
use crate::expression::ObjectPropertyExpression;
use crate::ontology::{Ontology, pairs};
use crate::reasoner::calibration::endpoints;
use crate::reasoner::context::ReasonerContext;
use crate::reasoner::graph::Hierarchy;
use crate::reasoner::inference::{Inference, InferenceCollector};
use rustc_hash::FxHashMap;

fn properties_with<'a>(
    ontology: &'a Ontology,
    characteristic: impl Fn(&'a ObjectPropertyAxiom) -> Option<&'a ObjectPropertyExpression>,
) -> Vec<&'a ObjectPropertyExpression> {
    ontology
        .object_property_axioms()
        .iter()
        .filter_map(|record| characteristic(record.axiom()))
        .collect()
}

fn object_assertion(
    property: &ObjectPropertyExpression,
    source: &Individual,
    target: &Individual,
) -> ObjectPropertyAssertion {
    ObjectPropertyAssertion {
        property: property.clone(),
        source: source.clone(),
        target: target.clone(),
    }
}

/// `FunctionalObjectProperty(P)` with `P(x, y)` and `P(x, z)` gives `SameIndividual(y, z)`.
pub(super) fn functional(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let properties = properties_with(ontology, |axiom| match axiom {
        ObjectPropertyAxiom::FunctionalObjectProperty(p) => Some(p),
        _ => None,
    })
    .into_iter()
    .cloned()
    .collect();
    same_values(
        ontology,
        context,
        RuleName::FunctionalObjectProperty,
        properties,
    )
}

/// `InverseFunctionalObjectProperty(P)` with `P(y, x)` and `P(z, x)` gives
/// `SameIndividual(y, z)`.
pub(super) fn inverse_functional(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let properties = properties_with(ontology, |axiom| match axiom {
        ObjectPropertyAxiom::InverseFunctionalObjectProperty(p) => Some(p),
        _ => None,
    })
    .into_iter()
    .map(ObjectPropertyExpression::inverse)
    .collect();
    same_values(
        ontology,
        context,
        RuleName::InverseFunctionalObjectProperty,
        properties,
    )
}

/// Merges the values of each functional property, per source individual.
fn same_values(
    ontology: &Ontology,
    context: &ReasonerContext,
    rule: RuleName,
    functional_properties: Vec<ObjectPropertyExpression>,
) -> Vec<Inference> {
    let equality = IndividualEquality::new(ontology);
    let mut collector = InferenceCollector::new(ontology, rule);
    for property in &functional_properties {
        let mut sources = FxHashMap::<&Individual, usize>::default();
        let mut values: Vec<Vec<&Individual>> = Vec::new();
        for assertion in context.object_property_assertions() {
            let Some((source, target)) = endpoints(property, assertion) else {
                continue;
            };
            let i = *sources.entry(source).or_insert_with(|| {
                values.push(Vec::new());
                values.len() - 1
            });
            if !values[i].contains(&target) {
                values[i].push(target);
            }
        }
        for targets in &values {
            for (y, z) in pairs(targets) {
                if equality.are_same(y, z) || equality.are_different(y, z) {
                    continue;
                }
                collector.infer_unless_known(same_as(y, z), [Axiom::from(same_as(z, y))]);
            }
        }
    }
    collector.finish()
}

/// `ObjectPropertyDomain(P, C)` with `P(x, y)` gives `ClassAssertion(C, x)`.
pub(super) fn domain(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let mut collector = InferenceCollector::new(ontology, RuleName::ObjectPropertyDomain);
    for record in ontology.object_property_axioms() {
        if let ObjectPropertyAxiom::ObjectPropertyDomain { property, domain } = record.axiom() {
            for assertion in context.object_property_assertions() {
                if let Some((source, _)) = endpoints(property, assertion) {
                    collector.infer(ClassAssertion {
                        class: domain.clone(),
                        individual: source.clone(),
                    });
                }
            }
        }
    }
    collector.finish()
}

/// `ObjectPropertyRange(P, C)` with `P(x, y)` gives `ClassAssertion(C, y)`.
pub(super) fn range(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let mut collector = InferenceCollector::new(ontology, RuleName::ObjectPropertyRange);
    for record in ontology.object_property_axioms() {
        if let ObjectPropertyAxiom::ObjectPropertyRange { property, range } = record.axiom() {
            for assertion in context.object_property_assertions() {
                if let Some((_, target)) = endpoints(property, assertion) {
                    collector.infer(ClassAssertion {
                        class: range.clone(),
                        individual: target.clone(),
                    });
                }
            }
        }
    }
    collector.finish()
}

/// Closure of the sub-property hierarchy, and assertions lifted to super properties.
pub(super) fn sub_property_of(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let hierarchy = object_property_hierarchy(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::SubObjectPropertyOf);
    for (sub, sup) in hierarchy.closure() {
        // Pairs on inverses restate the pairs on their named twins.
        if sub.is_inverse() {
            continue;
        }
        collector.infer(ObjectPropertyAxiom::SubObjectPropertyOf {
            sub_property: sub.clone(),
            super_property: sup.clone(),
        });
    }
    for assertion in context.object_property_assertions() {
        for sup in hierarchy.reachable(&assertion.property) {
            if sup != &assertion.property {
                collector.infer_object_assertion(object_assertion(
                    sup,
                    &assertion.source,
                    &assertion.target,
                ));
            }
        }
    }
    collector.finish()
}

/// Pairwise `EquivalentObjectProperties` over the closure of equivalence, and
/// assertions copied to equivalent properties.
pub(super) fn equivalent(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let equivalences = object_property_equivalences(ontology);
    let told: Vec<&[ObjectPropertyExpression]> = ontology
        .object_property_axioms()
        .iter()
        .filter_map(|record| match record.axiom() {
            ObjectPropertyAxiom::EquivalentObjectProperties(properties) => {
                Some(properties.as_slice())
            }
            _ => None,
        })
        .collect();
    let mut collector = InferenceCollector::new(ontology, RuleName::EquivalentObjectProperties);
    for group in equivalences.groups() {
        for (a, b) in pairs(&group) {
            if listed_together(told.iter().copied(), *a, *b)
                || listed_together(told.iter().copied(), &a.inverse(), &b.inverse())
            {
                continue;
            }
            collector.infer_unless_known(
                ObjectPropertyAxiom::EquivalentObjectProperties(vec![(*a).clone(), (*b).clone()]),
                [Axiom::from(ObjectPropertyAxiom::EquivalentObjectProperties(vec![
                    (*b).clone(),
                    (*a).clone(),
                ]))],
            );
        }
    }
    for assertion in context.object_property_assertions() {
        for other in equivalences.group_of(&assertion.property) {
            if other != &assertion.property {
                collector.infer_object_assertion(object_assertion(
                    other,
                    &assertion.source,
                    &assertion.target,
                ));
            }
        }
    }
    collector.finish()
}

/// Disjointness carried over to equivalent properties.
pub(super) fn disjoint(ontology: &Ontology) -> Vec<Inference> {
    let lists: Vec<&[ObjectPropertyExpression]> = ontology
        .object_property_axioms()
        .iter()
        .filter_map(|record| match record.axiom() {
            ObjectPropertyAxiom::DisjointObjectProperties(properties) => {
                Some(properties.as_slice())
            }
            _ => None,
        })
        .collect();
    let equivalences = object_property_equivalences(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::DisjointObjectProperties);
    for (a, c) in disjoint_pairs_through_equivalence(&lists, &equivalences) {
        collector.infer_unless_known(
            ObjectPropertyAxiom::DisjointObjectProperties(vec![a.clone(), c.clone()]),
            [Axiom::from(ObjectPropertyAxiom::DisjointObjectProperties(vec![
                c.clone(),
                a.clone(),
            ]))],
        );
    }
    collector.finish()
}

/// `InverseObjectProperties` carried over to equivalent properties, and
/// `Inverse(P, Q)` with `P(a, b)` gives `Q(b, a)`.
pub(super) fn inverse(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let inverses: Vec<(&ObjectPropertyExpression, &ObjectPropertyExpression)> = ontology
        .object_property_axioms()
        .iter()
        .filter_map(|record| match record.axiom() {
            ObjectPropertyAxiom::InverseObjectProperties(left, right) => Some((left, right)),
            _ => None,
        })
        .collect();
    let is_told = |a: &ObjectPropertyExpression, b: &ObjectPropertyExpression| {
        inverses
            .iter()
            .any(|(l, r)| (*l == a && *r == b) || (*l == b && *r == a))
    };
    let equivalences = object_property_equivalences(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::InverseObjectProperties);
    let mut infer_inverse = |a: &ObjectPropertyExpression, b: &ObjectPropertyExpression| {
        if !is_told(a, b) {
            collector.infer_unless_known(
                ObjectPropertyAxiom::InverseObjectProperties(a.clone(), b.clone()),
                [Axiom::from(ObjectPropertyAxiom::InverseObjectProperties(
                    b.clone(),
                    a.clone(),
                ))],
            );
        }
    };
    for &(left, right) in &inverses {
        for other in equivalences.group_of(right) {
            if other != right {
                infer_inverse(left, other);
            }
        }
        for other in equivalences.group_of(left) {
            if other != left {
                infer_inverse(other, right);
            }
        }
    }

    for assertion in context.object_property_assertions() {
        for &(left, right) in &inverses {
            if let Some((x, y)) = endpoints(left, assertion) {
                collector.infer_object_assertion(object_assertion(right, y, x));
            }
            if let Some((x, y)) = endpoints(right, assertion) {
                collector.infer_object_assertion(object_assertion(left, y, x));
            }
        }
    }
    collector.finish()
}

/// `SymmetricObjectProperty(P)` with `P(a, b)` gives `P(b, a)`.
pub(super) fn symmetric(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let properties = properties_with(ontology, |axiom| match axiom {
        ObjectPropertyAxiom::SymmetricObjectProperty(p) => Some(p),
        _ => None,
    });
    let mut collector = InferenceCollector::new(ontology, RuleName::SymmetricObjectProperty);
    for property in properties {
        for assertion in context.object_property_assertions() {
            if let Some((x, y)) = endpoints(property, assertion) {
                collector.infer_object_assertion(object_assertion(property, y, x));
            }
        }
    }
    collector.finish()
}

/// `TransitiveObjectProperty(P)` closes the `P` assertions.
pub(super) fn transitive(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let properties = properties_with(ontology, |axiom| match axiom {
        ObjectPropertyAxiom::TransitiveObjectProperty(p) => Some(p),
        _ => None,
    });
    let mut collector = InferenceCollector::new(ontology, RuleName::TransitiveObjectProperty);
    for property in properties {
        let mut graph = Hierarchy::new();
        for assertion in context.object_property_assertions() {
            if let Some((x, y)) = endpoints(property, assertion) {
                graph.add_edge(x, y);
            }
        }
        for x in graph.nodes() {
            for y in graph.reachable(x) {
                collector.infer_object_assertion(object_assertion(property, x, y));
            }
        }
    }
    collector.finish()
}

/// `ReflexiveObjectProperty(P)` gives `P(a, a)` for every named individual.
pub(super) fn reflexive(ontology: &Ontology) -> Vec<Inference> {
    let properties = properties_with(ontology, |axiom| match axiom {
        ObjectPropertyAxiom::ReflexiveObjectProperty(p) => Some(p),
        _ => None,
    });
    let mut collector = InferenceCollector::new(ontology, RuleName::ReflexiveObjectProperty);
    if properties.is_empty() {
        return collector.finish();
    }
    let individuals = ontology.individuals();
    for property in properties {
        for individual in individuals.iter().filter(|i| i.is_named()) {
            collector.infer_object_assertion(object_assertion(property, individual, individual));
        }
    }
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axiom::Assertion;
    use crate::entity::{ObjectProperty, OwlClass};
    use crate::reasoner::Reasoner;
    use crate::expression::ClassExpression;
    use oxrdf::NamedNode;

    fn ex(name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.org/{name}"))
    }

    fn property(name: &str) -> ObjectPropertyExpression {
        ObjectProperty::new(ex(name)).into()
    }

    fn axioms(inferences: Vec<Inference>) -> Vec<Axiom> {
        inferences.into_iter().map(Inference::into_axiom).collect()
    }

    #[test]
    fn test_functional_merges_values_once() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(ObjectPropertyAxiom::FunctionalObjectProperty(property("knows")));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("knows"),
            ex("Mark"),
            ex("John"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("knows"),
            ex("Mark"),
            ex("Stiv"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            ObjectPropertyExpression::inverse_of(ObjectProperty::new(ex("knows"))),
            ex("Stiv"),
            ex("Mark"),
        ));
        let context = ReasonerContext::new(&ontology);
        assert_eq!(
            axioms(functional(&ontology, &context)),
            [Axiom::same_individual(vec![ex("John").into(), ex("Stiv").into()])]
        );
    }

    #[test]
    fn test_functional_respects_different_individuals() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(ObjectPropertyAxiom::FunctionalObjectProperty(property("knows")));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("knows"),
            ex("Mark"),
            ex("John"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("knows"),
            ex("Mark"),
            ex("Stiv"),
        ));
        ontology.add_axiom(Axiom::different_individuals(vec![
            ex("Stiv").into(),
            ex("John").into(),
        ]));
        let context = ReasonerContext::new(&ontology);
        assert!(functional(&ontology, &context).is_empty());
    }

    #[test]
    fn test_functional_respects_difference_through_sameness() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(ObjectPropertyAxiom::FunctionalObjectProperty(property("knows")));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("knows"),
            ex("Mark"),
            ex("John"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("knows"),
            ex("Mark"),
            ex("Stiv"),
        ));
        ontology.add_axiom(Axiom::same_individual(vec![ex("Stiv").into(), ex("Steven").into()]));
        ontology.add_axiom(Axiom::different_individuals(vec![
            ex("Steven").into(),
            ex("John").into(),
        ]));
        let context = ReasonerContext::new(&ontology);
        assert!(functional(&ontology, &context).is_empty());
        // The whole fixpoint infers the difference, never the sameness.
        let report = Reasoner::default().reason(&ontology).unwrap();
        assert!(report.contains(&Axiom::different_individuals(vec![
            ex("Stiv").into(),
            ex("John").into(),
        ])));
        assert!(!report.inferred_axioms().any(|axiom| matches!(
            axiom,
            Axiom::Assertion(Assertion::SameIndividual(individuals))
                if individuals.contains(&ex("John").into())
        )));
    }

    #[test]
    fn test_inverse_functional() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(ObjectPropertyAxiom::InverseFunctionalObjectProperty(
            property("hasEmail"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("hasEmail"),
            ex("a"),
            ex("mail"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("hasEmail"),
            ex("b"),
            ex("mail"),
        ));
        let context = ReasonerContext::new(&ontology);
        assert_eq!(
            axioms(inverse_functional(&ontology, &context)),
            [Axiom::same_individual(vec![ex("a").into(), ex("b").into()])]
        );
    }

    #[test]
    fn test_domain_and_range_on_inverse() {
        let person = ClassExpression::class(OwlClass::new(ex("Person")));
        let city = ClassExpression::class(OwlClass::new(ex("City")));
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(ObjectPropertyAxiom::ObjectPropertyDomain {
            property: ObjectPropertyExpression::inverse_of(ObjectProperty::new(ex("hasCitizen"))),
            domain: city.clone(),
        });
        ontology.add_axiom(ObjectPropertyAxiom::ObjectPropertyRange {
            property: property("livesIn"),
            range: city.clone(),
        });
        ontology.add_axiom(ObjectPropertyAxiom::ObjectPropertyDomain {
            property: property("livesIn"),
            domain: person.clone(),
        });
        ontology.add_axiom(Axiom::object_property_assertion(
            property("hasCitizen"),
            ex("Paris"),
            ex("Ana"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            ObjectPropertyExpression::inverse_of(ObjectProperty::new(ex("livesIn"))),
            ex("Rome"),
            ex("Marco"),
        ));
        let context = ReasonerContext::new(&ontology);
        assert_eq!(
            axioms(domain(&ontology, &context)),
            [
                Axiom::class_assertion(city.clone(), ex("Ana")),
                Axiom::class_assertion(person, ex("Marco")),
            ]
        );
        assert_eq!(
            axioms(range(&ontology, &context)),
            [Axiom::class_assertion(city, ex("Rome"))]
        );
    }

    #[test]
    fn test_sub_property_lifts_assertions() {
        let child_of = ObjectPropertyExpression::inverse_of(ObjectProperty::new(ex("hasChild")));
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(ObjectPropertyAxiom::SubObjectPropertyOf {
            sub_property: property("hasMother"),
            super_property: property("hasParent"),
        });
        ontology.add_axiom(ObjectPropertyAxiom::SubObjectPropertyOf {
            sub_property: property("hasParent"),
            super_property: child_of.clone(),
        });
        ontology.add_axiom(Axiom::object_property_assertion(
            property("hasMother"),
            ex("Ann"),
            ex("Eve"),
        ));
        let context = ReasonerContext::new(&ontology);
        let inferred = axioms(sub_property_of(&ontology, &context));
        assert!(inferred.contains(
            &ObjectPropertyAxiom::SubObjectPropertyOf {
                sub_property: property("hasMother"),
                super_property: child_of,
            }
            .into()
        ));
        assert!(inferred.contains(&Axiom::object_property_assertion(
            property("hasParent"),
            ex("Ann"),
            ex("Eve"),
        )));
        assert!(inferred.contains(&Axiom::object_property_assertion(
            property("hasChild"),
            ex("Eve"),
            ex("Ann"),
        )));
    }

    #[test]
    fn test_inverse_properties() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(ObjectPropertyAxiom::InverseObjectProperties(
            property("hasParent"),
            property("hasChild"),
        ));
        ontology.add_axiom(ObjectPropertyAxiom::EquivalentObjectProperties(vec![
            property("hasChild"),
            property("hasOffspring"),
        ]));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("hasParent"),
            ex("Ann"),
            ex("Eve"),
        ));
        let context = ReasonerContext::new(&ontology);
        assert_eq!(
            axioms(inverse(&ontology, &context)),
            [
                Axiom::from(ObjectPropertyAxiom::InverseObjectProperties(
                    property("hasParent"),
                    property("hasOffspring"),
                )),
                Axiom::object_property_assertion(property("hasChild"), ex("Eve"), ex("Ann")),
            ]
        );
    }

    #[test]
    fn test_symmetric_transitive_reflexive() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(ObjectPropertyAxiom::SymmetricObjectProperty(property("friend")));
        ontology.add_axiom(ObjectPropertyAxiom::TransitiveObjectProperty(property("ancestor")));
        ontology.add_axiom(ObjectPropertyAxiom::ReflexiveObjectProperty(property("knows")));
        ontology.add_axiom(Axiom::object_property_assertion(property("friend"), ex("a"), ex("b")));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("ancestor"),
            ex("a"),
            ex("b"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("ancestor"),
            ex("b"),
            ex("c"),
        ));
        let context = ReasonerContext::new(&ontology);
        assert_eq!(
            axioms(symmetric(&ontology, &context)),
            [Axiom::object_property_assertion(property("friend"), ex("b"), ex("a"))]
        );
        assert_eq!(
            axioms(transitive(&ontology, &context)),
            [Axiom::object_property_assertion(property("ancestor"), ex("a"), ex("c"))]
        );
        assert_eq!(reflexive(&ontology).len(), 3);
    }
}
