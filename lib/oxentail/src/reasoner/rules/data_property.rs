//! Data property axiom rules.

use super::{
    RuleName, data_property_equivalences, data_property_hierarchy,
    disjoint_pairs_through_equivalence, listed_together,
};
use crate::axiom::{Axiom, ClassAssertion, DataPropertyAssertion, DataPropertyAxiom};
use crate::entity::DataProperty;
use crate::ontology::{Ontology, pairs};
use crate::reasoner::context::ReasonerContext;
use crate::reasoner::inference::{Inference, InferenceCollector};

fn data_assertion(
    property: &DataProperty,
    assertion: &DataPropertyAssertion,
) -> DataPropertyAssertion {
    DataPropertyAssertion {
        property: property.clone(),
        source: assertion.source.clone(),
        target: assertion.target.clone(),
    }
}

/// `DataPropertyDomain(P, C)` with `P(x, v)` gives `ClassAssertion(C, x)`.
pub(super) fn domain(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let mut collector = InferenceCollector::new(ontology, RuleName::DataPropertyDomain);
    for record in ontology.data_property_axioms() {
        if let DataPropertyAxiom::DataPropertyDomain { property, domain } = record.axiom() {
            for assertion in context.data_property_assertions() {
                if &assertion.property == property {
                    collector.infer(ClassAssertion {
                        class: domain.clone(),
                        individual: assertion.source.clone(),
                    });
                }
            }
        }
    }
    collector.finish()
}

pub(super) fn sub_property_of(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let hierarchy = data_property_hierarchy(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::SubDataPropertyOf);
    for (sub, sup) in hierarchy.closure() {
        collector.infer(DataPropertyAxiom::SubDataPropertyOf {
            sub_property: sub.clone(),
            super_property: sup.clone(),
        });
    }
    for assertion in context.data_property_assertions() {
        for sup in hierarchy.reachable(&assertion.property) {
            if sup != &assertion.property {
                collector.infer(data_assertion(sup, assertion));
            }
        }
    }
    collector.finish()
}

pub(super) fn equivalent(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let equivalences = data_property_equivalences(ontology);
    let told: Vec<&[DataProperty]> = ontology
        .data_property_axioms()
        .iter()
        .filter_map(|record| match record.axiom() {
            DataPropertyAxiom::EquivalentDataProperties(properties) => Some(properties.as_slice()),
            _ => None,
        })
        .collect();
    let mut collector = InferenceCollector::new(ontology, RuleName::EquivalentDataProperties);
    for group in equivalences.groups() {
        for (a, b) in pairs(&group) {
            if listed_together(told.iter().copied(), *a, *b) {
                continue;
            }
            collector.infer_unless_known(
                DataPropertyAxiom::EquivalentDataProperties(vec![(*a).clone(), (*b).clone()]),
                [Axiom::from(DataPropertyAxiom::EquivalentDataProperties(
                    vec![(*b).clone(), (*a).clone()],
                ))],
            );
        }
    }
    for assertion in context.data_property_assertions() {
        for other in equivalences.group_of(&assertion.property) {
            if other != &assertion.property {
                collector.infer(data_assertion(other, assertion));
            }
        }
    }
    collector.finish()
}

pub(super) fn disjoint(ontology: &Ontology) -> Vec<Inference> {
    let lists: Vec<&[DataProperty]> = ontology
        .data_property_axioms()
        .iter()
        .filter_map(|record| match record.axiom() {
            DataPropertyAxiom::DisjointDataProperties(properties) => Some(properties.as_slice()),
            _ => None,
        })
        .collect();
    let equivalences = data_property_equivalences(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::DisjointDataProperties);
    for (a, c) in disjoint_pairs_through_equivalence(&lists, &equivalences) {
        collector.infer_unless_known(
            DataPropertyAxiom::DisjointDataProperties(vec![a.clone(), c.clone()]),
            [Axiom::from(DataPropertyAxiom::DisjointDataProperties(vec![
                c.clone(),
                a.clone(),
            ]))],
        );
    }
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::OwlClass;
    use crate::expression::ClassExpression;
    use oxrdf::{Literal, NamedNode};

    fn property(name: &str) -> DataProperty {
        DataProperty::new(NamedNode::new_unchecked(format!("http://example.org/{name}")))
    }

    fn ex(name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.org/{name}"))
    }

    fn axioms(inferences: Vec<Inference>) -> Vec<Axiom> {
        inferences.into_iter().map(Inference::into_axiom).collect()
    }

    #[test]
    fn test_domain() {
        let person = ClassExpression::class(OwlClass::new(ex("Person")));
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(DataPropertyAxiom::DataPropertyDomain {
            property: property("age"),
            domain: person.clone(),
        });
        ontology.add_axiom(Axiom::data_property_assertion(
            property("age"),
            ex("Ann"),
            Literal::from(42),
        ));
        let context = ReasonerContext::new(&ontology);
        assert_eq!(
            axioms(domain(&ontology, &context)),
            [Axiom::class_assertion(person, ex("Ann"))]
        );
    }

    #[test]
    fn test_sub_and_equivalent_properties() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(DataPropertyAxiom::SubDataPropertyOf {
            sub_property: property("firstName"),
            super_property: property("name"),
        });
        ontology.add_axiom(DataPropertyAxiom::EquivalentDataProperties(vec![
            property("name"),
            property("label"),
        ]));
        ontology.add_axiom(DataPropertyAxiom::EquivalentDataProperties(vec![
            property("label"),
            property("title"),
        ]));
        ontology.add_axiom(Axiom::data_property_assertion(
            property("firstName"),
            ex("Ann"),
            Literal::new_simple_literal("Ann"),
        ));
        let context = ReasonerContext::new(&ontology);
        let inferred = axioms(sub_property_of(&ontology, &context));
        assert!(inferred.contains(
            &DataPropertyAxiom::SubDataPropertyOf {
                sub_property: property("firstName"),
                super_property: property("title"),
            }
            .into()
        ));
        assert!(inferred.contains(&Axiom::data_property_assertion(
            property("label"),
            ex("Ann"),
            Literal::new_simple_literal("Ann"),
        )));

        let inferred = axioms(equivalent(&ontology, &context));
        assert_eq!(
            inferred,
            [Axiom::from(DataPropertyAxiom::EquivalentDataProperties(vec![
                property("name"),
                property("title"),
            ]))]
        );
    }

    #[test]
    fn test_disjoint_properties() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(DataPropertyAxiom::DisjointDataProperties(vec![
            property("birthDate"),
            property("deathDate"),
        ]));
        ontology.add_axiom(DataPropertyAxiom::EquivalentDataProperties(vec![
            property("deathDate"),
            property("dateOfDeath"),
        ]));
        assert_eq!(
            axioms(disjoint(&ontology)),
            [Axiom::from(DataPropertyAxiom::DisjointDataProperties(vec![
                property("birthDate"),
                property("dateOfDeath"),
            ]))]
        );
    }
}
