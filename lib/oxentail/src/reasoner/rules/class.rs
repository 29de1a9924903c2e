//! Class axiom rules.

use super::{
    IndividualEquality, RuleName, class_equivalences, class_hierarchy,
    disjoint_pairs_through_equivalence, listed_together,
};
use crate::axiom::{Axiom, ClassAssertion, ClassAxiom};
use crate::expression::ClassExpression;
use crate::ontology::{Ontology, pairs};
use crate::reasoner::context::ReasonerContext;
use crate::reasoner::inference::{Inference, InferenceCollector};
use rustc_hash::FxHashSet;

/// `SubClassOf(A, B)` for every `B` reachable from `A` in the subsumption graph.
pub(super) fn subclass_of(ontology: &Ontology) -> Vec<Inference> {
    let hierarchy = class_hierarchy(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::SubClassOf);
    for (sub, sup) in hierarchy.closure() {
        collector.infer(ClassAxiom::SubClassOf {
            sub_class: sub.clone(),
            super_class: sup.clone(),
        });
    }
    collector.finish()
}

/// Pairwise `EquivalentClasses` from the transitive closure of equivalence and from
/// mutual subsumption.
pub(super) fn equivalent_classes(ontology: &Ontology) -> Vec<Inference> {
    let mut equivalences = class_equivalences(ontology);
    let hierarchy = class_hierarchy(ontology);
    let subsumptions: FxHashSet<_> = hierarchy.closure().collect();
    for (a, b) in &subsumptions {
        if subsumptions.contains(&(*b, *a)) {
            equivalences.union(a, b);
        }
    }

    let told: Vec<&[ClassExpression]> = ontology
        .class_axioms()
        .iter()
        .filter_map(|record| match record.axiom() {
            ClassAxiom::EquivalentClasses(classes) => Some(classes.as_slice()),
            _ => None,
        })
        .collect();
    let mut collector = InferenceCollector::new(ontology, RuleName::EquivalentClasses);
    for group in equivalences.groups() {
        for (a, b) in pairs(&group) {
            if listed_together(told.iter().copied(), *a, *b) {
                continue;
            }
            collector.infer_unless_known(
                Axiom::equivalent_classes(vec![(*a).clone(), (*b).clone()]),
                [Axiom::equivalent_classes(vec![(*b).clone(), (*a).clone()])],
            );
        }
    }
    collector.finish()
}

/// `DisjointClasses` of the members of each disjoint union, and disjointness carried
/// over to equivalent classes.
pub(super) fn disjoint_classes(ontology: &Ontology) -> Vec<Inference> {
    let mut collector = InferenceCollector::new(ontology, RuleName::DisjointClasses);
    let mut lists = Vec::new();
    for record in ontology.class_axioms() {
        match record.axiom() {
            ClassAxiom::DisjointUnion {
                disjoint_classes, ..
            } => {
                collector.infer(ClassAxiom::DisjointClasses(disjoint_classes.clone()));
                lists.push(disjoint_classes.as_slice());
            }
            ClassAxiom::DisjointClasses(classes) => lists.push(classes.as_slice()),
            ClassAxiom::SubClassOf { .. } | ClassAxiom::EquivalentClasses(_) => {}
        }
    }
    let equivalences = class_equivalences(ontology);
    for (a, c) in disjoint_pairs_through_equivalence(&lists, &equivalences) {
        collector.infer_unless_known(
            Axiom::disjoint_classes(vec![a.clone(), c.clone()]),
            [Axiom::disjoint_classes(vec![c.clone(), a.clone()])],
        );
    }
    collector.finish()
}

/// Types implied by subsumption and by intersections, and types shared by same
/// individuals.
pub(super) fn class_assertion(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let hierarchy = class_hierarchy(ontology);
    let equality = IndividualEquality::new(ontology);
    let mut collector = InferenceCollector::new(ontology, RuleName::ClassAssertion);
    for assertion in context.class_assertions() {
        for sup in hierarchy.reachable(&assertion.class) {
            if sup != &assertion.class {
                collector.infer(ClassAssertion {
                    class: sup.clone(),
                    individual: assertion.individual.clone(),
                });
            }
        }
        if let ClassExpression::ObjectIntersectionOf(conjuncts) = &assertion.class {
            for conjunct in conjuncts {
                collector.infer(ClassAssertion {
                    class: conjunct.clone(),
                    individual: assertion.individual.clone(),
                });
            }
        }
        for same in equality.group_of(&assertion.individual) {
            if same != &assertion.individual {
                collector.infer(ClassAssertion {
                    class: assertion.class.clone(),
                    individual: same.clone(),
                });
            }
        }
    }
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Individual, OwlClass};
    use oxrdf::NamedNode;

    fn class(name: &str) -> ClassExpression {
        ClassExpression::class(OwlClass::new(NamedNode::new_unchecked(format!(
            "http://example.org/{name}"
        ))))
    }

    fn individual(name: &str) -> Individual {
        Individual::Named(NamedNode::new_unchecked(format!("http://example.org/{name}")))
    }

    fn axioms(inferences: Vec<Inference>) -> Vec<Axiom> {
        inferences.into_iter().map(Inference::into_axiom).collect()
    }

    #[test]
    fn test_subclass_transitive_chain() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::subclass_of(class("C1"), class("C2")));
        ontology.add_axiom(Axiom::subclass_of(class("C2"), class("C3")));
        assert_eq!(
            axioms(subclass_of(&ontology)),
            [Axiom::subclass_of(class("C1"), class("C3"))]
        );
    }

    #[test]
    fn test_subclass_through_equivalence() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::subclass_of(class("A"), class("B")));
        ontology.add_axiom(Axiom::equivalent_classes(vec![class("B"), class("C")]));
        let inferred = axioms(subclass_of(&ontology));
        assert!(inferred.contains(&Axiom::subclass_of(class("A"), class("C"))));
        assert!(inferred.contains(&Axiom::subclass_of(class("B"), class("C"))));
        assert!(!inferred.contains(&Axiom::subclass_of(class("A"), class("B"))));
    }

    #[test]
    fn test_equivalence_closure_checks_both_orderings() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::equivalent_classes(vec![class("A"), class("B")]));
        ontology.add_axiom(Axiom::equivalent_classes(vec![class("B"), class("C")]));
        ontology.add_axiom(Axiom::equivalent_classes(vec![class("C"), class("A")]));
        assert!(equivalent_classes(&ontology).is_empty());

        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::equivalent_classes(vec![class("A"), class("B")]));
        ontology.add_axiom(Axiom::equivalent_classes(vec![class("B"), class("C")]));
        ontology.add_axiom(Axiom::subclass_of(class("D"), class("C")));
        ontology.add_axiom(Axiom::subclass_of(class("A"), class("D")));
        let inferred = axioms(equivalent_classes(&ontology));
        assert!(inferred.contains(&Axiom::equivalent_classes(vec![class("A"), class("C")])));
        assert!(inferred.contains(&Axiom::equivalent_classes(vec![class("A"), class("D")])));
        assert!(!inferred.contains(&Axiom::equivalent_classes(vec![class("C"), class("A")])));
    }

    #[test]
    fn test_disjointness_follows_equivalence_only() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::disjoint_classes(vec![class("A"), class("B")]));
        ontology.add_axiom(Axiom::equivalent_classes(vec![class("B"), class("C")]));
        ontology.add_axiom(Axiom::subclass_of(class("D"), class("A")));
        assert_eq!(
            axioms(disjoint_classes(&ontology)),
            [Axiom::disjoint_classes(vec![class("A"), class("C")])]
        );
    }

    #[test]
    fn test_class_assertion_propagation() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::subclass_of(class("Dog"), class("Animal")));
        ontology.add_axiom(Axiom::equivalent_classes(vec![class("Animal"), class("Beast")]));
        ontology.add_axiom(Axiom::class_assertion(
            ClassExpression::intersection(vec![class("Dog"), class("Pet")]),
            individual("fido"),
        ));
        ontology.add_axiom(Axiom::class_assertion(class("Dog"), individual("rex")));
        ontology.add_axiom(Axiom::same_individual(vec![individual("rex"), individual("max")]));
        let context = ReasonerContext::new(&ontology);
        let inferred = axioms(class_assertion(&ontology, &context));
        assert!(inferred.contains(&Axiom::class_assertion(class("Dog"), individual("fido"))));
        assert!(inferred.contains(&Axiom::class_assertion(class("Pet"), individual("fido"))));
        assert!(inferred.contains(&Axiom::class_assertion(class("Beast"), individual("rex"))));
        assert!(inferred.contains(&Axiom::class_assertion(class("Dog"), individual("max"))));
    }
}
