//! Entailment rules.
//!
//! Every rule reads the ontology (and, for assertion-driven rules, a
//! [`ReasonerContext`]) and returns the inferences it derives. Rules never modify
//! their input and never return an axiom already present in the ontology.

mod class;
mod data_property;
mod individual;
mod object_property;
mod restriction;

use crate::axiom::{Assertion, ClassAxiom, DataPropertyAxiom, ObjectPropertyAxiom};
use crate::entity::{DataProperty, Individual};
use crate::expression::{ClassExpression, ObjectPropertyExpression};
use crate::ontology::Ontology;
use crate::reasoner::context::ReasonerContext;
use crate::reasoner::graph::{Hierarchy, UnionFind};
use crate::reasoner::inference::Inference;
use std::fmt;
use std::hash::Hash;

/// Identifier of an entailment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    ClassAssertion,
    SameIndividual,
    DifferentIndividuals,
    HasKey,
    HasValue,
    HasSelf,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    SubObjectPropertyOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    SymmetricObjectProperty,
    TransitiveObjectProperty,
    ReflexiveObjectProperty,
    DataPropertyDomain,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
}

impl RuleName {
    /// All the rules, in the order a reasoning pass runs them.
    pub fn all() -> &'static [RuleName] {
        &[
            RuleName::SubClassOf,
            RuleName::EquivalentClasses,
            RuleName::DisjointClasses,
            RuleName::ClassAssertion,
            RuleName::SameIndividual,
            RuleName::DifferentIndividuals,
            RuleName::HasKey,
            RuleName::HasValue,
            RuleName::HasSelf,
            RuleName::FunctionalObjectProperty,
            RuleName::InverseFunctionalObjectProperty,
            RuleName::ObjectPropertyDomain,
            RuleName::ObjectPropertyRange,
            RuleName::SubObjectPropertyOf,
            RuleName::EquivalentObjectProperties,
            RuleName::DisjointObjectProperties,
            RuleName::InverseObjectProperties,
            RuleName::SymmetricObjectProperty,
            RuleName::TransitiveObjectProperty,
            RuleName::ReflexiveObjectProperty,
            RuleName::DataPropertyDomain,
            RuleName::SubDataPropertyOf,
            RuleName::EquivalentDataProperties,
            RuleName::DisjointDataProperties,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SubClassOf => "SubClassOfEntailment",
            Self::EquivalentClasses => "EquivalentClassesEntailment",
            Self::DisjointClasses => "DisjointClassesEntailment",
            Self::ClassAssertion => "ClassAssertionEntailment",
            Self::SameIndividual => "SameIndividualEntailment",
            Self::DifferentIndividuals => "DifferentIndividualsEntailment",
            Self::HasKey => "HasKeyEntailment",
            Self::HasValue => "HasValueEntailment",
            Self::HasSelf => "HasSelfEntailment",
            Self::FunctionalObjectProperty => "FunctionalObjectPropertyEntailment",
            Self::InverseFunctionalObjectProperty => "InverseFunctionalObjectPropertyEntailment",
            Self::ObjectPropertyDomain => "ObjectPropertyDomainEntailment",
            Self::ObjectPropertyRange => "ObjectPropertyRangeEntailment",
            Self::SubObjectPropertyOf => "SubObjectPropertyOfEntailment",
            Self::EquivalentObjectProperties => "EquivalentObjectPropertiesEntailment",
            Self::DisjointObjectProperties => "DisjointObjectPropertiesEntailment",
            Self::InverseObjectProperties => "InverseObjectPropertiesEntailment",
            Self::SymmetricObjectProperty => "SymmetricObjectPropertyEntailment",
            Self::TransitiveObjectProperty => "TransitiveObjectPropertyEntailment",
            Self::ReflexiveObjectProperty => "ReflexiveObjectPropertyEntailment",
            Self::DataPropertyDomain => "DataPropertyDomainEntailment",
            Self::SubDataPropertyOf => "SubDataPropertyOfEntailment",
            Self::EquivalentDataProperties => "EquivalentDataPropertiesEntailment",
            Self::DisjointDataProperties => "DisjointDataPropertiesEntailment",
        }
    }

    /// Does the rule read the assertions of a [`ReasonerContext`]?
    pub fn needs_context(self) -> bool {
        !matches!(
            self,
            Self::SubClassOf
                | Self::EquivalentClasses
                | Self::DisjointClasses
                | Self::DifferentIndividuals
                | Self::DisjointObjectProperties
                | Self::ReflexiveObjectProperty
                | Self::DisjointDataProperties
        )
    }

    /// Runs the rule.
    ///
    /// When the rule needs a context and none is given, one is built from `ontology`.
    pub fn execute(self, ontology: &Ontology, context: Option<&ReasonerContext>) -> Vec<Inference> {
        let built;
        let context = if let Some(context) = context {
            context
        } else {
            built = if self.needs_context() {
                ReasonerContext::new(ontology)
            } else {
                ReasonerContext::default()
            };
            &built
        };
        match self {
            Self::SubClassOf => class::subclass_of(ontology),
            Self::EquivalentClasses => class::equivalent_classes(ontology),
            Self::DisjointClasses => class::disjoint_classes(ontology),
            Self::ClassAssertion => class::class_assertion(ontology, context),
            Self::SameIndividual => individual::same_individual(ontology, context),
            Self::DifferentIndividuals => individual::different_individuals(ontology),
            Self::HasKey => individual::has_key(ontology, context),
            Self::HasValue => restriction::has_value(ontology, context),
            Self::HasSelf => restriction::has_self(ontology, context),
            Self::FunctionalObjectProperty => object_property::functional(ontology, context),
            Self::InverseFunctionalObjectProperty => {
                object_property::inverse_functional(ontology, context)
            }
            Self::ObjectPropertyDomain => object_property::domain(ontology, context),
            Self::ObjectPropertyRange => object_property::range(ontology, context),
            Self::SubObjectPropertyOf => object_property::sub_property_of(ontology, context),
            Self::EquivalentObjectProperties => object_property::equivalent(ontology, context),
            Self::DisjointObjectProperties => object_property::disjoint(ontology),
            Self::InverseObjectProperties => object_property::inverse(ontology, context),
            Self::SymmetricObjectProperty => object_property::symmetric(ontology, context),
            Self::TransitiveObjectProperty => object_property::transitive(ontology, context),
            Self::ReflexiveObjectProperty => object_property::reflexive(ontology),
            Self::DataPropertyDomain => data_property::domain(ontology, context),
            Self::SubDataPropertyOf => data_property::sub_property_of(ontology, context),
            Self::EquivalentDataProperties => data_property::equivalent(ontology, context),
            Self::DisjointDataProperties => data_property::disjoint(ontology),
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Is there a list among `lists` holding both `a` and `b`?
fn listed_together<'a, N: PartialEq + 'a>(
    lists: impl IntoIterator<Item = &'a [N]>,
    a: &N,
    b: &N,
) -> bool {
    lists
        .into_iter()
        .any(|list| list.contains(a) && list.contains(b))
}

/// Told subsumptions `(sub, super)`: `SubClassOf` axioms plus both directions of
/// every pair of an `EquivalentClasses` axiom.
fn told_subsumptions(ontology: &Ontology) -> Vec<(&ClassExpression, &ClassExpression)> {
    let mut subsumptions = Vec::new();
    for record in ontology.class_axioms() {
        match record.axiom() {
            ClassAxiom::SubClassOf {
                sub_class,
                super_class,
            } => subsumptions.push((sub_class, super_class)),
            ClassAxiom::EquivalentClasses(classes) => {
                for a in classes {
                    for b in classes {
                        if a != b {
                            subsumptions.push((a, b));
                        }
                    }
                }
            }
            ClassAxiom::DisjointClasses(_) | ClassAxiom::DisjointUnion { .. } => {}
        }
    }
    subsumptions
}

/// The subsumption graph: told subsumptions plus `member ⊑ union` for disjoint unions.
fn class_hierarchy(ontology: &Ontology) -> Hierarchy<ClassExpression> {
    let mut hierarchy = Hierarchy::new();
    for (sub, sup) in told_subsumptions(ontology) {
        hierarchy.add_edge(sub, sup);
    }
    for record in ontology.class_axioms() {
        if let ClassAxiom::DisjointUnion {
            class,
            disjoint_classes,
        } = record.axiom()
        {
            let union = ClassExpression::Class(class.clone());
            for member in disjoint_classes {
                hierarchy.add_edge(member, &union);
            }
        }
    }
    hierarchy
}

fn class_equivalences(ontology: &Ontology) -> UnionFind<ClassExpression> {
    let mut equivalences = UnionFind::new();
    for record in ontology.class_axioms() {
        if let ClassAxiom::EquivalentClasses(classes) = record.axiom() {
            equivalences.union_all(classes);
        }
    }
    equivalences
}

/// Sub-property graph over object property expressions.
///
/// Each edge `P → Q` comes with its twin `ObjectInverseOf(P) → ObjectInverseOf(Q)`.
fn object_property_hierarchy(ontology: &Ontology) -> Hierarchy<ObjectPropertyExpression> {
    let mut hierarchy = Hierarchy::new();
    let mut add_edge = |sub: &ObjectPropertyExpression, sup: &ObjectPropertyExpression| {
        hierarchy.add_edge(sub, sup);
        hierarchy.add_edge(&sub.inverse(), &sup.inverse());
    };
    for record in ontology.object_property_axioms() {
        match record.axiom() {
            ObjectPropertyAxiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => add_edge(sub_property, super_property),
            ObjectPropertyAxiom::EquivalentObjectProperties(properties) => {
                for a in properties {
                    for b in properties {
                        if a != b {
                            add_edge(a, b);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    hierarchy
}

/// Equivalent object property expressions, twin inverse groups included.
fn object_property_equivalences(ontology: &Ontology) -> UnionFind<ObjectPropertyExpression> {
    let mut equivalences = UnionFind::new();
    for record in ontology.object_property_axioms() {
        if let ObjectPropertyAxiom::EquivalentObjectProperties(properties) = record.axiom() {
            equivalences.union_all(properties);
            let inverses: Vec<_> = properties
                .iter()
                .map(ObjectPropertyExpression::inverse)
                .collect();
            equivalences.union_all(&inverses);
        }
    }
    equivalences
}

fn data_property_hierarchy(ontology: &Ontology) -> Hierarchy<DataProperty> {
    let mut hierarchy = Hierarchy::new();
    for record in ontology.data_property_axioms() {
        match record.axiom() {
            DataPropertyAxiom::SubDataPropertyOf {
                sub_property,
                super_property,
            } => hierarchy.add_edge(sub_property, super_property),
            DataPropertyAxiom::EquivalentDataProperties(properties) => {
                for a in properties {
                    for b in properties {
                        if a != b {
                            hierarchy.add_edge(a, b);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    hierarchy
}

fn data_property_equivalences(ontology: &Ontology) -> UnionFind<DataProperty> {
    let mut equivalences = UnionFind::new();
    for record in ontology.data_property_axioms() {
        if let DataPropertyAxiom::EquivalentDataProperties(properties) = record.axiom() {
            equivalences.union_all(properties);
        }
    }
    equivalences
}

/// Disjoint pairs obtained by replacing one member of a told disjoint pair by an
/// equivalent entity.
///
/// Pairs already listed together are skipped, and each unordered pair is returned once.
/// Disjointness is not propagated along subsumption.
fn disjoint_pairs_through_equivalence<'a, N: Clone + Eq + Hash>(
    disjoint_lists: &[&'a [N]],
    equivalences: &'a UnionFind<N>,
) -> Vec<(&'a N, &'a N)> {
    let mut pairs: Vec<(&N, &N)> = Vec::new();
    for list in disjoint_lists {
        for a in *list {
            for b in *list {
                if a == b {
                    continue;
                }
                for c in equivalences.group_of(b) {
                    if c == b
                        || c == a
                        || listed_together(disjoint_lists.iter().copied(), a, c)
                        || pairs.contains(&(a, c))
                        || pairs.contains(&(c, a))
                    {
                        continue;
                    }
                    pairs.push((a, c));
                }
            }
        }
    }
    pairs
}

/// Sameness and difference between individuals, as told by the ontology.
///
/// Sameness is closed under symmetry and transitivity.
struct IndividualEquality<'a> {
    same: UnionFind<Individual>,
    same_groups: Vec<&'a [Individual]>,
    different_groups: Vec<&'a [Individual]>,
}

impl<'a> IndividualEquality<'a> {
    fn new(ontology: &'a Ontology) -> Self {
        let same_groups: Vec<_> = ontology.same_individual_groups().collect();
        let mut same = UnionFind::new();
        for group in &same_groups {
            same.union_all(*group);
        }
        Self {
            same,
            same_groups,
            different_groups: ontology.different_individuals_groups().collect(),
        }
    }

    fn are_same(&self, a: &Individual, b: &Individual) -> bool {
        self.same.same(a, b)
    }

    /// Is there a `SameIndividual` axiom naming both?
    fn are_told_same(&self, a: &Individual, b: &Individual) -> bool {
        listed_together(self.same_groups.iter().copied(), a, b)
    }

    /// Is there a `DifferentIndividuals` axiom naming both?
    fn are_told_different(&self, a: &Individual, b: &Individual) -> bool {
        a != b && listed_together(self.different_groups.iter().copied(), a, b)
    }

    /// Does a `DifferentIndividuals` axiom name an individual same as `a` and one same
    /// as `b`?
    fn are_different(&self, a: &Individual, b: &Individual) -> bool {
        let (left, right) = (self.group_of(a), self.group_of(b));
        left.iter()
            .any(|c| right.iter().any(|d| self.are_told_different(c, d)))
    }

    fn group_of<'b>(&'b self, individual: &'b Individual) -> Vec<&'b Individual> {
        self.same.group_of(individual)
    }

    fn same_groups(&self) -> Vec<Vec<&Individual>> {
        self.same.groups()
    }

    fn different_groups(&self) -> &[&'a [Individual]] {
        &self.different_groups
    }
}

/// Individuals asserted to be of `class` in the context, without duplicates.
fn instances_of<'a>(context: &'a ReasonerContext, class: &ClassExpression) -> Vec<&'a Individual> {
    let mut instances = Vec::new();
    for assertion in context.class_assertions() {
        if &assertion.class == class && !instances.contains(&&assertion.individual) {
            instances.push(&assertion.individual);
        }
    }
    instances
}

fn same_as(a: &Individual, b: &Individual) -> Assertion {
    Assertion::SameIndividual(vec![a.clone(), b.clone()])
}
