//! OWL 2 ontology: categorized axiom collections and the declaration layer.

use crate::axiom::{
    Assertion, Axiom, ClassAssertion, ClassAxiom, DataPropertyAssertion, DataPropertyAxiom,
    Declaration, HasKey, ObjectPropertyAssertion, ObjectPropertyAxiom,
};
use crate::entity::Individual;
use crate::error::{OwlResult, OwlWarning, ValidationError, WarningKind};
use crate::reasoner::Inference;
use crate::reasoner::graph::UnionFind;
use oxrdf::NamedNode;
use rustc_hash::FxHashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An axiom stored in an [`Ontology`] together with its provenance.
///
/// The provenance flag is fixed when the record is created: asserted axioms are
/// never turned into inferences or the other way around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxiomRecord<A> {
    axiom: A,
    is_inference: bool,
}

impl<A> AxiomRecord<A> {
    #[inline]
    pub fn axiom(&self) -> &A {
        &self.axiom
    }

    /// `true` if the axiom was derived by a rule rather than asserted.
    #[inline]
    pub fn is_inference(&self) -> bool {
        self.is_inference
    }

    #[inline]
    pub fn into_axiom(self) -> A {
        self.axiom
    }
}

impl<A> Deref for AxiomRecord<A> {
    type Target = A;

    #[inline]
    fn deref(&self) -> &A {
        &self.axiom
    }
}

type WarningListener = Arc<dyn Fn(&OwlWarning) + Send + Sync>;

/// An OWL 2 ontology.
///
/// Axioms are kept per category in insertion order. [`Ontology::add_axiom`] appends
/// unconditionally; the `declare_*` methods validate their input first and refuse
/// declarations that would break OWL-DL integrity, reporting them to the listeners
/// registered with [`Ontology::on_warning`].
#[derive(Clone, Default)]
pub struct Ontology {
    iri: Option<NamedNode>,
    imports: Vec<NamedNode>,
    declarations: Vec<AxiomRecord<Declaration>>,
    class_axioms: Vec<AxiomRecord<ClassAxiom>>,
    object_property_axioms: Vec<AxiomRecord<ObjectPropertyAxiom>>,
    data_property_axioms: Vec<AxiomRecord<DataPropertyAxiom>>,
    assertions: Vec<AxiomRecord<Assertion>>,
    key_axioms: Vec<AxiomRecord<HasKey>>,
    /// Every axiom of the ontology, for structural membership tests.
    index: FxHashSet<Axiom>,
    warning_listeners: Vec<WarningListener>,
}

impl Ontology {
    pub fn new(iri: Option<NamedNode>) -> Self {
        Self {
            iri,
            ..Self::default()
        }
    }

    pub fn with_iri(iri: impl Into<String>) -> OwlResult<Self> {
        Ok(Self::new(Some(NamedNode::new(iri)?)))
    }

    pub fn iri(&self) -> Option<&NamedNode> {
        self.iri.as_ref()
    }

    pub fn set_iri(&mut self, iri: Option<NamedNode>) {
        self.iri = iri;
    }

    pub fn imports(&self) -> &[NamedNode] {
        &self.imports
    }

    pub fn add_import(&mut self, iri: NamedNode) {
        if !self.imports.contains(&iri) {
            self.imports.push(iri);
        }
    }

    /// Appends an asserted axiom without any validation.
    pub fn add_axiom(&mut self, axiom: impl Into<Axiom>) {
        self.push(axiom.into(), false);
    }

    /// Appends an inferred axiom unless a structurally equal one is already present.
    ///
    /// Returns `true` if the axiom was inserted.
    pub fn add_inference(&mut self, inference: Inference) -> bool {
        if self.index.contains(inference.axiom()) {
            return false;
        }
        self.push(inference.into_axiom(), true);
        true
    }

    /// Merges a batch of inferences, possibly produced by several rules.
    ///
    /// Returns how many were new.
    pub fn merge_inferences(&mut self, inferences: impl IntoIterator<Item = Inference>) -> usize {
        let mut count = 0;
        for inference in inferences {
            if self.add_inference(inference) {
                count += 1;
            }
        }
        count
    }

    fn push(&mut self, axiom: Axiom, is_inference: bool) {
        self.index.insert(axiom.clone());
        match axiom {
            Axiom::Declaration(axiom) => self.declarations.push(AxiomRecord {
                axiom,
                is_inference,
            }),
            Axiom::Class(axiom) => self.class_axioms.push(AxiomRecord {
                axiom,
                is_inference,
            }),
            Axiom::ObjectProperty(axiom) => self.object_property_axioms.push(AxiomRecord {
                axiom,
                is_inference,
            }),
            Axiom::DataProperty(axiom) => self.data_property_axioms.push(AxiomRecord {
                axiom,
                is_inference,
            }),
            Axiom::Assertion(axiom) => self.assertions.push(AxiomRecord {
                axiom,
                is_inference,
            }),
            Axiom::HasKey(axiom) => self.key_axioms.push(AxiomRecord {
                axiom,
                is_inference,
            }),
        }
    }

    /// Is there an axiom structurally equal to `axiom`, asserted or inferred?
    #[inline]
    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.index.contains(axiom)
    }

    pub fn axiom_count(&self) -> usize {
        self.declarations.len()
            + self.class_axioms.len()
            + self.object_property_axioms.len()
            + self.data_property_axioms.len()
            + self.assertions.len()
            + self.key_axioms.len()
    }

    pub fn declarations(&self) -> &[AxiomRecord<Declaration>] {
        &self.declarations
    }

    pub fn class_axioms(&self) -> &[AxiomRecord<ClassAxiom>] {
        &self.class_axioms
    }

    pub fn object_property_axioms(&self) -> &[AxiomRecord<ObjectPropertyAxiom>] {
        &self.object_property_axioms
    }

    pub fn data_property_axioms(&self) -> &[AxiomRecord<DataPropertyAxiom>] {
        &self.data_property_axioms
    }

    pub fn assertions(&self) -> &[AxiomRecord<Assertion>] {
        &self.assertions
    }

    pub fn key_axioms(&self) -> &[AxiomRecord<HasKey>] {
        &self.key_axioms
    }

    /// All the axioms flagged as inferences, in category then insertion order.
    pub fn inferred_axioms(&self) -> Vec<Axiom> {
        fn inferred<A: Clone + Into<Axiom>>(
            records: &[AxiomRecord<A>],
        ) -> impl Iterator<Item = Axiom> + '_ {
            records
                .iter()
                .filter(|r| r.is_inference)
                .map(|r| r.axiom.clone().into())
        }
        inferred(&self.declarations)
            .chain(inferred(&self.class_axioms))
            .chain(inferred(&self.object_property_axioms))
            .chain(inferred(&self.data_property_axioms))
            .chain(inferred(&self.assertions))
            .chain(inferred(&self.key_axioms))
            .collect()
    }

    pub fn class_assertions(&self) -> impl Iterator<Item = &ClassAssertion> {
        self.assertions.iter().filter_map(|a| match &a.axiom {
            Assertion::ClassAssertion(a) => Some(a),
            _ => None,
        })
    }

    /// Object property assertions as declared, without calibration.
    pub fn object_property_assertions(&self) -> impl Iterator<Item = &ObjectPropertyAssertion> {
        self.assertions.iter().filter_map(|a| match &a.axiom {
            Assertion::ObjectPropertyAssertion(a) => Some(a),
            _ => None,
        })
    }

    pub fn negative_object_property_assertions(
        &self,
    ) -> impl Iterator<Item = &ObjectPropertyAssertion> {
        self.assertions.iter().filter_map(|a| match &a.axiom {
            Assertion::NegativeObjectPropertyAssertion(a) => Some(a),
            _ => None,
        })
    }

    pub fn data_property_assertions(&self) -> impl Iterator<Item = &DataPropertyAssertion> {
        self.assertions.iter().filter_map(|a| match &a.axiom {
            Assertion::DataPropertyAssertion(a) => Some(a),
            _ => None,
        })
    }

    pub fn negative_data_property_assertions(
        &self,
    ) -> impl Iterator<Item = &DataPropertyAssertion> {
        self.assertions.iter().filter_map(|a| match &a.axiom {
            Assertion::NegativeDataPropertyAssertion(a) => Some(a),
            _ => None,
        })
    }

    pub fn same_individual_groups(&self) -> impl Iterator<Item = &[Individual]> {
        self.assertions.iter().filter_map(|a| match &a.axiom {
            Assertion::SameIndividual(individuals) => Some(individuals.as_slice()),
            _ => None,
        })
    }

    pub fn different_individuals_groups(&self) -> impl Iterator<Item = &[Individual]> {
        self.assertions.iter().filter_map(|a| match &a.axiom {
            Assertion::DifferentIndividuals(individuals) => Some(individuals.as_slice()),
            _ => None,
        })
    }

    /// Every individual declared or mentioned by an assertion, in first-seen order.
    pub fn individuals(&self) -> Vec<Individual> {
        let mut seen = FxHashSet::default();
        let mut individuals = Vec::new();
        let mut visit = |individual: &Individual| {
            if seen.insert(individual.clone()) {
                individuals.push(individual.clone());
            }
        };
        for declaration in &self.declarations {
            if let Declaration::NamedIndividual(iri) = &declaration.axiom {
                visit(&Individual::Named(iri.clone()));
            }
        }
        for assertion in &self.assertions {
            match &assertion.axiom {
                Assertion::ClassAssertion(a) => visit(&a.individual),
                Assertion::ObjectPropertyAssertion(a)
                | Assertion::NegativeObjectPropertyAssertion(a) => {
                    visit(&a.source);
                    visit(&a.target);
                }
                Assertion::DataPropertyAssertion(a)
                | Assertion::NegativeDataPropertyAssertion(a) => {
                    visit(&a.source);
                }
                Assertion::SameIndividual(group) | Assertion::DifferentIndividuals(group) => {
                    group.iter().for_each(&mut visit);
                }
            }
        }
        individuals
    }

    /// Registers a listener called for every declaration refused by the integrity checks.
    pub fn on_warning(&mut self, listener: impl Fn(&OwlWarning) + Send + Sync + 'static) {
        self.warning_listeners.push(Arc::new(listener));
    }

    fn warn(&self, warning: &OwlWarning) {
        tracing::warn!(kind = ?warning.kind(), "{}", warning.message());
        for listener in &self.warning_listeners {
            listener(warning);
        }
    }

    pub fn declare_entity(&mut self, declaration: Declaration) {
        self.add_axiom(declaration);
    }

    /// Validates and appends a class axiom.
    pub fn declare_class_axiom(&mut self, axiom: ClassAxiom) -> OwlResult<()> {
        match &axiom {
            ClassAxiom::EquivalentClasses(classes) => {
                check_operands("EquivalentClasses", classes.len())?;
            }
            ClassAxiom::DisjointClasses(classes) => {
                check_operands("DisjointClasses", classes.len())?;
            }
            ClassAxiom::DisjointUnion {
                disjoint_classes, ..
            } => check_operands("DisjointUnion", disjoint_classes.len())?,
            ClassAxiom::SubClassOf { .. } => {}
        }
        self.add_axiom(axiom);
        Ok(())
    }

    /// Validates and appends an object property axiom.
    pub fn declare_object_property_axiom(&mut self, axiom: ObjectPropertyAxiom) -> OwlResult<()> {
        match &axiom {
            ObjectPropertyAxiom::EquivalentObjectProperties(properties) => {
                check_operands("EquivalentObjectProperties", properties.len())?;
            }
            ObjectPropertyAxiom::DisjointObjectProperties(properties) => {
                check_operands("DisjointObjectProperties", properties.len())?;
            }
            _ => {}
        }
        self.add_axiom(axiom);
        Ok(())
    }

    /// Validates and appends a data property axiom.
    pub fn declare_data_property_axiom(&mut self, axiom: DataPropertyAxiom) -> OwlResult<()> {
        match &axiom {
            DataPropertyAxiom::EquivalentDataProperties(properties) => {
                check_operands("EquivalentDataProperties", properties.len())?;
            }
            DataPropertyAxiom::DisjointDataProperties(properties) => {
                check_operands("DisjointDataProperties", properties.len())?;
            }
            _ => {}
        }
        self.add_axiom(axiom);
        Ok(())
    }

    pub fn declare_has_key(&mut self, axiom: HasKey) -> OwlResult<()> {
        if axiom.object_properties.is_empty() && axiom.data_properties.is_empty() {
            return Err(ValidationError::missing_argument("key properties").into());
        }
        self.add_axiom(axiom);
        Ok(())
    }

    /// Validates and appends an assertion.
    ///
    /// Returns `Ok(false)` when the assertion contradicts the ontology: it is then
    /// discarded and a warning is emitted. Structurally invalid assertions (too few
    /// individuals, an individual same as or different from itself) are errors.
    pub fn declare_assertion(&mut self, assertion: Assertion) -> OwlResult<bool> {
        let conflict = match &assertion {
            Assertion::SameIndividual(group) => {
                check_individuals("SameIndividual", group)?;
                let equality = self.declared_equality();
                pairs(group)
                    .find(|(a, b)| equality.are_different(a, b))
                    .map(|(a, b)| {
                        OwlWarning::new(
                            WarningKind::SameAndDifferent,
                            format!("SameIndividual({a} {b}) discarded: declared different"),
                        )
                    })
            }
            Assertion::DifferentIndividuals(group) => {
                check_individuals("DifferentIndividuals", group)?;
                let equality = self.declared_equality();
                pairs(group)
                    .find(|(a, b)| equality.are_same(a, b))
                    .map(|(a, b)| {
                        OwlWarning::new(
                            WarningKind::SameAndDifferent,
                            format!("DifferentIndividuals({a} {b}) discarded: declared same"),
                        )
                    })
            }
            Assertion::ObjectPropertyAssertion(positive) => {
                let positive = positive.clone().calibrate();
                self.negative_object_property_assertions()
                    .any(|negative| negative.clone().calibrate() == positive)
                    .then(|| {
                        OwlWarning::new(
                            WarningKind::NegativeAssertionConflict,
                            format!("{assertion} discarded: negated by an assertion"),
                        )
                    })
            }
            Assertion::NegativeObjectPropertyAssertion(negative) => {
                let negative = negative.clone().calibrate();
                self.object_property_assertions()
                    .any(|positive| positive.clone().calibrate() == negative)
                    .then(|| {
                        OwlWarning::new(
                            WarningKind::NegativeAssertionConflict,
                            format!("{assertion} discarded: contradicts an assertion"),
                        )
                    })
            }
            Assertion::DataPropertyAssertion(positive) => self
                .negative_data_property_assertions()
                .any(|negative| negative == positive)
                .then(|| {
                    OwlWarning::new(
                        WarningKind::NegativeAssertionConflict,
                        format!("{assertion} discarded: negated by an assertion"),
                    )
                }),
            Assertion::NegativeDataPropertyAssertion(negative) => self
                .data_property_assertions()
                .any(|positive| positive == negative)
                .then(|| {
                    OwlWarning::new(
                        WarningKind::NegativeAssertionConflict,
                        format!("{assertion} discarded: contradicts an assertion"),
                    )
                }),
            Assertion::ClassAssertion(_) => None,
        };
        if let Some(warning) = conflict {
            self.warn(&warning);
            return Ok(false);
        }
        self.add_axiom(assertion);
        Ok(true)
    }

    fn declared_equality(&self) -> DeclaredEquality<'_> {
        let mut same = UnionFind::new();
        for group in self.same_individual_groups() {
            same.union_all(group);
        }
        DeclaredEquality {
            same,
            different: self.different_individuals_groups().collect(),
        }
    }
}

/// Sameness closed under symmetry and transitivity, and the difference it implies.
struct DeclaredEquality<'a> {
    same: UnionFind<Individual>,
    different: Vec<&'a [Individual]>,
}

impl DeclaredEquality<'_> {
    fn are_same(&self, a: &Individual, b: &Individual) -> bool {
        self.same.same(a, b)
    }

    /// Does a `DifferentIndividuals` axiom name an individual same as `a` and one same
    /// as `b`?
    fn are_different(&self, a: &Individual, b: &Individual) -> bool {
        let (left, right) = (self.same.group_of(a), self.same.group_of(b));
        left.iter()
            .any(|c| right.iter().any(|d| self.listed_different(c, d)))
    }

    fn listed_different(&self, a: &Individual, b: &Individual) -> bool {
        a != b
            && self
                .different
                .iter()
                .any(|group| group.contains(a) && group.contains(b))
    }
}

fn check_operands(axiom: &str, count: usize) -> Result<(), ValidationError> {
    if count < 2 {
        return Err(ValidationError::too_few_operands(axiom, count));
    }
    Ok(())
}

fn check_individuals(axiom: &str, group: &[Individual]) -> Result<(), ValidationError> {
    check_operands(axiom, group.len())?;
    if let Some((a, _)) = pairs(group).find(|(a, b)| a == b) {
        return Err(ValidationError::self_reference(format!(
            "{axiom} mentions {a} more than once"
        )));
    }
    Ok(())
}

/// Unordered pairs of distinct positions of `items`.
pub(crate) fn pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| items[i + 1..].iter().map(move |b| (a, b)))
}

impl fmt::Debug for Ontology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ontology")
            .field("iri", &self.iri)
            .field("imports", &self.imports)
            .field("declarations", &self.declarations)
            .field("class_axioms", &self.class_axioms)
            .field("object_property_axioms", &self.object_property_axioms)
            .field("data_property_axioms", &self.data_property_axioms)
            .field("assertions", &self.assertions)
            .field("key_axioms", &self.key_axioms)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Ontology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(iri) = &self.iri {
            write!(f, "Ontology({iri})")?;
        } else {
            f.write_str("Ontology(anonymous)")?;
        }
        write!(f, " [{} axioms]", self.axiom_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::OwlClass;
    use crate::error::{OwlError, ValidationErrorKind};
    use crate::reasoner::RuleName;
    use std::sync::Mutex;

    fn ex(name: &str) -> Individual {
        Individual::Named(NamedNode::new_unchecked(format!("http://example.org/{name}")))
    }

    #[test]
    fn test_axioms_are_categorized() {
        let mut ontology = Ontology::new(None);
        let dog = OwlClass::new(NamedNode::new_unchecked("http://example.org/Dog"));
        ontology.add_axiom(Declaration::Class(dog.clone()));
        ontology.add_axiom(Axiom::class_assertion(dog, ex("fido")));
        assert_eq!(ontology.declarations().len(), 1);
        assert_eq!(ontology.assertions().len(), 1);
        assert_eq!(ontology.class_assertions().count(), 1);
        assert_eq!(ontology.axiom_count(), 2);
        assert!(ontology.assertions().iter().all(|a| !a.is_inference()));
        assert_eq!(ontology.individuals(), vec![ex("fido")]);
    }

    #[test]
    fn test_add_axiom_does_not_deduplicate() {
        let mut ontology = Ontology::new(None);
        let axiom = Axiom::same_individual(vec![ex("a"), ex("b")]);
        ontology.add_axiom(axiom.clone());
        ontology.add_axiom(axiom.clone());
        assert_eq!(ontology.axiom_count(), 2);
        assert!(ontology.contains(&axiom));
    }

    #[test]
    fn test_add_inference_deduplicates() {
        let mut ontology = Ontology::new(None);
        let axiom = Axiom::same_individual(vec![ex("a"), ex("b")]);
        ontology.add_axiom(axiom.clone());
        assert!(!ontology.add_inference(Inference::new(axiom, RuleName::SameIndividual)));
        let other = Axiom::same_individual(vec![ex("b"), ex("c")]);
        let merged = ontology.merge_inferences([
            Inference::new(other.clone(), RuleName::SameIndividual),
            Inference::new(other.clone(), RuleName::HasKey),
        ]);
        assert_eq!(merged, 1);
        assert_eq!(ontology.inferred_axioms(), vec![other]);
    }

    #[test]
    fn test_self_referential_same_individual_fails() {
        let mut ontology = Ontology::new(None);
        let result = ontology.declare_assertion(Assertion::SameIndividual(vec![ex("a"), ex("a")]));
        assert!(matches!(
            result,
            Err(OwlError::Validation(ref e)) if e.kind() == ValidationErrorKind::SelfReference
        ));
        let result = ontology.declare_assertion(Assertion::DifferentIndividuals(vec![ex("a")]));
        assert!(matches!(
            result,
            Err(OwlError::Validation(ref e)) if e.kind() == ValidationErrorKind::TooFewOperands
        ));
    }

    #[test]
    fn test_same_and_different_conflict_is_discarded_with_warning() {
        let warnings = Arc::new(Mutex::new(Vec::new()));
        let mut ontology = Ontology::new(None);
        let sink = Arc::clone(&warnings);
        ontology.on_warning(move |w| sink.lock().unwrap().push(w.clone()));

        assert!(
            ontology
                .declare_assertion(Assertion::DifferentIndividuals(vec![ex("a"), ex("b"), ex("c")]))
                .unwrap()
        );
        assert!(
            !ontology
                .declare_assertion(Assertion::SameIndividual(vec![ex("c"), ex("a")]))
                .unwrap()
        );
        assert_eq!(ontology.assertions().len(), 1);

        let warnings = warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind(), WarningKind::SameAndDifferent);
    }
}
