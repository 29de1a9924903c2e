//! OWL 2 axiom types.
//!
//! Axioms are grouped by category, the same way the [`Ontology`](crate::Ontology)
//! stores them. [`Axiom`] is the sum of all categories and is what rules emit.
//!
//! Equality is structural: two axioms are equal if they have the same variant and
//! all their operands are recursively equal, operand order included.

use crate::entity::{DataProperty, Individual, ObjectProperty, OwlClass};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression, write_list};
use oxrdf::{Literal, NamedNode};
use std::fmt;

/// Declaration of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    Class(OwlClass),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    NamedIndividual(NamedNode),
    Datatype(NamedNode),
}

impl Declaration {
    pub fn iri(&self) -> &NamedNode {
        match self {
            Self::Class(c) => c.iri(),
            Self::ObjectProperty(p) => p.iri(),
            Self::DataProperty(p) => p.iri(),
            Self::NamedIndividual(iri) | Self::Datatype(iri) => iri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassAxiom {
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },
    EquivalentClasses(Vec<ClassExpression>),
    DisjointClasses(Vec<ClassExpression>),
    /// `class` is the disjoint union of `disjoint_classes`.
    DisjointUnion {
        class: OwlClass,
        disjoint_classes: Vec<ClassExpression>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyAxiom {
    SubObjectPropertyOf {
        sub_property: ObjectPropertyExpression,
        super_property: ObjectPropertyExpression,
    },
    EquivalentObjectProperties(Vec<ObjectPropertyExpression>),
    DisjointObjectProperties(Vec<ObjectPropertyExpression>),
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataPropertyAxiom {
    SubDataPropertyOf {
        sub_property: DataProperty,
        super_property: DataProperty,
    },
    EquivalentDataProperties(Vec<DataProperty>),
    DisjointDataProperties(Vec<DataProperty>),
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
    },
    FunctionalDataProperty(DataProperty),
}

/// `ClassAssertion(class individual)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassAssertion {
    pub class: ClassExpression,
    pub individual: Individual,
}

/// `ObjectPropertyAssertion(property source target)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPropertyAssertion {
    pub property: ObjectPropertyExpression,
    pub source: Individual,
    pub target: Individual,
}

impl ObjectPropertyAssertion {
    pub fn new(
        property: impl Into<ObjectPropertyExpression>,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) -> Self {
        Self {
            property: property.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Rewrites `ObjectInverseOf(P)(a, b)` as `P(b, a)`.
    ///
    /// Assertions on a named property are returned unchanged, so calibrating twice
    /// is the same as calibrating once.
    #[must_use]
    pub fn calibrate(self) -> Self {
        match self.property {
            ObjectPropertyExpression::ObjectInverseOf(property) => Self {
                property: ObjectPropertyExpression::ObjectProperty(property),
                source: self.target,
                target: self.source,
            },
            ObjectPropertyExpression::ObjectProperty(_) => self,
        }
    }
}

/// `DataPropertyAssertion(property source target)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPropertyAssertion {
    pub property: DataProperty,
    pub source: Individual,
    pub target: Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Assertion {
    ClassAssertion(ClassAssertion),
    ObjectPropertyAssertion(ObjectPropertyAssertion),
    NegativeObjectPropertyAssertion(ObjectPropertyAssertion),
    DataPropertyAssertion(DataPropertyAssertion),
    NegativeDataPropertyAssertion(DataPropertyAssertion),
    SameIndividual(Vec<Individual>),
    DifferentIndividuals(Vec<Individual>),
}

impl From<ClassAssertion> for Assertion {
    fn from(assertion: ClassAssertion) -> Self {
        Self::ClassAssertion(assertion)
    }
}

impl From<ObjectPropertyAssertion> for Assertion {
    fn from(assertion: ObjectPropertyAssertion) -> Self {
        Self::ObjectPropertyAssertion(assertion)
    }
}

impl From<DataPropertyAssertion> for Assertion {
    fn from(assertion: DataPropertyAssertion) -> Self {
        Self::DataPropertyAssertion(assertion)
    }
}

/// `HasKey(class (object properties) (data properties))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HasKey {
    pub class: ClassExpression,
    pub object_properties: Vec<ObjectPropertyExpression>,
    pub data_properties: Vec<DataProperty>,
}

/// An OWL 2 axiom of any category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    Declaration(Declaration),
    Class(ClassAxiom),
    ObjectProperty(ObjectPropertyAxiom),
    DataProperty(DataPropertyAxiom),
    Assertion(Assertion),
    HasKey(HasKey),
}

impl Axiom {
    pub fn subclass_of(sub: impl Into<ClassExpression>, sup: impl Into<ClassExpression>) -> Self {
        ClassAxiom::SubClassOf {
            sub_class: sub.into(),
            super_class: sup.into(),
        }
        .into()
    }

    pub fn equivalent_classes(classes: Vec<ClassExpression>) -> Self {
        ClassAxiom::EquivalentClasses(classes).into()
    }

    pub fn disjoint_classes(classes: Vec<ClassExpression>) -> Self {
        ClassAxiom::DisjointClasses(classes).into()
    }

    pub fn class_assertion(
        class: impl Into<ClassExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Assertion::ClassAssertion(ClassAssertion {
            class: class.into(),
            individual: individual.into(),
        })
        .into()
    }

    pub fn object_property_assertion(
        property: impl Into<ObjectPropertyExpression>,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) -> Self {
        Assertion::ObjectPropertyAssertion(ObjectPropertyAssertion::new(property, source, target))
            .into()
    }

    pub fn data_property_assertion(
        property: impl Into<DataProperty>,
        source: impl Into<Individual>,
        target: Literal,
    ) -> Self {
        Assertion::DataPropertyAssertion(DataPropertyAssertion {
            property: property.into(),
            source: source.into(),
            target,
        })
        .into()
    }

    pub fn same_individual(individuals: Vec<Individual>) -> Self {
        Assertion::SameIndividual(individuals).into()
    }

    pub fn different_individuals(individuals: Vec<Individual>) -> Self {
        Assertion::DifferentIndividuals(individuals).into()
    }

    /// All the IRIs this axiom mentions, in operand order, without duplicates.
    pub fn iris(&self) -> Vec<&NamedNode> {
        let mut iris = Vec::new();
        match self {
            Self::Declaration(declaration) => iris.push(declaration.iri()),
            Self::Class(axiom) => match axiom {
                ClassAxiom::SubClassOf {
                    sub_class,
                    super_class,
                } => {
                    sub_class.collect_iris(&mut iris);
                    super_class.collect_iris(&mut iris);
                }
                ClassAxiom::EquivalentClasses(classes) | ClassAxiom::DisjointClasses(classes) => {
                    for class in classes {
                        class.collect_iris(&mut iris);
                    }
                }
                ClassAxiom::DisjointUnion {
                    class,
                    disjoint_classes,
                } => {
                    iris.push(class.iri());
                    for class in disjoint_classes {
                        class.collect_iris(&mut iris);
                    }
                }
            },
            Self::ObjectProperty(axiom) => match axiom {
                ObjectPropertyAxiom::SubObjectPropertyOf {
                    sub_property: left,
                    super_property: right,
                }
                | ObjectPropertyAxiom::InverseObjectProperties(left, right) => {
                    iris.push(left.base_property().iri());
                    iris.push(right.base_property().iri());
                }
                ObjectPropertyAxiom::EquivalentObjectProperties(properties)
                | ObjectPropertyAxiom::DisjointObjectProperties(properties) => {
                    iris.extend(properties.iter().map(|p| p.base_property().iri()));
                }
                ObjectPropertyAxiom::ObjectPropertyDomain {
                    property,
                    domain: class,
                }
                | ObjectPropertyAxiom::ObjectPropertyRange {
                    property,
                    range: class,
                } => {
                    iris.push(property.base_property().iri());
                    class.collect_iris(&mut iris);
                }
                ObjectPropertyAxiom::FunctionalObjectProperty(property)
                | ObjectPropertyAxiom::InverseFunctionalObjectProperty(property)
                | ObjectPropertyAxiom::ReflexiveObjectProperty(property)
                | ObjectPropertyAxiom::IrreflexiveObjectProperty(property)
                | ObjectPropertyAxiom::SymmetricObjectProperty(property)
                | ObjectPropertyAxiom::AsymmetricObjectProperty(property)
                | ObjectPropertyAxiom::TransitiveObjectProperty(property) => {
                    iris.push(property.base_property().iri());
                }
            },
            Self::DataProperty(axiom) => match axiom {
                DataPropertyAxiom::SubDataPropertyOf {
                    sub_property,
                    super_property,
                } => {
                    iris.push(sub_property.iri());
                    iris.push(super_property.iri());
                }
                DataPropertyAxiom::EquivalentDataProperties(properties)
                | DataPropertyAxiom::DisjointDataProperties(properties) => {
                    iris.extend(properties.iter().map(DataProperty::iri));
                }
                DataPropertyAxiom::DataPropertyDomain { property, domain } => {
                    iris.push(property.iri());
                    domain.collect_iris(&mut iris);
                }
                DataPropertyAxiom::DataPropertyRange { property, range } => {
                    iris.push(property.iri());
                    iris.extend(range.iri());
                }
                DataPropertyAxiom::FunctionalDataProperty(property) => iris.push(property.iri()),
            },
            Self::Assertion(assertion) => match assertion {
                Assertion::ClassAssertion(ClassAssertion { class, individual }) => {
                    class.collect_iris(&mut iris);
                    iris.extend(individual.iri());
                }
                Assertion::ObjectPropertyAssertion(a)
                | Assertion::NegativeObjectPropertyAssertion(a) => {
                    iris.push(a.property.base_property().iri());
                    iris.extend(a.source.iri());
                    iris.extend(a.target.iri());
                }
                Assertion::DataPropertyAssertion(a)
                | Assertion::NegativeDataPropertyAssertion(a) => {
                    iris.push(a.property.iri());
                    iris.extend(a.source.iri());
                }
                Assertion::SameIndividual(individuals)
                | Assertion::DifferentIndividuals(individuals) => {
                    iris.extend(individuals.iter().filter_map(Individual::iri));
                }
            },
            Self::HasKey(key) => {
                key.class.collect_iris(&mut iris);
                iris.extend(
                    key.object_properties
                        .iter()
                        .map(|p| p.base_property().iri()),
                );
                iris.extend(key.data_properties.iter().map(DataProperty::iri));
            }
        }
        let mut seen = rustc_hash::FxHashSet::default();
        iris.retain(|iri| seen.insert(*iri));
        iris
    }
}

impl From<Declaration> for Axiom {
    fn from(axiom: Declaration) -> Self {
        Self::Declaration(axiom)
    }
}

impl From<ClassAxiom> for Axiom {
    fn from(axiom: ClassAxiom) -> Self {
        Self::Class(axiom)
    }
}

impl From<ObjectPropertyAxiom> for Axiom {
    fn from(axiom: ObjectPropertyAxiom) -> Self {
        Self::ObjectProperty(axiom)
    }
}

impl From<DataPropertyAxiom> for Axiom {
    fn from(axiom: DataPropertyAxiom) -> Self {
        Self::DataProperty(axiom)
    }
}

impl From<Assertion> for Axiom {
    fn from(axiom: Assertion) -> Self {
        Self::Assertion(axiom)
    }
}

impl From<HasKey> for Axiom {
    fn from(axiom: HasKey) -> Self {
        Self::HasKey(axiom)
    }
}

impl From<ClassAssertion> for Axiom {
    fn from(assertion: ClassAssertion) -> Self {
        Self::Assertion(assertion.into())
    }
}

impl From<ObjectPropertyAssertion> for Axiom {
    fn from(assertion: ObjectPropertyAssertion) -> Self {
        Self::Assertion(assertion.into())
    }
}

impl From<DataPropertyAssertion> for Axiom {
    fn from(assertion: DataPropertyAssertion) -> Self {
        Self::Assertion(assertion.into())
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(c) => write!(f, "Declaration(Class({c}))"),
            Self::ObjectProperty(p) => write!(f, "Declaration(ObjectProperty({p}))"),
            Self::DataProperty(p) => write!(f, "Declaration(DataProperty({p}))"),
            Self::NamedIndividual(i) => write!(f, "Declaration(NamedIndividual({i}))"),
            Self::Datatype(d) => write!(f, "Declaration(Datatype({d}))"),
        }
    }
}

impl fmt::Display for ClassAxiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubClassOf {
                sub_class,
                super_class,
            } => write!(f, "SubClassOf({sub_class} {super_class})"),
            Self::EquivalentClasses(classes) => write_list(f, "EquivalentClasses", classes),
            Self::DisjointClasses(classes) => write_list(f, "DisjointClasses", classes),
            Self::DisjointUnion {
                class,
                disjoint_classes,
            } => {
                write!(f, "DisjointUnion({class}")?;
                for member in disjoint_classes {
                    write!(f, " {member}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for ObjectPropertyAxiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => write!(f, "SubObjectPropertyOf({sub_property} {super_property})"),
            Self::EquivalentObjectProperties(properties) => {
                write_list(f, "EquivalentObjectProperties", properties)
            }
            Self::DisjointObjectProperties(properties) => {
                write_list(f, "DisjointObjectProperties", properties)
            }
            Self::InverseObjectProperties(left, right) => {
                write!(f, "InverseObjectProperties({left} {right})")
            }
            Self::ObjectPropertyDomain { property, domain } => {
                write!(f, "ObjectPropertyDomain({property} {domain})")
            }
            Self::ObjectPropertyRange { property, range } => {
                write!(f, "ObjectPropertyRange({property} {range})")
            }
            Self::FunctionalObjectProperty(p) => write!(f, "FunctionalObjectProperty({p})"),
            Self::InverseFunctionalObjectProperty(p) => {
                write!(f, "InverseFunctionalObjectProperty({p})")
            }
            Self::ReflexiveObjectProperty(p) => write!(f, "ReflexiveObjectProperty({p})"),
            Self::IrreflexiveObjectProperty(p) => write!(f, "IrreflexiveObjectProperty({p})"),
            Self::SymmetricObjectProperty(p) => write!(f, "SymmetricObjectProperty({p})"),
            Self::AsymmetricObjectProperty(p) => write!(f, "AsymmetricObjectProperty({p})"),
            Self::TransitiveObjectProperty(p) => write!(f, "TransitiveObjectProperty({p})"),
        }
    }
}

impl fmt::Display for DataPropertyAxiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubDataPropertyOf {
                sub_property,
                super_property,
            } => write!(f, "SubDataPropertyOf({sub_property} {super_property})"),
            Self::EquivalentDataProperties(properties) => {
                write_list(f, "EquivalentDataProperties", properties)
            }
            Self::DisjointDataProperties(properties) => {
                write_list(f, "DisjointDataProperties", properties)
            }
            Self::DataPropertyDomain { property, domain } => {
                write!(f, "DataPropertyDomain({property} {domain})")
            }
            Self::DataPropertyRange { property, range } => {
                write!(f, "DataPropertyRange({property} {range})")
            }
            Self::FunctionalDataProperty(p) => write!(f, "FunctionalDataProperty({p})"),
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassAssertion(a) => write!(f, "ClassAssertion({} {})", a.class, a.individual),
            Self::ObjectPropertyAssertion(a) => write!(
                f,
                "ObjectPropertyAssertion({} {} {})",
                a.property, a.source, a.target
            ),
            Self::NegativeObjectPropertyAssertion(a) => write!(
                f,
                "NegativeObjectPropertyAssertion({} {} {})",
                a.property, a.source, a.target
            ),
            Self::DataPropertyAssertion(a) => write!(
                f,
                "DataPropertyAssertion({} {} {})",
                a.property, a.source, a.target
            ),
            Self::NegativeDataPropertyAssertion(a) => write!(
                f,
                "NegativeDataPropertyAssertion({} {} {})",
                a.property, a.source, a.target
            ),
            Self::SameIndividual(individuals) => write_list(f, "SameIndividual", individuals),
            Self::DifferentIndividuals(individuals) => {
                write_list(f, "DifferentIndividuals", individuals)
            }
        }
    }
}

impl fmt::Display for HasKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HasKey({} ", self.class)?;
        write_list(f, "", &self.object_properties)?;
        f.write_str(" ")?;
        write_list(f, "", &self.data_properties)?;
        f.write_str(")")
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration(a) => a.fmt(f),
            Self::Class(a) => a.fmt(f),
            Self::ObjectProperty(a) => a.fmt(f),
            Self::DataProperty(a) => a.fmt(f),
            Self::Assertion(a) => a.fmt(f),
            Self::HasKey(a) => a.fmt(f),
        }
    }
}
