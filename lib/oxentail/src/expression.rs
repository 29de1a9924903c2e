//! OWL 2 class expressions, object property expressions, and data ranges.

use crate::entity::{DataProperty, Individual, ObjectProperty, OwlClass};
use crate::error::{OwlResult, ValidationError};
use oxrdf::{Literal, NamedNode};
use std::fmt;

/// An OWL 2 class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// A named class.
    Class(OwlClass),
    ObjectIntersectionOf(Vec<ClassExpression>),
    ObjectUnionOf(Vec<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    /// Enumeration of individuals.
    ObjectOneOf(Vec<Individual>),
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    /// Individuals related through `property` to `individual`.
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },
    /// Individuals related to themselves through the property.
    ObjectHasSelf(ObjectPropertyExpression),
    /// `filler` is `None` for unqualified cardinalities.
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    DataSomeValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataAllValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },
    DataMinCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
    DataMaxCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
    DataExactCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
}

impl ClassExpression {
    pub fn class(c: impl Into<OwlClass>) -> Self {
        Self::Class(c.into())
    }

    pub fn intersection(classes: Vec<ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(classes)
    }

    pub fn union(classes: Vec<ClassExpression>) -> Self {
        Self::ObjectUnionOf(classes)
    }

    pub fn complement(c: ClassExpression) -> Self {
        Self::ObjectComplementOf(Box::new(c))
    }

    pub fn some_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: ClassExpression,
    ) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    pub fn all_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: ClassExpression,
    ) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    pub fn has_value(
        property: impl Into<ObjectPropertyExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::ObjectHasValue {
            property: property.into(),
            individual: individual.into(),
        }
    }

    pub fn has_self(property: impl Into<ObjectPropertyExpression>) -> Self {
        Self::ObjectHasSelf(property.into())
    }

    pub fn data_has_value(property: impl Into<DataProperty>, value: Literal) -> Self {
        Self::DataHasValue {
            property: property.into(),
            value,
        }
    }

    /// Builds the restriction "between `min` and `max` `property` values (of `filler`)".
    ///
    /// It is the intersection of the min and max cardinality restrictions, or a single
    /// exact cardinality when both bounds agree. Fails when `min > max`, which covers
    /// a non-zero minimum paired with a zero maximum.
    pub fn object_cardinality_range(
        min: u32,
        max: u32,
        property: impl Into<ObjectPropertyExpression>,
        filler: Option<ClassExpression>,
    ) -> OwlResult<Self> {
        if min > max {
            return Err(ValidationError::invalid_cardinality(format!(
                "minimum cardinality {min} is greater than maximum cardinality {max}"
            ))
            .into());
        }
        let property = property.into();
        let filler = filler.map(Box::new);
        if min == max {
            return Ok(Self::ObjectExactCardinality {
                cardinality: min,
                property,
                filler,
            });
        }
        Ok(Self::ObjectIntersectionOf(vec![
            Self::ObjectMinCardinality {
                cardinality: min,
                property: property.clone(),
                filler: filler.clone(),
            },
            Self::ObjectMaxCardinality {
                cardinality: max,
                property,
                filler,
            },
        ]))
    }

    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    #[inline]
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// The IRI identifying this expression, only defined for named classes.
    #[inline]
    pub fn iri(&self) -> Option<&NamedNode> {
        self.as_class().map(OwlClass::iri)
    }

    /// Boolean connectives and enumerations.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::ObjectIntersectionOf(_)
                | Self::ObjectUnionOf(_)
                | Self::ObjectComplementOf(_)
                | Self::ObjectOneOf(_)
        )
    }

    pub fn is_object_restriction(&self) -> bool {
        matches!(
            self,
            Self::ObjectSomeValuesFrom { .. }
                | Self::ObjectAllValuesFrom { .. }
                | Self::ObjectHasValue { .. }
                | Self::ObjectHasSelf(_)
                | Self::ObjectMinCardinality { .. }
                | Self::ObjectMaxCardinality { .. }
                | Self::ObjectExactCardinality { .. }
        )
    }

    pub fn is_data_restriction(&self) -> bool {
        matches!(
            self,
            Self::DataSomeValuesFrom { .. }
                | Self::DataAllValuesFrom { .. }
                | Self::DataHasValue { .. }
                | Self::DataMinCardinality { .. }
                | Self::DataMaxCardinality { .. }
                | Self::DataExactCardinality { .. }
        )
    }

    pub(crate) fn collect_iris<'a>(&'a self, iris: &mut Vec<&'a NamedNode>) {
        match self {
            Self::Class(c) => iris.push(c.iri()),
            Self::ObjectIntersectionOf(members) | Self::ObjectUnionOf(members) => {
                for member in members {
                    member.collect_iris(iris);
                }
            }
            Self::ObjectComplementOf(inner) => inner.collect_iris(iris),
            Self::ObjectOneOf(individuals) => {
                iris.extend(individuals.iter().filter_map(Individual::iri))
            }
            Self::ObjectSomeValuesFrom { property, filler }
            | Self::ObjectAllValuesFrom { property, filler } => {
                iris.push(property.base_property().iri());
                filler.collect_iris(iris);
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => {
                iris.push(property.base_property().iri());
                iris.extend(individual.iri());
            }
            Self::ObjectHasSelf(property) => iris.push(property.base_property().iri()),
            Self::ObjectMinCardinality {
                property, filler, ..
            }
            | Self::ObjectMaxCardinality {
                property, filler, ..
            }
            | Self::ObjectExactCardinality {
                property, filler, ..
            } => {
                iris.push(property.base_property().iri());
                if let Some(filler) = filler {
                    filler.collect_iris(iris);
                }
            }
            Self::DataSomeValuesFrom { property, filler }
            | Self::DataAllValuesFrom { property, filler } => {
                iris.push(property.iri());
                filler.collect_iris(iris);
            }
            Self::DataHasValue { property, .. } => iris.push(property.iri()),
            Self::DataMinCardinality {
                property, filler, ..
            }
            | Self::DataMaxCardinality {
                property, filler, ..
            }
            | Self::DataExactCardinality {
                property, filler, ..
            } => {
                iris.push(property.iri());
                if let Some(filler) = filler {
                    filler.collect_iris(iris);
                }
            }
        }
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(c: OwlClass) -> Self {
        Self::Class(c)
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(c) => c.fmt(f),
            Self::ObjectIntersectionOf(members) => write_list(f, "ObjectIntersectionOf", members),
            Self::ObjectUnionOf(members) => write_list(f, "ObjectUnionOf", members),
            Self::ObjectComplementOf(inner) => write!(f, "ObjectComplementOf({inner})"),
            Self::ObjectOneOf(individuals) => write_list(f, "ObjectOneOf", individuals),
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => write!(f, "ObjectHasValue({property} {individual})"),
            Self::ObjectHasSelf(property) => write!(f, "ObjectHasSelf({property})"),
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectMinCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectMaxCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
            Self::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectExactCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
            Self::DataSomeValuesFrom { property, filler } => {
                write!(f, "DataSomeValuesFrom({property} {filler})")
            }
            Self::DataAllValuesFrom { property, filler } => {
                write!(f, "DataAllValuesFrom({property} {filler})")
            }
            Self::DataHasValue { property, value } => write!(f, "DataHasValue({property} {value})"),
            Self::DataMinCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "DataMinCardinality",
                *cardinality,
                property,
                filler.as_ref(),
            ),
            Self::DataMaxCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "DataMaxCardinality",
                *cardinality,
                property,
                filler.as_ref(),
            ),
            Self::DataExactCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "DataExactCardinality",
                *cardinality,
                property,
                filler.as_ref(),
            ),
        }
    }
}

/// An OWL 2 object property expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectPropertyExpression {
    ObjectProperty(ObjectProperty),
    /// `ObjectInverseOf(P)`.
    ObjectInverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    #[inline]
    pub fn inverse_of(property: impl Into<ObjectProperty>) -> Self {
        Self::ObjectInverseOf(property.into())
    }

    /// The expression denoting the inverse relation.
    ///
    /// `ObjectInverseOf(ObjectInverseOf(P))` is `P`, so this never nests inverses.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            Self::ObjectProperty(p) => Self::ObjectInverseOf(p.clone()),
            Self::ObjectInverseOf(p) => Self::ObjectProperty(p.clone()),
        }
    }

    #[inline]
    pub fn is_inverse(&self) -> bool {
        matches!(self, Self::ObjectInverseOf(_))
    }

    /// The named property, ignoring the inverse wrapper if any.
    #[inline]
    pub fn base_property(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(p) | Self::ObjectInverseOf(p) => p,
        }
    }

    #[inline]
    pub fn as_property(&self) -> Option<&ObjectProperty> {
        match self {
            Self::ObjectProperty(p) => Some(p),
            Self::ObjectInverseOf(_) => None,
        }
    }

    /// Only defined for named properties: `ObjectInverseOf(P)` has no IRI of its own.
    #[inline]
    pub fn iri(&self) -> Option<&NamedNode> {
        self.as_property().map(ObjectProperty::iri)
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(p: ObjectProperty) -> Self {
        Self::ObjectProperty(p)
    }
}

impl fmt::Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectProperty(p) => p.fmt(f),
            Self::ObjectInverseOf(p) => write!(f, "ObjectInverseOf({p})"),
        }
    }
}

/// An OWL 2 data range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataRange {
    /// A named datatype such as `xsd:string`.
    Datatype(NamedNode),
    DataIntersectionOf(Vec<DataRange>),
    DataUnionOf(Vec<DataRange>),
    DataComplementOf(Box<DataRange>),
    DataOneOf(Vec<Literal>),
    DatatypeRestriction {
        datatype: NamedNode,
        facets: Vec<(NamedNode, Literal)>,
    },
}

impl DataRange {
    pub fn datatype(dt: impl Into<NamedNode>) -> Self {
        Self::Datatype(dt.into())
    }

    pub fn iri(&self) -> Option<&NamedNode> {
        match self {
            Self::Datatype(dt) => Some(dt),
            _ => None,
        }
    }

    fn collect_iris<'a>(&'a self, iris: &mut Vec<&'a NamedNode>) {
        match self {
            Self::Datatype(dt) => iris.push(dt),
            Self::DataIntersectionOf(members) | Self::DataUnionOf(members) => {
                for member in members {
                    member.collect_iris(iris);
                }
            }
            Self::DataComplementOf(inner) => inner.collect_iris(iris),
            Self::DataOneOf(_) => {}
            Self::DatatypeRestriction { datatype, facets } => {
                iris.push(datatype);
                iris.extend(facets.iter().map(|(facet, _)| facet));
            }
        }
    }
}

impl From<NamedNode> for DataRange {
    fn from(node: NamedNode) -> Self {
        Self::Datatype(node)
    }
}

impl fmt::Display for DataRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Datatype(dt) => dt.fmt(f),
            Self::DataIntersectionOf(members) => write_list(f, "DataIntersectionOf", members),
            Self::DataUnionOf(members) => write_list(f, "DataUnionOf", members),
            Self::DataComplementOf(inner) => write!(f, "DataComplementOf({inner})"),
            Self::DataOneOf(values) => write_list(f, "DataOneOf", values),
            Self::DatatypeRestriction { datatype, facets } => {
                write!(f, "DatatypeRestriction({datatype}")?;
                for (facet, value) in facets {
                    write!(f, " {facet} {value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

pub(crate) fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    items: &[T],
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        item.fmt(f)?;
    }
    f.write_str(")")
}

fn write_cardinality<P: fmt::Display, F: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    cardinality: u32,
    property: &P,
    filler: Option<&F>,
) -> fmt::Result {
    write!(f, "{name}({cardinality} {property}")?;
    if let Some(filler) = filler {
        write!(f, " {filler}")?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knows() -> ObjectProperty {
        ObjectProperty::new(NamedNode::new_unchecked("http://example.org/knows"))
    }

    #[test]
    fn test_iri_of_expressions() {
        let person = OwlClass::new(NamedNode::new_unchecked("http://example.org/Person"));
        let named = ClassExpression::class(person.clone());
        assert_eq!(named.iri(), Some(person.iri()));

        let restriction = ClassExpression::some_values_from(knows(), named.clone());
        assert_eq!(restriction.iri(), None);
        assert!(restriction.is_object_restriction());
        assert!(!restriction.is_composite());
        assert!(ClassExpression::complement(named).is_composite());

        let inverse = ObjectPropertyExpression::inverse_of(knows());
        assert_eq!(inverse.iri(), None);
        assert_eq!(inverse.base_property(), &knows());
        assert_eq!(inverse.inverse(), ObjectPropertyExpression::from(knows()));
    }

    #[test]
    fn test_cardinality_range() {
        assert!(ClassExpression::object_cardinality_range(1, 0, knows(), None).is_err());
        assert!(matches!(
            ClassExpression::object_cardinality_range(2, 2, knows(), None).unwrap(),
            ClassExpression::ObjectExactCardinality { cardinality: 2, .. }
        ));
        let range = ClassExpression::object_cardinality_range(0, 3, knows(), None).unwrap();
        assert!(matches!(range, ClassExpression::ObjectIntersectionOf(ref m) if m.len() == 2));
    }

    #[test]
    fn test_display() {
        let expr = ClassExpression::has_self(ObjectPropertyExpression::inverse_of(knows()));
        assert_eq!(
            expr.to_string(),
            "ObjectHasSelf(ObjectInverseOf(<http://example.org/knows>))"
        );
    }
}
