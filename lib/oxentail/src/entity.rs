//! OWL 2 entities: named classes, properties and individuals.

use oxrdf::{BlankNode, NamedNode, NamedNodeRef, Term};
use std::fmt;

macro_rules! named_entity {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NamedNode);

        impl $name {
            #[inline]
            pub fn new(iri: NamedNode) -> Self {
                Self(iri)
            }

            /// Builds the entity from an IRI string, validating it.
            #[inline]
            pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
                Ok(Self(NamedNode::new(iri)?))
            }

            #[inline]
            pub fn iri(&self) -> &NamedNode {
                &self.0
            }

            #[inline]
            pub fn as_named_node_ref(&self) -> NamedNodeRef<'_> {
                self.0.as_ref()
            }

            #[inline]
            pub fn into_inner(self) -> NamedNode {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<NamedNode> for $name {
            #[inline]
            fn from(node: NamedNode) -> Self {
                Self(node)
            }
        }

        impl From<NamedNodeRef<'_>> for $name {
            #[inline]
            fn from(node: NamedNodeRef<'_>) -> Self {
                Self(node.into_owned())
            }
        }

        impl From<$name> for NamedNode {
            #[inline]
            fn from(entity: $name) -> Self {
                entity.0
            }
        }

        impl From<$name> for Term {
            #[inline]
            fn from(entity: $name) -> Self {
                entity.0.into()
            }
        }
    };
}

named_entity!(
    /// An OWL class (`owl:Class`).
    OwlClass
);

named_entity!(
    /// An OWL object property (`owl:ObjectProperty`), relating individuals to individuals.
    ObjectProperty
);

named_entity!(
    /// An OWL data property (`owl:DatatypeProperty`), relating individuals to literals.
    DataProperty
);

/// An OWL individual, either named by an IRI or anonymous (blank node).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    Named(NamedNode),
    Anonymous(BlankNode),
}

impl Individual {
    /// Builds a named individual from an IRI string, validating it.
    #[inline]
    pub fn named(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self::Named(NamedNode::new(iri)?))
    }

    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }

    /// Returns the IRI of a named individual.
    ///
    /// Anonymous individuals have no IRI and return `None`.
    #[inline]
    pub fn iri(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Anonymous(_) => None,
        }
    }

    #[inline]
    pub fn as_anonymous(&self) -> Option<&BlankNode> {
        match self {
            Self::Named(_) => None,
            Self::Anonymous(b) => Some(b),
        }
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => n.fmt(f),
            Self::Anonymous(b) => b.fmt(f),
        }
    }
}

impl From<NamedNode> for Individual {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::Named(node)
    }
}

impl From<NamedNodeRef<'_>> for Individual {
    #[inline]
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self::Named(node.into_owned())
    }
}

impl From<BlankNode> for Individual {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Individual> for Term {
    #[inline]
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        let iri = NamedNode::new_unchecked("http://example.org/Person");
        let class = OwlClass::new(iri.clone());
        assert_eq!(class.iri(), &iri);
        assert_eq!(class.to_string(), iri.to_string());
        assert_eq!(NamedNode::from(class), iri);

        let prop = ObjectProperty::new_from_iri("http://example.org/knows").unwrap();
        assert_eq!(prop.iri().as_str(), "http://example.org/knows");
        assert!(DataProperty::new_from_iri("not an iri").is_err());
    }

    #[test]
    fn test_individuals() {
        let alice = Individual::named("http://example.org/Alice").unwrap();
        assert!(alice.is_named());
        assert_eq!(
            alice.iri().map(NamedNode::as_str),
            Some("http://example.org/Alice")
        );

        let blank = BlankNode::default();
        let anonymous = Individual::from(blank.clone());
        assert!(anonymous.is_anonymous());
        assert_eq!(anonymous.iri(), None);
        assert_eq!(anonymous.as_anonymous(), Some(&blank));
    }
}
