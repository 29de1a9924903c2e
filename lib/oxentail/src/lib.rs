#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod axiom;
mod entity;
mod error;
mod expression;
mod ontology;
pub mod reasoner;

pub use crate::axiom::{
    Assertion, Axiom, ClassAssertion, ClassAxiom, DataPropertyAssertion, DataPropertyAxiom,
    Declaration, HasKey, ObjectPropertyAssertion, ObjectPropertyAxiom,
};
pub use crate::entity::{DataProperty, Individual, ObjectProperty, OwlClass};
pub use crate::error::{
    OwlError, OwlResult, OwlWarning, ReasoningError, ReasoningErrorKind, ValidationError,
    ValidationErrorKind, WarningKind,
};
pub use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
pub use crate::ontology::{AxiomRecord, Ontology};
pub use crate::reasoner::{
    Inference, Reasoner, ReasonerConfig, ReasonerContext, ReasoningReport, RuleName,
};
