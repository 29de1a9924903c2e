use crate::axiom::{Axiom, ObjectPropertyAssertion};
use crate::ontology::Ontology;
use crate::reasoner::rules::RuleName;
use rustc_hash::FxHashSet;
use std::fmt;

/// An axiom derived by an entailment rule.
///
/// Once merged into an [`Ontology`] the axiom is flagged as an inference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Inference {
    axiom: Axiom,
    rule: RuleName,
}

impl Inference {
    pub fn new(axiom: impl Into<Axiom>, rule: RuleName) -> Self {
        Self {
            axiom: axiom.into(),
            rule,
        }
    }

    #[inline]
    pub fn axiom(&self) -> &Axiom {
        &self.axiom
    }

    /// The rule that produced this inference.
    #[inline]
    pub fn rule(&self) -> RuleName {
        self.rule
    }

    #[inline]
    pub fn into_axiom(self) -> Axiom {
        self.axiom
    }
}

impl fmt::Display for Inference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.axiom, self.rule.name())
    }
}

/// Accumulates the inferences of one rule execution.
///
/// An axiom is dropped when it is already in the ontology or was already collected.
pub(crate) struct InferenceCollector<'a> {
    ontology: &'a Ontology,
    rule: RuleName,
    seen: FxHashSet<Axiom>,
    inferences: Vec<Inference>,
}

impl<'a> InferenceCollector<'a> {
    pub fn new(ontology: &'a Ontology, rule: RuleName) -> Self {
        Self {
            ontology,
            rule,
            seen: FxHashSet::default(),
            inferences: Vec::new(),
        }
    }

    pub fn is_known(&self, axiom: &Axiom) -> bool {
        self.ontology.contains(axiom) || self.seen.contains(axiom)
    }

    /// Returns `true` if the axiom is new.
    pub fn infer(&mut self, axiom: impl Into<Axiom>) -> bool {
        let axiom = axiom.into();
        if self.ontology.contains(&axiom) || !self.seen.insert(axiom.clone()) {
            return false;
        }
        self.inferences.push(Inference::new(axiom, self.rule));
        true
    }

    /// Infers `axiom` unless it or one of `alternatives`, stating the same fact with
    /// another operand order, is already known.
    pub fn infer_unless_known(
        &mut self,
        axiom: impl Into<Axiom>,
        alternatives: impl IntoIterator<Item = Axiom>,
    ) -> bool {
        if alternatives.into_iter().any(|a| self.is_known(&a)) {
            return false;
        }
        self.infer(axiom)
    }

    /// Infers an object property assertion in its calibrated form.
    ///
    /// `P(a, b)` is considered known when `ObjectInverseOf(P)(b, a)` is.
    pub fn infer_object_assertion(&mut self, assertion: ObjectPropertyAssertion) -> bool {
        let assertion = assertion.calibrate();
        let inverse = ObjectPropertyAssertion {
            property: assertion.property.inverse(),
            source: assertion.target.clone(),
            target: assertion.source.clone(),
        };
        self.infer_unless_known(assertion, [Axiom::from(inverse)])
    }

    pub fn finish(self) -> Vec<Inference> {
        self.inferences
    }
}
