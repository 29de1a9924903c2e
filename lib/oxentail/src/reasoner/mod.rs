//! Forward-chaining entailment.
//!
//! A reasoning pass runs every configured [`RuleName`] against the same snapshot of
//! the ontology, then merges the deduplicated inferences. Passes repeat until one of
//! them adds nothing. Rules only add axioms, so this always terminates.

mod calibration;
mod context;
pub(crate) mod graph;
mod inference;
mod rules;

pub use calibration::{calibrate, calibrate_object_assertions};
pub use context::ReasonerContext;
pub use inference::Inference;
pub use rules::RuleName;

use crate::axiom::Axiom;
use crate::error::{OwlResult, ReasoningError};
use crate::ontology::Ontology;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for the [`Reasoner`].
#[derive(Debug, Clone)]
pub struct ReasonerConfig {
    /// Rules to run at each pass.
    pub rules: Vec<RuleName>,
    /// Maximum number of passes before giving up on reaching a fixpoint.
    pub max_iterations: usize,
    /// Maximum time allowed for reasoning (None = unlimited).
    pub timeout: Option<Duration>,
    /// Maximum number of inferred axioms (None = unlimited).
    pub max_inferences: Option<usize>,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            rules: RuleName::all().to_vec(),
            max_iterations: 100,
            timeout: None,
            max_inferences: None,
        }
    }
}

impl ReasonerConfig {
    /// Only runs the given rules.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = RuleName>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_max_inferences(mut self, max_inferences: usize) -> Self {
        self.max_inferences = Some(max_inferences);
        self
    }
}

/// Outcome of [`Reasoner::reason`].
#[derive(Debug, Clone, Default)]
pub struct ReasoningReport {
    /// New inferences, in the order they were merged.
    pub inferences: Vec<Inference>,
    /// Number of passes run, the last one adding nothing.
    pub passes: usize,
}

impl ReasoningReport {
    pub fn inferred_axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.inferences.iter().map(Inference::axiom)
    }

    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.inferred_axioms().any(|a| a == axiom)
    }
}

/// Runs the entailment rules to fixpoint.
#[derive(Debug, Clone, Default)]
pub struct Reasoner {
    config: ReasonerConfig,
}

impl Reasoner {
    pub fn new(config: ReasonerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }

    /// Computes the inferences of `ontology` without modifying it.
    pub fn reason(&self, ontology: &Ontology) -> OwlResult<ReasoningReport> {
        let start = Instant::now();
        let mut working = ontology.clone();
        let mut report = ReasoningReport::default();
        for pass in 1..=self.config.max_iterations {
            self.check_timeout(start)?;
            let context = ReasonerContext::new(&working);
            let inferences = self.run_rules(&working, &context);
            self.check_timeout(start)?;

            let mut added = 0;
            for inference in inferences {
                if working.add_inference(inference.clone()) {
                    report.inferences.push(inference);
                    added += 1;
                }
            }
            report.passes = pass;
            if let Some(limit) = self.config.max_inferences {
                if report.inferences.len() > limit {
                    return Err(ReasoningError::max_inferences_exceeded(limit).into());
                }
            }
            tracing::info!(pass, added, "Reasoning pass completed");
            if added == 0 {
                tracing::info!(
                    passes = pass,
                    inferences = report.inferences.len(),
                    elapsed_ms = start.elapsed().as_millis(),
                    "Reasoning completed"
                );
                return Ok(report);
            }
        }
        Err(ReasoningError::max_iterations_exceeded(self.config.max_iterations).into())
    }

    /// Reasons over `ontology` and merges the inferences into it.
    pub fn materialize(&self, ontology: &mut Ontology) -> OwlResult<ReasoningReport> {
        let report = self.reason(ontology)?;
        ontology.merge_inferences(report.inferences.iter().cloned());
        Ok(report)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_rules(&self, ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
        self.config
            .rules
            .iter()
            .flat_map(|rule| run_rule(*rule, ontology, context))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_rules(&self, ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
        // Merge order stays the configured rule order.
        self.config
            .rules
            .par_iter()
            .map(|rule| run_rule(*rule, ontology, context))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    fn check_timeout(&self, start: Instant) -> OwlResult<()> {
        if let Some(timeout) = self.config.timeout {
            if start.elapsed() >= timeout {
                return Err(ReasoningError::timeout(timeout).into());
            }
        }
        Ok(())
    }
}

fn run_rule(rule: RuleName, ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let inferences = rule.execute(ontology, Some(context));
    tracing::debug!(
        rule = rule.name(),
        inferences = inferences.len(),
        "Rule executed"
    );
    inferences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::OwlClass;
    use crate::error::{OwlError, ReasoningErrorKind};
    use crate::expression::ClassExpression;
    use oxrdf::NamedNode;

    fn class(name: &str) -> ClassExpression {
        ClassExpression::class(OwlClass::new(NamedNode::new_unchecked(format!(
            "http://example.org/{name}"
        ))))
    }

    fn chain(length: usize) -> Ontology {
        let mut ontology = Ontology::new(None);
        for i in 0..length {
            ontology.add_axiom(Axiom::subclass_of(
                class(&format!("C{i}")),
                class(&format!("C{}", i + 1)),
            ));
        }
        ontology
    }

    #[test]
    fn test_reason_reaches_fixpoint() {
        let ontology = chain(3);
        let report = Reasoner::default().reason(&ontology).unwrap();
        assert_eq!(report.passes, 2);
        assert_eq!(report.inferences.len(), 3);
        assert!(report.contains(&Axiom::subclass_of(class("C0"), class("C3"))));
        assert!(
            report
                .inferences
                .iter()
                .all(|i| i.rule() == RuleName::SubClassOf)
        );
        // The input is left untouched.
        assert_eq!(ontology.axiom_count(), 3);
    }

    #[test]
    fn test_materialize_flags_inferences() {
        let mut ontology = chain(2);
        let report = Reasoner::default().materialize(&mut ontology).unwrap();
        assert_eq!(report.inferences.len(), 1);
        assert_eq!(ontology.axiom_count(), 3);
        assert_eq!(
            ontology.inferred_axioms(),
            [Axiom::subclass_of(class("C0"), class("C2"))]
        );
        assert_eq!(
            ontology
                .class_axioms()
                .iter()
                .filter(|a| a.is_inference())
                .count(),
            1
        );
    }

    #[test]
    fn test_limits() {
        let ontology = chain(5);
        let config = ReasonerConfig::default().with_max_iterations(1);
        let result = Reasoner::new(config).reason(&ontology);
        assert!(matches!(
            result,
            Err(OwlError::Reasoning(ref e)) if e.kind() == ReasoningErrorKind::MaxIterationsExceeded
        ));
        let config = ReasonerConfig::default().with_max_inferences(2);
        let result = Reasoner::new(config).reason(&ontology);
        assert!(matches!(
            result,
            Err(OwlError::Reasoning(ref e)) if e.kind() == ReasoningErrorKind::MaxInferencesExceeded
        ));
        let config = ReasonerConfig::default().with_timeout(Duration::ZERO);
        let result = Reasoner::new(config).reason(&ontology);
        assert!(matches!(
            result,
            Err(OwlError::Reasoning(ref e)) if e.kind() == ReasoningErrorKind::Timeout
        ));
    }

    #[test]
    fn test_rule_selection() {
        let ontology = chain(2);
        let config = ReasonerConfig::default().with_rules([RuleName::ClassAssertion]);
        let report = Reasoner::new(config).reason(&ontology).unwrap();
        assert!(report.inferences.is_empty());
        assert_eq!(report.passes, 1);
    }
}
