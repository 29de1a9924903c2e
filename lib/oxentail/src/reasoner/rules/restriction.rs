//! `ObjectHasValue`, `DataHasValue` and `ObjectHasSelf` restrictions.
//!
//! A restriction used as a superclass instantiates the missing property assertion for
//! every instance of the subclass. Used as a subclass, it classifies the individuals
//! that satisfy it.

use super::{RuleName, instances_of, told_subsumptions};
use crate::axiom::{ClassAssertion, DataPropertyAssertion, ObjectPropertyAssertion};
use crate::expression::ClassExpression;
use crate::ontology::Ontology;
use crate::reasoner::calibration::endpoints;
use crate::reasoner::context::ReasonerContext;
use crate::reasoner::inference::{Inference, InferenceCollector};

pub(super) fn has_value(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let mut collector = InferenceCollector::new(ontology, RuleName::HasValue);
    for (sub, sup) in told_subsumptions(ontology) {
        match sup {
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => {
                for instance in instances_of(context, sub) {
                    collector.infer_object_assertion(ObjectPropertyAssertion {
                        property: property.clone(),
                        source: instance.clone(),
                        target: individual.clone(),
                    });
                }
            }
            ClassExpression::DataHasValue { property, value } => {
                for instance in instances_of(context, sub) {
                    collector.infer(DataPropertyAssertion {
                        property: property.clone(),
                        source: instance.clone(),
                        target: value.clone(),
                    });
                }
            }
            _ => {}
        }
        match sub {
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => {
                for assertion in context.object_property_assertions() {
                    if let Some((source, target)) = endpoints(property, assertion) {
                        if target == individual {
                            collector.infer(ClassAssertion {
                                class: sup.clone(),
                                individual: source.clone(),
                            });
                        }
                    }
                }
            }
            ClassExpression::DataHasValue { property, value } => {
                for assertion in context.data_property_assertions() {
                    if &assertion.property == property && &assertion.target == value {
                        collector.infer(ClassAssertion {
                            class: sup.clone(),
                            individual: assertion.source.clone(),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    collector.finish()
}

pub(super) fn has_self(ontology: &Ontology, context: &ReasonerContext) -> Vec<Inference> {
    let mut collector = InferenceCollector::new(ontology, RuleName::HasSelf);
    for (sub, sup) in told_subsumptions(ontology) {
        if let ClassExpression::ObjectHasSelf(property) = sup {
            for instance in instances_of(context, sub) {
                collector.infer_object_assertion(ObjectPropertyAssertion {
                    property: property.clone(),
                    source: instance.clone(),
                    target: instance.clone(),
                });
            }
        }
        if let ClassExpression::ObjectHasSelf(property) = sub {
            for assertion in context.object_property_assertions() {
                if let Some((source, target)) = endpoints(property, assertion) {
                    if source == target {
                        collector.infer(ClassAssertion {
                            class: sup.clone(),
                            individual: source.clone(),
                        });
                    }
                }
            }
        }
    }
    collector.finish()
}
