use crate::axiom::{ClassAssertion, DataPropertyAssertion, ObjectPropertyAssertion};
use crate::ontology::Ontology;
use crate::reasoner::calibration::calibrate_object_assertions;

/// Assertion indices shared by the rules of a reasoning pass.
///
/// It is a snapshot: rules never modify it, and it is rebuilt after each merge.
#[derive(Debug, Clone, Default)]
pub struct ReasonerContext {
    class_assertions: Vec<ClassAssertion>,
    object_property_assertions: Vec<ObjectPropertyAssertion>,
    data_property_assertions: Vec<DataPropertyAssertion>,
}

impl ReasonerContext {
    pub fn new(ontology: &Ontology) -> Self {
        Self {
            class_assertions: ontology.class_assertions().cloned().collect(),
            object_property_assertions: calibrate_object_assertions(ontology),
            data_property_assertions: ontology.data_property_assertions().cloned().collect(),
        }
    }

    pub fn class_assertions(&self) -> &[ClassAssertion] {
        &self.class_assertions
    }

    /// Object property assertions, all calibrated on their named property.
    pub fn object_property_assertions(&self) -> &[ObjectPropertyAssertion] {
        &self.object_property_assertions
    }

    pub fn data_property_assertions(&self) -> &[DataPropertyAssertion] {
        &self.data_property_assertions
    }
}
