//! Normalization of object property assertions on inverse properties.

use crate::axiom::ObjectPropertyAssertion;
use crate::entity::Individual;
use crate::expression::ObjectPropertyExpression;
use crate::ontology::Ontology;

/// Returns the object property assertions of the ontology, each one calibrated.
///
/// `ObjectInverseOf(P)(a, b)` becomes `P(b, a)`; assertions on named properties pass
/// through unchanged. The output has exactly one assertion per declared assertion, in
/// declaration order.
pub fn calibrate_object_assertions(ontology: &Ontology) -> Vec<ObjectPropertyAssertion> {
    calibrate(ontology.object_property_assertions().cloned())
}

/// Calibrates a list of object property assertions. Calibrating twice is a no-op.
pub fn calibrate(
    assertions: impl IntoIterator<Item = ObjectPropertyAssertion>,
) -> Vec<ObjectPropertyAssertion> {
    assertions
        .into_iter()
        .map(ObjectPropertyAssertion::calibrate)
        .collect()
}

/// If the calibrated `assertion` states `property(x, y)`, returns `(x, y)`.
///
/// `property` may be an inverse: `ObjectInverseOf(P)(b, a)` holds for `P(a, b)`.
pub(crate) fn endpoints<'a>(
    property: &ObjectPropertyExpression,
    assertion: &'a ObjectPropertyAssertion,
) -> Option<(&'a Individual, &'a Individual)> {
    if property.base_property() != assertion.property.base_property() {
        return None;
    }
    Some(if property.is_inverse() == assertion.property.is_inverse() {
        (&assertion.source, &assertion.target)
    } else {
        (&assertion.target, &assertion.source)
    })
}
