use crate::animation::timeline::TargetProperty;

/// Receiver of property values computed by the controller.
///
/// Ordering contract: within one tick, scroll bindings are applied in registration order and
/// auto-play entrances after them, so a playing entrance overrides scroll state for the same
/// property.
pub trait PropertySink {
    /// Apply `value` to `target`.
    fn apply(&mut self, target: &TargetProperty, value: f64);
}

/// One value received by an [`InMemorySink`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AppliedValue {
    /// Target property.
    pub target: TargetProperty,
    /// Applied value.
    pub value: f64,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    applied: Vec<AppliedValue>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every value received so far, in order.
    pub fn applied(&self) -> &[AppliedValue] {
        &self.applied
    }

    /// Take the received values, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<AppliedValue> {
        std::mem::take(&mut self.applied)
    }

    /// Most recent value applied to `target`.
    pub fn last(&self, target: &TargetProperty) -> Option<f64> {
        self.applied
            .iter()
            .rev()
            .find(|a| &a.target == target)
            .map(|a| a.value)
    }
}

impl PropertySink for InMemorySink {
    fn apply(&mut self, target: &TargetProperty, value: f64) {
        self.applied.push(AppliedValue {
            target: target.clone(),
            value,
        });
    }
}
