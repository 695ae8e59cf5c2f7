//! Step-to-locator conversion: UID synthesis, metadata, container chaining

use crate::classifier::WidgetClassifier;
use crate::types::{Condition, Locator, PathStep};
use serde_json::{Map, Value};

/// Collapse a raw identifier into canonical UID form: non-alphanumeric
/// characters become underscores, runs collapse to a single underscore,
/// and boundary underscores are trimmed. Idempotent.
pub fn canonicalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

/// Converts parsed steps into canonical locator descriptors
///
/// Total: classification and UID synthesis cannot fail. Each call walks the
/// step list once, carrying the current container UID so successive locators
/// chain in emission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocatorConverter {
    classifier: WidgetClassifier,
}

impl LocatorConverter {
    /// Create a new converter with the default classifier
    pub fn new() -> Self {
        Self {
            classifier: WidgetClassifier::new(),
        }
    }

    /// Produce one locator per step, in step order
    pub fn convert(&self, steps: &[PathStep]) -> Vec<Locator> {
        let mut out = Vec::with_capacity(steps.len());
        let mut container = String::new();

        for step in steps {
            let archetype = self.classifier.classify(step.node_test.text());
            let uid = generate_uid(&container, step, archetype);

            let mut metadata = Map::new();
            metadata.insert("archetype".to_string(), Value::from(archetype));
            if let Some(predicate) = &step.predicate {
                for condition in &predicate.conditions {
                    match condition {
                        Condition::Attribute { name, value, .. } => {
                            metadata.insert(name.clone(), Value::from(value.clone()));
                        }
                        Condition::Position { index } => {
                            // First occurrence is implied and not recorded.
                            if *index > 1 {
                                metadata.insert("occurrence".to_string(), Value::from(*index));
                            }
                        }
                    }
                }
            }
            metadata.insert("visible".to_string(), Value::from(1));

            let container_uid = if container.is_empty() {
                None
            } else {
                Some(container.clone())
            };

            container = uid.clone();
            out.push(Locator {
                uid,
                metadata,
                container_uid,
            });
        }

        out
    }
}

/// UID is a pure function of the preceding UID, the node test ("any" for
/// the wildcard), the archetype, and every attribute condition's name and
/// value, joined with underscores and canonicalized.
fn generate_uid(container: &str, step: &PathStep, archetype: &str) -> String {
    let mut raw = String::new();
    if !container.is_empty() {
        raw.push_str(container);
        raw.push('_');
    }
    raw.push_str(step.node_test.uid_text());
    raw.push('_');
    raw.push_str(archetype);

    if let Some(predicate) = &step.predicate {
        for condition in &predicate.conditions {
            if let Condition::Attribute { name, value, .. } = condition {
                raw.push('_');
                raw.push_str(name);
                raw.push('_');
                raw.push_str(value);
            }
        }
    }

    canonicalize(&raw)
}
