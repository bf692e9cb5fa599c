//! Descriptor-driven JSON encoder.

use crate::error::{EncodeError, Result};
use crate::summary::SummaryMode;
use ferrite_models::{Element, FieldValue, Node, Resource};
use serde_json::{Map, Number, Value};

pub(crate) struct Encoder {
    mode: SummaryMode,
}

impl Encoder {
    pub(crate) fn new(mode: SummaryMode) -> Self {
        Self { mode }
    }

    /// `resourceType` first, then fields in descriptor order.
    pub(crate) fn resource<R: Resource + ?Sized>(&self, resource: &R) -> Result<Map<String, Value>> {
        let mut object = Map::new();
        object.insert(
            "resourceType".to_string(),
            Value::String(resource.resource_type().to_string()),
        );
        self.fields(resource.as_element(), &mut object, true)?;
        Ok(object)
    }

    fn element(&self, element: &dyn Element) -> Result<Map<String, Value>> {
        let mut object = Map::new();
        self.fields(element, &mut object, false)?;
        Ok(object)
    }

    fn fields(
        &self,
        element: &dyn Element,
        object: &mut Map<String, Value>,
        top_level: bool,
    ) -> Result<()> {
        let descriptor = element.descriptor()?;

        for (field, value) in descriptor.fields.iter().zip(element.fields()) {
            if !self.mode.includes(field, top_level) {
                continue;
            }
            match value {
                FieldValue::Single(None) => {}
                FieldValue::Single(Some(Node::Choice(choice))) => {
                    let key = field.wire_name(Some(choice.suffix()));
                    let value = self.node(choice.value())?;
                    insert(object, key, value)?;
                }
                FieldValue::Single(Some(node)) => {
                    let value = self.node(node)?;
                    insert(object, field.json_name.to_string(), value)?;
                }
                FieldValue::Many(nodes) if nodes.is_empty() => {}
                FieldValue::Many(nodes) => {
                    let items = nodes
                        .into_iter()
                        .map(|node| self.node(node))
                        .collect::<Result<Vec<_>>>()?;
                    insert(object, field.json_name.to_string(), Value::Array(items))?;
                }
            }
        }
        Ok(())
    }

    fn node(&self, node: Node<'_>) -> Result<Value> {
        Ok(match node {
            Node::Boolean(b) => Value::Bool(b),
            Node::Integer(i) => Value::Number(i.into()),
            // Emitted from the decimal's text so trailing zeros survive.
            Node::Decimal(d) => Value::Number(serde_json::from_str::<Number>(&d.to_string())?),
            Node::String(s) => Value::String(s.to_string()),
            Node::Date(d) => Value::String(d.as_str().to_string()),
            Node::DateTime(d) => Value::String(d.as_str().to_string()),
            Node::Instant(i) => Value::String(i.as_str().to_string()),
            Node::Time(t) => Value::String(t.as_str().to_string()),
            Node::Element(element) => Value::Object(self.element(element)?),
            Node::Resource(resource) => Value::Object(self.resource(resource)?),
            Node::Choice(choice) => self.node(choice.value())?,
        })
    }
}

fn insert(object: &mut Map<String, Value>, key: String, value: Value) -> Result<()> {
    if object.contains_key(&key) {
        return Err(EncodeError::DuplicateProperty(key));
    }
    object.insert(key, value);
    Ok(())
}
