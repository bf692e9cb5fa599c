use crate::outcome::{ValidationError, ValidationErrors};
use crate::steps::references::validate_reference_with;
use crate::steps::structure::{validate_cardinality, validate_enum, validate_required};
use crate::{ConfigError, Error, ValidationPlan, ValidatorConfig};
use ferrite_models::{
    Element, FieldDescriptor, FieldValue, MetaError, Node, Resource, TagError, TypeDescriptor,
};

/// Reusable validator - owns the compiled plan
#[derive(Debug, Clone, Default)]
pub struct Validator {
    plan: ValidationPlan,
}

impl Validator {
    /// Validator with the default plan.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plan(plan: ValidationPlan) -> Self {
        Self { plan }
    }

    pub fn from_config(config: &ValidatorConfig) -> Result<Self, ConfigError> {
        let plan = config.compile()?;
        Ok(Self::with_plan(plan))
    }

    /// `Ok(())` when the resource satisfies every constraint.
    pub fn validate<R: Resource + ?Sized>(&self, resource: &R) -> Result<(), Error> {
        let errors = self.collect(resource)?;
        if errors.has_errors() {
            Err(Error::Invalid(errors))
        } else {
            Ok(())
        }
    }

    /// Every violation, in traversal order. Fails only on malformed metadata.
    pub fn collect<R: Resource + ?Sized>(
        &self,
        resource: &R,
    ) -> Result<ValidationErrors, MetaError> {
        ValidationRun::new(&self.plan).execute(resource.resource_type(), resource.as_element())
    }

    pub fn validate_batch<R: Resource>(&self, resources: &[R]) -> Vec<Result<(), Error>> {
        resources.iter().map(|r| self.validate(r)).collect()
    }

    pub fn plan(&self) -> &ValidationPlan {
        &self.plan
    }
}

/// Short-lived validation execution
struct ValidationRun<'a> {
    plan: &'a ValidationPlan,
    errors: ValidationErrors,
}

impl<'a> ValidationRun<'a> {
    fn new(plan: &'a ValidationPlan) -> Self {
        Self {
            plan,
            errors: ValidationErrors::new(),
        }
    }

    fn execute(
        mut self,
        resource_type: &'static str,
        root: &dyn Element,
    ) -> Result<ValidationErrors, MetaError> {
        self.visit_element(root, resource_type)?;

        tracing::trace!(
            resource_type,
            errors = self.errors.len(),
            "validation run finished"
        );
        Ok(self.errors)
    }

    fn visit_element(&mut self, element: &dyn Element, path: &str) -> Result<(), MetaError> {
        let descriptor = element.descriptor()?;
        if self.plan.metadata.strict {
            reject_unknown_directives(&descriptor)?;
        }

        let values = element.fields();

        if descriptor.name == "Reference" {
            self.check_reference(&descriptor, &values, path);
        }

        for (field, value) in descriptor.fields.iter().zip(&values) {
            if self.is_full() {
                break;
            }
            self.visit_field(field, value, path)?;
        }
        Ok(())
    }

    fn visit_field(
        &mut self,
        field: &FieldDescriptor,
        value: &FieldValue<'_>,
        parent: &str,
    ) -> Result<(), MetaError> {
        let path = field_path(parent, field, value);

        let mut missing = false;
        if field.is_required() {
            if let Some(err) = validate_required(&path, value) {
                missing = true;
                self.record(err);
            }
        }

        let cardinality = field.cardinality();
        let min = if missing { 0 } else { cardinality.min };
        if let Some(err) = validate_cardinality(&path, value.count(), min, cardinality.max) {
            self.record(err);
        }

        match value {
            FieldValue::Single(Some(node)) => {
                self.check_enum(field, node, &path);
                self.descend(node, &path)?;
            }
            FieldValue::Single(None) => {}
            FieldValue::Many(nodes) => {
                for (i, node) in nodes.iter().enumerate() {
                    if self.is_full() {
                        break;
                    }
                    let item = format!("{path}[{i}]");
                    self.check_enum(field, node, &item);
                    self.descend(node, &item)?;
                }
            }
        }
        Ok(())
    }

    fn check_enum(&mut self, field: &FieldDescriptor, node: &Node<'_>, path: &str) {
        if field.meta.enumeration.is_empty() {
            return;
        }
        if let Some(text) = node.as_text() {
            if let Some(err) = validate_enum(path, &text, &field.meta.enumeration) {
                self.record(err);
            }
        }
    }

    fn check_reference(
        &mut self,
        descriptor: &TypeDescriptor,
        values: &[FieldValue<'_>],
        path: &str,
    ) {
        let plan: &'a ValidationPlan = self.plan;
        let Some(plan) = plan.references.as_ref() else {
            return;
        };
        let reference = descriptor
            .fields
            .iter()
            .position(|f| f.json_name == "reference")
            .and_then(|i| values.get(i))
            .and_then(|v| v.nodes().first())
            .and_then(Node::as_str);

        if let Some(reference) = reference {
            let field = format!("{path}.reference");
            if let Some(err) = validate_reference_with(&field, reference, plan) {
                self.record(err);
            }
        }
    }

    fn descend(&mut self, node: &Node<'_>, path: &str) -> Result<(), MetaError> {
        match node {
            Node::Element(element) => self.visit_element(*element, path),
            Node::Resource(resource) => self.visit_element(resource.as_element(), path),
            Node::Choice(choice) => self.descend(&choice.value(), path),
            _ => Ok(()),
        }
    }

    fn record(&mut self, err: ValidationError) {
        if !self.is_full() {
            self.errors.push(err);
        }
    }

    fn is_full(&self) -> bool {
        self.plan
            .max_errors
            .is_some_and(|max| self.errors.len() >= max)
    }
}

/// Dotted path of a field; a set choice is named by its wire property.
fn field_path(parent: &str, field: &FieldDescriptor, value: &FieldValue<'_>) -> String {
    let suffix = match value {
        FieldValue::Single(Some(Node::Choice(choice))) => Some(choice.suffix()),
        _ => None,
    };
    format!("{parent}.{}", field.wire_name(suffix))
}

fn reject_unknown_directives(descriptor: &TypeDescriptor) -> Result<(), MetaError> {
    match descriptor.unknown_directives().next() {
        Some((field, directive)) => Err(MetaError::new(
            descriptor.name,
            field.json_name,
            TagError::UnknownDirective(directive.to_string()),
        )),
        None => Ok(()),
    }
}
