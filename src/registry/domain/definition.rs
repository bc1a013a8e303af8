//! Workflow definitions and checker associations produced by a build.

use super::{ClassificationTag, ComponentId, TagAttributes};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Attribute naming the workflow to run once a checker approves.
const NEXT_WORKFLOW_ATTRIBUTE: &str = "nextWorkFlowName";

/// Attribute holding the schedule on which a checker re-evaluates.
const CRON_EXPRESSION_ATTRIBUTE: &str = "cronExpression";

/// Classified workflow together with the tasks it is composed of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    name: ComponentId,
    workflow_type: ClassificationTag,
    tasks: BTreeSet<ComponentId>,
}

impl WorkflowDefinition {
    /// Creates a workflow definition.
    #[must_use]
    pub const fn new(
        name: ComponentId,
        workflow_type: ClassificationTag,
        tasks: BTreeSet<ComponentId>,
    ) -> Self {
        Self {
            name,
            workflow_type,
            tasks,
        }
    }

    /// Returns the workflow name.
    #[must_use]
    pub const fn name(&self) -> &ComponentId {
        &self.name
    }

    /// Returns the resolved workflow type.
    #[must_use]
    pub const fn workflow_type(&self) -> ClassificationTag {
        self.workflow_type
    }

    /// Returns the task identifiers in identifier order.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeSet<ComponentId> {
        &self.tasks
    }

    /// Returns whether the workflow includes the task.
    #[must_use]
    pub fn contains_task(&self, task: &str) -> bool {
        self.tasks.contains(task)
    }
}

/// Links a checker task to the workflow whose outcome it validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerAssociation {
    task_id: ComponentId,
    owner_workflow: ComponentId,
    attributes: TagAttributes,
}

impl CheckerAssociation {
    /// Creates a checker association.
    #[must_use]
    pub const fn new(
        task_id: ComponentId,
        owner_workflow: ComponentId,
        attributes: TagAttributes,
    ) -> Self {
        Self {
            task_id,
            owner_workflow,
            attributes,
        }
    }

    /// Returns the checker task identifier.
    #[must_use]
    pub const fn task_id(&self) -> &ComponentId {
        &self.task_id
    }

    /// Returns the workflow the checker validates.
    #[must_use]
    pub const fn owner_workflow(&self) -> &ComponentId {
        &self.owner_workflow
    }

    /// Returns the raw checker attributes.
    #[must_use]
    pub const fn attributes(&self) -> &TagAttributes {
        &self.attributes
    }

    /// Returns the typed view over well-known checker attributes.
    #[must_use]
    pub const fn settings(&self) -> CheckerSettings<'_> {
        CheckerSettings {
            attributes: &self.attributes,
        }
    }
}

/// Typed read-only view over checker attributes.
///
/// Only string-valued attributes are surfaced; anything else stays available
/// through [`CheckerAssociation::attributes`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use std::collections::BTreeMap;
/// use trellis::registry::domain::{CheckerAssociation, ComponentId};
///
/// let attributes = BTreeMap::from([
///     ("nextWorkFlowName".to_owned(), json!("provisioning")),
///     ("cronExpression".to_owned(), json!("0 0/5 * * * ?")),
/// ]);
/// let association = CheckerAssociation::new(
///     ComponentId::new("approvalChecker").expect("valid id"),
///     ComponentId::new("onboarding").expect("valid id"),
///     attributes,
/// );
///
/// let settings = association.settings();
/// assert_eq!(settings.next_workflow_name(), Some("provisioning"));
/// assert_eq!(settings.cron_expression(), Some("0 0/5 * * * ?"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerSettings<'a> {
    attributes: &'a TagAttributes,
}

impl<'a> CheckerSettings<'a> {
    /// Returns the workflow to continue with after approval, if declared.
    #[must_use]
    pub fn next_workflow_name(&self) -> Option<&'a str> {
        self.string_attribute(NEXT_WORKFLOW_ATTRIBUTE)
    }

    /// Returns the re-evaluation schedule, if declared.
    #[must_use]
    pub fn cron_expression(&self) -> Option<&'a str> {
        self.string_attribute(CRON_EXPRESSION_ATTRIBUTE)
    }

    fn string_attribute(self, key: &str) -> Option<&'a str> {
        self.attributes
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}
