//! Classification tags and the descriptors components carry them in.

use super::ParseClassificationTagError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Attribute mapping attached to a single classification tag.
pub type TagAttributes = BTreeMap<String, Value>;

/// Closed set of labels that determine a component's role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationTag {
    /// Workflow that assesses a request and recommends follow-up workflows.
    Assessment,
    /// Workflow or task that validates another workflow's outcome.
    Checker,
    /// Workflow that provisions or changes infrastructure.
    Infrastructure,
}

impl ClassificationTag {
    /// Priority order used when classifying workflow components.
    pub const WORKFLOW_PRIORITY: [Self; 3] =
        [Self::Assessment, Self::Checker, Self::Infrastructure];

    /// Priority order used when classifying task components as checkers.
    pub const CHECKER_PRIORITY: [Self; 1] = [Self::Checker];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assessment => "assessment",
            Self::Checker => "checker",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for ClassificationTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ClassificationTag {
    type Error = ParseClassificationTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assessment" => Ok(Self::Assessment),
            "checker" => Ok(Self::Checker),
            "infrastructure" => Ok(Self::Infrastructure),
            _ => Err(ParseClassificationTagError(value.to_owned())),
        }
    }
}

/// Classification metadata declared by a component.
///
/// A descriptor may nominally carry several tags; resolution picks one by
/// priority order, so the descriptor itself never has to be unambiguous.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trellis::registry::domain::{ClassificationDescriptor, ClassificationTag};
///
/// let descriptor = ClassificationDescriptor::new()
///     .with_attribute(ClassificationTag::Checker, "label", json!("manual-approval"));
///
/// assert!(descriptor.contains(ClassificationTag::Checker));
/// assert!(!descriptor.contains(ClassificationTag::Assessment));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationDescriptor {
    tags: BTreeMap<ClassificationTag, TagAttributes>,
}

impl ClassificationDescriptor {
    /// Creates a descriptor with no tags.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tags: BTreeMap::new(),
        }
    }

    /// Creates a descriptor carrying a single tag with no attributes.
    #[must_use]
    pub fn tagged(tag: ClassificationTag) -> Self {
        Self::new().with_tag(tag)
    }

    /// Adds a tag with no attributes, keeping existing attributes if present.
    #[must_use]
    pub fn with_tag(mut self, tag: ClassificationTag) -> Self {
        self.tags.entry(tag).or_default();
        self
    }

    /// Adds one attribute to a tag, creating the tag if needed.
    #[must_use]
    pub fn with_attribute(
        mut self,
        tag: ClassificationTag,
        key: impl Into<String>,
        value: Value,
    ) -> Self {
        self.tags.entry(tag).or_default().insert(key.into(), value);
        self
    }

    /// Returns whether the descriptor carries the tag.
    #[must_use]
    pub fn contains(&self, tag: ClassificationTag) -> bool {
        self.tags.contains_key(&tag)
    }

    /// Returns the attributes for a tag, if present.
    #[must_use]
    pub fn attributes(&self, tag: ClassificationTag) -> Option<&TagAttributes> {
        self.tags.get(&tag)
    }

    /// Returns the tags carried, in canonical order.
    pub fn tags(&self) -> impl Iterator<Item = ClassificationTag> + '_ {
        self.tags.keys().copied()
    }

    /// Returns whether no tag is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Outcome of a successful classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    tag: ClassificationTag,
    attributes: TagAttributes,
}

impl Classification {
    /// Creates a classification result.
    #[must_use]
    pub const fn new(tag: ClassificationTag, attributes: TagAttributes) -> Self {
        Self { tag, attributes }
    }

    /// Returns the resolved tag.
    #[must_use]
    pub const fn tag(&self) -> ClassificationTag {
        self.tag
    }

    /// Returns the attributes of the resolved tag.
    #[must_use]
    pub const fn attributes(&self) -> &TagAttributes {
        &self.attributes
    }

    /// Splits the classification into tag and attributes.
    #[must_use]
    pub fn into_parts(self) -> (ClassificationTag, TagAttributes) {
        (self.tag, self.attributes)
    }
}
