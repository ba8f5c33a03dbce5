use std::collections::BTreeMap;
use std::fmt;

pub type Annotations = BTreeMap<String, String>;

/// Group/version/kind triple of a cluster resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl ResourceKind {
    pub fn new(group: &str, version: &str, kind: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        }
    }

    /// The `TrainingPortal` custom resource swept by the janitor.
    pub fn training_portal() -> Self {
        Self::new("training.educates.dev", "v1beta1", "TrainingPortal")
    }

    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.api_version())
    }
}

/// Everything needed to address a single object for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHandle {
    pub kind: ResourceKind,
    pub namespace: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedResource {
    pub name: String,
    pub annotations: Option<Annotations>,
    pub handle: ResourceHandle,
}

impl ManagedResource {
    pub fn new(kind: ResourceKind, name: &str, annotations: Option<Annotations>) -> Self {
        Self {
            name: name.to_string(),
            annotations,
            handle: ResourceHandle {
                kind,
                namespace: None,
                name: name.to_string(),
            },
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.handle.namespace = Some(namespace.to_string());
        self
    }

    pub fn kind(&self) -> &str {
        &self.handle.kind.kind
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .as_ref()
            .and_then(|annotations| annotations.get(key))
            .map(String::as_str)
    }
}
