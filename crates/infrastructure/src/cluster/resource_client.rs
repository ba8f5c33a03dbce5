use async_trait::async_trait;
use kube::api::{Api, ApiResource, DeleteParams, DynamicObject, ListParams};
use kube::core::GroupVersionKind;
use kube::{Client, ResourceExt};
use tracing::debug;
use trainingportal_janitor_application::ports::{ResourceDeleter, ResourceLister};
use trainingportal_janitor_domain::{DomainError, ManagedResource, ResourceHandle, ResourceKind};

use super::errors::map_kube_error;

/// Dynamic-object client for custom resources, bound to one `kube::Client`.
#[derive(Clone)]
pub struct KubeResourceClient {
    client: Client,
}

impl KubeResourceClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, kind: &ResourceKind, namespace: Option<&str>) -> Api<DynamicObject> {
        let resource = api_resource(kind);
        match namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, &resource),
            None => Api::all_with(self.client.clone(), &resource),
        }
    }
}

pub fn api_resource(kind: &ResourceKind) -> ApiResource {
    ApiResource::from_gvk(&GroupVersionKind::gvk(&kind.group, &kind.version, &kind.kind))
}

pub fn to_managed_resource(kind: &ResourceKind, object: DynamicObject) -> ManagedResource {
    let name = object.name_any();
    let namespace = object.metadata.namespace.clone();
    let annotations = object.metadata.annotations;

    let mut resource = ManagedResource::new(kind.clone(), &name, annotations);
    if let Some(ns) = namespace {
        resource = resource.with_namespace(&ns);
    }
    resource
}

#[async_trait]
impl ResourceLister for KubeResourceClient {
    async fn list(&self, kind: &ResourceKind) -> Result<Vec<ManagedResource>, DomainError> {
        let list = self
            .api(kind, None)
            .list(&ListParams::default())
            .await
            .map_err(|e| {
                map_kube_error(e, &kind.to_string(), |reason| DomainError::ListingFailed {
                    kind: kind.kind.clone(),
                    reason,
                })
            })?;

        debug!(kind = %kind.kind, count = list.items.len(), "Listed resources");

        Ok(list
            .items
            .into_iter()
            .map(|object| to_managed_resource(kind, object))
            .collect())
    }
}

#[async_trait]
impl ResourceDeleter for KubeResourceClient {
    async fn delete(&self, handle: &ResourceHandle) -> Result<(), DomainError> {
        self.api(&handle.kind, handle.namespace.as_deref())
            .delete(&handle.name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(|e| {
                map_kube_error(e, &handle.name, |reason| DomainError::DeletionFailed {
                    kind: handle.kind.kind.clone(),
                    name: handle.name.clone(),
                    reason,
                })
            })
    }
}
