//! Resource catalog.
//!
//! Listing always yields the one built-in sample; creating builds a
//! descriptor and hands it back without keeping it. A restart, or simply the
//! next list call, shows no trace of created resources.

use chrono::Utc;
use serde_json::Value;
use shim_config::ServiceProfile;

use crate::ids;
use crate::types::{config_value, CreateResourceRequest, ResourceDescriptor};

/// Non-persistent catalog of agents, crews, or workflows.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    profile: ServiceProfile,
}

impl ResourceCatalog {
    pub fn new(profile: ServiceProfile) -> Self {
        Self { profile }
    }

    /// The static sample entry.
    pub fn sample(&self) -> ResourceDescriptor {
        let noun = self.profile.resource_noun;
        ResourceDescriptor {
            id: format!("sample-{}", noun),
            name: Value::String(format!(
                "Sample {} {}",
                self.profile.display_name,
                self.profile.resource_label()
            )),
            description: Some(format!("A sample {} for testing", noun)),
            config: None,
            created_at: None,
        }
    }

    pub fn list(&self) -> Vec<ResourceDescriptor> {
        vec![self.sample()]
    }

    /// Build a descriptor for a new resource. Nothing is stored.
    pub fn create(&self, request: CreateResourceRequest) -> ResourceDescriptor {
        let name = config_value(&request.config, "name")
            .unwrap_or_else(|| Value::String(self.unnamed_label()));

        ResourceDescriptor {
            id: ids::resource_id(self.profile.resource_noun),
            name,
            description: None,
            config: Some(request.config),
            created_at: Some(Utc::now()),
        }
    }

    /// Name given to resources created without one, e.g. `Unnamed Crew`.
    pub fn unnamed_label(&self) -> String {
        format!("Unnamed {}", self.profile.resource_label())
    }
}
