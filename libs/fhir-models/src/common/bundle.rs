//! FHIR Bundle model
//!
//! Collection bundles used to hand several mapped documents to the
//! presentation layer in one payload.

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// FHIR Bundle resource
///
/// A container for a collection of resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Resource type - always "Bundle"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Indicates the purpose of this bundle - how it was intended to be used
    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    /// Entry in the bundle - will have a resource or information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<BundleEntry>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_resource_type() -> String {
    "Bundle".to_string()
}

/// Type of Bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    /// Collection Bundle - A set of resources collected for a specific purpose
    Collection,
}

/// Entry in the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    /// Full URL for the entry (relative to the base URL, or absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// A resource in this bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bundle {
    /// Create a new Bundle with minimal required fields
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            bundle_type,
            entry: None,
            extra: Map::new(),
        }
    }

    /// Collection bundle holding every given resource, in order
    pub fn collection<T: Serialize>(resources: &[T]) -> Result<Self> {
        let mut bundle = Self::new(BundleType::Collection);
        for resource in resources {
            bundle.add_resource(resource)?;
        }
        Ok(bundle)
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }

    /// Get the number of entries in the bundle
    pub fn entry_count(&self) -> usize {
        self.entry.as_ref().map(|e| e.len()).unwrap_or(0)
    }

    /// Get entries as a slice
    pub fn entries(&self) -> &[BundleEntry] {
        self.entry.as_deref().unwrap_or(&[])
    }

    /// Add an entry to the bundle
    pub fn add_entry(&mut self, entry: BundleEntry) {
        self.entry.get_or_insert_with(Vec::new).push(entry);
    }

    /// Serialize a resource and add it as a new entry
    pub fn add_resource<T: Serialize>(&mut self, resource: &T) -> Result<()> {
        let value = serde_json::to_value(resource)?;
        if !value.is_object() {
            return Err(Error::InvalidResource(
                "bundle entries must be JSON objects".to_string(),
            ));
        }
        let full_url = resource_url(&value);
        self.add_entry(BundleEntry {
            full_url,
            resource: Some(value),
            extra: Map::new(),
        });
        Ok(())
    }
}

/// Relative `Type/id` URL when the resource carries an id
fn resource_url(resource: &Value) -> Option<String> {
    let resource_type = resource.get("resourceType")?.as_str()?;
    let id = resource.get("id")?.as_str()?;
    Some(format!("{resource_type}/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_bundle() {
        let json = json!({
            "resourceType": "Bundle",
            "id": "profile",
            "type": "collection",
            "entry": [
                {
                    "fullUrl": "Patient/1",
                    "resource": {
                        "resourceType": "Patient",
                        "id": "1"
                    }
                }
            ]
        });

        let bundle: Bundle = serde_json::from_value(json).unwrap();
        assert_eq!(bundle.id, Some("profile".to_string()));
        assert_eq!(bundle.bundle_type, BundleType::Collection);
        assert_eq!(bundle.entry_count(), 1);
    }

    #[test]
    fn test_serialize_empty_bundle() {
        let bundle = Bundle::new(BundleType::Collection);
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["resourceType"], "Bundle");
        assert_eq!(json["type"], "collection");
        assert!(json.get("entry").is_none());
    }

    #[test]
    fn test_collection_sets_full_url_only_with_id() {
        let resources = vec![
            json!({ "resourceType": "Patient", "id": "1" }),
            json!({ "resourceType": "Observation" }),
        ];

        let bundle = Bundle::collection(&resources).unwrap();
        assert_eq!(bundle.entry_count(), 2);
        assert_eq!(bundle.entries()[0].full_url.as_deref(), Some("Patient/1"));
        assert!(bundle.entries()[1].full_url.is_none());
    }

    #[test]
    fn test_unmodelled_bundle_members_stay_in_extra() {
        let json = json!({
            "resourceType": "Bundle",
            "type": "collection",
            "timestamp": "2024-05-14T09:00:00Z",
            "total": 0
        });

        let bundle: Bundle = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(bundle.extra["timestamp"], "2024-05-14T09:00:00Z");
        assert_eq!(bundle.extra["total"], 0);
        assert_eq!(bundle.to_value().unwrap(), json);
        assert!(serde_json::from_value::<Bundle>(json!({ "type": "searchset" })).is_err());
    }

    #[test]
    fn test_add_resource_rejects_non_objects() {
        let mut bundle = Bundle::new(BundleType::Collection);
        assert!(bundle.add_resource(&json!([1, 2])).is_err());
        assert_eq!(bundle.entry_count(), 0);
    }
}
