//! Hull reference records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::attributes::{Attribute, Attributes};
use super::ids::{BuildId, HullId};

/// Base ship chassis. Attributes hold base capacities before any outfits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    pub id: HullId,
    pub name: String,
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_build: Option<BuildId>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Hull {
    /// Base value of an attribute (zero when absent).
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        self.attributes.get(attribute)
    }

    /// Validate hull data for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("hull {} must have a name", self.id),
            });
        }
        self.attributes.validate(&self.name)?;

        for attribute in [Attribute::Mass, Attribute::Drag] {
            if self.attribute(attribute) < 0.0 {
                return Err(Error::CatalogValidation {
                    message: format!("{}: {attribute} must not be negative", self.name),
                });
            }
        }

        Ok(())
    }
}
