//! Classification families: thematic groups of classifications.

use std::fmt;

use klass_model::{ClassificationSummary, FamilyDetails, Language};

use crate::classification::Classification;
use crate::error::{ClientError, Result};
use crate::http::KlassClient;

/// One classification family with its member classifications.
pub struct Family {
    details: FamilyDetails,
}

impl Family {
    /// Wraps an already-decoded family response. No I/O.
    pub fn from_details(details: FamilyDetails) -> Self {
        Self { details }
    }

    pub fn fetch(
        client: &KlassClient,
        family_id: &str,
        ssb_section: Option<&str>,
        language: Option<Language>,
    ) -> Result<Self> {
        let details =
            client.classification_family_by_id(family_id, ssb_section, false, language)?;
        Ok(Self::from_details(details))
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn details(&self) -> &FamilyDetails {
        &self.details
    }

    pub fn classifications(&self) -> &[ClassificationSummary] {
        &self.details.classifications
    }

    /// Fetches one member classification, defaulting to the first.
    pub fn get_classification(
        &self,
        client: &KlassClient,
        classification_id: Option<&str>,
        language: Option<Language>,
    ) -> Result<Classification> {
        let id = match classification_id {
            Some(id) => id.to_string(),
            None => self
                .details
                .classifications
                .first()
                .ok_or(ClientError::EmptyFamily)?
                .classification_id()?
                .to_string(),
        };
        Classification::fetch(client, &id, language, false)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Family: {}", self.details.name)?;
        for classification in &self.details.classifications {
            let id = classification.classification_id().unwrap_or("?");
            write!(f, "\n  {}: {}", id, classification.name)?;
        }
        Ok(())
    }
}
