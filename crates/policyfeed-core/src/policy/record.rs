//! CSV row and JSON DTO shapes.
//!
//! The row keeps the source column names; the DTO is the renamed shape
//! returned to API callers. Conversion is a pure field move.

use serde::{Deserialize, Serialize};

/// One CSV data row.
///
/// Columns not listed here are ignored. Cells are read as text, so a numeric
/// `policy_id` such as `42` arrives as `"42"`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyRecord {
    pub policy_id: String,
    pub policy_title: String,
    pub policy_instrument: String,
    pub policy_description: String,
    pub policy_name: String,
    /// Optional column; an empty cell reads as `None`.
    #[serde(default)]
    pub policy_city_or_local: Option<String>,
    /// Optional column; an empty cell reads as `None`.
    #[serde(default)]
    pub subnational_region: Option<String>,
}

/// Location block nested in [`PolicyDto`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    #[serde(rename = "FAC_NAME")]
    pub name: String,
    #[serde(rename = "FAC_CITY")]
    pub city: String,
    #[serde(rename = "FAC_STATE")]
    pub state: String,
}

/// JSON shape returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDto {
    pub id: String,
    pub title: String,
    pub category: String,
    /// `policy_description`, passed through verbatim.
    pub summary: String,
    pub facility: Facility,
}

impl From<PolicyRecord> for PolicyDto {
    fn from(r: PolicyRecord) -> Self {
        Self {
            id: r.policy_id,
            title: r.policy_title,
            category: r.policy_instrument,
            summary: r.policy_description,
            facility: Facility {
                name: r.policy_name,
                city: r.policy_city_or_local.unwrap_or_default(),
                state: r.subnational_region.unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(city: Option<&str>, state: Option<&str>) -> PolicyRecord {
        PolicyRecord {
            policy_id: "42".into(),
            policy_title: "Tax Credit".into(),
            policy_instrument: "Incentive".into(),
            policy_description: "...".into(),
            policy_name: "Acme Plant".into(),
            policy_city_or_local: city.map(str::to_string),
            subnational_region: state.map(str::to_string),
        }
    }

    #[test]
    fn renames_fields_into_dto_shape() {
        let dto = PolicyDto::from(record(Some("Springfield"), Some("IL")));
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": "42",
                "title": "Tax Credit",
                "category": "Incentive",
                "summary": "...",
                "facility": {
                    "FAC_NAME": "Acme Plant",
                    "FAC_CITY": "Springfield",
                    "FAC_STATE": "IL"
                }
            })
        );
    }

    #[test]
    fn missing_location_becomes_empty_string() {
        let dto = PolicyDto::from(record(None, None));
        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(v["facility"]["FAC_CITY"], json!(""));
        assert_eq!(v["facility"]["FAC_STATE"], json!(""));
    }
}
