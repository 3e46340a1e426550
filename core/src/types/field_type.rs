//! Allow-lists for custom field types.
//!
//! Contacts use the legacy `/fields` endpoint, whose types differ from the
//! account and deal custom-field metadata endpoints.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::ActiveCampaignError;

/// Field types accepted by `accountCustomFieldMeta` and `dealCustomFieldMeta`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, AsRefStr, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldType {
    Text,
    Textarea,
    Date,
    Datetime,
    Dropdown,
    Multiselect,
    Radio,
    Checkbox,
    Hidden,
    Currency,
    Number,
}

/// Field types accepted by the contact `/fields` endpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, AsRefStr, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactFieldType {
    Dropdown,
    Hidden,
    Checkbox,
    Date,
    Text,
    Datetime,
    Textarea,
    #[strum(serialize = "NULL")]
    #[serde(rename = "NULL")]
    Null,
    Listbox,
    Radio,
}

fn parse_allowed<T>(value: &str) -> Result<T, ActiveCampaignError>
where
    T: IntoEnumIterator + AsRef<str> + std::str::FromStr,
{
    value.parse::<T>().map_err(|_| {
        let allowed: Vec<String> = T::iter().map(|t| t.as_ref().to_string()).collect();
        ActiveCampaignError::validation(format!(
            "field type `{value}` is not allowed (expected one of: {})",
            allowed.join(", ")
        ))
    })
}

impl CustomFieldType {
    pub fn parse(value: &str) -> Result<Self, ActiveCampaignError> {
        parse_allowed(value)
    }
}

impl ContactFieldType {
    pub fn parse(value: &str) -> Result<Self, ActiveCampaignError> {
        parse_allowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_field_types_parse_lowercase_names() {
        assert_eq!(CustomFieldType::parse("dropdown").unwrap(), CustomFieldType::Dropdown);
        assert_eq!(CustomFieldType::parse("currency").unwrap(), CustomFieldType::Currency);
        assert_eq!(CustomFieldType::Multiselect.as_ref(), "multiselect");
    }

    #[test]
    fn unknown_type_is_a_validation_error_listing_choices() {
        let err = CustomFieldType::parse("unsupported").unwrap_err();
        assert!(err.is_validation());
        assert!(err.message().contains("dropdown"));
    }

    #[test]
    fn contact_types_differ_from_meta_types() {
        assert_eq!(ContactFieldType::parse("NULL").unwrap(), ContactFieldType::Null);
        assert_eq!(ContactFieldType::parse("listbox").unwrap(), ContactFieldType::Listbox);
        assert!(ContactFieldType::parse("currency").is_err());
        assert!(CustomFieldType::parse("listbox").is_err());
        assert_eq!(serde_json::to_value(ContactFieldType::Null).unwrap(), "NULL");
    }
}
