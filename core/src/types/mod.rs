//! Typed request payloads and response schemas.
//!
//! # Design
//! Response models name the fields callers commonly read and keep the rest
//! in a flattened `extra` map, so a new server field never breaks decoding
//! while a missing required one does.

mod account;
mod contact;
mod custom_field;
mod deal;
mod field_type;
mod id;

use serde::{Deserialize, Serialize};

pub use account::{Account, AccountContact, AccountFieldValue, AccountUpdate, NewAccount};
pub use contact::{
    Contact, ContactField, ContactFieldCreated, ContactFieldInput, ContactUpdate, FieldValue,
    NewContact, NewContactField,
};
pub use custom_field::{CustomFieldDatum, CustomFieldMeta, CustomFieldUpdate};
pub use deal::{Deal, DealFieldValue, DealUpdate, NewDeal};
pub use field_type::{ContactFieldType, CustomFieldType};
pub use id::{Id, IntoId};

/// Fixed confirmation returned by operations whose response body carries
/// nothing worth echoing (deletes, bulk writes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
