//! Async client for the ActiveCampaign v3 REST API.
//!
//! # Overview
//! Covers accounts, contacts, deals and their custom fields. Every operation
//! is one HTTP round trip: validate arguments, send, check the status code
//! and the expected body key, return the typed value.
//!
//! # Design
//! - `ReqwestTransport` is built once from a `ClientConfig` and shared
//!   through an `Arc<dyn Transport>`; resource handles hold no other state.
//! - Every failure, whether a rejected argument, a network error or a server
//!   rejection, is an `ActiveCampaignError`.
//! - Nothing is retried, cached or paginated.
//!
//! ```rust,ignore
//! use activecampaign_core::{ActiveCampaign, ClientConfig, NewContact};
//!
//! let client = ActiveCampaign::new(&ClientConfig::new("https://acme.api-us1.com", token))?;
//! let contact = client.contacts().create(&NewContact::new("a@b.com")).await?;
//! ```

pub mod account;
mod client;
pub mod config;
pub mod contact;
pub mod custom_fields;
pub mod deal;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

use std::sync::Arc;

pub use account::Accounts;
pub use config::ClientConfig;
pub use contact::Contacts;
pub use custom_fields::FieldValueEntry;
pub use deal::Deals;
pub use error::{ActiveCampaignError, ErrorKind, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
#[cfg(any(feature = "test-utils", test))]
pub use transport::MockTransport;
pub use transport::{ReqwestTransport, Transport};
pub use types::*;

/// All resource modules over one shared transport.
#[derive(Debug, Clone)]
pub struct ActiveCampaign {
    accounts: Accounts,
    contacts: Contacts,
    deals: Deals,
}

impl ActiveCampaign {
    /// Build a `reqwest` transport from `config` and wire every resource to it.
    pub fn new(config: &ClientConfig) -> Result<Self, ActiveCampaignError> {
        config.validate()?;
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Same as `new`, reading `ACTIVECAMPAIGN_*` environment variables.
    pub fn from_env() -> Result<Self, ActiveCampaignError> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            accounts: Accounts::new(transport.clone()),
            contacts: Contacts::new(transport.clone()),
            deals: Deals::new(transport),
        }
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    pub fn deals(&self) -> &Deals {
        &self.deals
    }
}
