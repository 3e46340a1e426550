//! Numeric resource ids.
//!
//! ActiveCampaign sends ids as JSON strings (`"id": "12"`) but accepts
//! numbers in request bodies. `Id` reads either form and always writes a
//! number.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ActiveCampaignError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

impl Id {
    /// A usable argument id. Zero is what the API returns for "unset", so it
    /// is rejected here.
    pub fn new(value: u64) -> Result<Self, ActiveCampaignError> {
        if value == 0 {
            return Err(ActiveCampaignError::validation("id must be a positive number"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id {
    type Err = ActiveCampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ActiveCampaignError::validation(format!("id `{s}` is not numeric")))?;
        Self::new(value)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
                Ok(Id(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
                u64::try_from(v)
                    .map(Id)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
                v.trim()
                    .parse::<u64>()
                    .map(Id)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Argument types accepted wherever an operation needs an id.
///
/// Conversion is where the "id must be numeric" precondition is checked, so
/// a bad id fails before any request is built.
pub trait IntoId {
    fn into_id(self) -> Result<Id, ActiveCampaignError>;
}

impl IntoId for Id {
    fn into_id(self) -> Result<Id, ActiveCampaignError> {
        Id::new(self.0)
    }
}

impl IntoId for u64 {
    fn into_id(self) -> Result<Id, ActiveCampaignError> {
        Id::new(self)
    }
}

impl IntoId for u32 {
    fn into_id(self) -> Result<Id, ActiveCampaignError> {
        Id::new(u64::from(self))
    }
}

impl IntoId for i64 {
    fn into_id(self) -> Result<Id, ActiveCampaignError> {
        let value = u64::try_from(self)
            .map_err(|_| ActiveCampaignError::validation(format!("id `{self}` is negative")))?;
        Id::new(value)
    }
}

impl IntoId for i32 {
    fn into_id(self) -> Result<Id, ActiveCampaignError> {
        i64::from(self).into_id()
    }
}

impl IntoId for &str {
    fn into_id(self) -> Result<Id, ActiveCampaignError> {
        self.parse()
    }
}

impl IntoId for String {
    fn into_id(self) -> Result<Id, ActiveCampaignError> {
        self.parse()
    }
}

impl IntoId for &String {
    fn into_id(self) -> Result<Id, ActiveCampaignError> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_strings_and_numbers() {
        let from_str: Id = serde_json::from_str(r#""42""#).unwrap();
        let from_num: Id = serde_json::from_str("42").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(from_str.get(), 42);
    }

    #[test]
    fn serializes_as_number() {
        let id: Id = "7".into_id().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn rejects_garbage_in_json() {
        assert!(serde_json::from_str::<Id>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<Id>("-3").is_err());
    }

    #[test]
    fn argument_ids_must_be_positive_and_numeric() {
        assert!("abc".into_id().unwrap_err().is_validation());
        assert!("".into_id().unwrap_err().is_validation());
        assert!(0u64.into_id().unwrap_err().is_validation());
        assert!((-1i64).into_id().unwrap_err().is_validation());
        assert_eq!(" 15 ".into_id().unwrap().get(), 15);
        assert_eq!(String::from("9").into_id().unwrap().get(), 9);
    }
}
