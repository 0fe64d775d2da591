//! Common types shared across the marketplace client.

use serde::{Deserialize, Serialize};

use crate::units::{self, UnitsError};

/// Rendered in place of a listing whose image URL came back empty.
pub const PLACEHOLDER_IMAGE_URL: &str = "about:blank#missing-image";

/// Blockchain account address as a 0x-prefixed hex string.
///
/// Wallets render the same identity with different letter casing (checksum
/// formats), so equality is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Address {}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A marketplace listing as reported by the remote contract.
///
/// `owner` and `is_for_sale` are authoritative only as of the last successful
/// fetch. The client never mutates these fields; all mutation happens remotely
/// and is observed through a re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftListing {
    /// Contract-assigned sequence number.
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Price in base units (e.g. wei).
    pub price: u128,
    pub image_url: String,
    pub owner: Address,
    pub is_for_sale: bool,
}

impl NftListing {
    /// A listing is purchasable by `account` iff it is for sale and `account`
    /// is not already the owner (case-insensitive address comparison).
    pub fn purchasable_by(&self, account: &Address) -> bool {
        self.is_for_sale && self.owner != *account
    }

    pub fn image_url_or_placeholder(&self) -> &str {
        if self.image_url.is_empty() {
            PLACEHOLDER_IMAGE_URL
        } else {
            &self.image_url
        }
    }
}

/// Draft form state validation errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The {0} field must not be empty")]
    EmptyField(&'static str),

    #[error("Price must be a positive decimal number: {0}")]
    InvalidPrice(UnitsError),

    #[error("Price must be greater than zero")]
    ZeroPrice,
}

/// Local, ephemeral listing form state.
///
/// `price` is a decimal string in display units. The draft is cleared only on
/// successful submission so a failed attempt can be corrected and resubmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl ListingDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.price.is_empty()
            && self.image_url.is_empty()
    }

    /// Check the submission guard: all four fields non-empty and the price a
    /// positive decimal expressible in `decimals` fractional digits.
    pub fn validate(&self, decimals: u32) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyField("description"));
        }
        if self.price.trim().is_empty() {
            return Err(ValidationError::EmptyField("price"));
        }
        if self.image_url.trim().is_empty() {
            return Err(ValidationError::EmptyField("image URL"));
        }

        match units::to_base_units(&self.price, decimals) {
            Ok(0) => Err(ValidationError::ZeroPrice),
            Ok(_) => Ok(()),
            Err(err) => Err(ValidationError::InvalidPrice(err)),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
