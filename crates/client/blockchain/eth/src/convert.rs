//! Conversions between domain types and `ethers` types.

use client_blockchain_core::{Address, ContractError, NftListing};
use ethers::types::{H160, U256};

/// Raw `getNFTs` record as decoded from the ABI tuple.
pub type ListingTuple = (U256, String, String, U256, String, H160, bool);

/// Convert a domain address to an `ethers` address.
pub fn to_h160(address: &Address) -> Result<H160, ContractError> {
    address
        .as_str()
        .parse()
        .map_err(|_| ContractError::InvalidRecord(format!("invalid address `{address}`")))
}

/// Convert an `ethers` address to the domain representation
/// (0x-prefixed lowercase hex).
pub fn from_h160(address: H160) -> Address {
    Address::new(format!("{address:#x}"))
}

/// Decode one raw contract record into a domain listing.
///
/// Range violations are reported rather than truncated so a corrupt record
/// can be skipped without poisoning the snapshot.
pub fn to_listing(raw: ListingTuple) -> Result<NftListing, ContractError> {
    let (id, name, description, price, image_url, owner, is_for_sale) = raw;

    if id > U256::from(u64::MAX) {
        return Err(ContractError::InvalidRecord(format!(
            "listing id {id} out of range"
        )));
    }
    if price > U256::from(u128::MAX) {
        return Err(ContractError::InvalidRecord(format!(
            "price {price} of listing {id} out of range"
        )));
    }

    Ok(NftListing {
        id: id.as_u64(),
        name,
        description,
        price: price.as_u128(),
        image_url,
        owner: from_h160(owner),
        is_for_sale,
    })
}

/// Validate a 20-byte hex address string.
pub fn is_valid_address(address: &str) -> bool {
    let hex_str = address.strip_prefix("0x").unwrap_or(address);
    hex::decode(hex_str).map(|b| b.len() == 20).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_round_trip_is_case_insensitive() {
        let checksummed = Address::new("0x8F6636b2CB02488d52F93dF3f0357fdEEba07b77");
        let h160 = to_h160(&checksummed).unwrap();

        // from_h160 renders lowercase; equality is identity-based.
        let domain = from_h160(h160);
        assert_eq!(domain, checksummed);
        assert_eq!(domain.as_str(), "0x8f6636b2cb02488d52f93df3f0357fdeeba07b77");
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(to_h160(&Address::new("not-an-address")).is_err());
        assert!(!is_valid_address("0x1234"));
        assert!(!is_valid_address("zz"));
        assert!(is_valid_address("0x8F6636b2CB02488d52F93dF3f0357fdEEba07b77"));
    }

    #[test]
    fn decodes_well_formed_records() {
        let listing = to_listing((
            U256::from(7),
            "Art1".to_owned(),
            "desc".to_owned(),
            U256::from(5 * 10u128.pow(17)),
            "http://x/img.png".to_owned(),
            H160::repeat_byte(0x11),
            true,
        ))
        .unwrap();

        assert_eq!(listing.id, 7);
        assert_eq!(listing.price, 5 * 10u128.pow(17));
        assert!(listing.is_for_sale);
    }

    #[test]
    fn out_of_range_records_are_reported() {
        let base = (
            U256::MAX,
            String::new(),
            String::new(),
            U256::one(),
            String::new(),
            H160::zero(),
            true,
        );
        assert!(matches!(
            to_listing(base),
            Err(ContractError::InvalidRecord(_))
        ));

        let price_overflow = (
            U256::one(),
            String::new(),
            String::new(),
            U256::MAX,
            String::new(),
            H160::zero(),
            true,
        );
        assert!(matches!(
            to_listing(price_overflow),
            Err(ContractError::InvalidRecord(_))
        ));
    }
}
