//! Display formatting helpers shared by frontends.

use client_blockchain_core::Address;

/// Shorten an address for header/status display: `0x8F6636…07b77`.
///
/// Addresses shorter than the elision window are returned unchanged.
pub fn short_address(address: &Address) -> String {
    let raw = address.as_str();
    if raw.len() <= 13 {
        return raw.to_owned();
    }
    format!("{}…{}", &raw[..8], &raw[raw.len() - 5..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses_only() {
        let full = Address::new("0x8F6636b2CB02488d52F93dF3f0357fdEEba07b77");
        assert_eq!(short_address(&full), "0x8F6636…07b77");

        let tiny = Address::new("0xabc");
        assert_eq!(short_address(&tiny), "0xabc");
    }
}
