//! Embedded marketplace ABI descriptor.
//!
//! The ABI is immutable configuration: it is compiled into the binary and
//! parsed once at client construction.

/// JSON ABI for the three marketplace entry points
/// (`listNFT`, `buyNFT`, `getNFTs`).
pub const MARKETPLACE_ABI: &str = include_str!("../abi/marketplace.json");

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::abi::Abi;

    #[test]
    fn embedded_abi_parses_and_exposes_all_calls() {
        let abi: Abi = serde_json::from_str(MARKETPLACE_ABI).unwrap();

        for name in ["listNFT", "buyNFT", "getNFTs"] {
            assert!(abi.function(name).is_ok(), "missing function {name}");
        }
        assert_eq!(abi.function("listNFT").unwrap().inputs.len(), 4);
        assert_eq!(abi.function("buyNFT").unwrap().inputs.len(), 1);
        assert!(abi.function("getNFTs").unwrap().inputs.is_empty());
    }
}
