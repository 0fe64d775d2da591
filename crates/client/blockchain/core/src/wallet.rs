//! Wallet connection state.

use std::sync::Arc;

use crate::traits::{WalletError, WalletProvider};
use crate::types::Address;

/// Holds the optional wallet provider and the active account.
///
/// "Not connected" is a valid state: the session starts without an account
/// and only gains one through a successful [`WalletSession::connect`]. There
/// is no explicit disconnect; the session lives as long as the application.
pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    account: Option<Address>,
}

impl WalletSession {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            account: None,
        }
    }

    /// Session with no provider configured; `connect` always fails with
    /// [`WalletError::ProviderUnavailable`].
    pub fn disconnected() -> Self {
        Self::new(None)
    }

    /// Request account access and store the first returned address.
    ///
    /// On failure the account stays unset.
    pub async fn connect(&mut self) -> Result<Address, WalletError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(WalletError::ProviderUnavailable)?;

        let accounts = provider.request_accounts().await?;
        let account = accounts
            .into_iter()
            .next()
            .ok_or(WalletError::UserDeniedAccess)?;

        tracing::info!(account = %account, "Wallet connected");
        self.account = Some(account.clone());
        Ok(account)
    }

    pub fn current_account(&self) -> Option<&Address> {
        self.account.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockWalletProvider;

    #[tokio::test]
    async fn connect_stores_first_account() {
        let provider = MockWalletProvider::with_accounts(["0xAbC1", "0xdef2"]);
        let mut session = WalletSession::new(Some(Arc::new(provider)));

        let account = session.connect().await.unwrap();
        assert_eq!(account, Address::new("0xabc1"));
        assert_eq!(session.current_account(), Some(&account));
        assert!(session.is_connected());
    }

    #[tokio::test]
    async fn missing_provider_reports_unavailable() {
        let mut session = WalletSession::disconnected();

        let err = session.connect().await.unwrap_err();
        assert!(matches!(err, WalletError::ProviderUnavailable));
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn denied_request_leaves_account_unset() {
        let provider = MockWalletProvider::denying();
        let mut session = WalletSession::new(Some(Arc::new(provider)));

        let err = session.connect().await.unwrap_err();
        assert!(matches!(err, WalletError::UserDeniedAccess));
        assert!(session.current_account().is_none());
    }

    #[tokio::test]
    async fn empty_account_list_counts_as_denial() {
        let provider = MockWalletProvider::with_accounts(Vec::<String>::new());
        let mut session = WalletSession::new(Some(Arc::new(provider)));

        let err = session.connect().await.unwrap_err();
        assert!(matches!(err, WalletError::UserDeniedAccess));
        assert!(!session.is_connected());
    }
}
