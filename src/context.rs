//! context.rs — per-process session state: the viewer's sort preference plus
//! a read-only view of the wallet capability.
//!
//! Created once by the entrypoint and injected into the router; nothing else
//! owns it and nothing survives a restart. The context never writes the
//! capability — wallet transitions go through the [`WalletHandle`].

use std::sync::{Arc, RwLock};

use crate::ranking::SortMode;
use crate::wallet::{Capability, WalletHandle};

#[derive(Clone)]
pub struct SessionContext {
    sort: Arc<RwLock<SortMode>>,
    wallet: WalletHandle,
}

impl SessionContext {
    /// Fresh session: sort starts on the Newest tab.
    pub fn new(wallet: WalletHandle) -> Self {
        Self {
            sort: Arc::new(RwLock::new(SortMode::default())),
            wallet,
        }
    }

    pub fn sort_mode(&self) -> SortMode {
        *self.sort.read().expect("sort lock poisoned")
    }

    /// Replaces the sort preference synchronously; readers see the new mode
    /// on their next call. Both enum variants are legal, so there is nothing
    /// to validate here.
    pub fn change_sort_mode(&self, next: SortMode) {
        let mut guard = self.sort.write().expect("sort lock poisoned");
        *guard = next;
    }

    pub fn capability(&self) -> Capability {
        self.wallet.current()
    }

    pub fn wallet(&self) -> &WalletHandle {
        &self.wallet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_defaults_to_newest() {
        let ctx = SessionContext::new(WalletHandle::new());
        assert_eq!(ctx.sort_mode(), SortMode::Newest);
    }

    #[test]
    fn change_sort_mode_is_read_back_immediately() {
        let ctx = SessionContext::new(WalletHandle::new());
        ctx.change_sort_mode(SortMode::Trending);
        assert_eq!(ctx.sort_mode(), SortMode::Trending);
        ctx.change_sort_mode(SortMode::Newest);
        assert_eq!(ctx.sort_mode(), SortMode::Newest);
    }

    #[test]
    fn clones_share_state() {
        let ctx = SessionContext::new(WalletHandle::new());
        let other = ctx.clone();
        other.change_sort_mode(SortMode::Trending);
        assert_eq!(ctx.sort_mode(), SortMode::Trending);
    }

    #[test]
    fn capability_mirrors_the_wallet() {
        let wallet = WalletHandle::new();
        let ctx = SessionContext::new(wallet.clone());
        assert!(!ctx.capability().is_connected());

        wallet
            .connect("0x00192fb10df37c9fb26829eb2cc623cd1bf599e8", None)
            .unwrap();
        assert!(ctx.capability().is_connected());

        wallet.disconnect();
        assert!(!ctx.capability().is_connected());
    }
}
