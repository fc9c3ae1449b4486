//! wallet.rs — wallet-connection capability mirrored into the session.
//!
//! The connector owns every transition; the rest of the service only reads.
//! Connection state is a tagged variant, so a "connected but addressless"
//! session cannot be represented.

use std::sync::{Arc, RwLock};

use anyhow::{bail, Result};
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// What the viewer's wallet currently grants the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Capability {
    #[default]
    Disconnected,
    Connected {
        address: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ens: Option<String>,
    },
}

impl Capability {
    pub fn is_connected(&self) -> bool {
        matches!(self, Capability::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            Capability::Connected { address, .. } => Some(address),
            Capability::Disconnected => None,
        }
    }

    pub fn ens(&self) -> Option<&str> {
        match self {
            Capability::Connected { ens, .. } => ens.as_deref(),
            Capability::Disconnected => None,
        }
    }
}

/// `0x` plus 40 hex digits. Checksum casing is not enforced here.
fn looks_like_address(s: &str) -> bool {
    static RE: OnceCell<Regex> = OnceCell::new();
    let re = RE.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap());
    re.is_match(s)
}

/// Cloneable handle to the shared wallet capability.
/// Starts disconnected; `connect`/`disconnect` are the only writers.
#[derive(Clone, Default)]
pub struct WalletHandle {
    inner: Arc<RwLock<Capability>>,
}

impl WalletHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current capability.
    pub fn current(&self) -> Capability {
        self.inner.read().expect("wallet lock poisoned").clone()
    }

    /// Transition to connected. Rejects anything that does not look like an
    /// EVM address so a typo'd payload cannot pose as a session.
    pub fn connect(&self, address: &str, ens: Option<String>) -> Result<Capability> {
        if !looks_like_address(address) {
            bail!("'{address}' is not a valid wallet address");
        }
        let cap = Capability::Connected {
            address: address.to_string(),
            ens,
        };
        let mut guard = self.inner.write().expect("wallet lock poisoned");
        *guard = cap.clone();
        Ok(cap)
    }

    /// Revert to disconnected. Idempotent.
    pub fn disconnect(&self) -> Capability {
        let mut guard = self.inner.write().expect("wallet lock poisoned");
        *guard = Capability::Disconnected;
        Capability::Disconnected
    }
}
