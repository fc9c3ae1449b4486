//! actions.rs — which UI affordances exist for a given wallet capability.
//! Pure predicates; deeper authorization (does this address own anything)
//! is not this layer's concern.

use serde::Serialize;

use crate::wallet::Capability;

/// An affordance the client renders. Absent from the list = absent from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ProfileLink,
    SubmitLink,
    Connect,
    Disconnect,
}

/// Profile link shows whenever an address is known.
pub fn profile_link_visible(cap: &Capability) -> bool {
    cap.address().is_some()
}

/// Submitting a link requires a live connection.
pub fn submit_link_visible(cap: &Capability) -> bool {
    cap.is_connected()
}

/// The full set of affordances, in render order. Connect and disconnect are
/// mutually exclusive on connection state.
pub fn visible_actions(cap: &Capability) -> Vec<Action> {
    let mut out = Vec::new();
    if profile_link_visible(cap) {
        out.push(Action::ProfileLink);
    }
    if submit_link_visible(cap) {
        out.push(Action::SubmitLink);
    }
    if cap.is_connected() {
        out.push(Action::Disconnect);
    } else {
        out.push(Action::Connect);
    }
    out
}
