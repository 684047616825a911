//! Action outcomes.
//!
//! Every panel action resolves to one of these rather than mutating anything
//! in place. Unimplemented admin actions are an explicit `NotImplemented`
//! outcome — acknowledged but deferred, not a silent no-op — so tests can
//! assert the contract without real semantics being invented for them.

use crate::panel::notice;

/// Result of dispatching a panel action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A fragment for HTMX to swap in.
    Swap(String),
    /// An upstream game-API call for the bridge to perform. `call` is the
    /// bridge method name, `payload` its JSON argument.
    Upstream { call: &'static str, payload: String },
    /// Validation rejected the input before any request was issued.
    Invalid(&'static str),
    /// The action exists in the UI but has no implemented semantics.
    NotImplemented(&'static str),
}

impl ActionOutcome {
    /// Convert the outcome into the fragment returned to the host page.
    pub fn into_html(self) -> String {
        match self {
            ActionOutcome::Swap(fragment) => fragment,
            ActionOutcome::Upstream { call, payload } => {
                // A `</script>` inside a JSON string would end the element
                // early; `<` is the same character to the JSON parser.
                let payload = payload.replace('<', "\\u003c");
                format!("<script>adminBridge.{}({});</script>", call, payload)
            }
            ActionOutcome::Invalid(message) => notice::alert_notice(message),
            ActionOutcome::NotImplemented(what) => notice::alert_notice(&format!(
                "{} functionality would be implemented in a full version",
                what
            )),
        }
    }
}
