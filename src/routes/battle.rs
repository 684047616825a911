//! `/panel/battle/*` routes — both actions are deferred stubs. The battle
//! table itself is rendered by the snapshot routes; there are no implemented
//! battle mutations in the admin surface.

use crate::panel::actions::ActionOutcome;

/// Handle POST /panel/battle/view — deferred stub.
pub fn handle_view_post(_body: &str) -> String {
    ActionOutcome::NotImplemented("Battle view").into_html()
}

/// Handle POST /panel/battle/end — deferred stub. The confirm prompt lives on
/// the button (`hx-confirm`), so reaching this handler means the admin
/// already confirmed; the answer is still "not yet".
pub fn handle_end_post(_body: &str) -> String {
    ActionOutcome::NotImplemented("End battle").into_html()
}
