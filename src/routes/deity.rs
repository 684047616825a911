//! `/panel/deity/*` routes — creation flow plus the deferred stubs.
//!
//! Creation is two-phase. `POST /panel/deity/create` validates the form and,
//! when valid, returns a script asking the bridge to perform the upstream
//! `POST /api/create_deity` (JSON body `{name, phone}`, Content-Type
//! application/json). The bridge then delivers the upstream status to
//! `POST /panel/deity/created`, which either dismisses the dialog and
//! triggers exactly one full snapshot reload, or alerts and leaves the
//! dialog open.

use crate::panel::actions::ActionOutcome;
use crate::panel::notice;
use crate::routes::util::{get_param, get_status, parse_form_body, parse_query};
use serde_json::json;

/// Handle POST /panel/deity/create. Form body: `name`, `phone`.
///
/// Either validation failure aborts before any request is issued.
pub fn handle_create_post(body: &str) -> String {
    let params = parse_form_body(body);
    let name = get_param(&params, "name").unwrap_or("").trim();
    let phone = get_param(&params, "phone").unwrap_or("");

    let outcome = if name.is_empty() {
        ActionOutcome::Invalid("Please enter a deity name")
    } else if phone.is_empty() {
        ActionOutcome::Invalid("Please select a player")
    } else {
        ActionOutcome::Upstream {
            call: "createDeity",
            payload: json!({"name": name, "phone": phone}).to_string(),
        }
    };
    outcome.into_html()
}

/// Handle POST /panel/deity/created?status={status} — create-result delivery.
pub fn handle_created_post(query: &str) -> String {
    let params = parse_query(query);
    let status = get_status(&params);

    if !(200..300).contains(&status) {
        // Dialog stays open, no reload.
        return notice::failure_notice(
            &format!("deity creation failed with status {}", status),
            "Failed to create deity. Please try again.",
        );
    }

    // Dismiss the dialog, confirm, then one full snapshot reload.
    "<script>document.getElementById('createDeityModal').close();\
alert('Deity created successfully');\
htmx.ajax('POST', '/panel/game_state', {target: '#panel-status', swap: 'innerHTML'});</script>"
        .to_string()
}

/// Handle POST /panel/deity/view — deferred stub.
pub fn handle_view_post(_body: &str) -> String {
    ActionOutcome::NotImplemented("Deity view").into_html()
}

/// Handle POST /panel/deity/edit — deferred stub.
pub fn handle_edit_post(_body: &str) -> String {
    ActionOutcome::NotImplemented("Edit deity").into_html()
}

/// Handle POST /panel/deity/remove — deferred stub.
pub fn handle_remove_post(_body: &str) -> String {
    ActionOutcome::NotImplemented("Remove deity").into_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_empty_name_without_request() {
        for body in ["name=&phone=%2B1555", "phone=%2B1555", "name=+++&phone=%2B1555"] {
            let html = handle_create_post(body);
            assert!(html.contains("Please enter a deity name"), "body: {}", body);
            assert!(!html.contains("adminBridge"), "body: {}", body);
        }
    }

    #[test]
    fn create_rejects_missing_player_without_request() {
        let html = handle_create_post("name=Helios&phone=");
        assert!(html.contains("Please select a player"));
        assert!(!html.contains("adminBridge"));
    }

    #[test]
    fn name_check_runs_before_player_check() {
        let html = handle_create_post("name=&phone=");
        assert!(html.contains("Please enter a deity name"));
        assert!(!html.contains("Please select a player"));
    }

    #[test]
    fn valid_create_issues_exactly_one_upstream_call() {
        let html = handle_create_post("name=++Helios+++&phone=%2B1555");
        assert_eq!(html.matches("adminBridge.createDeity").count(), 1);
        // the literal trimmed name and the selected identifier
        assert!(html.contains(r#"{"name":"Helios","phone":"+1555"}"#));
        assert!(!html.contains("alert("));
    }

    #[test]
    fn create_preserves_non_ascii_names_literally() {
        // "Hélios" form-encodes one %XX escape per UTF-8 byte
        let html = handle_create_post("name=H%C3%A9lios&phone=%2B1555");
        assert_eq!(html.matches("adminBridge.createDeity").count(), 1);
        assert!(html.contains(r#""name":"Hélios""#));
    }

    #[test]
    fn created_success_dismisses_and_reloads_once() {
        let html = handle_created_post("?status=200");
        assert!(html.contains("createDeityModal').close()"));
        assert!(html.contains("Deity created successfully"));
        assert_eq!(html.matches("/panel/game_state").count(), 1);
        let close = html.find("close()").unwrap();
        let reload = html.find("htmx.ajax").unwrap();
        assert!(close < reload);
    }

    #[test]
    fn created_failure_keeps_dialog_open_and_skips_reload() {
        for query in ["?status=400", "?status=0"] {
            let html = handle_created_post(query);
            assert!(html.contains("Failed to create deity. Please try again."));
            assert!(!html.contains("close()"));
            assert!(!html.contains("/panel/game_state"));
        }
    }

    #[test]
    fn deity_stubs_stay_deferred() {
        assert!(handle_view_post("")
            .contains("Deity view functionality would be implemented in a full version"));
        assert!(handle_edit_post("")
            .contains("Edit deity functionality would be implemented in a full version"));
        assert!(handle_remove_post("")
            .contains("Remove deity functionality would be implemented in a full version"));
    }
}
