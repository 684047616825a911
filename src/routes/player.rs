//! `/panel/player/*` routes — detail view plus the deferred edit/delete stubs.

use crate::model::Player;
use crate::panel::actions::ActionOutcome;
use crate::panel::{detail, notice};
use crate::routes::util::{get_param, get_status, parse_query};

/// Handle POST /panel/player/view?phone={phone}&status={status}
///
/// viewPlayer(id): the bridge fetched `GET /api/player/{phone}` upstream and
/// forwards the result. Success renders the read-only detail fragment and a
/// script opening the modal; any failure is the generic notice and leaves the
/// page as it was.
pub fn handle_view_post(query: &str, body: &str) -> String {
    let params = parse_query(query);
    let phone = match get_param(&params, "phone") {
        Some(p) if !p.is_empty() => p,
        _ => return r#"<span class="text-danger">Missing phone parameter</span>"#.to_string(),
    };
    let status = get_status(&params);

    if !(200..300).contains(&status) {
        return notice::failure_notice(
            &format!("player request failed with status {}", status),
            "Failed to load player data. Please try again.",
        );
    }

    let player: Player = match serde_json::from_str(body) {
        Ok(p) => p,
        Err(e) => {
            return notice::failure_notice(
                &format!("invalid player payload: {}", e),
                "Failed to load player data. Please try again.",
            );
        }
    };

    let mut html = detail::render_player_detail(phone, &player);
    html.push_str(
        "<script>document.getElementById('viewPlayerModal').showModal();</script>",
    );
    ActionOutcome::Swap(html).into_html()
}

/// Handle POST /panel/player/edit — deferred stub.
pub fn handle_edit_post(_body: &str) -> String {
    ActionOutcome::NotImplemented("Edit").into_html()
}

/// Handle POST /panel/player/delete — deferred stub.
pub fn handle_delete_post(_body: &str) -> String {
    ActionOutcome::NotImplemented("Delete").into_html()
}
