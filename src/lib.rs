//! Pantheon admin panel — in-browser WASM controller.
//!
//! Exports `handle_request(method, path, query, body)` for the Worker bridge
//! to call. Uses `matchit` for URL routing — the same router engine that
//! powers Axum. Every response is an HTML fragment suitable for HTMX to swap
//! into the dashboard page.
//!
//! The game server's API stays external. For routes backed by it, the bridge
//! performs the upstream fetch and forwards the result here: the HTTP status
//! goes into the `status` query param (0 for a network-level failure) and the
//! response body becomes the request body. Outbound mutations work the other
//! way around — a valid create returns a `<script>` invoking an
//! `adminBridge.*` method, and the bridge reports the upstream status back to
//! the matching `/panel/*/created` route.
//!
//! The dashboard holds one snapshot at a time; every successful reload is a
//! full tear-down and rebuild of all four sections via out-of-band swaps.

use wasm_bindgen::prelude::*;

pub mod model;
pub mod panel;
pub mod routes;

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method (e.g., "GET", "POST")
/// * `path`   — URL path (e.g., "/panel/game_state")
/// * `query`  — Query string (e.g., "?phone=%2B15551234&status=200")
/// * `body`   — Request body: an HTMX form body, or the forwarded upstream
///   response body. Empty string for GET requests.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    // Build the router. matchit compiles route patterns into a radix tree.
    let mut router = matchit::Router::new();

    // Register routes — the value is a &str tag we match on below
    router.insert("/panel/game_state", "game_state").ok();
    router.insert("/panel/players", "players").ok();
    router.insert("/panel/battles", "battles").ok();
    router.insert("/panel/deities", "deities").ok();
    router.insert("/panel/player-select", "player_select").ok();

    router.insert("/panel/player/view", "player_view").ok();
    router.insert("/panel/player/edit", "player_edit").ok();
    router.insert("/panel/player/delete", "player_delete").ok();

    router.insert("/panel/battle/view", "battle_view").ok();
    router.insert("/panel/battle/end", "battle_end").ok();

    router.insert("/panel/deity/create", "deity_create").ok();
    router.insert("/panel/deity/created", "deity_created").ok();
    router.insert("/panel/deity/view", "deity_view").ok();
    router.insert("/panel/deity/edit", "deity_edit").ok();
    router.insert("/panel/deity/remove", "deity_remove").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            // Snapshot ingest + per-section re-renders
            ("game_state", "POST") => routes::state::handle_snapshot_post(query, body),
            ("players", "GET") => routes::state::handle_players_get(query),
            ("battles", "GET") => routes::state::handle_battles_get(query),
            ("deities", "GET") => routes::state::handle_deities_get(query),
            ("player_select", "GET") => routes::state::handle_player_select_get(query),

            // Player actions
            ("player_view", "POST") => routes::player::handle_view_post(query, body),
            ("player_edit", "POST") => routes::player::handle_edit_post(body),
            ("player_delete", "POST") => routes::player::handle_delete_post(body),

            // Battle actions
            ("battle_view", "POST") => routes::battle::handle_view_post(body),
            ("battle_end", "POST") => routes::battle::handle_end_post(body),

            // Deity actions
            ("deity_create", "POST") => routes::deity::handle_create_post(body),
            ("deity_created", "POST") => routes::deity::handle_created_post(query),
            ("deity_view", "POST") => routes::deity::handle_view_post(body),
            ("deity_edit", "POST") => routes::deity::handle_edit_post(body),
            ("deity_remove", "POST") => routes::deity::handle_remove_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-danger">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-danger">405 — method not allowed</span>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameSnapshot;
    use crate::panel::state;

    fn reset_state() {
        state::replace_snapshot(GameSnapshot::default());
    }

    fn ares_snapshot_json() -> &'static str {
        r#"{"players": {"+1555": {
            "username": "Ares", "race": "Titan", "class": "Warrior",
            "element": "Fire", "level": 12, "rank": "Champion", "is_deity": false
        }}, "active_battles": {}, "deities": {}}"#
    }

    #[test]
    fn returns_404_for_unknown_route() {
        let html = handle_request("GET", "/panel/nonexistent", "", "");
        assert!(html.contains("404"));
    }

    #[test]
    fn returns_405_for_wrong_method() {
        let html = handle_request("GET", "/panel/deity/create", "", "");
        assert!(html.contains("405"));
        let html = handle_request("POST", "/panel/players", "", "");
        assert!(html.contains("405"));
    }

    #[test]
    fn routes_snapshot_load() {
        reset_state();
        let html = handle_request("POST", "/panel/game_state", "?status=200", ares_snapshot_json());
        assert!(html.contains("<td>Ares</td>"));
        assert!(html.contains("Ares (Level 12 Titan Warrior)"));
        reset_state();
    }

    #[test]
    fn failed_snapshot_load_leaves_sections_untouched() {
        reset_state();
        handle_request("POST", "/panel/game_state", "?status=200", ares_snapshot_json());
        let failure = handle_request("POST", "/panel/game_state", "?status=503", "");
        assert!(failure.contains("Failed to load game state. Please try again."));
        assert!(!failure.contains("hx-swap-oob"));
        let players = handle_request("GET", "/panel/players", "", "");
        assert!(players.contains("Ares"));
        reset_state();
    }

    #[test]
    fn routes_player_view() {
        let html = handle_request(
            "POST",
            "/panel/player/view",
            "?phone=%2B1555&status=200",
            r#"{"username": "Ares", "race": "Titan", "class": "Warrior", "element": "Fire"}"#,
        );
        assert!(html.contains(r#"<span id="playerUsername">Ares</span>"#));
        assert!(html.contains("showModal"));
    }

    #[test]
    fn routes_deity_create_validation_and_call() {
        let invalid = handle_request("POST", "/panel/deity/create", "", "name=&phone=");
        assert!(invalid.contains("Please enter a deity name"));
        assert!(!invalid.contains("adminBridge"));

        let valid =
            handle_request("POST", "/panel/deity/create", "", "name=Helios&phone=%2B1555");
        assert_eq!(valid.matches("adminBridge.createDeity").count(), 1);
    }

    #[test]
    fn routes_deity_created_result_delivery() {
        let ok = handle_request("POST", "/panel/deity/created", "?status=200", "");
        assert!(ok.contains("Deity created successfully"));
        let failed = handle_request("POST", "/panel/deity/created", "?status=400", "");
        assert!(failed.contains("Failed to create deity. Please try again."));
    }

    #[test]
    fn routes_every_stub_action() {
        for path in [
            "/panel/player/edit",
            "/panel/player/delete",
            "/panel/battle/view",
            "/panel/battle/end",
            "/panel/deity/view",
            "/panel/deity/edit",
            "/panel/deity/remove",
        ] {
            let html = handle_request("POST", path, "", "");
            assert!(
                html.contains("would be implemented in a full version"),
                "stub contract broken for {}",
                path
            );
        }
    }
}
