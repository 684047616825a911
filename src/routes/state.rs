//! `/panel/game_state` and per-section routes — snapshot ingest and rendering.
//!
//! `POST /panel/game_state` is loadGameState(): the bridge fetched
//! `GET /api/game_state` upstream and forwards the status + body here. On
//! success the stored snapshot is replaced and the response carries the full
//! rebuild bundle — out-of-band swaps for every table body, the candidate
//! select, and the stat counters. On any failure (non-2xx, network error,
//! unparsable body) the response is a single alert notice with no out-of-band
//! fragments, so every previously rendered section stays untouched.

use crate::model::GameSnapshot;
use crate::panel::{notice, state, tables};
use crate::routes::util::{get_status, parse_query};

/// Render the full rebuild bundle from a snapshot.
///
/// The main swap target receives only a diagnostic comment; all visible
/// content travels out-of-band so one response tears down and rebuilds every
/// section at once.
pub fn render_dashboard_bundle(snapshot: &GameSnapshot) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str(&notice::debug_comment(&format!(
        "snapshot players={} battles={} deities={}",
        snapshot.players.len(),
        snapshot.active_battles.len(),
        snapshot.deities.len()
    )));

    html.push_str(&format!(
        r#"<tbody id="playerTableBody" hx-swap-oob="innerHTML">{}</tbody>"#,
        tables::render_players_rows(&snapshot.players)
    ));
    html.push_str(&format!(
        r#"<tbody id="battleTableBody" hx-swap-oob="innerHTML">{}</tbody>"#,
        tables::render_battles_rows(&snapshot.active_battles, snapshot)
    ));
    html.push_str(&format!(
        r#"<tbody id="deityTableBody" hx-swap-oob="innerHTML">{}</tbody>"#,
        tables::render_deities_rows(&snapshot.deities, snapshot)
    ));
    html.push_str(&format!(
        r#"<select id="playerSelect" hx-swap-oob="innerHTML">{}</select>"#,
        tables::render_player_select(&snapshot.players)
    ));

    // Dashboard stat counters
    for (id, count) in [
        ("playerCount", snapshot.players.len()),
        ("activeBattleCount", snapshot.active_battles.len()),
        ("deityCount", snapshot.deities.len()),
    ] {
        html.push_str(&format!(
            r#"<span id="{}" hx-swap-oob="innerHTML">{}</span>"#,
            id, count
        ));
    }

    html
}

/// Handle POST /panel/game_state.
pub fn handle_snapshot_post(query: &str, body: &str) -> String {
    let params = parse_query(query);
    let status = get_status(&params);

    match state::import_snapshot(status, body) {
        Ok(()) => state::with_snapshot(render_dashboard_bundle),
        Err(reason) => notice::failure_notice(
            &reason,
            "Failed to load game state. Please try again.",
        ),
    }
}

/// Handle GET /panel/players — re-render one section from the stored snapshot.
pub fn handle_players_get(_query: &str) -> String {
    state::with_snapshot(|s| tables::render_players_rows(&s.players))
}

/// Handle GET /panel/battles.
pub fn handle_battles_get(_query: &str) -> String {
    state::with_snapshot(|s| tables::render_battles_rows(&s.active_battles, s))
}

/// Handle GET /panel/deities.
pub fn handle_deities_get(_query: &str) -> String {
    state::with_snapshot(|s| tables::render_deities_rows(&s.deities, s))
}

/// Handle GET /panel/player-select.
pub fn handle_player_select_get(_query: &str) -> String {
    state::with_snapshot(|s| tables::render_player_select(&s.players))
}
