//! Dashboard table rendering — pure functions from snapshot to HTML rows.
//!
//! Each renderer produces the inner rows for one `<tbody>` (or the options
//! for the player select). Routes wrap them in out-of-band containers for the
//! full-reload bundle. One row per mapping entry, in the snapshot's
//! (lexicographic) key order; an empty mapping renders exactly one
//! placeholder row spanning all columns, with no action buttons.
//!
//! Action buttons carry the row's identifier in a `data-phone` / `data-id`
//! attribute and dispatch through HTMX — a single delegated request per
//! click, no per-render listener rebinding. Destructive buttons carry
//! `hx-confirm` prompts.

use crate::model::{Battle, Deity, GameSnapshot, Player};
use crate::routes::util::{html_escape, percent_encode};
use std::collections::BTreeMap;

/// Where stub actions and notices land.
const STATUS_TARGET: &str = "#panel-status";
/// Where the player detail fragment lands.
const MODAL_TARGET: &str = "#viewPlayerModalContent";

fn empty_row(colspan: u8, message: &str) -> String {
    format!(
        r#"<tr><td colspan="{}" class="text-center">{}</td></tr>"#,
        colspan, message
    )
}

/// Render the players table rows — 7 columns, View/Edit/Delete per row.
pub fn render_players_rows(players: &BTreeMap<String, Player>) -> String {
    if players.is_empty() {
        return empty_row(7, "No players registered");
    }

    let mut html = String::with_capacity(players.len() * 512);
    for (phone, player) in players {
        let phone_attr = html_escape(phone);
        html.push_str("<tr>");
        for cell in [
            html_escape(&player.username),
            html_escape(&player.race),
            html_escape(&player.class_name),
            html_escape(&player.element),
            player.level.to_string(),
            html_escape(&player.rank),
        ] {
            html.push_str(&format!("<td>{}</td>", cell));
        }
        html.push_str("<td>");
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-info" data-phone="{p}" hx-post="/panel/player/view?phone={enc}" hx-target="{t}" hx-swap="innerHTML">View</button>"#,
            p = phone_attr,
            enc = percent_encode(phone),
            t = MODAL_TARGET,
        ));
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-warning" data-phone="{p}" hx-post="/panel/player/edit" hx-target="{t}" hx-swap="innerHTML">Edit</button>"#,
            p = phone_attr,
            t = STATUS_TARGET,
        ));
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-danger" data-phone="{p}" hx-post="/panel/player/delete" hx-target="{t}" hx-swap="innerHTML" hx-confirm="Are you sure you want to delete this player? This action cannot be undone.">Delete</button>"#,
            p = phone_attr,
            t = STATUS_TARGET,
        ));
        html.push_str("</td></tr>");
    }
    html
}

/// Render the battles table rows — 5 columns, View/End per row.
/// Participant and current-turn phones resolve through the players section;
/// a dangling reference renders `Unknown` rather than failing.
pub fn render_battles_rows(
    battles: &BTreeMap<String, Battle>,
    snapshot: &GameSnapshot,
) -> String {
    if battles.is_empty() {
        return empty_row(5, "No active battles");
    }

    let mut html = String::with_capacity(battles.len() * 384);
    for (battle_id, battle) in battles {
        let id_attr = html_escape(battle_id);
        let p1 = html_escape(snapshot.username_or_unknown(&battle.players[0]));
        let p2 = html_escape(snapshot.username_or_unknown(&battle.players[1]));
        let turn = html_escape(snapshot.username_or_unknown(&battle.current_turn));

        html.push_str(&format!(
            "<tr><td>{} vs {}</td><td>{}</td><td>{}</td><td>{}</td><td>",
            p1,
            p2,
            html_escape(&battle.zone),
            turn,
            battle.rounds
        ));
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-info" data-id="{id}" hx-post="/panel/battle/view" hx-target="{t}" hx-swap="innerHTML">View</button>"#,
            id = id_attr,
            t = STATUS_TARGET,
        ));
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-danger" data-id="{id}" hx-post="/panel/battle/end" hx-target="{t}" hx-swap="innerHTML" hx-confirm="Are you sure you want to end this battle?">End</button>"#,
            id = id_attr,
            t = STATUS_TARGET,
        ));
        html.push_str("</td></tr>");
    }
    html
}

/// Render the deities table rows — 4 columns, View/Edit/Remove per row.
pub fn render_deities_rows(
    deities: &BTreeMap<String, Deity>,
    snapshot: &GameSnapshot,
) -> String {
    if deities.is_empty() {
        return empty_row(4, "No deities");
    }

    let mut html = String::with_capacity(deities.len() * 384);
    for (phone, deity) in deities {
        let phone_attr = html_escape(phone);
        let owner = html_escape(snapshot.username_or_unknown(&deity.player_phone));

        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>",
            html_escape(&deity.name),
            owner,
            deity.chosen.len()
        ));
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-info" data-phone="{p}" hx-post="/panel/deity/view" hx-target="{t}" hx-swap="innerHTML">View</button>"#,
            p = phone_attr,
            t = STATUS_TARGET,
        ));
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-warning" data-phone="{p}" hx-post="/panel/deity/edit" hx-target="{t}" hx-swap="innerHTML">Edit</button>"#,
            p = phone_attr,
            t = STATUS_TARGET,
        ));
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-danger" data-phone="{p}" hx-post="/panel/deity/remove" hx-target="{t}" hx-swap="innerHTML" hx-confirm="Are you sure you want to remove this deity? This action cannot be undone.">Remove</button>"#,
            p = phone_attr,
            t = STATUS_TARGET,
        ));
        html.push_str("</td></tr>");
    }
    html
}

/// Render the deity-creation candidate list: one leading placeholder option,
/// then one option per player not already a deity.
pub fn render_player_select(players: &BTreeMap<String, Player>) -> String {
    let mut html = String::with_capacity(256 + players.len() * 128);
    html.push_str(r#"<option value="">-- Select Player --</option>"#);

    for (phone, player) in players {
        if player.is_deity {
            continue;
        }
        html.push_str(&format!(
            r#"<option value="{}">{} (Level {} {} {})</option>"#,
            html_escape(phone),
            html_escape(&player.username),
            player.level,
            html_escape(&player.race),
            html_escape(&player.class_name),
        ));
    }
    html
}
