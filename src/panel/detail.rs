//! Read-only player detail view, rendered into the view-player modal.

use crate::model::Player;
use crate::routes::util::html_escape;

fn list_items(entries: &[String], sentinel: &str) -> String {
    if entries.is_empty() {
        return format!(r#"<li class="list-group-item">{}</li>"#, sentinel);
    }
    entries
        .iter()
        .map(|entry| format!(r#"<li class="list-group-item">{}</li>"#, html_escape(entry)))
        .collect()
}

/// Render the modal content for one player.
///
/// Attributes missing from the payload already defaulted to 0 at parse time;
/// empty inventory and skills lists render their sentinel rows.
pub fn render_player_detail(phone: &str, player: &Player) -> String {
    let mut html = String::with_capacity(2048);

    // Identity block
    html.push_str(r#"<div class="player-identity">"#);
    for (id, value) in [
        ("playerUsername", html_escape(&player.username)),
        ("playerRace", html_escape(&player.race)),
        ("playerClass", html_escape(&player.class_name)),
        ("playerElement", html_escape(&player.element)),
        ("playerLevel", player.level.to_string()),
        ("playerRank", html_escape(&player.rank)),
    ] {
        html.push_str(&format!(r#"<span id="{}">{}</span>"#, id, value));
    }
    html.push_str("</div>");

    // Progression stats
    html.push_str(r#"<div class="player-stats">"#);
    for (id, value) in [
        ("playerXP", player.experience),
        ("playerGold", player.gold),
        ("playerKarma", player.karma),
    ] {
        html.push_str(&format!(r#"<span id="{}">{}</span>"#, id, value));
    }
    html.push_str("</div>");

    // Attribute block
    html.push_str(r#"<div class="player-attributes">"#);
    for (id, value) in [
        ("playerStrength", player.attributes.strength),
        ("playerAgility", player.attributes.agility),
        ("playerIntelligence", player.attributes.intelligence),
        ("playerEndurance", player.attributes.endurance),
    ] {
        html.push_str(&format!(r#"<span id="{}">{}</span>"#, id, value));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<ul id="playerInventory" class="list-group">{}</ul>"#,
        list_items(&player.inventory, "No items")
    ));
    html.push_str(&format!(
        r#"<ul id="playerSkills" class="list-group">{}</ul>"#,
        list_items(&player.skills, "No skills")
    ));

    // Edit stays a deferred stub; the button still carries the identifier.
    html.push_str(&format!(
        r#"<button id="editPlayerBtn" class="btn btn-warning" data-phone="{p}" hx-post="/panel/player/edit" hx-target="{t}" hx-swap="innerHTML">Edit Player</button>"#,
        p = html_escape(phone),
        t = "#panel-status",
    ));

    html
}
