//! Text formatting for the status line, HUD panel, and event log entries.

use app::app_loop::{GUARD_DEMAND_VARIABLE, HERALD_OFFER_VARIABLE};
use app::format_snapshot_hash;
use core::{ActorKind, Game, LogEvent};

pub fn status_text(game: &Game, list_has_focus: bool) -> String {
    if list_has_focus {
        return "Choose: Up/Down, Enter to confirm (there is no backing out)".to_string();
    }
    if game.session().is_some() {
        return "A choice is coming up...".to_string();
    }
    "Arrows move | 1 herald offer, 2 guard demand, F force the answer".to_string()
}

pub fn hud_lines(game: &Game, run_seed: u64) -> Vec<String> {
    let session_line = match game.session() {
        Some(session) => {
            let watched = if session.trigger.is_some() { ", watched" } else { "" };
            format!("session: #{} var {}{watched}", session.seq, session.variable)
        }
        None => "session: none".to_string(),
    };
    vec![
        format!("tick {}", game.current_tick()),
        format!("seed {run_seed}"),
        format!("offer var {} = {}", HERALD_OFFER_VARIABLE, game.variable(HERALD_OFFER_VARIABLE)),
        format!("demand var {} = {}", GUARD_DEMAND_VARIABLE, game.variable(GUARD_DEMAND_VARIABLE)),
        session_line,
        format!("hash {}", format_snapshot_hash(game.snapshot_hash())),
    ]
}

pub fn event_log_line(event: &LogEvent) -> String {
    match event {
        LogEvent::ChoiceOpened { seq, variable } => {
            format!("choice #{seq} opened (var {variable})")
        }
        LogEvent::ChoicePresented { seq } => format!("choice #{seq} on display"),
        LogEvent::ChoiceForced { seq, code } => format!("choice #{seq} forced to code {code}"),
        LogEvent::ChoiceCommitted { seq, index } => {
            format!("choice #{seq} committed entry {index}")
        }
        LogEvent::ProximityOverride { seq, value, .. } => {
            format!("choice #{seq} overridden by proximity, wrote {value}")
        }
        LogEvent::ResultCleared { variable } => format!("var {variable} back to idle"),
        LogEvent::ResetSuperseded { variable } => {
            format!("var {variable}: stale reset dropped")
        }
    }
}

pub fn actor_glyph(kind: ActorKind) -> &'static str {
    match kind {
        ActorKind::Player => "@",
        ActorKind::Villager => "v",
        ActorKind::Guard => "G",
    }
}
