//! Text HUD: one line per life/score change.

use starfall_core::match_state::MatchCounters;

pub fn format_hud(counters: &MatchCounters) -> String {
    format!("LIFE: {} SCORE: {}", counters.life, counters.score)
}
