//! Per-tick distance watch that can preempt a pending choice.

use super::*;

impl Game {
    /// Evaluate the session's distance trigger, if any. Fires when the
    /// tracked actor is within the Manhattan radius of the player, writing
    /// the trigger's configured result verbatim rather than the index+1
    /// mapping a commit uses. Runs from the tick the session is installed,
    /// so it can resolve before the surface ever finishes opening.
    pub(super) fn poll_distance_trigger(&mut self, surface: &mut dyn ChoiceSurface) {
        let Some(session) = &self.session else {
            return;
        };
        // A queued forced code owns this tick's resolution slot.
        if session.forced.is_some() {
            return;
        }
        let Some(trigger) = session.trigger else {
            return;
        };
        // A missing actor leaves the trigger armed for future ticks.
        let Some(watched) = self.state.actors.get(trigger.entity) else {
            return;
        };

        let player_pos = self.state.actors[self.state.player_id].pos;
        if manhattan(player_pos, watched.pos) > trigger.radius {
            return;
        }

        let seq = session.seq;
        self.resolve_with_value(surface, trigger.result);
        self.log.push(LogEvent::ProximityOverride {
            seq,
            entity: trigger.entity,
            value: trigger.result,
        });
    }
}
