//! Choice-session lifecycle: start, player commit, forced resolution, and
//! the once-per-session surface activation handshake.

use super::*;
use crate::session::DistanceTrigger;

impl Game {
    /// Install a new choice session. While one is already pending this is a
    /// silent no-op and the existing session is preserved unchanged; the
    /// first writer wins until resolution. An empty choice list is likewise
    /// rejected. Returns whether the session was installed.
    pub fn start_choice(
        &mut self,
        choices: Vec<String>,
        variable: i32,
        trigger: Option<DistanceTrigger>,
    ) -> bool {
        if self.session.is_some() || choices.is_empty() {
            return false;
        }

        let seq = self.next_session_seq;
        self.next_session_seq += 1;

        if variable > 0 {
            // A stale reset from a prior session must not clobber this one.
            if self.vars.supersede_reset(variable) {
                self.log.push(LogEvent::ResetSuperseded { variable });
            }
            self.vars.set(variable, UNRESOLVED_SENTINEL);
        }

        self.session = Some(ChoiceSession::new(choices, variable, trigger, seq));
        self.log.push(LogEvent::ChoiceOpened { seq, variable });
        true
    }

    /// Terminal commit shared by player confirmation and forced drains.
    /// `index` is the 0-based list position; the destination variable
    /// receives `index + 1`. Stale calls after a resolution are no-ops.
    pub fn commit_selection(&mut self, surface: &mut dyn ChoiceSurface, index: i32) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        let seq = session.seq;
        self.resolve_with_value(surface, index + 1);
        self.log.push(LogEvent::ChoiceCommitted { seq, index });
        true
    }

    /// Stamp a forced result code on the pending session. The code is drained
    /// at the next observation point, before the list is ever shown when the
    /// surface has not yet activated. It is an opaque result code; no bounds
    /// check against the choice list is made.
    pub fn force_selection(&mut self, code: i32) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };
        session.forced = Some(code);
        self.log.push(LogEvent::ChoiceForced { seq: session.seq, code });
        true
    }

    /// Drain a queued forced code through the normal commit path. Runs ahead
    /// of the distance watch every tick.
    pub(super) fn drain_forced(&mut self, surface: &mut dyn ChoiceSurface) {
        let Some(session) = &self.session else {
            return;
        };
        let Some(code) = session.forced else {
            return;
        };
        // Mirror a genuine pick when the code names a real entry.
        if surface.is_active() && (0..session.choices.len() as i32).contains(&code) {
            surface.set_highlight(code as usize);
        }
        self.commit_selection(surface, code);
    }

    /// Begin the surface activation sequence for a pending session. Guarded
    /// purely by the surface's own flags: once `open`/`activate` have been
    /// requested the surface no longer reads as idle, so the sequence cannot
    /// fire twice for one session.
    pub(super) fn sync_surface(&mut self, surface: &mut dyn ChoiceSurface) {
        let Some(session) = &self.session else {
            return;
        };
        if surface.is_open() || surface.is_active() {
            return;
        }
        surface.show(&session.choices);
        surface.open();
        surface.activate();
        self.log.push(LogEvent::ChoicePresented { seq: session.seq });
    }

    /// The single teardown point. Writes the final value (when storage was
    /// requested), schedules the grace-window reset, retires the surface, and
    /// clears the session so every later resolution attempt is a no-op.
    pub(super) fn resolve_with_value(&mut self, surface: &mut dyn ChoiceSurface, value: i32) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.variable > 0 {
            self.vars.set(session.variable, value);
            self.vars.schedule_reset(session.variable, self.tick);
        }
        if surface.is_active() {
            surface.deactivate();
        }
        // Close unconditionally: a surface may still be mid-open animation,
        // in which case its open flag does not read as settled yet.
        surface.close();
    }
}
