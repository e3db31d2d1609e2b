//! The in-scene choice list window. Implements the runtime's surface trait;
//! all animation and cursor state lives here, drawing stays in the binary's
//! render module so this state is testable headlessly.

use core::ChoiceSurface;

/// Frames the open/close slide takes at the 60 FPS frame rate.
pub const SLIDE_FRAMES: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slide {
    Opening,
    Closing,
}

pub struct ChoiceWindow {
    choices: Vec<String>,
    highlight: usize,
    active: bool,
    slide: Slide,
    openness: u8,
}

impl Default for ChoiceWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceWindow {
    pub fn new() -> Self {
        Self { choices: Vec::new(), highlight: 0, active: false, slide: Slide::Closing, openness: 0 }
    }

    /// Advance the slide animation one rendered frame.
    pub fn step_animation(&mut self) {
        match self.slide {
            Slide::Opening if self.openness < SLIDE_FRAMES => self.openness += 1,
            Slide::Closing if self.openness > 0 => self.openness -= 1,
            _ => {}
        }
    }

    /// Fraction of the window's full height currently visible.
    pub fn openness(&self) -> f32 {
        f32::from(self.openness) / f32::from(SLIDE_FRAMES)
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn cursor_up(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        self.highlight = (self.highlight + self.choices.len() - 1) % self.choices.len();
    }

    pub fn cursor_down(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        self.highlight = (self.highlight + 1) % self.choices.len();
    }
}

impl ChoiceSurface for ChoiceWindow {
    fn show(&mut self, choices: &[String]) {
        self.choices = choices.to_vec();
        self.highlight = 0;
    }

    fn open(&mut self) {
        self.slide = Slide::Opening;
    }

    fn close(&mut self) {
        self.slide = Slide::Closing;
    }

    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    /// Settled-open only; an opening window does not count until the slide
    /// finishes, which is what lets a proximity override land before the
    /// player ever sees the list.
    fn is_open(&self) -> bool {
        self.slide == Slide::Opening && self.openness == SLIDE_FRAMES
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn highlight(&self) -> usize {
        self.highlight
    }

    fn set_highlight(&mut self, index: usize) {
        if index < self.choices.len() {
            self.highlight = index;
        }
    }
}
