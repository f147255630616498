use crate::{InputEvent, KeyboardState, MouseState};

/// Mouse, keyboard and quit state for one window.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mouse: MouseState,
    pub keyboard: KeyboardState,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, event: &InputEvent) {
        if *event == InputEvent::Quit {
            tracing::debug!("quit requested");
            self.quit = true;
        }
        self.mouse.update(event);
        self.keyboard.update(event);
    }

    /// Feed a batch of events in order.
    pub fn extend(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.update(&event);
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
