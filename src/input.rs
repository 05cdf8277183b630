//! Input sampling
//!
//! The host forwards raw pointer and key events to an [`InputSampler`] and
//! takes one [`InputSample`] per frame. Pause and start are edge-triggered:
//! they stay set until the consumer calls [`InputSampler::clear_edges`].

use serde::{Deserialize, Serialize};

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Pause,
    Start,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` to a game key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            "Space" => Some(Key::Pause),
            "Enter" => Some(Key::Start),
            _ => None,
        }
    }
}

/// Immutable per-frame input record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSample {
    /// Pointer x in canvas space; 0 means no pointer
    pub pointer_x: f32,
    pub left_held: bool,
    pub right_held: bool,
    /// One-shot: pause was pressed
    pub pause_edge: bool,
    /// One-shot: start was pressed
    pub start_edge: bool,
}

/// Accumulates raw events between frames
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    current: InputSample,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer or touch moved to canvas-space `x`
    pub fn pointer_moved(&mut self, x: f32) {
        // Negative positions would read as "inactive"; pin them to the edge
        self.current.pointer_x = x.max(f32::MIN_POSITIVE);
    }

    /// Pointer left the canvas; keyboard control resumes
    pub fn pointer_left(&mut self) {
        self.current.pointer_x = 0.0;
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.current.left_held = true,
            Key::Right => self.current.right_held = true,
            Key::Pause => self.current.pause_edge = true,
            Key::Start => self.current.start_edge = true,
        }
    }

    /// Releasing a key never clears a pending edge
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.current.left_held = false,
            Key::Right => self.current.right_held = false,
            Key::Pause | Key::Start => {}
        }
    }

    pub fn sample(&self) -> InputSample {
        self.current
    }

    /// Consume pause/start after acting on them
    pub fn clear_edges(&mut self) {
        self.current.pause_edge = false;
        self.current.start_edge = false;
    }
}
