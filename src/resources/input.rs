//! Per-frame keyboard input state.
//!
//! Captures the handful of keys the engine and its screens care about. The
//! window backend reports raw up/down levels each frame through
//! [`InputState::set_key`]; edges (`just_pressed`, `just_released`) are derived
//! here so every backend gets identical semantics.

/// Keys the engine exposes to game code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Space,
    Debug,
}

impl InputKey {
    pub const ALL: [InputKey; 8] = [
        InputKey::Up,
        InputKey::Down,
        InputKey::Left,
        InputKey::Right,
        InputKey::Enter,
        InputKey::Escape,
        InputKey::Space,
        InputKey::Debug,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Boolean key state for one frame.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: [BoolState; InputKey::ALL.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: edges from the previous frame expire, levels stay.
    pub fn begin_frame(&mut self) {
        for key in self.keys.iter_mut() {
            key.just_pressed = false;
            key.just_released = false;
        }
    }

    /// Report the raw level of `key` for the current frame.
    pub fn set_key(&mut self, key: InputKey, down: bool) {
        let state = &mut self.keys[key.index()];
        if down && !state.active {
            state.just_pressed = true;
        } else if !down && state.active {
            state.just_released = true;
        }
        state.active = down;
    }

    pub fn state(&self, key: InputKey) -> BoolState {
        self.keys[key.index()]
    }

    pub fn is_key_down(&self, key: InputKey) -> bool {
        self.state(key).active
    }

    pub fn is_key_pressed(&self, key: InputKey) -> bool {
        self.state(key).just_pressed
    }

    pub fn is_key_released(&self, key: InputKey) -> bool {
        self.state(key).just_released
    }
}
