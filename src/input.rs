//! Arrow-key state. Each direction is an independent pressed/released flag.

/// One of the four keys that steer the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Maps a `KeyboardEvent.key` value; anything but the arrow keys is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Direction::Up => "ArrowUp",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl KeyState {
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        let flag = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        if *flag != pressed {
            log::trace!("{} {}", direction.key(), if pressed { "pressed" } else { "released" });
        }
        *flag = pressed;
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Applies a key event, returning whether the key is one we track.
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.set(direction, pressed);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_arrow_keys_only() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_key(direction.key()), Some(direction));
        }
        assert_eq!(Direction::from_key("w"), None);
        assert_eq!(Direction::from_key("Up"), None);
        assert_eq!(Direction::from_key("arrowup"), None);
    }

    #[test]
    fn flags_are_independent() {
        let mut keys = KeyState::default();
        assert!(!keys.any_pressed());

        keys.set(Direction::Left, true);
        keys.set(Direction::Up, true);
        assert!(keys.is_pressed(Direction::Left));
        assert!(keys.is_pressed(Direction::Up));
        assert!(!keys.is_pressed(Direction::Down));
        assert!(!keys.is_pressed(Direction::Right));

        keys.set(Direction::Left, false);
        assert!(!keys.is_pressed(Direction::Left));
        assert!(keys.is_pressed(Direction::Up));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut keys = KeyState::default();
        assert!(!keys.key_event("Enter", true));
        assert_eq!(keys, KeyState::default());
    }
}
