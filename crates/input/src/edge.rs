/// Rising-edge detector for a single key binding.
///
/// Feed it the key state once per tick; it reports `true` only on the tick
/// the key goes from released to pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyEdge {
    was_down: bool,
}

impl KeyEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's key state; returns true on a press edge.
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.was_down;
        self.was_down = down;
        if pressed {
            tracing::trace!("key press edge");
        }
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_fires_once_while_held() {
        let mut key = KeyEdge::new();
        assert!(key.update(true));
        assert!(!key.update(true));
        assert!(!key.update(true));
    }

    #[test]
    fn release_then_press_fires_again() {
        let mut key = KeyEdge::new();
        assert!(key.update(true));
        assert!(!key.update(false));
        assert!(key.update(true));
    }

    #[test]
    fn idle_never_fires() {
        let mut key = KeyEdge::new();
        for _ in 0..10 {
            assert!(!key.update(false));
        }
    }
}
