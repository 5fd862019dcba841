use super::action::Direction;

/// Single-slot buffer for direction requests arriving between ticks.
///
/// The first acceptable request wins; the slot stays occupied until the next
/// tick drains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionInbox {
    slot: Option<Direction>,
}

impl DirectionInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `requested` unless the slot is taken or it would reverse `current`.
    pub fn offer(&mut self, requested: Direction, current: Direction) -> bool {
        if !self.is_empty() || current.is_opposite(requested) {
            return false;
        }
        self.slot = Some(requested);
        true
    }

    pub fn take(&mut self) -> Option<Direction> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<Direction> {
        self.slot
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
