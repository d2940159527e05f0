/***************************************/
/*       Public data structures        */
/***************************************/

/// Direction of travel. `Idle` means "no committed heading" — a moving
/// elevator is never `Idle` (see `Elevator` invariants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    pub fn is_committed(&self) -> bool {
        !matches!(self, Direction::Idle)
    }

    /// Direction from `from` towards `to`. Returns `Idle` if they're equal.
    pub fn towards(from: u32, to: u32) -> Direction {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Idle
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }
}
