/**
 * A pending external request for service from a hall button.
 *
 * A `HallCall` is immutable once created: floor and direction never
 * change, and `createdAt` is stamped once at construction time. Age is
 * computed relative to that stamp, either against the real clock
 * (`age()`) or against an explicit instant supplied by a caller that
 * needs deterministic timing (`age_since`), which is how tests exercise
 * the timeout fallback (spec §4.2 Phase 3) without a fake clock type.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::direction::Direction;
use crate::error::DispatchError;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = u32;

/// Threshold past which a pending call becomes eligible for the
/// opposite-direction fallback (spec §4.2 Phase 3). Strategy-internal,
/// not configurable.
pub const TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HallCall {
    floor: Floor,
    direction: Direction,
    created_at: Instant,
}

impl HallCall {
    /// Constructs a hall call, validating the invariants from spec §3:
    /// floor 0 only ever requests `Up`, the top floor only ever requests
    /// `Down`, and the direction is never `Idle`.
    pub fn new(floor: Floor, direction: Direction, max_floors: Floor, now: Instant) -> Result<HallCall, DispatchError> {
        if floor >= max_floors {
            return Err(DispatchError::InvalidFloor { floor, max_floors });
        }
        let rejected = !direction.is_committed()
            || (floor == 0 && direction == Direction::Down)
            || (floor == max_floors - 1 && direction == Direction::Up);
        if rejected {
            return Err(DispatchError::InvalidHallCall { floor, direction });
        }
        Ok(HallCall { floor, direction, created_at: now })
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Elapsed time since creation, measured against the real clock.
    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.created_at)
    }

    /// Elapsed time since creation, measured against a caller-supplied
    /// instant. Production code normally wants `age()`; this exists so the
    /// scheduling strategy can be driven deterministically in tests.
    pub fn age_since(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    pub fn has_timed_out_at(&self, now: Instant) -> bool {
        self.age_since(now) >= Duration::from_secs(TIMEOUT_SECONDS)
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_down_call_at_bottom_floor() {
        // Arrange / Act
        let result = HallCall::new(0, Direction::Down, 10, Instant::now());

        // Assert
        assert!(matches!(result, Err(DispatchError::InvalidHallCall { .. })));
    }

    #[test]
    fn rejects_up_call_at_top_floor() {
        let result = HallCall::new(9, Direction::Up, 10, Instant::now());
        assert!(matches!(result, Err(DispatchError::InvalidHallCall { .. })));
    }

    #[test]
    fn rejects_idle_direction() {
        let result = HallCall::new(3, Direction::Idle, 10, Instant::now());
        assert!(matches!(result, Err(DispatchError::InvalidHallCall { .. })));
    }

    #[test]
    fn rejects_out_of_range_floor() {
        let result = HallCall::new(10, Direction::Up, 10, Instant::now());
        assert!(matches!(result, Err(DispatchError::InvalidFloor { .. })));
    }

    #[test]
    fn accepts_valid_call_and_ages_from_creation() {
        let now = Instant::now();
        let call = HallCall::new(3, Direction::Up, 10, now).unwrap();

        assert_eq!(call.floor(), 3);
        assert_eq!(call.direction(), Direction::Up);
        assert!(!call.has_timed_out_at(now));

        let later = now + Duration::from_secs(TIMEOUT_SECONDS);
        assert!(call.has_timed_out_at(later));
    }

    #[test]
    fn age_reads_the_real_clock_since_creation() {
        // Arrange
        let call = HallCall::new(3, Direction::Up, 10, Instant::now()).unwrap();

        // Act: sleep briefly so `age()` has something non-zero to report.
        std::thread::sleep(Duration::from_millis(5));
        let age = call.age();

        // Assert: elapsed time is positive and well under the timeout.
        assert!(age >= Duration::from_millis(5));
        assert!(age < Duration::from_secs(TIMEOUT_SECONDS));
    }

    #[test]
    fn timeout_boundary_is_inclusive() {
        let now = Instant::now();
        let call = HallCall::new(3, Direction::Up, 10, now).unwrap();

        let just_before = now + Duration::from_millis(TIMEOUT_SECONDS * 1000 - 1);
        assert!(!call.has_timed_out_at(just_before));

        let exactly_at = now + Duration::from_secs(TIMEOUT_SECONDS);
        assert!(call.has_timed_out_at(exactly_at));
    }
}
