/*
 * End-to-end tests of `DefaultStrategy::select_best_elevator` against
 * the concrete scenarios in spec §8.
 *
 * Tests:
 * - test_perfect_match_picks_lowest_id_idle_car_at_the_floor
 * - test_opposite_direction_rejected_without_timeout
 * - test_opposite_direction_accepted_past_timeout
 * - test_equal_cost_tie_break_picks_lowest_id
 * - test_no_candidates_returns_none
 * - test_phase3_never_fires_before_timeout_even_with_no_phase2_candidate
 */

use super::strategy::{DefaultStrategy, SchedulingStrategy};
use crate::direction::Direction;
use crate::elevator::{Elevator, ElevatorState};
use crate::hall_call::{HallCall, TIMEOUT_SECONDS};
use std::time::{Duration, Instant};

fn call_at(now: Instant, floor: u32, direction: Direction) -> HallCall {
    HallCall::new(floor, direction, 10, now).unwrap()
}

/// Builds an elevator that climbed to `peak_floor`, turned around with a
/// Down destination of `remaining_destination`, and is now sitting at
/// `at_floor` mid-descent — i.e. `state == Moving`, `direction == Down`.
/// Elevators can only pick up their initial heading from `Idle`, and a
/// fresh elevator starts at floor 0, so reaching `Moving Down` requires
/// climbing first and reversing at the top.
fn elevator_moving_down(movement_ticks: u32, door_open: u32, peak_floor: u32, at_floor: u32, remaining_destination: u32) -> Elevator {
    let now = Instant::now();
    let mut e = Elevator::new(0, 10, door_open, movement_ticks);
    e.assign(&call_at(now, peak_floor, Direction::Up)).unwrap();
    let climb_ticks = movement_ticks as u64 * peak_floor as u64 + door_open as u64;
    for _ in 0..climb_ticks {
        e.tick();
    }
    assert_eq!(e.state(), ElevatorState::Idle, "elevator should have gone Idle at the peak");

    e.assign(&call_at(now, remaining_destination, Direction::Down)).unwrap();
    let descend_ticks = movement_ticks as u64 * (peak_floor - at_floor) as u64;
    for _ in 0..descend_ticks {
        e.tick();
    }
    assert_eq!(e.current_floor(), at_floor);
    assert_eq!(e.state(), ElevatorState::Moving);
    assert_eq!(e.direction(), Direction::Down);
    e
}

#[test]
fn test_perfect_match_picks_lowest_id_idle_car_at_the_floor() {
    // Arrange: two Idle elevators both sitting at floor 0 (spec S1).
    let now = Instant::now();
    let a = Elevator::new(0, 10, 3, 3);
    let b = Elevator::new(1, 10, 3, 3);
    let fleet = vec![a, b];
    let call = call_at(now, 0, Direction::Up);

    // Act
    let chosen = DefaultStrategy::new().select_best_elevator(&call, now, &fleet);

    // Assert: elevator 0, the lower id, wins.
    assert_eq!(chosen, Some(0));
}

#[test]
fn test_opposite_direction_rejected_without_timeout() {
    // Arrange: one elevator at floor 5 Moving Down (spec S4).
    let e = elevator_moving_down(3, 3, 9, 5, 2);
    let fleet = vec![e];
    let call = call_at(Instant::now(), 7, Direction::Up);
    let young = Instant::now() + Duration::from_secs(2);

    // Act
    let chosen = DefaultStrategy::new().select_best_elevator(&call, young, &fleet);

    // Assert: no candidate, call stays pending.
    assert_eq!(chosen, None);
}

#[test]
fn test_opposite_direction_accepted_past_timeout() {
    // Arrange: same geometry as S4, but the call has aged past
    // TIMEOUT_SECONDS (spec S5).
    let now = Instant::now();
    let e = elevator_moving_down(3, 3, 9, 5, 2);
    let fleet = vec![e];
    let call = call_at(now, 7, Direction::Up);
    let timed_out = now + Duration::from_secs(TIMEOUT_SECONDS + 1);

    // Act
    let chosen = DefaultStrategy::new().select_best_elevator(&call, timed_out, &fleet);

    // Assert: the opposite-direction car is returned despite the penalty.
    assert_eq!(chosen, Some(0));
}

#[test]
fn test_equal_cost_tie_break_picks_lowest_id() {
    // Arrange: two Idle elevators at floor 0, call at floor 5 (spec S6).
    let now = Instant::now();
    let fleet = vec![Elevator::new(3, 10, 3, 3), Elevator::new(1, 10, 3, 3)];
    let call = call_at(now, 5, Direction::Up);

    // Act
    let chosen = DefaultStrategy::new().select_best_elevator(&call, now, &fleet);

    // Assert: equal geometric cost (5 * movement_ticks for both), id 1 wins.
    assert_eq!(chosen, Some(1));
}

#[test]
fn test_no_candidates_returns_none() {
    // Arrange: single elevator Moving Down away from an Up call, not yet
    // timed out — none of the three phases match.
    let now = Instant::now();
    let e = elevator_moving_down(3, 3, 9, 8, 2);
    let fleet = vec![e];
    let call = call_at(now, 9, Direction::Up);

    let chosen = DefaultStrategy::new().select_best_elevator(&call, now, &fleet);

    assert_eq!(chosen, None);
}

#[test]
fn test_phase3_never_fires_before_timeout_even_with_no_phase2_candidate() {
    let now = Instant::now();
    let e = elevator_moving_down(3, 3, 9, 5, 2);
    let fleet = vec![e];
    let call = call_at(now, 7, Direction::Up);

    let just_before_timeout = now + Duration::from_millis(TIMEOUT_SECONDS * 1000 - 1);
    let chosen = DefaultStrategy::new().select_best_elevator(&call, just_before_timeout, &fleet);

    assert_eq!(chosen, None);
}
