/**
 * Direction-aware hall-call scheduling: a pure function from a call and
 * a fleet snapshot to the elevator that should serve it.
 *
 * Three phases run in order, first match wins:
 *
 *   1. Perfect match  — an Idle car already sitting at the call's floor.
 *   2. Normal pick    — the lowest-cost car among those whose
 *                        `can_accept_hall_call` says yes.
 *   3. Timeout fallback — once the call has aged past `TIMEOUT_SECONDS`,
 *                          consider cars moving the opposite direction,
 *                          which `can_accept_hall_call` alone refuses.
 *
 * Cost is "tick-equivalents": a saturating `u64` where `u64::MAX` stands
 * in for the spec's `∞` sentinel (an elevator moving away from the call
 * with no route that could ever reach it). All tie-breaks favor the
 * lowest elevator `id`, which is why every fold below compares `<` on
 * cost first and `id` second.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::time::Instant;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::direction::Direction;
use crate::elevator::{Elevator, ElevatorId, ElevatorState};
use crate::hall_call::{Floor, HallCall};

/***************************************/
/*       Public data structures        */
/***************************************/

/// Tick-equivalents charged per already-committed destination, biasing
/// the strategy away from busy cars even when their geometric cost is
/// low.
pub const LOAD_PENALTY_PER_STOP: u64 = 2;

/// Tick-equivalents charged on top of a Phase 3 pick, strongly
/// discouraging hijacking a car mid-run; only ever added once a normal
/// candidate search has already failed and the call has timed out.
pub const OPPOSITE_DIRECTION_PENALTY: u64 = 500;

const INFINITE_COST: u64 = u64::MAX;

pub trait SchedulingStrategy {
    /// Selects the elevator that should serve `call`, or `None` if the
    /// call should remain pending. `now` stands in for the injected time
    /// source (spec §9's Design Notes): production passes
    /// `Instant::now()`, tests pass a fixed instant so Phase 3's timeout
    /// check is deterministic.
    fn select_best_elevator(&self, call: &HallCall, now: Instant, fleet: &[Elevator]) -> Option<ElevatorId>;
}

/// The scheduling strategy described by spec §4.2.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStrategy;

impl DefaultStrategy {
    pub fn new() -> DefaultStrategy {
        DefaultStrategy
    }
}

impl SchedulingStrategy for DefaultStrategy {
    fn select_best_elevator(&self, call: &HallCall, now: Instant, fleet: &[Elevator]) -> Option<ElevatorId> {
        if let Some(id) = perfect_match(call, fleet) {
            return Some(id);
        }
        if let Some(id) = cheapest_by(fleet.iter().filter(|e| e.can_accept_hall_call(call)), |e| time_cost(call, e)) {
            return Some(id);
        }
        if call.has_timed_out_at(now) {
            return cheapest_by(fleet.iter().filter(|e| is_opposite_direction_candidate(call, e)), |e| {
                opposite_direction_cost(call, e)
            });
        }
        None
    }
}

/***************************************/
/*             Phase logic             */
/***************************************/

/// Phase 1: the first (by iteration order — fleets are id-ordered) Idle
/// car already sitting at the call's floor.
fn perfect_match(call: &HallCall, fleet: &[Elevator]) -> Option<ElevatorId> {
    fleet
        .iter()
        .find(|e| e.state() == ElevatorState::Idle && e.current_floor() == call.floor())
        .map(|e| e.id())
}

/// Phase 3's filter: moving, with a committed heading that isn't the
/// call's direction. `direction().is_committed()` makes the `Idle`
/// exclusion explicit even though a `Moving` car can never actually have
/// `direction == Idle` (invariant 3) — kept as defensive documentation,
/// per spec §9's Design Notes.
fn is_opposite_direction_candidate(call: &HallCall, e: &Elevator) -> bool {
    e.state() == ElevatorState::Moving && e.direction().is_committed() && e.direction() != call.direction()
}

/// Folds an iterator of candidates down to the one with lowest cost,
/// breaking ties by lowest `id`.
fn cheapest_by<'a, I, F>(candidates: I, mut cost_fn: F) -> Option<ElevatorId>
where
    I: Iterator<Item = &'a Elevator>,
    F: FnMut(&Elevator) -> u64,
{
    let mut best: Option<(ElevatorId, u64)> = None;
    for e in candidates {
        let cost = cost_fn(e);
        best = Some(match best {
            None => (e.id(), cost),
            Some((best_id, best_cost)) => {
                if cost < best_cost || (cost == best_cost && e.id() < best_id) {
                    (e.id(), cost)
                } else {
                    (best_id, best_cost)
                }
            }
        });
    }
    best.map(|(id, _)| id)
}

/***************************************/
/*             Cost model              */
/***************************************/

fn time_cost(call: &HallCall, e: &Elevator) -> u64 {
    let base = if e.state() == ElevatorState::Idle {
        distance(e.current_floor(), call.floor()) * e.get_movement_ticks() as u64
    } else if e.direction() == call.direction() {
        same_direction_cost(call, e)
    } else {
        INFINITE_COST
    };
    saturating_add(base, load_penalty(e))
}

fn same_direction_cost(call: &HallCall, e: &Elevator) -> u64 {
    let furthest = match e.get_furthest_destination() {
        None => return distance(e.current_floor(), call.floor()) * e.get_movement_ticks() as u64,
        Some(f) => f,
    };

    if on_route(e, furthest, call.floor(), call.direction()) {
        let travel = distance(e.current_floor(), call.floor()) * e.get_movement_ticks() as u64;
        let stops = e.get_intermediate_stops_count(call.floor()) as u64 * e.get_door_open_duration() as u64;
        travel + stops
    } else {
        route_extension(e, furthest, call.floor())
    }
}

/// True iff `target` lies strictly between `current` and `furthest`, in
/// `direction`.
fn on_route(e: &Elevator, furthest: Floor, target: Floor, direction: Direction) -> bool {
    match direction {
        Direction::Up => e.current_floor() < target && target <= furthest,
        Direction::Down => e.current_floor() > target && target >= furthest,
        Direction::Idle => false,
    }
}

/// Cost of finishing the committed run out to `furthest` (with its
/// intermediate stops), then traversing from `furthest` to `target` with
/// no further stops on that leg.
fn route_extension(e: &Elevator, furthest: Floor, target: Floor) -> u64 {
    let m = e.get_movement_ticks() as u64;
    let to_furthest = distance(e.current_floor(), furthest) * m;
    let stops = e.get_intermediate_stops_count(furthest) as u64 * e.get_door_open_duration() as u64;
    let beyond = distance(furthest, target) * m;
    saturating_add(saturating_add(to_furthest, stops), beyond)
}

fn opposite_direction_cost(call: &HallCall, e: &Elevator) -> u64 {
    match e.get_furthest_destination() {
        None => INFINITE_COST,
        Some(furthest) => {
            let ext = route_extension(e, furthest, call.floor());
            saturating_add(saturating_add(ext, load_penalty(e)), OPPOSITE_DIRECTION_PENALTY)
        }
    }
}

fn load_penalty(e: &Elevator) -> u64 {
    e.get_destination_count() as u64 * LOAD_PENALTY_PER_STOP
}

fn distance(a: Floor, b: Floor) -> u64 {
    a.abs_diff(b) as u64
}

fn saturating_add(a: u64, b: u64) -> u64 {
    a.saturating_add(b)
}

/***************************************/
/*             Unit tests              */
/***************************************/
