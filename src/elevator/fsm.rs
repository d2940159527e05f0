/**
 * Per-car state machine: floor, state, direction, destination set, and
 * the door/motion timers that drive movement and loading tick by tick.
 *
 * An `Elevator` is owned exclusively by the orchestrator (see
 * `orchestrator.rs`); the scheduling strategy only ever reads it through
 * a `&[Elevator]` snapshot. All mutation happens through `assign` and
 * `tick`, both of which uphold the invariants spec §3 lists:
 *
 * 1. `state == Idle  <->  destinations == {}`
 * 2. `state == Idle  ->  direction == Idle && motion_counter == 0 && door_counter == 0`
 * 3. `state == Moving -> destinations != {} && direction in {Up, Down}`
 * 4. `state == Loading -> current_floor not in destinations && door_counter > 0`
 * 5. every destination lies on the `direction` side of `current_floor`,
 *    except momentarily while `Loading` is about to flip direction
 * 6. `0 <= current_floor < max_floors`
 *
 * Any violation inside `tick()` is a programming bug, not a routine
 * condition, so it panics with a diagnostic rather than silently
 * correcting state.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::direction::Direction;
use crate::error::DispatchError;
use crate::hall_call::{Floor, HallCall};

/***************************************/
/*       Public data structures        */
/***************************************/
pub type ElevatorId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorState {
    Idle,
    Moving,
    Loading,
}

#[derive(Debug, Clone)]
pub struct Elevator {
    id: ElevatorId,
    max_floors: Floor,
    current_floor: Floor,
    state: ElevatorState,
    direction: Direction,
    destinations: BTreeSet<Floor>,
    movement_ticks: u32,
    door_open_duration: u32,
    motion_counter: u32,
    door_counter: u32,
}

impl Elevator {
    pub fn new(id: ElevatorId, max_floors: Floor, door_open_ticks: u32, movement_ticks: u32) -> Elevator {
        Elevator {
            id,
            max_floors,
            current_floor: 0,
            state: ElevatorState::Idle,
            direction: Direction::Idle,
            destinations: BTreeSet::new(),
            movement_ticks: movement_ticks.max(1),
            door_open_duration: door_open_ticks.max(1),
            motion_counter: 0,
            door_counter: 0,
        }
    }

    /***************************************/
    /*             Accessors               */
    /***************************************/
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn state(&self) -> ElevatorState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn destinations(&self) -> &BTreeSet<Floor> {
        &self.destinations
    }

    pub fn get_destination_count(&self) -> usize {
        self.destinations.len()
    }

    pub fn get_movement_ticks(&self) -> u32 {
        self.movement_ticks
    }

    pub fn get_door_open_duration(&self) -> u32 {
        self.door_open_duration
    }

    /// The extremum of `destinations` in the current direction of travel
    /// (max if `Up`, min if `Down`). `None` iff `destinations` is empty.
    pub fn get_furthest_destination(&self) -> Option<Floor> {
        match self.direction {
            Direction::Up => self.destinations.iter().max().copied(),
            Direction::Down => self.destinations.iter().min().copied(),
            Direction::Idle => None,
        }
    }

    /// Count of destinations strictly between `current_floor` and
    /// `target`, in the direction of `target` from `current_floor`.
    /// `target` itself is never counted.
    pub fn get_intermediate_stops_count(&self, target: Floor) -> u32 {
        if target > self.current_floor {
            self.destinations
                .iter()
                .filter(|&&f| f > self.current_floor && f < target)
                .count() as u32
        } else if target < self.current_floor {
            self.destinations
                .iter()
                .filter(|&&f| f < self.current_floor && f > target)
                .count() as u32
        } else {
            0
        }
    }

    /***************************************/
    /*             Public API              */
    /***************************************/

    /// Returns true iff this car may serve `call` directly (without the
    /// opposite-direction timeout fallback handled by the strategy).
    pub fn can_accept_hall_call(&self, call: &HallCall) -> bool {
        match self.state {
            ElevatorState::Idle => true,
            ElevatorState::Moving | ElevatorState::Loading => {
                if self.direction != call.direction() {
                    return false;
                }
                match call.direction() {
                    Direction::Up => {
                        call.floor() > self.current_floor
                            || (call.floor() == self.current_floor && self.state == ElevatorState::Loading)
                    }
                    Direction::Down => {
                        call.floor() < self.current_floor
                            || (call.floor() == self.current_floor && self.state == ElevatorState::Loading)
                    }
                    Direction::Idle => false,
                }
            }
        }
    }

    /// Commits `call` to this car's route. Precondition:
    /// `can_accept_hall_call(call)`; violating it is a programming bug
    /// and returns `AssignWithoutAcceptance` rather than silently
    /// correcting the destination set.
    pub fn assign(&mut self, call: &HallCall) -> Result<(), DispatchError> {
        if !self.can_accept_hall_call(call) {
            return Err(DispatchError::AssignWithoutAcceptance { elevator_id: self.id });
        }
        self.commit(call);
        Ok(())
    }

    /// Commits `call` to this car's route without requiring
    /// `can_accept_hall_call`. This is the path the orchestrator uses for
    /// the opposite-direction timeout fallback (spec §4.2 Phase 3), where
    /// the strategy has deliberately chosen a car that would otherwise
    /// refuse the call. Destinations on the other side of `current_floor`
    /// become the new committed route once the car finishes its present
    /// direction and `tick`'s door-close logic re-evaluates `direction`.
    pub fn assign_via_timeout_fallback(&mut self, call: &HallCall) {
        self.commit(call);
    }

    fn commit(&mut self, call: &HallCall) {
        // A same-floor call while already Loading is served by the door
        // that's open right now; there's nothing new to commit to.
        if self.state == ElevatorState::Loading && call.floor() == self.current_floor {
            log::debug!(
                "elevator {}: call at floor {} folded into in-progress loading",
                self.id,
                call.floor()
            );
            return;
        }

        self.destinations.insert(call.floor());

        if self.state == ElevatorState::Idle {
            match Direction::towards(self.current_floor, call.floor()) {
                Direction::Idle => {
                    // Perfect match: we're already at the requested floor.
                    self.destinations.remove(&call.floor());
                    self.state = ElevatorState::Loading;
                    self.door_counter = self.door_open_duration;
                    log::debug!("elevator {}: perfect match at floor {}", self.id, call.floor());
                }
                heading => {
                    self.direction = heading;
                    self.state = ElevatorState::Moving;
                    self.motion_counter = 0;
                    log::debug!(
                        "elevator {}: assigned floor {}, now heading {:?}",
                        self.id,
                        call.floor(),
                        heading
                    );
                }
            }
        }
    }

    /// Advances the car by one simulation tick, per the state-transition
    /// table in spec §4.1.
    pub fn tick(&mut self) {
        match self.state {
            ElevatorState::Idle => {
                if !self.destinations.is_empty() {
                    panic!("elevator {}: Idle with non-empty destinations — invariant broken", self.id);
                }
            }
            ElevatorState::Moving => self.tick_moving(),
            ElevatorState::Loading => self.tick_loading(),
        }
    }

    /***************************************/
    /*          Private helpers            */
    /***************************************/

    fn tick_moving(&mut self) {
        if self.destinations.is_empty() || !self.direction.is_committed() {
            panic!(
                "elevator {}: Moving with destinations={:?} direction={:?} — invariant broken",
                self.id, self.destinations, self.direction
            );
        }

        if self.motion_counter < self.movement_ticks - 1 {
            self.motion_counter += 1;
            return;
        }

        // The move completes this tick.
        let next_floor = match self.direction {
            Direction::Up => self.current_floor + 1,
            Direction::Down => self
                .current_floor
                .checked_sub(1)
                .unwrap_or_else(|| panic!("elevator {}: moving Down past floor 0", self.id)),
            Direction::Idle => unreachable!("Moving elevator always has a committed direction"),
        };
        if next_floor >= self.max_floors {
            panic!("elevator {}: move to floor {} is out of range", self.id, next_floor);
        }

        self.current_floor = next_floor;
        self.motion_counter = 0;

        if self.destinations.remove(&next_floor) {
            self.state = ElevatorState::Loading;
            self.door_counter = self.door_open_duration;
            log::debug!("elevator {}: arrived at floor {}, doors open", self.id, next_floor);
        }
    }

    fn tick_loading(&mut self) {
        if self.door_counter == 0 {
            panic!("elevator {}: Loading with door_counter == 0 — invariant broken", self.id);
        }

        if self.door_counter > 1 {
            self.door_counter -= 1;
            return;
        }

        // Doors close this tick.
        self.door_counter = 0;
        if self.destinations.is_empty() {
            self.state = ElevatorState::Idle;
            self.direction = Direction::Idle;
            log::debug!("elevator {}: no further destinations, going Idle", self.id);
        } else {
            self.direction = self.next_direction();
            self.state = ElevatorState::Moving;
            log::debug!("elevator {}: doors closed, now heading {:?}", self.id, self.direction);
        }
    }

    /// Tie-break rule: continue in the current direction first if any
    /// destination remains on that side; otherwise flip. If the car never
    /// had a committed heading (it perfect-matched straight into
    /// Loading), derive one from the nearest remaining destination.
    fn next_direction(&self) -> Direction {
        match self.direction {
            Direction::Up if self.destinations.iter().any(|&f| f > self.current_floor) => Direction::Up,
            Direction::Down if self.destinations.iter().any(|&f| f < self.current_floor) => Direction::Down,
            Direction::Up | Direction::Down => self.direction.opposite(),
            Direction::Idle => {
                let nearest = *self
                    .destinations
                    .iter()
                    .min_by_key(|&&f| (f as i64 - self.current_floor as i64).abs())
                    .expect("next_direction called with empty destinations");
                Direction::towards(self.current_floor, nearest)
            }
        }
    }
}
