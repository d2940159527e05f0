/**
 * Read-only snapshot the scheduling strategy consumes, and the owning
 * collection the orchestrator advances.
 *
 * Per spec §4.3 the strategy must see a coherent, immutable view of the
 * fleet during its own execution; this crate satisfies that by having
 * the strategy borrow `&[Elevator]` rather than holding any reference
 * into `Fleet` itself. `Fleet` is the orchestrator's exclusive means of
 * mutating elevator state (`assign`, `tick`); nothing else gets a
 * `&mut Elevator`.
 */

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{Elevator, ElevatorId};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Default)]
pub struct Fleet {
    elevators: Vec<Elevator>,
}

impl Fleet {
    /// `elevators` must already be in ascending `id` order; construction
    /// does not sort, matching spec §4.2/§5's requirement for a stable,
    /// `id`-ordered iteration.
    pub fn new(elevators: Vec<Elevator>) -> Fleet {
        Fleet { elevators }
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn get_mut(&mut self, id: ElevatorId) -> Option<&mut Elevator> {
        self.elevators.iter_mut().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.elevators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevators.is_empty()
    }

    /// Advances every elevator by one tick, in ascending `id` order
    /// (spec §5's ordering guarantee).
    pub fn tick_all(&mut self) {
        for e in self.elevators.iter_mut() {
            e.tick();
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_elevators_in_id_order() {
        // Arrange: two idle elevators assigned destinations, so ticking
        // is observable.
        let mut a = Elevator::new(0, 10, 3, 3);
        let mut b = Elevator::new(1, 10, 3, 3);
        a.assign(&crate::hall_call::HallCall::new(1, crate::direction::Direction::Up, 10, std::time::Instant::now()).unwrap()).unwrap();
        b.assign(&crate::hall_call::HallCall::new(1, crate::direction::Direction::Up, 10, std::time::Instant::now()).unwrap()).unwrap();
        let mut fleet = Fleet::new(vec![a, b]);

        // Act
        fleet.tick_all();
        fleet.tick_all();
        fleet.tick_all();

        // Assert: both cars are at floor 1, three ticks (movement_ticks=3)
        // after assignment.
        assert_eq!(fleet.elevators()[0].current_floor(), 1);
        assert_eq!(fleet.elevators()[1].current_floor(), 1);
    }

    #[test]
    fn get_mut_finds_by_id() {
        let fleet_vec = vec![Elevator::new(0, 10, 3, 3), Elevator::new(1, 10, 3, 3)];
        let mut fleet = Fleet::new(fleet_vec);

        assert!(fleet.get_mut(1).is_some());
        assert!(fleet.get_mut(2).is_none());
    }
}
