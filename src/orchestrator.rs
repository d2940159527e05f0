/**
 * Thin tick-driving loop binding the hall-call queue, the scheduling
 * strategy, and the fleet (spec §2's orchestrator, §5's ordering
 * guarantee). Kept deliberately thin per spec §1: the scheduling logic
 * and the elevator state machine are the core; this module is the glue
 * that calls them in the right order every tick, matching the shape of
 * the teacher's `main.rs` + `coordinator/coordinator.rs` event loop
 * collapsed down to spec §5's single-threaded cooperative model.
 *
 * Per tick, in order:
 *   1. drain every hall call currently sitting in the bounded queue
 *   2. run the strategy against each pending call, in FIFO order
 *   3. advance every elevator by one tick, in ascending `id` order
 *
 * This ordering is observable and the tests below rely on it.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel::Receiver;
use std::time::Instant;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::fleet::Fleet;
use crate::hall_call::HallCall;
use crate::scheduling::SchedulingStrategy;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A hall call still waiting for an elevator, plus whether it has
/// already been logged as having crossed the timeout threshold (so that
/// warning isn't re-emitted every tick it remains pending).
struct Pending {
    call: HallCall,
    warned_timeout: bool,
}

pub struct Orchestrator<S: SchedulingStrategy> {
    fleet: Fleet,
    strategy: S,
    pending: Vec<Pending>,
}

impl<S: SchedulingStrategy> Orchestrator<S> {
    pub fn new(fleet: Fleet, strategy: S) -> Orchestrator<S> {
        Orchestrator { fleet, strategy, pending: Vec::new() }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Runs exactly one simulation tick.
    pub fn tick(&mut self, hall_call_rx: &Receiver<HallCall>, now: Instant) {
        self.drain_queue(hall_call_rx);
        self.dispatch_pending(now);
        self.fleet.tick_all();
    }

    fn drain_queue(&mut self, hall_call_rx: &Receiver<HallCall>) {
        while let Ok(call) = hall_call_rx.try_recv() {
            log::info!("hall call enqueued: floor {} direction {:?}", call.floor(), call.direction());
            self.pending.push(Pending { call, warned_timeout: false });
        }
    }

    fn dispatch_pending(&mut self, now: Instant) {
        let mut still_pending = Vec::with_capacity(self.pending.len());
        for mut entry in self.pending.drain(..) {
            match self.strategy.select_best_elevator(&entry.call, now, self.fleet.elevators()) {
                Some(id) => self.assign_to(id, &entry.call),
                None => {
                    if !entry.warned_timeout && entry.call.has_timed_out_at(now) {
                        // `age()` reads the real wall clock rather than the
                        // deterministic `now` the strategy was driven with,
                        // so the logged age reflects how long this call has
                        // actually been waiting, not just the tick's view of it.
                        log::warn!(
                            "hall call at floor {} direction {:?} has been pending past the timeout (age {:?})",
                            entry.call.floor(),
                            entry.call.direction(),
                            entry.call.age()
                        );
                        entry.warned_timeout = true;
                    }
                    still_pending.push(entry);
                }
            }
        }
        self.pending = still_pending;
    }

    fn assign_to(&mut self, id: crate::elevator::ElevatorId, call: &HallCall) {
        let elevator = self
            .fleet
            .get_mut(id)
            .expect("strategy returned an id not present in the fleet");
        if elevator.can_accept_hall_call(call) {
            elevator.assign(call).expect("assign() rejected a call can_accept_hall_call just accepted");
        } else {
            // Phase 3 fallback (spec §4.2): the strategy picked a car
            // moving the opposite direction once the call timed out,
            // which `can_accept_hall_call` alone would refuse.
            elevator.assign_via_timeout_fallback(call);
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
