/**
 * Demo hall-call producer, standing in for a real building's call
 * buttons. Not part of the core's scheduling/FSM budget (spec §1 lists
 * "the random-request generator used for simulation" as an external
 * collaborator) — this crate ships one anyway so the binary has
 * something to dispatch, the way the teacher's own `main.rs` wires a
 * hardware driver thread as the producer for its elevator FSM.
 *
 * Arrival-generation-with-`rand` is grounded on the pack's own elevator
 * simulators (`other_examples/*-elevator-optimization`,
 * `*-elevator-simulation`), both of which randomize passenger arrivals
 * rather than hand-rolling an RNG.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel::Sender;
use rand::Rng;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::direction::Direction;
use crate::hall_call::{Floor, HallCall};
use std::thread;
use std::time::{Duration, Instant};

/***************************************/
/*       Public data structures        */
/***************************************/
pub struct RequestGenerator {
    max_floors: Floor,
    interval: Duration,
}

impl RequestGenerator {
    pub fn new(max_floors: Floor, request_interval_seconds: u64) -> RequestGenerator {
        RequestGenerator {
            max_floors,
            interval: Duration::from_secs(request_interval_seconds),
        }
    }

    /// Runs forever on the calling thread, pushing one random valid hall
    /// call onto `tx` every `RequestIntervalSeconds`. Exits cleanly once
    /// the receiving end is dropped (orchestrator shutdown).
    pub fn run(&self, tx: Sender<HallCall>) {
        loop {
            thread::sleep(self.interval);
            let call = self.random_hall_call();
            log::info!("generator: new hall call floor {} direction {:?}", call.floor(), call.direction());
            if tx.send(call).is_err() {
                log::debug!("generator: receiver dropped, stopping");
                return;
            }
        }
    }

    /// Floor 0 can only ever request `Up` and the top floor only ever
    /// `Down` (spec §3); rather than special-casing those floors here,
    /// retry until `HallCall::new` accepts the combination.
    fn random_hall_call(&self) -> HallCall {
        let mut rng = rand::thread_rng();
        loop {
            let floor = rng.gen_range(0..self.max_floors);
            let direction = if rng.gen_bool(0.5) { Direction::Up } else { Direction::Down };
            if let Ok(call) = HallCall::new(floor, direction, self.max_floors, Instant::now()) {
                return call;
            }
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
