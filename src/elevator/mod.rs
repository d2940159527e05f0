pub mod fsm;


pub use fsm::{Elevator, ElevatorId, ElevatorState};
