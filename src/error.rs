/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::direction::Direction;
use crate::elevator::ElevatorId;
use crate::hall_call::Floor;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Error taxonomy for the dispatch core.
///
/// `NoElevatorAvailable` from spec is deliberately *not* a variant here:
/// the strategy represents "no candidate" as `Option::None`, not as an
/// error, since a pending call is a routine condition, not a bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("floor {floor} is outside the serviceable range [0, {max_floors})")]
    InvalidFloor { floor: Floor, max_floors: Floor },

    #[error("hall call at floor {floor} cannot request direction {direction:?}")]
    InvalidHallCall { floor: Floor, direction: Direction },

    #[error("assign() called on elevator {elevator_id} without canAcceptHallCall() passing first")]
    AssignWithoutAcceptance { elevator_id: ElevatorId },

    #[error("configuration error: {0}")]
    InvalidConfig(String),
}
