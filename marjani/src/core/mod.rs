//! Core value types shared by every component.

mod coord;
mod direction;

pub use coord::RelativeCoordinate;
pub use direction::Direction;
