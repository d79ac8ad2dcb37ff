//! Core domain types for starlog

mod equipment;
mod observation;

pub use equipment::Equipment;
pub use observation::{Location, ObjectCategory, ObservationRecord, ObservedObject};
