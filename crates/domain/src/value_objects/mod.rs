//! Value objects - validated building blocks of domain entities

mod names;
mod threshold;

pub use names::ItemName;
pub use threshold::Threshold;
