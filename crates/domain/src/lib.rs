//! Domain value objects for governance access rules.

#![forbid(unsafe_code)]

mod approval;
mod duration;
mod target;

pub use approval::ApprovalPolicy;
pub use duration::MaxDuration;
pub use target::{TargetArguments, TargetConstraint};
