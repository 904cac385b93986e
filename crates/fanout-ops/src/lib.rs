//! Distribution engine for fanout.
//!
//! This crate turns the two scan results into work and performs it: the
//! round-robin plan mapping each destination folder to a source file, and
//! the copy collaborator that places one file inside one folder. Copies run
//! sequentially; a failed pair is recorded in the run report and never
//! stops the pairs after it.

mod copy;
mod distribute;

pub use copy::{Copier, CopyError, SystemCopier};
pub use distribute::{
    Assignment, CopyFailure, DistributeError, DistributionReport, Distributor, plan,
};
