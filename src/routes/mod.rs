//! Route definitions for the Fast Cinema dashboard.

pub mod dashboard;
