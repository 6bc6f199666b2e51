//! Smart contract bindings.

pub mod stall_swap;

pub use stall_swap::IStallSwap;
