//! Yew components exported for host applications.

pub mod atoms;
