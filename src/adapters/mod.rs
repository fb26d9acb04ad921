//! Adapter implementations of the tracker's storage ports.

pub mod csv;
