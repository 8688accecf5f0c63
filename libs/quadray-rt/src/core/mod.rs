//! Core data structures of the coordinate algebra.
//!
//! Includes the Cartesian vector alias (`Vec3`), the immutable axis table and
//! the `Quadray` coordinate type.

pub mod basis;
pub mod quadray;
pub mod vec3;
