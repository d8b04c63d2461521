/*!
rigid3d
========

**rigid3d** is a real-time 3-dimensional rigid-body simulation library written
with the rust programming language.

It advances a set of rigid bodies under gravity, generates contacts between
spheres and triangle meshes, and resolves velocities with an iterative
impulse-based solver shared by joints and contacts.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![warn(unused_qualifications)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod dynamics;
pub mod mass_properties;
pub mod math;
pub mod partitioning;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;
