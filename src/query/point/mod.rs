//! Projection of points on shapes.
//!
//! Points are expressed in the local frame of the shape they are projected on.

mod point_segment;
mod point_triangle;
