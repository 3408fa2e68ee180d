//! Geometric primitives layered over `glam`.
//!
//! `glam` supplies vectors, quaternions and matrices; this module adds the
//! few shapes the camera core needs on top: rays, axis-aligned boxes and
//! spherical coordinates.

mod aabb;
mod ray;
mod spherical;

pub use aabb::Aabb;
pub use ray::Ray;
pub use spherical::Spherical;
