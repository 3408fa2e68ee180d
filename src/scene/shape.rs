use glam::Vec3;

use crate::math::{Aabb, Ray};

/// Primitive geometry a [`Scene`](super::Scene) can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Solid sphere.
    Sphere {
        /// Center point.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
    /// Solid axis-aligned box.
    Box(Aabb),
    /// Indexed triangle mesh.
    Mesh {
        /// Vertex positions.
        vertices: Vec<Vec3>,
        /// Triangle corner indices, three per triangle.
        indices: Vec<u32>,
    },
}

impl Shape {
    /// Distance to the nearest hit along `ray`.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Self::Sphere { center, radius } => {
                ray.intersect_sphere(*center, *radius)
            }
            Self::Box(aabb) => ray.intersect_box(aabb.min, aabb.max),
            Self::Mesh { vertices, indices } => indices
                .chunks_exact(3)
                .filter_map(|tri| {
                    let a = vertices.get(tri[0] as usize)?;
                    let b = vertices.get(tri[1] as usize)?;
                    let c = vertices.get(tri[2] as usize)?;
                    ray.intersect_triangle(*a, *b, *c)
                })
                .min_by(f32::total_cmp),
        }
    }

    /// World-space bounds; `None` for a mesh without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Self::Sphere { center, radius } => Some(Aabb::new(
                *center - Vec3::splat(*radius),
                *center + Vec3::splat(*radius),
            )),
            Self::Box(aabb) => Some(*aabb),
            Self::Mesh { vertices, .. } => Aabb::from_points(vertices),
        }
    }
}
