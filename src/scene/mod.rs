//! Scene-side capabilities the camera core depends on.
//!
//! The navigation engine never walks a scene graph itself; it asks a
//! [`SceneIntersect`] implementor for the nearest ray hit and, for fit and
//! clip-plane operations, for the model bounds. [`Scene`] is a small
//! self-contained implementation over primitive shapes, good enough for
//! headless use and tests; renderer back ends implement the trait over
//! their own scene graph.

mod shape;

use glam::Vec3;

pub use shape::Shape;

use crate::math::{Aabb, Ray};

/// Nearest intersection reported by a ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space hit point.
    pub point: Vec3,
    /// Distance along the ray.
    pub distance: f32,
}

/// Ray queries against whatever the viewer is currently displaying.
pub trait SceneIntersect {
    /// Nearest hit in front of the ray origin, if any.
    fn intersect_ray(&self, ray: &Ray) -> Option<RayHit>;

    /// Bounds of the loaded model, if one is loaded.
    fn bounding_box(&self) -> Option<Aabb> {
        None
    }
}

/// Scene with nothing in it: every ray misses.
impl SceneIntersect for () {
    fn intersect_ray(&self, _ray: &Ray) -> Option<RayHit> {
        None
    }
}

/// Named shape inside a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Display name, used only for logging.
    pub name: String,
    /// Geometry in world space.
    pub shape: Shape,
    /// Hidden nodes are skipped by ray casts but still count towards bounds.
    pub visible: bool,
}

/// Flat list of primitive shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible node and return its index.
    pub fn add(&mut self, name: impl Into<String>, shape: Shape) -> usize {
        self.nodes.push(SceneNode {
            name: name.into(),
            shape,
            visible: true,
        });
        self.nodes.len() - 1
    }

    /// Builder-style [`add`](Self::add).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, shape: Shape) -> Self {
        let _ = self.add(name, shape);
        self
    }

    /// All nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Toggle ray-cast visibility of a node. Out-of-range indices are
    /// ignored.
    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.visible = visible;
        }
    }

    /// Whether the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SceneIntersect for Scene {
    fn intersect_ray(&self, ray: &Ray) -> Option<RayHit> {
        let (node, distance) = self
            .nodes
            .iter()
            .filter(|node| node.visible)
            .filter_map(|node| {
                node.shape.intersect(ray).map(|t| (node, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))?;
        log::debug!("ray hit '{}' at distance {distance}", node.name);
        Some(RayHit {
            point: ray.at(distance),
            distance,
        })
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.nodes
            .iter()
            .filter_map(|node| node.shape.bounds())
            .reduce(Aabb::union)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_spheres() -> Scene {
        Scene::new()
            .with(
                "far",
                Shape::Sphere {
                    center: Vec3::new(0.0, 0.0, -10.0),
                    radius: 1.0,
                },
            )
            .with(
                "near",
                Shape::Sphere {
                    center: Vec3::new(0.0, 0.0, -4.0),
                    radius: 1.0,
                },
            )
    }

    #[test]
    fn nearest_hit_wins_regardless_of_order() {
        let scene = two_spheres();
        let hit = scene
            .intersect_ray(&Ray::new(Vec3::ZERO, Vec3::NEG_Z))
            .unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-4);
        assert!((hit.point - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-4);
    }

    #[test]
    fn hidden_nodes_are_skipped() {
        let mut scene = two_spheres();
        scene.set_visible(1, false);
        let hit = scene
            .intersect_ray(&Ray::new(Vec3::ZERO, Vec3::NEG_Z))
            .unwrap();
        assert!((hit.distance - 9.0).abs() < 1e-4);
    }

    #[test]
    fn miss_returns_none() {
        let scene = two_spheres();
        assert!(scene
            .intersect_ray(&Ray::new(Vec3::ZERO, Vec3::Z))
            .is_none());
        assert!(().intersect_ray(&Ray::new(Vec3::ZERO, Vec3::Z)).is_none());
    }

    #[test]
    fn bounds_cover_every_node() {
        let bounds = two_spheres().bounding_box().unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -1.0, -11.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 1.0, -3.0));
        assert!(Scene::new().bounding_box().is_none());
    }
}
