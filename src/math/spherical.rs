use glam::Vec3;

/// Spherical coordinates around the world `+Y` axis.
///
/// `phi` is the polar angle from `+Y`, `theta` the azimuth measured from
/// `+Z` towards `+X`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle in radians, `0` pointing up.
    pub phi: f32,
    /// Azimuthal angle in radians.
    pub theta: f32,
}

impl Spherical {
    /// Decompose a cartesian offset.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    /// Recompose into a cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Clamp the polar angle to `[margin, π − margin]`.
    #[must_use]
    pub fn clamp_phi(self, margin: f32) -> Self {
        let lo = margin.max(0.0);
        let hi = (std::f32::consts::PI - margin).max(lo);
        Self {
            phi: self.phi.clamp(lo, hi),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recompose_matches_input() {
        let v = Vec3::new(3.0, -2.0, 5.0);
        let back = Spherical::from_vec3(v).to_vec3();
        assert!((back - v).length() < 1e-4);
    }

    #[test]
    fn test_axis_conventions() {
        let up = Spherical::from_vec3(Vec3::Y * 2.0);
        assert!(up.phi.abs() < 1e-6);
        let front = Spherical::from_vec3(Vec3::Z);
        assert!((front.phi - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(front.theta.abs() < 1e-6);
    }

    #[test]
    fn test_clamp_phi_keeps_away_from_poles() {
        let s = Spherical {
            radius: 1.0,
            phi: 0.0,
            theta: 0.0,
        }
        .clamp_phi(0.1);
        assert!((s.phi - 0.1).abs() < 1e-6);

        let s = Spherical {
            radius: 1.0,
            phi: 3.2,
            theta: 0.0,
        }
        .clamp_phi(0.1);
        assert!((s.phi - (std::f32::consts::PI - 0.1)).abs() < 1e-6);
    }
}
