use glam::Vec3;

/// Candidate axis remapping from source coordinates to renderer
/// coordinates, for matching an authoring tool by eye.
///
/// Every candidate scales all three components by the same factor; only
/// the axis order and signs differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformCandidate {
    /// `(x, y, z)`
    Identity,
    /// `(x, z, y)`
    SwapYZ,
    /// `(x, −y, z)`
    FlipY,
    /// `(x, y, −z)`
    FlipZ,
    /// `(x, z, −y)`, the usual Z-up to Y-up conversion.
    SwapYZFlipY,
    /// `(x, −z, y)`
    SwapYZFlipZ,
    /// `(z, y, x)`
    SwapXZ,
    /// `(y, x, z)`
    SwapXY,
    /// `(z, −y, x)`
    SwapXZFlipY,
    /// `(y, x, −z)`
    SwapXYFlipZ,
    /// `(−x, −y, −z)`
    FlipAll,
    /// `(x, z, y)`, the same as [`SwapYZ`](Self::SwapYZ). X is not
    /// flipped despite the name; index 11 keeps the established table.
    FlipXSwapYZ,
}

impl TransformCandidate {
    /// Every candidate in cycling order.
    pub const ALL: [Self; 12] = [
        Self::Identity,
        Self::SwapYZ,
        Self::FlipY,
        Self::FlipZ,
        Self::SwapYZFlipY,
        Self::SwapYZFlipZ,
        Self::SwapXZ,
        Self::SwapXY,
        Self::SwapXZFlipY,
        Self::SwapXYFlipZ,
        Self::FlipAll,
        Self::FlipXSwapYZ,
    ];

    /// Remap `v` and scale it.
    #[must_use]
    pub fn apply(self, v: Vec3, scale: f32) -> Vec3 {
        let Vec3 { x, y, z } = v;
        let remapped = match self {
            Self::Identity => Vec3::new(x, y, z),
            Self::SwapYZ | Self::FlipXSwapYZ => Vec3::new(x, z, y),
            Self::FlipY => Vec3::new(x, -y, z),
            Self::FlipZ => Vec3::new(x, y, -z),
            Self::SwapYZFlipY => Vec3::new(x, z, -y),
            Self::SwapYZFlipZ => Vec3::new(x, -z, y),
            Self::SwapXZ => Vec3::new(z, y, x),
            Self::SwapXY => Vec3::new(y, x, z),
            Self::SwapXZFlipY => Vec3::new(z, -y, x),
            Self::SwapXYFlipZ => Vec3::new(y, x, -z),
            Self::FlipAll => Vec3::new(-x, -y, -z),
        };
        remapped * scale
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "no remap",
            Self::SwapYZ => "swap Y/Z",
            Self::FlipY => "flip Y",
            Self::FlipZ => "flip Z",
            Self::SwapYZFlipY => "swap Y/Z, flip Y",
            Self::SwapYZFlipZ => "swap Y/Z, flip Z",
            Self::SwapXZ => "swap X/Z",
            Self::SwapXY => "swap X/Y",
            Self::SwapXZFlipY => "swap X/Z, flip Y",
            Self::SwapXYFlipZ => "swap X/Y, flip Z",
            Self::FlipAll => "flip all",
            Self::FlipXSwapYZ => "flip X, swap Y/Z",
        }
    }
}

/// Cursor over [`TransformCandidate::ALL`] that wraps both ways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformCycler {
    index: usize,
}

impl TransformCycler {
    /// Cursor on the first candidate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position in [`TransformCandidate::ALL`].
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Candidate under the cursor.
    #[must_use]
    pub fn current(&self) -> TransformCandidate {
        TransformCandidate::ALL[self.index]
    }

    /// Step forward, wrapping from the last candidate to the first.
    pub fn advance(&mut self) -> TransformCandidate {
        self.index = (self.index + 1) % TransformCandidate::ALL.len();
        self.current()
    }

    /// Step back, wrapping from the first candidate to the last.
    pub fn retreat(&mut self) -> TransformCandidate {
        let len = TransformCandidate::ALL.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    /// Jump to `index`; out-of-range indices leave the cursor alone.
    pub fn select(&mut self, index: usize) -> Option<TransformCandidate> {
        let candidate = TransformCandidate::ALL.get(index).copied()?;
        self.index = index;
        Some(candidate)
    }
}
