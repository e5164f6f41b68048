//! Static level tiles and cameras.  Neither category is ever removed from
//! during a frame.

use meadow_core::{SpriteId, Transform};

/// Floor and wall tiles handed to the renderer.
#[derive(Clone, Debug, Default)]
pub struct TileTable {
    pub sprite:    Vec<SpriteId>,
    pub transform: Vec<Transform>,
}

impl TileTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.transform.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transform.is_empty()
    }

    pub fn push(&mut self, sprite: SpriteId, transform: Transform) -> usize {
        self.sprite.push(sprite);
        self.transform.push(transform);
        self.len() - 1
    }

    pub fn clear(&mut self) {
        self.sprite.clear();
        self.transform.clear();
    }
}

/// Projection scale of one camera.  The projection itself is done by the
/// renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub pixels_per_unit: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pixels_per_unit: 32.0 }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CameraTable {
    pub transform: Vec<Transform>,
    pub camera:    Vec<Camera>,
}

impl CameraTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.transform.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transform.is_empty()
    }

    pub fn push(&mut self, transform: Transform, camera: Camera) -> usize {
        self.transform.push(transform);
        self.camera.push(camera);
        self.len() - 1
    }

    /// Center camera `row` on `(x, y)`.  Unknown rows are ignored.
    pub fn center_on(&mut self, row: usize, x: f64, y: f64) {
        if let Some(t) = self.transform.get_mut(row) {
            t.x = x;
            t.y = y;
        }
    }
}
