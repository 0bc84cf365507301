use serde::{Deserialize, Serialize};

/// Bounding box in pixel space of the 640x640 model frame, stored the way
/// the device model emits it: top-left corner plus size.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DetBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl DetBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> f32 {
        self.w
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> f32 {
        self.h
    }

    /// Returns the minimum x-coordinate of the bounding box.
    pub fn x_min(&self) -> f32 {
        self.x
    }

    /// The minimum y-coordinate of the bounding box.
    pub fn y_min(&self) -> f32 {
        self.y
    }

    /// Returns the maximum x-coordinate of the bounding box.
    pub fn x_max(&self) -> f32 {
        self.x + self.w
    }

    /// The maximum y-coordinate of the bounding box.
    pub fn y_max(&self) -> f32 {
        self.y + self.h
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> f32 {
        self.x + self.w / 2.
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> f32 {
        self.y + self.h / 2.
    }

    /// Returns the bounding box coordinates and size as `(x, y, w, h)`.
    pub fn xy_wh(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.w, self.h)
    }

    /// Returns the corner coordinates as `(x1, y1, x2, y2)`.
    pub fn x1y1_x2y2(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.x_max(), self.y_max())
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> f32 {
        self.h * self.w
    }

    /// Computes the intersection area between this bounding box and another.
    pub fn intersect(&self, other: &DetBox) -> f32 {
        let left = self.x.max(other.x);
        let right = self.x_max().min(other.x_max());
        let top = self.y.max(other.y);
        let bottom = self.y_max().min(other.y_max());
        (right - left).max(0.) * (bottom - top).max(0.)
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &DetBox) -> f32 {
        self.area() + other.area() - self.intersect(other)
    }

    pub fn as_xy_wh_i32(&self) -> (i32, i32, i32, i32) {
        (self.x.round() as i32,
         self.y.round() as i32,
         self.w.round() as i32,
         self.h.round() as i32)
    }
}
