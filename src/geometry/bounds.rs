use glam::Vec3;

/// Axis-aligned bounding box in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Component-wise minimum corner.
    pub min: Vec3,
    /// Component-wise maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Tightest box around `points`, or `None` if the iterator is empty.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: acc.min.min(p),
                max: acc.max.max(p),
            },
        ))
    }

    /// Smallest box enclosing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Largest span along any axis.
    #[must_use]
    pub fn max_extent(&self) -> f32 {
        (self.max - self.min).max_element()
    }
}
