use serde::{Deserialize, Serialize};

/// A face bounding box as recorded by the detector: `[x1, y1, x2, y2]`.
///
/// Corners are inclusive pixel coordinates. The artifact format does not
/// guarantee `x1 < x2` or `y1 < y2`, so drawing goes through
/// [`FaceBox::normalized`] while the recorded corners are kept verbatim
/// for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct FaceBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl FaceBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Same box with corners reordered so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// True when the recorded corners are not strictly ordered.
    pub fn is_inverted(&self) -> bool {
        self.x1 >= self.x2 || self.y1 >= self.y2
    }

    /// Inclusive pixel width of the normalized box.
    pub fn width(&self) -> u64 {
        let n = self.normalized();
        (i64::from(n.x2) - i64::from(n.x1) + 1) as u64
    }

    /// Inclusive pixel height of the normalized box.
    pub fn height(&self) -> u64 {
        let n = self.normalized();
        (i64::from(n.y2) - i64::from(n.y1) + 1) as u64
    }

    pub fn as_array(&self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl From<[i32; 4]> for FaceBox {
    fn from([x1, y1, x2, y2]: [i32; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<FaceBox> for [i32; 4] {
    fn from(b: FaceBox) -> Self {
        b.as_array()
    }
}

impl std::fmt::Display for FaceBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x1, self.y1, self.x2, self.y2)
    }
}
