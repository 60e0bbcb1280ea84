use crate::types::{BoundingRect, Corners, DetectedObject, Point, Size};

/// Geometry of one retained rectangle before it has a rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub rect: BoundingRect,
    pub center: Point,
    pub corners: Corners,
}

impl Measurement {
    /// Assign the final 1-based rank
    pub fn ranked(self, number: usize) -> DetectedObject {
        DetectedObject {
            number,
            position: Point::new(self.rect.x, self.rect.y),
            size: Size {
                width: self.rect.width,
                height: self.rect.height,
            },
            center: self.center,
            corners: self.corners,
        }
    }
}

/// Center and corners of a rectangle. Odd sizes round the center towards the top-left.
pub fn measure(rect: BoundingRect) -> Measurement {
    let center = Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2);
    let corners = Corners {
        top_left: Point::new(rect.x, rect.y),
        top_right: Point::new(rect.right(), rect.y),
        bottom_left: Point::new(rect.x, rect.bottom()),
        bottom_right: Point::new(rect.right(), rect.bottom()),
    };

    Measurement { rect, center, corners }
}
