use crate::{
    algorithms::measure::Measurement,
    types::{DetectedObject, Distances, ImageSize},
};

/// Union extent of all boxes as (min_x, min_y, max_x, max_y), max edges exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

/// Stable sort by ascending `center.x`, then number 1..N in that order.
pub fn rank_by_center_x(mut measurements: Vec<Measurement>) -> Vec<DetectedObject> {
    // `sort_by_key` is stable: equal centers keep discovery order
    measurements.sort_by_key(|m| m.center.x);
    measurements
        .into_iter()
        .enumerate()
        .map(|(index, m)| m.ranked(index + 1))
        .collect()
}

/// `None` when there are no objects
pub fn union_extent(objects: &[DetectedObject]) -> Option<Extent> {
    objects.iter().map(DetectedObject::bounding_rect).fold(None, |extent, rect| {
        Some(match extent {
            None => Extent {
                min_x: rect.x,
                min_y: rect.y,
                max_x: rect.right(),
                max_y: rect.bottom(),
            },
            Some(e) => Extent {
                min_x: e.min_x.min(rect.x),
                min_y: e.min_y.min(rect.y),
                max_x: e.max_x.max(rect.right()),
                max_y: e.max_y.max(rect.bottom()),
            },
        })
    })
}

/// Edge gaps around the union extent; all zero when nothing was detected
pub fn edge_distances(objects: &[DetectedObject], image_size: ImageSize) -> Distances {
    match union_extent(objects) {
        None => Distances::default(),
        Some(extent) => Distances {
            left: extent.min_x,
            top: extent.min_y,
            right: image_size.width.saturating_sub(extent.max_x),
            bottom: image_size.height.saturating_sub(extent.max_y),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::measure::measure;
    use crate::types::BoundingRect;

    #[test]
    fn test_ranks_follow_center_x() {
        let objects = rank_by_center_x(vec![
            measure(BoundingRect::new(70, 0, 20, 20)),
            measure(BoundingRect::new(10, 50, 20, 20)),
            measure(BoundingRect::new(40, 20, 20, 20)),
        ]);

        let xs: Vec<u32> = objects.iter().map(|o| o.position.x).collect();
        let numbers: Vec<usize> = objects.iter().map(|o| o.number).collect();
        assert_eq!(xs, vec![10, 40, 70]);
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_equal_centers_keep_discovery_order() {
        // both centers sit at x = 20
        let objects = rank_by_center_x(vec![
            measure(BoundingRect::new(10, 60, 20, 20)),
            measure(BoundingRect::new(15, 5, 10, 30)),
        ]);

        assert_eq!(objects[0].position.y, 60);
        assert_eq!(objects[1].position.y, 5);
    }

    #[test]
    fn test_empty_distances_are_zero() {
        let size = ImageSize { width: 100, height: 80 };
        assert_eq!(edge_distances(&[], size), Distances::default());
        assert_eq!(union_extent(&[]), None);
    }

    #[test]
    fn test_distances_from_union_extent() {
        let objects = rank_by_center_x(vec![
            measure(BoundingRect::new(10, 30, 20, 20)),
            measure(BoundingRect::new(60, 5, 25, 10)),
        ]);

        let distances = edge_distances(&objects, ImageSize { width: 100, height: 80 });
        assert_eq!(
            distances,
            Distances { left: 10, top: 5, right: 15, bottom: 30 }
        );
    }
}
