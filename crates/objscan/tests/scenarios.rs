use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
use objscan::{DetectionResult, Distances, ObjectDetector, Pipeline, Point, Size};

fn fill(img: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            img.put_pixel(x, y, Luma([255u8]));
        }
    }
}

fn detect(image: &DynamicImage) -> DetectionResult {
    ObjectDetector::ready(Pipeline::default())
        .process(image)
        .expect("Should process successfully")
}

fn scattered_scene() -> DynamicImage {
    let mut img = GrayImage::new(200, 150);
    fill(&mut img, 120, 10, 30, 20);
    fill(&mut img, 15, 80, 25, 40);
    fill(&mut img, 70, 30, 12, 60);
    fill(&mut img, 180, 140, 4, 4); // noise
    fill(&mut img, 60, 120, 20, 15);
    DynamicImage::ImageLuma8(img)
}

#[test]
fn square_on_black_background() {
    let mut img = GrayImage::new(100, 100);
    fill(&mut img, 45, 45, 11, 11);

    let result = detect(&DynamicImage::ImageLuma8(img));

    assert_eq!(result.objects.len(), 1);
    let object = &result.objects[0];
    assert_eq!(object.number, 1);
    assert_eq!(object.position, Point::new(45, 45));
    assert_eq!(object.size, Size { width: 11, height: 11 });
    assert_eq!(object.center, Point::new(50, 50));
    assert_eq!(
        result.distances,
        Distances { left: 45, top: 45, right: 44, bottom: 44 }
    );
}

#[test]
fn square_at_noise_limit_is_dropped() {
    let mut img = GrayImage::new(100, 100);
    fill(&mut img, 45, 45, 10, 10);

    let result = detect(&DynamicImage::ImageLuma8(img));
    assert!(result.objects.is_empty());
    assert_eq!(result.distances, Distances::default());
}

#[test]
fn transparent_image_has_no_objects() {
    let result = detect(&DynamicImage::ImageRgba8(RgbaImage::new(50, 50)));

    assert!(result.objects.is_empty());
    assert_eq!(result.distances, Distances { left: 0, top: 0, right: 0, bottom: 0 });
    assert_eq!(result.image_size.width, 50);
}

#[test]
fn alpha_shapes_are_detected_regardless_of_colour() {
    let mut img = RgbaImage::new(80, 60);
    for y in 10..30 {
        for x in 20..50 {
            img.put_pixel(x, y, Rgba([0, 0, 0, 40]));
        }
    }

    let result = detect(&DynamicImage::ImageRgba8(img));
    assert_eq!(result.objects.len(), 1);
    assert_eq!(result.objects[0].size, Size { width: 30, height: 20 });
    assert_eq!(result.distances, Distances { left: 20, top: 10, right: 30, bottom: 30 });
}

#[test]
fn left_object_ranked_first() {
    let mut img = GrayImage::new(160, 80);
    fill(&mut img, 100, 20, 30, 30);
    fill(&mut img, 10, 30, 30, 30);

    let result = detect(&DynamicImage::ImageLuma8(img));

    assert_eq!(result.objects.len(), 2);
    assert!(result.objects[0].center.x < result.objects[1].center.x);
    assert_eq!(result.objects[0].number, 1);
    assert_eq!(result.objects[1].number, 2);
}

#[test]
fn numbers_are_contiguous_in_center_order() {
    let result = detect(&scattered_scene());

    assert_eq!(result.objects.len(), 4);
    for (index, object) in result.objects.iter().enumerate() {
        assert_eq!(object.number, index + 1);
    }
    for pair in result.objects.windows(2) {
        assert!(pair[0].center.x <= pair[1].center.x);
    }
}

#[test]
fn geometry_is_derived_from_position_and_size() {
    for object in detect(&scattered_scene()).objects {
        let (x, y) = (object.position.x, object.position.y);
        let (w, h) = (object.size.width, object.size.height);

        assert!(w > 0 && h > 0);
        assert!(u64::from(w) * u64::from(h) > 100);
        assert_eq!(object.center, Point::new(x + w / 2, y + h / 2));
        assert_eq!(object.corners.top_left, Point::new(x, y));
        assert_eq!(object.corners.top_right, Point::new(x + w, y));
        assert_eq!(object.corners.bottom_left, Point::new(x, y + h));
        assert_eq!(object.corners.bottom_right, Point::new(x + w, y + h));
    }
}

#[test]
fn distances_match_union_extent() {
    let result = detect(&scattered_scene());

    let min_x = result.objects.iter().map(|o| o.position.x).min().unwrap();
    let min_y = result.objects.iter().map(|o| o.position.y).min().unwrap();
    let max_x = result.objects.iter().map(|o| o.position.x + o.size.width).max().unwrap();
    let max_y = result.objects.iter().map(|o| o.position.y + o.size.height).max().unwrap();

    assert_eq!(result.distances.left, min_x);
    assert_eq!(result.distances.top, min_y);
    assert_eq!(result.image_size.width - result.distances.right, max_x);
    assert_eq!(result.image_size.height - result.distances.bottom, max_y);
}

#[test]
fn rerunning_is_byte_identical() {
    let image = scattered_scene();
    let detector = ObjectDetector::ready(Pipeline::default());

    let first = detector.process(&image).unwrap().to_json_pretty().unwrap();
    let second = detector.process(&image).unwrap().to_json_pretty().unwrap();
    assert_eq!(first, second);
}
