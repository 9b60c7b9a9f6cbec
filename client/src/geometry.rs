use inklink_shared::Segment;

use crate::session::PixelSegment;

/// Pixel coordinates → fractions of the local canvas extent. The fractions
/// carry no frame of reference beyond "fraction of canvas width/height".
pub fn normalize(segment: &PixelSegment, width: f64, height: f64) -> Segment {
    Segment {
        x0: (segment.x0 / width) as f32,
        y0: (segment.y0 / height) as f32,
        x1: (segment.x1 / width) as f32,
        y1: (segment.y1 / height) as f32,
        color: segment.color.clone(),
        thickness: segment.width,
    }
}

/// Fractions → pixel coordinates, scaled by the RECEIVING client's own
/// canvas dimensions. A receiver whose aspect ratio differs from the
/// sender's sees distorted geometry; that is the accepted trade-off.
pub fn denormalize(segment: &Segment, width: f64, height: f64) -> PixelSegment {
    PixelSegment {
        x0: segment.x0 as f64 * width,
        y0: segment.y0 as f64 * height,
        x1: segment.x1 as f64 * width,
        y1: segment.y1 as f64 * height,
        color: segment.color.clone(),
        width: segment.thickness,
    }
}
