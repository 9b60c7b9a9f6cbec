use web_sys::CanvasRenderingContext2d;

use crate::session::PixelSegment;

/// Draws one round-capped line segment. Pure pixel-buffer effect; an invalid
/// color string is left to the canvas's own (ignored) error behavior.
pub fn draw_segment(ctx: &CanvasRenderingContext2d, segment: &PixelSegment) {
    ctx.begin_path();
    ctx.move_to(segment.x0, segment.y0);
    ctx.line_to(segment.x1, segment.y1);
    ctx.set_stroke_style_str(&segment.color);
    ctx.set_line_width(segment.width as f64);
    ctx.set_line_cap("round");
    ctx.stroke();
}
