//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::Shape;

/// How a shape outline is stroked.
///
/// Committed shapes use [`StrokeStyle::Solid`]; the live preview of a
/// pending shape uses [`StrokeStyle::Dashed`] so in-progress geometry is
/// visually distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    Solid,
    Dashed,
}

/// Fills the whole surface with the canvas background color.
///
/// Should be called before rendering shapes.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    let (r, g, b) = color.to_cairo();
    ctx.set_source_rgb(r, g, b);
    let _ = ctx.paint();
}

/// Renders all shapes in order (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single committed shape with a solid stroke.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    render_shape_styled(ctx, shape, StrokeStyle::Solid);
}

/// Renders a single shape, dispatching on its kind.
pub fn render_shape_styled(ctx: &cairo::Context, shape: &Shape, style: StrokeStyle) {
    match shape {
        Shape::Freehand {
            points,
            color,
            thick,
        } => {
            render_freehand_borrowed(ctx, points, *color, *thick, style);
        }
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            thick,
        } => {
            prepare_stroke(ctx, *color, *thick, style);
            ctx.move_to(*x1 as f64, *y1 as f64);
            ctx.line_to(*x2 as f64, *y2 as f64);
            finish_stroke(ctx);
        }
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            thick,
        } => {
            prepare_stroke(ctx, *color, *thick, style);
            ctx.rectangle(*x as f64, *y as f64, *w as f64, *h as f64);
            finish_stroke(ctx);
        }
        Shape::Ellipse {
            x,
            y,
            w,
            h,
            color,
            thick,
        } => {
            render_ellipse(ctx, *x, *y, *w, *h, *color, *thick, style);
        }
        Shape::Triangle {
            vertices,
            color,
            thick,
        } => {
            render_polygon(ctx, vertices, *color, *thick, style);
        }
        Shape::Text {
            x,
            y,
            text,
            color,
            size,
            font_descriptor,
        } => {
            render_text(ctx, *x, *y, text, *color, *size, font_descriptor);
        }
    }
}

/// Render a freehand stroke (polyline through points).
///
/// Accepts a borrowed slice so the live preview of a long stroke does not
/// clone its points on every frame.
pub fn render_freehand_borrowed(
    ctx: &cairo::Context,
    points: &[(i32, i32)],
    color: Color,
    thick: u32,
    style: StrokeStyle,
) {
    let Some(&(x0, y0)) = points.first() else {
        return;
    };

    prepare_stroke(ctx, color, thick, style);
    ctx.move_to(x0 as f64, y0 as f64);
    if points.len() == 1 {
        // Zero-length segment so the round cap leaves a dot
        ctx.line_to(x0 as f64, y0 as f64);
    }
    for &(x, y) in &points[1..] {
        ctx.line_to(x as f64, y as f64);
    }
    finish_stroke(ctx);
}

/// Closed outline through the given vertices.
pub fn render_polygon(
    ctx: &cairo::Context,
    vertices: &[(i32, i32)],
    color: Color,
    thick: u32,
    style: StrokeStyle,
) {
    let Some(&(x0, y0)) = vertices.first() else {
        return;
    };

    prepare_stroke(ctx, color, thick, style);
    ctx.move_to(x0 as f64, y0 as f64);
    for &(x, y) in &vertices[1..] {
        ctx.line_to(x as f64, y as f64);
    }
    ctx.close_path();
    finish_stroke(ctx);
}

/// Render an ellipse inscribed in the given box.
///
/// A box with zero width or height has no drawable outline and is skipped;
/// scaling Cairo's matrix by zero would leave the context in an error state.
#[allow(clippy::too_many_arguments)]
fn render_ellipse(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Color,
    thick: u32,
    style: StrokeStyle,
) {
    if w == 0 || h == 0 {
        return;
    }

    prepare_stroke(ctx, color, thick, style);

    ctx.save().ok();
    ctx.translate(x as f64 + w as f64 / 2.0, y as f64 + h as f64 / 2.0);
    ctx.scale(w as f64 / 2.0, h as f64 / 2.0);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    finish_stroke(ctx);
}

/// Renders text with its layout box anchored at (x, y) using Pango.
///
/// Text containing newline characters is laid out across multiple lines.
pub fn render_text(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
    size: u32,
    font_descriptor: &FontDescriptor,
) {
    if text.is_empty() {
        return;
    }

    ctx.save().ok();

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font_descriptor.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let (r, g, b) = color.to_cairo();
    ctx.set_source_rgb(r, g, b);
    ctx.move_to(x as f64, y as f64);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

fn prepare_stroke(ctx: &cairo::Context, color: Color, thick: u32, style: StrokeStyle) {
    let (r, g, b) = color.to_cairo();
    let width = thick.max(1) as f64;
    ctx.set_source_rgb(r, g, b);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    match style {
        StrokeStyle::Solid => ctx.set_dash(&[], 0.0),
        // Dash and gap lengths scale with the pen width
        StrokeStyle::Dashed => ctx.set_dash(&[4.0 * width, 2.0 * width], 0.0),
    }
}

fn finish_stroke(ctx: &cairo::Context) {
    if let Err(err) = ctx.stroke() {
        log::warn!("Cairo stroke failed: {err}");
    }
    ctx.set_dash(&[], 0.0);
}
