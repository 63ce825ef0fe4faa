//! CPU tessellation of scene shapes into colored triangles.
//!
//! Outlines are flattened to polylines here and handed to lyon for filling
//! and stroking. Text is not handled; it goes through the glyph renderer.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, LineCap, LineJoin, StrokeOptions,
    StrokeTessellator, StrokeVertex, TessellationError, VertexBuffers,
};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{ArcCmd, ArcStyle, DrawCmd, DrawList, Stroke};

/// Maximum distance between a flattened curve and the true ellipse, in logical pixels.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

const MIN_SEGMENTS: usize = 4;
const MAX_SEGMENTS: usize = 512;

// ── output types ──────────────────────────────────────────────────────────

/// Vertex layout consumed by the shape pipeline (24 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 2],
    /// Premultiplied linear RGBA.
    pub color: [f32; 4],
}

/// Triangle list accumulated over many shapes.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn append(&mut self, part: VertexBuffers<MeshVertex, u32>) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&part.vertices);
        self.indices.extend(part.indices.iter().map(|i| i + base));
    }
}

/// Contiguous index range sharing one scissor rect.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBatch {
    pub clip: Option<Rect>,
    pub indices: Range<u32>,
}

/// Flattened outline of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

// ── flattening ────────────────────────────────────────────────────────────

/// Number of chords needed to stay within `tolerance` of an ellipse with the
/// given radii over `extent_deg` degrees.
pub fn segment_count(rx: f32, ry: f32, extent_deg: f32, tolerance: f32) -> usize {
    let r = rx.abs().max(ry.abs());
    let sweep = extent_deg.abs().to_radians();
    if sweep == 0.0 {
        return 0;
    }
    if r <= tolerance {
        return MIN_SEGMENTS;
    }

    let step = 2.0 * (1.0 - tolerance / r).acos();
    let n = (sweep / step).ceil() as usize;
    n.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Normalizes an arc extent the way canvas toolkits do: values beyond a full
/// turn wrap modulo 360, keeping their sign.
pub fn normalize_extent(extent_deg: f32) -> f32 {
    if extent_deg.abs() > 360.0 {
        extent_deg % 360.0
    } else {
        extent_deg
    }
}

/// Samples the ellipse inscribed in `bounds` from `start_deg` over `extent_deg`.
///
/// Angles run counter-clockwise from 3 o'clock as seen on screen, so the sine
/// term is subtracted in the +Y-down space. Both end points are included.
/// Returns an empty list for empty bounds or a zero extent.
pub fn arc_points(bounds: Rect, start_deg: f32, extent_deg: f32, tolerance: f32) -> Vec<Vec2> {
    let bounds = bounds.normalized();
    if bounds.is_empty() {
        return Vec::new();
    }

    let extent_deg = normalize_extent(extent_deg);
    let rx = bounds.size.x * 0.5;
    let ry = bounds.size.y * 0.5;
    let n = segment_count(rx, ry, extent_deg, tolerance);
    if n == 0 {
        return Vec::new();
    }

    let c = bounds.center();
    let start = start_deg.to_radians();
    let sweep = extent_deg.to_radians();

    (0..=n)
        .map(|i| {
            let theta = start + sweep * (i as f32 / n as f32);
            Vec2::new(c.x + rx * theta.cos(), c.y - ry * theta.sin())
        })
        .collect()
}

/// Builds the outline of a non-text command, or `None` when it has no area
/// and no length.
pub fn outline(cmd: &DrawCmd, tolerance: f32) -> Option<Outline> {
    let outline = match cmd {
        DrawCmd::Line(l) => Outline { points: vec![l.from, l.to], closed: false },

        DrawCmd::Rect(r) => {
            let r = r.rect.normalized();
            if r.is_empty() {
                return None;
            }
            let (min, max) = (r.min(), r.max());
            Outline {
                points: vec![min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
                closed: true,
            }
        }

        DrawCmd::Ellipse(e) => closed_ellipse(e.bounds, tolerance)?,

        DrawCmd::Arc(a) => arc_outline(a, tolerance)?,

        DrawCmd::Text(_) => return None,
    };

    (outline.points.len() >= 2).then_some(outline)
}

fn closed_ellipse(bounds: Rect, tolerance: f32) -> Option<Outline> {
    let mut points = arc_points(bounds, 0.0, 360.0, tolerance);
    // First and last samples coincide on a full turn.
    points.pop();
    (points.len() >= 3).then_some(Outline { points, closed: true })
}

fn arc_outline(cmd: &ArcCmd, tolerance: f32) -> Option<Outline> {
    let extent = normalize_extent(cmd.extent_deg);

    if extent.abs() >= 360.0 && cmd.style != ArcStyle::Arc {
        return closed_ellipse(cmd.bounds, tolerance);
    }

    let mut points = arc_points(cmd.bounds, cmd.start_deg, extent, tolerance);
    if points.is_empty() {
        return None;
    }

    let closed = match cmd.style {
        ArcStyle::Arc => false,
        ArcStyle::Chord => true,
        ArcStyle::PieSlice => {
            points.insert(0, cmd.bounds.normalized().center());
            true
        }
    };

    Some(Outline { points, closed })
}

fn to_path(outline: &Outline) -> Path {
    let mut builder = Path::builder();
    let mut pts = outline.points.iter();
    if let Some(first) = pts.next() {
        builder.begin((*first).into());
        for p in pts {
            builder.line_to((*p).into());
        }
        builder.end(outline.closed);
    }
    builder.build()
}

// ── tessellator ───────────────────────────────────────────────────────────

/// Fill/stroke parameters resolved from a draw command.
struct Style {
    fill: Option<Color>,
    stroke: Option<Stroke>,
}

fn style_of(cmd: &DrawCmd) -> Style {
    match cmd {
        DrawCmd::Line(l) => Style { fill: None, stroke: Some(l.stroke) },
        DrawCmd::Rect(r) => Style { fill: r.fill, stroke: r.stroke },
        DrawCmd::Ellipse(e) => Style { fill: e.fill, stroke: e.stroke },
        // An open arc has no interior; its fill option is ignored.
        DrawCmd::Arc(a) if a.style == ArcStyle::Arc => Style { fill: None, stroke: a.stroke },
        DrawCmd::Arc(a) => Style { fill: a.fill, stroke: a.stroke },
        DrawCmd::Text(_) => Style { fill: None, stroke: None },
    }
}

/// Reusable lyon tessellators plus the flattening tolerance.
pub struct Tessellator {
    fill: FillTessellator,
    stroke: StrokeTessellator,
    tolerance: f32,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE)
    }
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            fill: FillTessellator::new(),
            stroke: StrokeTessellator::new(),
            tolerance: tolerance.max(0.001),
        }
    }

    /// Appends the triangles of one command to `out`: interior first, then
    /// outline, so the outline paints over the fill edge.
    ///
    /// Commands with NaN or infinite fields are logged and produce nothing.
    pub fn tessellate(&mut self, cmd: &DrawCmd, out: &mut Mesh) -> Result<(), TessellationError> {
        if !cmd.is_finite() {
            log::warn!("skipping shape with non-finite geometry: {cmd:?}");
            return Ok(());
        }
        let Some(outline) = outline(cmd, self.tolerance) else {
            return Ok(());
        };
        let style = style_of(cmd);
        let path = to_path(&outline);

        if let Some(fill) = style.fill.filter(|c| c.a > 0.0) {
            if outline.closed && outline.points.len() >= 3 {
                let color = fill.to_array();
                let mut part: VertexBuffers<MeshVertex, u32> = VertexBuffers::new();
                self.fill.tessellate_path(
                    &path,
                    &FillOptions::tolerance(self.tolerance),
                    &mut BuffersBuilder::new(&mut part, move |v: FillVertex| MeshVertex {
                        pos: v.position().to_array(),
                        color,
                    }),
                )?;
                out.append(part);
            }
        }

        if let Some(stroke) = style.stroke.filter(|s| !s.is_invisible()) {
            let color = stroke.color.to_array();
            let options = StrokeOptions::tolerance(self.tolerance)
                .with_line_width(stroke.width)
                .with_line_cap(LineCap::Butt)
                .with_line_join(LineJoin::Miter);
            let mut part: VertexBuffers<MeshVertex, u32> = VertexBuffers::new();
            self.stroke.tessellate_path(
                &path,
                &options,
                &mut BuffersBuilder::new(&mut part, move |v: StrokeVertex| MeshVertex {
                    pos: v.position().to_array(),
                    color,
                }),
            )?;
            out.append(part);
        }

        Ok(())
    }

    /// Tessellates every non-text item of `list` in paint order.
    ///
    /// `mesh` and `batches` are cleared first. Consecutive items with the same
    /// clip rect share a batch. A shape lyon rejects is logged and skipped.
    pub fn tessellate_list(
        &mut self,
        list: &mut DrawList,
        mesh: &mut Mesh,
        batches: &mut Vec<MeshBatch>,
    ) {
        mesh.clear();
        batches.clear();

        for item in list.iter_in_paint_order() {
            if item.cmd.is_text() {
                continue;
            }

            let start = mesh.indices.len() as u32;
            let vertex_mark = mesh.vertices.len();
            if let Err(e) = self.tessellate(&item.cmd, mesh) {
                log::warn!("skipping shape that failed to tessellate: {e:?}");
                mesh.vertices.truncate(vertex_mark);
                mesh.indices.truncate(start as usize);
                continue;
            }
            let end = mesh.indices.len() as u32;
            if end == start {
                continue;
            }

            match batches.last_mut() {
                Some(last) if last.clip == item.clip_rect && last.indices.end == start => {
                    last.indices.end = end;
                }
                _ => batches.push(MeshBatch { clip: item.clip_rect, indices: start..end }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EllipseCmd, LineCmd, RectCmd, ZIndex};

    const TOL: f32 = DEFAULT_TOLERANCE;

    fn near(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    fn black(width: f32) -> Option<Stroke> {
        Some(Stroke::new(width, Color::black()))
    }

    fn arc(bounds: Rect, start: f32, extent: f32, style: ArcStyle, fill: Option<Color>) -> DrawCmd {
        DrawCmd::Arc(ArcCmd {
            bounds,
            start_deg: start,
            extent_deg: extent,
            style,
            fill,
            stroke: black(2.0),
        })
    }

    fn bounds_of(mesh: &Mesh) -> (Vec2, Vec2) {
        let mut min = Vec2::new(f32::MAX, f32::MAX);
        let mut max = Vec2::new(f32::MIN, f32::MIN);
        for v in &mesh.vertices {
            min = Vec2::new(min.x.min(v.pos[0]), min.y.min(v.pos[1]));
            max = Vec2::new(max.x.max(v.pos[0]), max.y.max(v.pos[1]));
        }
        (min, max)
    }

    // ── arc sampling ──────────────────────────────────────────────────────

    #[test]
    fn upper_half_goes_through_the_top() {
        let b = Rect::from_points(Vec2::new(170.0, 150.0), Vec2::new(250.0, 230.0));
        let pts = arc_points(b, 0.0, 180.0, TOL);

        assert!(near(pts[0], Vec2::new(250.0, 190.0)));
        assert!(near(*pts.last().unwrap(), Vec2::new(170.0, 190.0)));
        // Counter-clockwise on screen means every sample sits at or above the diameter.
        assert!(pts.iter().all(|p| p.y <= 190.0 + 1e-3));
        assert!(pts.iter().any(|p| (p.y - 150.0).abs() < 0.5));
    }

    #[test]
    fn negative_extent_runs_clockwise() {
        let b = Rect::new(0.0, 0.0, 100.0, 100.0);
        let pts = arc_points(b, 0.0, -90.0, TOL);
        assert!(near(*pts.last().unwrap(), Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn zero_extent_and_empty_bounds_produce_nothing() {
        assert!(arc_points(Rect::new(0.0, 0.0, 10.0, 10.0), 30.0, 0.0, TOL).is_empty());
        assert!(arc_points(Rect::new(0.0, 0.0, 0.0, 10.0), 0.0, 90.0, TOL).is_empty());
    }

    #[test]
    fn extent_wraps_beyond_full_turn() {
        assert_eq!(normalize_extent(450.0), 90.0);
        assert_eq!(normalize_extent(-450.0), -90.0);
        assert_eq!(normalize_extent(360.0), 360.0);
        assert_eq!(normalize_extent(720.0), 0.0);
    }

    #[test]
    fn segment_count_grows_with_radius() {
        let small = segment_count(10.0, 10.0, 360.0, TOL);
        let large = segment_count(200.0, 200.0, 360.0, TOL);
        assert!(small >= MIN_SEGMENTS);
        assert!(large > small);
        assert!(segment_count(200.0, 200.0, 90.0, TOL) < large);
        assert_eq!(segment_count(0.01, 0.01, 90.0, TOL), MIN_SEGMENTS);
    }

    // ── outlines ──────────────────────────────────────────────────────────

    #[test]
    fn arc_style_outline_is_open() {
        let b = Rect::new(0.0, 0.0, 50.0, 50.0);
        let o = outline(&arc(b, 0.0, 90.0, ArcStyle::Arc, None), TOL).unwrap();
        assert!(!o.closed);
    }

    #[test]
    fn chord_outline_is_closed_without_center() {
        let b = Rect::new(0.0, 0.0, 50.0, 50.0);
        let o = outline(&arc(b, 0.0, 90.0, ArcStyle::Chord, None), TOL).unwrap();
        assert!(o.closed);
        assert!(!o.points.iter().any(|p| near(*p, b.center())));
    }

    #[test]
    fn pie_slice_starts_at_center() {
        // Corners given bottom-up still resolve to the same wedge.
        let b = Rect::from_points(Vec2::new(280.0, 260.0), Vec2::new(330.0, 200.0));
        let o = outline(&arc(b, 0.0, 90.0, ArcStyle::PieSlice, None), TOL).unwrap();
        assert!(o.closed);
        assert!(near(o.points[0], Vec2::new(305.0, 230.0)));
        assert!(near(o.points[1], Vec2::new(330.0, 230.0)));
        assert!(near(*o.points.last().unwrap(), Vec2::new(305.0, 200.0)));
    }

    #[test]
    fn full_turn_pie_slice_is_an_ellipse() {
        let b = Rect::new(0.0, 0.0, 40.0, 20.0);
        let o = outline(&arc(b, 0.0, 360.0, ArcStyle::PieSlice, None), TOL).unwrap();
        assert!(o.closed);
        assert!(!o.points.iter().any(|p| near(*p, b.center())));
    }

    #[test]
    fn rect_outline_has_four_corners() {
        let cmd = DrawCmd::Rect(RectCmd {
            rect: Rect::new(30.0, 60.0, 100.0, 50.0),
            fill: None,
            stroke: black(2.0),
        });
        let o = outline(&cmd, TOL).unwrap();
        assert_eq!(
            o.points,
            vec![
                Vec2::new(30.0, 60.0),
                Vec2::new(130.0, 60.0),
                Vec2::new(130.0, 110.0),
                Vec2::new(30.0, 110.0),
            ]
        );
        assert!(o.closed);
    }

    // ── triangles ─────────────────────────────────────────────────────────

    #[test]
    fn line_stroke_covers_its_width_with_butt_caps() {
        let mut t = Tessellator::new();
        let mut mesh = Mesh::default();
        let cmd = DrawCmd::Line(LineCmd {
            from: Vec2::new(30.0, 30.0),
            to: Vec2::new(130.0, 30.0),
            stroke: Stroke::new(2.0, Color::black()),
        });
        t.tessellate(&cmd, &mut mesh).unwrap();

        assert!(!mesh.is_empty());
        let (min, max) = bounds_of(&mesh);
        assert!(near(min, Vec2::new(30.0, 29.0)));
        assert!(near(max, Vec2::new(130.0, 31.0)));
    }

    #[test]
    fn outline_only_ellipse_has_no_interior_vertices() {
        let mut t = Tessellator::new();
        let mut mesh = Mesh::default();
        let cmd = DrawCmd::Ellipse(EllipseCmd {
            bounds: Rect::new(170.0, 60.0, 80.0, 80.0),
            fill: None,
            stroke: black(2.0),
        });
        t.tessellate(&cmd, &mut mesh).unwrap();

        let c = Vec2::new(210.0, 100.0);
        assert!(mesh.vertices.iter().all(|v| {
            let d = Vec2::new(v.pos[0], v.pos[1]) - c;
            (d.x * d.x + d.y * d.y).sqrt() > 38.0
        }));
    }

    #[test]
    fn fill_is_emitted_before_stroke() {
        let orange = Color::parse("orange").unwrap();
        let mut t = Tessellator::new();
        let mut mesh = Mesh::default();
        let b = Rect::from_points(Vec2::new(190.0, 210.0), Vec2::new(240.0, 270.0));
        t.tessellate(&arc(b, 0.0, 90.0, ArcStyle::Chord, Some(orange)), &mut mesh).unwrap();

        assert_eq!(mesh.vertices.first().map(|v| v.color), Some(orange.to_array()));
        assert_eq!(mesh.vertices.last().map(|v| v.color), Some(Color::black().to_array()));
    }

    #[test]
    fn open_arc_ignores_fill() {
        let mut t = Tessellator::new();
        let mut mesh = Mesh::default();
        let b = Rect::new(0.0, 0.0, 50.0, 50.0);
        let red = Color::parse("red").unwrap();
        t.tessellate(&arc(b, 0.0, 180.0, ArcStyle::Arc, Some(red)), &mut mesh).unwrap();

        assert!(!mesh.is_empty());
        assert!(mesh.vertices.iter().all(|v| v.color == Color::black().to_array()));
    }

    #[test]
    fn zero_width_stroke_and_no_fill_draws_nothing() {
        let mut t = Tessellator::new();
        let mut mesh = Mesh::default();
        let cmd = DrawCmd::Rect(RectCmd {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: None,
            stroke: black(0.0),
        });
        t.tessellate(&cmd, &mut mesh).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn non_finite_shapes_are_skipped() {
        let mut t = Tessellator::new();
        let mut mesh = Mesh::default();
        let b = Rect::new(0.0, 0.0, 100.0, 100.0);

        t.tessellate(&arc(b, 0.0, f32::NAN, ArcStyle::PieSlice, Some(Color::black())), &mut mesh)
            .unwrap();
        t.tessellate(&arc(b, f32::INFINITY, 90.0, ArcStyle::Chord, None), &mut mesh)
            .unwrap();
        let line = DrawCmd::Line(LineCmd {
            from: Vec2::new(f32::NAN, 0.0),
            to: Vec2::new(10.0, 10.0),
            stroke: Stroke::new(1.0, Color::black()),
        });
        t.tessellate(&line, &mut mesh).unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());

        t.tessellate(&arc(b, 0.0, 90.0, ArcStyle::PieSlice, Some(Color::black())), &mut mesh)
            .unwrap();
        assert!(!mesh.is_empty());
    }

    #[test]
    fn indices_are_rebased_when_appending() {
        let mut t = Tessellator::new();
        let mut mesh = Mesh::default();
        let cmd = DrawCmd::Rect(RectCmd {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: Some(Color::white()),
            stroke: None,
        });
        t.tessellate(&cmd, &mut mesh).unwrap();
        let first_vertices = mesh.vertices.len() as u32;
        t.tessellate(&cmd, &mut mesh).unwrap();

        let second_half = &mesh.indices[mesh.indices.len() / 2..];
        assert!(second_half.iter().all(|&i| i >= first_vertices));
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    // ── batching ──────────────────────────────────────────────────────────

    #[test]
    fn batches_split_on_clip_change() {
        let mut list = DrawList::new();
        let s = Stroke::new(1.0, Color::black());
        list.push_line(ZIndex::BASE, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), s);
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_line(ZIndex::BASE, Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), s);
        list.push_line(ZIndex::BASE, Vec2::new(0.0, 9.0), Vec2::new(10.0, 9.0), s);
        list.pop_clip();

        let mut t = Tessellator::new();
        let mut mesh = Mesh::default();
        let mut batches = Vec::new();
        t.tessellate_list(&mut list, &mut mesh, &mut batches);

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].clip, None);
        assert_eq!(batches[1].clip, Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(batches[0].indices.end, batches[1].indices.start);
        assert_eq!(batches[1].indices.end as usize, mesh.indices.len());
    }
}
