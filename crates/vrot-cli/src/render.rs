//! ratatui canvas views of the animation and the circumsphere scene.

use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Context, Line};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{Frame as TermFrame, Terminal};
use vrot_circum::CircumScene;
use vrot_euler::{Frame, FrameSink};
use vrot_math::{Point3, Vec3};

/// Half-width of the cube shown around the airplane.
pub const EULER_EXTENT: f64 = 2.0;

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Orthographic projection onto a camera orbiting the origin.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    right: Vec3,
    up: Vec3,
}

impl Projection {
    /// Camera at `azimuth` around Z and `elevation` above the XY plane, in degrees.
    pub fn orbit(azimuth: f64, elevation: f64) -> Self {
        let (sa, ca) = azimuth.to_radians().sin_cos();
        let (se, ce) = elevation.to_radians().sin_cos();
        Self {
            right: Vec3::new(-sa, ca, 0.0),
            up: Vec3::new(-ca * se, -sa * se, ce),
        }
    }

    /// Screen coordinates of `p`.
    pub fn project(&self, p: &Point3) -> (f64, f64) {
        (p.coords.dot(&self.right), p.coords.dot(&self.up))
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::orbit(-60.0, 30.0)
    }
}

/// Canvas bounds for a cube of half-width `extent`, widened so one unit
/// spans about the same distance horizontally and vertically.
pub fn canvas_bounds(extent: f64, area: Rect) -> ([f64; 2], [f64; 2]) {
    let inner_w = area.width.saturating_sub(2).max(1) as f64;
    let inner_h = area.height.saturating_sub(2).max(1) as f64;
    // Terminal cells are about twice as tall as wide.
    let aspect = (inner_w / (2.0 * inner_h)).max(1.0);
    ([-extent * aspect, extent * aspect], [-extent, extent])
}

fn segment(ctx: &mut Context<'_>, proj: &Projection, a: &Point3, b: &Point3, color: Color) {
    let (x1, y1) = proj.project(a);
    let (x2, y2) = proj.project(b);
    ctx.draw(&Line::new(x1, y1, x2, y2, color));
}

fn polyline(ctx: &mut Context<'_>, proj: &Projection, points: &[Point3], color: Color) {
    for pair in points.windows(2) {
        segment(ctx, proj, &pair[0], &pair[1], color);
    }
}

fn polygon(ctx: &mut Context<'_>, proj: &Projection, points: &[Point3], color: Color) {
    polyline(ctx, proj, points, color);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        segment(ctx, proj, last, first, color);
    }
}

fn label(ctx: &mut Context<'_>, proj: &Projection, at: &Point3, text: String, color: Color) {
    let (x, y) = proj.project(at);
    ctx.print(x, y, Span::styled(text, Style::default().fg(color)));
}

fn fmt_point(p: &Point3) -> String {
    format!("{:.1}, {:.1}, {:.1}", p.x, p.y, p.z)
}

fn world_axes(ctx: &mut Context<'_>, proj: &Projection, extent: f64) {
    for (dir, name) in [(Vec3::x(), "x"), (Vec3::y(), "y"), (Vec3::z(), "z")] {
        let tip = Point3::from(dir * extent);
        segment(ctx, proj, &Point3::origin(), &tip, Color::DarkGray);
        label(ctx, proj, &tip, name.to_string(), Color::DarkGray);
    }
}

/// Draw one animation frame: target pose, current pose and active axis.
pub fn draw_euler(f: &mut TermFrame<'_>, frame: &Frame, proj: &Projection) {
    let [view, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(4)]).areas(f.area());
    let (x_bounds, y_bounds) = canvas_bounds(EULER_EXTENT, view);

    let status = if frame.paused { "paused" } else { "running" };
    let canvas = Canvas::default()
        .block(Block::bordered().title(format!(" Euler {} [{status}] ", frame.order)))
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            world_axes(ctx, proj, EULER_EXTENT);
            polygon(ctx, proj, frame.target_pose.wing(), Color::Red);
            polygon(ctx, proj, frame.target_pose.keel(), Color::LightRed);
            ctx.layer();

            polygon(ctx, proj, frame.pose.wing(), Color::Blue);
            polygon(ctx, proj, frame.pose.keel(), Color::Cyan);

            let origin = frame.triad.origin;
            let tip = origin + frame.active_vector() * 2.0;
            segment(ctx, proj, &origin, &tip, ORANGE);
            label(ctx, proj, &tip, frame.active_axis.label().into(), ORANGE);
        });
    f.render_widget(canvas, view);

    let [cx, cy, cz] = frame.current_degrees;
    let text = vec![
        TextLine::from(frame.instructions()),
        TextLine::from(frame.target_label()),
        TextLine::from(format!("Current: {cx:.1}, {cy:.1}, {cz:.1}")),
    ];
    f.render_widget(Paragraph::new(text), footer);
}

/// Draw the circumsphere scene.
pub fn draw_sphere(f: &mut TermFrame<'_>, scene: &CircumScene, proj: &Projection) {
    let [view, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(4)]).areas(f.area());
    let (x_bounds, y_bounds) = canvas_bounds(scene.view_extent, view);

    let t = &scene.triangle;
    let p = scene.sphere.center;
    let canvas = Canvas::default()
        .block(Block::bordered().title(" Circumsphere "))
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for meridian in scene.surface.meridians() {
                polyline(ctx, proj, meridian, Color::Green);
            }
            if let Some(plane) = &scene.plane {
                for line in plane.grid.wireframe() {
                    polyline(ctx, proj, &line, Color::Blue);
                }
            }
            ctx.layer();

            polyline(ctx, proj, &scene.trace, Color::LightGreen);
            polygon(ctx, proj, &[t.a, t.b, t.c], Color::White);
            let tip = p + scene.normal;
            segment(ctx, proj, &p, &tip, Color::Red);
            ctx.layer();

            label(ctx, proj, &t.a, "A".into(), Color::LightBlue);
            label(ctx, proj, &t.b, "B".into(), Color::LightBlue);
            label(ctx, proj, &t.c, "C".into(), Color::LightBlue);
            label(ctx, proj, &p, format!("P0={}", fmt_point(&p)), Color::Red);
            label(
                ctx,
                proj,
                &scene.centroid,
                format!(" center of gravity={}", fmt_point(&scene.centroid)),
                ORANGE,
            );
            label(ctx, proj, &tip, fmt_point(&Point3::from(scene.unit_normal())), Color::Red);
        });
    f.render_widget(canvas, view);

    let text = vec![
        TextLine::from(format!(
            "radius {:.4}  center {}",
            scene.sphere.radius,
            fmt_point(&p)
        )),
        TextLine::from("[Esc/q/Enter]: Close"),
    ];
    f.render_widget(Paragraph::new(text), footer);
}

/// Raw mode and the alternate screen, restored on drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// [`FrameSink`] drawing onto a ratatui terminal.
pub struct CanvasSink<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    projection: Projection,
}

impl<'t, B: Backend> CanvasSink<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>, projection: Projection) -> Self {
        Self {
            terminal,
            projection,
        }
    }
}

impl<B: Backend> FrameSink for CanvasSink<'_, B> {
    fn present(&mut self, frame: &Frame, hold: Duration) -> io::Result<()> {
        let proj = self.projection;
        self.terminal.draw(|f| draw_euler(f, frame, &proj))?;
        if !hold.is_zero() {
            thread::sleep(hold);
        }
        Ok(())
    }
}
