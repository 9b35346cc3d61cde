//! StatusView: turns a scheduler snapshot into styled text lines.
//!
//! Rendering is pure (no terminal I/O), so layouts can be asserted in tests.

use crate::core::SchedulerSnapshot;
use crate::types::RoutineState;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub fg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bold: false,
            dim: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub style: LineStyle,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

const RUNNING: Rgb = Rgb::new(120, 220, 120);
const PAUSED: Rgb = Rgb::new(230, 200, 90);
const FINISHED: Rgb = Rgb::new(140, 140, 140);

#[derive(Debug, Clone)]
pub struct StatusView {
    pub title: String,
    /// Footer lines (key hints) appended after the table.
    pub footer: Vec<String>,
}

impl Default for StatusView {
    fn default() -> Self {
        Self {
            title: "frame-coro".to_string(),
            footer: Vec::new(),
        }
    }
}

impl StatusView {
    pub fn render(&self, snapshot: &SchedulerSnapshot, width: u16) -> Vec<StatusLine> {
        let mut out = Vec::with_capacity(snapshot.coroutines.len() + 4 + self.footer.len());
        self.render_into(snapshot, width, &mut out);
        out
    }

    /// Render into `out`, replacing its contents. Lines are cut to `width`.
    pub fn render_into(&self, snapshot: &SchedulerSnapshot, width: u16, out: &mut Vec<StatusLine>) {
        out.clear();

        let header = LineStyle {
            bold: true,
            ..LineStyle::default()
        };
        out.push(StatusLine::new(
            format!(
                "{}  frame {}  live {}  paused {}",
                self.title,
                snapshot.frame,
                snapshot.coroutines.len(),
                snapshot.count(RoutineState::Paused)
            ),
            header,
        ));
        out.push(StatusLine::new(
            format!("{:<6} {:<12} {:<9} {}", "id", "label", "state", "waiting"),
            LineStyle {
                dim: true,
                ..LineStyle::default()
            },
        ));

        if snapshot.coroutines.is_empty() {
            out.push(StatusLine::new(
                "(no live coroutines)",
                LineStyle {
                    fg: FINISHED,
                    ..LineStyle::default()
                },
            ));
        }

        for row in &snapshot.coroutines {
            let style = match row.state {
                RoutineState::Running => LineStyle {
                    fg: RUNNING,
                    ..LineStyle::default()
                },
                RoutineState::Paused => LineStyle {
                    fg: PAUSED,
                    ..LineStyle::default()
                },
                RoutineState::Finished => LineStyle {
                    fg: FINISHED,
                    dim: true,
                    ..LineStyle::default()
                },
            };
            out.push(StatusLine::new(
                format!(
                    "{:<6} {:<12} {:<9} {}",
                    row.id.to_string(),
                    row.label.as_deref().unwrap_or("-"),
                    row.state.as_str(),
                    row.waiting_on.map(|w| w.as_str()).unwrap_or("-")
                ),
                style,
            ));
        }

        for hint in &self.footer {
            out.push(StatusLine::new(
                hint.clone(),
                LineStyle {
                    dim: true,
                    ..LineStyle::default()
                },
            ));
        }

        clip_lines(out, width);
    }
}

/// Cut every line to at most `width` characters.
pub fn clip_lines(lines: &mut [StatusLine], width: u16) {
    let width = width as usize;
    for line in lines.iter_mut() {
        if line.text.chars().count() > width {
            line.text = line.text.chars().take(width).collect();
        }
    }
}
