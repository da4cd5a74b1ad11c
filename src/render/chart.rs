//! Terminal line chart for FRF curves.
//!
//! The theme is a plain value handed to [`render`]; nothing is registered
//! globally, so two charts with different themes can be drawn side by side.

use anyhow::{bail, Result};
use colored::{Color, Colorize};
use serde::Deserialize;

/// Plot area limits; [`render`] clamps to them, [`ChartTheme::validate`] rejects beyond them.
pub const MAX_WIDTH: usize = 1000;
pub const MAX_HEIGHT: usize = 500;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartTheme {
    /// plot area columns
    pub width: usize,
    /// plot area rows
    pub height: usize,
    pub line_color: String,
    pub axis_color: String,
    pub glyph: char,
    /// glyph drawn in the top row for unbounded values (undamped resonance)
    pub overflow_glyph: char,
    pub color: bool,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            width: 72,
            height: 18,
            line_color: "yellow".to_string(),
            axis_color: "bright black".to_string(),
            glyph: '*',
            overflow_glyph: '^',
            color: true,
        }
    }
}

impl ChartTheme {
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_WIDTH).contains(&self.width) {
            bail!("chart width {} is outside 2..={MAX_WIDTH}", self.width);
        }
        if !(2..=MAX_HEIGHT).contains(&self.height) {
            bail!("chart height {} is outside 2..={MAX_HEIGHT}", self.height);
        }
        Ok(())
    }

    fn paint(&self, s: &str, color: &str) -> String {
        if !self.color {
            return s.to_string();
        }
        let c: Color = color.parse().unwrap_or(Color::White);
        s.color(c).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Linear axis; `None` fits the data.
    Linear(Option<(f64, f64)>),
    /// Base-10 logarithmic axis fitted to the positive finite data.
    Log10,
}

/// Phase axis used by the calculator.
pub const PHASE_DOMAIN: (f64, f64) = (-190.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Line,
    Overflow,
}

fn transform(y: f64, scale: Scale) -> Option<f64> {
    match scale {
        Scale::Linear(_) if y.is_finite() => Some(y),
        Scale::Log10 if y.is_finite() && y > 0.0 => Some(y.log10()),
        _ => None,
    }
}

fn y_range(ys: &[f64], scale: Scale) -> (f64, f64) {
    if let Scale::Linear(Some(domain)) = scale {
        return domain;
    }
    let (lo, hi) = ys
        .iter()
        .filter_map(|y| transform(*y, scale))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < 1e-12 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo, hi)
}

fn tick_label(v: f64, scale: Scale) -> String {
    match scale {
        Scale::Log10 => format!("{:>10.3e}", 10f64.powf(v)),
        Scale::Linear(_) => format!("{:>10.2}", v),
    }
}

/// Draw `ys` against `xs` (same length, `xs` non-decreasing).
///
/// Each column spans the lowest to the highest sample that falls into it,
/// so narrow resonance peaks survive down-sampling. `+∞` samples mark the
/// top row with the theme's overflow glyph.
pub fn render(title: &str, xs: &[f64], ys: &[f64], scale: Scale, theme: &ChartTheme) -> String {
    let width = theme.width.clamp(2, MAX_WIDTH);
    let height = theme.height.clamp(2, MAX_HEIGHT);
    let mut out = String::new();
    out.push_str(&format!("{title}\n"));
    if xs.is_empty() || xs.len() != ys.len() {
        out.push_str("(no data)\n");
        return out;
    }

    let (x_lo, x_hi) = (xs[0], xs[xs.len() - 1]);
    let x_span = if x_hi > x_lo { x_hi - x_lo } else { 1.0 };
    let (y_lo, y_hi) = y_range(ys, scale);
    let y_span = y_hi - y_lo;

    let row_of = |v: f64| -> usize {
        let t = ((v - y_lo) / y_span).clamp(0.0, 1.0);
        (height - 1) - (t * (height - 1) as f64).round() as usize
    };

    // per column: (top row, bottom row) of the drawn segment
    let mut columns: Vec<Option<(usize, usize)>> = vec![None; width];
    let mut grid = vec![vec![Cell::Empty; width]; height];
    for (x, y) in xs.iter().zip(ys) {
        let col = (((x - x_lo) / x_span) * (width - 1) as f64).round() as usize;
        let col = col.min(width - 1);
        if *y == f64::INFINITY {
            grid[0][col] = Cell::Overflow;
            continue;
        }
        let Some(v) = transform(*y, scale) else { continue };
        let row = row_of(v);
        columns[col] = Some(match columns[col] {
            Some((top, bottom)) => (top.min(row), bottom.max(row)),
            None => (row, row),
        });
    }
    for (col, span) in columns.iter().enumerate() {
        if let Some((top, bottom)) = span {
            for row in grid.iter_mut().take(bottom + 1).skip(*top) {
                if row[col] == Cell::Empty {
                    row[col] = Cell::Line;
                }
            }
        }
    }

    let glyph = theme.glyph.to_string();
    let overflow = theme.overflow_glyph.to_string();
    let bar = theme.paint("|", &theme.axis_color);
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            tick_label(y_hi, scale)
        } else if i == height - 1 {
            tick_label(y_lo, scale)
        } else if i == (height - 1) / 2 {
            tick_label(y_hi - y_span * i as f64 / (height - 1) as f64, scale)
        } else {
            " ".repeat(10)
        };
        out.push_str(&label);
        out.push(' ');
        out.push_str(&bar);
        for cell in row {
            match cell {
                Cell::Empty => out.push(' '),
                Cell::Line => out.push_str(&theme.paint(&glyph, &theme.line_color)),
                Cell::Overflow => out.push_str(&theme.paint(&overflow, &theme.line_color)),
            }
        }
        out.push('\n');
    }
    out.push_str(&" ".repeat(11));
    out.push_str(&theme.paint(&format!("+{}", "-".repeat(width)), &theme.axis_color));
    out.push('\n');
    let lo = format!("{x_lo:.2}");
    let hi = format!("{x_hi:.2}");
    let gap = (width + 1).saturating_sub(lo.len() + hi.len());
    out.push_str(&format!("{}{lo}{}{hi}  [rad/s]\n", " ".repeat(11), " ".repeat(gap)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(width: usize, height: usize) -> ChartTheme {
        ChartTheme { width, height, color: false, ..ChartTheme::default() }
    }

    #[test]
    fn draws_one_row_per_height_plus_axes() {
        let xs: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x * 2.0).collect();
        let s = render("line", &xs, &ys, Scale::Linear(None), &plain(20, 8));
        // title + 8 rows + axis + x labels
        assert_eq!(s.lines().count(), 11);
        assert!(s.lines().nth(1).unwrap().ends_with('*'));
    }

    #[test]
    fn infinite_sample_marks_top_row() {
        let xs = [0.0, 0.5, 1.0, 1.5, 2.0];
        let ys = [1.0, 2.0, f64::INFINITY, 2.0, 1.0];
        let s = render("spike", &xs, &ys, Scale::Log10, &plain(5, 4));
        let top = s.lines().nth(1).unwrap();
        assert!(top.contains('^'), "{s}");
        assert!(!s.contains("NaN") && !s.contains("inf"));
    }

    #[test]
    fn mismatched_input_is_reported_not_drawn() {
        let s = render("bad", &[0.0, 1.0], &[1.0], Scale::Log10, &plain(10, 4));
        assert!(s.contains("(no data)"));
    }

    #[test]
    fn oversized_theme_is_rejected_and_clamped() {
        let huge = plain(usize::MAX, 4);
        let err = huge.validate().unwrap_err();
        assert!(err.to_string().contains("width"), "{err}");
        assert!(plain(20, 0).validate().is_err());
        assert!(plain(20, 8).validate().is_ok());
        let s = render("wide", &[0.0, 1.0], &[1.0, 2.0], Scale::Linear(None), &huge);
        assert_eq!(s.lines().count(), 7);
    }

    #[test]
    fn theme_parses_from_toml() {
        let t: ChartTheme = toml::from_str("width = 40\nglyph = \"#\"\ncolor = false\n").unwrap();
        assert_eq!(t.width, 40);
        assert_eq!(t.glyph, '#');
        assert_eq!(t.height, ChartTheme::default().height);
    }
}
