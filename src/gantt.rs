//! Gantt chart data.
//!
//! Turns a [`ScheduleResult`] into an ordered run of segments: one bar per
//! process and an idle segment wherever the CPU waited for an arrival.
//! Bar colours come from a cyclic [`Palette`] indexed by each process's
//! submission position, so a process keeps its colour when others are
//! added after it.
//!
//! The `Display` impl renders a single text line, which is what the CLI
//! prints. Anything richer (HTML, SVG) is left to the consumer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ScheduleResult;

/// Widest cell the text rendering will draw.
pub const MAX_CELL_WIDTH: usize = 240;

/// Default bar colours.
pub const DEFAULT_COLOURS: [&str; 7] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE",
];

/// Cyclic colour palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colours: Vec<String>,
}

impl Palette {
    /// Creates a palette from the given colours.
    ///
    /// An empty list falls back to [`DEFAULT_COLOURS`].
    pub fn new<I, S>(colours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colours: Vec<String> = colours.into_iter().map(Into::into).collect();
        if colours.is_empty() {
            Self::default()
        } else {
            Self { colours }
        }
    }

    /// Colour for the process at submission position `index`.
    ///
    /// A palette deserialized with no colours uses the defaults.
    pub fn colour_for(&self, index: usize) -> &str {
        match self.colours.len() {
            0 => DEFAULT_COLOURS[index % DEFAULT_COLOURS.len()],
            n => &self.colours[index % n],
        }
    }

    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Whether the palette holds no colours of its own.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colours: DEFAULT_COLOURS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// One span of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// A process running on the CPU.
    Bar {
        process_id: String,
        start: i64,
        finish: i64,
        colour: String,
    },
    /// CPU idle, waiting for the next arrival.
    Idle { start: i64, finish: i64 },
}

impl Segment {
    /// Segment start time.
    pub fn start(&self) -> i64 {
        match self {
            Self::Bar { start, .. } | Self::Idle { start, .. } => *start,
        }
    }

    /// Segment end time.
    pub fn finish(&self) -> i64 {
        match self {
            Self::Bar { finish, .. } | Self::Idle { finish, .. } => *finish,
        }
    }

    /// Length in ticks, saturating at `i64::MAX`.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish().saturating_sub(self.start())
    }

    /// Whether this is an idle segment.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }
}

/// Chart of a schedule, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChart {
    /// Segments in time order.
    pub segments: Vec<Segment>,
    /// Characters per tick in the text rendering (>= 1).
    pub scale: usize,
}

impl GanttChart {
    /// Builds the chart for a schedule.
    ///
    /// The chart starts at the schedule's origin. Each bar starts at the
    /// later of the previous bar's end and the process's arrival; any
    /// difference becomes an idle segment.
    pub fn from_result(result: &ScheduleResult, palette: &Palette) -> Self {
        let mut segments = Vec::with_capacity(result.len());
        let mut cursor = result.origin;

        for p in result {
            let start = cursor.max(p.arrival());
            if start > cursor {
                segments.push(Segment::Idle {
                    start: cursor,
                    finish: start,
                });
            }
            segments.push(Segment::Bar {
                process_id: p.id().to_string(),
                start,
                finish: p.finish,
                colour: palette.colour_for(p.index).to_string(),
            });
            cursor = p.finish;
        }

        Self { segments, scale: 1 }
    }

    /// Sets the characters-per-tick of the text rendering.
    pub fn with_scale(mut self, scale: usize) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Process bars only.
    pub fn bars(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| !s.is_idle())
    }

    /// Total idle ticks shown on the chart, saturating at `i64::MAX`.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .fold(0i64, |acc, s| acc.saturating_add(s.duration()))
    }

    /// End of the last segment (0 for an empty chart).
    pub fn end(&self) -> i64 {
        self.segments.last().map(Segment::finish).unwrap_or(0)
    }
}

impl fmt::Display for GanttChart {
    /// Renders `|P1 [0-5]|..idle..|P2 [5-8]|`, each cell padded to
    /// `duration * scale` characters, capped at [`MAX_CELL_WIDTH`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for segment in &self.segments {
            let width = usize::try_from(segment.duration().max(0))
                .unwrap_or(usize::MAX)
                .saturating_mul(self.scale)
                .min(MAX_CELL_WIDTH);
            let label = match segment {
                Segment::Bar {
                    process_id,
                    start,
                    finish,
                    ..
                } => format!("{process_id} [{start}-{finish}]"),
                Segment::Idle { .. } => "idle".to_string(),
            };
            let fill = if segment.is_idle() { '.' } else { ' ' };
            let pad = width.saturating_sub(label.chars().count());
            let left = pad / 2;
            let right = pad - left;
            for _ in 0..left {
                write!(f, "{fill}")?;
            }
            f.write_str(&label)?;
            for _ in 0..right {
                write!(f, "{fill}")?;
            }
            f.write_str("|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{schedule, FcfsScheduler};

    #[test]
    fn test_palette_cycles() {
        let p = Palette::default();
        assert_eq!(p.len(), 7);
        assert_eq!(p.colour_for(0), "#FF6B6B");
        assert_eq!(p.colour_for(7), "#FF6B6B");
        assert_eq!(p.colour_for(9), "#45B7D1");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let p = Palette::new(Vec::<String>::new());
        assert_eq!(p, Palette::default());
        assert!(!p.is_empty());

        let bare: Palette = serde_json::from_str(r#"{"colours":[]}"#).unwrap();
        assert!(bare.is_empty());
        assert_eq!(bare.colour_for(1), "#4ECDC4");
    }

    #[test]
    fn test_custom_palette() {
        let p = Palette::new(["red", "blue"]);
        assert_eq!(p.colour_for(3), "blue");
    }

    #[test]
    fn test_contiguous_bars() {
        let r = schedule(&[
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ])
        .unwrap();
        let chart = GanttChart::from_result(&r, &Palette::default());
        assert_eq!(chart.segments.len(), 3);
        assert_eq!(chart.idle_time(), 0);
        assert_eq!(chart.end(), 16);

        let spans: Vec<(i64, i64)> = chart.bars().map(|s| (s.start(), s.finish())).collect();
        assert_eq!(spans, vec![(0, 5), (5, 8), (8, 16)]);
    }

    #[test]
    fn test_idle_segments() {
        let r = schedule(&[Process::new("P1", 5, 2), Process::new("P2", 10, 1)]).unwrap();
        let chart = GanttChart::from_result(&r, &Palette::default());
        assert_eq!(
            chart.segments,
            vec![
                Segment::Idle { start: 0, finish: 5 },
                Segment::Bar {
                    process_id: "P1".into(),
                    start: 5,
                    finish: 7,
                    colour: "#FF6B6B".into(),
                },
                Segment::Idle { start: 7, finish: 10 },
                Segment::Bar {
                    process_id: "P2".into(),
                    start: 10,
                    finish: 11,
                    colour: "#4ECDC4".into(),
                },
            ]
        );
        assert_eq!(chart.idle_time(), 8);
    }

    #[test]
    fn test_colour_follows_submission_order() {
        // Submitted late-first; dispatch order is reversed but colours are not
        let r = schedule(&[Process::new("late", 4, 1), Process::new("early", 0, 1)]).unwrap();
        let chart = GanttChart::from_result(&r, &Palette::new(["a", "b"]));
        let colours: Vec<&str> = chart
            .bars()
            .map(|s| match s {
                Segment::Bar { colour, .. } => colour.as_str(),
                Segment::Idle { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(colours, vec!["b", "a"]);
    }

    #[test]
    fn test_origin_offsets_first_idle() {
        let r = FcfsScheduler::new()
            .with_origin(2)
            .schedule(&[Process::new("P1", 6, 1)])
            .unwrap();
        let chart = GanttChart::from_result(&r, &Palette::default());
        assert_eq!(chart.segments[0], Segment::Idle { start: 2, finish: 6 });
    }

    #[test]
    fn test_display() {
        let r = schedule(&[Process::new("A", 0, 4), Process::new("B", 6, 2)]).unwrap();
        let chart = GanttChart::from_result(&r, &Palette::default()).with_scale(3);
        let text = chart.to_string();
        assert!(text.starts_with('|'));
        assert!(text.ends_with('|'));
        assert!(text.contains("A [0-4]"));
        assert!(text.contains("idle"));
        assert!(text.contains("B [6-8]"));
        // A: 12 cols, idle: 6 cols, B: widened to its 7-char label, plus 4 separators
        assert_eq!(text.chars().count(), 12 + 6 + 7 + 4);
    }

    #[test]
    fn test_display_caps_huge_cells() {
        let r = FcfsScheduler::new()
            .with_origin(i64::MIN)
            .schedule(&[Process::new("P1", i64::MAX - 1, 1)])
            .unwrap();
        let chart = GanttChart::from_result(&r, &Palette::default()).with_scale(usize::MAX);
        assert_eq!(chart.segments[0].duration(), i64::MAX);
        assert_eq!(chart.idle_time(), i64::MAX);

        let text = chart.to_string();
        assert!(text.contains("idle"));
        assert!(text.chars().count() <= 2 * MAX_CELL_WIDTH + 64);
    }

    #[test]
    fn test_segment_serializes_tagged() {
        let v = serde_json::to_value(Segment::Idle { start: 0, finish: 3 }).unwrap();
        assert_eq!(v["kind"], "idle");
        assert_eq!(v["finish"], 3);
    }
}
