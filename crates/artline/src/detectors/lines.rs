//! Line tracing
//!
//! One sweep per segment kind assembles runs of the kind's glyph, plus the
//! pass-through glyphs it may run underneath, into [`LineSegment`]s. The
//! tracer is a two-state automaton: either no segment is open, or one is open
//! from `start` to `stop`. Joints end one run and begin the next, so
//! `+--+--+` yields two segments that share their middle joint.
//!
//! After tracing, baselines and diagonals get a look-around pass that records
//! nudges where they meet underscores or each other. Half-steps are traced
//! separately: short verticals that connect `_` baselines and `-` midlines to
//! neighbouring glyphs half a cell away.

use tracing::{debug, span, trace, Level};

use super::corners::corner_at;
use crate::core::glyphs::{is_dot, is_joint, is_triangle, Arms};
use crate::core::neighborhood::{part_of_diagonal_line, part_of_rounded_corner, part_of_vertical_line};
use crate::core::{
    Cap, Chop, Detector, Drawable, Glyphs, Grid, LineDirection, LineSegment, Position, Sweep,
};

/// The five traced segment kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// `-` through the middle of a row
    Midline,
    /// `_` along the bottom of a row
    Baseline,
    /// `|`
    Vertical,
    /// `/`
    DiagonalUp,
    /// `\`
    DiagonalDown,
}

impl SegmentKind {
    /// Kinds in emission order
    pub const ALL: [SegmentKind; 5] = [
        SegmentKind::Midline,
        SegmentKind::Baseline,
        SegmentKind::Vertical,
        SegmentKind::DiagonalUp,
        SegmentKind::DiagonalDown,
    ];

    /// The glyph that defines this kind
    pub fn glyph(self) -> char {
        match self {
            SegmentKind::Midline => '-',
            SegmentKind::Baseline => '_',
            SegmentKind::Vertical => '|',
            SegmentKind::DiagonalUp => '/',
            SegmentKind::DiagonalDown => '\\',
        }
    }

    pub fn sweep(self) -> Sweep {
        match self {
            SegmentKind::Midline | SegmentKind::Baseline => Sweep::RowMajor,
            SegmentKind::Vertical => Sweep::ColumnMajor,
            SegmentKind::DiagonalUp => Sweep::DiagonalUp,
            SegmentKind::DiagonalDown => Sweep::DiagonalDown,
        }
    }

    pub fn direction(self) -> LineDirection {
        match self {
            SegmentKind::Midline | SegmentKind::Baseline => LineDirection::East,
            SegmentKind::Vertical => LineDirection::South,
            SegmentKind::DiagonalUp => LineDirection::NorthEast,
            SegmentKind::DiagonalDown => LineDirection::SouthEast,
        }
    }

    /// Glyphs a segment of this kind may run underneath
    pub fn passes_through(self, ch: char) -> bool {
        is_joint(ch)
            || match self {
                SegmentKind::Midline => matches!(ch, '<' | '>' | '(' | ')'),
                SegmentKind::Baseline => ch == '|',
                SegmentKind::Vertical => matches!(ch, '^' | 'v'),
                SegmentKind::DiagonalUp | SegmentKind::DiagonalDown => {
                    matches!(ch, '<' | '>' | '^' | 'v' | '|')
                }
            }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceState {
    Unstarted,
    Started { start: Position, stop: Position },
}

struct Tracer<'g, G: Glyphs + ?Sized> {
    glyphs: &'g G,
    kind: SegmentKind,
    state: TraceState,
    last: char,
    lines: Vec<LineSegment>,
}

impl<'g, G: Glyphs + ?Sized> Tracer<'g, G> {
    fn new(glyphs: &'g G, kind: SegmentKind) -> Self {
        Self {
            glyphs,
            kind,
            state: TraceState::Unstarted,
            last: ' ',
            lines: Vec::new(),
        }
    }

    fn visit(&mut self, pos: Position) {
        let g = self.glyphs;
        let ch = g.glyph(pos);
        let is_segment = ch == self.kind.glyph();
        let is_pass = self.kind.passes_through(ch);
        let corner = corner_at(g, pos);

        let mut keep = (is_segment || is_pass) && corner.is_none();
        // A `+` can round one corner while a vertical or diagonal runs
        // straight through it.
        if corner.is_some()
            && ch == '+'
            && !self.kind.direction().is_horizontal()
            && (part_of_vertical_line(g, pos) || part_of_diagonal_line(g, pos))
        {
            keep = true;
        }

        let after_pass = self.kind.passes_through(self.last);
        // Never join `)` to `>` on a midline, or `|` to `<` on a diagonal.
        if is_pass && after_pass && self.kind != SegmentKind::Vertical {
            self.snip();
        }
        // Never draw from a joint into a circle or arrowhead.
        if after_pass && (is_dot(ch) || is_triangle(ch)) {
            self.snip();
        }

        self.state = match self.state {
            TraceState::Unstarted if keep => TraceState::Started {
                start: pos,
                stop: pos,
            },
            TraceState::Unstarted => TraceState::Unstarted,
            TraceState::Started { start, stop } if !keep => {
                if start == stop
                    && self.last == self.kind.glyph()
                    && !part_of_rounded_corner(g, start)
                {
                    self.emit(start, pos, true);
                } else {
                    self.emit(start, stop, false);
                }
                TraceState::Unstarted
            }
            TraceState::Started { start, .. } if is_pass => {
                self.emit(start, pos, false);
                TraceState::Started {
                    start: pos,
                    stop: pos,
                }
            }
            TraceState::Started { start, .. } => TraceState::Started { start, stop: pos },
        };

        self.last = ch;
    }

    fn snip(&mut self) {
        if let TraceState::Started { start, stop } = self.state {
            self.emit(start, stop, false);
        }
        self.state = TraceState::Unstarted;
    }

    fn emit(&mut self, start: Position, stop: Position, lonely: bool) {
        if start == stop {
            return;
        }
        trace!(kind = ?self.kind, %start, %stop, lonely, "Traced segment");
        self.lines.push(LineSegment {
            lonely,
            start_glyph: Some(self.glyphs.glyph(start)),
            stop_glyph: Some(self.glyphs.glyph(stop)),
            ..LineSegment::new(start, stop, self.kind.direction())
        });
    }
}

/// Trace every segment of `kind` over a `width` x `height` grid
///
/// The sweep covers one extra row and column of blanks so that runs touching
/// the right or bottom edge are closed. When consecutive positions are not
/// neighbours on the sweep line, the tracer first visits the blank cell that
/// would have followed, so no run wraps onto the next sweep line.
pub fn trace_segments<G: Glyphs + ?Sized>(
    glyphs: &G,
    width: usize,
    height: usize,
    kind: SegmentKind,
) -> Vec<LineSegment> {
    let sweep = kind.sweep();
    let mut tracer = Tracer::new(glyphs, kind);
    let mut previous: Option<Position> = None;

    for pos in sweep.positions(width + 1, height + 1) {
        if let Some(prev) = previous {
            let expected = sweep.step(prev);
            if expected != pos {
                tracer.visit(expected);
            }
        }
        tracer.visit(pos);
        previous = Some(pos);
    }
    tracer.snip();

    tracer.lines
}

type ArmTest = fn(&Arms) -> bool;

/// Box-drawing runs of `kind` in the Unicode dialect
///
/// A run continues into the next cell only when the current glyph has an arm
/// toward it and the next glyph an arm back. Only midlines and verticals have
/// box-drawing glyphs; other kinds yield nothing.
pub fn trace_box_segments(grid: &Grid, kind: SegmentKind) -> Vec<LineSegment> {
    let (forward, backward): (ArmTest, ArmTest) = match kind {
        SegmentKind::Midline => (|a: &Arms| a.east, |a: &Arms| a.west),
        SegmentKind::Vertical => (|a: &Arms| a.south, |a: &Arms| a.north),
        _ => return Vec::new(),
    };
    let reaches = |pos: Position, arm: ArmTest| grid.arms(pos).is_some_and(|a| arm(&a));

    let mut lines = Vec::new();
    let mut close = |start: Position, stop: Position| {
        let start_cap = if grid.arc_corner(start).is_some() && reaches(start, forward) {
            Cap::Arc
        } else if reaches(start, backward) {
            Cap::Edge
        } else {
            Cap::Center
        };
        let stop_cap = if grid.arc_corner(stop).is_some() && reaches(stop, backward) {
            Cap::Arc
        } else if reaches(stop, forward) {
            Cap::Edge
        } else {
            Cap::Center
        };
        let line = LineSegment {
            start_glyph: Some(grid.glyph(start)),
            stop_glyph: Some(grid.glyph(stop)),
            start_cap,
            stop_cap,
            ..LineSegment::new(start, stop, kind.direction())
        };
        if line.goes_somewhere() {
            trace!(?kind, %start, %stop, ?start_cap, ?stop_cap, "Traced box segment");
            lines.push(line);
        }
    };

    // The extra blank column and row close every run before the sweep wraps.
    let mut open: Option<(Position, Position)> = None;
    for pos in kind.sweep().positions(grid.width() + 1, grid.height() + 1) {
        let ahead = reaches(pos, forward);
        let behind = reaches(pos, backward);

        if let Some((start, stop)) = open.take() {
            if behind && ahead {
                open = Some((start, pos));
                continue;
            }
            if behind {
                close(start, pos);
                continue;
            }
            close(start, stop);
        }

        if ahead {
            open = Some((pos, pos));
        } else if behind {
            close(pos, pos);
        }
    }

    lines
}

/// Record nudges for `/` segments meeting underscores or `\`
fn nudge_diagonal_up<G: Glyphs + ?Sized>(g: &G, line: &mut LineSegment) {
    let (start, stop) = (line.start, line.stop);
    let n = &mut line.nudge;

    // /_
    if g.glyph(start.east()) == '_' {
        n.tiny_left = true;
    }
    // _
    // /
    if g.glyph(stop.north()) == '_' {
        n.tiny_right = true;
    }
    if !line.lonely {
        //  _
        // /
        if g.glyph(stop.north_east()) == '_' {
            n.tiny_right = true;
        }
        // _/
        if g.glyph(start.west()) == '_' {
            n.tiny_left = true;
        }
        // \
        // /
        if g.glyph(stop.north()) == '\\' {
            n.tiny_right = true;
        }
        // /
        // \
        if g.glyph(start.south()) == '\\' {
            n.tiny_left = true;
        }
    }
}

/// Record nudges for `\` segments meeting underscores or `/`
fn nudge_diagonal_down<G: Glyphs + ?Sized>(g: &G, line: &mut LineSegment) {
    let (start, stop) = (line.start, line.stop);
    let n = &mut line.nudge;

    // _\
    if g.glyph(stop.west()) == '_' {
        n.tiny_right = true;
    }
    // _
    // \
    if g.glyph(start.north()) == '_' {
        n.tiny_left = true;
    }
    if !line.lonely {
        //  _
        //   \
        if g.glyph(start.north_west()) == '_' {
            n.tiny_left = true;
        }
        // \_
        if g.glyph(stop.east()) == '_' {
            n.tiny_right = true;
        }
        // \
        // /
        if g.glyph(stop.south()) == '/' {
            n.tiny_right = true;
        }
        // /
        // \
        if g.glyph(start.north()) == '/' {
            n.tiny_left = true;
        }
    }
}

/// Drop `_` segments to the baseline and stretch them to meet their neighbours
fn nudge_baseline<G: Glyphs + ?Sized>(g: &G, line: &mut LineSegment) {
    let (start, stop) = (line.start, line.stop);
    let n = &mut line.nudge;

    n.down = true;

    //     _
    // _| |
    if g.glyph(stop.south_east()) == '|' || g.glyph(stop.north_east()) == '|' {
        n.right = true;
    }
    // _
    //  |  _|
    if g.glyph(start.south_west()) == '|' || g.glyph(start.north_west()) == '|' {
        n.left = true;
    }
    //     _
    // _/   \
    if g.glyph(stop.east()) == '/' || g.glyph(stop.south_east()) == '\\' {
        n.tiny_right = true;
    }
    //       _
    // \_   /
    if g.glyph(start.west()) == '\\' || g.glyph(start.south_west()) == '/' {
        n.tiny_left = true;
    }
    // _\
    if g.glyph(stop.east()) == '\\' {
        n.right = true;
        n.tiny_right = true;
    }
    // /_
    if g.glyph(start.west()) == '/' {
        n.left = true;
        n.tiny_left = true;
    }
    //  _
    //  /
    if g.glyph(stop.south()) == '/' {
        n.tiny_right = true;
    }
    //  _
    //  \
    if g.glyph(start.south()) == '\\' {
        n.tiny_left = true;
    }
    //  _
    // '
    if g.glyph(start.south_west()) == '\'' {
        n.left = true;
    }
    // _
    //  '
    if g.glyph(stop.south_east()) == '\'' {
        n.right = true;
    }
}

/// Chopped half of the half-step at `pos`, if one belongs there
pub fn half_step_at<G: Glyphs + ?Sized>(g: &G, pos: Position) -> Option<Chop> {
    let ch = g.glyph(pos);
    if !matches!(ch, '\'' | '.' | '|') || corner_at(g, pos).is_some() {
        return None;
    }

    let w = g.glyph(pos.west());
    let e = g.glyph(pos.east());
    let n = g.glyph(pos.north());
    let s = g.glyph(pos.south());
    let nw = g.glyph(pos.north_west());
    let ne = g.glyph(pos.north_east());

    match ch {
        //  _      _
        //   '-  -'
        '\'' if (nw == '_' && e == '-') || (w == '-' && ne == '_') => Some(Chop::North),
        // _.-  -._
        '.' if (w == '-' && e == '_') || (w == '_' && e == '-') => Some(Chop::South),
        '|' => {
            // _   _
            //  | |
            if (n != '|' && (ne == '_' || nw == '_')) || n == '-' {
                Some(Chop::North)
            // _| |_
            } else if (s != '|' && (w == '_' || e == '_')) || s == '-' {
                Some(Chop::South)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Half-step segments, column-major
pub fn half_steps<G: Glyphs + ?Sized>(g: &G, width: usize, height: usize) -> Vec<LineSegment> {
    Sweep::ColumnMajor
        .positions(width, height)
        .filter_map(|pos| half_step_at(g, pos).map(|chop| LineSegment::half_step(pos, chop)))
        .collect()
}

/// Traces every segment kind plus half-steps
///
/// Output order is midlines, baselines, verticals, diagonal-up,
/// diagonal-down, then half-steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDetector;

impl LineDetector {
    pub fn new() -> Self {
        Self
    }

    /// Segments of one kind, with that kind's nudges applied
    pub fn segments(&self, grid: &Grid, kind: SegmentKind) -> Vec<LineSegment> {
        if !grid.dialect().is_ascii() {
            return trace_box_segments(grid, kind);
        }
        let mut lines = trace_segments(grid, grid.width(), grid.height(), kind);
        let nudge: Option<fn(&Grid, &mut LineSegment)> = match kind {
            SegmentKind::Baseline => Some(nudge_baseline),
            SegmentKind::DiagonalUp => Some(nudge_diagonal_up),
            SegmentKind::DiagonalDown => Some(nudge_diagonal_down),
            SegmentKind::Midline | SegmentKind::Vertical => None,
        };
        if let Some(nudge) = nudge {
            for line in &mut lines {
                nudge(grid, line);
            }
        }
        lines
    }
}

impl Detector for LineDetector {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn detect(&self, grid: &Grid) -> Vec<Drawable> {
        let line_span = span!(Level::DEBUG, "detect_lines");
        let _enter = line_span.enter();

        let mut drawables = Vec::new();
        for kind in SegmentKind::ALL {
            let lines = self.segments(grid, kind);
            debug!(?kind, count = lines.len(), "Traced segments");
            drawables.extend(lines.into_iter().map(Drawable::from));
        }

        let steps = if grid.dialect().is_ascii() {
            half_steps(grid, grid.width(), grid.height())
        } else {
            Vec::new()
        };
        debug!(count = steps.len(), "Traced half-steps");
        drawables.extend(steps.into_iter().map(Drawable::from));

        drawables
    }
}
