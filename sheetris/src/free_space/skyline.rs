use crate::geometry::primitives::Rect;

/// Top profile of the pieces placed on a sheet, used by the Skyline packer.
///
/// Stored as a sequence of steps: each step starts at `x` and runs until the start of the next one
/// (or the right side of the region for the last step). Contiguous coverage of the full region
/// width therefore holds by construction, as long as the first step starts at the left side
/// and starts are strictly increasing.
#[derive(Clone, Debug)]
pub struct Skyline {
    region: Rect,
    steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Step {
    x: f64,
    y: f64,
}

/// A horizontal span of the skyline, `[x_min, x_max)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkylineSegment {
    pub x_min: f64,
    /// Start of the next segment, or the right side of the region
    pub x_max: f64,
    /// Top y-level of the span
    pub y: f64,
}

impl SkylineSegment {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

/// Where a piece would rest on the skyline
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkylineFit {
    pub x: f64,
    /// Height at which the bottom of the piece would rest
    pub y: f64,
    /// Area trapped below the piece, between the piece and the lower spanned segments
    pub waste: f64,
}

impl Skyline {
    /// A flat skyline at the bottom of the region
    pub fn new(region: Rect) -> Self {
        Skyline {
            region,
            steps: vec![Step {
                x: region.x_min,
                y: region.y_min,
            }],
        }
    }

    pub fn n_segments(&self) -> usize {
        self.steps.len()
    }

    /// The segments of the skyline, left to right
    pub fn segments(&self) -> impl Iterator<Item = SkylineSegment> + '_ {
        (0..self.steps.len()).map(|i| SkylineSegment {
            x_min: self.steps[i].x,
            x_max: self.step_end(i),
            y: self.steps[i].y,
        })
    }

    /// Tries to rest a `width` x `height` rectangle on the skyline with its left side aligned to segment `index`.
    /// Returns `None` if it would stick out of the region on the right or the top.
    pub fn fit(&self, index: usize, width: f64, height: f64) -> Option<SkylineFit> {
        let x = self.steps[index].x;
        let right = x + width;
        if right > self.region.x_max {
            return None;
        }

        let spanned = index..self.first_step_from(index, right);

        // cannot sink below any of the supporting segments
        let y = spanned
            .clone()
            .map(|i| self.steps[i].y)
            .fold(f64::NEG_INFINITY, f64::max);

        if y + height > self.region.y_max {
            return None;
        }

        let waste = spanned
            .map(|i| {
                let covered = f64::min(self.step_end(i), right) - self.steps[i].x;
                (y - self.steps[i].y) * covered
            })
            .sum();

        Some(SkylineFit { x, y, waste })
    }

    /// Raises the skyline to `top` over `[x, x + width)`, where `x` is the start of segment `index`.
    /// Segments partially covered on the right are cut at `x + width`,
    /// neighbouring segments at equal height are merged afterwards.
    pub fn raise(&mut self, index: usize, width: f64, top: f64) {
        let x = self.steps[index].x;
        let right = x + width;
        let next = self.first_step_from(index, right);

        // the last spanned step may continue past the right side of the new segment
        let remainder = match right < self.step_end(next - 1) {
            true => Some(Step {
                x: right,
                y: self.steps[next - 1].y,
            }),
            false => None,
        };

        self.steps.splice(
            index..next,
            [Step { x, y: top }].into_iter().chain(remainder),
        );
        self.steps.dedup_by(|cur, prev| cur.y == prev.y);
    }

    /// Lowest height of the skyline over the span `[x_min, x_max)`, `None` if the span misses the region.
    ///
    /// Segment bounds are the exact step starts, a span starting at a step never includes its left neighbour.
    pub fn min_height_over(&self, x_min: f64, x_max: f64) -> Option<f64> {
        self.segments()
            .filter(|s| s.x_min < x_max && s.x_max > x_min)
            .map(|s| s.y)
            .reduce(f64::min)
    }

    /// True if the steps cover the region width without gaps and stay within its height
    pub fn is_contiguous(&self) -> bool {
        !self.steps.is_empty()
            && self.steps[0].x == self.region.x_min
            && self.steps.windows(2).all(|w| w[0].x < w[1].x)
            && self
                .steps
                .last()
                .is_some_and(|s| s.x < self.region.x_max)
            && self
                .steps
                .iter()
                .all(|s| s.y >= self.region.y_min && s.y <= self.region.y_max)
    }

    /// Index of the first step at or after `index` starting at or right of `x`
    fn first_step_from(&self, index: usize, x: f64) -> usize {
        self.steps[index..]
            .iter()
            .position(|s| s.x >= x)
            .map_or(self.steps.len(), |p| p + index)
    }

    fn step_end(&self, index: usize) -> f64 {
        match self.steps.get(index + 1) {
            Some(next) => next.x,
            None => self.region.x_max,
        }
    }
}
