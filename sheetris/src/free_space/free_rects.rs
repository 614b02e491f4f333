use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use itertools::Itertools;

/// Free rectangles of a single sheet, used by the MaxRects and Guillotine packers.
///
/// The union of all rectangles always equals the unoccupied part of the packing region.
/// Order of the rectangles is deterministic: survivors keep their relative order, new ones are appended.
#[derive(Clone, Debug)]
pub struct FreeRects {
    rects: Vec<Rect>,
}

impl FreeRects {
    /// A single free rectangle covering the whole region
    pub fn new(region: Rect) -> Self {
        FreeRects {
            rects: vec![region],
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Removes `used` from the free space, MaxRects style.
    ///
    /// Every free rectangle overlapping `used` is replaced by the (up to four) maximal slices of it
    /// that remain free. Afterwards all rectangles enclosed by another one are pruned.
    pub fn carve(&mut self, used: Rect) {
        let mut carved = vec![];
        self.rects.retain(|fr| match fr.collides_with(&used) {
            true => {
                carved.push(*fr);
                false
            }
            false => true,
        });

        for fr in carved {
            self.rects.extend(slices_around(fr, used));
        }

        self.prune_enclosed();
    }

    /// Removes every rectangle fully enclosed by another one.
    /// Of two identical rectangles, the first one is kept.
    pub fn prune_enclosed(&mut self) {
        let n = self.rects.len();
        let mut redundant = vec![false; n];
        for i in 0..n {
            for j in 0..n {
                if i == j || redundant[j] {
                    continue;
                }
                let (ri, rj) = (self.rects[i], self.rects[j]);
                if ri.relation_to(rj) == GeoRelation::Enclosed && (ri != rj || j < i) {
                    redundant[i] = true;
                    break;
                }
            }
        }

        self.rects = self
            .rects
            .iter()
            .zip(redundant)
            .filter_map(|(r, red)| (!red).then_some(*r))
            .collect_vec();
    }

    /// Replaces the rectangle at `index` by the two parts left by a single straight cut, Guillotine style.
    ///
    /// `used` must be anchored at the bottom-left corner of the rectangle.
    /// The cut runs along the axis with the larger leftover, so that leftover stays in one piece:
    /// a wider leftover gets a full-height right part, otherwise the top part spans the full width.
    pub fn guillotine_split(&mut self, index: usize, used: Rect) {
        let fr = self.rects.remove(index);
        debug_assert!(fr.x_min == used.x_min && fr.y_min == used.y_min);

        let leftover_x = fr.x_max - used.x_max;
        let leftover_y = fr.y_max - used.y_max;

        let (right, top) = match leftover_x > leftover_y {
            true => (
                Rect {
                    x_min: used.x_max,
                    y_min: fr.y_min,
                    x_max: fr.x_max,
                    y_max: fr.y_max,
                },
                Rect {
                    x_min: fr.x_min,
                    y_min: used.y_max,
                    x_max: used.x_max,
                    y_max: fr.y_max,
                },
            ),
            false => (
                Rect {
                    x_min: used.x_max,
                    y_min: fr.y_min,
                    x_max: fr.x_max,
                    y_max: used.y_max,
                },
                Rect {
                    x_min: fr.x_min,
                    y_min: used.y_max,
                    x_max: fr.x_max,
                    y_max: fr.y_max,
                },
            ),
        };

        self.rects
            .extend([right, top].into_iter().filter(|r| !r.is_degenerate()));
    }

    /// Sum of the areas of all free rectangles.
    /// Only equals the free area when the rectangles are disjoint (Guillotine).
    pub fn summed_area(&self) -> f64 {
        self.rects.iter().map(|r| r.area()).sum()
    }
}

/// The maximal parts of `fr` left, right, below and above `used`
fn slices_around(fr: Rect, used: Rect) -> impl Iterator<Item = Rect> {
    let left = (used.x_min > fr.x_min).then_some(Rect {
        x_max: used.x_min,
        ..fr
    });
    let right = (used.x_max < fr.x_max).then_some(Rect {
        x_min: used.x_max,
        ..fr
    });
    let bottom = (used.y_min > fr.y_min).then_some(Rect {
        y_max: used.y_min,
        ..fr
    });
    let top = (used.y_max < fr.y_max).then_some(Rect {
        y_min: used.y_max,
        ..fr
    });
    [left, right, bottom, top].into_iter().flatten()
}
