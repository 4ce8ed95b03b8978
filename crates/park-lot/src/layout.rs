//! Spot layout and builder.
//!
//! # Coordinates
//!
//! Each spot sits on a `(column, row)` grid cell of one floor.  The entrance
//! is at grid origin `(0, 0)` of floor 1, so `column + row` is the number of
//! cells a driver covers before reaching the spot; upper floors are reached
//! through a single connecting ramp.
//!
//! Spots are fixed at construction.  The `SpotId` of a spot is its position
//! in the layout, so ids are always contiguous in `[0, N)`.

use park_core::SpotId;

// ── Spot ──────────────────────────────────────────────────────────────────────

/// Immutable position of one parking spot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spot {
    pub column: u32,
    pub row:    u32,
    /// 1-based floor number.
    pub floor:  u32,
}

impl Spot {
    #[inline]
    pub const fn new(column: u32, row: u32, floor: u32) -> Self {
        Self { column, row, floor }
    }

    /// Grid cells between the entrance and the spot, ignoring floors.
    #[inline]
    pub fn grid_cells(self) -> u32 {
        self.column + self.row
    }

    /// Number of ramps between the ground floor and this spot.
    #[inline]
    pub fn floors_above_ground(self) -> u32 {
        self.floor.saturating_sub(1)
    }
}

// ── Reference layout ──────────────────────────────────────────────────────────

/// The two-floor, 50-spot reference lot.
///
/// Spot 0 is the lone cell in column 0 next to the entrance (the
/// sensor-backed spot); floor 1 then holds a full 5×5 block and floor 2 a
/// 5×5 block missing its far corner.
const REFERENCE_SPOTS: [Spot; 50] = {
    let mut spots = [Spot::new(0, 1, 1); 50];
    let mut i = 1;
    let mut floor = 1;
    while floor <= 2 {
        let mut row = 1;
        while row <= 5 {
            let mut column = 1;
            while column <= 5 {
                if i < 50 {
                    spots[i] = Spot::new(column, row, floor);
                    i += 1;
                }
                column += 1;
            }
            row += 1;
        }
        floor += 1;
    }
    spots
};

// ── SpotLayout ────────────────────────────────────────────────────────────────

/// The fixed set of spots in a lot, indexed by `SpotId`.
///
/// Do not construct directly; use [`SpotLayoutBuilder`],
/// [`SpotLayout::reference`], or the CSV loader.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotLayout {
    spots: Vec<Spot>,
}

impl SpotLayout {
    /// The 50-spot reference lot used by the default experiment.
    pub fn reference() -> Self {
        Self { spots: REFERENCE_SPOTS.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Position of `id`.
    ///
    /// # Panics
    /// Panics if `id` is outside the layout.
    #[inline]
    pub fn spot(&self, id: SpotId) -> Spot {
        self.spots[id.index()]
    }

    /// Highest floor number in the layout (0 if empty).
    pub fn floor_count(&self) -> u32 {
        self.spots.iter().map(|s| s.floor).max().unwrap_or(0)
    }
}

// ── SpotLayoutBuilder ─────────────────────────────────────────────────────────

/// Incremental builder for [`SpotLayout`].  Ids are assigned in insertion order.
#[derive(Default)]
pub struct SpotLayoutBuilder {
    spots: Vec<Spot>,
}

impl SpotLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a spot and return its id.
    pub fn add_spot(&mut self, column: u32, row: u32, floor: u32) -> SpotId {
        let id = SpotId(self.spots.len() as u32);
        self.spots.push(Spot::new(column, row, floor));
        id
    }

    pub fn build(self) -> SpotLayout {
        SpotLayout { spots: self.spots }
    }
}
