/// Shared entity data types — pure data, no logic.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// An axis-aligned box on the character grid.
///
/// `row`/`column` are the top-left corner and may be fractional (debris falls
/// by fractions of a row per tick).  The box covers the half-open ranges
/// `[row, row + rows)` and `[column, column + columns)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub row: f64,
    pub column: f64,
    pub rows: usize,
    pub columns: usize,
}

impl BoundingBox {
    pub fn new(row: f64, column: f64, rows: usize, columns: usize) -> Self {
        Self { row, column, rows, columns }
    }

    pub fn contains(&self, row: f64, column: f64) -> bool {
        row >= self.row
            && row < self.row + self.rows as f64
            && column >= self.column
            && column < self.column + self.columns as f64
    }

    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.row < other.row + other.rows as f64
            && other.row < self.row + self.rows as f64
            && self.column < other.column + other.columns as f64
            && other.column < self.column + self.columns as f64
    }

    /// Centre point as `(row, column)`.
    pub fn center(&self) -> (f64, f64) {
        (
            self.row + self.rows as f64 / 2.0,
            self.column + self.columns as f64 / 2.0,
        )
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Stable identity of a registered obstacle.  Never reused within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub u64);

/// What hit an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionMark {
    /// A projectile hit it; its own debris task destroys it.
    Projectile,
    /// The player crashed into it; consumed by the game-over transition.
    Player,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub bounds: BoundingBox,
    /// At most one outstanding mark.
    pub mark: Option<CollisionMark>,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    pub row: f64,
    pub column: f64,
    pub row_speed: f64,
    pub column_speed: f64,
    /// Flipped to false exactly once, on the first crash.
    pub alive: bool,
}

impl PlayerState {
    pub fn at(row: f64, column: f64) -> Self {
        Self {
            row,
            column,
            row_speed: 0.0,
            column_speed: 0.0,
            alive: true,
        }
    }
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Directional + fire input for one tick.  Directions are -1, 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub rows_direction: i8,
    pub columns_direction: i8,
    pub fire: bool,
}
