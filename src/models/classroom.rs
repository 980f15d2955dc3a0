//! Classroom model.
//!
//! A classroom is a rectangular grid of desks: `rows × cols` desks, each
//! seating `seats_per_desk` students side by side. Capacity is always
//! computed from the grid dimensions; it is never a stored field, so it
//! cannot drift out of sync with the geometry.

use serde::{Deserialize, Serialize};

/// An exam room with a rectangular desk grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of desk rows.
    pub rows: u32,
    /// Number of desk columns.
    pub cols: u32,
    /// Students seated per desk (default: 1).
    pub seats_per_desk: u32,
}

impl Classroom {
    /// Creates a classroom with the given grid, one seat per desk.
    pub fn new(id: impl Into<String>, rows: u32, cols: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            rows,
            cols,
            seats_per_desk: 1,
        }
    }

    /// Sets the classroom name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of students per desk.
    pub fn with_seats_per_desk(mut self, seats_per_desk: u32) -> Self {
        self.seats_per_desk = seats_per_desk;
        self
    }

    /// Total seat count: `rows × cols × seats_per_desk`.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.rows * self.cols * self.seats_per_desk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_builder() {
        let room = Classroom::new("A101", 5, 8)
            .with_name("Amphitheater 101")
            .with_seats_per_desk(2);

        assert_eq!(room.id, "A101");
        assert_eq!(room.name, "Amphitheater 101");
        assert_eq!(room.rows, 5);
        assert_eq!(room.cols, 8);
        assert_eq!(room.seats_per_desk, 2);
    }

    #[test]
    fn test_capacity_is_derived() {
        // 5 rows × 8 cols × 2 seats/desk = 80
        let room = Classroom::new("A101", 5, 8).with_seats_per_desk(2);
        assert_eq!(room.capacity(), 80);

        // Default one seat per desk
        let room = Classroom::new("B12", 4, 6);
        assert_eq!(room.capacity(), 24);

        // Degenerate grid seats nobody
        let room = Classroom::new("closet", 0, 6);
        assert_eq!(room.capacity(), 0);
    }
}
