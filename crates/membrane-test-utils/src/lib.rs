//! Test utilities and mock fields for membrane development.
//!
//! Provides mock implementations of [`AmplitudeField`] ([`ConstField`],
//! [`MockField`]) and assertion helpers shared by the simulator, render and
//! engine test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{assert_symmetric_about, peak_abs, windowed_peaks};

use membrane_core::AmplitudeField;
use membrane_space::{Disk, SquareGrid};

/// Every cell holds the same value; activity follows the inscribed disk.
pub struct ConstField {
    pub size: u32,
    pub value: f32,
    disk: Disk,
}

impl ConstField {
    pub fn new(size: u32, value: f32) -> Self {
        Self {
            size,
            value,
            disk: Disk::inscribed(size),
        }
    }
}

impl AmplitudeField for ConstField {
    fn grid_size(&self) -> u32 {
        self.size
    }

    fn sample(&self, x: i32, y: i32) -> Option<f32> {
        let n = self.size as i32;
        ((0..n).contains(&x) && (0..n).contains(&y)).then_some(self.value)
    }

    fn is_active(&self, x: i32, y: i32) -> bool {
        self.disk.contains(x, y)
    }
}

/// Field backed by explicit row-major values and an explicit active mask.
///
/// Start from [`MockField::all_active`] or [`MockField::inscribed`] and
/// poke individual cells with [`set`](MockField::set).
pub struct MockField {
    grid: SquareGrid,
    values: Vec<f32>,
    active: Vec<bool>,
}

impl MockField {
    /// Zero-valued field with every cell active.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not a valid grid size.
    pub fn all_active(size: u32) -> Self {
        let grid = SquareGrid::new(size).expect("valid mock grid size");
        Self {
            values: vec![0.0; grid.cell_count()],
            active: vec![true; grid.cell_count()],
            grid,
        }
    }

    /// Zero-valued field with activity from the inscribed disk.
    pub fn inscribed(size: u32) -> Self {
        let mut field = Self::all_active(size);
        field.active = field.grid.disk().mask(&field.grid);
        field
    }

    /// Set the value at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, value: f32) {
        let i = self.grid.index(x, y).expect("mock cell in bounds");
        self.values[i] = value;
    }

    /// Override activity at `(x, y)`.
    pub fn set_active(&mut self, x: i32, y: i32, active: bool) {
        let i = self.grid.index(x, y).expect("mock cell in bounds");
        self.active[i] = active;
    }
}

impl AmplitudeField for MockField {
    fn grid_size(&self) -> u32 {
        self.grid.size()
    }

    fn sample(&self, x: i32, y: i32) -> Option<f32> {
        self.grid.index(x, y).map(|i| self.values[i])
    }

    fn is_active(&self, x: i32, y: i32) -> bool {
        self.grid.index(x, y).is_some_and(|i| self.active[i])
    }
}
