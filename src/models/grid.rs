//! Vine Grid
//!
//! Two-dimensional storage indexed by `(vine, light)`. Cells are kept flat in
//! vine-major order, so the flat view matches the layout file order and the
//! OPC simulator channel.

use std::ops::Index;

use rayon::prelude::*;

use crate::error::GridError;

#[derive(Debug, Clone, PartialEq)]
pub struct VineGrid<T> {
    vines: usize,
    lights_per_vine: usize,
    cells: Vec<T>,
}

impl<T> VineGrid<T> {
    /// Build a grid by evaluating `f(vine, light)` for every cell in order.
    pub fn from_fn(
        vines: usize,
        lights_per_vine: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Self {
        let mut cells = Vec::with_capacity(vines * lights_per_vine);
        for vine in 0..vines {
            for light in 0..lights_per_vine {
                cells.push(f(vine, light));
            }
        }
        Self {
            vines,
            lights_per_vine,
            cells,
        }
    }

    /// Regroup a flat, vine-major sequence into vines of `lights_per_vine`.
    pub fn from_flat(lights_per_vine: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if lights_per_vine == 0 {
            return Err(GridError::ZeroLightsPerVine);
        }
        if cells.len() % lights_per_vine != 0 {
            return Err(GridError::Ragged {
                len: cells.len(),
                lights_per_vine,
            });
        }
        Ok(Self {
            vines: cells.len() / lights_per_vine,
            lights_per_vine,
            cells,
        })
    }

    pub fn num_vines(&self) -> usize {
        self.vines
    }

    pub fn lights_per_vine(&self) -> usize {
        self.lights_per_vine
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All lights on one vine, root to tip.
    pub fn vine(&self, vine: usize) -> Option<&[T]> {
        if vine >= self.vines {
            return None;
        }
        let start = vine * self.lights_per_vine;
        Some(&self.cells[start..start + self.lights_per_vine])
    }

    pub fn vines(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.vines).filter_map(move |v| self.vine(v))
    }

    pub fn as_flat(&self) -> &[T] {
        &self.cells
    }

    pub fn into_flat(self) -> Vec<T> {
        self.cells
    }

    /// Same shape, new cells computed from `(vine, light, cell)`.
    pub fn map_positions<U>(&self, mut f: impl FnMut(usize, usize, &T) -> U) -> VineGrid<U> {
        let lights = self.lights_per_vine;
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| f(i / lights, i % lights, cell))
            .collect();
        VineGrid {
            vines: self.vines,
            lights_per_vine: lights,
            cells,
        }
    }

    /// Same shape, new cells computed in parallel from `(flat_index, cell)`.
    /// Output order matches input order.
    pub fn par_map_indexed<U, F>(&self, f: F) -> VineGrid<U>
    where
        T: Sync,
        U: Send,
        F: Fn(usize, &T) -> U + Sync + Send,
    {
        let cells = self
            .cells
            .par_iter()
            .enumerate()
            .map(|(i, cell)| f(i, cell))
            .collect();
        VineGrid {
            vines: self.vines,
            lights_per_vine: self.lights_per_vine,
            cells,
        }
    }
}

impl<T> Index<(usize, usize)> for VineGrid<T> {
    type Output = T;

    fn index(&self, (vine, light): (usize, usize)) -> &T {
        assert!(
            vine < self.vines && light < self.lights_per_vine,
            "({vine}, {light}) out of bounds for {}x{} grid",
            self.vines,
            self.lights_per_vine
        );
        &self.cells[vine * self.lights_per_vine + light]
    }
}
