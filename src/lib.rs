pub mod board;
pub mod constants;
pub mod direction;
pub mod error;
pub mod fleet;
pub mod position;
pub mod ship;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn battleboard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_function(wrap_pyfunction!(py_create_ship, m)?)?;
    m.add_function(wrap_pyfunction!(py_place_ship, m)?)?;
    m.add("BOARD_SIZE", constants::BOARD_SIZE)?;
    m.add("MAX_SHIP_SIZE", constants::MAX_SHIP_SIZE)?;
    m.add("SHIP_SIZES", ship::SHIP_SIZES.to_vec())?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::Board;
    use crate::constants::{BOARD_SIZE, MAX_SHIP_SIZE};
    use crate::direction::{Direction, MoveStatus, Orientation};
    use crate::ship;
    use pyo3::exceptions::PyValueError;

    fn parse_direction(direction: &str) -> PyResult<Direction> {
        Direction::from_name(direction).ok_or_else(|| {
            PyErr::new::<PyValueError, _>(format!(
                "Invalid direction '{}', expected up, down, left or right",
                direction
            ))
        })
    }

    fn check_coords(x: usize, y: usize) -> PyResult<()> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "Coordinates ({}, {}) are outside the 10x10 board",
                x, y
            )));
        }
        Ok(())
    }

    fn check_ship_size(size: usize) -> PyResult<()> {
        if !(1..=MAX_SHIP_SIZE).contains(&size) {
            return Err(PyErr::new::<PyValueError, _>(
                "Ship size must be between 1 and 5",
            ));
        }
        Ok(())
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        #[pyo3(signature = (bits = 0))]
        pub fn new(bits: u128) -> PyResult<Self> {
            Board::from_bits(bits)
                .map(|board| PyBoard { board })
                .ok_or_else(|| {
                    PyErr::new::<PyValueError, _>("Board has bits set in the padding region")
                })
        }

        #[staticmethod]
        pub fn parse(text: &str) -> PyResult<Self> {
            text.parse::<Board>()
                .map(|board| PyBoard { board })
                .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
        }

        pub fn bits(&self) -> u128 {
            self.board.bits()
        }

        pub fn count(&self) -> u32 {
            self.board.count()
        }

        pub fn is_empty(&self) -> bool {
            self.board.is_empty()
        }

        pub fn get(&self, x: usize, y: usize) -> PyResult<bool> {
            check_coords(x, y)?;
            Ok(self.board.get(x, y))
        }

        pub fn set(&self, x: usize, y: usize, value: bool) -> PyResult<PyBoard> {
            check_coords(x, y)?;
            Ok(PyBoard {
                board: self.board.set(x, y, value),
            })
        }

        pub fn cells(&self) -> Vec<(usize, usize)> {
            self.board
                .iter_ones()
                .map(|p| (p.x as usize, p.y as usize))
                .collect()
        }

        pub fn transpose(&self) -> PyBoard {
            PyBoard {
                board: self.board.transpose(),
            }
        }

        pub fn surround_mask(&self) -> PyBoard {
            PyBoard {
                board: self.board.surround_mask(),
            }
        }

        pub fn clipped_surround_mask(&self) -> PyBoard {
            PyBoard {
                board: self.board.clipped_surround_mask(),
            }
        }

        pub fn wrapping_move(&self, step: usize, direction: &str) -> PyResult<PyBoard> {
            let direction = parse_direction(direction)?;
            Ok(PyBoard {
                board: self.board.wrapping_move(step, direction),
            })
        }

        /// Returns `(board, moved)`; a blocked move returns the board unchanged.
        pub fn saturated_move(&self, direction: &str) -> PyResult<(PyBoard, bool)> {
            let direction = parse_direction(direction)?;
            let (board, status) = self.board.saturated_move(direction);
            Ok((PyBoard { board }, status == MoveStatus::Moved))
        }

        pub fn cutting_move(&self, direction: &str) -> PyResult<PyBoard> {
            let direction = parse_direction(direction)?;
            Ok(PyBoard {
                board: self.board.cutting_move(direction),
            })
        }

        pub fn __and__(&self, other: &PyBoard) -> PyBoard {
            PyBoard {
                board: self.board & other.board,
            }
        }

        pub fn __or__(&self, other: &PyBoard) -> PyBoard {
            PyBoard {
                board: self.board | other.board,
            }
        }

        pub fn __eq__(&self, other: &PyBoard) -> bool {
            self.board == other.board
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.board.hash(&mut hasher);
            hasher.finish()
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Board(0x{:032x})", self.board.bits())
        }
    }

    #[pyfunction]
    #[pyo3(name = "create_ship")]
    pub fn py_create_ship(size: usize) -> PyResult<PyBoard> {
        check_ship_size(size)?;
        Ok(PyBoard {
            board: Board::ship(size),
        })
    }

    #[pyfunction]
    #[pyo3(name = "place_ship", signature = (board, x, y, size, vertical = false))]
    pub fn py_place_ship(
        board: &PyBoard,
        x: usize,
        y: usize,
        size: usize,
        vertical: bool,
    ) -> PyResult<PyBoard> {
        let orientation = if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        ship::place_ship(board.board, x, y, size, orientation)
            .map(|board| PyBoard { board })
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }
}
