use rand::prelude::*;
use rand::Rng;

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::direction::Orientation;
use crate::error::FleetError;
use crate::ship::{ship_at, ship_size, SHIP_SIZES};

const RANDOM_RESTARTS: usize = 100;
const RANDOM_TRIES_PER_SHIP: usize = 1_000;

/// One player's ships, kept as one board layer per ship so each can be
/// tracked on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fleet {
    sizes: Vec<usize>,
    ships: Vec<Board>,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl Fleet {
    /// Empty fleet expecting the standard ship sizes.
    pub fn new() -> Self {
        Self::with_sizes(&SHIP_SIZES)
    }

    /// Empty fleet expecting ships of `sizes`, placed in that order.
    pub fn with_sizes(sizes: &[usize]) -> Self {
        Fleet {
            sizes: sizes.to_vec(),
            ships: Vec::with_capacity(sizes.len()),
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn ships(&self) -> &[Board] {
        &self.ships
    }

    /// Size of the next ship to place, or `None` once the fleet is complete.
    pub fn next_size(&self) -> Option<usize> {
        self.sizes.get(self.ships.len()).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.ships.len() >= self.sizes.len()
    }

    /// All cells occupied by any ship.
    pub fn occupied(&self) -> Board {
        self.ships.iter().fold(Board::EMPTY, |acc, &ship| acc | ship)
    }

    /// True if `ship` keeps clear of every placed ship, corners included.
    pub fn can_place(&self, ship: Board) -> bool {
        !ship.clipped_surround_mask().intersects(self.occupied())
    }

    pub fn add_ship(&mut self, ship: Board) -> Result<(), FleetError> {
        let expected = self.next_size().ok_or(FleetError::Full)?;
        let found = ship_size(ship);
        if found != expected {
            return Err(FleetError::WrongSize { expected, found });
        }
        if !self.can_place(ship) {
            return Err(FleetError::Collision);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Lay out ships of `sizes` at random non-touching spots.
    ///
    /// Gives up and returns `None` if no layout turns up after a bounded
    /// number of restarts.
    pub fn random<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Option<Fleet> {
        'restart: for _ in 0..RANDOM_RESTARTS {
            let mut fleet = Fleet::with_sizes(sizes);
            while let Some(size) = fleet.next_size() {
                let mut placed = false;
                for _ in 0..RANDOM_TRIES_PER_SHIP {
                    let orientation = if rng.random::<bool>() {
                        Orientation::Horizontal
                    } else {
                        Orientation::Vertical
                    };
                    let x = rng.random_range(0..BOARD_SIZE);
                    let y = rng.random_range(0..BOARD_SIZE);
                    let Ok(ship) = ship_at(x, y, size, orientation) else {
                        continue;
                    };
                    if fleet.add_ship(ship).is_ok() {
                        placed = true;
                        break;
                    }
                }
                if !placed {
                    continue 'restart;
                }
            }
            return Some(fleet);
        }
        None
    }

    /// Add a layer without any size or adjacency checks.
    pub fn add_ship_unchecked(&mut self, ship: Board) {
        self.ships.push(ship);
    }

    /// Ship cells that `shots` landed on.
    pub fn hits(&self, shots: Board) -> Board {
        self.occupied() & shots
    }

    /// Ship cells not yet shot.
    pub fn intact(&self, shots: Board) -> Board {
        self.occupied() & !shots
    }

    /// Ships whose every cell has been shot.
    pub fn sunk(&self, shots: Board) -> impl Iterator<Item = Board> + '_ {
        self.ships
            .iter()
            .copied()
            .filter(move |ship| !ship.is_empty() && (*ship & !shots).is_empty())
    }

    /// `shots` plus the water around every sunk ship, which can no longer
    /// hold a ship.
    pub fn reveal(&self, shots: Board) -> Board {
        self.sunk(shots)
            .fold(shots, |acc, ship| acc | ship.clipped_surround_mask())
    }

    pub fn all_sunk(&self, shots: Board) -> bool {
        self.intact(shots).is_empty()
    }
}
