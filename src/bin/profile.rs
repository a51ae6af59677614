use battleboard::board::Board;
use battleboard::direction::{Direction, MoveStatus};
use battleboard::fleet::Fleet;
use battleboard::ship::SHIP_SIZES;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const FLEETS: usize = 2_000;

#[hotpath::measure]
fn place_fleets(rng: &mut StdRng) -> Vec<Fleet> {
    (0..FLEETS)
        .filter_map(|_| Fleet::random(&SHIP_SIZES, rng))
        .collect()
}

/// Walk every ship as far as it goes in each direction, one saturating step
/// at a time.
#[hotpath::measure]
fn walk_ships(fleets: &[Fleet]) -> usize {
    let mut steps = 0;
    for fleet in fleets {
        for &ship in fleet.ships() {
            for dir in Direction::ALL {
                let mut current = ship;
                loop {
                    match current.saturated_move(dir) {
                        (next, MoveStatus::Moved) => {
                            current = next;
                            steps += 1;
                        }
                        (_, MoveStatus::Blocked) => break,
                    }
                }
            }
        }
    }
    steps
}

#[hotpath::measure]
fn transpose_all(fleets: &[Fleet]) -> u32 {
    fleets
        .iter()
        .map(|fleet| fleet.occupied().transpose().count())
        .sum()
}

#[hotpath::measure]
fn shoot_out(fleets: &[Fleet], rng: &mut StdRng) -> usize {
    let mut total_shots = 0;
    for fleet in fleets {
        let mut shots = Board::EMPTY;
        while !fleet.all_sunk(shots) {
            let Some(target) = (!shots).iter_ones().choose(rng) else {
                break;
            };
            shots = fleet.reveal(shots.set_at(target, true));
            total_shots += 1;
        }
    }
    total_shots
}

#[hotpath::main]
fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let fleets = place_fleets(&mut rng);
    let steps = walk_ships(&fleets);
    let cells = transpose_all(&fleets);
    let shots = shoot_out(&fleets, &mut rng);

    println!("Fleets placed: {}", fleets.len());
    println!("Saturating steps: {}", steps);
    println!("Transposed cells: {}", cells);
    if !fleets.is_empty() {
        println!(
            "Average shots to sink a fleet: {:.1}",
            shots as f64 / fleets.len() as f64
        );
    }
}
