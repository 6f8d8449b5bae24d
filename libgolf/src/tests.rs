/*  Copyright 2021-2026 the Golf Developers.
 *
 *  This file is part of libgolf.
 *
 *  libgolf is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  libgolf is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with libgolf.  If not, see <http://www.gnu.org/licenses/>. */

use std::collections::HashSet;
use std::str::FromStr;

use proptest::prelude::*;

use crate::board::{Board, Genesis};
use crate::grid::Grid;
use crate::savefile::GolfFile;
use crate::stepper::next_state;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn board_with(side_length: usize, cells: &[usize]) -> Board {
    Genesis::new()
        .side_length(side_length)
        .cells(cells.iter().cloned())
        .birth()
        .unwrap()
}

/// Full-grid scan, used as a reference for the sparse stepper.
fn naive_step(grid: &Grid, live: &HashSet<usize>) -> HashSet<usize> {
    (0..grid.cell_count())
        .filter(|&p| {
            let count = grid.neighbors(p).valid().filter(|q| live.contains(q)).count();
            next_state(live.contains(&p), count)
        })
        .collect()
}

fn candidates(grid: &Grid, live: &[usize]) -> HashSet<usize> {
    let mut set: HashSet<usize> = live.iter().cloned().collect();
    for &p in live {
        set.extend(grid.neighbors(p).valid());
    }
    set
}

mod patterns {
    use super::*;

    #[test]
    fn block_is_still_life() {
        init_logging();
        for n in 4..8 {
            // rows 1-2, cols 1-2
            let block = [n + 1, n + 2, 2 * n + 1, 2 * n + 2];
            let mut board = board_with(n, &block);
            let stats = board.step();
            assert_eq!(board.live_cells(), block.to_vec(), "n = {}", n);
            assert_eq!(stats.born, 0);
            assert_eq!(stats.died, 0);
        }
    }

    #[test]
    fn blinker_has_period_two() {
        init_logging();
        let n = 7;
        let horizontal = vec![22, 23, 24]; // row 3, cols 1-3
        let vertical = vec![16, 23, 30];
        let mut board = board_with(n, &horizontal);

        board.step();
        assert_eq!(board.live_cells(), vertical);
        board.step();
        assert_eq!(board.live_cells(), horizontal);
        assert_eq!(board.generation(), 2);
    }

    #[test]
    fn glider_translates_diagonally() {
        let n = 10;
        let grid = Grid::new(n).unwrap();
        let at = |row: usize, col: usize| grid.position(row, col).unwrap();
        let glider = |r: usize, c: usize| {
            let mut v = vec![at(r, c + 1), at(r + 1, c + 2), at(r + 2, c), at(r + 2, c + 1), at(r + 2, c + 2)];
            v.sort();
            v
        };
        let mut board = board_with(n, &glider(0, 0));
        for _ in 0..4 {
            board.step();
        }
        assert_eq!(board.live_cells(), glider(1, 1));
    }

    #[test]
    fn glider_hitting_corner_matches_full_scan() {
        // the glider reaches the bottom-right corner, where the missing neighbors change its fate
        let n = 6;
        let grid = Grid::new(n).unwrap();
        let at = |row: usize, col: usize| grid.position(row, col).unwrap();
        let mut board = board_with(n, &[at(0, 1), at(1, 2), at(2, 0), at(2, 1), at(2, 2)]);
        let mut live: HashSet<usize> = board.live_cells().into_iter().collect();
        for _ in 0..40 {
            board.step();
            live = naive_step(&grid, &live);
            assert_eq!(board.live_cells().into_iter().collect::<HashSet<usize>>(), live);
        }
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn lone_corner_cell_dies() {
        let mut board = board_with(5, &[0]);
        board.step();
        assert!(board.is_empty());
        assert!(!board.has_next());
    }

    #[test]
    fn corners_are_not_adjacent_across_edges() {
        // On a torus, cell 0 would see these three as neighbors and be born.
        let n = 5;
        let mut board = board_with(n, &[n - 1, n * n - n, n * n - 1]);
        board.step();
        assert!(!board.is_alive(0));
        assert!(board.is_empty());
    }

    #[test]
    fn stepping_empty_board_stays_empty() {
        let mut board = Board::new(8).unwrap();
        assert!(!board.has_next());
        let stats = board.step();
        assert!(board.is_empty());
        assert!(!board.has_next());
        assert_eq!(stats.evaluated, 0);
        assert_eq!(stats.population, 0);
    }

    #[test]
    fn single_cell_board() {
        let mut board = board_with(1, &[0]);
        let stats = board.step();
        assert!(board.is_empty());
        assert_eq!(stats.evaluated, 1);
    }
}

mod rules {
    use super::*;

    // center of a 5x5 grid and its eight neighbors
    const CENTER: usize = 12;
    const RING: [usize; 8] = [6, 7, 8, 11, 13, 16, 17, 18];

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let mut board = board_with(5, &RING[..3]);
        board.step();
        assert!(board.is_alive(CENTER));
    }

    #[test]
    fn dead_cell_with_two_or_four_neighbors_stays_dead() {
        for &count in &[2, 4] {
            let mut board = board_with(5, &RING[..count]);
            board.step();
            assert!(!board.is_alive(CENTER), "{} neighbors", count);
        }
    }

    #[test]
    fn live_cell_survival_depends_on_count() {
        for count in 0..=8 {
            let mut cells = RING[..count].to_vec();
            cells.push(CENTER);
            let mut board = board_with(5, &cells);
            board.step();
            assert_eq!(board.is_alive(CENTER), count == 2 || count == 3, "{} neighbors", count);
        }
    }
}

mod visitation {
    use super::*;

    #[test]
    fn shared_neighbors_are_evaluated_once() {
        // 12 and 14 share the column of cells between them
        let grid = Grid::new(5).unwrap();
        let cells = [12, 14];
        let mut board = board_with(5, &cells);
        let stats = board.step();
        let expected = candidates(&grid, &cells);
        assert_eq!(stats.evaluated, expected.len());
        assert_eq!(stats.evaluated, 12);

        let evaluations = board.stepper().evaluations();
        assert_eq!(evaluations.keys().cloned().collect::<HashSet<usize>>(), expected);
        for shared in &[8, 13, 18] {
            assert_eq!(evaluations[shared], 1, "{}", shared);
        }
    }
}

fn board_strategy() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..16).prop_flat_map(|n| (Just(n), proptest::collection::vec(0..n * n, 0..=n * n)))
}

proptest! {
    #[test]
    fn sparse_step_matches_full_scan((n, cells) in board_strategy()) {
        let grid = Grid::new(n).unwrap();
        let mut board = board_with(n, &cells);
        let mut expected: HashSet<usize> = cells.iter().cloned().collect();
        for _ in 0..3 {
            board.step();
            expected = naive_step(&grid, &expected);
            let actual: HashSet<usize> = board.live_cells().into_iter().collect();
            prop_assert_eq!(&actual, &expected);
        }
    }

    #[test]
    fn every_candidate_is_evaluated_exactly_once((n, cells) in board_strategy()) {
        let grid = Grid::new(n).unwrap();
        let mut board = board_with(n, &cells);
        let before = board.live_cells();
        let stats = board.step();
        let expected = candidates(&grid, &before);
        let evaluations = board.stepper().evaluations();
        prop_assert_eq!(evaluations.keys().cloned().collect::<HashSet<usize>>(), expected.clone());
        prop_assert!(evaluations.values().all(|&count| count == 1));
        prop_assert_eq!(stats.evaluated, expected.len());
        prop_assert_eq!(stats.population, board.population());
        prop_assert_eq!(
            before.len() + stats.born - stats.died,
            board.population()
        );
    }

    #[test]
    fn steps_stay_on_grid((n, cells) in board_strategy()) {
        let mut board = board_with(n, &cells);
        for _ in 0..5 {
            board.step();
            prop_assert!(board.live_cells().iter().all(|&p| p < n * n));
        }
    }

    #[test]
    fn save_file_round_trip((n, cells) in board_strategy()) {
        let board = board_with(n, &cells);
        let text = GolfFile::from_board(&board).to_string();
        let reloaded = GolfFile::from_str(&text).unwrap().to_board().unwrap();
        prop_assert_eq!(reloaded.side_length(), board.side_length());
        prop_assert_eq!(reloaded.live_cells(), board.live_cells());
    }

    #[test]
    fn comma_listing_round_trip((n, cells) in board_strategy()) {
        let board = board_with(n, &cells);
        let text = format!("{}\n{}", board.side_length(), board.to_listing(","));
        let reloaded = GolfFile::from_str(&text).unwrap();
        prop_assert_eq!(reloaded.cells, board.live_cells());
    }
}
