use cube_core::{CornerId, CubeState, Direction, EdgeId, Face, parse_move_sequence};
use layer_solver::{SolveError, solve};

fn scrambled(seed: u64, length: usize) -> CubeState {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut cube = CubeState::solved();
    for _ in 0..length {
        let face = Face::ALL[rng.usize(..6)];
        let direction = if rng.bool() {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        cube.apply_move(face, direction);
    }
    cube
}

#[test_log::test]
fn solved_cube_yields_empty_sequence() {
    let mut cube = CubeState::solved();
    let moves = solve(&mut cube).unwrap();
    assert!(moves.is_empty());
    assert!(cube.is_solved());
}

#[test_log::test]
fn solves_a_fixed_scramble() {
    let mut cube = CubeState::solved();
    for token in parse_move_sequence("F R U' L2 D B'").unwrap() {
        cube.apply_move(token.face, token.direction);
    }
    let replay = cube.clone();

    let moves = solve(&mut cube).unwrap();
    assert!(cube.is_solved());

    let mut replay = replay;
    for token in moves {
        replay.apply_move(token.face, token.direction);
    }
    assert!(replay.is_solved());
}

#[test_log::test]
fn solves_random_scrambles_and_solutions_replay() {
    for seed in 0..50 {
        let mut cube = scrambled(seed, 30);
        let replay = cube.clone();

        let moves = solve(&mut cube).unwrap();
        assert!(cube.is_solved(), "solver left seed {seed} unsolved");

        let mut replay = replay;
        for token in &moves {
            replay.apply_move(token.face, token.direction);
        }
        assert!(
            replay.is_solved(),
            "returned sequence does not solve seed {seed}"
        );
    }
}

#[test_log::test]
fn rejects_a_twisted_corner() {
    let mut corner_ori = [0; 8];
    corner_ori[0] = 1;
    let mut cube = CubeState::from_parts([0, 1, 2, 3, 4, 5, 6, 7], corner_ori, std::array::from_fn(|i| i as u8), [0; 12])
        .unwrap();
    assert!(matches!(solve(&mut cube), Err(SolveError::Unsolvable(_))));
}

#[test_log::test]
fn rejects_a_flipped_edge() {
    let mut edge_ori = [0; 12];
    edge_ori[5] = 1;
    let mut cube = CubeState::from_parts(
        [0, 1, 2, 3, 4, 5, 6, 7],
        [0; 8],
        std::array::from_fn(|i| i as u8),
        edge_ori,
    )
    .unwrap();
    assert!(matches!(solve(&mut cube), Err(SolveError::Unsolvable(_))));
}

#[test_log::test]
fn rejects_mismatched_permutation_parity() {
    // Swapping two corners alone flips corner parity but not edge parity.
    let mut cube = CubeState::from_parts(
        [1, 0, 2, 3, 4, 5, 6, 7],
        [0; 8],
        std::array::from_fn(|i| i as u8),
        [0; 12],
    )
    .unwrap();
    assert!(matches!(solve(&mut cube), Err(SolveError::Unsolvable(_))));
}

#[test_log::test]
fn solve_moves_never_reference_invalid_pieces() {
    let mut cube = scrambled(7, 40);
    let moves = solve(&mut cube).unwrap();
    // Every slot accessor stays in range on the solved result.
    for slot in 0..8 {
        assert_eq!(cube.corner_at(CornerId::new(slot)), CornerId::new(slot));
    }
    for slot in 0..12 {
        assert_eq!(cube.edge_at(EdgeId::new(slot)), EdgeId::new(slot));
    }
    assert!(!moves.is_empty());
}
