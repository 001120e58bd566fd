//! End-to-end scenarios for ticking faces on a wired cube.
//!
//! These exercise `tick`, `perturb` and `LockstepCube` together with the
//! real topology rather than any single function in isolation.

use liquiprism_core::{CellState, CubeError, FaceId, LayoutError, TopologyError};
use liquiprism_engine::{perturb, tick, tick_cube, CubeConfig, LockstepCube, RulePolicy};
use liquiprism_rules::Rule;
use liquiprism_space::{Cube, Face, FillMode, Topology};
use liquiprism_test_utils::patterns::{COLUMN_OF_THREE_5X5, PLUS_5X5, ROW_OF_THREE_5X5};
use liquiprism_test_utils::{
    cube_with_face, cube_with_faces, grid_from_rows, seeded_rng, self_wrapped_with_face,
};
use proptest::prelude::*;

fn random_cube(size: usize, seed: u64) -> Cube {
    Cube::filled(size, Topology::cube(), FillMode::Random, &mut seeded_rng(seed))
}

#[test]
fn row_of_three_on_isolated_face_becomes_column() {
    let mut cube = cube_with_face(FaceId(0), grid_from_rows(&ROW_OF_THREE_5X5));
    tick_cube(&mut cube, FaceId(0), Rule::Classic, &mut seeded_rng(0)).unwrap();

    let grid = cube.face(FaceId(0)).unwrap().grid();
    assert_eq!(grid, &grid_from_rows(&COLUMN_OF_THREE_5X5));
    let alive: Vec<(usize, usize)> = grid
        .iter()
        .filter(|(_, _, s)| s.is_alive())
        .map(|(r, c, _)| (r, c))
        .collect();
    assert_eq!(alive, vec![(0, 2), (1, 2), (2, 2)]);
}

#[test]
fn four_alive_neighbours_give_birth_under_rule_one() {
    let mut cube = cube_with_face(FaceId(4), grid_from_rows(&PLUS_5X5));
    let report = tick_cube(&mut cube, FaceId(4), Rule::Conventional, &mut seeded_rng(0)).unwrap();

    let grid = cube.face(FaceId(4)).unwrap().grid();
    assert_eq!(grid.get(2, 2), Some(CellState::Alive));
    assert_eq!(grid.alive_count(), 5);
    assert_eq!(report.births, 1);
    assert_eq!(report.deaths, 0);
}

#[test]
fn cross_face_neighbour_completes_a_birth() {
    // Face 0 cell (0, 2) has three alive neighbours on its own face; the
    // fourth is the cell above it on face 4 (last row, column 2).
    let face0 = grid_from_rows(&ROW_OF_THREE_5X5);
    let mut face4 = grid_from_rows(&[[0u8; 5]; 5]);
    face4.set(4, 2, CellState::Alive).unwrap();
    let mut cube = cube_with_faces(
        Topology::cube(),
        [(FaceId(0), face0), (FaceId(4), face4)],
    );

    tick_cube(&mut cube, FaceId(0), Rule::Conventional, &mut seeded_rng(0)).unwrap();
    let grid = cube.face(FaceId(0)).unwrap().grid();
    assert_eq!(grid.get(0, 2), Some(CellState::Alive));
    // Row 2 has no cross-face help and stays dead.
    assert_eq!(grid.get(2, 2), Some(CellState::Dead));
}

#[test]
fn self_wrapped_empty_face_stays_empty() {
    let mut cube = self_wrapped_with_face(FaceId(0), grid_from_rows(&[[0u8; 6]; 6]));
    for rule in [Rule::Conventional, Rule::Stochastic, Rule::Classic] {
        let report = tick_cube(&mut cube, FaceId(0), rule, &mut seeded_rng(1)).unwrap();
        assert_eq!(report.activity, 0);
        assert_eq!(cube.face(FaceId(0)).unwrap().grid().alive_count(), 0);
    }
}

#[test]
fn self_wrapped_border_sees_its_own_opposite_edge() {
    // On a self-wrapped face the cell at (0, 1) has (4, 1) as its "up"
    // neighbour, which completes four alive neighbours.
    let grid = grid_from_rows(&[
        [0, 0, 0, 0, 0],
        [1, 1, 1, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0],
    ]);
    let mut wrapped = self_wrapped_with_face(FaceId(0), grid.clone());
    tick_cube(&mut wrapped, FaceId(0), Rule::Conventional, &mut seeded_rng(0)).unwrap();
    assert_eq!(
        wrapped.face(FaceId(0)).unwrap().get(0, 1),
        Some(CellState::Alive)
    );

    let mut plain = cube_with_face(FaceId(0), grid);
    tick_cube(&mut plain, FaceId(0), Rule::Conventional, &mut seeded_rng(0)).unwrap();
    assert_eq!(plain.face(FaceId(0)).unwrap().get(0, 1), Some(CellState::Dead));
}

#[test]
fn rule_one_is_bit_for_bit_deterministic() {
    let start = random_cube(9, 21);
    let mut a = start.clone();
    let mut b = start;
    for face in FaceId::ALL {
        tick_cube(&mut a, face, Rule::Conventional, &mut seeded_rng(1)).unwrap();
        tick_cube(&mut b, face, Rule::Conventional, &mut seeded_rng(2)).unwrap();
    }
    assert_eq!(a, b);
}

#[test]
fn traversal_order_is_visible_to_later_faces() {
    // Face 1's left neighbour is face 0; face 0's right neighbour is face 1.
    let face0 = grid_from_rows(&[[0u8, 0, 0], [0, 0, 1], [0, 0, 0]]);
    let face1 = grid_from_rows(&[[1u8, 1, 0], [0, 0, 0], [1, 0, 0]]);
    let start = cube_with_faces(Topology::cube(), [(FaceId(0), face0), (FaceId(1), face1)]);

    // Face 1 first: (1, 0) sees face 0's lone cell still alive and is born.
    let mut one_first = start.clone();
    tick_cube(&mut one_first, FaceId(1), Rule::Conventional, &mut seeded_rng(0)).unwrap();
    tick_cube(&mut one_first, FaceId(0), Rule::Conventional, &mut seeded_rng(0)).unwrap();
    assert_eq!(
        one_first.face(FaceId(1)).unwrap().get(1, 0),
        Some(CellState::Alive)
    );

    // Face 0 first: the lone cell has already died, so no birth.
    let mut zero_first = start;
    tick_cube(&mut zero_first, FaceId(0), Rule::Conventional, &mut seeded_rng(0)).unwrap();
    tick_cube(&mut zero_first, FaceId(1), Rule::Conventional, &mut seeded_rng(0)).unwrap();
    assert_eq!(
        zero_first.face(FaceId(1)).unwrap().get(1, 0),
        Some(CellState::Dead)
    );
}

#[test]
fn perturb_five_on_empty_ten_by_ten() {
    let mut a = Face::new(10);
    let mut b = Face::new(10);
    perturb(&mut a, 5, &mut seeded_rng(2024));
    perturb(&mut b, 5, &mut seeded_rng(2024));
    assert!(a.grid().alive_count() <= 5);
    assert_eq!(a, b);
}

#[test]
fn unknown_face_leaves_every_grid_unmodified() {
    let mut cube = random_cube(5, 8);
    let before = cube.clone();
    let (faces, topology) = cube.split_mut();

    let err = faces[0]
        .neighbours(0, 0, FaceId(42), topology, faces)
        .unwrap_err();
    assert_eq!(
        err,
        CubeError::InvalidTopology(TopologyError::UnknownFace { face: FaceId(42) })
    );
    let err = tick(faces, FaceId(42), topology, Rule::Stochastic, &mut seeded_rng(0)).unwrap_err();
    assert!(matches!(err, CubeError::InvalidTopology(_)));
    assert_eq!(cube, before);
}

#[test]
fn neighbours_and_tick_agree_on_unknown_face_without_siblings() {
    let topology = Topology::cube();
    let expected = CubeError::InvalidTopology(TopologyError::UnknownFace { face: FaceId(7) });

    let from_neighbours = Face::new(4)
        .neighbours(0, 0, FaceId(7), &topology, &[])
        .unwrap_err();
    let from_tick = tick(&mut [], FaceId(7), &topology, Rule::Conventional, &mut seeded_rng(0))
        .unwrap_err();
    assert_eq!(from_neighbours, expected);
    assert_eq!(from_tick, expected);
}

#[test]
fn inconsistent_sibling_sizes_fail_the_whole_tick() {
    let mut faces: Vec<Face> = (0..6).map(|_| Face::new(4)).collect();
    faces[0].set(1, 1, CellState::Alive).unwrap();
    faces[1] = Face::new(3);
    let before = faces.clone();

    let err = tick(
        &mut faces,
        FaceId(0),
        &Topology::cube(),
        Rule::Conventional,
        &mut seeded_rng(0),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CubeError::InvalidConfiguration(LayoutError::GridSizeMismatch { .. })
    ));
    assert_eq!(faces, before);
}

#[test]
fn lockstep_run_matches_manual_ordered_ticks() {
    let config = CubeConfig {
        grid_size: 7,
        seed: 99,
        fill: FillMode::Random,
        policy: RulePolicy::Fixed(Rule::Conventional),
        ..Default::default()
    };
    let mut world = LockstepCube::new(config).unwrap();
    let mut manual = world.cube().clone();

    for _ in 0..10 {
        world.step().unwrap();
        for face in FaceId::ALL {
            tick_cube(&mut manual, face, Rule::Conventional, &mut seeded_rng(0)).unwrap();
        }
    }
    assert_eq!(world.cube(), &manual);
}

proptest! {
    #[test]
    fn activity_equals_cells_changed(
        size in 1usize..9,
        seed in any::<u64>(),
        face in 0u8..6,
        stochastic in any::<bool>(),
    ) {
        let mut cube = random_cube(size, seed);
        let rule = if stochastic { Rule::Stochastic } else { Rule::Conventional };
        let report = tick_cube(&mut cube, FaceId(face), rule, &mut seeded_rng(seed)).unwrap();

        let f = cube.face(FaceId(face)).unwrap();
        let changed = f.grid().diff_count(f.previous_grid());
        prop_assert_eq!(f.activity_count() as usize, changed);
        prop_assert_eq!(report.activity, f.activity_count());
        prop_assert_eq!(report.births + report.deaths, report.activity);
    }
}
