//! Rules integration tests: the game's observable properties end to end.

use quoridor_engine::core::{
    Action, BlockingRule, GameState, PlayerId, Position, RulesConfig, SideJumpRule, Wall,
};
use quoridor_engine::rules::{
    adjacent_squares, apply_move, apply_wall, has_path_to_goal, is_wall_blocking, legal_moves,
    Quoridor,
};
use quoridor_engine::create_initial_state;

fn p(x: i8, y: i8) -> Position {
    Position::new(x, y)
}

fn jumps(rule: SideJumpRule) -> RulesConfig {
    RulesConfig::default().with_side_jumps(rule)
}

/// Place walls through the checked path, alternating seats.
fn with_walls(rules: &Quoridor, state: &GameState, walls: &[Wall]) -> GameState {
    walls.iter().fold(state.clone(), |s, &wall| {
        rules.try_apply_wall(&s, wall).expect("fixture wall should be legal")
    })
}

// =============================================================================
// Initial State
// =============================================================================

#[test]
fn test_initial_state() {
    let state = create_initial_state();

    assert_eq!(state.player(PlayerId::ZERO).position, p(4, 8));
    assert_eq!(state.player(PlayerId::ZERO).walls_remaining, 10);
    assert_eq!(state.player(PlayerId::ONE).position, p(4, 0));
    assert_eq!(state.player(PlayerId::ONE).walls_remaining, 10);
    assert!(state.walls().is_empty());
    assert_eq!(state.current_player(), PlayerId::ZERO);
    assert_eq!(state.winner(), None);
}

#[test]
fn test_initial_paths_exist() {
    let state = create_initial_state();
    for rule in [BlockingRule::PerAxis, BlockingRule::AnyAxis] {
        assert!(has_path_to_goal(&state, PlayerId::ZERO, rule));
        assert!(has_path_to_goal(&state, PlayerId::ONE, rule));
    }
}

// =============================================================================
// Topology
// =============================================================================

#[test]
fn test_adjacent_squares_whole_board() {
    for x in 0..9 {
        for y in 0..9 {
            let adj = adjacent_squares(x, y);
            let on_x_edge = x == 0 || x == 8;
            let on_y_edge = y == 0 || y == 8;
            let expected = 4 - usize::from(on_x_edge) - usize::from(on_y_edge);

            assert_eq!(adj.len(), expected, "neighbour count at ({x}, {y})");
            for n in &adj {
                assert!(n.in_bounds());
                assert_eq!((n.x - x).abs() + (n.y - y).abs(), 1);
            }
        }
    }
}

// =============================================================================
// Terminal State
// =============================================================================

#[test]
fn test_terminal_state_has_no_moves() {
    let rules = Quoridor::default();
    let state = create_initial_state().with_pawns(p(6, 1), p(2, 5));
    let won = apply_move(&state, PlayerId::ZERO, p(6, 0));

    assert_eq!(won.winner(), Some(PlayerId::ZERO));
    assert!(rules.legal_moves(&won, PlayerId::ZERO).is_empty());
    assert!(rules.legal_moves(&won, PlayerId::ONE).is_empty());
    assert!(rules.legal_walls(&won).is_empty());
}

// =============================================================================
// Walls
// =============================================================================

#[test]
fn test_overlap_rejection() {
    let rules = Quoridor::default();
    let state = with_walls(&rules, &create_initial_state(), &[Wall::horizontal(3, 3)]);

    assert!(!rules.is_legal_wall(&state, &Wall::horizontal(2, 3)));
    assert!(!rules.is_legal_wall(&state, &Wall::horizontal(4, 3)));
    assert!(!rules.is_legal_wall(&state, &Wall::vertical(3, 3)));
    assert!(rules.is_legal_wall(&state, &Wall::vertical(4, 3)));
}

#[test]
fn test_enclosure_rejected_even_though_overlap_checks_pass() {
    let rules = Quoridor::default();
    let state = with_walls(
        &rules,
        &create_initial_state(),
        &[Wall::vertical(4, 7), Wall::vertical(5, 7)],
    );

    let lid = Wall::horizontal(4, 8);
    assert!(!rules.is_legal_wall(&state, &lid));
    assert!(!rules.legal_walls(&state).contains(&lid));
    assert!(rules.try_apply_wall(&state, lid).is_err());

    // Each wall on its own was fine.
    assert!(rules.is_legal_wall(&create_initial_state(), &lid));
}

#[test]
fn test_enclosing_the_opponent_is_rejected_too() {
    let rules = Quoridor::default();
    let pawns = create_initial_state().with_pawns(p(0, 4), p(4, 7));

    // Cells (4, 6) and (4, 7) walled on three sides around player 1.
    let state = GameState::from_parts(
        pawns.players().clone(),
        [Wall::horizontal(4, 8), Wall::vertical(4, 6), Wall::vertical(5, 6)],
        PlayerId::ZERO,
    );
    assert!(rules.has_path_to_goal(&state, PlayerId::ONE));

    let lid = Wall::horizontal(3, 6);
    assert!(!rules.is_legal_wall(&state, &lid));
    assert!(rules.try_apply_wall(&state, lid).is_err());
}

#[test]
fn test_reachability_kept_along_a_fence() {
    let rules = Quoridor::default();
    let mut state = create_initial_state();

    // Fence the gap between rows 3 and 4 from column 1 to column 8. Column 0
    // is never covered by a horizontal wall, so each placement stays legal.
    for wall in [
        Wall::horizontal(1, 4),
        Wall::horizontal(3, 4),
        Wall::horizontal(5, 4),
        Wall::horizontal(7, 4),
    ] {
        assert!(rules.is_legal_wall(&state, &wall));
        state = apply_wall(&state, wall);
        assert!(rules.has_path_to_goal(&state, PlayerId::ZERO));
        assert!(rules.has_path_to_goal(&state, PlayerId::ONE));
    }

    // Cut column 0 off from player 0's side of the fence, one pair of rows
    // at a time. The last cut would strand them.
    for wall in [Wall::vertical(1, 3), Wall::vertical(1, 5)] {
        assert!(rules.is_legal_wall(&state, &wall));
        state = apply_wall(&state, wall);
    }
    assert!(!rules.is_legal_wall(&state, &Wall::vertical(1, 7)));
    assert!(rules.has_path_to_goal(&state, PlayerId::ZERO));
}

#[test]
fn test_tentative_check_never_mutates() {
    let rules = Quoridor::default();
    let state = create_initial_state();
    let before = state.clone();

    for wall in Wall::all_slots() {
        let _ = rules.is_legal_wall(&state, &wall);
    }

    assert_eq!(state, before);
}

#[test]
fn test_wall_supply_configurable() {
    let strict = Quoridor::new(RulesConfig::default().with_starting_walls(1));
    let lenient = Quoridor::new(
        RulesConfig::default()
            .with_starting_walls(1)
            .with_wall_supply_enforced(false),
    );

    let state = strict.initial_state();
    let state = strict.try_apply_wall(&state, Wall::horizontal(1, 1)).unwrap();
    let state = strict.try_apply_wall(&state, Wall::horizontal(1, 7)).unwrap();

    // Both hands are empty now.
    assert_eq!(state.player(PlayerId::ZERO).walls_remaining, 0);
    assert_eq!(state.player(PlayerId::ONE).walls_remaining, 0);

    assert!(!strict.is_legal_wall(&state, &Wall::vertical(6, 6)));
    assert!(lenient.is_legal_wall(&state, &Wall::vertical(6, 6)));

    let next = lenient.try_apply_wall(&state, Wall::vertical(6, 6)).unwrap();
    assert_eq!(next.player(PlayerId::ZERO).walls_remaining, 0);
}

// =============================================================================
// Moves and Jumps
// =============================================================================

#[test]
fn test_straight_jump_scenario() {
    let state = create_initial_state().with_pawns(p(4, 5), p(4, 4));
    let moves = legal_moves(&state, PlayerId::ZERO, &RulesConfig::default());

    assert!(moves.contains(&p(4, 3)));
    assert!(!moves.contains(&p(4, 4)));
}

#[test]
fn test_side_jump_scenario_both_rules() {
    let state = create_initial_state().with_pawns(p(4, 5), p(4, 4));
    let state = GameState::from_parts(
        state.players().clone(),
        [Wall::horizontal(4, 4)],
        PlayerId::ZERO,
    );

    assert!(is_wall_blocking(&state, p(4, 4), p(4, 3), BlockingRule::PerAxis));

    let alongside = legal_moves(&state, PlayerId::ZERO, &jumps(SideJumpRule::AlongsidePlayer));
    assert!(!alongside.contains(&p(4, 3)));
    assert!(alongside.contains(&p(3, 5)));
    assert!(alongside.contains(&p(5, 5)));

    let diagonal = legal_moves(&state, PlayerId::ZERO, &jumps(SideJumpRule::Diagonal));
    assert!(!diagonal.contains(&p(4, 3)));
    assert!(diagonal.contains(&p(3, 4)));
    assert!(diagonal.contains(&p(5, 4)));
}

#[test]
fn test_vacated_square_only_reachable_by_stepping_back() {
    let rules = Quoridor::default();
    let state = create_initial_state();

    // The square player 0 leaves is one plain step back.
    let state = rules.try_apply_move(&state, PlayerId::ZERO, p(4, 7)).unwrap();
    let state = rules.try_apply_move(&state, PlayerId::ONE, p(4, 1)).unwrap();
    assert!(rules.legal_moves(&state, PlayerId::ZERO).contains(&p(4, 8)));

    // Once walled off behind them it is gone.
    let state = rules.try_apply_wall(&state, Wall::horizontal(4, 8)).unwrap();
    let state = rules.try_apply_move(&state, PlayerId::ONE, p(4, 2)).unwrap();
    assert!(!rules.legal_moves(&state, PlayerId::ZERO).contains(&p(4, 8)));
}

#[test]
fn test_checked_move_rejects_jump_through_wall() {
    let rules = Quoridor::default();
    let state = create_initial_state().with_pawns(p(4, 5), p(4, 4));
    let state = GameState::from_parts(
        state.players().clone(),
        [Wall::horizontal(4, 4)],
        PlayerId::ZERO,
    );

    let err = rules.try_apply_move(&state, PlayerId::ZERO, p(4, 3)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Illegal action for Player 0: move (4, 3)"
    );
}

#[test]
fn test_step_alongside_a_wall_under_each_blocking_rule() {
    let per_axis = Quoridor::default();
    let any_axis = Quoridor::new(RulesConfig::default().with_blocking(BlockingRule::AnyAxis));
    let pawns = create_initial_state().with_pawns(p(3, 4), p(0, 0));
    let state = GameState::from_parts(
        pawns.players().clone(),
        [Wall::horizontal(4, 4)],
        PlayerId::ZERO,
    );

    // The wall lies on the gap above row 4, so a sideways step along row 4
    // crosses no wall edge. Only the any-axis rule stops it.
    assert!(per_axis.legal_moves(&state, PlayerId::ZERO).contains(&p(4, 4)));
    assert!(per_axis.try_apply_move(&state, PlayerId::ZERO, p(4, 4)).is_ok());

    assert!(!any_axis.legal_moves(&state, PlayerId::ZERO).contains(&p(4, 4)));
    assert!(any_axis.try_apply_move(&state, PlayerId::ZERO, p(4, 4)).is_err());
    assert!(any_axis.try_apply_move(&state, PlayerId::ZERO, p(2, 4)).is_ok());
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_win_detection_every_column() {
    for x in 0..9 {
        let state = create_initial_state().with_pawns(p(x, 1), p((x + 4) % 9, 7));

        let zero_wins = apply_move(&state, PlayerId::ZERO, p(x, 0));
        assert_eq!(zero_wins.winner(), Some(PlayerId::ZERO));

        let one_wins = apply_move(&state, PlayerId::ONE, p((x + 4) % 9, 8));
        assert_eq!(one_wins.winner(), Some(PlayerId::ONE));

        let neither = apply_move(&state, PlayerId::ZERO, p(x, 2));
        assert_eq!(neither.winner(), None);
    }
}

// =============================================================================
// Index Boundary
// =============================================================================

#[test]
fn test_player_index_boundary() {
    let rules = Quoridor::default();
    let state = rules.initial_state();

    for index in 0..2usize {
        let player = PlayerId::try_from(index).unwrap();
        assert!(!rules.legal_moves(&state, player).is_empty());
    }
    assert!(PlayerId::try_from(2usize).is_err());

    let action = Action::Move(p(4, 7));
    assert!(rules.is_legal(&state, PlayerId::ZERO, &action));
}
