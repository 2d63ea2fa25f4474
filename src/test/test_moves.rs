mod test {
    use crate::core::Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let level = r#"
#@ *#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
# @*#
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_push_pushes() {
        let level = r#"
#@$ .#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
# @$.#
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let level = r#"
#@$$ ..#
"#;
        let mut game = GameTestState::new(level);
        let outcome = game.try_move(Right);

        assert!(!outcome.moved);
        let expected_level = r#"
#@$$ ..#
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_block_pushed_into_wall_nothing_moves() {
        let level = r#"
#@$#
#. #
"#;
        let mut game = GameTestState::new(level);
        let outcome = game.try_move(Right);

        assert!(!outcome.moved);
        game.assert_matches(level);
    }

    #[test]
    fn when_move_into_wall_nothing_moves() {
        let level = r#"
#+$ #
"#;
        let mut game = GameTestState::new(level);
        let outcome = game.try_move(Left);

        assert!(!outcome.moved);
        game.assert_matches(level);
    }

    #[test]
    fn when_player_leaves_target_target_reappears() {
        let level = r#"
#+$ #
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
#.@$#
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_move_off_grid_edge_nothing_moves() {
        let level = r#"
@*
"#;
        let mut game = GameTestState::new(level);

        assert!(!game.try_move(Left).moved);
        assert!(!game.try_move(Up).moved);
        game.assert_matches(level);
    }

    #[test]
    fn when_block_pushed_off_grid_edge_nothing_moves() {
        let level = r#"
$@ .
"#;
        let mut game = GameTestState::new(level);
        let outcome = game.try_move(Left);

        assert!(!outcome.moved);
        game.assert_matches(level);
    }

    #[test]
    fn when_push_onto_target_box_merges_with_target() {
        let level = r#"
#####
#@$.#
#####
"#;
        let mut game = GameTestState::new(level);
        let outcome = game.assert_move(Right);

        assert!(outcome.solved);
        game.assert_matches(r#"
#####
# @*#
#####
"#);
    }

    #[test]
    fn when_player_moves_back_game_is_equal() {
        let level = r#"
#@ *#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game.clone();
        game.assert_move(Right);
        game.assert_move(Left);

        game.assert_matches(level);
        assert_eq!(original_state, game.game);
    }
}
