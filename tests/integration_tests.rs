//! Integration tests - full sessions through the Game driver

use falling_blocks::core::render::Recorder;
use falling_blocks::core::{get_shape, Block, Game, Paint, Phase, Piece, Stat};
use falling_blocks::types::{GameAction, PieceColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Step the clock far enough for exactly one gravity step.
fn step(game: &mut Game, now: &mut u64) -> bool {
    *now += u64::from(game.clock().interval_ms()) + 1;
    game.tick(*now)
}

#[test]
fn test_hard_drop_every_piece_until_game_over() {
    let mut game = Game::new(2024, 0);
    let mut now = 0;
    let mut pieces = 0;

    while !game.is_over() {
        game.handle(GameAction::HardDrop, now);
        step(&mut game, &mut now);
        pieces += 1;
        assert!(pieces < 1_000, "game never ended");
    }

    assert_eq!(game.phase(), Phase::Over);
    // Pieces stacking in the middle column reach the top quickly.
    assert!(pieces > 5);
    assert!(game.account().score > 0);
}

#[test]
fn test_hard_drop_lands_every_kind_and_keeps_hold() {
    for kind in PieceKind::ALL {
        let mut game = Game::new(9, 0);
        game.board_mut().set_piece(Piece::new(kind));

        assert!(game.handle(GameAction::HardDrop, 0));
        let top = game.board().piece().cells().map(|(_, y, _)| y).min().unwrap();
        let height = get_shape(kind).occupied_height() as i8;
        assert_eq!(top, BOARD_HEIGHT as i8 - height, "{:?}", kind);
        assert_eq!(game.board().grid().occupied_count(), 0, "{:?}", kind);

        // Only the freeze takes hold away.
        assert!(game.board().can_hold(), "{:?}", kind);
        assert!(game.handle(GameAction::Hold, 0), "{:?}", kind);
        assert!(!game.board().can_hold(), "{:?}", kind);
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = Game::new(seed, 0);
        let mut now = 0;
        let script = [
            GameAction::MoveLeft,
            GameAction::Rotate,
            GameAction::HardDrop,
            GameAction::MoveRight,
            GameAction::MoveRight,
            GameAction::HardDrop,
            GameAction::Hold,
            GameAction::HardDrop,
        ];
        for action in script {
            game.handle(action, now);
            step(&mut game, &mut now);
        }
        (*game.account(), game.board().grid().clone())
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn test_line_clear_through_play() {
    let mut game = Game::new(1, 0);
    game.board_mut().set_piece(Piece::new(PieceKind::I));
    game.board_mut().set_next(Piece::new(PieceKind::T));
    for x in 0..BOARD_WIDTH as i8 {
        if !(3..7).contains(&x) {
            game.board_mut().grid_mut().set(
                x,
                19,
                Some(Block {
                    value: 7,
                    color: PieceColor::Red,
                }),
            );
        }
    }

    let mut now = 0;
    assert!(game.handle(GameAction::HardDrop, now));
    // 19 rows at 2 points each
    assert_eq!(game.account().score, 38);
    step(&mut game, &mut now);

    assert_eq!(game.account().score, 38 + 100);
    assert_eq!(game.account().lines, 1);
    assert_eq!(game.board().grid().occupied_count(), 0);
    assert_eq!(game.board().piece().kind, PieceKind::T);
}

#[test]
fn test_paused_game_keeps_state() {
    let mut game = Game::new(8, 0);
    let before = *game.board().piece();
    game.handle(GameAction::Pause, 0);
    for action in GameAction::ALL {
        if action != GameAction::Pause {
            assert!(!game.handle(action, 0));
        }
    }
    assert!(!game.tick(60_000));
    assert_eq!(*game.board().piece(), before);
}

#[test]
fn test_restart_after_game_over() {
    let mut game = Game::new(3, 0);
    let mut now = 0;
    while !game.is_over() {
        game.handle(GameAction::HardDrop, now);
        step(&mut game, &mut now);
    }
    game.new_game(now);
    assert!(game.is_running());
    assert_eq!(game.account().score, 0);
    assert_eq!(game.account().level, 1);
    assert!(game.board().grid().occupied_count() == 0);
}

#[test]
fn test_stats_sink_sees_scoring() {
    let mut game = Game::new(4, 0);
    let mut log = Vec::new();
    game.flush_stats(&mut |s: Stat, v: u32| log.push((s, v)));
    log.clear();

    game.handle(GameAction::SoftDrop, 0);
    game.handle(GameAction::SoftDrop, 0);
    game.flush_stats(&mut |s: Stat, v: u32| log.push((s, v)));
    assert_eq!(log, vec![(Stat::Score, 2)]);
}

#[test]
fn test_draw_three_views() {
    let mut game = Game::new(6, 0);
    game.board_mut().set_piece(Piece::new(PieceKind::O));
    game.board_mut().set_next(Piece::new(PieceKind::I));
    game.handle(GameAction::Hold, 0);

    let (mut main, mut next, mut hold) = (Recorder::new(), Recorder::new(), Recorder::new());
    game.draw(&mut main, &mut next, &mut hold);

    // Active piece is now the I, with its ghost on the floor.
    let ghost = main.filled(Paint::Outline);
    assert!(ghost.iter().all(|&(_, y, _)| y == 19));
    assert_eq!(ghost.len(), 4);

    let held = hold.filled(Paint::Solid);
    assert_eq!(
        held.iter().map(|&(x, y, _)| (x, y)).collect::<Vec<_>>(),
        vec![(0, 0), (1, 0), (0, 1), (1, 1)]
    );
    assert_eq!(next.filled(Paint::Solid).len(), 4);
}
