use chess_rules_core::board::Board;
use chess_rules_core::game::{ClickOutcome, Event, EventLog, GameState, Protection, Turn};
use chess_rules_core::rules::is_square_attacked_by;
use chess_rules_core::{Color, EngineConfig, Game, PieceKind, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn game_from(placement: &str, to_move: Color) -> Game {
    let board = Board::from_placement(placement).unwrap();
    Game::from_state(
        GameState::new(board, to_move).unwrap(),
        EngineConfig::default(),
    )
}

fn play(game: &mut Game, from: &str, to: &str) -> ClickOutcome {
    let selected = game.on_square_selected(sq(from), &mut ());
    assert!(
        matches!(selected, ClickOutcome::Selected { .. }),
        "{from} should be selectable, got {selected:?}"
    );
    let moved = game.on_square_selected(sq(to), &mut ());
    assert!(
        matches!(moved, ClickOutcome::Moved { .. }),
        "{from}-{to} should be playable, got {moved:?}"
    );
    moved
}

#[test]
fn king_pawn_opening() {
    let mut game = Game::standard();

    let outcome = game.on_square_selected(Square::at(4, 6), &mut ());
    let ClickOutcome::Selected { moves, .. } = outcome else {
        panic!("e2 pawn should be selected, got {outcome:?}");
    };
    assert_eq!(moves, vec![Square::at(4, 5), Square::at(4, 4)]);

    game.on_square_selected(Square::at(4, 4), &mut ());
    let board = game.state().board();
    assert!(board.get(Square::at(4, 6)).is_none());
    let pawn = board.get(Square::at(4, 4)).unwrap();
    assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::White));
    assert_eq!(game.state().turn(), Turn::BlackToMove);
}

#[test]
fn king_stays_off_rook_file() {
    let mut game = game_from("4r2k/8/8/8/8/8/8/4K3", Color::White);

    let outcome = game.on_square_selected(Square::at(4, 7), &mut ());
    let ClickOutcome::Selected { moves, .. } = outcome else {
        panic!("white king should be selected, got {outcome:?}");
    };
    assert!(!moves.contains(&Square::at(4, 6)));
    assert!(moves.iter().all(|m| m.x() != 4));
    for m in &moves {
        assert!(!is_square_attacked_by(game.state().board(), *m, Color::Black));
    }
    assert!(!moves.is_empty());
}

#[test]
fn queen_check_restricts_reply_to_line() {
    // Black queen d8 swings to a5, checking the white king on e1 along a5-e1.
    let mut game = game_from("3qk3/8/8/8/8/8/PP3PPP/RNB1KBNR", Color::Black);
    let outcome = play(&mut game, "d8", "a5");
    assert!(matches!(outcome, ClickOutcome::Moved { check: true, .. }));

    let line = vec![sq("e1"), sq("d2"), sq("c3"), sq("b4"), sq("a5")];
    assert_eq!(
        game.state().protection(),
        &Protection::MustBlockOrCapture {
            side: Color::White,
            line: line.clone(),
        }
    );

    let board = game.state().board().clone();
    for piece in board.pieces_of(Color::White) {
        let moves = game.legal_moves(piece.square);
        if piece.kind == PieceKind::King {
            continue;
        }
        assert!(
            moves.iter().all(|m| line.contains(m)),
            "{piece} escaped the line with {moves:?}"
        );
    }

    // Blocks that are available: b2-b4, knight b1-d2/c3, bishop c1-d2.
    assert_eq!(game.legal_moves(sq("b2")), vec![sq("b4")]);
    assert_eq!(game.legal_moves(sq("b1")), vec![sq("d2"), sq("c3")]);
    assert_eq!(game.legal_moves(sq("c1")), vec![sq("d2")]);
    assert!(game.legal_moves(sq("g1")).is_empty());

    // Answering the check releases the constraint.
    play(&mut game, "b1", "c3");
    assert_eq!(game.state().protection(), &Protection::Normal);
    assert_eq!(game.state().turn(), Turn::BlackToMove);
}

#[test]
fn rank_check_leaves_only_king_moves() {
    let mut game = game_from("4k3/8/8/8/8/8/3P4/4K2r", Color::Black);
    // Sliding the rook along the first rank is the checking move.
    let outcome = play(&mut game, "h1", "g1");
    assert!(matches!(outcome, ClickOutcome::Moved { check: true, .. }));
    assert_eq!(
        game.state().protection().line_for(Color::White),
        Some(&[sq("e1"), sq("f1"), sq("g1")][..])
    );
    // The d2 pawn cannot reach the first rank; only the king can move.
    assert!(game.legal_moves(sq("d2")).is_empty());
    let king_moves = game.legal_moves(sq("e1"));
    assert!(!king_moves.contains(&sq("d1")));
    assert!(!king_moves.contains(&sq("f1")));
    assert!(king_moves.contains(&sq("e2")));
}

#[test]
fn events_report_capture_and_check() {
    let mut game = game_from("4k3/8/8/8/8/8/3n4/R3K3", Color::White);
    let mut log = EventLog::new();

    game.on_square_selected(sq("a1"), &mut log);
    game.on_square_selected(sq("a8"), &mut log);
    let events = log.take();
    assert!(events.contains(&Event::Check { color: Color::Black }));
    assert!(events.contains(&Event::OccupancyChanged {
        square: sq("a8"),
        kind: Some(PieceKind::Rook),
        color: Some(Color::White),
    }));

    // Black's reply: only the king may move, the knight cannot reach rank 8.
    assert!(game.legal_moves(sq("d2")).is_empty());
    let outcome = game.on_square_selected(sq("d2"), &mut log);
    assert!(matches!(outcome, ClickOutcome::Selected { ref moves, .. } if moves.is_empty()));
}

#[test]
fn turn_alternates_over_a_short_game() {
    let mut game = Game::standard();
    let moves = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ];
    for (n, (from, to)) in moves.iter().enumerate() {
        play(&mut game, from, to);
        let expected = if (n + 1) % 2 == 0 {
            Turn::WhiteToMove
        } else {
            Turn::BlackToMove
        };
        assert_eq!(game.state().turn(), expected);
    }
    assert_eq!(
        game.state().board().placement(),
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R"
    );
}

#[test]
fn scholars_mate_check_is_detected() {
    let mut game = Game::standard();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("d1", "h5"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ] {
        play(&mut game, from, to);
    }
    let outcome = play(&mut game, "h5", "f7");
    assert!(matches!(
        outcome,
        ClickOutcome::Moved {
            check: true,
            captured: Some(PieceKind::Pawn),
            ..
        }
    ));
    // The queen on f7 is guarded by the bishop, so the king cannot take it.
    assert!(!game.legal_moves(sq("e8")).contains(&sq("f7")));
    assert_eq!(
        game.state().protection().line_for(Color::Black),
        Some(&[sq("e8"), sq("f7")][..])
    );
}
