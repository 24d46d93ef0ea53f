use std::io::Cursor;

use gambit_console::{Console, ConsoleConfig};
use gambit_core::GameState;

fn session(config: ConsoleConfig, input: &str) -> (Console, String) {
    let mut console = Console::new(config).unwrap();
    let mut output = Vec::new();
    console.run(Cursor::new(input), &mut output).unwrap();
    (console, String::from_utf8(output).unwrap())
}

fn quiet() -> ConsoleConfig {
    ConsoleConfig {
        show_moves: false,
        ..ConsoleConfig::default()
    }
}

#[test]
fn end_of_input_exits_cleanly() {
    let (console, out) = session(quiet(), "");
    assert_eq!(console.position().legal_moves().len(), 20);
    assert!(out.contains("White to move"));
    assert!(out.contains("8 ║ r n b q k b n r ║"));
}

#[test]
fn moves_are_played_and_bad_ones_reported() {
    let (console, out) = session(quiet(), "e2e4\ne2e4\ne7e5\nquit\nd2d4\n");
    assert_eq!(out.matches("Invalid Move").count(), 1);
    assert_eq!(
        console.position().to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
    );
}

#[test]
fn fools_mate_is_announced() {
    let (console, out) = session(quiet(), "f2f3\ne7e5\ng2g4\nd8h4\n");
    assert_eq!(console.position().state(), GameState::Checkmate);
    assert!(out.contains("White to move (check)"));
    assert!(out.contains("Game over: checkmate"));
}

#[test]
fn fen_load_and_print() {
    let fen = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
    let (console, out) = session(quiet(), &format!("fen {fen}\nfen\nfen nonsense\nexit\n"));
    assert_eq!(console.position().to_fen(), fen);
    assert!(out.lines().any(|line| line.ends_with(fen)));
    assert!(out.contains("Invalid FEN"));
}

#[test]
fn info_block() {
    let (_, out) = session(quiet(), "e2e4\ninfo\n");
    assert!(out.contains("Side to move: Black"));
    assert!(out.contains("Castling rights: KQkq"));
    assert!(out.contains("En passant: e3"));
    assert!(out.contains("Halfmove clock: 0"));
    assert!(out.contains("Fullmove number: 1"));
    assert!(out.contains("In check: no"));
    assert!(out.contains("State: ongoing"));
}

#[test]
fn move_list_shown_by_default() {
    let (_, out) = session(ConsoleConfig::default(), "");
    assert!(out.contains("Moves (20): "));
    let (_, out) = session(quiet(), "moves\n");
    assert_eq!(out.matches("Moves (20): ").count(), 1);
}

#[test]
fn perft_command() {
    let (_, out) = session(quiet(), "perft 2\nperft 9\n");
    assert!(out.contains("e2e4: 20"));
    assert!(out.contains("Nodes searched: 400"));
    assert!(out.contains("invalid perft depth: 9"));
}

#[test]
fn resign_and_draw() {
    let (console, out) = session(quiet(), "e2e4\nresign\ne7e5\ndraw\n");
    assert_eq!(console.position().state(), GameState::Resignation);
    assert!(out.contains("Black resigns"));
    assert!(out.contains("Game over: resignation"));
    assert!(out.contains("Invalid Move"));
    assert!(out.contains("game already over: resignation"));

    let (console, _) = session(quiet(), "draw\n");
    assert_eq!(console.position().state(), GameState::DrawByAgreement);
}

#[test]
fn new_resets_the_game() {
    let (console, _) = session(quiet(), "e2e4\nnew\n");
    assert_eq!(console.position().to_fen(), gambit_core::STARTING_FEN);
}

#[test]
fn clear_screen_escape() {
    let config = ConsoleConfig {
        clear_screen: true,
        ..quiet()
    };
    let (_, out) = session(config, "");
    assert!(out.starts_with("\x1b[2J"));
}
