//! Tests for human and automated players.

use std::time::Duration;
use strictly_console::{AutomatedPlayer, Board, Cell, HumanPlayer, Mark, Player};

fn transcript(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[tokio::test]
async fn test_human_retries_until_valid() {
    let mut board = Board::new();
    let mut human = HumanPlayer::new("Ada", Mark::O, &b"9\nabc\n0\n"[..], Vec::new());

    let position = human.take_turn(&mut board).await.unwrap();

    assert_eq!(position, 0);
    assert_eq!(human.rejected_attempts(), 2);
    assert_eq!(board.get(0), Some(Cell::Occupied(Mark::O)));
    assert_eq!(board.occupied_count(), 1);

    let out = transcript(human.output());
    assert_eq!(out.matches("Invalid input").count(), 2);
    assert_eq!(out.matches("Ada's turn (O)").count(), 3);
}

#[tokio::test]
async fn test_human_rejects_occupied_cell() {
    let mut board = Board::new();
    board.make_move(4, Mark::X);
    let mut human = HumanPlayer::new("Ada", Mark::O, &b"4\n5\n"[..], Vec::new());

    let position = human.take_turn(&mut board).await.unwrap();

    assert_eq!(position, 5);
    assert_eq!(human.rejected_attempts(), 1);
    assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
    assert!(transcript(human.output()).contains("Position already taken, try again."));
}

#[tokio::test]
async fn test_human_closed_input_is_error() {
    let mut board = Board::new();
    let mut human = HumanPlayer::new("Ada", Mark::O, &b"abc\n"[..], Vec::new());

    assert!(human.take_turn(&mut board).await.is_err());
    assert_eq!(board, Board::new());
}

#[tokio::test]
async fn test_human_reprompts_on_non_utf8_line() {
    let mut board = Board::new();
    let mut human = HumanPlayer::new("Ada", Mark::O, &b"\xff\xfe\n0\n"[..], Vec::new());

    let position = human.take_turn(&mut board).await.unwrap();

    assert_eq!(position, 0);
    assert_eq!(human.rejected_attempts(), 1);
    assert_eq!(board.get(0), Some(Cell::Occupied(Mark::O)));
    assert!(transcript(human.output()).contains("Invalid input"));
}

#[tokio::test]
async fn test_automated_finds_last_open_cell() {
    for open in 0..9 {
        for seed in 0..20 {
            let mut board = Board::new();
            let mut mark = Mark::X;
            for pos in (0..9).filter(|&p| p != open) {
                board.make_move(pos, mark);
                mark = mark.opponent();
            }

            let mut ai = AutomatedPlayer::new("Bot", Mark::X, Vec::new())
                .with_think_time(Duration::ZERO)
                .with_seed(seed);

            assert_eq!(ai.take_turn(&mut board).await.unwrap(), open);
            assert!(board.is_full());
        }
    }
}

#[tokio::test]
async fn test_automated_announces_move() {
    let mut board = Board::new();
    let mut ai = AutomatedPlayer::new("Bot", Mark::X, Vec::new())
        .with_think_time(Duration::ZERO)
        .with_seed(3);

    let position = ai.take_turn(&mut board).await.unwrap();

    assert_eq!(board.get(position), Some(Cell::Occupied(Mark::X)));
    let out = transcript(ai.output());
    assert!(out.contains("Bot's turn (X)."));
    assert!(out.contains(&format!("Bot chose position: {}", position)));
}

#[tokio::test]
async fn test_automated_same_seed_same_moves() {
    async fn play(seed: u64) -> Vec<usize> {
        let mut board = Board::new();
        let mut ai = AutomatedPlayer::new("Bot", Mark::X, Vec::new())
            .with_think_time(Duration::ZERO)
            .with_seed(seed);
        let mut moves = Vec::new();
        for _ in 0..9 {
            moves.push(ai.take_turn(&mut board).await.unwrap());
        }
        moves
    }

    let first = play(11).await;
    assert_eq!(first, play(11).await);

    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..9).collect::<Vec<_>>());
}

#[tokio::test(start_paused = true)]
async fn test_automated_waits_think_time() {
    let mut board = Board::new();
    let mut ai = AutomatedPlayer::new("Bot", Mark::X, Vec::new()).with_seed(1);

    let start = tokio::time::Instant::now();
    ai.take_turn(&mut board).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(board.occupied_count(), 1);
}
