//! Session snapshots must round-trip exactly through an external
//! serializer: same cells, counters, letter states, and undo behaviour
//! after restore.

use puzzle_core::games::hangman::HangmanGame;
use puzzle_core::games::sliding::{Board, SlideMove, SlidingTiles, SlidingTilesBuilder};
use puzzle_core::Tile;

fn ids(game: &SlidingTiles) -> Vec<u32> {
    game.board().iter().map(|t| t.id()).collect()
}

/// A session two committed moves deep, with undo history to match.
fn mid_game_session() -> SlidingTiles {
    let num_tiles = 9u32;
    let mut tiles: Vec<Tile> = (0..num_tiles).map(Tile::numbered).collect();
    tiles[num_tiles as usize - 1].set_blank();

    let mut board = Board::new(3, tiles, 3);
    // Walk the blank up and left.
    board.make_move(&SlideMove::new(2, 2, 2, 1));
    board.make_move(&SlideMove::new(2, 1, 1, 1));
    SlidingTiles::from_board(board)
}

/// A mid-game board resumes exactly from JSON, undo history included.
#[test]
fn test_sliding_session_roundtrips_json() {
    let game = mid_game_session();

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: SlidingTiles = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(ids(&restored), ids(&game));
    assert_eq!(restored.board().moves_made(), 2);
    assert_eq!(restored.board().undos_remaining(), 2);
    assert_eq!(restored.board().max_undo_moves(), 3);

    // Undo works across the boundary and walks back the same states.
    let mut original = game;
    assert!(original.undo_last_move());
    assert!(restored.undo_last_move());
    assert_eq!(ids(&restored), ids(&original));
    assert_eq!(restored.board().moves_made(), 3);
}

/// The compact binary encoding round-trips the same session.
#[test]
fn test_sliding_session_roundtrips_bincode() {
    let game = mid_game_session();

    let bytes = bincode::serialize(&game).unwrap();
    let restored: SlidingTiles = bincode::deserialize(&bytes).unwrap();

    assert_eq!(restored, game);
}

/// An image-tile board carries its payload through a snapshot.
#[test]
fn test_image_board_roundtrips() {
    let game = SlidingTilesBuilder::new()
        .size(4)
        .seed(5)
        .image(vec![1, 2, 3, 4])
        .build();

    let bytes = bincode::serialize(&game).unwrap();
    let restored: SlidingTiles = bincode::deserialize(&bytes).unwrap();

    assert_eq!(restored.board().image(), Some(&[1, 2, 3, 4][..]));
}

/// A mid-game hangman session resumes with its counters and letter
/// states, and plays on to the same finish.
#[test]
fn test_hangman_session_roundtrips() {
    let mut game = HangmanGame::new("ice cream", "Food").unwrap();
    game.make_letter_guess('c').unwrap();
    game.make_letter_guess('z').unwrap();
    game.make_answer_guess("ice cold");

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: HangmanGame = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.game_state(), game.game_state());
    assert_eq!(restored.num_lives(), 1);
    assert_eq!(restored.num_wrong_letters(), 1);
    assert_eq!(restored.num_answer_guesses(), 1);

    // A replayed guess is still rejected after restore.
    assert!(!restored.make_letter_guess('c').unwrap());

    assert!(restored.make_answer_guess("ice cream"));
    assert!(restored.did_user_win());
}
