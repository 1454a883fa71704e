use tui_arcade::core::{GameSnapshot, GameState};
use tui_arcade::types::{GameAction, MoveOutcome};

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn fnv1a64_board(board: &[[u8; 10]; 20]) -> u64 {
    fnv1a64_bytes(board.iter().flat_map(|row| row.iter().copied()))
}

#[test]
fn snapshot_into_sets_board_hash() {
    let mut gs = GameState::new(1);
    gs.start();

    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_board(&snap.board));
    let empty_hash = snap.board_hash;

    while gs.soft_drop() != MoveOutcome::Locked {}

    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_board(&snap.board));
    assert_ne!(snap.board_hash, empty_hash);
}

#[test]
fn moving_the_active_piece_does_not_change_board_hash() {
    let mut gs = GameState::new(1);
    gs.start();
    let before = gs.snapshot();

    assert!(gs.apply_action(GameAction::SoftDrop));
    let after = gs.snapshot();

    assert_eq!(before.board_hash, after.board_hash);
    assert_ne!(before.active, after.active);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut gs = GameState::new(5);
    gs.start();
    let v = serde_json::to_value(gs.snapshot()).unwrap();

    assert_eq!(v["phase"], "running");
    assert_eq!(v["level"], 1);
    assert_eq!(v["drop_interval_ms"], 1000);
    assert_eq!(v["board"].as_array().unwrap().len(), 20);
    assert!(v["active"]["kind"].is_string());
    assert!(v["next"]["kind"].is_string());
}
