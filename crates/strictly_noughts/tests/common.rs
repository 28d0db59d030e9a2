//! Shared helpers for integration tests.

#![allow(dead_code)]

use rand::RngCore;
use strictly_noughts::{Board, Mark, Position};

/// Builds a board from a 9-character layout: `X` player, `O` bot, anything else empty.
pub fn board(layout: &str) -> Board {
    let mut board = Board::new();
    for (pos, ch) in Position::ALL.into_iter().zip(layout.chars()) {
        match ch {
            'X' => board.place(pos, Mark::Player).unwrap(),
            'O' => board.place(pos, Mark::Bot).unwrap(),
            _ => {}
        }
    }
    board
}

/// Random source that always yields zero, so every draw is reproducible
/// no matter how many draws came before.
#[derive(Debug, Clone, Copy)]
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}
