//! Message padding and block segmentation.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::slice::ChunksExact;

use digest::crypto_common::InvalidLength;

use crate::Block;

/// Size of one MD5 block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Bytes taken by the little-endian bit length trailer.
const LEN_SIZE: usize = 8;

/// Length of `pad(m)` for a message of `len` bytes.
#[inline]
pub const fn padded_len(len: usize) -> usize {
    (len + LEN_SIZE) / BLOCK_SIZE * BLOCK_SIZE + BLOCK_SIZE
}

/// Pads `message` to a multiple of [`BLOCK_SIZE`] bytes.
///
/// The result is the message, a `0x80` marker byte, zero bytes up to
/// 8 bytes short of a block boundary, and the message length in bits
/// as a little-endian `u64` (modulo 2^64).
pub fn pad(message: &[u8]) -> Vec<u8> {
    let total = padded_len(message.len());

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(total - LEN_SIZE, 0);
    padded.extend_from_slice(&length_trailer(message.len()));
    padded
}

#[inline]
fn length_trailer(len: usize) -> [u8; LEN_SIZE] {
    (len as u64).wrapping_mul(8).to_le_bytes()
}

/// Splits a padded message into consecutive 64-byte blocks.
///
/// Returns [`InvalidLength`] if `padded` is not block-aligned, which means
/// the caller skipped [`pad`].
pub fn split_blocks(padded: &[u8]) -> Result<Blocks<'_>, InvalidLength> {
    if padded.len() % BLOCK_SIZE != 0 {
        return Err(InvalidLength);
    }
    Ok(Blocks::new(padded))
}

/// Iterator over the blocks of a padded message, see [`split_blocks`].
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(padded: &'a [u8]) -> Self {
        debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
        Self {
            chunks: padded.chunks_exact(BLOCK_SIZE),
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(Block::from_slice)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}
