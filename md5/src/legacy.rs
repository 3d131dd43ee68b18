use alloc::{format, string::String};

use crate::compress::compress_block;
use crate::consts::S0;
use crate::padding::{pad, Blocks};
use crate::Output;

/// Single-shot MD5 engine.
///
/// Every call to [`update`](LegacyMd5::update) pads its argument as a
/// complete message and folds the resulting blocks into the registers.
/// Hashing a message in pieces therefore does *not* give the digest of
/// their concatenation; pass the whole message to one `update` call, or
/// use [`Md5`](crate::Md5) for incremental input.
#[derive(Clone)]
pub struct LegacyMd5 {
    state: [u32; 4],
    block_len: u64,
}

impl LegacyMd5 {
    /// Creates an engine with the registers set to their initial values.
    pub fn new() -> Self {
        Self {
            state: S0,
            block_len: 0,
        }
    }

    /// Pads `data` and compresses every block of it into the state.
    pub fn update(&mut self, data: &[u8]) {
        let padded = pad(data);
        for block in Blocks::new(&padded) {
            self.state = compress_block(self.state, block);
            self.block_len = self.block_len.wrapping_add(1);
        }
    }

    /// Registers `A`, `B`, `C`, `D` packed as little-endian bytes.
    pub fn digest(&self) -> Output {
        let mut out = Output::default();
        for (chunk, v) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Lowercase hex encoding of [`digest`](LegacyMd5::digest).
    pub fn hex_digest(&self) -> String {
        format!("{:x}", self.digest())
    }

    /// Number of 64-byte blocks compressed so far.
    pub fn blocks_processed(&self) -> u64 {
        self.block_len
    }
}

impl Default for LegacyMd5 {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

opaque_debug::implement!(LegacyMd5);
