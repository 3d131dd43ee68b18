//! An implementation of the [MD5][1] cryptographic hash algorithm.
//!
//! Two front ends share one compression function:
//!
//! - [`LegacyMd5`], a single-shot engine which pads each `update` call as a
//!   complete message;
//! - [`Md5`], a buffered hasher implementing the [`Digest`] trait, where any
//!   split of the input into `update` calls yields the same digest.
//!
//! # Usage
//!
//! ```rust
//! use md5::{LegacyMd5, Md5, Digest};
//! use hex_literal::hex;
//!
//! // single-shot engine
//! let mut engine = LegacyMd5::new();
//! engine.update(b"hello world");
//! assert_eq!(engine.hex_digest(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
//!
//! // incremental hasher
//! let mut hasher = Md5::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("5eb63bbbe01eeed093cb22bb8f5acdc3"));
//! ```
//!
//! MD5 is broken for collision resistance. Use it for compatibility and
//! integrity checks against accidental corruption only.
//!
//! [1]: https://en.wikipedia.org/wiki/MD5

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

mod compress;
pub mod consts;
mod legacy;
pub mod padding;

pub use crate::compress::{compress, compress_block, rotate_left};
pub use crate::legacy::LegacyMd5;
pub use crate::padding::{pad, split_blocks, Blocks};
pub use digest::crypto_common::InvalidLength;

use alloc::{format, string::String};
use core::fmt;
use digest::{
    core_api::{
        AlgorithmName, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    block_buffer::Eager,
    generic_array::GenericArray,
    typenum::{Unsigned, U16, U64},
    HashMarker, Reset,
};

/// One 64-byte MD5 block.
pub type Block = GenericArray<u8, U64>;

/// A 16-byte MD5 digest.
pub type Output = GenericArray<u8, U16>;

/// Core MD5 hasher state.
#[derive(Clone)]
pub struct Md5Core {
    block_len: u64,
    state: [u32; 4],
}

impl HashMarker for Md5Core {}

impl BlockSizeUser for Md5Core {
    type BlockSize = U64;
}

impl BufferKindUser for Md5Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Md5Core {
    type OutputSize = U16;
}

impl UpdateCore for Md5Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        compress(&mut self.state, blocks);
    }
}

impl FixedOutputCore for Md5Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output) {
        let bit_len = self
            .block_len
            .wrapping_mul(Self::BlockSize::U64)
            .wrapping_add(buffer.get_pos() as u64)
            .wrapping_mul(8);
        let mut s = self.state;
        buffer.len64_padding_le(bit_len, |b| compress(&mut s, core::slice::from_ref(b)));
        for (chunk, v) in out.chunks_exact_mut(4).zip(s.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
}

impl Default for Md5Core {
    #[inline]
    fn default() -> Self {
        Self {
            block_len: 0,
            state: consts::S0,
        }
    }
}

impl Reset for Md5Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Md5Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md5")
    }
}

opaque_debug::implement!(Md5Core);

/// Incremental MD5 hasher.
pub type Md5 = CoreWrapper<Md5Core>;

/// Computes the MD5 digest of `data` with a fresh [`LegacyMd5`].
pub fn compute(data: &[u8]) -> Output {
    let mut engine = LegacyMd5::new();
    engine.update(data);
    engine.digest()
}

/// Lowercase hex MD5 digest of `data`.
pub fn hex(data: &[u8]) -> String {
    format!("{:x}", compute(data))
}
