use crate::consts::{S, T};
use crate::Block;

/// Circular left shift of `value` by `amount` bits within 32 bits.
#[inline(always)]
pub fn rotate_left(value: u32, amount: u32) -> u32 {
    value.rotate_left(amount)
}

#[inline(always)]
fn read_words(block: &Block) -> [u32; 16] {
    let mut words = [0u32; 16];
    for (w, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Runs the 64 MD5 rounds over one block and returns the next state.
pub fn compress_block(state: [u32; 4], block: &Block) -> [u32; 4] {
    let words = read_words(block);
    let [mut a, mut b, mut c, mut d] = state;

    for i in 0..64 {
        let (f, g) = match i / 16 {
            0 => ((b & c) | (!b & d), i),
            1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            2 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };
        let f = f
            .wrapping_add(a)
            .wrapping_add(T[i])
            .wrapping_add(words[g]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotate_left(f, S[i]));
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
    ]
}

/// MD5 compression function, folded left-to-right over `blocks`.
#[inline]
pub fn compress(state: &mut [u32; 4], blocks: &[Block]) {
    for block in blocks {
        *state = compress_block(*state, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::S0;

    #[test]
    fn rotate_wraps_high_bits() {
        assert_eq!(rotate_left(0x8000_0000, 1), 1);
        assert_eq!(rotate_left(0x1234_5678, 8), 0x3456_7812);
        assert_eq!(rotate_left(0xFFFF_FFFF, 31), 0xFFFF_FFFF);
        assert_eq!(rotate_left(0x0000_0001, 31), 0x8000_0000);
    }

    #[test]
    fn words_are_little_endian() {
        let mut block = Block::default();
        block[..4].copy_from_slice(&[0x78, 0x56, 0x34, 0x12]);
        block[60..].copy_from_slice(&[0x01, 0x00, 0x00, 0x80]);
        let words = read_words(&block);
        assert_eq!(words[0], 0x1234_5678);
        assert_eq!(words[15], 0x8000_0001);
        assert!(words[1..15].iter().all(|&w| w == 0));
    }

    #[test]
    fn empty_message_block() {
        // padding of the empty message is a lone marker byte
        let mut block = Block::default();
        block[0] = 0x80;
        let s = compress_block(S0, &block);
        assert_eq!(
            s,
            [0xd98c_1dd4, 0x04b2_008f, 0x9809_80e9, 0x7e42_f8ec],
        );
    }

    #[test]
    fn fold_matches_single_steps() {
        let mut blocks = [Block::default(), Block::default()];
        blocks[0][3] = 0x11;
        blocks[1][17] = 0xee;
        let mut state = S0;
        compress(&mut state, &blocks);
        let expected = compress_block(compress_block(S0, &blocks[0]), &blocks[1]);
        assert_eq!(state, expected);
    }
}
