//! The whole-buffer compression driver.
//!
//! Ported from `xpress_huff_compress.c`'s `xpress_huff_compress`,
//! `xh_calc_compressed_len`, `xh_calc_compressed_len_no_matching`, and
//! `xpress_huff_max_compressed_size`. Splits the input into independent
//! 64 KiB chunks, builds each chunk's LZ77 token stream and canonical
//! Huffman table, falls back to literal coding plus the optimal
//! Package-Merge builder when the fast path's estimated size would
//! overflow the chunk's safe envelope, then writes the 256-byte
//! length header and bit-packed stream.

use crate::bitstream::BitWriter;
use crate::config::{CHUNK_SIZE, HALF_SYMBOLS, INTERMEDIATE_BUF_CAP, SYMBOLS};
use crate::dictionary::Dictionary;
use crate::error::CompressError;
use crate::huffman::{self, CodeTable};
use crate::token;

/// Canonical empty-chunk size: a 256-byte all-zero length header plus the
/// minimal 4-byte bitstream (one bit-coded end-of-stream symbol, then a
/// trailing zero padding word).
const MIN_DATA: usize = HALF_SYMBOLS + 4;

/// Upper bound on the compressed size of `in_len` input bytes. Callers
/// should size their output buffer to at least this before calling
/// [`compress`].
pub fn max_compressed_size(in_len: usize) -> usize {
    in_len + 34 + (HALF_SYMBOLS + 2) + (HALF_SYMBOLS + 2) * (in_len / CHUNK_SIZE)
}

/// Compresses `input` into `out`, returning the number of bytes written.
///
/// Splits `input` into independent 64 KiB chunks (the final chunk may be
/// shorter). Each chunk carries its own canonical Huffman code table, so
/// chunks can be decoded independently of one another. Fails with
/// [`CompressError::OutputTooSmall`] if `out` cannot hold the compressed
/// stream (size `out` with [`max_compressed_size`] to guarantee success),
/// or [`CompressError::AllocationFailed`] if scratch allocation fails.
pub fn compress(input: &[u8], out: &mut [u8]) -> Result<usize, CompressError> {
    if input.is_empty() {
        return write_empty_chunk(out);
    }

    let mut dict = Dictionary::new(input)?;
    let mut counts = [0u32; SYMBOLS];
    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(INTERMEDIATE_BUF_CAP)
        .map_err(|_| CompressError::AllocationFailed)?;
    buf.resize(INTERMEDIATE_BUF_CAP, 0);

    let mut in_pos = 0usize;
    let mut out_pos = 0usize;
    let mut remaining = input.len();

    while remaining > 0 {
        let chunk_len = remaining.min(CHUNK_SIZE);
        let is_final = chunk_len == remaining;

        dict.fill(in_pos);

        let (table, comp_len, buf_len) =
            compress_chunk(input, in_pos, chunk_len, is_final, &dict, &mut buf, &mut counts);

        if out.len() - out_pos < HALF_SYMBOLS + comp_len {
            return Err(CompressError::OutputTooSmall);
        }

        table.write_length_header(&mut out[out_pos..out_pos + HALF_SYMBOLS]);
        out_pos += HALF_SYMBOLS;

        let mut bits = BitWriter::new(&mut out[out_pos..out_pos + comp_len]);
        token::encode_tokens(&buf[..buf_len], buf_len, &table, &mut bits);
        bits.finish();
        out_pos += comp_len;

        in_pos += chunk_len;
        remaining -= chunk_len;
    }

    Ok(out_pos)
}

/// Builds the LZ77 token stream and Huffman table for one chunk, falling
/// back to literal coding plus the optimal builder if the fast estimate
/// would exceed the chunk's safe envelope. Returns `(table, comp_len,
/// buf_len)`: `buf_len` bytes of `buf` hold the (possibly-fallback) token
/// stream that `comp_len` was computed from.
fn compress_chunk(
    input: &[u8],
    in_pos: usize,
    chunk_len: usize,
    is_final: bool,
    dict: &Dictionary<'_>,
    buf: &mut [u8],
    counts: &mut [u32; SYMBOLS],
) -> (CodeTable, usize, usize) {
    let mut buf_len = token::emit_lz77(input, in_pos, chunk_len, is_final, dict, buf, counts);
    let mut table = huffman::fast::build(counts);
    let mut comp_len = calc_compressed_len(&table.lens, counts, buf_len);

    let threshold = if is_final { chunk_len + 36 } else { CHUNK_SIZE + 2 };
    if comp_len > threshold {
        buf_len = token::emit_literal_fallback(input, in_pos, chunk_len, is_final, buf, counts);
        table = huffman::slow::build(counts);
        comp_len = calc_compressed_len_no_matching(&table.lens, counts);
    }

    (table, comp_len, buf_len)
}

/// Exact encoded bit cost of the LZ77 token stream: Huffman-coded symbol
/// bits (literals, matches, plus the extra offset bits a match's high
/// nibble demands) rounded up to whole 16-bit words, plus the raw
/// length-extension bytes that pass through the bitstream unencoded.
fn calc_compressed_len(lens: &[u8; SYMBOLS], counts: &[u32; SYMBOLS], buf_len: usize) -> usize {
    let mut sym_bits: u64 = 16;
    let mut literal_syms: u64 = 0;
    let mut match_syms: u64 = 0;

    for i in 0..HALF_SYMBOLS {
        sym_bits += lens[i] as u64 * counts[i] as u64;
        literal_syms += counts[i] as u64;
    }
    for i in HALF_SYMBOLS..SYMBOLS {
        sym_bits += (lens[i] as u64 + ((i >> 4) & 0xF) as u64) * counts[i] as u64;
        match_syms += counts[i] as u64;
    }

    let mask_bytes = (literal_syms + match_syms + 31) / 32 * 4;
    let extra_bytes = buf_len as u64 - (literal_syms + match_syms * 3 + mask_bytes);
    ((sym_bits + 15) / 16 * 2 + extra_bytes) as usize
}

/// Exact encoded bit cost of the no-match fallback stream: every input
/// byte plus the end-of-stream symbol are Huffman-coded literals, with no
/// raw extension bytes.
fn calc_compressed_len_no_matching(lens: &[u8; SYMBOLS], counts: &[u32; SYMBOLS]) -> usize {
    let mut sym_bits: u64 = 16;
    for i in 0..=crate::config::STREAM_END {
        sym_bits += lens[i] as u64 * counts[i] as u64;
    }
    ((sym_bits + 15) / 16 * 2) as usize
}

/// Writes the canonical 260-byte representation of an empty input: an
/// all-zero length header except for the end-of-stream symbol's 1-bit
/// length, followed by the minimal 4-byte bitstream (code `0`, then a
/// zero padding word).
fn write_empty_chunk(out: &mut [u8]) -> Result<usize, CompressError> {
    if out.len() < MIN_DATA {
        return Err(CompressError::OutputTooSmall);
    }
    out[..MIN_DATA].fill(0);
    out[crate::config::STREAM_END >> 1] = 1;
    Ok(MIN_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_canonical_260_byte_chunk() {
        let mut out = [0xAAu8; 300];
        let n = compress(&[], &mut out).unwrap();
        assert_eq!(n, 260);
        assert_eq!(&out[..128], &[0u8; 128][..]);
        assert_eq!(out[128], 0x01);
        assert_eq!(&out[129..256], &[0u8; 127][..]);
        assert_eq!(&out[256..260], &[0, 0, 0, 0]);
    }

    #[test]
    fn single_byte_input_round_trips_size_sane() {
        let mut out = vec![0u8; max_compressed_size(1)];
        let n = compress(b"A", &mut out).unwrap();
        assert!(n >= HALF_SYMBOLS + 4);
        assert!(n <= max_compressed_size(1));
    }

    #[test]
    fn repeated_pattern_finds_match() {
        let input = b"AB".repeat(32);
        let mut out = vec![0u8; max_compressed_size(input.len())];
        let n = compress(&input, &mut out).unwrap();
        assert!(n < input.len(), "should compress a highly repetitive input");
    }

    #[test]
    fn full_chunk_of_zeros_is_one_chunk() {
        let input = vec![0u8; CHUNK_SIZE];
        let mut out = vec![0u8; max_compressed_size(input.len())];
        let n = compress(&input, &mut out).unwrap();
        assert!(n < CHUNK_SIZE);
    }

    #[test]
    fn large_input_splits_into_multiple_chunks() {
        let mut input = Vec::with_capacity(200_000);
        let sample = b"The quick brown fox jumps over the lazy dog. ";
        while input.len() < 200_000 {
            input.extend_from_slice(sample);
        }
        input.truncate(200_000);
        let mut out = vec![0u8; max_compressed_size(input.len())];
        let n = compress(&input, &mut out).unwrap();
        // 4 chunks: 3 full headers + 1 short, each HALF_SYMBOLS header bytes.
        assert!(n >= 4 * HALF_SYMBOLS);
        assert!(n <= max_compressed_size(input.len()));
    }

    #[test]
    fn insufficient_output_buffer_is_reported() {
        let input = vec![0u8; CHUNK_SIZE];
        let mut out = vec![0u8; 10];
        let err = compress(&input, &mut out).unwrap_err();
        assert_eq!(err, CompressError::OutputTooSmall);
    }

    #[test]
    fn incompressible_random_like_input_stays_within_bound() {
        // A pseudo-random (LCG) byte stream has little LZ77-exploitable
        // structure and commonly triggers the no-match fallback.
        let mut state: u32 = 0x2545F491;
        let input: Vec<u8> = (0..4096)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 24) as u8
            })
            .collect();
        let mut out = vec![0u8; max_compressed_size(input.len())];
        let n = compress(&input, &mut out).unwrap();
        assert!(n <= input.len() + 34 + HALF_SYMBOLS + 2);
    }
}
