//! Black-box tests for chunk splitting and independence.

use xpress_huffman::config::{CHUNK_SIZE, HALF_SYMBOLS};
use xpress_huffman::{compress, max_compressed_size};

fn compress_to_vec(input: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; max_compressed_size(input.len())];
    let n = compress(input, &mut out).expect("compression should not fail with a bounded buffer");
    out.truncate(n);
    out
}

/// Every chunk's length header is exactly `HALF_SYMBOLS` bytes and is a
/// valid nibble-packed length table: every nibble is in `0..=15` by
/// construction (`u8` nibble split), so the only real invariant to check
/// black-box is that headers recur at the expected stride for a multi-chunk
/// input built entirely from exact chunk-size pieces.
#[test]
fn one_full_chunk_has_exactly_one_header() {
    let input = vec![0xABu8; CHUNK_SIZE];
    let out = compress_to_vec(&input);
    // One header, one bitstream tail; the header itself never collapses
    // below HALF_SYMBOLS bytes, however degenerate the input.
    assert!(out.len() >= HALF_SYMBOLS);
    assert!(out.len() < CHUNK_SIZE, "a constant-byte chunk must compress");
}

#[test]
fn two_full_chunks_cost_two_headers_worth_more_than_one() {
    let one_chunk = vec![0x37u8; CHUNK_SIZE];
    let two_chunks = vec![0x37u8; CHUNK_SIZE * 2];

    let out_one = compress_to_vec(&one_chunk);
    let out_two = compress_to_vec(&two_chunks);

    // Each chunk is encoded independently (its own dictionary, its own
    // Huffman table), so doubling a uniform input roughly doubles the
    // compressed size rather than compressing away to almost nothing.
    assert!(out_two.len() >= out_one.len(), "second chunk adds its own header and bitstream");
    assert!(out_two.len() < two_chunks.len());
}

#[test]
fn non_multiple_of_chunk_size_yields_a_short_final_chunk() {
    let full_chunks = 2usize;
    let tail = 1000usize;
    let mut input = Vec::with_capacity(full_chunks * CHUNK_SIZE + tail);
    for i in 0..full_chunks * CHUNK_SIZE + tail {
        input.push((i % 251) as u8);
    }
    let out = compress_to_vec(&input);
    // 3 chunk headers: two full + one short.
    assert!(out.len() >= 3 * HALF_SYMBOLS);
    assert!(out.len() <= max_compressed_size(input.len()));
}

#[test]
fn chunk_count_matches_ceil_division_by_chunk_size() {
    for &len in &[0usize, 1, CHUNK_SIZE - 1, CHUNK_SIZE, CHUNK_SIZE + 1, CHUNK_SIZE * 3] {
        let input = vec![0x11u8; len];
        let out = compress_to_vec(&input);
        let expected_chunks = if len == 0 { 1 } else { len.div_ceil(CHUNK_SIZE) };
        assert!(
            out.len() >= expected_chunks * HALF_SYMBOLS,
            "len {len}: expected at least {expected_chunks} headers, got {} bytes",
            out.len()
        );
    }
}

/// `max_compressed_size` must stay an upper bound no matter how the input
/// is laid out across chunk boundaries.
#[test]
fn bound_holds_across_a_spread_of_chunk_aligned_and_unaligned_sizes() {
    for &len in &[0usize, 1, 31, CHUNK_SIZE, CHUNK_SIZE + 7, CHUNK_SIZE * 5 + 123] {
        let mut state: u32 = 0x1234_5678 ^ len as u32;
        let input: Vec<u8> = (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
                (state >> 16) as u8
            })
            .collect();
        let bound = max_compressed_size(len);
        let mut out = vec![0u8; bound];
        let n = compress(&input, &mut out).unwrap();
        assert!(n <= bound, "len {len}: {n} exceeds bound {bound}");
    }
}
