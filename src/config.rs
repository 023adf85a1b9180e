//! Tuning constants shared by every stage of the pipeline.
//!
//! Centralized the way the teacher's own `config.rs` collects its tuning
//! knobs in one place instead of scattering magic numbers through the
//! modules that use them.

/// Size of one independently-coded compression chunk, in bytes.
pub const CHUNK_SIZE: usize = 0x10000;

/// Sliding window size: two chunks, so matches can reach into the
/// previous chunk's data.
pub const WINDOW_SIZE: usize = CHUNK_SIZE << 1;

/// Number of bits in the rolling hash table index.
pub const HASH_BITS: u32 = 15;

/// Number of bits the rolling hash shifts in a new byte by.
pub const HASH_SHIFT: u32 = (HASH_BITS + 2) / 3;

/// Maximum hash-chain links walked per `find` call.
pub const MAX_CHAIN: u32 = 11;

/// Match length at or above which `find` stops walking the chain early.
pub const NICE_LENGTH: u32 = 48;

/// Largest representable match offset (fits a 16-bit raw offset field).
pub const MAX_OFFSET: u32 = 0xFFFF;

/// Total Huffman alphabet: 256 literals, 1 end-of-stream, 255 match codes.
pub const SYMBOLS: usize = 0x200;

/// Half the alphabet; used for the nibble-packed nine bit length header
/// arithmetic and the end-of-stream symbol offset.
pub const HALF_SYMBOLS: usize = 0x100;

/// Symbol for end-of-stream within the 0x100..SYMBOLS match range.
pub const STREAM_END: usize = 0x100;

/// Longest code a length-limited Huffman tree built by either builder may
/// assign.
pub const HUFF_BITS_MAX: u8 = 15;

/// Below this many elements, `sorting::stable_sort_by_key` falls back to
/// insertion sort instead of recursing.
pub const SORT_INSERTION_LIMIT: usize = 90;

/// Number of tokens framed by one little-endian match/literal bitmask.
pub const TOKENS_PER_MASK: usize = 32;

/// Scratch capacity for the intermediate LZ77 token buffer: worst case is
/// one chunk of all-match tokens (mask + symbol + offset + 32-bit length
/// extension per token) plus room for a trailing end-of-stream group.
pub const INTERMEDIATE_BUF_CAP: usize = 0x1200C;
