//! Xpress-Huffman (MS-XCA) compressor.
//!
//! Implements the compression half of the Xpress-Huffman format used by
//! Windows (WIM images, hibernation files, Active Directory replication):
//! a sliding-window LZ77 match finder feeding a length-limited canonical
//! Huffman coder, chunked into independent 64 KiB units. Decompression is
//! out of scope for this crate.

pub mod bitstream;
pub mod cli;
pub mod compress;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod huffman;
pub mod sorting;
pub mod token;

/// One-shot compression. Equivalent to the reference's
/// `xpress_huff_compress`.
pub use compress::compress;
/// Upper bound on the compressed size of an `in_len`-byte input.
/// Equivalent to `xpress_huff_max_compressed_size`.
pub use compress::max_compressed_size;
/// Failures `compress` can report.
pub use error::CompressError;
