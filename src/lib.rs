pub mod error;
pub mod lzw;
pub mod palette;

pub use error::{Error, Result};
pub use lzw::{
    build_seed_dictionary, compress_str, decode, decode_all, decompress_str, encode, encode_all,
    Code, DecodeDictionary, EncodeDictionary, SeedDictionary, Symbol,
};
pub use palette::{index_pixels, IndexedImage, Rgb, MAX_PALETTE_COLORS};
