//! Turns raw RGBA pixels into a palette index stream ready for LZW.
//!
//! Image formats such as GIF do not compress pixels directly. They first map
//! each pixel to an index into a color table of at most 256 entries, and LZW
//! then runs over that index stream.

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::lzw::SeedDictionary;

/// Largest palette an index stream of `u8` can address.
pub const MAX_PALETTE_COLORS: usize = 256;

/// An opaque RGB color. Alpha is ignored when building the palette.
pub type Rgb = [u8; 3];

/// Pixels as palette indices, plus the palette they index into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    /// One entry per pixel.
    pub indices: Vec<u8>,
    /// Distinct colors in order of first appearance.
    pub palette: Vec<Rgb>,
}

impl IndexedImage {
    /// Seed dictionary over the palette: index `i` gets code `i`.
    ///
    /// The palette is built in first-appearance order, so this is the same
    /// dictionary [`build_seed_dictionary`](crate::lzw::build_seed_dictionary)
    /// returns for `indices`.
    pub fn seed_dictionary(&self) -> SeedDictionary<u8> {
        (0..self.palette.len()).map(|i| i as u8).collect()
    }
}

/// Maps every pixel of an RGBA buffer to a palette index.
///
/// # Errors
///
/// - [`Error::MalformedPixels`] if `rgba.len()` is not a multiple of 4.
/// - [`Error::TooManyColors`] if the image has more than
///   [`MAX_PALETTE_COLORS`] distinct RGB colors.
///
/// # Example
///
/// ```
/// use lzw_core::palette::index_pixels;
///
/// let rgba = [255, 0, 0, 255, 0, 0, 255, 255, 255, 0, 0, 128];
/// let image = index_pixels(&rgba).unwrap();
/// assert_eq!(image.indices, vec![0, 1, 0]);
/// assert_eq!(image.palette, vec![[255, 0, 0], [0, 0, 255]]);
/// ```
pub fn index_pixels(rgba: &[u8]) -> Result<IndexedImage> {
    if rgba.len() % 4 != 0 {
        return Err(Error::MalformedPixels { len: rgba.len() });
    }

    let mut lookup: HashMap<Rgb, u8> = HashMap::new();
    let mut palette = Vec::new();
    let mut indices = Vec::with_capacity(rgba.len() / 4);

    for pixel in rgba.chunks_exact(4) {
        let color = [pixel[0], pixel[1], pixel[2]];
        let index = match lookup.get(&color) {
            Some(&index) => index,
            None => {
                if palette.len() == MAX_PALETTE_COLORS {
                    return Err(Error::TooManyColors {
                        limit: MAX_PALETTE_COLORS,
                    });
                }
                let index = palette.len() as u8;
                lookup.insert(color, index);
                palette.push(color);
                index
            }
        };
        indices.push(index);
    }

    debug!(
        "indexed {} pixels into a {}-color palette",
        indices.len(),
        palette.len()
    );
    Ok(IndexedImage { indices, palette })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lzw::{build_seed_dictionary, decode, encode};

    fn pixels(colors: &[Rgb]) -> Vec<u8> {
        colors
            .iter()
            .flat_map(|&[r, g, b]| [r, g, b, 255])
            .collect()
    }

    #[test]
    fn test_empty_buffer() {
        let image = index_pixels(&[]).unwrap();
        assert!(image.indices.is_empty());
        assert!(image.palette.is_empty());
        assert!(image.seed_dictionary().is_empty());
    }

    #[test]
    fn test_malformed_buffer() {
        assert_eq!(
            index_pixels(&[1, 2, 3, 4, 5]),
            Err(Error::MalformedPixels { len: 5 })
        );
    }

    #[test]
    fn test_alpha_is_ignored() {
        let rgba = [10, 20, 30, 0, 10, 20, 30, 255];
        let image = index_pixels(&rgba).unwrap();
        assert_eq!(image.indices, vec![0, 0]);
        assert_eq!(image.palette.len(), 1);
    }

    #[test]
    fn test_palette_limit() {
        let colors: Vec<Rgb> = (0..256u16).map(|i| [i as u8, (i >> 8) as u8, 0]).collect();
        let image = index_pixels(&pixels(&colors)).unwrap();
        assert_eq!(image.palette.len(), MAX_PALETTE_COLORS);
        assert_eq!(image.indices[255], 255);

        let mut too_many = colors;
        too_many.push([0, 1, 0]);
        assert_eq!(
            index_pixels(&pixels(&too_many)),
            Err(Error::TooManyColors { limit: 256 })
        );
    }

    #[test]
    fn test_seed_matches_index_stream() {
        let red = [255, 0, 0];
        let blue = [0, 0, 255];
        let white = [255, 255, 255];
        let image = index_pixels(&pixels(&[red, red, blue, red, white, blue])).unwrap();
        assert_eq!(image.indices, vec![0, 0, 1, 0, 2, 1]);
        assert_eq!(image.seed_dictionary(), build_seed_dictionary(&image.indices));
    }

    #[test]
    fn test_index_stream_round_trip() {
        let stripe = [[0, 0, 0], [0, 0, 0], [0, 0, 0], [200, 10, 10]];
        let colors: Vec<Rgb> = stripe.iter().cycle().take(64).copied().collect();
        let image = index_pixels(&pixels(&colors)).unwrap();
        let seed = image.seed_dictionary();

        let (codes, _) = encode(&image.indices, &seed).unwrap();
        assert!(codes.len() < image.indices.len());
        let (decoded, _) = decode(&codes, &seed).unwrap();
        assert_eq!(decoded, image.indices);
    }
}
