//! PNG encoding for RGBA surface snapshots.
//!
//! Minimal RGBA PNG (color type 6): signature, IHDR, one zlib-compressed
//! IDAT with unfiltered scanlines, IEND. Interpolated fields rarely fit
//! an indexed palette, so only the full-color encoding is provided.

use std::io::Write;

use thiserror::Error;

/// Errors from PNG encoding.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("pixel buffer of {actual} bytes does not match {width}x{height} RGBA")]
    BufferSize {
        actual: usize,
        width: usize,
        height: usize,
    },

    #[error("IDAT compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

/// Encode RGBA pixel data (4 bytes per pixel) as a PNG image.
pub fn encode_png(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, PngError> {
    if pixels.len() != width * height * 4 {
        return Err(PngError::BufferSize {
            actual: pixels.len(),
            width,
            height,
        });
    }

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat_rgba(pixels, width, height)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk: length, type, data, CRC.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let crc_data = [chunk_type.as_slice(), data].concat();
    png.extend_from_slice(&crc32fast::hash(&crc_data).to_be_bytes());
}

/// Deflate RGBA image data for the IDAT chunk.
fn deflate_idat_rgba(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, PngError> {
    // Each scanline gets a filter byte (0 = no filter)
    let mut uncompressed = Vec::with_capacity(height * (1 + width * 4));
    for y in 0..height {
        uncompressed.push(0);
        let row_start = y * width * 4;
        let row_end = row_start + width * 4;
        uncompressed.extend_from_slice(&pixels[row_start..row_end]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    let compressed = encoder.finish()?;

    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let pixels = vec![255u8; 2 * 2 * 4];
        let png = encode_png(&pixels, 2, 2).unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_encode_png_ihdr() {
        let pixels = vec![0u8; 4 * 3 * 4];
        let png = encode_png(&pixels, 4, 3).unwrap();

        // IHDR starts after the 8-byte signature: length, type, data
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(&png[16..20], &4u32.to_be_bytes());
        assert_eq!(&png[20..24], &3u32.to_be_bytes());
        assert_eq!(png[24], 8); // bit depth
        assert_eq!(png[25], 6); // color type RGBA
    }

    #[test]
    fn test_encode_png_rejects_bad_buffer() {
        let pixels = vec![0u8; 7];
        assert!(matches!(
            encode_png(&pixels, 2, 2),
            Err(PngError::BufferSize { .. })
        ));
    }

    #[test]
    fn test_encode_png_ends_with_iend() {
        let pixels = vec![128u8; 4];
        let png = encode_png(&pixels, 1, 1).unwrap();
        // Last chunk is IEND with empty payload and its CRC
        let iend_type = &png[png.len() - 8..png.len() - 4];
        assert_eq!(iend_type, b"IEND");
    }
}
