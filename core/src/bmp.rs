/// Header for a bottom-to-top 1-bit-per-pixel bitmap: file header,
/// BITMAPINFOHEADER and a two-colour palette.
pub const HEADER_SIZE: usize = 62;

const INFO_HEADER_SIZE: u32 = 40;
const PALETTE: [u8; 8] = [
    0x00, 0x00, 0x00, 0x00, // index 0: black
    0xFF, 0xFF, 0xFF, 0x00, // index 1: white
];

/// Bytes per output scan line, rounded up to the format's 4-byte boundary.
pub fn padded_row_bytes(width: u32) -> usize {
    (width as usize + 31) / 32 * 4
}

/// Build the file header for a `width` x `height` monochrome bitmap.
pub fn build_header(width: u32, height: u32) -> [u8; HEADER_SIZE] {
    let pixel_data_size = padded_row_bytes(width) * height as usize;
    let file_size = HEADER_SIZE + pixel_data_size;

    let mut header = [0u8; HEADER_SIZE];
    // File header (14 bytes)
    header[0..2].copy_from_slice(b"BM");
    header[2..6].copy_from_slice(&(file_size as u32).to_le_bytes());
    // bytes 6..10 reserved
    header[10..14].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    header[14..18].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    header[18..22].copy_from_slice(&(width as i32).to_le_bytes());
    header[22..26].copy_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    header[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    header[28..30].copy_from_slice(&1u16.to_le_bytes()); // bits per pixel
    header[30..34].copy_from_slice(&0u32.to_le_bytes()); // compression
    header[34..38].copy_from_slice(&(pixel_data_size as u32).to_le_bytes());
    header[38..42].copy_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    header[42..46].copy_from_slice(&2835u32.to_le_bytes()); // v resolution
    header[46..50].copy_from_slice(&2u32.to_le_bytes()); // colors used
    header[50..54].copy_from_slice(&2u32.to_le_bytes()); // important colors
    header[54..62].copy_from_slice(&PALETTE);
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_bytes_round_up_to_dword() {
        assert_eq!(padded_row_bytes(1), 4);
        assert_eq!(padded_row_bytes(32), 4);
        assert_eq!(padded_row_bytes(33), 8);
        assert_eq!(padded_row_bytes(480), 60);
        assert_eq!(padded_row_bytes(800), 100);
    }

    #[test]
    fn header_fields_for_small_bitmap() {
        let header = build_header(48, 10);
        assert_eq!(&header[0..2], b"BM");
        // 48 px -> 8 padded bytes per row, 10 rows
        let expected_size = (HEADER_SIZE + 80) as u32;
        assert_eq!(u32::from_le_bytes(header[2..6].try_into().unwrap()), expected_size);
        assert_eq!(u32::from_le_bytes(header[10..14].try_into().unwrap()), 62);
        assert_eq!(i32::from_le_bytes(header[18..22].try_into().unwrap()), 48);
        assert_eq!(i32::from_le_bytes(header[22..26].try_into().unwrap()), 10);
        assert_eq!(u16::from_le_bytes(header[28..30].try_into().unwrap()), 1);
        assert_eq!(u32::from_le_bytes(header[34..38].try_into().unwrap()), 80);
    }

    #[test]
    fn palette_is_black_then_white() {
        let header = build_header(8, 1);
        assert_eq!(&header[54..58], &[0x00, 0x00, 0x00, 0x00]);
        assert_eq!(&header[58..62], &[0xFF, 0xFF, 0xFF, 0x00]);
    }
}
