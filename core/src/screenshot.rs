extern crate alloc;

use alloc::vec;
use embedded_io::Write;

use crate::bmp;
use crate::framebuffer::{FrameBuffer, HEIGHT, Orientation, WIDTH};
use crate::fs::Storage;
use crate::path;

/// Why a screenshot export failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportError {
    /// Framebuffer empty or smaller than the given geometry
    InvalidInput,
    /// Parent directory missing and could not be created
    DirectoryCreate,
    /// Destination file could not be opened for writing
    Open,
    /// A write stored fewer bytes than requested; the partial file has been removed
    ShortWrite,
}

/// Save the current screen contents as a bitmap under `dest`.
pub fn save_screen_bmp<S: Storage>(
    storage: &S,
    dest: &str,
    frame: &FrameBuffer,
) -> Result<(), ExportError> {
    save_framebuffer_bmp(
        storage,
        dest,
        frame.data(),
        WIDTH as u32,
        HEIGHT as u32,
        frame.orientation(),
    )
}

/// Persist a packed monochrome framebuffer as a bottom-to-top 1-bpp bitmap.
///
/// `framebuffer` is `height` rows of `width / 8` bytes, MSB-first; `width`
/// must be a multiple of 8. The image is rotated according to `orientation`
/// while streaming, one output row at a time. On any failed write the
/// partial file is removed, so `dest` never holds a truncated bitmap.
pub fn save_framebuffer_bmp<S: Storage>(
    storage: &S,
    dest: &str,
    framebuffer: &[u8],
    width: u32,
    height: u32,
    orientation: Orientation,
) -> Result<(), ExportError> {
    let width = width as usize;
    let height = height as usize;
    let src_row_bytes = width / 8;
    if height == 0 || src_row_bytes == 0 || framebuffer.len() < src_row_bytes * height {
        log::warn!(
            "screenshot: refusing {}x{} export of {} framebuffer bytes",
            width,
            height,
            framebuffer.len()
        );
        return Err(ExportError::InvalidInput);
    }

    ensure_parent_dir(storage, dest)?;

    let (out_width, out_height) = match orientation {
        Orientation::Portrait | Orientation::PortraitInverted => (width, height),
        Orientation::LandscapeClockwise | Orientation::LandscapeCounterClockwise => {
            (height, width)
        }
    };

    let mut file = match storage.open_write(dest) {
        Ok(file) => file,
        Err(err) => {
            log::warn!("screenshot: failed to open {} for writing: {:?}", dest, err);
            return Err(ExportError::Open);
        }
    };

    let header = bmp::build_header(out_width as u32, out_height as u32);
    let row_bytes = bmp::padded_row_bytes(out_width as u32);
    let mut row = vec![0u8; row_bytes];

    let mut write_error = !write_exact(&mut file, &header);

    if !write_error {
        // Rows go out bottom-to-top per the file format; the row buffer's
        // padding bytes stay zero.
        match orientation {
            Orientation::Portrait => {
                for y in (0..height).rev() {
                    let src = &framebuffer[y * src_row_bytes..(y + 1) * src_row_bytes];
                    row[..src_row_bytes].copy_from_slice(src);
                    if !write_exact(&mut file, &row) {
                        write_error = true;
                        break;
                    }
                }
            }
            Orientation::PortraitInverted => {
                // 180° turn of the panel: forward row order plus polarity flip.
                for y in 0..height {
                    let src = &framebuffer[y * src_row_bytes..(y + 1) * src_row_bytes];
                    for (dst, byte) in row[..src_row_bytes].iter_mut().zip(src) {
                        *dst = !byte;
                    }
                    if !write_exact(&mut file, &row) {
                        write_error = true;
                        break;
                    }
                }
            }
            Orientation::LandscapeClockwise => {
                for y_out in (0..out_height).rev() {
                    row.fill(0);
                    for x_out in 0..out_width {
                        let x_old = y_out;
                        let y_old = height - 1 - x_out;
                        let index = y_old * src_row_bytes + x_old / 8;
                        if index >= framebuffer.len() {
                            continue;
                        }
                        let bit = (framebuffer[index] >> (7 - x_old % 8)) & 1;
                        row[x_out / 8] |= bit << (7 - x_out % 8);
                    }
                    if !write_exact(&mut file, &row) {
                        write_error = true;
                        break;
                    }
                }
            }
            Orientation::LandscapeCounterClockwise => {
                for y_out in (0..out_height).rev() {
                    row.fill(0);
                    for x_out in 0..out_width {
                        let x_old = width - 1 - y_out;
                        let y_old = x_out;
                        let index = y_old * src_row_bytes + x_old / 8;
                        if index >= framebuffer.len() {
                            continue;
                        }
                        let bit = (framebuffer[index] >> (7 - x_old % 8)) & 1;
                        row[x_out / 8] |= bit << (7 - x_out % 8);
                    }
                    if !write_exact(&mut file, &row) {
                        write_error = true;
                        break;
                    }
                }
            }
        }
    }

    if !write_error && file.flush().is_err() {
        write_error = true;
    }
    drop(file);

    if write_error {
        if storage.remove(dest).is_err() {
            log::warn!("screenshot: failed to remove partial file {}", dest);
        }
        return Err(ExportError::ShortWrite);
    }

    log::info!("screenshot: saved {}x{} bitmap to {}", out_width, out_height, dest);
    Ok(())
}

/// One write call per buffer; a short count is fatal, no retries.
fn write_exact<W: Write>(file: &mut W, buf: &[u8]) -> bool {
    matches!(file.write(buf), Ok(n) if n == buf.len())
}

fn ensure_parent_dir<S: Storage>(storage: &S, dest: &str) -> Result<(), ExportError> {
    let Some(last_slash) = dest.rfind('/') else {
        return Ok(());
    };
    let dir = path::normalize(&dest[..last_slash]);
    if dir.is_empty() {
        return Ok(());
    }
    match storage.exists(&dir) {
        Ok(true) => Ok(()),
        Ok(false) => storage.create_dir_all(&dir).map_err(|err| {
            log::warn!("screenshot: failed to create directory {}: {:?}", dir, err);
            ExportError::DirectoryCreate
        }),
        Err(err) => {
            log::warn!("screenshot: failed to stat directory {}: {:?}", dir, err);
            Err(ExportError::DirectoryCreate)
        }
    }
}
