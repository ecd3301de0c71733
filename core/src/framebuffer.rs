use embedded_graphics::{Pixel, pixelcolor::BinaryColor, prelude::{DrawTarget, OriginDimensions, Size}};

pub const WIDTH: usize = 480;
pub const HEIGHT: usize = 800;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// Display rotation/orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Native orientation (portrait, 480x800)
    Portrait,
    /// 180° rotation (portrait upside-down, 480x800)
    PortraitInverted,
    /// 90° clockwise (landscape, 800x480)
    LandscapeClockwise,
    /// 90° counter-clockwise (landscape, 800x480)
    LandscapeCounterClockwise,
}

/// 1-bit-per-pixel panel raster, row-major, MSB-first. A set bit is white.
pub struct FrameBuffer {
    data: [u8; BUFFER_SIZE],
    orientation: Orientation,
}

impl FrameBuffer {
    pub fn new() -> Self {
        // Clear screen to white
        Self {
            data: [0xFF; BUFFER_SIZE],
            orientation: Orientation::Portrait,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn data(&self) -> &[u8; BUFFER_SIZE] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        &mut self.data
    }

    pub fn clear_screen(&mut self, color: u8) {
        self.data.fill(color);
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        let size = self.size();
        if x < 0 || y < 0 || x as u32 >= size.width || y as u32 >= size.height {
            return;
        }
        let (x, y) = match self.orientation {
            Orientation::Portrait => (x as usize, y as usize),
            Orientation::PortraitInverted => (WIDTH - 1 - x as usize, HEIGHT - 1 - y as usize),
            Orientation::LandscapeClockwise => (y as usize, HEIGHT - 1 - x as usize),
            Orientation::LandscapeCounterClockwise => (WIDTH - 1 - y as usize, x as usize),
        };
        if x < WIDTH && y < HEIGHT {
            let index = y * WIDTH + x;
            let byte_index = index / 8;
            let bit_index = 7 - (index % 8);
            match color {
                BinaryColor::On => {
                    self.data[byte_index] |= 1 << bit_index;
                }
                BinaryColor::Off => {
                    self.data[byte_index] &= !(1 << bit_index);
                }
            }
        }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        match self.orientation {
            Orientation::Portrait | Orientation::PortraitInverted => {
                Size::new(WIDTH as u32, HEIGHT as u32)
            }
            Orientation::LandscapeClockwise | Orientation::LandscapeCounterClockwise => {
                Size::new(HEIGHT as u32, WIDTH as u32)
            }
        }
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bit(frame: &FrameBuffer, x: usize, y: usize) -> u8 {
        let index = y * WIDTH + x;
        (frame.data()[index / 8] >> (7 - index % 8)) & 1
    }

    #[test]
    fn portrait_origin_is_msb_of_first_byte() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, BinaryColor::Off);
        assert_eq!(bit(&frame, 0, 0), 0);
        assert_eq!(bit(&frame, 1, 0), 1);
    }

    #[test]
    fn landscape_cw_origin_maps_to_last_native_row() {
        let mut frame = FrameBuffer::new();
        frame.set_orientation(Orientation::LandscapeClockwise);
        frame.set_pixel(0, 0, BinaryColor::Off);
        assert_eq!(bit(&frame, 0, HEIGHT - 1), 0);
    }

    #[test]
    fn landscape_ccw_origin_maps_to_last_native_column() {
        let mut frame = FrameBuffer::new();
        frame.set_orientation(Orientation::LandscapeCounterClockwise);
        frame.set_pixel(0, 0, BinaryColor::Off);
        assert_eq!(bit(&frame, WIDTH - 1, 0), 0);
    }

    #[test]
    fn size_swaps_axes_for_landscape() {
        let mut frame = FrameBuffer::new();
        assert_eq!(frame.size(), Size::new(WIDTH as u32, HEIGHT as u32));
        frame.set_orientation(Orientation::LandscapeCounterClockwise);
        assert_eq!(frame.size(), Size::new(HEIGHT as u32, WIDTH as u32));
    }

    #[test]
    fn out_of_range_coordinates_are_ignored() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(-1, 0, BinaryColor::Off);
        frame.set_pixel(0, HEIGHT as i32, BinaryColor::Off);
        assert!(frame.data().iter().all(|b| *b == 0xFF));
    }
}
