use embedded_graphics::{
    Drawable,
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::BinaryColor,
    prelude::{OriginDimensions, Point, Primitive, Size},
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use inkshot_core::framebuffer::{FrameBuffer, Orientation};
use inkshot_core::screenshot;

use crate::fs::HostStorage;

mod fs;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_root = std::env::args().nth(1).unwrap_or_else(|| "screenshots".into());
    log::info!("Inkshot desktop demo, writing to {}/", out_root);

    std::fs::create_dir_all(&out_root).unwrap_or_else(|e| {
        panic!("Unable to create output directory {}: {}", out_root, e);
    });
    let storage = HostStorage::new(&out_root);
    let mut frame = Box::new(FrameBuffer::new());

    let exports = [
        (Orientation::Portrait, "portrait.bmp"),
        (Orientation::PortraitInverted, "portrait_inverted.bmp"),
        (Orientation::LandscapeClockwise, "landscape_cw.bmp"),
        (Orientation::LandscapeCounterClockwise, "landscape_ccw.bmp"),
    ];

    let mut failed = false;
    for (orientation, name) in exports {
        frame.set_orientation(orientation);
        frame.clear_screen(0xFF);
        draw_test_pattern(&mut frame);
        if let Err(err) = screenshot::save_screen_bmp(&storage, name, &frame) {
            log::error!("Export of {} failed: {:?}", name, err);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Border, a solid block in the top-left corner and a label, so every
/// orientation is visually distinguishable in the exported files.
fn draw_test_pattern(frame: &mut FrameBuffer) {
    let size = frame.size();

    Rectangle::new(Point::zero(), size)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::Off, 4))
        .draw(frame)
        .ok();

    Rectangle::new(Point::new(12, 12), Size::new(80, 40))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(frame)
        .ok();

    let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::Off);
    Text::new("inkshot", Point::new(110, 40), style)
        .draw(frame)
        .ok();
}
