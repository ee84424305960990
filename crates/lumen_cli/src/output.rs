//! Image output: ASCII PPM written directly, everything else via `image`.

use anyhow::{Context, Result};
use lumen_renderer::{color_to_rgb8, ImageBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Save `buffer` to `path`, choosing the format from the file extension.
pub fn save_image(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    let is_ppm = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_ppm(buffer, &mut writer)?;
        writer.flush()?;
    } else {
        image::save_buffer(
            path,
            &buffer.to_rgb8(),
            buffer.width,
            buffer.height,
            image::ColorType::Rgb8,
        )
        .with_context(|| format!("failed to encode {}", path.display()))?;
    }

    Ok(())
}

/// Write an ASCII (P3) PPM, one pixel per line.
pub fn write_ppm(buffer: &ImageBuffer, writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", buffer.width, buffer.height)?;
    writeln!(writer, "255")?;

    for color in &buffer.pixels {
        let [r, g, b] = color_to_rgb8(*color);
        writeln!(writer, "{r} {g} {b}")?;
    }

    Ok(())
}
