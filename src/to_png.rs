//! Render panel frames to PNG and animated PNG files for previews on the host.
#![cfg(feature = "host")]

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder, ScaledFloat};

use crate::led2d::Frame2d;
use crate::marquee::Marquee;

/// Inverse gamma used to turn LED drive levels into preview brightness.
pub const PREVIEW_INVERSE_GAMMA: f32 = 2.2;

/// Render one frame as a PNG whose larger side is at most `max_dimension` pixels.
///
/// Each LED is drawn as a soft-edged disc on black.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    output_path: impl AsRef<Path>,
    max_dimension: u32,
) -> Result<(), Box<dyn Error>> {
    write_frames(
        core::slice::from_ref(frame),
        output_path.as_ref(),
        max_dimension,
        None,
        PREVIEW_INVERSE_GAMMA,
    )
}

/// Render `frames` as a looping APNG, `frame_delay_ms` per frame.
///
/// # Errors
///
/// Returns an error if `frames` is empty, the delay does not fit the APNG header, or the file
/// cannot be created or encoded.
pub fn write_frames_apng<const W: usize, const H: usize>(
    frames: &[Frame2d<W, H>],
    output_path: impl AsRef<Path>,
    max_dimension: u32,
    frame_delay_ms: u32,
) -> Result<(), Box<dyn Error>> {
    write_frames_apng_with_gamma(
        frames,
        output_path,
        max_dimension,
        frame_delay_ms,
        PREVIEW_INVERSE_GAMMA,
    )
}

/// [`write_frames_apng`] with a custom preview inverse gamma.
///
/// # Errors
///
/// See [`write_frames_apng`].
pub fn write_frames_apng_with_gamma<const W: usize, const H: usize>(
    frames: &[Frame2d<W, H>],
    output_path: impl AsRef<Path>,
    max_dimension: u32,
    frame_delay_ms: u32,
    preview_inverse_gamma: f32,
) -> Result<(), Box<dyn Error>> {
    write_frames(
        frames,
        output_path.as_ref(),
        max_dimension,
        Some(frame_delay_ms),
        preview_inverse_gamma,
    )
}

/// Tick `marquee` through one full scroll cycle and save it as a looping APNG.
///
/// The marquee ends where it started. Returns the number of frames written.
///
/// # Errors
///
/// See [`write_frames_apng`].
pub fn write_marquee_apng<const N: usize, const W: usize, const H: usize, const CAP: usize>(
    marquee: &mut Marquee<N, W, H, CAP>,
    output_path: impl AsRef<Path>,
    max_dimension: u32,
    frame_delay_ms: u32,
) -> Result<usize, Box<dyn Error>> {
    let frames: Vec<Frame2d<W, H>> = (0..marquee.frames_per_cycle())
        .map(|_| {
            marquee.tick();
            marquee.frame_2d()
        })
        .collect();
    write_frames_apng(&frames, output_path, max_dimension, frame_delay_ms)?;
    Ok(frames.len())
}

fn write_frames<const W: usize, const H: usize>(
    frames: &[Frame2d<W, H>],
    output_path: &Path,
    max_dimension: u32,
    frame_delay_ms: Option<u32>,
    preview_inverse_gamma: f32,
) -> Result<(), Box<dyn Error>> {
    if frames.is_empty() {
        return Err("no frames to write".into());
    }
    let style = LedStyle::fit(W, H, usize::try_from(max_dimension)?, preview_inverse_gamma);
    let (width, height) = style.image_size(W, H);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(
        BufWriter::new(file),
        u32::try_from(width)?,
        u32::try_from(height)?,
    );
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder.set_source_gamma(ScaledFloat::new(1.0));
    if frame_delay_ms.is_some() {
        encoder.set_animated(u32::try_from(frames.len())?, 0)?;
    }
    let mut writer = encoder.write_header()?;
    for frame in frames {
        if let Some(delay_ms) = frame_delay_ms {
            writer.set_frame_delay(u16::try_from(delay_ms)?, 1000)?;
        }
        writer.write_image_data(&style.render(frame, width, height))?;
    }
    writer.finish()?;
    println!("wrote {} frame(s) to {}", frames.len(), output_path.display());
    Ok(())
}

const MIN_CELL_SIZE: usize = 4;
const MAX_CELL_SIZE: usize = 512;
// 16-bit RGB
const BYTES_PER_PIXEL: usize = 6;

/// How each LED is drawn: a `cell_size` square holding a disc that fades at its rim.
#[derive(Clone, Copy, Debug)]
struct LedStyle {
    cell_size: usize,
    radius: usize,
    inverse_gamma: f32,
}

impl LedStyle {
    // Largest cell size, up to `MAX_CELL_SIZE`, whose image (panel plus a one-radius border) fits `max_dimension`.
    fn fit(
        panel_width: usize,
        panel_height: usize,
        max_dimension: usize,
        inverse_gamma: f32,
    ) -> Self {
        let longest_side = panel_width.max(panel_height).max(1);
        let first_guess = max_dimension
            .checked_div(longest_side)
            .unwrap_or(max_dimension)
            .clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        let mut style = Self::with_cell_size(first_guess, inverse_gamma);
        while style.cell_size > MIN_CELL_SIZE {
            let (width, height) = style.image_size(panel_width, panel_height);
            if width.max(height) <= max_dimension {
                break;
            }
            style = Self::with_cell_size(style.cell_size.saturating_sub(1), inverse_gamma);
        }
        style
    }

    fn with_cell_size(cell_size: usize, inverse_gamma: f32) -> Self {
        let margin = (cell_size / 8).max(1);
        Self {
            cell_size,
            radius: (cell_size.saturating_sub(margin.saturating_mul(2)) / 2).max(1),
            inverse_gamma,
        }
    }

    const fn image_size(&self, panel_width: usize, panel_height: usize) -> (usize, usize) {
        let border = self.radius.saturating_mul(2);
        (
            panel_width.saturating_mul(self.cell_size).saturating_add(border),
            panel_height.saturating_mul(self.cell_size).saturating_add(border),
        )
    }

    // 16-bit big-endian RGB, row-major.
    #[expect(
        clippy::cast_precision_loss,
        reason = "cell coordinates are far below f32's exact integer range"
    )]
    fn render<const W: usize, const H: usize>(
        &self,
        frame: &Frame2d<W, H>,
        width: usize,
        height: usize,
    ) -> Vec<u8> {
        let mut bytes = vec![0u8; width.saturating_mul(height).saturating_mul(BYTES_PER_PIXEL)];
        let center = (self.cell_size as f32 - 1.0) / 2.0;
        let outer = self.radius as f32;
        let inner = outer * 2.0 / 3.0;

        for (y_index, row) in frame.iter().enumerate() {
            for (x_index, pixel) in row.iter().enumerate() {
                let origin_x = self.radius.saturating_add(x_index.saturating_mul(self.cell_size));
                let origin_y = self.radius.saturating_add(y_index.saturating_mul(self.cell_size));
                let channels = [pixel.r, pixel.g, pixel.b].map(|channel| self.to_linear(channel));

                for local_y in 0..self.cell_size {
                    for local_x in 0..self.cell_size {
                        let distance = (local_x as f32 - center).hypot(local_y as f32 - center);
                        if distance > outer {
                            continue;
                        }
                        let intensity = if distance <= inner {
                            1.0
                        } else {
                            1.0 - (distance - inner) / (outer - inner)
                        };
                        let Some(start) = origin_y
                            .checked_add(local_y)
                            .and_then(|y| y.checked_mul(width))
                            .and_then(|line| line.checked_add(origin_x))
                            .and_then(|line| line.checked_add(local_x))
                            .and_then(|pixel_index| pixel_index.checked_mul(BYTES_PER_PIXEL))
                        else {
                            continue;
                        };
                        let value: Vec<u8> = channels
                            .iter()
                            .flat_map(|linear| to_u16(linear * intensity).to_be_bytes())
                            .collect();
                        let end = start.saturating_add(BYTES_PER_PIXEL);
                        if let Some(target) = bytes.get_mut(start..end) {
                            target.copy_from_slice(&value);
                        }
                    }
                }
            }
        }
        bytes
    }

    fn to_linear(&self, channel: u8) -> f32 {
        (f32::from(channel) / 255.0).powf(self.inverse_gamma)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0.0..=65535.0 before the cast"
)]
fn to_u16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0).round() as u16
}
