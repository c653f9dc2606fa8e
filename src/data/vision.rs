// ============================================================
// Layer 4 — Image Bridge
// ============================================================
// Turns a decoded RGB image into the channel-first layout vision
// models expect:
//
//   RgbImage (H × W pixels, u8 per channel)
//        │
//        ▼
//   Tensor [3, H, W], values scaled into [0, 1]

use anyhow::{ensure, Result};
use burn::{
    prelude::*,
    tensor::{ElementConversion, TensorData},
};
use image::{Rgb, RgbImage};

const CHANNELS: usize = 3;

/// Convert an RGB image into a `[3, height, width]` float tensor in `[0, 1]`.
pub fn image_to_tensor<B: Backend>(image: &RgbImage, device: &B::Device) -> Tensor<B, 3> {
    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);
    let plane = width * height;

    let mut values = vec![0.0f32; CHANNELS * plane];
    for (x, y, pixel) in image.enumerate_pixels() {
        let offset = y as usize * width + x as usize;
        for channel in 0..CHANNELS {
            values[channel * plane + offset] = f32::from(pixel[channel]) / 255.0;
        }
    }

    Tensor::from_data(TensorData::new(values, [CHANNELS, height, width]), device)
}

/// Round-trip a tiny synthetic image through the bridge.
/// Used by the import check to confirm the vision stack is usable.
pub fn probe<B: Backend>(device: &B::Device) -> Result<()> {
    let image = RgbImage::from_fn(4, 2, |x, y| Rgb([(x * 60) as u8, (y * 255) as u8, 128]));
    let tensor = image_to_tensor::<B>(&image, device);

    let dims = tensor.dims();
    ensure!(dims == [3, 2, 4], "image tensor has shape {dims:?}, expected [3, 2, 4]");

    let max: f32 = tensor.max().into_scalar().elem();
    ensure!(max <= 1.0, "image tensor was not normalised (max {max})");
    Ok(())
}
