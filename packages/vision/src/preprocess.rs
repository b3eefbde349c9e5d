use image::{
    RgbImage,
    imageops::{self, FilterType},
};
use ndarray::Array4;
use std::borrow::Cow;

/// Square edge length the model was trained on.
pub const INPUT_SIZE: u32 = 128;
pub const CHANNELS: usize = 3;

/// Single-sample NHWC batch: `(1, height, width, CHANNELS)`, values in `[0, 1]`.
pub type BatchTensor = Array4<f32>;

/// Bicubic, the default resampling of the imaging stack the model was trained with.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

pub fn input_shape() -> [usize; 4] {
    [1, INPUT_SIZE as usize, INPUT_SIZE as usize, CHANNELS]
}

pub fn preprocess(image: &RgbImage) -> BatchTensor {
    preprocess_to(image, INPUT_SIZE, INPUT_SIZE)
}

/// Stretch `image` to `width` x `height` (aspect ratio is not preserved) and
/// scale every channel by `1 / 255`.
pub fn preprocess_to(image: &RgbImage, width: u32, height: u32) -> BatchTensor {
    let resized: Cow<'_, RgbImage> = if image.dimensions() == (width, height) {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(imageops::resize(image, width, height, RESIZE_FILTER))
    };

    Array4::<f32>::from_shape_fn(
        (1, height as usize, width as usize, CHANNELS),
        |(_, y, x, c)| {
            let p = resized.get_pixel(x as u32, y as u32);
            p[c] as f32 / 255.0
        },
    )
}
