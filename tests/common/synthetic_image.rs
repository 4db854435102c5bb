use image::{GrayImage, Luma};

pub const CHECKER_DARK: u8 = 0;
pub const CHECKER_LIGHT: u8 = 255;
pub const PATCH_VALUE: u8 = 128;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> GrayImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    GrayImage::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) & 1 == 0 {
            Luma([CHECKER_DARK])
        } else {
            Luma([CHECKER_LIGHT])
        }
    })
}

/// Checkerboard with flat patches `(x0, y0, x1, y1)` painted on top.
pub fn checkerboard_with_patches(
    width: u32,
    height: u32,
    cell: u32,
    patches: &[(u32, u32, u32, u32)],
) -> GrayImage {
    let mut img = checkerboard(width, height, cell);
    for &(x0, y0, x1, y1) in patches {
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, Luma([PATCH_VALUE]));
            }
        }
    }
    img
}
