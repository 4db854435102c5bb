/// Read-only row-major access to a single-channel grid.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Overwrite the inclusive window `[x0, x1] x [y0, y1]` with `value`.
    fn fill_window(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, value: Self::Pixel) {
        for y in y0..=y1 {
            self.row_mut(y)[x0..=x1].fill(value);
        }
    }
}
