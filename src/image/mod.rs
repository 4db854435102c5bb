pub mod io;
pub mod mask;
pub mod traits;
pub mod working;

pub use self::mask::{BinaryMask, MaskPolarity};
pub use self::traits::{ImageView, ImageViewMut};
pub use self::working::{WorkingImage, DEFAULT_MAX_SIZE};
