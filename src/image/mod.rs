pub mod i16;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::i16::ImageI16;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{GrayImageU8, ImageU8};
