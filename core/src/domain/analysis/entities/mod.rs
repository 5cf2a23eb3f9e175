pub mod analysis_result;
pub mod food_item;
pub mod uploaded_image;

pub use analysis_result::*;
pub use food_item::*;
pub use uploaded_image::*;
