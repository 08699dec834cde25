pub mod use_parallax;
pub mod use_scroll;

pub use use_parallax::use_parallax;
pub use use_scroll::use_scroll_y;
