pub mod bmp;
pub mod canvas;
pub mod font;
pub mod series;
