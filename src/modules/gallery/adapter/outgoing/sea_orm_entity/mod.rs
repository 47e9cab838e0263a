pub mod galleries;
pub mod images;
