pub mod padding;

pub use padding::{even_dimensions, pad_to_even};
