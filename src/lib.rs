#![doc = r#"
TEXPAD — pads PNG textures to even width and height.

This crate takes a directory of PNG files and pads each one up to the nearest
even dimensions by appending at most one transparent (or black) row and one
column at the bottom/right edge, writing the results to a `Texture`
subdirectory while leaving the originals untouched. It powers the TEXPAD CLI
and can be embedded in your own Rust applications.

Quick start: pad a directory
----------------------------
```rust,no_run
use std::path::Path;
use texpad::{PadParams, pad_directory};

fn main() -> texpad::Result<()> {
    let report = pad_directory(Path::new("/assets/sprites"), &PadParams::default())?;
    println!("saved={} skipped={}", report.saved, report.skipped);
    Ok(())
}
```

Pad an in-memory image
----------------------
```rust
use image::DynamicImage;
use texpad::pad_to_even;

let image = DynamicImage::new_rgba8(3, 5);
let padded = pad_to_even(image);
assert_eq!((padded.width(), padded.height()), (4, 6));
```

Error handling
--------------
All public functions return `texpad::Result<T>`. The only fatal error during
a directory run is the target path not naming a directory; files that fail to
decode are skipped and counted in the [`BatchReport`], and encode/write
failures propagate as [`Error`] variants.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — run parameters and the padding transform.
- [`types`] — `ColorMode` and `FileOutcome`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use api::{BatchReport, list_png_files, pad_directory, pad_file};
pub use crate::core::params::PadParams;
pub use crate::core::processing::{even_dimensions, pad_to_even};
pub use error::{Error, Result};
pub use types::{ColorMode, FileOutcome};
