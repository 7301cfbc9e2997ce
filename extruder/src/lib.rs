//! extruder - Tile-sheet border extrusion
//!
//! Adds a 1-pixel border around every tile of a tile sheet, copied from the
//! tile's own edge pixels, so texture sampling near a tile edge never
//! reads from the neighbouring tile.
//!
//! The transform lives in [`transform`]; this crate wires it to image files
//! through [`run`], with the destination chosen by an [`OutputPolicy`] and
//! progress reported to a [`Logger`].
//!
//! # Example
//!
//! ```
//! use extruder::{Pix, PixMut, transform};
//!
//! let mut pm = PixMut::new(32, 16).unwrap();
//! pm.set_all_arbitrary(0xff0000ff);
//! let sheet: Pix = pm.into();
//!
//! let out = transform::extrude(&sheet, 16, 16).unwrap();
//! assert_eq!((out.width(), out.height()), (36, 18));
//! ```

mod error;
pub mod logger;
pub mod policy;
mod run;

pub use error::{Error, Result};
pub use logger::{LogLevel, Logger, RecordingLogger, TracingLogger};
pub use policy::{LEGACY_SUFFIX, OutputPolicy};
pub use run::{Job, Report, run};

pub use extruder_core::{Box, ImageFormat, Pix, PixMut, color};

pub use extruder_io as io;
pub use extruder_transform as transform;
