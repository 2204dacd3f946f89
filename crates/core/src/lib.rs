//! adnpix Core Library
//!
//! Codec réversible entre une séquence de nucléotides et une image RGB.
//!
//! Chaque groupe de K=12 bases (24 bits, 2 bits par base) devient un pixel
//! dont les trois canaux portent les bits dans l'ordre. Les pixels sont
//! disposés dans une grille quasi carrée, éventuellement agrandie au plus
//! proche voisin; le facteur d'échelle est écrit dans les métadonnées PNG.
//!
//! ```no_run
//! use adnpix_core::{ImageCodec, OutputFormat};
//!
//! # fn main() -> adnpix_core::Result<()> {
//! let codec = ImageCodec::default();
//! let png = codec.encode_to_bytes("AAACCCGGGTTT", Some(8), OutputFormat::Png)?;
//! let sequence = codec.decode_bytes(&png)?;
//! assert_eq!(sequence.to_string(), "AAACCCGGGTTT");
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod codec;
pub mod config;
pub mod container;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod scale;
pub mod sequence;

// Réexportations principales
pub use canvas::{Canvas, Pixel};
pub use codec::{Codec, Decoder, Encoder, GroupSize, DEFAULT_GROUP_SIZE};
pub use config::{AppConfig, CodecConfig, LoggingConfig};
pub use container::{encode_png, read_image, write_image, write_jpeg, write_png, OutputFormat};
pub use error::{PixelError, Result};
pub use logging::init_logging;
pub use pipeline::ImageCodec;
pub use scale::{apply_scale, undo_scale, ImageMetadata, ScaledImage, DEFAULT_MAX_DIMENSION, SCALE_FACTOR_KEY};
pub use sequence::{Nucleotide, Sequence};
