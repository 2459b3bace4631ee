//! Feeds pull-based floating-point audio to a lossy encoder as 16-bit PCM.
//!
//! A [`Source`] hands out float frames on request. [`SampleReader`] turns
//! those into little-endian 16-bit PCM bytes on demand, and [`encode`]
//! lets an [`Encoder`] pull from it until the source runs dry.

#[macro_use]
extern crate log;

mod driver;
pub mod encoder;
mod error;
mod format;
pub mod lame;
mod reader;
pub mod source;

pub use driver::{encode, encode_with};
pub use encoder::{Encoder, Mp3};
pub use error::Error;
pub use format::{EncodeOptions, Format, Settings, DEFAULT_BITRATE, PRECISION};
pub use reader::{to_i16, Fill, PcmSource, SampleReader};
pub use source::{Frame, Source};
