use std::time::Duration;

use crate::Error;

/// Bytes per sample in the PCM handed to encoders. Only 16-bit is supported.
pub const PRECISION: u16 = 2;

/// Bit-rate used when the caller leaves `EncodeOptions::bitrate` at zero.
pub const DEFAULT_BITRATE: u32 = 64000;

/// Shape of the audio a source produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Format {
    /// Samples per second.
    pub samplerate: u32,
    pub channels: u16,
    /// Bytes per sample. Must be `PRECISION`.
    pub precision: u16,
}

impl Format {
    pub fn new(samplerate: u32, channels: u16) -> Self {
        Format {
            samplerate,
            channels,
            precision: PRECISION,
        }
    }

    /// Number of whole frames that fit in `duration` at this sample rate.
    pub fn frames(&self, duration: Duration) -> u64 {
        (duration.as_nanos() * self.samplerate as u128 / 1_000_000_000) as u64
    }

    /// Bytes one frame takes up as 16-bit PCM.
    pub fn frame_bytes(&self) -> usize {
        self.channels as usize * PRECISION as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    pub format: Format,
    /// Bits per second. Zero selects `DEFAULT_BITRATE`.
    pub bitrate: u32,
}

impl EncodeOptions {
    pub fn new(format: Format) -> Self {
        EncodeOptions { format, bitrate: 0 }
    }

    pub fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = bitrate;
        self
    }

    /// Validate the format and resolve defaults into encoder settings.
    pub fn settings(&self) -> Result<Settings, Error> {
        if self.format.precision != PRECISION {
            return Err(Error::Precision(self.format.precision));
        }
        if !(1..=2).contains(&self.format.channels) {
            return Err(Error::Channels(self.format.channels));
        }
        Ok(Settings {
            samplerate: self.format.samplerate,
            channels: self.format.channels,
            bitrate: if self.bitrate == 0 {
                DEFAULT_BITRATE
            } else {
                self.bitrate
            },
        })
    }
}

/// Validated options an `Encoder` is constructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Settings {
    pub samplerate: u32,
    pub channels: u16,
    pub bitrate: u32,
}
