use byteorder::{ByteOrder, LittleEndian};

use crate::source::{Frame, Source};
use crate::{Error, Format};

/// Frames allocated up front, before any read has asked for more.
const DEFAULT_FRAMES: usize = 512;

/// Outcome of a single `PcmSource::fill`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fill {
    /// This many bytes were written. Zero is not the end of the stream;
    /// the caller should try again, with a larger buffer if it was
    /// smaller than one frame.
    Written(usize),
    /// No more data will ever be produced.
    Exhausted,
}

/// A pull-based source of interleaved signed 16-bit little-endian PCM.
pub trait PcmSource {
    fn fill(&mut self, buffer: &mut [u8]) -> Fill;
}

impl<P> PcmSource for &mut P
where
    P: PcmSource + ?Sized,
{
    fn fill(&mut self, buffer: &mut [u8]) -> Fill {
        (**self).fill(buffer)
    }
}

/// Presents a `Source` of float frames as 16-bit PCM bytes.
pub struct SampleReader<S> {
    source: S,
    channels: usize,
    buffer: Vec<Frame>,
}

impl<S> SampleReader<S>
where
    S: Source,
{
    /// Only the channel count of `format` is used, and it must be 1 or 2.
    pub fn new(source: S, format: &Format) -> Result<Self, Error> {
        if !(1..=2).contains(&format.channels) {
            return Err(Error::Channels(format.channels));
        }
        Ok(SampleReader {
            source,
            channels: format.channels as usize,
            buffer: vec![[0.0; 2]; DEFAULT_FRAMES],
        })
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> PcmSource for SampleReader<S>
where
    S: Source,
{
    fn fill(&mut self, buffer: &mut [u8]) -> Fill {
        let needed = buffer.len() / (self.channels * 2);
        if needed == 0 {
            return Fill::Written(0);
        }

        // grows to the largest request seen, never shrinks
        if self.buffer.len() < needed {
            self.buffer.resize(needed, [0.0; 2]);
        }

        let (amt, more) = self.source.stream(&mut self.buffer[..needed]);
        if amt == 0 && !more {
            return Fill::Exhausted;
        }

        for (i, frame) in self.buffer[..amt].iter().enumerate() {
            for ch in 0..self.channels {
                let offset = (i * self.channels + ch) * 2;
                LittleEndian::write_i16(&mut buffer[offset..offset + 2], to_i16(frame[ch]));
            }
        }

        trace!("converted {} frames", amt);
        Fill::Written(amt * self.channels * 2)
    }
}

/// Clamp to [-1.0, 1.0] and scale by 32767, truncating toward zero.
/// -1.0 maps to -32767, never -32768.
pub fn to_i16(v: f64) -> i16 {
    (v.clamp(-1.0, 1.0) * 32767.0) as i16
}
