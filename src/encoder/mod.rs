mod mp3;

pub use mp3::{Mp3, SAMPLERATES};

use crate::{PcmSource, Settings};

/// A lossy encoder that pulls 16-bit PCM and writes its bitstream to `W`.
pub trait Encoder<W>: Sized
where
    W: std::io::Write,
{
    fn new(sink: W, settings: &Settings) -> anyhow::Result<Self>;

    /// Pull from `pcm` until it reports `Fill::Exhausted`, writing encoded
    /// output as it becomes available.
    fn encode(&mut self, pcm: &mut dyn PcmSource) -> anyhow::Result<()>;

    /// Flush trailing encoder state and hand back the sink.
    fn close(self) -> anyhow::Result<W>;
}
