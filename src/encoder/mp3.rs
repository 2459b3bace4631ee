use byteorder::{ByteOrder, LittleEndian};

use crate::lame::{self, Lame};
use crate::{Fill, PcmSource, Settings};

/// Frames pulled per chunk, one MPEG-1 layer III frame.
const CHUNK_FRAMES: usize = 1152;

const QUALITY: u8 = 5;

/// Sample rates an MPEG-1, 2 or 2.5 layer III stream can carry.
pub const SAMPLERATES: [u32; 9] = [
    8000, 11025, 12000, 16000, 22050, 24000, 32000, 44100, 48000,
];

/// Constant bit-rate MP3 through libmp3lame.
pub struct Mp3<W> {
    inner: W,
    encoder: Lame,
    pcm: Vec<u8>,
    left: Vec<i16>,
    right: Vec<i16>,
    out: Vec<u8>,
    samples: u64,
}

impl<W> Mp3<W>
where
    W: std::io::Write,
{
    /// Samples per channel handed to LAME so far.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    fn write_chunk(&mut self, len: usize) -> anyhow::Result<()> {
        let channels = self.encoder.channels() as usize;
        let frames = len / (channels * 2);
        self.left.resize(frames, 0);
        self.right.resize(frames, 0);

        for (i, sample) in self.pcm[..len].chunks_exact(2).enumerate() {
            let v = LittleEndian::read_i16(sample);
            if channels == 1 {
                self.left[i] = v;
                self.right[i] = v;
            } else if i % 2 > 0 {
                self.right[i / 2] = v;
            } else {
                self.left[i / 2] = v;
            }
        }

        self.out.resize(lame::max_encoded_len(frames), 0);
        let amt = self
            .encoder
            .encode(&self.left, &self.right, &mut self.out)?;
        self.inner.write_all(&self.out[..amt])?;
        self.samples += frames as u64;
        trace!("encoded {} frames into {} bytes", frames, amt);
        Ok(())
    }
}

impl<W> super::Encoder<W> for Mp3<W>
where
    W: std::io::Write,
{
    fn new(inner: W, settings: &Settings) -> anyhow::Result<Self> {
        if !SAMPLERATES.contains(&settings.samplerate) {
            anyhow::bail!(
                "unsupported sample rate for mp3: {} Hz",
                settings.samplerate
            );
        }
        if !(1..=2).contains(&settings.channels) {
            anyhow::bail!("unsupported channel count for mp3: {}", settings.channels);
        }
        let mut encoder = Lame::new()?;
        encoder.set_samplerate(settings.samplerate)?;
        encoder.set_channels(settings.channels)?;
        encoder.set_quality(QUALITY)?;
        // lame takes whole kbit/s and rounds to the nearest rate its profile allows
        let kbitrate = settings.bitrate.div_ceil(1000).max(1);
        encoder.set_kilobitrate(kbitrate)?;
        encoder.init_params()?;
        debug!(
            "mp3 encoder ready: {} Hz, {} channels, {} kbit/s",
            settings.samplerate,
            settings.channels,
            kbitrate
        );

        Ok(Mp3 {
            inner,
            pcm: vec![0; CHUNK_FRAMES * settings.channels as usize * 2],
            encoder,
            left: Vec::with_capacity(CHUNK_FRAMES),
            right: Vec::with_capacity(CHUNK_FRAMES),
            out: Vec::new(),
            samples: 0,
        })
    }

    fn encode(&mut self, pcm: &mut dyn PcmSource) -> anyhow::Result<()> {
        loop {
            match pcm.fill(&mut self.pcm) {
                Fill::Exhausted => break,
                // source has nothing right now, ask again
                Fill::Written(0) => continue,
                Fill::Written(len) => self.write_chunk(len)?,
            }
        }
        debug!("mp3 input exhausted after {} samples", self.samples);
        Ok(())
    }

    fn close(mut self) -> anyhow::Result<W> {
        // with nothing encoded there is nothing to flush, and LAME would
        // otherwise pad out a frame of silence
        if self.samples > 0 {
            self.out.resize(lame::max_encoded_len(CHUNK_FRAMES), 0);
            let amt = self.encoder.flush(&mut self.out)?;
            self.inner.write_all(&self.out[..amt])?;
            debug!("mp3 flush wrote {} bytes", amt);
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}
