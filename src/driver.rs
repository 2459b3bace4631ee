use crate::encoder::{Encoder, Mp3};
use crate::source::Source;
use crate::{EncodeOptions, Error, SampleReader};

/// Encode `source` as MP3 into `sink`.
///
/// The source must produce frames in the layout `options.format`
/// describes. Nothing is written to `sink` if validation fails; on an
/// `Error::Encode` or `Error::Close` the sink may hold partial output.
pub fn encode<W, S>(sink: W, source: S, options: EncodeOptions) -> Result<(), Error>
where
    W: std::io::Write,
    S: Source,
{
    encode_with::<Mp3<W>, W, S>(sink, source, options)
}

/// Encode `source` into `sink` with any `Encoder` implementation.
pub fn encode_with<E, W, S>(sink: W, source: S, options: EncodeOptions) -> Result<(), Error>
where
    E: Encoder<W>,
    W: std::io::Write,
    S: Source,
{
    let settings = options.settings()?;
    debug!(
        "encoding {} Hz, {} channels at {} bit/s",
        settings.samplerate, settings.channels, settings.bitrate
    );

    let mut encoder = E::new(sink, &settings).map_err(Error::Create)?;
    let mut reader = SampleReader::new(source, &options.format)?;
    encoder.encode(&mut reader).map_err(Error::Encode)?;
    encoder.close().map_err(Error::Close)?;

    debug!("encoding finished");
    Ok(())
}
