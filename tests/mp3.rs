use std::time::Duration;

use pcmenc::source::{Frames, Sine, Source};
use pcmenc::encoder::SAMPLERATES;
use pcmenc::{encode, EncodeOptions, Encoder, Error, Format, Mp3, Settings};

fn sine(format: &Format, duration: Duration) -> impl Source {
    Sine::new(format.samplerate, 440.0)
        .unwrap()
        .take(format.frames(duration))
}

fn encode_sine(format: Format, duration: Duration, bitrate: u32) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let options = EncodeOptions::new(format).bitrate(bitrate);
    encode(&mut out, sine(&format, duration), options)?;
    Ok(out)
}

#[test]
fn stereo_one_second() {
    let out = encode_sine(Format::new(44100, 2), Duration::from_secs(1), 128000).unwrap();
    assert!(out.len() > 1000, "output too small: {} bytes", out.len());
}

#[test]
fn mono() {
    let out = encode_sine(Format::new(22050, 1), Duration::from_secs(1), 64000).unwrap();
    assert!(out.len() > 500, "output too small: {} bytes", out.len());
}

#[test]
fn sample_rates() {
    for samplerate in SAMPLERATES {
        let out = encode_sine(
            Format::new(samplerate, 2),
            Duration::from_millis(500),
            96000,
        )
        .unwrap_or_else(|e| panic!("encode failed at {} Hz: {:?}", samplerate, e));
        assert!(!out.is_empty(), "no output at {} Hz", samplerate);
    }
}

#[test]
fn bitrates() {
    let mut sizes = vec![];
    for bitrate in [64000, 96000, 128000, 192000, 256000] {
        let out = encode_sine(Format::new(44100, 2), Duration::from_secs(1), bitrate)
            .unwrap_or_else(|e| panic!("encode failed at {} bit/s: {:?}", bitrate, e));
        assert!(!out.is_empty(), "no output at {} bit/s", bitrate);
        sizes.push(out.len());
    }
    assert!(sizes[4] > sizes[0], "sizes do not grow: {:?}", sizes);
}

#[test]
fn tiny_bitrates_round_up() {
    for bitrate in [1, 999, 1999] {
        let out = encode_sine(Format::new(44100, 2), Duration::from_millis(500), bitrate)
            .unwrap_or_else(|e| panic!("encode failed at {} bit/s: {:?}", bitrate, e));
        assert!(!out.is_empty(), "no output at {} bit/s", bitrate);
    }
}

#[test]
fn default_bitrate_matches_64k() {
    let format = Format::new(44100, 2);
    let default = encode_sine(format, Duration::from_secs(1), 0).unwrap();
    let explicit = encode_sine(format, Duration::from_secs(1), 64000).unwrap();
    assert!(!default.is_empty());
    assert_eq!(default.len(), explicit.len());
}

#[test]
fn empty_stream() {
    let out = encode_sine(Format::new(44100, 2), Duration::ZERO, 128000).unwrap();
    assert!(out.is_empty());

    let mut out = Vec::new();
    let options = EncodeOptions::new(Format::new(44100, 1));
    encode(&mut out, Frames::new(vec![]), options).unwrap();
    assert!(out.is_empty());
}

#[test]
fn clipping_input_still_encodes() {
    let frames = (0..4410).map(|i| if i % 2 == 0 { [4.0, -4.0] } else { [-4.0, 4.0] });
    let mut out = Vec::new();
    let options = EncodeOptions::new(Format::new(44100, 2));
    encode(&mut out, Frames::new(frames.collect()), options).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn invalid_precision() {
    let mut format = Format::new(44100, 2);
    format.precision = 1;
    let mut out = Vec::new();
    let err = encode(&mut out, sine(&format, Duration::from_secs(1)), EncodeOptions::new(format))
        .unwrap_err();
    assert!(matches!(err, Error::Precision(1)));
    assert!(err.is_validation());
    assert!(out.is_empty());
}

#[test]
fn invalid_channels() {
    let format = Format::new(44100, 3);
    let err = encode_sine(format, Duration::from_secs(1), 0).unwrap_err();
    assert!(matches!(err, Error::Channels(3)));
}

#[test]
fn unsupported_samplerate() {
    let err = encode_sine(Format::new(44000, 2), Duration::from_millis(100), 0).unwrap_err();
    assert!(matches!(err, Error::Create(_)));
    assert!(!err.is_validation());
}

#[test]
fn encoder_counts_samples() {
    let settings = Settings {
        samplerate: 48000,
        channels: 1,
        bitrate: 64000,
    };
    let format = Format::new(48000, 1);
    let mut encoder = Mp3::new(Vec::new(), &settings).unwrap();
    let mut reader =
        pcmenc::SampleReader::new(sine(&format, Duration::from_millis(100)), &format).unwrap();
    encoder.encode(&mut reader).unwrap();
    assert_eq!(encoder.samples(), 4800);
    let out = encoder.close().unwrap();
    assert!(!out.is_empty());
}
