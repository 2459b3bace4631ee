use std::time::Duration;

use clap::clap_app;
use pcmenc::source::{Sine, Source};
use pcmenc::{EncodeOptions, Format};

fn main() {
    pretty_env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let matches = clap_app!(
        pcmenc =>
            (@setting SubcommandRequiredElseHelp)
            (@subcommand sine =>
             (about: "render a sine tone to mp3")
             (@arg OUTPUT: -o --output +takes_value "output file (default stdout)")
             (@arg RATE: -r --rate +takes_value "sample rate in Hz (default 44100)")
             (@arg CHANNELS: -c --channels +takes_value "1 or 2 (default 2)")
             (@arg BITRATE: -b --bitrate +takes_value "bit-rate in bit/s (default 64000)")
             (@arg SECONDS: -d --duration +takes_value "length in seconds (default 3)")
             (@arg FREQUENCY: -f --frequency +takes_value "tone in Hz (default 440)")
            )
    )
    .get_matches();

    if let Some(matches) = matches.subcommand_matches("sine") {
        let samplerate: u32 = matches.value_of("RATE").unwrap_or("44100").parse()?;
        let channels: u16 = matches.value_of("CHANNELS").unwrap_or("2").parse()?;
        let bitrate: u32 = matches.value_of("BITRATE").unwrap_or("0").parse()?;
        let seconds: f64 = matches.value_of("SECONDS").unwrap_or("3").parse()?;
        let frequency: f64 = matches.value_of("FREQUENCY").unwrap_or("440").parse()?;

        let format = Format::new(samplerate, channels);
        let duration = Duration::try_from_secs_f64(seconds)?;
        let source = Sine::new(samplerate, frequency)?.take(format.frames(duration));
        let options = EncodeOptions::new(format).bitrate(bitrate);

        match matches.value_of("OUTPUT") {
            Some(path) => {
                let out = std::io::BufWriter::new(std::fs::File::create(path)?);
                pcmenc::encode(out, source, options)?;
            }
            None => {
                let out = std::io::stdout();
                pcmenc::encode(out.lock(), source, options)?;
            }
        }
    }

    Ok(())
}
