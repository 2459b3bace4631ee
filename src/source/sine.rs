/// An endless sine tone, identical in both channel slots.
pub struct Sine {
    step: f64,
    phase: f64,
}

impl Sine {
    pub fn new(samplerate: u32, frequency: f64) -> anyhow::Result<Self> {
        if samplerate == 0 {
            anyhow::bail!("sine tone needs a non-zero sample rate");
        }
        let nyquist = samplerate as f64 / 2.0;
        if !(frequency >= 0.0 && frequency < nyquist) {
            anyhow::bail!(
                "sine frequency {} Hz must be below the nyquist limit of {} Hz",
                frequency,
                nyquist
            );
        }
        Ok(Sine {
            step: frequency / samplerate as f64,
            phase: 0.0,
        })
    }
}

impl super::Source for Sine {
    fn stream(&mut self, frames: &mut [super::Frame]) -> (usize, bool) {
        for frame in frames.iter_mut() {
            let v = (self.phase * 2.0 * std::f64::consts::PI).sin();
            *frame = [v, v];

            // keep the phase in [0, 1) so precision doesn't drift on long runs
            self.phase += self.step;
            self.phase %= 1.0;
        }
        (frames.len(), true)
    }
}
