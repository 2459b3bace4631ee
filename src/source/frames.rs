use super::Frame;

/// An in-memory source that plays back a fixed list of frames.
#[derive(Clone, Debug, Default)]
pub struct Frames {
    frames: Vec<Frame>,
    position: usize,
}

impl Frames {
    pub fn new(frames: Vec<Frame>) -> Self {
        Frames {
            frames,
            position: 0,
        }
    }

    /// Build a source from single-channel amplitudes. Slot 1 is left at zero.
    pub fn mono(samples: Vec<f64>) -> Self {
        Self::new(samples.into_iter().map(|v| [v, 0.0]).collect())
    }

    /// Frames not yet streamed.
    pub fn remaining(&self) -> usize {
        self.frames.len() - self.position
    }
}

impl super::Source for Frames {
    fn stream(&mut self, frames: &mut [Frame]) -> (usize, bool) {
        let amt = frames.len().min(self.remaining());
        if amt == 0 && self.remaining() == 0 {
            return (0, false);
        }
        frames[..amt].copy_from_slice(&self.frames[self.position..self.position + amt]);
        self.position += amt;
        (amt, true)
    }
}
