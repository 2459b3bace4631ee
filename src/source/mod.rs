mod frames;
mod sine;
mod take;

pub use frames::Frames;
pub use sine::Sine;
pub use take::Take;

/// One time-slice of audio: one amplitude per channel slot.
///
/// Amplitudes are nominally in [-1.0, 1.0]. For mono audio only slot 0
/// is meaningful.
pub type Frame = [f64; 2];

/// A pull-based source of sample frames.
pub trait Source {
    /// Fill `frames` starting at index 0 with as many frames as are
    /// available. Returns how many were written and whether more may
    /// follow on later calls. `(0, false)` means the source is exhausted
    /// for good; `(0, true)` only means nothing is ready yet.
    fn stream(&mut self, frames: &mut [Frame]) -> (usize, bool);

    fn take(self, frames: u64) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, frames)
    }
}

impl<S> Source for &mut S
where
    S: Source + ?Sized,
{
    fn stream(&mut self, frames: &mut [Frame]) -> (usize, bool) {
        (**self).stream(frames)
    }
}

impl<S> Source for Box<S>
where
    S: Source + ?Sized,
{
    fn stream(&mut self, frames: &mut [Frame]) -> (usize, bool) {
        (**self).stream(frames)
    }
}
