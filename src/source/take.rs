/// Limits a source to a fixed number of frames.
pub struct Take<S> {
    source: S,
    remaining: u64,
}

impl<S> Take<S>
where
    S: super::Source,
{
    pub fn new(source: S, frames: u64) -> Self {
        Self {
            source,
            remaining: frames,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> super::Source for Take<S>
where
    S: super::Source,
{
    fn stream(&mut self, frames: &mut [super::Frame]) -> (usize, bool) {
        if self.remaining == 0 {
            return (0, false);
        }
        let wanted = (frames.len() as u64).min(self.remaining) as usize;
        let (amt, more) = self.source.stream(&mut frames[..wanted]);
        self.remaining -= amt as u64;
        (amt, more)
    }
}

#[cfg(test)]
mod test {
    use crate::source::{Frames, Source};

    fn ramp(len: usize) -> Frames {
        Frames::new((0..len).map(|i| [i as f64, -(i as f64)]).collect())
    }

    #[test]
    fn stops_after_limit() {
        let mut take = ramp(100).take(10);
        let mut frames = [[0.0; 2]; 4];

        assert_eq!(take.stream(&mut frames), (4, true));
        assert_eq!(take.stream(&mut frames), (4, true));
        assert_eq!(take.stream(&mut frames), (2, true));
        assert_eq!(frames[1], [9.0, -9.0]);
        assert_eq!(take.remaining(), 0);
        assert_eq!(take.stream(&mut frames), (0, false));
        assert_eq!(take.stream(&mut frames), (0, false));
    }

    #[test]
    fn zero_is_exhausted_immediately() {
        let mut take = ramp(100).take(0);
        let mut frames = [[0.0; 2]; 4];
        assert_eq!(take.stream(&mut frames), (0, false));
        // nothing was pulled from the inner source
        assert_eq!(take.into_inner().remaining(), 100);
    }

    #[test]
    fn shorter_inner_source() {
        let mut take = ramp(3).take(10);
        let mut frames = [[0.0; 2]; 8];
        assert_eq!(take.stream(&mut frames), (3, true));
        assert_eq!(take.stream(&mut frames), (0, false));
        assert_eq!(take.remaining(), 7);
    }
}
