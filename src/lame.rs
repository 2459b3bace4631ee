use lame_sys::*;

/// Worst-case MP3 output for `samples` input samples per channel, from lame.h.
pub fn max_encoded_len(samples: usize) -> usize {
    (samples * 5 + 3) / 4 + 7200
}

/// An owned libmp3lame encoder handle.
#[derive(Debug)]
pub struct Lame {
    flags: *mut lame_global_flags,
    channels: u16,
}

// the handle is only ever touched through &mut self
unsafe impl Send for Lame {}

impl Lame {
    pub fn new() -> Result<Self> {
        let flags = unsafe { lame_init() };
        if flags.is_null() {
            return Err(Error::MallocFailed);
        }
        Ok(Lame { flags, channels: 2 })
    }

    pub fn set_samplerate(&mut self, samplerate: u32) -> Result<()> {
        let code = unsafe { lame_set_in_samplerate(self.flags, samplerate as libc::c_int) };
        Error::param(code)
    }

    pub fn set_channels(&mut self, channels: u16) -> Result<()> {
        let code = unsafe { lame_set_num_channels(self.flags, channels as libc::c_int) };
        Error::param(code)?;
        self.channels = channels;
        Ok(())
    }

    pub fn set_kilobitrate(&mut self, kbitrate: u32) -> Result<()> {
        let code = unsafe { lame_set_brate(self.flags, kbitrate as libc::c_int) };
        Error::param(code)
    }

    /// 0 is best and slowest, 9 is worst and fastest.
    pub fn set_quality(&mut self, quality: u8) -> Result<()> {
        let code = unsafe { lame_set_quality(self.flags, quality as libc::c_int) };
        Error::param(code)
    }

    pub fn init_params(&mut self) -> Result<()> {
        let code = unsafe { lame_init_params(self.flags) };
        Error::param(code)
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Encode one block of planar PCM. `right` is ignored for mono but
    /// must still be as long as `left`.
    pub fn encode(&mut self, left: &[i16], right: &[i16], out: &mut [u8]) -> Result<usize> {
        if left.len() != right.len() {
            return Err(Error::ChannelMismatch);
        }
        // lame reads the pcm but older bindings declare the pointers mutable
        let code = unsafe {
            lame_encode_buffer(
                self.flags,
                left.as_ptr() as *mut libc::c_short,
                right.as_ptr() as *mut libc::c_short,
                left.len() as libc::c_int,
                out.as_mut_ptr(),
                out.len() as libc::c_int,
            )
        };
        Error::result(code.max(0) as usize, code)
    }

    /// Flush buffered samples as final frames. `out` needs at least 7200 bytes.
    pub fn flush(&mut self, out: &mut [u8]) -> Result<usize> {
        let code =
            unsafe { lame_encode_flush(self.flags, out.as_mut_ptr(), out.len() as libc::c_int) };
        Error::result(code.max(0) as usize, code)
    }
}

impl Drop for Lame {
    fn drop(&mut self) {
        if !self.flags.is_null() {
            unsafe {
                lame_close(self.flags);
            }
            self.flags = std::ptr::null_mut();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    BufferTooSmall,
    MallocFailed,
    ParamsNotInitialized,
    Psychoacoustic,
    BadParams,
    ChannelMismatch,
    Unknown(i32),
}

pub type Result<A> = std::result::Result<A, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Error::*;
        match self {
            BufferTooSmall => write!(f, "mp3 output buffer too small"),
            MallocFailed => write!(f, "out of memory in mp3 encoder"),
            ParamsNotInitialized => write!(f, "mp3 encoder parameters not initialized"),
            Psychoacoustic => write!(f, "psychoacoustic problem in mp3 encoder"),
            BadParams => write!(f, "invalid mp3 encoder parameters"),
            ChannelMismatch => write!(f, "left and right channels differ in length"),
            Unknown(code) => write!(f, "unknown mp3 encoder error {}", code),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    fn result<A>(result: A, code: libc::c_int) -> Result<A> {
        if let Some(err) = Self::from_c(code) {
            Err(err)
        } else {
            Ok(result)
        }
    }

    // setters and lame_init_params only ever return 0 or -1
    fn param(code: libc::c_int) -> Result<()> {
        if code < 0 {
            Err(Error::BadParams)
        } else {
            Ok(())
        }
    }

    // as documented for lame_encode_buffer and lame_encode_flush
    fn from_c(code: libc::c_int) -> Option<Self> {
        use Error::*;
        match code {
            c if c >= 0 => None,
            -1 => Some(BufferTooSmall),
            -2 => Some(MallocFailed),
            -3 => Some(ParamsNotInitialized),
            -4 => Some(Psychoacoustic),
            other => Some(Unknown(other)),
        }
    }
}
