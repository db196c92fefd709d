use ndarray::{Array1, Array2, ArrayView1};
use parking_lot::Mutex;
use tracing::debug;

use crate::ResonaCoreError;

/// A fixed-capacity circular store of spectral frames.
///
/// Holds the last `time_length` frames of `freq_bins` bins each, written by
/// the spectral front end one frame per hop. Writing advances a head index
/// and overwrites the oldest live slot; no frame is ever retired except by
/// being overwritten. Before the first write every slot reads as zeros.
///
/// Frames are addressed relative to the head: offset 0 is the most recently
/// written frame, negative offsets reach older frames, and any integer is
/// accepted since offsets are reduced modulo `time_length`
/// (`read(o) == read(o + m * time_length)` for every integer m).
///
/// # Concurrency
///
/// One producer thread is expected to call [`write`](SpectrogramBuffer::write)
/// sequentially while any number of reader threads call
/// [`read`](SpectrogramBuffer::read). Each individual call locks the storage
/// for its duration, so no reader ever observes a torn frame. There is no
/// atomicity ACROSS calls: the buffer may advance between two reads, so an
/// offset computed from previously observed state can be stale. Consumers
/// that need a consistent multi-frame view should take it in one call via
/// [`read_window`](SpectrogramBuffer::read_window) instead of composing
/// `read`s.
///
/// Reads hand back owned copies, never views into the storage, so a caller
/// mutating a returned frame cannot corrupt buffer history.
///
/// # Examples
/// ```
/// use resona_core::SpectrogramBuffer;
///
/// let buffer = SpectrogramBuffer::new(4, 2).unwrap();
/// buffer.write(&[1.0, 1.0]).unwrap();
/// buffer.write(&[2.0, 2.0]).unwrap();
///
/// assert_eq!(buffer.read(0).to_vec(), vec![2.0, 2.0]);
/// assert_eq!(buffer.read(-1).to_vec(), vec![1.0, 1.0]);
/// ```
pub struct SpectrogramBuffer {
    time_length: usize,
    freq_bins: usize,
    state: Mutex<BufferState>,
}

struct BufferState {
    // [time][freq]
    frames: Array2<f32>,
    head: usize,
}

impl SpectrogramBuffer {
    /// Creates a buffer holding `time_length` frames of `freq_bins` bins,
    /// all zero-filled.
    pub fn new(time_length: usize, freq_bins: usize) -> Result<Self, ResonaCoreError> {
        if time_length == 0 || freq_bins == 0 {
            return Err(ResonaCoreError::BadParameters(format!(
                "Spectrogram buffer dimensions must be > 0, got {} x {}",
                time_length, freq_bins
            )));
        }
        debug!(time_length, freq_bins, "allocating spectrogram buffer");
        Ok(SpectrogramBuffer {
            time_length,
            freq_bins,
            state: Mutex::new(BufferState {
                frames: Array2::zeros((time_length, freq_bins)),
                head: 0,
            }),
        })
    }

    /// Returns the buffer's time capacity in frames.
    pub fn time_length(&self) -> usize {
        self.time_length
    }

    /// Returns the number of bins in each frame.
    pub fn freq_bins(&self) -> usize {
        self.freq_bins
    }

    /// Writes one frame, overwriting the oldest slot once the buffer is
    /// full.
    ///
    /// The frame must hold exactly `freq_bins` values; a mismatched length
    /// is rejected before any state changes.
    pub fn write(&self, frame: &[f32]) -> Result<(), ResonaCoreError> {
        if frame.len() != self.freq_bins {
            return Err(ResonaCoreError::BadParameters(format!(
                "Frame length {} does not match the buffer's {} frequency bins",
                frame.len(),
                self.freq_bins
            )));
        }
        let mut state = self.state.lock();
        state.head = (state.head + 1) % self.time_length;
        let head = state.head;
        state.frames.row_mut(head).assign(&ArrayView1::from(frame));
        Ok(())
    }

    /// Returns a copy of the frame at the given head-relative offset.
    ///
    /// Offset 0 is the newest frame, -1 the one before it, and so on. Any
    /// integer is valid; offsets wrap modulo the time capacity.
    pub fn read(&self, offset: isize) -> Array1<f32> {
        let state = self.state.lock();
        let row = self.physical_index(state.head, offset);
        state.frames.row(row).to_owned()
    }

    /// Returns a copy of the most recently written frame.
    pub fn latest(&self) -> Array1<f32> {
        self.read(0)
    }

    /// Returns a copy of the last `frames` frames, oldest row first.
    ///
    /// The window is taken under a single lock acquisition, so its rows are
    /// mutually consistent even while a producer keeps writing. `frames`
    /// must be between 1 and the time capacity.
    pub fn read_window(&self, frames: usize) -> Result<Array2<f32>, ResonaCoreError> {
        if frames == 0 || frames > self.time_length {
            return Err(ResonaCoreError::BadParameters(format!(
                "Window of {} frames is outside this buffer's capacity of {}",
                frames, self.time_length
            )));
        }
        let state = self.state.lock();
        let mut window = Array2::zeros((frames, self.freq_bins));
        for i in 0..frames {
            let offset = i as isize - (frames as isize - 1);
            let row = self.physical_index(state.head, offset);
            window.row_mut(i).assign(&state.frames.row(row));
        }
        Ok(window)
    }

    /// Reduces a head-relative offset to a physical row index in
    /// `[0, time_length)`.
    fn physical_index(&self, head: usize, offset: isize) -> usize {
        (head as isize + offset).rem_euclid(self.time_length as isize) as usize
    }
}
