use std::borrow::Cow;

/// Forward-only iterator over fixed-size frames of a byte buffer.
///
/// Full frames are borrowed. A short final frame is copied and right-padded
/// with the pad byte up to the frame size.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    rest: &'a [u8],
    frame_size: usize,
    pad_byte: u8,
}

/// Split `buffer` into frames of exactly `frame_size` bytes.
///
/// # Panics
///
/// Panics if `frame_size` is zero.
pub fn frames(buffer: &[u8], frame_size: usize, pad_byte: u8) -> Frames<'_> {
    assert!(frame_size > 0, "frame size must be non-zero");
    Frames {
        rest: buffer,
        frame_size,
        pad_byte,
    }
}

impl<'a> Frames<'a> {
    /// Whether the final frame will need padding.
    pub fn has_short_tail(&self) -> bool {
        self.rest.len() % self.frame_size != 0
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = Cow<'a, [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        if self.rest.len() >= self.frame_size {
            let (frame, rest) = self.rest.split_at(self.frame_size);
            self.rest = rest;
            return Some(Cow::Borrowed(frame));
        }
        let mut padded = Vec::with_capacity(self.frame_size);
        padded.extend_from_slice(self.rest);
        padded.resize(self.frame_size, self.pad_byte);
        self.rest = &[];
        Some(Cow::Owned(padded))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.len().div_ceil(self.frame_size);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl std::iter::FusedIterator for Frames<'_> {}
