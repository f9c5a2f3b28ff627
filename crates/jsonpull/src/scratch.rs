use bstr::BStr;
use tracing::debug;

use crate::error::ErrorKind;

/// Reusable byte buffer for the string or number currently being scanned.
///
/// Storage is never released while the parser lives, so the peak capacity
/// reached by the largest token persists for the rest of the document.
#[derive(Debug)]
pub(crate) struct ScratchBuffer {
    data: Vec<u8>,
    limit: Option<usize>,
}

#[derive(Debug)]
pub(crate) enum ScratchError {
    Exhausted,
    LimitReached(usize),
}

impl From<ScratchError> for ErrorKind {
    fn from(err: ScratchError) -> Self {
        match err {
            ScratchError::Exhausted => ErrorKind::OutOfMemory,
            ScratchError::LimitReached(limit) => ErrorKind::TokenTooLong { limit },
        }
    }
}

/// Capacity after one growth step: `1.5 * current + 64`, rounded down to a
/// multiple of 64. Always larger than `current`.
pub(crate) fn grown_capacity(current: usize) -> usize {
    (current.saturating_mul(3) / 2).saturating_add(64) / 64 * 64
}

impl ScratchBuffer {
    pub(crate) fn new(capacity: usize, limit: Option<usize>) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            limit,
        }
    }

    /// Truncates to empty, keeping the allocation.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.data.clear();
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<(), ScratchError> {
        if let Some(limit) = self.limit {
            if self.data.len() >= limit {
                return Err(ScratchError::LimitReached(limit));
            }
        }
        if self.data.len() == self.data.capacity() {
            let wanted = grown_capacity(self.data.capacity());
            self.data
                .try_reserve_exact(wanted - self.data.len())
                .map_err(|err| {
                    debug!(%err, wanted, "scratch buffer allocation failed");
                    ScratchError::Exhausted
                })?;
            debug!(capacity = self.data.capacity(), "grew scratch buffer");
        }
        self.data.push(byte);
        Ok(())
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_bstr(&self) -> &BStr {
        BStr::new(&self.data)
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 64)]
    #[case(64, 128)]
    #[case(128, 256)]
    #[case(256, 448)]
    #[case(100, 192)]
    fn growth_steps(#[case] current: usize, #[case] expected: usize) {
        assert_eq!(grown_capacity(current), expected);
        assert!(grown_capacity(current) > current);
    }

    #[test]
    fn growth_saturates_instead_of_overflowing() {
        assert_eq!(grown_capacity(usize::MAX), (usize::MAX / 2 + 64) / 64 * 64);
    }

    #[test]
    fn reset_keeps_capacity() {
        let mut buf = ScratchBuffer::new(0, None);
        for b in 0..200u8 {
            buf.push(b).unwrap();
        }
        assert_eq!(buf.as_bytes().len(), 200);
        assert_eq!(buf.as_bytes()[199], 199);
        let peak = buf.capacity();
        assert!(peak >= 200);

        buf.reset();
        assert!(buf.as_bytes().is_empty());
        assert_eq!(buf.capacity(), peak);

        buf.push(b'x').unwrap();
        assert_eq!(buf.as_bstr(), "x");
        assert_eq!(buf.capacity(), peak);
    }

    #[test]
    fn limit_rejects_extra_bytes() {
        let mut buf = ScratchBuffer::new(0, Some(2));
        buf.push(b'a').unwrap();
        buf.push(b'b').unwrap();
        let err = buf.push(b'c').unwrap_err();
        assert!(matches!(err, ScratchError::LimitReached(2)));
        assert_eq!(ErrorKind::from(err), ErrorKind::TokenTooLong { limit: 2 });
        assert_eq!(buf.as_bstr(), "ab");
    }
}
