pub mod rolling_adler32;
pub mod rolling_adler64;

pub trait RollingChecksum {
    type ChecksumType;

    /// Starts from the identity state and absorbs `initial_window`.
    fn new(initial_window: &[u8]) -> Self;
    fn checksum(&self) -> Self::ChecksumType;

    fn reset(&mut self);
    fn update(&mut self, data: &[u8]);

    /// Evicts `old_byte` from the front of a window of `blocksize` bytes and appends `new_byte`.
    ///
    /// `blocksize` must be the number of bytes the current checksum covers. This is not
    /// checked: a wrong value silently yields a meaningless checksum.
    fn roll(&mut self, blocksize: usize, old_byte: u8, new_byte: u8);
}

/// Iterates over the checksums of every `blocksize`-byte window of `content`,
/// rolling the checksum instead of recomputing it for each window.
///
/// ```
/// use adler64_rolling::rolling_checksum::rolling_adler64::RollingAdler64;
/// use adler64_rolling::rolling_checksum::{RollingChecksum, RollingWindows};
///
/// let content = b"abcdef";
/// let checksums: Vec<u64> = RollingWindows::<RollingAdler64>::new(content, 4).collect();
///
/// assert_eq!(checksums.len(), 3);
/// assert_eq!(checksums[2], RollingAdler64::new(b"cdef").checksum());
/// ```
pub struct RollingWindows<'a, R> {
    content: &'a [u8],
    blocksize: usize,
    // start of the next window to yield
    next_start: usize,
    rolling: Option<R>,
}

impl<'a, R> RollingWindows<'a, R>
where
    R: RollingChecksum,
{
    pub fn new(content: &'a [u8], blocksize: usize) -> Self {
        RollingWindows {
            content,
            blocksize,
            next_start: 0,
            rolling: None,
        }
    }

    fn window_count(&self) -> usize {
        if self.blocksize == 0 || self.blocksize > self.content.len() {
            return 0;
        }
        self.content.len() - self.blocksize + 1
    }
}

impl<'a, R> Iterator for RollingWindows<'a, R>
where
    R: RollingChecksum,
{
    type Item = R::ChecksumType;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_start >= self.window_count() {
            return None;
        }

        let start = self.next_start;
        match self.rolling.as_mut() {
            None => self.rolling = Some(R::new(&self.content[..self.blocksize])),
            Some(rolling) => rolling.roll(
                self.blocksize,
                self.content[start - 1],
                self.content[start - 1 + self.blocksize],
            ),
        }
        self.next_start += 1;

        self.rolling.as_ref().map(R::checksum)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window_count().saturating_sub(self.next_start);
        (remaining, Some(remaining))
    }
}

impl<'a, R> ExactSizeIterator for RollingWindows<'a, R> where R: RollingChecksum {}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::rolling_adler32::RollingAdler32;
    use super::rolling_adler64::RollingAdler64;
    use super::*;

    #[test_case(10, 3, 8; "when the window fits several times")]
    #[test_case(10, 10, 1; "when the window is the whole content")]
    #[test_case(10, 11, 0; "when the window is bigger than the content")]
    #[test_case(10, 0, 0; "when the window is empty")]
    #[test_case(0, 1, 0; "when the content is empty")]
    fn test_window_count(content_len: usize, blocksize: usize, expected: usize) {
        let content: Vec<u8> = (0..content_len).map(|x| x as u8).collect();
        let windows = RollingWindows::<RollingAdler64>::new(&content, blocksize);

        assert_eq!(windows.len(), expected);
        assert_eq!(windows.count(), expected);
    }

    fn assert_windows_match_fresh_checksums<R>(content: &[u8], blocksize: usize)
    where
        R: RollingChecksum,
        R::ChecksumType: PartialEq + std::fmt::Debug,
    {
        let rolled: Vec<R::ChecksumType> = RollingWindows::<R>::new(content, blocksize).collect();
        let fresh: Vec<R::ChecksumType> = content
            .windows(blocksize)
            .map(|window| R::new(window).checksum())
            .collect();

        assert_eq!(rolled, fresh);
    }

    #[test]
    fn test_windows_match_fresh_checksums_adler64() {
        let content: Vec<u8> = (0..=255).chain((0..=255).rev()).collect();
        assert_windows_match_fresh_checksums::<RollingAdler64>(&content, 1);
        assert_windows_match_fresh_checksums::<RollingAdler64>(&content, 7);
        assert_windows_match_fresh_checksums::<RollingAdler64>(&content, 64);
    }

    #[test]
    fn test_windows_match_fresh_checksums_adler32() {
        let content: Vec<u8> = (0..=255).chain((0..=255).rev()).collect();
        assert_windows_match_fresh_checksums::<RollingAdler32>(&content, 1);
        assert_windows_match_fresh_checksums::<RollingAdler32>(&content, 7);
        assert_windows_match_fresh_checksums::<RollingAdler32>(&content, 64);
    }

    #[test]
    fn test_size_hint_shrinks_while_iterating() {
        let mut windows = RollingWindows::<RollingAdler64>::new(b"abcde", 2);
        assert_eq!(windows.size_hint(), (4, Some(4)));
        windows.next();
        windows.next();
        assert_eq!(windows.size_hint(), (2, Some(2)));
        windows.by_ref().for_each(drop);
        assert_eq!(windows.size_hint(), (0, Some(0)));
        assert_eq!(windows.next(), None);
    }
}
