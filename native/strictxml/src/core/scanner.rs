//! SIMD-accelerated markup scanning using memchr
//!
//! Only three bytes are structural for the validator: '<', '/' and '>'.
//! Everything between a completed tag and the next marker is content and
//! can be skipped in one memchr3 call:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)

use memchr::memchr3;

pub const TAG_START: u8 = b'<';
pub const TAG_CLOSE: u8 = b'/';
pub const TAG_END: u8 = b'>';

/// Cursor over one chunk of input
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Take the byte at the current position and advance past it
    #[inline]
    pub fn next_byte(&mut self) -> Option<u8> {
        let b = self.input.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }

    /// Jump to the next '<', '/' or '>'.
    /// Returns false (and moves to EOF) when there is none.
    #[inline]
    pub fn skip_to_markup(&mut self) -> bool {
        match memchr3(TAG_START, TAG_CLOSE, TAG_END, &self.input[self.pos..]) {
            Some(i) => {
                self.pos += i;
                true
            }
            None => {
                self.pos = self.input.len();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_to_markup() {
        let mut scanner = Scanner::new(b"hello <world>");
        assert!(scanner.skip_to_markup());
        assert_eq!(scanner.position(), 6);
        assert_eq!(scanner.next_byte(), Some(b'<'));
    }

    #[test]
    fn test_skip_to_markup_finds_slash() {
        let mut scanner = Scanner::new(b"a/b>");
        assert!(scanner.skip_to_markup());
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_skip_without_markup_hits_eof() {
        let mut scanner = Scanner::new(b"plain text");
        assert!(!scanner.skip_to_markup());
        assert!(scanner.is_eof());
        assert_eq!(scanner.next_byte(), None);
    }
}
