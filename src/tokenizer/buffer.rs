use crate::error::{Result, TokenizerError};

/// Bytes of the token currently being built.
///
/// Holds exactly what was pushed, in order. Growth goes through
/// `try_reserve` so a failed allocation comes back as an error instead of
/// aborting.
#[derive(Debug, Default)]
pub(crate) struct TokenBuffer {
    bytes: Vec<u8>,
    limit: Option<usize>,
}

impl TokenBuffer {
    pub fn new(limit: Option<usize>) -> Self {
        TokenBuffer {
            bytes: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, byte: u8) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.bytes.len() >= limit {
                return Err(TokenizerError::BufferFull { limit });
            }
        }
        self.bytes
            .try_reserve(1)
            .map_err(|_| TokenizerError::Alloc)?;
        self.bytes.push(byte);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut buffer = TokenBuffer::new(None);
        for &b in b"a b\tc" {
            buffer.push(b).unwrap();
        }
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.into_bytes(), b"a b\tc");
    }

    #[test]
    fn test_empty_buffer() {
        assert!(TokenBuffer::new(None).into_bytes().is_empty());
    }

    #[test]
    fn test_limit() {
        let mut buffer = TokenBuffer::new(Some(2));
        buffer.push(b'a').unwrap();
        buffer.push(b'b').unwrap();
        assert!(matches!(
            buffer.push(b'c'),
            Err(TokenizerError::BufferFull { limit: 2 })
        ));
        assert_eq!(buffer.into_bytes(), b"ab");
    }

    #[test]
    fn test_non_utf8_bytes_kept() {
        let mut buffer = TokenBuffer::new(None);
        for &b in &[b'a', 0xff, 0xe9] {
            buffer.push(b).unwrap();
        }
        assert_eq!(buffer.into_bytes(), vec![b'a', 0xff, 0xe9]);
    }
}
