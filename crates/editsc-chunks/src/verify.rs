use crate::error::RoundTripError;

/// Offset of the first differing byte between `a` and `b`, or None if they
/// are identical. A strict prefix differs at the shorter length.
pub fn first_mismatch(a: &[u8], b: &[u8]) -> Option<usize> {
    if let Some(offset) = a.iter().zip(b).position(|(x, y)| x != y) {
        return Some(offset);
    }
    if a.len() != b.len() {
        return Some(a.len().min(b.len()));
    }
    None
}

/// Require `encoded` to be byte-identical to `source`.
pub fn verify_round_trip(source: &[u8], encoded: &[u8]) -> Result<(), RoundTripError> {
    match first_mismatch(source, encoded) {
        Some(offset) => Err(RoundTripError { offset }),
        None => Ok(()),
    }
}

/// Incremental prefix check against a source buffer.
///
/// Call [`check`](Self::check) each time the output grows; only the newly
/// appended bytes are compared, so a full encode is verified in one pass and
/// a divergence is reported at its exact offset.
#[derive(Debug)]
pub struct PrefixVerifier<'a> {
    source: &'a [u8],
    verified: usize,
}

impl<'a> PrefixVerifier<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            verified: 0,
        }
    }

    /// Bytes confirmed equal so far.
    pub fn verified(&self) -> usize {
        self.verified
    }

    /// Require `output` to still be a prefix of the source.
    pub fn check(&mut self, output: &[u8]) -> Result<(), RoundTripError> {
        let start = self.verified.min(output.len());
        let end = output.len().min(self.source.len());
        if let Some(rel) = first_mismatch(&self.source[start..end], &output[start..end]) {
            return Err(RoundTripError { offset: start + rel });
        }
        if output.len() > self.source.len() {
            return Err(RoundTripError {
                offset: self.source.len(),
            });
        }
        self.verified = output.len();
        Ok(())
    }

    /// Require `output` to be the whole source, not just a prefix of it.
    pub fn finish(mut self, output: &[u8]) -> Result<(), RoundTripError> {
        self.check(output)?;
        if output.len() != self.source.len() {
            return Err(RoundTripError {
                offset: output.len(),
            });
        }
        Ok(())
    }
}
