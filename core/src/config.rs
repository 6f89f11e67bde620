use thiserror::Error;

/// How strictly host elements must match the buffer's element type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coercion {
    /// Integers fill integer buffers, floats fill float buffers, nothing else.
    #[default]
    Strict,
    /// Float buffers also accept integers. Floats are never narrowed.
    WidenIntegers,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("max_len must be non-zero")]
    ZeroMaxLen,
}

/// Options applied to every list-to-buffer conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    max_len: Option<usize>,
    coercion: Coercion,
}

impl ConvertOptions {
    pub fn builder() -> ConvertOptionsBuilder {
        ConvertOptionsBuilder::default()
    }

    /// Largest declared list length accepted, `None` for no limit.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    pub fn coercion(&self) -> Coercion {
        self.coercion
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConvertOptionsBuilder {
    max_len: Option<usize>,
    coercion: Option<Coercion>,
}

impl ConvertOptionsBuilder {
    #[inline]
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    #[inline]
    pub fn coercion(mut self, coercion: Coercion) -> Self {
        self.coercion = Some(coercion);
        self
    }

    pub fn build(self) -> Result<ConvertOptions, BuildError> {
        if self.max_len == Some(0) {
            return Err(BuildError::ZeroMaxLen);
        }

        Ok(ConvertOptions {
            max_len: self.max_len,
            coercion: self.coercion.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let opts: ConvertOptions = ConvertOptions::builder().build().unwrap();
        assert_eq!(opts, ConvertOptions::default());
        assert_eq!(opts.max_len(), None);
        assert_eq!(opts.coercion(), Coercion::Strict);
    }

    #[test]
    fn builder_sets_fields() {
        let opts: ConvertOptions = ConvertOptions::builder()
            .max_len(16)
            .coercion(Coercion::WidenIntegers)
            .build()
            .unwrap();
        assert_eq!(opts.max_len(), Some(16));
        assert_eq!(opts.coercion(), Coercion::WidenIntegers);
    }

    #[test]
    fn builder_rejects_zero_max_len() {
        assert_eq!(
            ConvertOptions::builder().max_len(0).build(),
            Err(BuildError::ZeroMaxLen)
        );
    }
}
