pub type SightlineResult<T> = Result<T, SightlineError>;

#[derive(thiserror::Error, Debug)]
pub enum SightlineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("engine error: {0}")]
    Engine(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SightlineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            SightlineError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            SightlineError::animation("x")
                .to_string()
                .contains("animation error:")
        );
        assert!(
            SightlineError::engine("x")
                .to_string()
                .contains("engine error:")
        );
        assert!(
            SightlineError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = SightlineError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
