use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("inset must be finite and non-negative, got {0}")]
    InvalidInset(f32),
}
