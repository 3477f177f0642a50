//! Startup validation errors

use thiserror::Error;

/// Parameter combinations the center cannot run with
///
/// All variants are fatal at startup; the steady-state loops have no
/// recoverable failures beyond a full waiting room, which the student
/// retries itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CenterError {
    #[error("cannot run with students and no tutors")]
    NoTutors,

    #[error("cannot run with students and no chairs")]
    NoChairs,
}
