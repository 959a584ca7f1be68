//! Run a callable and capture its failure as a value.
//!
//! A failure never escapes these helpers: panics and returned errors both
//! come back as [`AttemptError`], so callers branch on the `Result` instead
//! of unwinding.

use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttemptError {
    /// The callable panicked.
    #[error("attempted call panicked: {message}")]
    Panicked { message: String },
    /// The callable returned an error.
    #[error(transparent)]
    Failed(Box<dyn Error + Send + Sync>),
}

impl AttemptError {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        AttemptError::Panicked { message }
    }

    /// The captured error when the callable returned one.
    pub fn failure(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            AttemptError::Failed(err) => Some(err.as_ref()),
            AttemptError::Panicked { .. } => None,
        }
    }
}

/// Calls `f`, turning a panic into `Err(AttemptError::Panicked)`.
///
/// The panic hook still runs before the panic is captured, so the default
/// hook prints the message to stderr. Install a quiet hook with
/// [`std::panic::set_hook`] if that output is unwanted.
///
/// # Examples
///
/// ```
/// use lightdash::fn_attempt;
///
/// std::panic::set_hook(Box::new(|_| {}));
/// assert!(fn_attempt(|| -> u8 { panic!("quiet") }).is_err());
/// let _ = std::panic::take_hook();
/// ```
///
/// ```
/// use lightdash::{fn_attempt, AttemptError};
///
/// assert_eq!(fn_attempt(|| 2 + 1).unwrap(), 3);
///
/// let failed = fn_attempt(|| -> i32 { panic!("boom") });
/// assert!(matches!(failed, Err(AttemptError::Panicked { message }) if message == "boom"));
/// ```
pub fn fn_attempt<T, F>(f: F) -> Result<T, AttemptError>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let err = AttemptError::from_panic(payload);
        tracing::debug!(error = %err, "captured panic from attempted call");
        err
    })
}

/// Calls `f(args)`, turning a panic into `Err(AttemptError::Panicked)`.
///
/// Several arguments are passed as a tuple.
///
/// # Examples
///
/// ```
/// use lightdash::fn_attempt_with;
///
/// let add = |(a, b): (i32, i32)| a + b;
/// assert_eq!(fn_attempt_with(add, (2, 1)).unwrap(), 3);
/// ```
pub fn fn_attempt_with<A, T, F>(f: F, args: A) -> Result<T, AttemptError>
where
    F: FnOnce(A) -> T,
{
    fn_attempt(move || f(args))
}

/// Calls a fallible `f`, capturing both a returned error and a panic.
///
/// # Examples
///
/// ```
/// use lightdash::fn_attempt_try;
///
/// let parsed = fn_attempt_try(|| "12".parse::<u8>());
/// assert_eq!(parsed.unwrap(), 12);
///
/// let failed = fn_attempt_try(|| "300".parse::<u8>());
/// assert!(failed.unwrap_err().failure().is_some());
/// ```
pub fn fn_attempt_try<T, E, F>(f: F) -> Result<T, AttemptError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn_attempt(f)?.map_err(|err| {
        let err = AttemptError::Failed(err.into());
        tracing::debug!(error = %err, "captured error from attempted call");
        err
    })
}
