mod config;
mod error;
mod outcome;
mod token;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use outcome::{ConfirmOutcome, ConfirmState};
pub use token::ActivationToken;

#[doc(hidden)]
pub use eyre::eyre as internal_eyre_dont_use;

/// Build an ad-hoc error with a format string, like `eyre!`.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::internal_eyre_dont_use!($($arg)*)
    };
}
