//! Confirmation flow and the shared UI pieces around it.

mod confirm;
pub use confirm::{FAILURE_MESSAGE, MISSING_TOKEN_MESSAGE, Navigate, Notify, confirm};

mod notice;
pub use notice::{NoticeBanner, Notices, use_notices};
