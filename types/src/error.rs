use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error that survives the trip from a server function to the page.
///
/// `{}` prints only the outermost message, which is safe to show to users.
/// `{:#}` prints the whole cause chain for logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
    /// Causes below `message`, outermost first.
    #[serde(default)]
    pub causes: Vec<String>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;
        if f.alternate() {
            for cause in &self.causes {
                write!(f, ": {cause}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        let mut chain = report.chain().map(ToString::to_string);
        Self {
            message: chain.next().unwrap_or_default(),
            causes: chain.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::WrapErr;

    fn wrapped() -> Error {
        Err::<(), _>(crate::err!("connection refused"))
            .wrap_err("activation request failed")
            .unwrap_err()
            .into()
    }

    #[test]
    fn report_keeps_its_cause_chain() {
        let error = wrapped();

        assert_eq!(error.message, "activation request failed");
        assert_eq!(error.causes, vec!["connection refused".to_owned()]);
    }

    #[test]
    fn plain_display_hides_causes() {
        let error = wrapped();

        assert_eq!(error.to_string(), "activation request failed");
        assert_eq!(
            format!("{error:#}"),
            "activation request failed: connection refused"
        );
    }

    #[test]
    fn display_has_no_location_or_backtrace() {
        let shown = format!("{:#}", wrapped());

        assert!(!shown.contains("Location"), "{shown}");
        assert!(!shown.contains("Caused by"), "{shown}");
    }
}
