//! Response framing
//!
//! ```text
//! Status: Ok|Error
//! Reason: <reason>        (only when set)
//!
//! <body>                  (only when non-empty)
//! ```

use std::fmt;

/// Outcome of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "Ok"),
            Status::Error => write!(f, "Error"),
        }
    }
}

/// A framed answer to one request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub reason: Option<String>,
    pub body: String,
}

impl Response {
    /// Successful response with no body
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            reason: None,
            body: String::new(),
        }
    }

    /// Successful response carrying a body
    pub fn ok_with_body(body: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            reason: None,
            body: body.into(),
        }
    }

    /// Failed response with a reason
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            reason: Some(reason.into()),
            body: String::new(),
        }
    }

    /// Body of a configuration read or write: `Value: <value>` or
    /// `Value: <unset>`
    pub fn config_value(value: Option<&str>) -> Self {
        Self::ok_with_body(format!("Value: {}", value.unwrap_or("<unset>")))
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Render the response as it is written on the wire
    pub fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        if let Some(reason) = self.reason.as_deref().filter(|r| !r.is_empty()) {
            writeln!(f, "Reason: {}", reason)?;
        }
        if !self.body.is_empty() {
            write!(f, "\n{}\n", self.body)?;
        }
        Ok(())
    }
}
