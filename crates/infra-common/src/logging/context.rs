use std::fmt;
use tracing::{Level, Span};

/// Context information for logging
#[derive(Debug, Clone)]
pub struct LogContext {
    /// Component that is generating the log
    pub component: String,
    /// Operation or action being performed
    pub operation: Option<String>,
    /// Additional contextual fields, kept in insertion order
    pub fields: Vec<(String, String)>,
}

impl LogContext {
    /// Create a new log context with just the component name
    pub fn new<S: Into<String>>(component: S) -> Self {
        LogContext {
            component: component.into(),
            operation: None,
            fields: Vec::new(),
        }
    }

    /// Create a new log context with component and operation
    pub fn with_operation<S: Into<String>, T: Into<String>>(component: S, operation: T) -> Self {
        LogContext {
            component: component.into(),
            operation: Some(operation.into()),
            fields: Vec::new(),
        }
    }

    /// Add a field to the context
    pub fn with_field<S: Into<String>, T: Into<String>>(mut self, key: S, value: T) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Create a span carrying this context.
    ///
    /// The extra fields are flattened into a single `fields` value since span
    /// field names must be known at compile time.
    pub fn span(&self, level: Level) -> Span {
        let op = self.operation.as_deref().unwrap_or("-");
        let fields = self.fields_string();
        match level {
            Level::TRACE => tracing::trace_span!("voipd", component = %self.component, operation = %op, fields = %fields),
            Level::DEBUG => tracing::debug_span!("voipd", component = %self.component, operation = %op, fields = %fields),
            Level::INFO => tracing::info_span!("voipd", component = %self.component, operation = %op, fields = %fields),
            Level::WARN => tracing::warn_span!("voipd", component = %self.component, operation = %op, fields = %fields),
            Level::ERROR => tracing::error_span!("voipd", component = %self.component, operation = %op, fields = %fields),
        }
    }

    fn fields_string(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.component)?;

        if let Some(op) = &self.operation {
            write!(f, "[{}]", op)?;
        }

        for (key, value) in &self.fields {
            write!(f, "[{}={}]", key, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_field_order() {
        let ctx = LogContext::with_operation("daemon", "session")
            .with_field("peer", "127.0.0.1:4000")
            .with_field("mode", "tcp");
        assert_eq!(ctx.to_string(), "[daemon][session][peer=127.0.0.1:4000][mode=tcp]");
    }

    #[test]
    fn test_display_without_operation() {
        assert_eq!(LogContext::new("store").to_string(), "[store]");
    }
}
