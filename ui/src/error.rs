use crate::components::common::{Msg, PopupActivityMsg};
use catalog::{CatalogError, LookupError};
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the Folio terminal interface.
///
/// Every variant carries a display string because errors travel through
/// `Msg` values, which must stay `Clone + PartialEq`.
///
/// # Error Categories
///
/// - [`Catalog`] - dataset loading failures and unresolved registry ids
/// - [`Component`] - UI component lifecycle and rendering errors
/// - [`Config`] - configuration loading and validation errors
/// - [`Theme`] - theme initialization and switching errors
///
/// [`Catalog`]: AppError::Catalog
/// [`Component`]: AppError::Component
/// [`Config`]: AppError::Config
/// [`Theme`]: AppError::Theme
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Dataset or lookup failure.
    ///
    /// Lookup failures are recoverable: the caller shows this error in a popup
    /// and keeps the current view.
    Catalog(String),

    /// UI component lifecycle and rendering errors.
    ///
    /// Raised when tuirealm refuses to mount, activate or update a component.
    /// These are logged and shown but never terminate the application.
    Component(String),

    /// Configuration loading and validation errors.
    ///
    /// These are reported before the terminal is taken over, so they can be
    /// printed to stderr.
    Config(String),

    /// Theme initialization or switching errors.
    Theme(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Catalog(msg) => write!(f, "Catalog Error: {msg}"),
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<tuirealm::ApplicationError> for AppError {
    fn from(err: tuirealm::ApplicationError) -> Self {
        AppError::Component(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Error severity levels for appropriate UI response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Show warning popup and log
    Warning,
    /// Show error popup and log
    Error,
}

/// Context information for errors
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    /// Create new error context with component and operation.
    /// The user message is generic until [`ErrorContext::with_message`] replaces it.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("An error occurred in {component}. Please try again."),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Central error reporting system.
///
/// Logs with full context and forwards a popup message to the model through
/// the main channel, so handlers never have to mount popups themselves.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    /// Report a simple error with basic context
    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    /// Report a warning (shows warning popup)
    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation).with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let details = Self::format_additional_context(&context);
        match context.severity {
            ErrorSeverity::Warning => log::warn!(
                "[{}:{}] {} ({}){}",
                context.component,
                context.operation,
                context.user_message,
                error,
                details
            ),
            ErrorSeverity::Error => log::error!(
                "[{}:{}] {} ({}){}",
                context.component,
                context.operation,
                context.user_message,
                error,
                details
            ),
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => {
                Msg::PopupActivity(PopupActivityMsg::ShowWarning(Self::format_user_message(&context)))
            }
            ErrorSeverity::Error => Msg::PopupActivity(
                PopupActivityMsg::ShowError(Self::create_formatted_error(&error, &context)),
            ),
        };
        if let Err(e) = self.tx.send(popup_msg) {
            log::error!("Failed to send popup message: {e}");
        }
    }

    /// Report a registry lookup that could not be resolved
    pub fn report_lookup_error(&self, operation: &str, error: &LookupError) {
        let context = ErrorContext::new("Catalog", operation)
            .with_message(&format!("Could not find '{}' in the catalog", error.id()))
            .with_technical_details(&error.to_string())
            .with_suggestion("The dataset may have dangling ids; check the catalog file");
        self.report(AppError::from(error.clone()), context);
    }

    /// Report component mounting/unmounting errors
    pub fn report_mount_error(&self, component: &str, operation: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    /// Report theme-related errors (non-critical, use warning)
    pub fn report_theme_error(&self, operation: &str, error: impl Display) {
        let app_error = AppError::Theme(format!("Theme {operation} failed: {error}"));
        self.report_warning(app_error, "ThemeManager", operation);
    }

    fn format_additional_context(context: &ErrorContext) -> String {
        let mut parts = Vec::new();
        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }
        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    fn format_user_message(context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();
        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }
        message
    }

    fn create_formatted_error(error: &AppError, context: &ErrorContext) -> AppError {
        let mut formatted_message = format!("{}\n\n{}", Self::error_title(error), context.user_message);
        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n\nDetails: {technical}"));
        }
        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        match error {
            AppError::Catalog(_) => AppError::Catalog(formatted_message),
            AppError::Component(_) => AppError::Component(formatted_message),
            AppError::Config(_) => AppError::Config(formatted_message),
            AppError::Theme(_) => AppError::Theme(formatted_message),
        }
    }

    fn error_title(error: &AppError) -> &'static str {
        match error {
            AppError::Catalog(_) => "Catalog Error",
            AppError::Component(_) => "Component Error",
            AppError::Config(_) => "Configuration Error",
            AppError::Theme(_) => "Theme Error",
        }
    }
}

/// Last-resort handler for errors that could not be shown in a popup.
pub fn handle_error(error: AppError) {
    log::error!("Unhandled error: {error}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_error_context_creation() {
        let context = ErrorContext::new("BookList", "select");
        assert_eq!(context.component, "BookList");
        assert_eq!(context.operation, "select");
        assert_eq!(
            context.user_message,
            "An error occurred in BookList. Please try again."
        );
        assert_eq!(context.severity, ErrorSeverity::Error);
    }

    #[test]
    fn test_warning_severity_reporting() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_warning(
            AppError::Component("Warning message".to_string()),
            "TestComponent",
            "test_operation",
        );

        let msg = rx.recv().expect("Should receive warning message");
        assert!(matches!(
            msg,
            Msg::PopupActivity(PopupActivityMsg::ShowWarning(_))
        ));
    }

    #[test]
    fn test_lookup_error_keeps_catalog_category() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_lookup_error("preview_detail", &LookupError::UnknownBook("b9".into()));

        match rx.recv().expect("Should receive error message") {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Catalog(text))) => {
                assert!(text.starts_with("Catalog Error"));
                assert!(text.contains("'b9'"));
                assert!(text.contains("Suggestion: The dataset may have dangling ids"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_builder_pattern() {
        let context = ErrorContext::new("TestComponent", "test_operation")
            .with_message("Custom message")
            .with_technical_details("Technical information")
            .with_suggestion("Try this solution")
            .with_severity(ErrorSeverity::Warning);

        assert_eq!(context.user_message, "Custom message");
        assert_eq!(
            context.technical_details,
            Some("Technical information".to_string())
        );
        assert_eq!(context.suggestion, Some("Try this solution".to_string()));
        assert_eq!(context.severity, ErrorSeverity::Warning);
    }

    #[test]
    fn test_dropped_receiver_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        ErrorReporter::new(tx).report_simple(AppError::Component("gone".into()), "BookList", "mount");
    }
}
