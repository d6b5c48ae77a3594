use catalog::LookupError;
use claims::{assert_matches, assert_ok};
use folio::components::common::{Msg, PopupActivityMsg};
use folio::error::ErrorReporter;
use folio::AppError;
use std::sync::mpsc;

#[test]
fn simple_report_becomes_an_error_popup() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);

    reporter.report_simple(
        AppError::Config("bad page size".to_string()),
        "Config",
        "validate",
    );

    let received = assert_ok!(rx.recv());
    assert_matches!(
        received,
        Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Config(_)))
    );
}

#[test]
fn lookup_failure_names_the_missing_id() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);

    reporter.report_lookup_error("open_detail", &LookupError::UnknownBook("b42".to_string()));

    match assert_ok!(rx.recv()) {
        Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Catalog(message))) => {
            assert!(message.contains("b42"));
        }
        other => panic!("Expected catalog error popup, got {other:?}"),
    }
}

#[test]
fn theme_errors_are_warnings() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);

    reporter.report_theme_error("toggle", "lock poisoned");

    assert_matches!(
        assert_ok!(rx.recv()),
        Msg::PopupActivity(PopupActivityMsg::ShowWarning(_))
    );
}

#[test]
fn reporting_after_the_receiver_is_gone_does_not_panic() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);
    drop(rx);

    reporter.report_mount_error("BookList", "mount", "terminal gone");
}
