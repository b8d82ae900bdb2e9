use gastech_core::{Diagnostics, ErrorHandler, LookupError, RecordingSink, Severity};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Debug)]
struct GaugeFault(&'static str);

impl Display for GaugeFault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GaugeFault {}

fn handler() -> (ErrorHandler, Arc<RecordingSink>) {
    let (diagnostics, sink) = Diagnostics::recording(Severity::Debug);
    (ErrorHandler::new(diagnostics), sink)
}

#[test]
fn handle_error_with_notification_logs_error_and_one_warning() {
    let (handler, sink) = handler();

    handler.handle_error(&GaugeFault("pressure out of range"), "ctx", true);

    let errors = sink.entries_at(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Error in ctx");
    assert_eq!(errors[0].detail.as_deref(), Some("pressure out of range"));

    let warnings = sink.entries_at(Severity::Warn);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "User notification:");
    assert_eq!(warnings[0].detail.as_deref(), Some("pressure out of range"));
}

#[test]
fn handle_error_without_notification_logs_only_the_error() {
    let (handler, sink) = handler();

    handler.handle_error(&GaugeFault("leak"), "ctx", false);

    assert_eq!(sink.count_at(Severity::Error), 1);
    assert_eq!(sink.count_at(Severity::Warn), 0);
}

#[test]
fn threshold_suppresses_lower_severities() {
    let (diagnostics, sink) = Diagnostics::recording(Severity::Warn);
    diagnostics.debug("hidden");
    diagnostics.info("hidden");
    diagnostics.warn("shown");
    diagnostics.error("shown");

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|entry| entry.message == "shown"));
}

#[test]
fn run_turns_failures_and_panics_into_none() {
    let (handler, sink) = handler();

    let ok: Option<u32> = handler.run("gauge.read", || Ok::<_, GaugeFault>(7));
    assert_eq!(ok, Some(7));

    let failed: Option<u32> = handler.run("gauge.read", || Err(GaugeFault("stuck needle")));
    assert_eq!(failed, None);

    let panicked: Option<u32> =
        handler.run("gauge.read", || -> Result<u32, GaugeFault> { panic!("cracked glass") });
    assert_eq!(panicked, None);

    let errors = sink.entries_at(Severity::Error);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|entry| entry.message == "Error in gauge.read"));
    assert_eq!(
        errors[1].detail.as_deref(),
        Some("operation panicked: cracked glass")
    );
}

#[test]
fn wrapped_function_keeps_its_argument() {
    let (handler, sink) = handler();
    let mut halve = handler.wrap("halve", |value: u32| {
        if value % 2 == 0 {
            Ok(value / 2)
        } else {
            Err(GaugeFault("odd reading"))
        }
    });

    assert_eq!(halve(10), Some(5));
    assert_eq!(halve(3), None);
    assert_eq!(sink.count_at(Severity::Error), 1);
}

#[test]
fn async_wrappers_resolve_once_and_report_failures() {
    let (handler, sink) = handler();

    let value = tokio_test::block_on(
        handler.run_async("fetch", async { Ok::<_, GaugeFault>("ready") }),
    );
    assert_eq!(value, Some("ready"));

    let mut lookup = handler.wrap_async("lookup", |id: &'static str| async move {
        if id == "natgas" {
            Ok(id.len())
        } else {
            Err(LookupError::NotFound(id.to_string()))
        }
    });
    assert_eq!(tokio_test::block_on(lookup("natgas")), Some(6));
    assert_eq!(tokio_test::block_on(lookup("argon")), None);

    let errors = sink.entries_at(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Error in lookup");
    assert_eq!(
        errors[0].detail.as_deref(),
        Some("Concept with id 'argon' not found")
    );
}

async fn vent_regulator() -> Result<u32, GaugeFault> {
    panic!("regulator vented")
}

#[test]
fn async_wrappers_contain_panics_like_run() {
    let (handler, sink) = handler();

    let value = tokio_test::block_on(handler.run_async("fetch", vent_regulator()));
    assert_eq!(value, None);

    let mut read = handler.wrap_async("read", |tick: u32| async move {
        if tick > 2 {
            panic!("gauge overran");
        }
        Ok::<_, GaugeFault>(tick)
    });
    assert_eq!(tokio_test::block_on(read(1)), Some(1));
    assert_eq!(tokio_test::block_on(read(3)), None);

    let errors = sink.entries_at(Severity::Error);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "Error in fetch");
    assert_eq!(
        errors[0].detail.as_deref(),
        Some("operation panicked: regulator vented")
    );
    assert_eq!(errors[1].message, "Error in read");
    assert_eq!(
        errors[1].detail.as_deref(),
        Some("operation panicked: gauge overran")
    );
}
