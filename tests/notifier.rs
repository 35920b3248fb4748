use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

use chrono::{TimeDelta, Utc};
use outage_console::{
    ConsoleNotifier, Dispatcher, ErrorValue, EventHost, EventKind, FailedCheckPayload, Handler,
    LineSink, MonitorEvent, NotifierConfig, OutagePayload, RegisterError, Service, TimingPayload,
    WriterSink,
};
use serde_json::json;

/// Host that records every binding.
#[derive(Default)]
struct RecordingHost {
    bound: Vec<(EventKind, Handler)>,
}

impl RecordingHost {
    fn handler(&self, kind: EventKind) -> &Handler {
        &self
            .bound
            .iter()
            .find(|(k, _)| *k == kind)
            .expect("kind bound")
            .1
    }
}

impl EventHost for RecordingHost {
    fn on(&mut self, kind: EventKind, handler: Handler) -> Result<(), RegisterError> {
        self.bound.push((kind, handler));
        Ok(())
    }
}

/// Writer that records bytes and counts `write` calls.
#[derive(Default)]
struct Recorded {
    bytes: Vec<u8>,
    writes: usize,
}

impl Write for Recorded {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

type RecordingSink = WriterSink<Recorded>;

fn lines_of(bytes: &[u8]) -> Vec<String> {
    String::from_utf8(bytes.to_vec())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn lines(sink: &RecordingSink) -> Vec<String> {
    lines_of(&sink.lock().bytes)
}

fn writes(sink: &RecordingSink) -> usize {
    sink.lock().writes
}

fn plain_cfg() -> NotifierConfig {
    NotifierConfig {
        color: false,
        ..NotifierConfig::default()
    }
}

fn plain<S: LineSink>(sink: &Arc<S>) -> ConsoleNotifier {
    ConsoleNotifier::with_sink(&plain_cfg(), sink.clone())
}

fn registered() -> (RecordingHost, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let mut host = RecordingHost::default();
    plain(&sink).register(&mut host).unwrap();
    (host, sink)
}

#[test]
fn binds_exactly_one_handler_per_kind() {
    let (host, _) = registered();
    let kinds: Vec<_> = host.bound.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, EventKind::ALL);
}

#[test]
fn registration_fails_on_missing_capability() {
    let sink = Arc::new(RecordingSink::default());
    let mut host = Dispatcher::with_kinds([EventKind::NewOutage, EventKind::CurrentOutage]);
    let err = plain(&sink).register(&mut host).unwrap_err();

    assert_eq!(
        err,
        RegisterError::Unsupported {
            kind: EventKind::ServiceError
        }
    );
    assert_eq!(host.handler_count(EventKind::NewOutage), 1);
}

#[test]
fn new_outage_writes_one_line() {
    let (host, sink) = registered();
    host.handler(EventKind::NewOutage)(&MonitorEvent::NewOutage {
        service: Service::named("checkout"),
        outage: OutagePayload::new(json!({"code": "ETIMEDOUT"}), Utc::now()),
    });

    assert_eq!(writes(&sink), 1);
    let printed = lines(&sink);
    assert_eq!(printed.len(), 1);
    assert!(printed[0].contains("checkout"));
    assert!(printed[0].contains("down!"));
    assert!(printed[0].contains("ETIMEDOUT"));
}

#[test]
fn service_back_reports_minutes() {
    let (host, sink) = registered();
    let started = Utc::now() - TimeDelta::milliseconds(125_000);
    host.handler(EventKind::ServiceBack)(&MonitorEvent::ServiceBack {
        service: Service::named("checkout"),
        last_outage: OutagePayload::new("timeout", started),
    });

    let printed = lines(&sink);
    let line = &printed[0];
    assert!(line.contains("checkout"));
    assert!(line.contains("is back"));
    assert!(line.contains("2 minutes"), "got {line:?}");
    assert!(!line.contains("125000"));
}

#[test]
fn service_ok_and_latency_report_elapsed_time() {
    let (host, sink) = registered();
    host.handler(EventKind::ServiceOk)(&MonitorEvent::ServiceOk {
        service: Service::named("checkout"),
        timing: TimingPayload::new(42.0),
    });
    host.handler(EventKind::LatencyWarning)(&MonitorEvent::LatencyWarning {
        service: Service::named("checkout"),
        timing: TimingPayload::new(1500.0),
    });

    let printed = lines(&sink);
    assert!(printed[0].contains("OK!") && printed[0].contains("42 ms."));
    assert!(printed[1].contains("latency warning") && printed[1].contains("1500 ms."));
}

#[test]
fn empty_inputs_still_print_for_every_kind() {
    let (host, sink) = registered();
    for kind in EventKind::ALL {
        let ev = MonitorEvent::from_json(kind, &json!({}), &json!({"error": null}));
        host.handler(kind)(&ev);
    }

    let printed = lines(&sink);
    assert_eq!(printed.len(), EventKind::ALL.len());
    assert!(printed.iter().all(|l| !l.trim().is_empty()));
}

#[test]
fn concurrent_handlers_do_not_interleave_lines() {
    let sink = Arc::new(WriterSink::new(Vec::<u8>::new()));
    let mut host = RecordingHost::default();
    plain(&sink).register(&mut host).unwrap();
    let outage = Arc::clone(host.handler(EventKind::NewOutage));
    let failed = Arc::clone(host.handler(EventKind::ServiceError));

    let a = thread::spawn(move || {
        for _ in 0..200 {
            outage(&MonitorEvent::NewOutage {
                service: Service::named("alpha"),
                outage: OutagePayload::new("refused", Utc::now()),
            });
        }
    });
    let b = thread::spawn(move || {
        for i in 0..200 {
            failed(&MonitorEvent::ServiceError {
                service: Service::named("bravo"),
                check: FailedCheckPayload::new(ErrorValue::from(json!({"attempt": i})), 1),
            });
        }
    });
    a.join().unwrap();
    b.join().unwrap();

    let printed = lines_of(&sink.lock());
    assert_eq!(printed.len(), 400);
    for line in printed {
        let whole = line == r#"alpha down!. Error: "refused""#
            || (line.starts_with(r#"bravo check failed!. Error: {"attempt":"#)
                && line.ends_with('}'));
        assert!(whole, "interleaved line: {line:?}");
    }
}

#[test]
fn every_dispatched_event_prints() {
    let sink = Arc::new(RecordingSink::default());
    let mut host = Dispatcher::new();
    plain(&sink).register(&mut host).unwrap();

    for name in ["s0", "s1", "s2"] {
        host.dispatch(&MonitorEvent::ServiceOk {
            service: Service::named(name),
            timing: TimingPayload::new(1.0),
        });
    }

    assert_eq!(
        lines(&sink),
        [
            "s0 responded OK! 1 ms.",
            "s1 responded OK! 1 ms.",
            "s2 responded OK! 1 ms.",
        ]
    );
    assert_eq!(writes(&sink), 3);
}

#[test]
fn dispatcher_drives_registered_notifier() {
    let sink = Arc::new(RecordingSink::default());
    let mut host = Dispatcher::new();
    plain(&sink).register(&mut host).unwrap();

    let handled = host.dispatch(&MonitorEvent::from_json(
        "current-outage".parse().unwrap(),
        &json!({"name": "search"}),
        &json!({"error": "503", "timestamp": 0}),
    ));

    assert_eq!(handled, 1);
    assert_eq!(lines(&sink), [r#"search is still down!. Error: "503""#]);
}
