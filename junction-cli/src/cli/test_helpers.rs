//! Fixtures shared by the CLI unit tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::{QueryKind, RunCommand};

/// The twenty-point puzzle input: ten attempts leave components of sizes
/// 5, 4 and 2, and the closing edge joins x = 216 and x = 117.
pub(super) const SAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_points(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_args(path: PathBuf, attempts: usize) -> RunCommand {
    RunCommand {
        path,
        attempts,
        top: 3,
        query: QueryKind::Both,
        name: None,
    }
}

/// Span or event captured by [`SpanCapture`].
#[derive(Clone, Debug, Default)]
pub(super) struct Captured {
    pub name: String,
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct SpanLog {
    spans: Vec<Captured>,
    live: HashMap<Id, usize>,
}

/// Layer that keeps every span's fields, including values recorded after
/// creation, plus every event.
#[derive(Clone, Default)]
pub(super) struct SpanCapture {
    spans: Arc<Mutex<SpanLog>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

impl SpanCapture {
    pub(super) fn span(&self, name: &str) -> Option<Captured> {
        self.spans
            .lock()
            .expect("span lock poisoned")
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    pub(super) fn has_event(&self, message: &str) -> bool {
        self.events
            .lock()
            .expect("event lock poisoned")
            .iter()
            .any(|event| event.fields.get("message").is_some_and(|value| value == message))
    }
}

struct FieldWriter<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldWriter<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for SpanCapture {
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, _ctx: Context<'_, S>) {
        let mut captured = Captured {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldWriter(&mut captured.fields));
        let mut log = self.spans.lock().expect("span lock poisoned");
        let index = log.spans.len();
        log.spans.push(captured);
        log.live.insert(id.clone(), index);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        let mut log = self.spans.lock().expect("span lock poisoned");
        let SpanLog { spans, live } = &mut *log;
        if let Some(span) = live.get(id).and_then(|&index| spans.get_mut(index)) {
            values.record(&mut FieldWriter(&mut span.fields));
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = Captured {
            name: event.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        event.record(&mut FieldWriter(&mut captured.fields));
        self.events
            .lock()
            .expect("event lock poisoned")
            .push(captured);
    }
}
