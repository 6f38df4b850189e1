//! Tests for table and chart rendering through the logger.

use conlog::{ChartOptions, Logger};
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logger(tmp: &TempDir) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder()
        .log_dir(tmp.path().to_string_lossy())
        .writer(Box::new(capture.clone()))
        .build()
        .unwrap();
    (logger, capture)
}

#[test]
fn empty_table_is_a_placeholder_line() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, capture) = capture_logger(&tmp);

    logger.table(&[]);

    let text = capture.text();
    assert!(text.contains("[TABLE] (empty table)"));
    assert!(!text.contains('┌'));
}

#[test]
fn table_pads_columns_to_widest_cell() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, capture) = capture_logger(&tmp);

    logger.table(&[json!({"a": 1, "bb": 22}), json!({"a": 333, "bb": 4})]);

    let text = capture.text();
    assert!(text.contains("│ a   │ bb │"));
    assert!(text.contains("│ 333 │ 4  │"));
    assert!(text.contains("┌─────┬────┐"));
    assert!(text.contains("└─────┴────┘"));
}

#[test]
fn table_of_primitives_lists_by_index() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, capture) = capture_logger(&tmp);

    logger.table(&[json!("x"), json!("y")]);

    let text = capture.text();
    assert!(text.contains("0: x"));
    assert!(text.contains("1: y"));
}

#[test]
fn empty_line_chart_is_a_placeholder() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, capture) = capture_logger(&tmp);

    logger.line_chart(&[], None);

    assert!(capture.text().contains("(empty chart)"));
}

#[test]
fn line_chart_draws_one_row_per_value() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, capture) = capture_logger(&tmp);

    logger.line_chart(&[2.0, 5.0], Some("#ff00aa"));

    let text = capture.text();
    assert!(text.contains("0: \x1b[38;2;255;0;170m██\x1b[0m (2)"));
    assert!(text.contains("1: \x1b[38;2;255;0;170m█████\x1b[0m (5)"));
}

#[test]
fn empty_vertical_chart_is_a_placeholder() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, capture) = capture_logger(&tmp);

    logger.vertical_chart(&[], &ChartOptions::new());

    assert!(capture.text().contains("(no data for vertical chart)"));
}

#[test]
fn vertical_chart_draws_axis_and_labels() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, capture) = capture_logger(&tmp);

    logger.vertical_chart(
        &[1.0, 3.0, 2.0],
        &ChartOptions::new().height(3).y_ticks(1).labels(["a", "b", "c"]),
    );

    let text = capture.text();
    assert!(text.contains("└ ┬ ┬ "));
    assert!(text.contains("a  b  c  "));
}

#[test]
fn chart_body_is_group_indented() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, capture) = capture_logger(&tmp);

    logger.group(&[json!("g")]);
    logger.line_chart(&[1.0], None);

    let text = capture.text();
    let bar_row = text.lines().find(|l| l.contains("0: ")).unwrap();
    assert!(bar_row.starts_with("  "));
}
