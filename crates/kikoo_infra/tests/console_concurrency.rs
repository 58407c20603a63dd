use std::sync::Arc;
use std::thread;

use kikoo_domain::{Channel, ConsoleWriter};
use kikoo_infra::StdConsoleWriter;
use kikoo_test_kit::{OverlapProbe, SharedBuffer, TrickleWriter};
use pretty_assertions::assert_eq;

const THREAD_COUNT: usize = 42;

fn trickle_printer() -> (
    StdConsoleWriter<TrickleWriter, TrickleWriter>,
    SharedBuffer,
    SharedBuffer,
    OverlapProbe,
) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let probe = OverlapProbe::new();
    let printer = StdConsoleWriter::with_writers(
        TrickleWriter::new(out.clone(), probe.clone()),
        TrickleWriter::new(err.clone(), probe.clone()),
    );
    (printer, out, err, probe)
}

#[test]
fn test_forty_two_threads_print_forty_two_whole_lines() {
    let (printer, out, _err, _probe) = trickle_printer();

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|_| {
            let printer = printer.clone();
            thread::spawn(move || printer.write_normal("OK").unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let actual = out.contents();
    let expected = "> OK\n".repeat(THREAD_COUNT);
    assert_eq!(actual, expected);
}

#[test]
fn test_distinct_messages_are_never_torn() {
    let (printer, out, _err, _probe) = trickle_printer();

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|i| {
            let printer = printer.clone();
            thread::spawn(move || printer.write_normal(&format!("thread-{i:02}")).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut actual = out.lines();
    actual.sort();
    let expected: Vec<String> = (0..THREAD_COUNT).map(|i| format!("> thread-{i:02}")).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_normal_and_error_channels_exclude_each_other() {
    let (printer, out, err, probe) = trickle_printer();
    let printer = Arc::new(printer);

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|i| {
            let printer = printer.clone();
            let channel = if i % 2 == 0 { Channel::Normal } else { Channel::Error };
            thread::spawn(move || printer.write_line(channel, "mixed").unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(!probe.overlapped(), "writes to the two channels overlapped");
    assert_eq!(out.contents(), "> mixed\n".repeat(THREAD_COUNT / 2));
    assert_eq!(err.contents(), "> mixed\n".repeat(THREAD_COUNT / 2));
}

#[test]
fn test_every_line_has_prefix_and_single_terminator() {
    let (printer, out, _err, _probe) = trickle_printer();
    let fixture = ["", "plain", "  padded  ", "ünïcödé"];

    for message in fixture {
        printer.write_normal(message).unwrap();
    }

    let actual = out.contents();
    let expected = "> \n> plain\n>   padded  \n> ünïcödé\n";
    assert_eq!(actual, expected);
}
