use std::io;
use std::sync::Arc;

use crate::Channel;

/// Trait for synchronized line output.
/// Provides two output channels (normal and error) that share one exclusion
/// lock. Implementors must emit every line as a single uninterleaved unit and
/// return stream failures unchanged.
pub trait ConsoleWriter: Send + Sync {
    /// Writes `"> " + message + "\n"` to the given channel.
    fn write_line(&self, channel: Channel, message: &str) -> io::Result<()>;

    /// Writes one line to normal output.
    fn write_normal(&self, message: &str) -> io::Result<()> {
        self.write_line(Channel::Normal, message)
    }

    /// Writes one line to error output.
    fn write_error(&self, message: &str) -> io::Result<()> {
        self.write_line(Channel::Error, message)
    }
}

impl<T: ConsoleWriter + ?Sized> ConsoleWriter for Arc<T> {
    fn write_line(&self, channel: Channel, message: &str) -> io::Result<()> {
        (**self).write_line(channel, message)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Records every call instead of writing anywhere.
    #[derive(Default)]
    struct RecordingWriter {
        calls: Mutex<Vec<(Channel, String)>>,
    }

    impl ConsoleWriter for RecordingWriter {
        fn write_line(&self, channel: Channel, message: &str) -> io::Result<()> {
            self.calls.lock().unwrap().push((channel, message.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_provided_methods_dispatch_to_channel() {
        let fixture = RecordingWriter::default();

        fixture.write_normal("out").unwrap();
        fixture.write_error("err").unwrap();

        let actual = fixture.calls.lock().unwrap().clone();
        let expected = vec![
            (Channel::Normal, "out".to_string()),
            (Channel::Error, "err".to_string()),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_arc_forwards_to_inner_writer() {
        let fixture = Arc::new(RecordingWriter::default());
        let shared: Arc<dyn ConsoleWriter> = fixture.clone();

        shared.write_error("via arc").unwrap();

        let actual = fixture.calls.lock().unwrap().clone();
        let expected = vec![(Channel::Error, "via arc".to_string())];
        assert_eq!(actual, expected);
    }
}
