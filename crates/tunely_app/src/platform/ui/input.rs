use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use tunely_logging::tunely_warn;

use super::constants::QUIT_COMMAND;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A full line typed into the query box.
    Line(String),
    Quit,
}

/// Reads stdin on a background thread. The channel closes on EOF.
pub fn spawn_stdin_reader() -> mpsc::Receiver<InputEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        read_events(stdin.lock(), &tx);
    });
    rx
}

/// Forwards one event per line until EOF, an IO error, or a closed receiver.
///
/// Invalid UTF-8 is replaced rather than rejected; the query has no format rules.
fn read_events(mut reader: impl BufRead, tx: &mpsc::Sender<InputEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tunely_warn!("stdin read failed: {}", err);
                break;
            }
        }
        if tx.send(parse_line(decode_line(&buf))).is_err() {
            break;
        }
    }
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

pub fn parse_line(line: String) -> InputEvent {
    if line.trim() == QUIT_COMMAND {
        InputEvent::Quit
    } else {
        InputEvent::Line(line)
    }
}
