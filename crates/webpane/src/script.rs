//! Line-oriented event script parsing.
//!
//! The harness binary stands in for the remote display session by reading
//! events from a script, one per line:
//!
//! ```text
//! click <x> <y> <left|right|middle> <press|release> [clicks]
//! move <x> <y>
//! scroll <x> <y> <dx> <dy>
//! text <payload>
//! key <press|release> <scancode> [modifier-mask]
//! quit
//! ```
//!
//! Blank lines and `#` comments are skipped. Lines that do not parse are
//! warn-logged and skipped — malformed input never stops the session. End
//! of input behaves like a quit event.

use std::io::BufRead;

use tracing::{debug, warn};
use webpane_dispatch::MouseButton;
use webpane_engine::{ButtonState, EventSource, KeyState, RawInputEvent};

/// Event source that reads the script format from any buffered reader.
pub struct ScriptSource<R> {
    /// The underlying script stream.
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    /// Read events from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> EventSource for ScriptSource<R> {
    fn wait_next(&mut self) -> RawInputEvent {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    debug!("script_ended");
                    return RawInputEvent::Quit;
                }
                Ok(_) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    match parse_line(trimmed) {
                        Some(event) => return event,
                        None => warn!(line = trimmed, "unparseable_event_line"),
                    }
                }
                Err(e) => {
                    warn!(error = %e, "script_read_failed");
                    return RawInputEvent::Quit;
                }
            }
        }
    }
}

/// Parse one trimmed, non-empty script line.
fn parse_line(line: &str) -> Option<RawInputEvent> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    let event = match verb {
        "move" => RawInputEvent::MouseMove {
            x: int(words.next())?,
            y: int(words.next())?,
        },
        "click" => {
            let x = int(words.next())?;
            let y = int(words.next())?;
            let button = match words.next()? {
                "left" => MouseButton::Left,
                "right" => MouseButton::Right,
                "middle" => MouseButton::Middle,
                _ => return None,
            };
            let state = match words.next()? {
                "press" => ButtonState::Pressed,
                "release" => ButtonState::Released,
                _ => return None,
            };
            let clicks = match words.next() {
                Some(w) => w.parse().ok()?,
                None => 1,
            };
            RawInputEvent::MouseButton {
                x,
                y,
                button,
                state,
                clicks,
            }
        }
        "scroll" => RawInputEvent::MouseScroll {
            x: int(words.next())?,
            y: int(words.next())?,
            scroll_x: int(words.next())?,
            scroll_y: int(words.next())?,
        },
        "text" => {
            // The payload is the rest of the line, spaces included.
            let rest = line["text".len()..].trim_start();
            RawInputEvent::Text {
                bytes: if rest.is_empty() {
                    None
                } else {
                    Some(rest.as_bytes().to_vec())
                },
            }
        }
        "key" => {
            let state = match words.next()? {
                "press" => KeyState::Pressed,
                "release" => KeyState::Released,
                _ => return None,
            };
            let scancode = int(words.next())?;
            let modifiers = match words.next() {
                Some(w) => w.parse().ok()?,
                None => 0,
            };
            RawInputEvent::Key {
                scancode,
                state,
                modifiers,
            }
        }
        "quit" => RawInputEvent::Quit,
        _ => return None,
    };
    Some(event)
}

/// Parse the next word as an integer.
fn int(word: Option<&str>) -> Option<i32> {
    word?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn source(script: &str) -> ScriptSource<Cursor<Vec<u8>>> {
        ScriptSource::new(Cursor::new(script.as_bytes().to_vec()))
    }

    #[test]
    fn parses_each_line_form() {
        let mut s = source(
            "click 10 20 left press 2\n\
             move 30 40\n\
             scroll 1 2 0 -1\n\
             text hello there\n\
             key press 40 1\n\
             quit\n",
        );

        assert!(matches!(
            s.wait_next(),
            RawInputEvent::MouseButton {
                x: 10,
                y: 20,
                button: MouseButton::Left,
                state: ButtonState::Pressed,
                clicks: 2,
            }
        ));
        assert!(matches!(
            s.wait_next(),
            RawInputEvent::MouseMove { x: 30, y: 40 }
        ));
        assert!(matches!(
            s.wait_next(),
            RawInputEvent::MouseScroll {
                x: 1,
                y: 2,
                scroll_x: 0,
                scroll_y: -1,
            }
        ));
        match s.wait_next() {
            RawInputEvent::Text { bytes } => {
                assert_eq!(bytes.as_deref(), Some(b"hello there".as_slice()));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(matches!(
            s.wait_next(),
            RawInputEvent::Key {
                scancode: 40,
                state: KeyState::Pressed,
                modifiers: 1,
            }
        ));
        assert!(matches!(s.wait_next(), RawInputEvent::Quit));
    }

    #[test]
    fn click_and_key_defaults() {
        let mut s = source("click 0 0 right release\nkey release 225\n");
        assert!(matches!(
            s.wait_next(),
            RawInputEvent::MouseButton {
                button: MouseButton::Right,
                state: ButtonState::Released,
                clicks: 1,
                ..
            }
        ));
        assert!(matches!(
            s.wait_next(),
            RawInputEvent::Key {
                scancode: 225,
                state: KeyState::Released,
                modifiers: 0,
            }
        ));
    }

    #[test]
    fn bare_text_is_a_null_payload() {
        let mut s = source("text\n");
        match s.wait_next() {
            RawInputEvent::Text { bytes } => assert!(bytes.is_none()),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn junk_comments_and_blanks_are_skipped() {
        let mut s = source(
            "# a comment\n\
             \n\
             launch the missiles\n\
             click 1 2 sideways press\n\
             move one two\n\
             move 3 4\n",
        );
        assert!(matches!(
            s.wait_next(),
            RawInputEvent::MouseMove { x: 3, y: 4 }
        ));
    }

    #[test]
    fn end_of_script_quits() {
        let mut s = source("");
        assert!(matches!(s.wait_next(), RawInputEvent::Quit));
        // And keeps quitting if polled again.
        assert!(matches!(s.wait_next(), RawInputEvent::Quit));
    }
}
