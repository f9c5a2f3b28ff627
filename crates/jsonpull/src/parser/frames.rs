use core::fmt;

use super::Scanned;

/// The parser entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// [`Parser::parse_value`](crate::Parser::parse_value)
    Value,
    /// [`Parser::parse_dict_entry`](crate::Parser::parse_dict_entry)
    DictEntry,
    /// [`Parser::parse_list_entry`](crate::Parser::parse_list_entry)
    ListEntry,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cursor::Value => "parse_value",
            Cursor::DictEntry => "parse_dict_entry",
            Cursor::ListEntry => "parse_list_entry",
        })
    }
}

/// One open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Frame {
    List {
        /// `[` has been consumed by the first entry call.
        opened: bool,
    },
    Dict {
        /// `{` has been consumed by the first entry call.
        opened: bool,
        /// A key was emitted and its value has not started yet.
        awaiting_value: bool,
    },
}

impl Frame {
    pub(crate) fn is_opened(self) -> bool {
        match self {
            Frame::List { opened } | Frame::Dict { opened, .. } => opened,
        }
    }

    fn mark_opened(&mut self) {
        match self {
            Frame::List { opened } | Frame::Dict { opened, .. } => *opened = true,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct FrameStack {
    stack: Vec<Frame>,
}

impl FrameStack {
    pub(crate) fn new() -> Self {
        Self {
            stack: Vec::with_capacity(16),
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn last(&self) -> Option<Frame> {
        self.stack.last().copied()
    }

    /// The entry point that has to be called next.
    pub(crate) fn expected_cursor(&self) -> Cursor {
        match self.stack.last() {
            None
            | Some(Frame::Dict {
                awaiting_value: true,
                ..
            }) => Cursor::Value,
            Some(Frame::Dict { .. }) => Cursor::DictEntry,
            Some(Frame::List { .. }) => Cursor::ListEntry,
        }
    }

    /// Applies a successfully emitted token to the stack.
    pub(crate) fn record(&mut self, via: Cursor, scanned: Scanned) {
        if via != Cursor::Value {
            if let Some(frame) = self.stack.last_mut() {
                frame.mark_opened();
            }
        }

        match scanned {
            Scanned::ListTail | Scanned::DictTail => {
                self.stack.pop();
            }
            Scanned::DictKey => {
                if let Some(Frame::Dict { awaiting_value, .. }) = self.stack.last_mut() {
                    *awaiting_value = true;
                }
            }
            _ => {
                if let Some(Frame::Dict { awaiting_value, .. }) = self.stack.last_mut() {
                    *awaiting_value = false;
                }
                match scanned {
                    Scanned::ListHead => self.stack.push(Frame::List { opened: false }),
                    Scanned::DictHead => self.stack.push(Frame::Dict {
                        opened: false,
                        awaiting_value: false,
                    }),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dict_member_cycle() {
        let mut frames = FrameStack::new();
        assert_eq!(frames.expected_cursor(), Cursor::Value);

        frames.record(Cursor::Value, Scanned::DictHead);
        assert_eq!(frames.depth(), 1);
        assert_eq!(frames.expected_cursor(), Cursor::DictEntry);
        assert!(!frames.last().unwrap().is_opened());

        frames.record(Cursor::DictEntry, Scanned::DictKey);
        assert!(frames.last().unwrap().is_opened());
        assert_eq!(frames.expected_cursor(), Cursor::Value);

        frames.record(Cursor::Value, Scanned::ListHead);
        assert_eq!(frames.depth(), 2);
        assert_eq!(frames.expected_cursor(), Cursor::ListEntry);

        frames.record(Cursor::ListEntry, Scanned::ListTail);
        assert_eq!(frames.depth(), 1);
        // The list was the dict member's value, so the dict wants its next key.
        assert_eq!(frames.expected_cursor(), Cursor::DictEntry);

        frames.record(Cursor::DictEntry, Scanned::DictTail);
        assert_eq!(frames.depth(), 0);
        assert_eq!(frames.expected_cursor(), Cursor::Value);
    }

    #[test]
    fn list_members_keep_list_cursor() {
        let mut frames = FrameStack::new();
        frames.record(Cursor::Value, Scanned::ListHead);
        frames.record(Cursor::ListEntry, Scanned::Number(1.0));
        assert_eq!(frames.expected_cursor(), Cursor::ListEntry);
        assert!(frames.last().unwrap().is_opened());
        frames.record(Cursor::ListEntry, Scanned::DictHead);
        assert_eq!(frames.expected_cursor(), Cursor::DictEntry);
        assert!(!frames.last().unwrap().is_opened());
    }

    #[test]
    fn cursor_names() {
        assert_eq!(Cursor::Value.to_string(), "parse_value");
        assert_eq!(Cursor::DictEntry.to_string(), "parse_dict_entry");
        assert_eq!(Cursor::ListEntry.to_string(), "parse_list_entry");
    }
}
