#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    /// The literal introduced by `lead`, if any.
    pub(crate) fn from_lead(lead: u8) -> Option<Self> {
        match lead {
            b'n' => Some(Literal::Null),
            b't' => Some(Literal::True),
            b'f' => Some(Literal::False),
            _ => None,
        }
    }

    pub(crate) fn text(self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::True => "true",
            Literal::False => "false",
        }
    }
}

/// What happened after feeding one more byte into the literal matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Byte matched, but the literal is not finished yet.
    NeedMore,
    /// Byte matched *and* it was the last byte of the literal.
    Done,
    /// Byte did **not** match the expected byte.
    Reject,
}

/// Remaining bytes of the literal being matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExpectedLiteral {
    remaining: &'static [u8],
    literal: Literal,
}

impl ExpectedLiteral {
    pub(crate) fn new(literal: Literal) -> Self {
        Self {
            remaining: literal.text().as_bytes(),
            literal,
        }
    }

    pub(crate) fn literal(&self) -> Literal {
        self.literal
    }

    pub(crate) fn step(&mut self, byte: u8) -> Step {
        match self.remaining.split_first() {
            Some((&expected, rest)) if expected == byte => {
                self.remaining = rest;
                if rest.is_empty() {
                    Step::Done
                } else {
                    Step::NeedMore
                }
            }
            _ => Step::Reject,
        }
    }
}
