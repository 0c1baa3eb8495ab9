//! Output sink abstraction
//!
//! The engine writes expanded text through this trait rather than into a
//! concrete buffer, so the same walk serves two purposes: streaming into
//! the final result accumulator, and capturing a sub-expansion into an
//! owned buffer when the result is needed as a value (notably the AFTER
//! argument of `\expandafter`). `String` implements the trait and plays
//! both roles.

/// Append-characters contract shared by every output destination.
pub trait Sink {
    fn write_char(&mut self, c: char);

    fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
        }
    }
}

impl Sink for String {
    fn write_char(&mut self, c: char) {
        self.push(c);
    }

    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal implementor that only provides `write_char`, exercising the
    /// provided `write_str`.
    struct CharSink(Vec<char>);

    impl Sink for CharSink {
        fn write_char(&mut self, c: char) {
            self.0.push(c);
        }
    }

    #[test]
    fn test_string_sink_accumulates() {
        let mut out = String::new();
        out.write_char('a');
        out.write_str("bc");
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_default_write_str_goes_char_by_char() {
        let mut sink = CharSink(Vec::new());
        sink.write_str("hé!");
        assert_eq!(sink.0, vec!['h', 'é', '!']);
    }
}
