//! Error types for the plotting tools.

#![allow(missing_docs)]

/// Creates the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    errors {
        MissingArgument(what: String) {
            description("missing argument")
            display("missing argument: {}", what)
        }
        InvalidArgument(what: String) {
            description("invalid argument")
            display("invalid argument: {}", what)
        }
        MalformedRow(row: usize) {
            description("malformed trace row")
            display("malformed trace row {}", row)
        }
        FrameMismatch(a: u32, b: u32) {
            description("traces disagree on frame numbering")
            display("traces disagree on frame numbering: {} vs {}", a, b)
        }
        EmptyTrace {
            description("trace contains no data rows")
        }
        Render(msg: String) {
            description("chart rendering failed")
            display("chart rendering failed: {}", msg)
        }
    }

    foreign_links {
        Io(::std::io::Error);
        Csv(::csv::Error);
    }
}
