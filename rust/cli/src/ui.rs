//! Consistent error and warning lines on the error stream.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "oops").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: oops\nWARNING: careful\n");
    }
}
