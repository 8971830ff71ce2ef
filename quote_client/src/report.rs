//! Writing the quote report file.
use std::fs;
use std::path::Path;

use quote_common::Quote;

use crate::result::Result;

/// Text preceding the bid in the report.
pub const REPORT_PREFIX: &str = "Dólar: ";

/// Render the single report line, e.g. `Dólar: 5.43`.
pub fn format_report(quote: &Quote) -> String {
    format!("{}{}", REPORT_PREFIX, quote.bid)
}

/// Overwrite `path` with the report for `quote`.
pub fn write_report(path: &Path, quote: &Quote) -> Result<()> {
    fs::write(path, format_report(quote))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use tempfile::TempDir;

    #[test]
    fn writes_exact_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cotacao.txt");

        write_report(&path, &Quote::new("5.43").unwrap()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.43");
    }

    #[test]
    fn overwrites_previous_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cotacao.txt");

        write_report(&path, &Quote::new("5.4312").unwrap()).unwrap();
        write_report(&path, &Quote::new("5.1").unwrap()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.1");
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cotacao.txt");

        let err = write_report(&path, &Quote::new("5.43").unwrap()).unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
