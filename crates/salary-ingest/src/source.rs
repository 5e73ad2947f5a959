use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Published location of the data-industry salary CSV.
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv";

/// Where the salary CSV is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// Treats `http://` and `https://` locations as URLs, anything else as a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::Path(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Url(_))
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_and_path() {
        assert!(DataSource::parse("https://example.com/data.csv").is_remote());
        assert!(DataSource::parse("HTTP://example.com/data.csv").is_remote());
        assert_eq!(
            DataSource::parse(" data/salaries.csv "),
            DataSource::Path(PathBuf::from("data/salaries.csv"))
        );
    }

    #[test]
    fn test_default_is_published_csv() {
        let source = DataSource::default();
        assert!(source.is_remote());
        assert_eq!(source.to_string(), DEFAULT_SOURCE_URL);
    }
}
