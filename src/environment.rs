use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backend the dashboard reads its data from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Trading bot backend running on this machine.
    #[default]
    Local,
    /// A custom API base URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000/api".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::Custom {
                api_base_url: s.trim_end_matches('/').to_string(),
            });
        }
        Err(format!(
            "expected \"local\" or an http(s) URL, got \"{}\"",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environment_is_local() {
        assert_eq!(Environment::default(), Environment::Local);
        assert_eq!(
            Environment::default().api_base_url(),
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn test_parse_local() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
    }

    #[test]
    fn test_parse_custom_url_strips_trailing_slash() {
        let env = "http://bot.example.com:5000/api/"
            .parse::<Environment>()
            .unwrap();
        assert_eq!(env.api_base_url(), "http://bot.example.com:5000/api");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("ftp://nope".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }
}
