use grafos_core::catalog::Application;
use grafos_core::format::OutputFormat;

/// Parse application name from string
pub fn parse_application(s: &str) -> std::result::Result<Application, String> {
    s.parse::<Application>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
