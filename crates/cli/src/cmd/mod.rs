mod defines;
mod emit;
mod filter;
mod select;

pub use defines::cmd_defines;
pub use emit::cmd_emit;
pub use filter::cmd_filter;
pub use select::cmd_select;

/// Environment variable PlatformIO uses to expose the declared framework list
pub const PIOFRAMEWORK: &str = "PIOFRAMEWORK";

/// Resolve the declared framework tokens for a command.
///
/// Positional arguments take precedence; otherwise the `PIOFRAMEWORK`
/// environment variable is split on commas and whitespace. Absent input
/// resolves to the empty list, which the selector tolerates.
pub fn declared_frameworks(args: Vec<String>) -> Vec<String> {
  if !args.is_empty() {
    return args;
  }

  match std::env::var(PIOFRAMEWORK) {
    Ok(value) => value
      .split(|c: char| c == ',' || c.is_whitespace())
      .filter(|t| !t.is_empty())
      .map(str::to_string)
      .collect(),
    Err(_) => Vec::new(),
  }
}
