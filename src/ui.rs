//! Console output helpers.
//!
//! Status and error lines go to the primary channels; diagnostic
//! detail goes through [display_debug], which callers gate on the
//! verbose setting so it never leaks into the failure message.

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_debug(message: &str) {
    eprintln!("\x1b[2mDEBUG: {}\x1b[0m", message); // Dim
}

/// Renders the environment dump for verbose diagnostics.
///
/// One `key :: value` line per variable, matching the historical
/// debug format.
pub fn format_env_dump(vars: impl Iterator<Item = (String, String)>) -> String {
    let mut lines: Vec<String> = vars.map(|(k, v)| format!(" -> {} :: {}", k, v)).collect();
    lines.sort();
    format!("Available environment variables:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_env_dump() {
        let vars = vec![
            ("B".to_string(), "2".to_string()),
            ("A".to_string(), "1".to_string()),
        ];
        let dump = format_env_dump(vars.into_iter());
        assert!(dump.starts_with("Available environment variables:"));
        assert!(dump.contains(" -> A :: 1"));
        assert!(dump.contains(" -> B :: 2"));
        // Sorted for stable output
        assert!(dump.find("A :: 1").unwrap() < dump.find("B :: 2").unwrap());
    }

    #[test]
    fn test_format_env_dump_empty() {
        let dump = format_env_dump(std::iter::empty());
        assert_eq!(dump, "Available environment variables:\n");
    }
}
