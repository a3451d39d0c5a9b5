//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use anyhow::Result;

use betula_core::Post;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single post
    pub fn print_post(&self, post: &Post) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                for line in describe_post(post) {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(post)?);
            }
            OutputFormat::Quiet => {
                if let Some(id) = post.id {
                    println!("{}", id);
                }
            }
        }
        Ok(())
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Human-readable lines for a post
fn describe_post(post: &Post) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(id) = post.id {
        lines.push(format!("ID:          {}", id));
    }
    lines.push(format!("Title:       {}", post.title));
    lines.push(format!("URL:         {}", post.url));
    if !post.description.is_empty() {
        lines.push(format!(
            "Description: {}",
            truncate_line(&post.description, 60)
        ));
    }
    lines.push(format!("Visibility:  {}", post.visibility));
    if !post.categories.is_empty() {
        let names: Vec<&str> = post.categories.iter().map(|c| c.name()).collect();
        lines.push(format!("Categories:  {}", names.join(", ")));
    }
    if let Some(created) = post.created_at() {
        lines.push(format!("Created:     {}", created.format("%Y-%m-%d %H:%M")));
    }

    lines
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Truncate to first line and max length
fn truncate_line(s: &str, max_len: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    truncate(first_line, max_len)
}
