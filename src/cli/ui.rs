use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Defines different styles for text elements.
pub enum StyleType {
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a progress bar counting fetched days. Draws to stderr and stays
/// hidden when stderr is not a terminal.
pub fn new_progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_text_keeps_content() {
        console::set_colors_enabled(false);
        assert_eq!(style_text("bad period", StyleType::Error), "bad period");
        assert_eq!(style_text("hint", StyleType::Subtle), "hint");
    }

    #[test]
    fn test_progress_bar_length() {
        let pb = new_progress_bar(3).unwrap();
        assert_eq!(pb.length(), Some(3));
    }
}
