use std::path::Path;

use resxgen::{DiskFile, Error, ResourceModel};

const PREVIEW_LEN: usize = 50;

/// Print the entries of one resource file.
pub fn print_view(input: &Path, full: bool, json: bool) -> Result<(), Error> {
    let file = DiskFile::new(input);
    let model = ResourceModel::from_source(Some(&file))?;

    if json {
        let out = serde_json::to_string_pretty(model.entries()).map_err(std::io::Error::from)?;
        println!("{}", out);
        return Ok(());
    }

    println!("=== {} ===", model.class_name());
    println!("Entries: {}", model.entries().len());

    for (i, entry) in model.entries().iter().enumerate() {
        println!("\n  Entry {}: {}", i + 1, entry.name);
        if full {
            println!("    Value: {}", entry.value);
        } else {
            println!("    Value: {}", truncate(&entry.value));
        }
        if let Some(comment) = &entry.comment {
            println!("    Comment: {}", comment);
        }
    }
    Ok(())
}

fn truncate(value: &str) -> String {
    if value.chars().count() > PREVIEW_LEN {
        let head: String = value.chars().take(PREVIEW_LEN).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_value() {
        assert_eq!(truncate("Hello"), "Hello");
    }

    #[test]
    fn test_truncate_long_value_on_char_boundary() {
        let value = "é".repeat(60);
        let truncated = truncate(&value);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), PREVIEW_LEN + 3);
    }
}
