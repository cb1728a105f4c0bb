//! The `mockgrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mockgrade.toml").exists() {
        println!("mockgrade.toml already exists, skipping.");
    } else {
        std::fs::write("mockgrade.toml", SAMPLE_CONFIG)?;
        println!("Created mockgrade.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: mockgrade grade --title \"My Essay\" --file essay.txt");
    println!("  2. Save a record: mockgrade grade --file essay.txt --format json --output draft.json");
    println!("  3. Compare: mockgrade compare --baseline draft.json --current final.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mockgrade configuration

# Simulated grading latency in milliseconds (0 disables it)
delay_ms = 700

# Output format when --format is not given: text, table, json, html
default_format = "text"

# Where records go when no explicit path is given
output_dir = "./mockgrade-results"
"#;
