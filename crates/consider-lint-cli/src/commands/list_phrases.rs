//! List phrases command implementation.

use anyhow::Result;
use consider_lint::Settings;

use crate::settings_resolver::SettingsSource;

/// Runs the list-phrases command.
pub fn run(source: &SettingsSource) -> Result<()> {
    let settings = source.load()?;

    match source.path() {
        Some(path) => println!("Phrases from {}:\n", path.display()),
        None => println!("Built-in phrases:\n"),
    }
    print!("{}", render_table(&settings));

    println!("\nUse `consider-lint init` to write the built-in table to .consider-lint.toml");
    Ok(())
}

fn render_table(settings: &Settings) -> String {
    let mut table = format!("{:<30} {:<40} References\n", "Synonyms", "Alternatives");
    table.push_str(&"-".repeat(80));
    table.push('\n');

    for phrase in &settings.phrases {
        let alternatives = if phrase.alternatives.is_empty() {
            "-".to_owned()
        } else {
            phrase.alternatives.join(", ")
        };
        table.push_str(&format!(
            "{:<30} {:<40} {}\n",
            phrase.synonyms.join(", "),
            alternatives,
            phrase.references.join(", ")
        ));
    }
    table
}
