//! Generate grammar command implementation

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use crate::error::CliResult;

/// Arguments for the generate-grammar command
#[derive(Debug, Args)]
pub struct GenerateGrammarArgs {
    /// Name recorded in the grammar metadata
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateGrammarArgs {
    /// Execute the generate-grammar command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        println!("Generating grammar template...");
        println!("  Grammar name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Grammar template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the grammar file to adjust phrase types and tag prefixes");
        println!("2. Check the resulting phrase types:");
        println!("   phrasal list phrase-types --grammar {}", self.output.display());
        println!("3. Use it for chunking:");
        println!(
            "   phrasal parse -i input.txt --grammar {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template grammar content
    fn generate_template(&self) -> String {
        format!(
            r#"# Phrase grammar "{}"
#
# Entries are tried in declaration order: the first phrase type whose
# prefix list matches a token's tag claims the token. When prefix sets
# overlap, put the phrase type that should win earlier in the file.

[metadata]
name = "{}"

# A token joins a phrase when its part-of-speech tag starts with one of
# the listed prefixes. "VB" covers VB, VBD, VBZ and the other verb tags.

[[phrase]]
label = "NP"
prefixes = ["DT", "JJ", "NN"]

[[phrase]]
label = "VP"
prefixes = ["VB", "NN"]

# Add more phrase types as needed:
# [[phrase]]
# label = "PP"
# prefixes = ["IN", "DT", "NN"]
"#,
            self.name, self.name
        )
    }
}
