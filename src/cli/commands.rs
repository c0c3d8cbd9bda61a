// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every flag is optional. Paths that are not given on the command
// line or in a --config file are asked for interactively:
//
//   $ glossary
//   Enter input file (.txt): data/terms.txt
//   Enter folder name for save: site
//
// clap's derive macros generate --help, error messages and type
// conversion from these field definitions.
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::Args;

use crate::application::build_use_case::BuildConfig;
use crate::infra::config_file::{load_config, ConfigFile};

pub const INPUT_PROMPT: &str = "Enter input file (.txt): ";
pub const OUTPUT_PROMPT: &str = "Enter folder name for save: ";

/// All arguments for a glossary build.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Text file of term/definition entries (prompted for if omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory to write index.html and the term pages into
    /// (prompted for if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// JSON build config; flags given on the command line override it
    #[arg(long)]
    pub config: Option<String>,

    /// Save the resolved build config to this JSON file
    #[arg(long)]
    pub save_config: Option<String>,

    /// Create the output directory if it does not exist
    #[arg(long)]
    pub create_dir: bool,

    /// Do not link a term that appears in its own definition
    #[arg(long)]
    pub no_self_links: bool,

    /// Build everything but write no files
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    /// Turn CLI args into the application-layer BuildConfig.
    /// The application layer never sees clap types.
    ///
    /// `ask` is called with a prompt for each path still unknown.
    pub fn into_config<F>(self, mut ask: F) -> Result<BuildConfig>
    where
        F: FnMut(&str) -> Result<String>,
    {
        let mut file = match &self.config {
            Some(path) => load_config(path)?,
            None       => ConfigFile::default(),
        };

        // Flag first, then the config file, then ask
        let input = match self.input.or(file.input.take()) {
            Some(input) => input,
            None        => ask(INPUT_PROMPT)?,
        };

        let output_dir = match self.output.or(file.output_dir.take()) {
            Some(output) => output,
            None         => ask(OUTPUT_PROMPT)?,
        };

        let mut cfg = BuildConfig {
            input,
            output_dir,
            ..file.into_config()
        };

        cfg.create_output_dir |= self.create_dir;
        cfg.dry_run |= self.dry_run;
        if self.no_self_links {
            cfg.self_links = false;
        }

        Ok(cfg)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config_file::save_config;

    fn never_ask(prompt: &str) -> Result<String> {
        panic!("unexpected prompt: {prompt}")
    }

    #[test]
    fn test_flags_need_no_prompts() {
        let args = BuildArgs {
            input:         Some("terms.txt".into()),
            output:        Some("site".into()),
            no_self_links: true,
            ..BuildArgs::default()
        };
        let cfg = args.into_config(never_ask).unwrap();
        assert_eq!(cfg.input, "terms.txt");
        assert_eq!(cfg.output_dir, "site");
        assert!(!cfg.self_links);
        assert!(!cfg.create_output_dir);
    }

    #[test]
    fn test_missing_paths_are_prompted_in_order() {
        let mut asked = Vec::new();
        let cfg = BuildArgs::default()
            .into_config(|prompt| {
                asked.push(prompt.to_string());
                Ok(format!("answer{}", asked.len()))
            })
            .unwrap();

        assert_eq!(asked, vec![INPUT_PROMPT, OUTPUT_PROMPT]);
        assert_eq!(cfg.input, "answer1");
        assert_eq!(cfg.output_dir, "answer2");
    }

    #[test]
    fn test_config_file_supplies_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("glossary.json");
        let saved = BuildConfig {
            input:      "from_file.txt".into(),
            output_dir: "file_site".into(),
            ..BuildConfig::default()
        };
        save_config(&path, &saved).unwrap();

        let args = BuildArgs {
            output:     Some("cli_site".into()),
            config:     Some(path.display().to_string()),
            create_dir: true,
            ..BuildArgs::default()
        };
        let cfg = args.into_config(never_ask).unwrap();

        assert_eq!(cfg.input, "from_file.txt");
        assert_eq!(cfg.output_dir, "cli_site");
        assert!(cfg.create_output_dir);
    }

    #[test]
    fn test_paths_missing_from_config_file_are_prompted() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("glossary.json");
        std::fs::write(&path, r#"{ "input": "from_file.txt", "self_links": false }"#).unwrap();

        let args = BuildArgs {
            config: Some(path.display().to_string()),
            ..BuildArgs::default()
        };
        let mut asked = Vec::new();
        let cfg = args
            .into_config(|prompt| {
                asked.push(prompt.to_string());
                Ok("typed_site".to_string())
            })
            .unwrap();

        assert_eq!(asked, vec![OUTPUT_PROMPT]);
        assert_eq!(cfg.input, "from_file.txt");
        assert_eq!(cfg.output_dir, "typed_site");
        assert!(!cfg.self_links);
    }
}
