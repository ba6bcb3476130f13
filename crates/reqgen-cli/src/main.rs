//! reqgen command line
//!
//! ```text
//! reqgen generate --input login.yaml --out build/
//! reqgen generate --text "Users log in with email and password" --json
//! reqgen compare --old v1.json --new v2.json
//! ```

mod output;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use reqgen_core::{ArtifactGenerator, DocumentFormat, GeneratorConfig, RequirementDocument};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "REQGEN_LOG";

fn cli() -> Command {
    Command::new("reqgen")
        .version(reqgen_core::VERSION)
        .about("Generate test cases, automation scripts and coverage reports from requirements")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Generator configuration (TOML)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate artifacts for one requirement")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_parser(value_parser!(PathBuf))
                        .help("Structured requirement file (.json, .yaml, .yml)"),
                )
                .arg(
                    Arg::new("text")
                        .long("text")
                        .short('t')
                        .help("Free-text requirement"),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["input", "text"])
                        .required(true),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory to write artifact files into"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the artifact bundle as JSON"),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("Report the impact of a requirement change")
                .arg(
                    Arg::new("old")
                        .long("old")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Previous requirement file"),
                )
                .arg(
                    Arg::new("new")
                        .long("new")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Updated requirement file"),
                ),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_generator(matches: &ArgMatches) -> Result<ArtifactGenerator> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => GeneratorConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    Ok(ArtifactGenerator::new(config))
}

fn read_requirement(path: &Path) -> Result<Value> {
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = RequirementDocument::parse(&text, format)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(document.into_value())
}

fn generate(generator: &ArtifactGenerator, args: &ArgMatches) -> Result<()> {
    let bundle = if let Some(path) = args.get_one::<PathBuf>("input") {
        let raw = read_requirement(path)?;
        generator
            .generate_bundle(&raw)
            .with_context(|| format!("failed to generate artifacts for {}", path.display()))?
    } else {
        let text = args
            .get_one::<String>("text")
            .map(String::as_str)
            .unwrap_or_default();
        generator
            .generate_from_text(text)
            .context("failed to generate artifacts from text")?
    };

    if let Some(dir) = args.get_one::<PathBuf>("out") {
        for path in output::write_bundle(&bundle, dir)? {
            eprintln!("wrote {}", path.display());
        }
    }

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else {
        print!("{}", output::summary(&bundle));
    }
    Ok(())
}

fn compare(generator: &ArtifactGenerator, args: &ArgMatches) -> Result<()> {
    let (Some(old_path), Some(new_path)) = (
        args.get_one::<PathBuf>("old"),
        args.get_one::<PathBuf>("new"),
    ) else {
        anyhow::bail!("both --old and --new are required");
    };

    let old = read_requirement(old_path)?;
    let new = read_requirement(new_path)?;
    let report = generator
        .compare(&old, &new)
        .context("failed to compare requirements")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let generator = load_generator(matches)?;
    match matches.subcommand() {
        Some(("generate", args)) => generate(&generator, args),
        Some(("compare", args)) => compare(&generator, args),
        _ => Ok(()),
    }
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    if let Err(e) = run(&matches) {
        tracing::error!("{:#}", e);
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn generate_requires_a_source() {
        let err = cli().try_get_matches_from(["reqgen", "generate"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = cli()
            .try_get_matches_from(["reqgen", "generate", "--input", "a.json", "--text", "x"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["reqgen", "compare", "--old", "a.json", "--new", "b.json", "--log-json"])
            .unwrap();
        assert!(matches.get_flag("log-json"));
    }

    #[test]
    fn reads_yaml_requirement_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login.yml");
        std::fs::write(&path, "feature: Login\nfields: [email]\n").unwrap();

        let raw = read_requirement(&path).unwrap();
        assert_eq!(raw["feature"], "Login");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = read_requirement(Path::new("requirement.xml")).unwrap_err();
        assert!(err.to_string().contains("unsupported requirement format: xml"));
    }

    #[test]
    fn compare_runs_on_files() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.json");
        let new = dir.path().join("new.json");
        std::fs::write(&old, reqgen_test_utils::login_json().to_string()).unwrap();
        std::fs::write(&new, r#"{"feature": "Login", "fields": ["email"]}"#).unwrap();

        let matches = cli()
            .try_get_matches_from([
                "reqgen",
                "compare",
                "--old",
                old.to_str().unwrap(),
                "--new",
                new.to_str().unwrap(),
            ])
            .unwrap();
        assert!(run(&matches).is_ok());
    }
}
