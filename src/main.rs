use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lintfix_cli::config::{CONFIG_FILE_NAME, generate_init_template, load_config};
use lintfix_cli::fixer::summary::error_chain;
use lintfix_cli::fixer::{FileOutcome, FixOptions, fix_tree};
use lintfix_cli::rules::{BuiltinRuleSet, RuleSet};
use lintfix_cli::walk::WalkOptions;

#[derive(Parser)]
#[command(name = "lintfix")]
#[command(
	author,
	version,
	about = "CLI tool for silencing lint warnings with path-scoped source rewrite rules"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Project root to scan (defaults to the current directory). A directory
	/// named like a subcommand must be written with a path, e.g. ./rules
	#[arg(value_name = "ROOT")]
	root: Option<PathBuf>,

	/// Built-in rule table to apply
	#[arg(long, value_enum, default_value_t = RuleSetArg::Warnings, global = true)]
	rule_set: RuleSetArg,

	/// Config file (defaults to .lintfix.toml in the root, if present)
	#[arg(long, value_name = "FILE", global = true)]
	config: Option<PathBuf>,

	/// Skip rules that rename or remove identifiers without a usage check
	#[arg(long, global = true)]
	safe_only: bool,

	/// Report what would change without writing any file
	#[arg(long)]
	dry_run: bool,

	/// Stop at the first file that cannot be read, decoded or written
	#[arg(long)]
	fail_fast: bool,

	/// Log each applied rule and skipped directory
	#[arg(short, long, global = true)]
	verbose: bool,

	/// Create a template .lintfix.toml in the root
	#[arg(long)]
	init: bool,

	/// Overwrite existing .lintfix.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// List the effective rule table
	Rules {
		/// Project root whose config is merged in
		#[arg(value_name = "ROOT")]
		root: Option<PathBuf>,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Check the config file and its rules without touching any source file
	Validate {
		/// Project root holding .lintfix.toml
		#[arg(value_name = "ROOT")]
		root: Option<PathBuf>,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleSetArg {
	/// Path-keyed cleanup of individual warnings
	Warnings,
	/// API routes, pages and components pass
	Eslint,
	/// Only rules from the config file
	Custom,
}

impl From<RuleSetArg> for BuiltinRuleSet {
	fn from(arg: RuleSetArg) -> Self {
		match arg {
			RuleSetArg::Warnings => BuiltinRuleSet::Warnings,
			RuleSetArg::Eslint => BuiltinRuleSet::Eslint,
			RuleSetArg::Custom => BuiltinRuleSet::Custom,
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: bool) {
	let level = if verbose {
		log::LevelFilter::Debug
	} else {
		log::LevelFilter::Warn
	};

	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.format_timestamp(None)
		.format_target(false)
		.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Rules { root } => {
				handle_rules(root, cli.config.as_deref(), cli.rule_set, cli.safe_only)
			}
			Commands::Config { action } => match action {
				ConfigAction::Validate { root } => {
					handle_config_validate(root, cli.config.as_deref(), cli.rule_set)
				}
			},
		};
	}

	let root = resolve_root(cli.root)?;

	// Handle --init
	if cli.init {
		return handle_init(&root, cli.force);
	}

	let options = FixOptions {
		dry_run: cli.dry_run,
		fail_fast: cli.fail_fast,
	};
	handle_fix(&root, cli.config.as_deref(), cli.rule_set, cli.safe_only, options)
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
	match root {
		Some(root) => Ok(root),
		None => std::env::current_dir().context("Failed to get current directory"),
	}
}

fn handle_init(root: &Path, force: bool) -> Result<ExitCode> {
	let config_path = root.join(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	let template = generate_init_template();
	std::fs::write(&config_path, template)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_fix(
	root: &Path,
	config: Option<&Path>,
	rule_set: RuleSetArg,
	safe_only: bool,
	options: FixOptions,
) -> Result<ExitCode> {
	let loaded = load_config(root, config).context("Failed to load configuration")?;
	let rules = RuleSet::build(rule_set.into(), &loaded.config.rules, safe_only)
		.context("Failed to compile rules")?;
	let walk = WalkOptions {
		extensions: loaded.config.extensions.clone(),
		exclude_dirs: loaded.config.exclude_dirs.clone(),
	};

	let fixed_label = if options.dry_run { "Would fix" } else { "Fixed" };
	let summary = fix_tree(root, &walk, &rules, options, |key, outcome| match outcome {
		FileOutcome::Fixed => println!("{fixed_label}: {key}"),
		FileOutcome::Failed(e) => eprintln!("Failed: {key}: {}", error_chain(e)),
		FileOutcome::Unchanged => {}
	})
	.with_context(|| format!("Failed to fix files under {}", root.display()))?;

	if options.dry_run {
		println!("\nTotal files that would be fixed: {}", summary.fixed.len());
	} else {
		println!("\nTotal files fixed: {}", summary.fixed.len());
	}

	if summary.has_failures() {
		eprintln!("Total files failed: {}", summary.failed.len());
		return Ok(ExitCode::FAILURE);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules(
	root: Option<PathBuf>,
	config: Option<&Path>,
	rule_set: RuleSetArg,
	safe_only: bool,
) -> Result<ExitCode> {
	let root = resolve_root(root)?;
	let loaded = load_config(&root, config).context("Failed to load configuration")?;
	let rules = RuleSet::build(rule_set.into(), &loaded.config.rules, safe_only)
		.context("Failed to compile rules")?;

	println!("Rule set: {}", rules.name);
	if let Some(ref path) = loaded.path {
		println!("# config: {}", path.display());
	}
	if rules.scope.is_empty() {
		println!("# scope: all files");
	} else {
		for selector in &rules.scope {
			println!("# scope: {}", selector);
		}
	}
	println!("# rules: {}", rules.rules.len());
	println!();

	for (i, compiled) in rules.rules.iter().enumerate() {
		let rule = &compiled.rule;
		println!("  Rule {}: {}", i + 1, rule.name);
		if let Some(ref description) = rule.description {
			println!("    description: {}", description);
		}
		if rule.heuristic {
			println!("    heuristic: true");
		}
		println!("    files: {}", rule.selector);
		for edit in &rule.edits {
			println!("    {}", edit);
		}
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(
	root: Option<PathBuf>,
	config: Option<&Path>,
	rule_set: RuleSetArg,
) -> Result<ExitCode> {
	let root = resolve_root(root)?;

	let checked = load_config(&root, config).and_then(|loaded| {
		RuleSet::build(rule_set.into(), &loaded.config.rules, false).map(|_| loaded)
	});

	match checked {
		Ok(loaded) => {
			match loaded.path {
				Some(path) => println!(
					"Configuration is valid: {} ({} rules)",
					path.display(),
					loaded.config.rules.len()
				),
				None => println!("No configuration file found."),
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", error_chain(&e));
			Ok(ExitCode::FAILURE)
		}
	}
}
