//! Callsight CLI - Call recording upload and organization management
//!
//! Thin client for the Callsight API: analyze recordings, preview prompts
//! and edit organization AI settings from the terminal.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use serde_json::Value;
use std::fs;
use std::path::Path;

use api::{AnalyzeOptions, CallsightClient, CreateOrganizationRequest};
use config::Config;

#[derive(Parser)]
#[command(name = "callsight")]
#[command(about = "Callsight CLI - Call recording analysis", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
        /// Server URL to store alongside the key
        #[arg(long)]
        url: Option<String>,
    },

    /// Analyze a call recording
    Analyze {
        /// Audio file (wav, mp3, m4a, webm, ogg, flac, aac)
        file: String,
        /// Call type: sales, support, consultation, follow_up, general
        #[arg(short = 't', long)]
        call_type: Option<String>,
        /// Expected spoken language
        #[arg(short, long)]
        language: Option<String>,
        /// Extra instructions for this call
        #[arg(short, long)]
        instructions: Option<String>,
        /// Organization ID (defaults to the configured organization)
        #[arg(short, long)]
        org: Option<String>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt an analysis would use
    Prompt {
        /// Call type: sales, support, consultation, follow_up, general
        #[arg(short = 't', long)]
        call_type: Option<String>,
        /// Expected spoken language
        #[arg(short, long)]
        language: Option<String>,
        /// Organization ID (defaults to the configured organization)
        #[arg(short, long)]
        org: Option<String>,
        /// Show metadata (industry, strictness, length)
        #[arg(long)]
        verbose: bool,
    },

    /// Organization operations
    Org {
        #[command(subcommand)]
        action: OrgAction,
    },

    /// List industry templates
    Industries,

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum OrgAction {
    /// Create an organization
    Create {
        /// Organization name (will prompt if not provided)
        name: Option<String>,
        /// Industry id (see `callsight industries`)
        #[arg(short, long, default_value = "general")]
        industry: String,
        /// AI settings JSON file
        #[arg(short, long)]
        settings: Option<String>,
        /// Use as the default organization
        #[arg(long)]
        set_default: bool,
    },
    /// Show an organization and its AI settings
    Show {
        /// Organization ID (defaults to the configured organization)
        #[arg(short, long)]
        org: Option<String>,
    },
    /// Replace AI settings from a JSON file
    Settings {
        /// AI settings JSON file
        file: String,
        /// Organization ID (defaults to the configured organization)
        #[arg(short, long)]
        org: Option<String>,
    },
    /// Set the default organization
    Use {
        /// Organization ID
        org_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key, url } => cmd_login(key, url).await,
        Commands::Analyze {
            file,
            call_type,
            language,
            instructions,
            org,
            json,
        } => {
            let options = AnalyzeOptions {
                call_type,
                language,
                instructions,
            };
            cmd_analyze(file, options, org, json).await
        }
        Commands::Prompt {
            call_type,
            language,
            org,
            verbose,
        } => cmd_prompt(call_type, language, org, verbose).await,
        Commands::Org { action } => cmd_org(action).await,
        Commands::Industries => cmd_industries().await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

fn client_from(config: &Config) -> Result<CallsightClient> {
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'callsight login' first.")?;
    Ok(CallsightClient::new(&config.base_url, api_key))
}

fn require_org(config: &Config, org: Option<&str>) -> Result<String> {
    config
        .resolve_org(org)
        .context("No organization specified and no default set. Use -o <id> or 'callsight org use <id>'.")
}

async fn cmd_login(key: Option<String>, url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = url {
        config.base_url = url;
    }

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = CallsightClient::new(&config.base_url, &api_key);
    print!("Testing connection to {}... ", config.base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Callsight API. Check the URL.");
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    if config.default_org.is_none() {
        println!("\n{}", "Tip: Set a default organization:".yellow());
        println!("  callsight org create \"Acme\" --industry insurance --set-default");
        println!("  callsight org use <ORG_ID>");
    }

    Ok(())
}

async fn cmd_analyze(
    file: String,
    options: AnalyzeOptions,
    org: Option<String>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config)?;
    let org_id = require_org(&config, org.as_deref())?;

    let audio = fs::read(&file).with_context(|| format!("Failed to read file: {}", file))?;
    let filename = Path::new(&file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("recording")
        .to_string();

    eprintln!(
        "{} {} ({:.1} MB)...",
        "Analyzing".dimmed(),
        filename.cyan(),
        audio.len() as f64 / (1024.0 * 1024.0)
    );

    let result = client.analyze(&org_id, &filename, audio, options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.analysis)?);
        return Ok(());
    }

    for attempt in &result.attempts {
        if attempt.outcome != "success" {
            eprintln!(
                "  {} {} {}",
                "✗".red(),
                attempt.model_id.dimmed(),
                attempt.error.as_deref().unwrap_or("failed").dimmed()
            );
        }
    }

    print_report(&result.analysis);
    println!("\n{} {}", "Record:".dimmed(), result.record_id.to_string().dimmed());

    Ok(())
}

fn print_report(analysis: &Value) {
    let text = |path: &str| {
        analysis
            .pointer(path)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };
    let list = |path: &str| -> Vec<String> {
        analysis
            .pointer(path)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    };

    let score = analysis
        .pointer("/coaching/overallScore")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let score_text = format!("{:.0}", score);
    let score_colored = if score >= 75.0 {
        score_text.green()
    } else if score >= 50.0 {
        score_text.yellow()
    } else {
        score_text.red()
    };

    println!(
        "{} {}  {} {}  {} {}",
        "Score:".bold(),
        score_colored,
        "Language:".bold(),
        text("/language"),
        "Model:".bold(),
        text("/modelUsed").dimmed()
    );

    let summary = text("/summary");
    if !summary.is_empty() {
        println!("\n{}\n  {}", "Summary".bold(), summary);
    }

    for (title, path) in [
        ("Strengths", "/coaching/strengths"),
        ("Weaknesses", "/coaching/weaknesses"),
        ("Red flags", "/coaching/redFlags"),
        ("Compliance issues", "/coaching/complianceIssues"),
    ] {
        let items = list(path);
        if items.is_empty() {
            continue;
        }
        println!("\n{}", title.bold());
        for item in items {
            println!("  - {}", truncate_string(&item, 100));
        }
    }

    if let Some(items) = analysis.pointer("/actionItems").and_then(Value::as_array) {
        if !items.is_empty() {
            println!("\n{}", "Action items".bold());
            for item in items {
                let task = item.get("task").and_then(Value::as_str).unwrap_or("");
                let owner = item.get("owner").and_then(Value::as_str).unwrap_or("");
                println!("  - {} {}", task, format!("({})", owner).dimmed());
            }
        }
    }
}

async fn cmd_prompt(
    call_type: Option<String>,
    language: Option<String>,
    org: Option<String>,
    verbose: bool,
) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config)?;
    let org_id = require_org(&config, org.as_deref())?;

    let preview = client
        .get_prompt(&org_id, call_type.as_deref(), language.as_deref())
        .await?;

    if verbose {
        // Show metadata to stderr so stdout is clean for piping
        eprintln!(
            "{} {} / {} / {} - {} chars",
            "Prompt for".dimmed(),
            preview.industry.cyan(),
            preview.call_type.green(),
            preview.strictness.yellow(),
            preview.length
        );
        eprintln!("{}", "---".dimmed());
    }

    println!("{}", preview.prompt);

    Ok(())
}

async fn cmd_org(action: OrgAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        OrgAction::Create {
            name,
            industry,
            settings,
            set_default,
        } => {
            let client = client_from(&config)?;
            let name = match name {
                Some(n) => n,
                None => Input::new()
                    .with_prompt("Organization name")
                    .interact_text()
                    .context("Failed to read input")?,
            };
            let ai_settings = settings.as_deref().map(read_settings).transpose()?;

            let org = client
                .create_org(&CreateOrganizationRequest {
                    name,
                    industry,
                    ai_settings,
                })
                .await?;

            println!(
                "{} Organization '{}' created ({}) [{}]",
                "✓".green(),
                org.name.cyan(),
                org.id,
                org.industry
            );

            if set_default {
                config.default_org = Some(org.id.to_string());
                config.save()?;
                println!("{} Default organization set", "✓".green());
            }
        }

        OrgAction::Show { org } => {
            let client = client_from(&config)?;
            let org_id = require_org(&config, org.as_deref())?;
            let org = client.get_org(&org_id).await?;

            println!("{} {}", org.name.cyan().bold(), org.id.to_string().dimmed());
            println!("  Industry: {}", org.industry);
            println!("{}", serde_json::to_string_pretty(&org.ai_settings)?);
        }

        OrgAction::Settings { file, org } => {
            let client = client_from(&config)?;
            let org_id = require_org(&config, org.as_deref())?;
            let settings = read_settings(&file)?;
            let org = client.update_ai_settings(&org_id, &settings).await?;

            println!("{} AI settings updated for {}", "✓".green(), org.name.cyan());
        }

        OrgAction::Use { org_id } => {
            if uuid::Uuid::parse_str(&org_id).is_err() {
                bail!("'{}' is not a valid organization ID", org_id);
            }
            config.default_org = Some(org_id.clone());
            config.save()?;
            println!("{} Default organization set to {}", "✓".green(), org_id);
        }
    }

    Ok(())
}

async fn cmd_industries() -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config)?;

    let industries = client.list_industries().await?;

    println!("{}", "Industries:".bold());
    for industry in industries {
        println!(
            "  {} {} {}",
            industry.id.cyan(),
            industry.display_name,
            format!("({} criteria)", industry.evaluation_criteria.len()).dimmed()
        );
    }

    Ok(())
}

fn read_settings(path: &str) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path))?;
    if !value.is_object() {
        bail!("{} must contain a JSON object", path);
    }
    Ok(value)
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!(
        "  Default Organization: {}",
        config.default_org.as_deref().unwrap_or("None").cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_counts_chars() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("日本語のテキスト", 3), "日本語...");
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "callsight",
            "analyze",
            "call.wav",
            "-t",
            "sales",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                file,
                call_type,
                json,
                org,
                ..
            } => {
                assert_eq!(file, "call.wav");
                assert_eq!(call_type.as_deref(), Some("sales"));
                assert!(json);
                assert!(org.is_none());
            }
            _ => panic!("expected analyze command"),
        }
    }
}
