use clap::{Parser, Subcommand, ValueEnum};
use dm_app::{AppError, AppResult, Evaluation, scenario_service};
use dm_engine::CalculationResults;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dm-cli")]
#[command(about = "Dosing-mixing CLI - chemical injection and blending calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario file (YAML or JSON)
        project_path: PathBuf,
    },
    /// List scenarios in a file
    Scenarios {
        /// Path to the scenario file (YAML or JSON)
        project_path: PathBuf,
    },
    /// Evaluate one scenario, or all of them
    Evaluate {
        /// Path to the scenario file (YAML or JSON)
        project_path: PathBuf,
        /// Scenario ID (defaults to every scenario in the file)
        scenario_id: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write a starter scenario file
    Template {
        /// Output path; a `.json` extension writes JSON
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    scenario: &'a str,
    adjustments: Vec<String>,
    results: &'a CalculationResults,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Scenarios { project_path } => cmd_scenarios(&project_path),
        Commands::Evaluate {
            project_path,
            scenario_id,
            format,
        } => cmd_evaluate(&project_path, scenario_id.as_deref(), format),
        Commands::Template { output, force } => cmd_template(&output, force),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating scenario file: {}", project_path.display());
    let project = scenario_service::load_project(project_path)?;
    scenario_service::validate_project(&project)?;
    println!("✓ Scenario file is valid");
    Ok(())
}

fn cmd_scenarios(project_path: &Path) -> AppResult<()> {
    let project = scenario_service::load_project(project_path)?;
    let scenarios = scenario_service::list_scenarios(&project);

    if scenarios.is_empty() {
        println!("No scenarios found in file");
    } else {
        println!("Scenarios in {}:", project.name);
        for s in scenarios {
            let overrides = if s.has_constant_overrides {
                ", custom constants"
            } else {
                ""
            };
            println!(
                "  {} - {} ({:?}, mixer {}{})",
                s.id, s.name, s.conduit_type, s.mixer_model, overrides
            );
        }
    }
    Ok(())
}

fn cmd_evaluate(
    project_path: &Path,
    scenario_id: Option<&str>,
    format: OutputFormat,
) -> AppResult<()> {
    let project = scenario_service::load_project(project_path)?;
    let ids: Vec<String> = match scenario_id {
        Some(id) => vec![id.to_string()],
        None => project.scenarios.iter().map(|s| s.id.clone()).collect(),
    };

    let evaluations = ids
        .iter()
        .map(|id| scenario_service::evaluate_scenario(&project, id))
        .collect::<AppResult<Vec<_>>>()?;
    info!(count = evaluations.len(), "evaluation finished");

    let reports: Vec<Report> = evaluations
        .iter()
        .map(|e| Report {
            scenario: &e.scenario_id,
            adjustments: e.adjustments.iter().map(ToString::to_string).collect(),
            results: &e.results,
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for evaluation in &evaluations {
                println!("{}", text_report(evaluation));
            }
        }
        OutputFormat::Yaml => {
            let text =
                serde_yaml::to_string(&reports).map_err(|e| AppError::Format(e.to_string()))?;
            print!("{text}");
        }
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(&reports)
                .map_err(|e| AppError::Format(e.to_string()))?;
            println!("{text}");
        }
    }
    Ok(())
}

fn text_report(evaluation: &Evaluation) -> String {
    let r = &evaluation.results;
    let targets = &evaluation.inputs;
    let verdict = |ok: bool| if ok { "✓" } else { "✗" };

    let mut lines = vec![format!("\n=== {} ===", evaluation.scenario_id)];
    for adjustment in &evaluation.adjustments {
        lines.push(format!("  note: {adjustment}"));
    }
    lines.push(format!("  Hydraulic diameter:  {:.4} m", r.hydraulic_diameter_m));
    lines.push(format!("  Velocity:            {:.4} m/s", r.velocity_mps));
    lines.push(format!("  Reynolds:            {:.0}", r.reynolds));
    lines.push(format!("  Injected flow:       {:.1} L/h", r.total_injection_flow_lph));
    lines.push(format!("  Mixer:               {}", r.mixer_model));
    lines.push(format!(
        "  CoV:                 {:.5} (target {}) {}",
        r.mixer_cov,
        targets.target_cov,
        verdict(r.cov_compliant)
    ));
    lines.push(format!(
        "  Headloss:            {:.5} m ({:.4} kPa)",
        r.headloss_m, r.headloss_kpa
    ));
    lines.push(format!("  Mixing intensity G:  {:.1} 1/s", r.mixing_intensity_per_s));
    lines.push(format!("  Distance to target:  {:.2} m", r.mixing_distance_m));
    lines.push(format!(
        "  Time to target:      {:.2} s (target {} s) {}",
        r.mixing_time_s,
        targets.target_mixing_time_s,
        verdict(r.time_compliant)
    ));
    lines.push(format!(
        "  Jet momentum ratio:  {:.5} ({})",
        r.momentum_ratio, r.momentum_regime
    ));
    lines.join("\n")
}

fn cmd_template(output: &Path, force: bool) -> AppResult<()> {
    if output.exists() && !force {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} exists (use --force to overwrite)", output.display()),
        )));
    }
    scenario_service::save_project(output, &scenario_service::template_project())?;
    println!("✓ Wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_app::{evaluate_scenario, template_project};

    #[test]
    fn cov_verdict_sits_on_the_cov_line() {
        let mut project = template_project();
        project.scenarios[0].inputs.target_mixing_time_s = 0.0;
        let evaluation = evaluate_scenario(&project, "main").unwrap();
        let report = text_report(&evaluation);

        let line = |label: &str| {
            report
                .lines()
                .find(|l| l.trim_start().starts_with(label))
                .unwrap_or_else(|| panic!("no {label} line in\n{report}"))
                .to_string()
        };
        assert!(line("CoV:").ends_with('✓'));
        assert!(line("Time to target:").ends_with('✗'));
        assert!(!line("Distance to target:").contains('✓'));
        assert!(!line("Distance to target:").contains('✗'));
    }
}
