//! Clausegraph CLI — analyze contract text from a file or a built-in sample.
//!
//! Usage:
//!   clausegraph analyze <path> [--scope document|clause] [--export out.json] [--graph]
//!   clausegraph sample <id> [--scope document|clause] [--export out.json] [--graph]
//!   clausegraph samples

use clap::{Parser, Subcommand, ValueEnum};
use clausegraph::{
    project, samples, AnalysisConfig, AnalysisExport, ContractAnalysis, ContractAnalyzer,
    Milestone, RiskScope,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "clausegraph",
    version,
    about = "Heuristic contract analysis with risk-graph projection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a contract document from disk
    Analyze {
        /// Path to a plain-text contract file
        path: PathBuf,
        /// Risk assessor scope
        #[arg(long, value_enum, default_value_t = ScopeArg::Document)]
        scope: ScopeArg,
        /// Write the JSON export document to this path
        #[arg(long)]
        export: Option<PathBuf>,
        /// Print the graph projection as JSON instead of the report
        #[arg(long)]
        graph: bool,
    },
    /// Analyze one of the built-in sample contracts
    Sample {
        /// Sample id (see `clausegraph samples`)
        id: String,
        /// Risk assessor scope
        #[arg(long, value_enum, default_value_t = ScopeArg::Document)]
        scope: ScopeArg,
        /// Write the JSON export document to this path
        #[arg(long)]
        export: Option<PathBuf>,
        /// Print the graph projection as JSON instead of the report
        #[arg(long)]
        graph: bool,
    },
    /// List the built-in sample contracts
    Samples,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeArg {
    /// Assessors scan the whole document
    Document,
    /// Assessors scan only each clause's excerpt
    Clause,
}

impl From<ScopeArg> for RiskScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Document => RiskScope::Document,
            ScopeArg::Clause => RiskScope::Clause,
        }
    }
}

fn run_analysis(
    text: &str,
    scope: ScopeArg,
    export: Option<&Path>,
    graph: bool,
) -> i32 {
    if text.trim().is_empty() {
        eprintln!("Error: the document is empty; provide contract text to analyze");
        return 1;
    }

    let analyzer = ContractAnalyzer::with_config(AnalysisConfig {
        risk_scope: scope.into(),
    });
    let analysis = analyzer.analyze_with_progress(text, |milestone: Milestone| {
        tracing::info!(stage = milestone.label(), percent = milestone.percent(), "analysis progress");
    });

    if graph {
        let view = project(&analysis);
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else {
        print_report(&analysis);
    }

    if let Some(path) = export {
        let document = AnalysisExport::new(&analysis);
        if let Err(e) = document.write_to(path) {
            eprintln!("Error: {}", e);
            return 1;
        }
        println!("Wrote export to {}", path.display());
    }
    0
}

fn print_report(analysis: &ContractAnalysis) {
    println!("{}", analysis.summary);
    println!();

    println!("Parties:");
    for entity in &analysis.entities {
        println!("  {} ({}): {}", entity.name, entity.role, entity.description);
    }
    println!();

    if analysis.clauses.is_empty() {
        println!("No clauses recognized.");
    } else {
        println!("Clauses:");
        for clause in &analysis.clauses {
            println!(
                "  [{:<7}] {} ({})",
                clause.risk_level,
                clause.title,
                clause.kind.label()
            );
            println!("            {}", clause.explanation);
        }
    }
    println!();
    println!(
        "Overall risk: {} ({} relationships derived)",
        analysis.overall_risk,
        analysis.relationships.len()
    );
}

fn cmd_analyze(path: &Path, scope: ScopeArg, export: Option<&Path>, graph: bool) -> i32 {
    let text = match clausegraph::read_document(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    run_analysis(&text, scope, export, graph)
}

fn cmd_sample(id: &str, scope: ScopeArg, export: Option<&Path>, graph: bool) -> i32 {
    let Some(sample) = samples::find(id) else {
        eprintln!("Error: unknown sample '{}' (try `clausegraph samples`)", id);
        return 1;
    };
    run_analysis(sample.text, scope, export, graph)
}

fn cmd_samples() -> i32 {
    println!("{:<12}  {:<22}  DESCRIPTION", "ID", "NAME");
    println!("{}", "-".repeat(72));
    for sample in samples::all() {
        println!("{:<12}  {:<22}  {}", sample.id, sample.name, sample.description);
    }
    0
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Analyze {
            path,
            scope,
            export,
            graph,
        } => cmd_analyze(&path, scope, export.as_deref(), graph),
        Commands::Sample {
            id,
            scope,
            export,
            graph,
        } => cmd_sample(&id, scope, export.as_deref(), graph),
        Commands::Samples => cmd_samples(),
    };
    std::process::exit(code);
}
