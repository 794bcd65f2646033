use std::path::PathBuf;

use clap::Args;
use naam_ai::error::AppError;
use naam_ai::predictor::{GenderPredictor, Prediction};

use crate::infra::load_database;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Names to classify; quote multi-word names
    #[arg(required = true)]
    pub(crate) names: Vec<String>,
    /// Name database backing the lookup stage (JSON object or CSV export)
    #[arg(long)]
    pub(crate) database: Option<PathBuf>,
    /// Emit raw JSON instead of the human-readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Name database backing the lookup stage of the demo
    #[arg(long)]
    pub(crate) database: Option<PathBuf>,
    /// Extra names to classify after the built-in roster
    #[arg(long)]
    pub(crate) names: Vec<String>,
}

/// Sample names touching every rule stage: titles in both scripts, a
/// database candidate, suffix weighting, and both final-letter branches.
const DEMO_ROSTER: &[&str] = &[
    "Shri Ramesh Kumar",
    "Mrs Priya Singh",
    "कुमारी Sita Sharma",
    "Aditi Verma",
    "Gurpreet Kaur",
    "Anil Lal",
    "Vikram",
    "Kavita",
];

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let database = load_database(args.database.as_deref())?;
    let predictor = GenderPredictor::new(database);

    for name in &args.names {
        let prediction = predictor.predict(name);
        if args.json {
            match serde_json::to_string_pretty(&prediction) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("prediction payload unavailable: {err}"),
            }
        } else {
            render_prediction(name, &prediction);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let database = load_database(args.database.as_deref())?;

    println!("Gender prediction demo");
    if database.is_empty() {
        println!("Name database: empty (the lookup stage never fires)");
    } else {
        println!("Name database: {} known names", database.len());
    }
    println!();

    let predictor = GenderPredictor::new(database);
    let extras = args.names.iter().map(String::as_str);
    for name in DEMO_ROSTER.iter().copied().chain(extras) {
        render_prediction(name, &predictor.predict(name));
    }

    Ok(())
}

fn render_prediction(name: &str, prediction: &Prediction) {
    println!(
        "- {} -> {} ({:.0}% confidence)",
        name,
        prediction.gender.label(),
        prediction.confidence * 100.0
    );
    for reason in &prediction.reasons {
        println!("    {reason}");
    }
}
