use std::process::ExitCode;

use gnb::{Classifier, NormalizationStrategy, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let strategy = std::env::args().nth(1).unwrap_or_else(|| "none".to_string());

    match run(&strategy) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(strategy: &str) -> Result<()> {
    let strategy: NormalizationStrategy = strategy.parse()?;
    let model = sample().normalize(strategy)?.fit()?;

    if let Some(fit) = model.fit_result() {
        for (label, class) in fit {
            info!(
                label = %label,
                samples = class.count,
                dimensions = ?class.dimensions,
                "label statistics"
            );
        }
    }

    for ((actual, predicted), n) in model.confusion()? {
        info!(%actual, %predicted, n, "replay");
    }

    println!("strategy: {strategy}");
    println!("accuracy: {:.6}", model.score()?);

    for (label, vectors) in model.dataset() {
        if let Some(first) = vectors.first() {
            let (predicted, score) = model.predict(first)?;
            println!("{label} {first:?} -> {predicted} ({score:.6e})");
        }
    }

    Ok(())
}

/// Two overlapping clusters; the outlier under "short" lands in "tall".
fn sample() -> Classifier<&'static str> {
    Classifier::new()
        .add_train_data("short", vec![150.0, 50.0])
        .add_train_data("short", vec![155.0, 55.0])
        .add_train_data("short", vec![160.0, 52.0])
        .add_train_data("short", vec![185.0, 80.0])
        .add_train_data("tall", vec![180.0, 78.0])
        .add_train_data("tall", vec![185.0, 82.0])
        .add_train_data("tall", vec![190.0, 85.0])
}
