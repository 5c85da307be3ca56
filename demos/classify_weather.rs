//! Classify a small mixed-attribute weather dataset.
//!
//! Run with `RUST_LOG=debug cargo run --example classify_weather` to see the
//! training summary the library logs.

use anyhow::Result;

use vicinity::config::{KnnConfig, Metric, Weighting};
use vicinity::instance::{AttributeValue, Instance};
use vicinity::knn::KnnClassifier;

fn row(outlook: &str, temperature: f64, humidity: f64, windy: &str, play: &str) -> Instance {
    vec![
        AttributeValue::from(outlook),
        AttributeValue::from(temperature),
        AttributeValue::from(humidity),
        AttributeValue::from(windy),
        AttributeValue::from(play),
    ]
}

fn main() -> Result<()> {
    env_logger::init();

    let training = vec![
        row("sunny", 29.0, 85.0, "false", "no"),
        row("sunny", 27.0, 90.0, "true", "no"),
        row("overcast", 28.0, 78.0, "false", "yes"),
        row("rainy", 21.0, 96.0, "false", "yes"),
        row("rainy", 20.0, 80.0, "false", "yes"),
        row("rainy", 18.0, 70.0, "true", "no"),
        row("overcast", 18.0, 65.0, "true", "yes"),
        row("sunny", 22.0, 95.0, "false", "no"),
        row("sunny", 21.0, 70.0, "false", "yes"),
        row("rainy", 24.0, 80.0, "false", "yes"),
        row("sunny", 24.0, 70.0, "true", "yes"),
        row("overcast", 22.0, 90.0, "true", "yes"),
        row("overcast", 27.0, 75.0, "false", "yes"),
        row("rainy", 22.0, 91.0, "true", "no"),
    ];

    // temperature and humidity live on different scales, so normalize
    let config = KnnConfig::new(3, Metric::Euclidean, Weighting::InverseDistance, true);
    let mut classifier = KnnClassifier::new(config);
    classifier.learn_model(training, 4)?;

    let queries = vec![
        row("sunny", 25.0, 72.0, "false", "?"),
        row("rainy", 19.0, 95.0, "true", "?"),
        row("overcast", 23.0, 80.0, "false", "?"),
    ];

    for query in &queries {
        let label = classifier.classify_instance(query)?;
        let votes = classifier.votes_for(query)?;
        println!(
            "outlook={} temperature={} humidity={} windy={} -> play={}",
            query[0], query[1], query[2], query[3], label
        );
        for (candidate, share) in votes {
            println!("    {}: {:.3}", candidate, share);
        }
    }

    let predictions = classifier.classify_batch(&queries)?;
    println!("batch: {} predictions", predictions.len());

    Ok(())
}
