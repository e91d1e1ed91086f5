use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use fire_detect_core::{
    export_filename, summarize, to_csv_string, CorrelationMatrix, DetectionSession,
    FilterCriteria, FireClassification, GridConfig, GridPoint, MapMetric, MarkerStyle,
};
use std::fs;
use std::path::PathBuf;

/// Fire detection dashboard demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "fire-detect-demo")]
#[command(about = "Headless fire detection dashboard session", long_about = None)]
struct Args {
    /// RNG seed for the synthetic detection grid
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Minimum anomaly score threshold (inclusive)
    #[arg(short, long, default_value_t = 0.0)]
    min_anomaly: f64,

    /// Classification filter (fire, non-fire, all)
    #[arg(short, long, default_value = "all")]
    classification: String,

    /// Map metric to prepare the heat layer for (anomaly-score, fire-probability, confidence)
    #[arg(long, default_value = "anomaly-score")]
    metric: String,

    /// Number of table rows to print
    #[arg(short, long, default_value_t = 10)]
    rows: usize,

    /// Write the filtered table as CSV to this directory
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Save the session table as a JSON snapshot to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("=== Fire Detection Dashboard Demo ===\n");

    let config = GridConfig {
        seed: args.seed,
        ..GridConfig::default()
    };
    let session = DetectionSession::new(config);
    println!(
        "Generated {} grid points around ({:.4}, {:.4}), seed {}",
        session.points().len(),
        session.config().center.x,
        session.config().center.y,
        args.seed
    );

    let classifications = match args.classification.to_lowercase().as_str() {
        "fire" => vec![FireClassification::Fire],
        "non-fire" | "nonfire" => vec![FireClassification::NonFire],
        "all" => FireClassification::ALL.to_vec(),
        other => {
            println!("Unknown classification filter '{other}', using all");
            FireClassification::ALL.to_vec()
        }
    };
    let criteria = FilterCriteria {
        min_anomaly: args.min_anomaly,
        classifications,
    };
    let filtered = session.filtered(&criteria);
    println!(
        "Filter: min anomaly {:.2}, {} -> {} of {} points\n",
        criteria.min_anomaly,
        args.classification,
        filtered.len(),
        session.points().len()
    );

    print_metrics(&filtered);
    print_temporal(&filtered);
    print_correlation(&fire_detect_core::correlation_matrix(&filtered));
    print_table(&filtered, args.rows);
    print_heat_layer_info(&filtered, &args.metric);

    if let Some(dir) = &args.export_dir {
        let path = dir.join(export_filename(Utc::now()));
        fs::write(&path, to_csv_string(&filtered)?)?;
        println!("\nExported {} rows to {}", filtered.len(), path.display());
    }

    if let Some(path) = &args.snapshot {
        session.save_snapshot(path)?;
        println!("\nSaved session snapshot to {}", path.display());
    }

    Ok(())
}

fn print_metrics(points: &[GridPoint]) {
    let metrics = summarize(points);
    println!("--- Metrics Summary ---");
    println!(
        "Fire detections:     {} ({:.1}% of total)",
        metrics.fire_count,
        metrics.fire_ratio * 100.0
    );
    println!(
        "Average anomaly:     {:.3} (max: {:.3})",
        metrics.avg_anomaly, metrics.max_anomaly
    );
    println!(
        "High-confidence fire: {} ({:.1}% of fires)",
        metrics.high_conf_fire,
        metrics.high_conf_ratio() * 100.0
    );
    println!("Analyzed points:     {}\n", metrics.total_count);
}

fn print_temporal(points: &[GridPoint]) {
    println!("--- Temporal Pattern (mean score) ---");
    for entry in fire_detect_core::temporal_profile(points) {
        println!(
            "{:>11} | {:<8} | {:.3} ({} points)",
            entry.period.as_str(),
            entry.classification.as_str(),
            entry.mean_score,
            entry.count
        );
    }
    println!();
}

fn print_correlation(matrix: &CorrelationMatrix) {
    println!("--- Score Correlations ---");
    let labels = CorrelationMatrix::labels();
    print!("{:>16}", "");
    for label in labels {
        print!(" {label:>16}");
    }
    println!();
    for (i, row_label) in labels.iter().enumerate() {
        print!("{row_label:>16}");
        for j in 0..labels.len() {
            print!(" {:>16.3}", matrix.get(i, j));
        }
        println!();
    }
    println!();
}

fn print_table(points: &[GridPoint], rows: usize) {
    println!("--- Detection Table (first {rows} rows) ---");
    println!(
        "{:<8} {:>9} {:>10} {:>8} {:>8} {:<8} {:>6}",
        "grid_id", "lat", "lon", "anomaly", "prob", "class", "conf"
    );
    for point in points.iter().take(rows) {
        let style = MarkerStyle::for_point(point);
        println!(
            "{:<8} {:>9.4} {:>10.4} {:>8.4} {:>8.4} {:<8} {:>6.2} [{}]",
            point.grid_id,
            point.lat,
            point.lon,
            *point.anomaly_score,
            *point.fire_probability,
            point.fire_classification.as_str(),
            *point.confidence,
            style.color
        );
    }
    println!();
}

fn print_heat_layer_info(points: &[GridPoint], metric_name: &str) {
    let metric = match metric_name.to_lowercase().as_str() {
        "fire-probability" => MapMetric::FireProbability,
        "confidence" => MapMetric::Confidence,
        "anomaly-score" => MapMetric::AnomalyScore,
        other => {
            println!("Unknown metric '{other}', using anomaly-score");
            MapMetric::AnomalyScore
        }
    };

    let layer = fire_detect_core::heat_layer(points, metric);
    let peak = layer.iter().map(|t| t[2]).fold(0.0_f64, f64::max);
    println!(
        "--- Heat Layer: {} ({} colormap) ---",
        metric.label(),
        metric.colormap()
    );
    println!("{} triples prepared, peak intensity {peak:.3}", layer.len());
}
