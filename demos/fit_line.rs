use gradfit::{Dataset, TrainingConfig, gradient, metrics, train};

fn main() -> gradfit::Result<()> {
    println!("=== Gradient Descent Line Fit ===\n");

    // y = 2x + 3 with a little noise
    let mut data = Dataset::new();
    for (x, y) in [(1, 5), (2, 7), (3, 9), (4, 11), (5, 14), (6, 15)] {
        data.push(x, y);
    }

    let config = TrainingConfig::default()
        .with_learning_rate(0.02)
        .with_iterations(20_000)
        .with_log_every(4_000);

    let (params, records) = train(&data, &config)?;

    println!("Progress:");
    for record in &records {
        println!("  {record}");
    }

    let grad = gradient(data.x(), data.y(), &params)?;
    println!("\nResults:");
    println!("Weight: {:.4}", params.w);
    println!("Bias: {:.4}", params.b);
    println!("MSE: {:.4}", metrics::mean_squared_error(&data, &params)?);
    println!("R² score: {:.4}", metrics::r2_score(&data, &params)?);
    println!("Remaining gradient: dw={:.2e} db={:.2e}", grad.dw, grad.db);

    println!("\nPredictions on new data:");
    for x in [7.0, 8.0] {
        println!("X={x:.1}: Predicted y={:.2}", params.predict(x));
    }

    Ok(())
}
