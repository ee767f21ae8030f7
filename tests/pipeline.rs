//! End-to-end run over a synthetic sample table: load, correlate, search
//! on a grid, write outputs, check the order-file contract.

use std::fs;
use std::path::{Path, PathBuf};

use ledlayout::core::anneal::AnnealParams;
use ledlayout::core::correlation::CorrelationMatrix;
use ledlayout::core::energy::EnergyFunction;
use ledlayout::core::multistart;
use ledlayout::core::report;
use ledlayout::core::samples::SampleMatrix;
use ledlayout::core::topology::Topology;
use rand::{Rng, SeedableRng};

fn unique_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "ledlayout_pipeline_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

/// 2x3 grid worth of channels with correlated pairs baked in: channel
/// 2k+1 is a noisy copy of channel 2k.
fn synthetic_table(rows: usize, seed: u64) -> String {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for _ in 0..rows {
        let mut fields = Vec::new();
        for _ in 0..3 {
            let base: f64 = rng.random_range(-1.0..1.0);
            let noise: f64 = rng.random_range(-0.05..0.05);
            fields.push(format!("{base}"));
            fields.push(format!("{}", base + noise));
        }
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

#[test]
fn grid_pipeline_produces_a_valid_order_file() {
    let samples_path = unique_path("samples");
    fs::write(&samples_path, synthetic_table(200, 8)).unwrap();

    let samples = SampleMatrix::load(&samples_path, ',').unwrap();
    assert_eq!(samples.rows(), 200);
    assert_eq!(samples.channels(), 6);

    let correlations = CorrelationMatrix::from_samples(&samples).unwrap();
    let pairs = correlations.sorted_pairs();
    assert_eq!(pairs.len(), 6 * 5 / 2);

    let corr_path = unique_path("sorted");
    report::write_sorted_correlations(&corr_path, &pairs).unwrap();

    let topology = Topology::grid2d(2, 3, 1);
    let energy = EnergyFunction::new(&correlations, &topology);
    let params = AnnealParams {
        steps: 5000,
        ..AnnealParams::default()
    };
    let outcome = multistart::run(&energy, &params, 3, 2).unwrap();

    let order_path = unique_path("order");
    report::write_order(&order_path, &outcome.order).unwrap();

    // The order file is a bijection over 0..D-1, one index per line.
    let text = fs::read_to_string(&order_path).unwrap();
    let mut channels: Vec<usize> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(channels.len(), 6);
    channels.sort();
    assert_eq!(channels, vec![0, 1, 2, 3, 4, 5]);

    for p in [&samples_path, &corr_path, &order_path] {
        fs::remove_file(p).unwrap();
    }
}

#[test]
fn constant_column_never_reaches_the_search() {
    let samples_path = unique_path("constant");
    fs::write(&samples_path, "1.0,5.0\n2.0,5.0\n3.0,5.0\n").unwrap();
    let samples = SampleMatrix::load(&samples_path, ',').unwrap();
    assert!(CorrelationMatrix::from_samples(&samples).is_err());
    fs::remove_file(&samples_path).unwrap();
}

#[test]
fn missing_input_is_an_io_error() {
    let err = SampleMatrix::load(Path::new("/nonexistent_dir/samples.csv"), ',').unwrap_err();
    assert!(matches!(err, ledlayout::error::RunError::Io { .. }));
}
