use anyhow::{Context, Result};
use serde::Serialize;

/// Blasius similarity constant for the 99 % thickness: δ = 4.91 x / √Re_x.
const DELTA99_COEFF: f64 = 4.91;

const NU_COUNT: usize = 10;
const U_INF_COUNT: usize = 20;
const X_COUNT: usize = 200;
const X_END: f64 = 5.0;

#[derive(Serialize)]
struct Row {
    nu: f64,
    #[serde(rename = "uInf")]
    u_inf: f64,
    x: f64,
    #[serde(rename = "reX")]
    re_x: f64,
    delta99: f64,
}

/// ν log-spaced over two decades, 1e-6 .. 1e-4 m²/s.
fn viscosities() -> Vec<f64> {
    (0..NU_COUNT)
        .map(|i| 10f64.powf(-6.0 + 2.0 * i as f64 / (NU_COUNT - 1) as f64))
        .collect()
}

/// U∞ = 1 .. 20 m/s.
fn velocities() -> Vec<f64> {
    (1..=U_INF_COUNT).map(|u| u as f64).collect()
}

/// Stations x = Δx .. X_END, excluding the leading-edge singularity.
fn stations() -> Vec<f64> {
    let dx = X_END / X_COUNT as f64;
    (1..=X_COUNT).map(|i| i as f64 * dx).collect()
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "blasius_40000_boundary_layers.csv".to_string());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let xs = stations();
    let mut rows = 0usize;
    for nu in viscosities() {
        for u_inf in velocities() {
            for &x in &xs {
                let re_x = u_inf * x / nu;
                writer.serialize(Row {
                    nu,
                    u_inf,
                    x,
                    re_x,
                    delta99: DELTA99_COEFF * x / re_x.sqrt(),
                })?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {rows} rows ({NU_COUNT} ν × {U_INF_COUNT} U∞ × {X_COUNT} x) to {output_path}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_forty_thousand_rows() {
        assert_eq!(viscosities().len() * velocities().len() * stations().len(), 40_000);
    }

    #[test]
    fn viscosity_range_spans_two_decades() {
        let nu = viscosities();
        assert!((nu[0] - 1e-6).abs() < 1e-18);
        assert!((nu[NU_COUNT - 1] - 1e-4).abs() < 1e-16);
        assert!(nu.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stations_end_at_plate_length() {
        let xs = stations();
        assert!(xs[0] > 0.0);
        assert!((xs[X_COUNT - 1] - X_END).abs() < 1e-12);
    }
}
