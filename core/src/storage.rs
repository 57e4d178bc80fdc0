use crate::smoother::SmootherConfig;
use std::error::Error;
use std::path::Path;

/// Leser inn policy fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-policyen.
pub fn load_config(path: &str) -> Result<SmootherConfig, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg: SmootherConfig = serde_json::from_str(&contents)?;
        println!(
            "📂 Policy lastet fra {} (terskel={}, gulv={})",
            path, cfg.threshold_factor, cfg.stdev_floor
        );
        Ok(cfg)
    } else {
        println!(
            "⚠️ Fant ikke policy på {}, bruker default (terskel=3.0)",
            path
        );
        Ok(SmootherConfig::default())
    }
}

/// Lagrer policy til disk som JSON (pretty-print).
pub fn save_config(cfg: &SmootherConfig, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    println!(
        "✅ Policy lagret til {} (terskel={})",
        path, cfg.threshold_factor
    );
    Ok(())
}
