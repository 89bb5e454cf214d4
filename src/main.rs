//! Headless entrypoint: scores one input vector and prints one JSON line.
//!
//! Usage: `sugeno-risk [request_count security_level anomalous_volume]`.
//! Without arguments the front end's default slider positions are scored.

use std::io::Write;
use sugeno_risk::{
    config::EngineConfig,
    logging::{AssessmentLog, StructuredLogger},
    Error, InputVector, RiskEngine,
};
use tracing::info;

fn parse_value(name: &str, raw: &str) -> Result<f64, Error> {
    raw.parse::<f64>()
        .map_err(|e| Error::InvalidInput(format!("{}: {:?}: {}", name, raw, e)))
}

fn parse_inputs(args: &[String]) -> Result<InputVector, Error> {
    match args {
        [] => Ok(InputVector::default()),
        [rc, sl, av] => Ok(InputVector::new(
            parse_value("request_count", rc)?,
            parse_value("security_level", sl)?,
            parse_value("anomalous_volume", av)?,
        )),
        _ => Err(Error::InvalidInput(format!(
            "expected 0 or 3 arguments, got {}",
            args.len()
        ))),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("SUGENO_RISK_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = EngineConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = parse_inputs(&args)?;
    if !inputs.in_domain() {
        info!(?inputs, "inputs outside nominal domains");
    }

    let engine = RiskEngine::new(config.risk.clone());
    let assessment = engine.assess(inputs);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    StructuredLogger::emit_json(&AssessmentLog::from_assessment(&assessment), &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_uses_defaults() {
        assert_eq!(parse_inputs(&[]).unwrap(), InputVector::default());
    }

    #[test]
    fn three_numbers() {
        let inputs = parse_inputs(&args(&["400", "3", "150.5"])).unwrap();
        assert_eq!(inputs, InputVector::new(400.0, 3.0, 150.5));
    }

    #[test]
    fn rejects_bad_arity_and_garbage() {
        assert!(matches!(
            parse_inputs(&args(&["1", "2"])),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_inputs(&args(&["1", "x", "3"])),
            Err(Error::InvalidInput(_))
        ));
    }
}
