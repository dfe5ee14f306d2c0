//! Optional JSON configuration for the generator.
//!
//! Every field defaults to the built-in constants, so a config file only
//! needs the knobs it changes:
//!
//! ```json
//! { "edge": { "high_threshold": 150.0 } }
//! ```
use crate::contours::TraceParams;
use crate::edges::EdgeParams;
use crate::emit::NetworkParams;
use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Knobs for all pipeline stages, in processing order.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    pub edge: EdgeParams,
    pub trace: TraceParams,
    pub network: NetworkParams,
}

/// Load parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<GeneratorParams, Error> {
    let data = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    serde_json::from_str(&data).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_constants() {
        let params = GeneratorParams::default();
        assert_eq!(params.edge.low_threshold, 100.0);
        assert_eq!(params.edge.high_threshold, 200.0);
        assert_eq!(params.trace.binarize_threshold, 40);
        assert_eq!(params.network.capacity, 36000);
        assert_eq!(params.network.capperiod, "01:00:00");
    }

    #[test]
    fn partial_json_keeps_unmentioned_defaults() {
        let params: GeneratorParams =
            serde_json::from_str(r#"{ "edge": { "high_threshold": 150.0 } }"#)
                .expect("valid config");
        assert_eq!(params.edge.high_threshold, 150.0);
        assert_eq!(params.edge.low_threshold, 100.0);
        assert_eq!(params.trace.binarize_threshold, 40);
    }
}
