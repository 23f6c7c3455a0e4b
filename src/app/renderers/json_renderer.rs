use crate::core::report::DtiReport;
use crate::core::{DtiResult, ResultRenderer};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl ResultRenderer for JsonRenderer {
    fn render(&self, result: &DtiResult) -> Result<String> {
        let report = DtiReport::new(result);
        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }
}
