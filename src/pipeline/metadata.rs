use serde_json::{Value, json};

use crate::error::PipelineError;
use crate::pipeline::Record;

/// 外部元数据来源
pub trait MetadataSource {
    fn fetch(&self, record_id: &Value) -> Result<Record, PipelineError>;
}

/// 固定返回 `{source, version}` 的元数据桩
#[derive(Debug, Clone)]
pub struct StaticMetadata {
    pub source: String,
    pub version: String,
}

impl Default for StaticMetadata {
    fn default() -> Self {
        Self {
            source: "api".into(),
            version: "1.0".into(),
        }
    }
}

impl MetadataSource for StaticMetadata {
    fn fetch(&self, _record_id: &Value) -> Result<Record, PipelineError> {
        let mut metadata = Record::new();
        metadata.insert("source".into(), json!(self.source));
        metadata.insert("version".into(), json!(self.version));
        Ok(metadata)
    }
}
