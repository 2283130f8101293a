// 数据处理模块
// clean -> transform -> validate -> enrich

mod metadata;
mod processor;
mod record;

pub use metadata::{MetadataSource, StaticMetadata};
pub use processor::RecordPipeline;
pub use record::{REQUIRED_FIELDS, Record, record_id_key};
