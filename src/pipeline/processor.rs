use std::collections::HashSet;

use serde_json::Value;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::pipeline::{MetadataSource, REQUIRED_FIELDS, Record, StaticMetadata, record_id_key};
use crate::utils::now_iso8601;

/// ETL 记录处理流水线
///
/// 每次 [`process`](Self::process) 依次执行 clean、transform、validate、enrich，
/// 全部成功后才累加处理计数。去重只在单次调用内生效。
pub struct RecordPipeline<M = StaticMetadata> {
    config: PipelineConfig,
    metadata: M,
    processed_count: usize,
}

impl RecordPipeline<StaticMetadata> {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_metadata(config, StaticMetadata::default())
    }
}

impl<M: MetadataSource> RecordPipeline<M> {
    pub fn with_metadata(config: PipelineConfig, metadata: M) -> Self {
        Self {
            config,
            metadata,
            processed_count: 0,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// 历次成功处理输出的记录总数
    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    pub fn process(&mut self, records: Vec<Record>) -> Result<Vec<Record>, PipelineError> {
        let input = records.len();

        let cleaned = self.clean(records);
        let transformed = self.transform(cleaned)?;
        let validated = self.validate(transformed);
        let enriched = self.enrich(validated)?;

        self.processed_count += enriched.len();
        tracing::info!(
            "Processed {} of {} records (total {})",
            enriched.len(),
            input,
            self.processed_count
        );
        Ok(enriched)
    }

    /// 去掉空记录和本批次内 id 重复的记录（保留第一条）
    pub fn clean(&self, records: Vec<Record>) -> Vec<Record> {
        let mut seen_ids = HashSet::new();

        let cleaned: Vec<Record> = records
            .into_iter()
            .filter(|record| !record.is_empty())
            .filter(|record| match record_id_key(record) {
                Some(id) => seen_ids.insert(id),
                None => true,
            })
            .collect();

        tracing::debug!("clean kept {} records", cleaned.len());
        cleaned
    }

    /// 打上处理时间并生成 `normalized_name`
    pub fn transform(&self, records: Vec<Record>) -> Result<Vec<Record>, PipelineError> {
        records
            .into_iter()
            .map(|mut record| -> Result<Record, PipelineError> {
                let normalized = normalize_name(record.get("name"))?;
                record.insert("processed_at".into(), Value::String(now_iso8601()));
                record.insert("normalized_name".into(), Value::String(normalized));
                Ok(record)
            })
            .collect()
    }

    /// 只保留包含全部必填字段的记录
    pub fn validate(&self, records: Vec<Record>) -> Vec<Record> {
        let valid: Vec<Record> = records.into_iter().filter(is_valid_record).collect();

        tracing::debug!("validate kept {} records", valid.len());
        valid
    }

    pub fn enrich(&self, records: Vec<Record>) -> Result<Vec<Record>, PipelineError> {
        records
            .into_iter()
            .map(|mut record| -> Result<Record, PipelineError> {
                let record_id = record.get("id").cloned().unwrap_or(Value::Null);
                let metadata = self.metadata.fetch(&record_id)?;
                record.insert("enriched".into(), Value::Bool(true));
                record.insert("metadata".into(), Value::Object(metadata));
                Ok(record)
            })
            .collect()
    }
}

fn normalize_name(name: Option<&Value>) -> Result<String, PipelineError> {
    match name {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(name)) => Ok(name.trim().to_lowercase()),
        Some(_) => Err(PipelineError::InvalidField {
            field: "name".into(),
            expected: "a string",
        }),
    }
}

fn is_valid_record(record: &Record) -> bool {
    REQUIRED_FIELDS.iter().all(|field| record.contains_key(*field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn pipeline() -> RecordPipeline {
        RecordPipeline::new(PipelineConfig::default())
    }

    #[test]
    fn clean_drops_empty_and_duplicate_ids() {
        let cleaned = pipeline().clean(vec![
            record(json!({})),
            record(json!({"id": 1, "name": "A", "email": "a@x.com"})),
            record(json!({"id": 1, "name": "A2", "email": "a2@x.com"})),
        ]);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0]["name"], json!("A"));
    }

    #[test]
    fn clean_treats_number_and_string_ids_as_distinct() {
        let cleaned = pipeline().clean(vec![
            record(json!({"id": 1})),
            record(json!({"id": "1"})),
        ]);
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn clean_treats_integral_float_id_as_duplicate() {
        let cleaned = pipeline().clean(vec![
            record(json!({"id": 1, "name": "first"})),
            record(json!({"id": 1.0, "name": "second"})),
        ]);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0]["name"], json!("first"));
    }

    #[test]
    fn clean_keeps_records_without_id() {
        let cleaned = pipeline().clean(vec![
            record(json!({"name": "no id"})),
            record(json!({"name": "also no id"})),
        ]);
        assert_eq!(cleaned.len(), 2);
    }

    #[rstest]
    #[case::padded(json!({"name": "  Bob  "}), "bob")]
    #[case::mixed_case(json!({"name": "Product A"}), "product a")]
    #[case::absent(json!({"id": 7}), "")]
    #[case::null(json!({"name": null}), "")]
    fn transform_normalizes_name(#[case] input: Value, #[case] expected: &str) {
        let out = pipeline().transform(vec![record(input)]).unwrap();

        assert_eq!(out[0]["normalized_name"], json!(expected));
        assert!(out[0]["processed_at"].is_string());
    }

    #[test]
    fn transform_rejects_non_string_name() {
        let err = pipeline()
            .transform(vec![record(json!({"name": 42}))])
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidField { .. }));
    }

    #[rstest]
    #[case::complete(json!({"id": 1, "name": "A", "email": "a@x.com"}), true)]
    #[case::missing_email(json!({"id": 1, "name": "A"}), false)]
    #[case::missing_name(json!({"id": 1, "email": "a@x.com"}), false)]
    #[case::missing_id(json!({"name": "A", "email": "a@x.com"}), false)]
    #[case::null_values_still_present(json!({"id": null, "name": null, "email": null}), true)]
    fn validate_requires_fields(#[case] input: Value, #[case] kept: bool) {
        let out = pipeline().validate(vec![record(input)]);
        assert_eq!(out.len() == 1, kept);
    }

    #[test]
    fn enrich_attaches_metadata() {
        let out = pipeline()
            .enrich(vec![record(json!({"id": 3}))])
            .unwrap();

        assert_eq!(out[0]["enriched"], json!(true));
        assert_eq!(out[0]["metadata"], json!({"source": "api", "version": "1.0"}));
    }

    #[test]
    fn process_counts_survivors() {
        let mut pipeline = pipeline();
        let out = pipeline
            .process(vec![
                record(json!({"id": 1, "name": "A", "email": "a@x.com"})),
                record(json!({"id": 2, "name": "B"})),
            ])
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(pipeline.processed_count(), 1);
    }
}
