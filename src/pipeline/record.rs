use serde_json::{Map, Value};

/// 一条待处理的记录：字段名到任意 JSON 值
pub type Record = Map<String, Value>;

/// 校验阶段要求的字段
pub const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "email"];

/// 2^53，超过后 f64 不能精确表示整数
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// 去重用的 id 键
///
/// 整数值的浮点数与对应整数视为同一个 id（`1` 和 `1.0`）；
/// 数字和字符串仍然不同（`1` 和 `"1"`）。
pub fn record_id_key(record: &Record) -> Option<String> {
    let id = record.get("id")?;
    let key = match id {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INT => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    };
    Some(key)
}
