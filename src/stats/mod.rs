//! 数值样本的汇总统计

/// 汇总统计结果
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub mean: f64,
    pub median: f64,
    /// 样本标准差（n - 1），单个样本时为 0
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// 计算均值、中位数、标准差、最小值、最大值和样本数，空输入返回 None
pub fn calculate_metrics(values: &[f64]) -> Option<Metrics> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let std_dev = if count > 1 {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    Some(Metrics {
        mean,
        median,
        std_dev,
        min: sorted[0],
        max: sorted[count - 1],
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_metrics() {
        assert_eq!(calculate_metrics(&[]), None);
    }

    #[test]
    fn single_value() {
        let metrics = calculate_metrics(&[4.0]).unwrap();

        assert_eq!(metrics.mean, 4.0);
        assert_eq!(metrics.median, 4.0);
        assert_eq!(metrics.std_dev, 0.0);
        assert_eq!(metrics.count, 1);
    }

    #[test]
    fn odd_sample() {
        let metrics = calculate_metrics(&[3.0, 1.0, 2.0]).unwrap();

        assert_eq!(metrics.mean, 2.0);
        assert_eq!(metrics.median, 2.0);
        assert_eq!(metrics.std_dev, 1.0);
        assert_eq!(metrics.min, 1.0);
        assert_eq!(metrics.max, 3.0);
    }

    #[test]
    fn even_sample_median_is_midpoint() {
        let metrics = calculate_metrics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

        assert_eq!(metrics.median, 4.5);
        assert_eq!(metrics.mean, 5.0);
        assert!((metrics.std_dev - 2.138_089_935_299_395).abs() < 1e-12);
        assert_eq!(metrics.count, 8);
    }
}
