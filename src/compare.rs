use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::analyzer::{analyze_with, AnalysisConfig};
use crate::error::Result;
use crate::metrics::round_to;
use crate::types::{
    ComparisonReport, Metric, MetricSet, NormalizedMetrics, NormalizedValues, Upload,
};

/// Rescale each metric against its own A/B pair.
///
/// The smaller value maps to 0.0 and the larger to 1.0, rounded to three
/// decimals. A metric on which both genomes agree maps to 0.5 on both sides.
pub fn normalize(metrics_a: &MetricSet, metrics_b: &MetricSet) -> NormalizedMetrics {
    let mut a = [0.0; 7];
    let mut b = [0.0; 7];

    for (i, metric) in Metric::ALL.iter().enumerate() {
        let val_a = metrics_a.value(*metric);
        let val_b = metrics_b.value(*metric);
        let lo = val_a.min(val_b);
        let hi = val_a.max(val_b);

        if hi == lo {
            a[i] = 0.5;
            b[i] = 0.5;
        } else {
            a[i] = round_to((val_a - lo) / (hi - lo), 3);
            b[i] = round_to((val_b - lo) / (hi - lo), 3);
        }
    }

    NormalizedMetrics {
        genome_a_normalized: NormalizedValues(a),
        genome_b_normalized: NormalizedValues(b),
    }
}

/// Analyze two uploads on the rayon pool and normalize their metrics.
pub fn compare_genomes(
    genome_a: &Upload,
    genome_b: &Upload,
    config: &AnalysisConfig,
) -> Result<ComparisonReport> {
    info!("Comparing: {} vs {}", genome_a.filename, genome_b.filename);

    let style =
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
    let pb = ProgressBar::new(2);
    pb.set_style(style);
    pb.set_message("Analyzing genomes...");

    let analyze_one = |upload: &Upload| {
        info!("Analyzing {}...", upload.filename);
        let result = analyze_with(&upload.content, &upload.filename, config);
        pb.inc(1);
        result
    };
    let (genome_a, genome_b) = rayon::join(|| analyze_one(genome_a), || analyze_one(genome_b));
    pb.finish_and_clear();
    let (genome_a, genome_b) = (genome_a?, genome_b?);

    info!("Normalizing metrics for visualization...");
    let normalized_metrics = normalize(&genome_a.metrics, &genome_b.metrics);

    Ok(ComparisonReport {
        genome_a,
        genome_b,
        normalized_metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_set(size_bp: u64, gc_content: f64) -> MetricSet {
        MetricSet {
            size_bp,
            gc_content,
            at_content: round_to(100.0 - gc_content, 2),
            n_count: 0,
            cpg_count: 3,
            mol_weight: 1234.5,
            tm_wallace: 24.0,
        }
    }

    #[test]
    fn identical_metrics_are_all_half() {
        let m = metric_set(100, 42.0);
        let norm = normalize(&m, &m);
        for metric in Metric::ALL {
            assert_eq!(norm.genome_a_normalized.get(metric), 0.5);
            assert_eq!(norm.genome_b_normalized.get(metric), 0.5);
        }
    }

    #[test]
    fn same_size_different_gc() {
        let a = metric_set(1000, 40.0);
        let b = metric_set(1000, 60.0);
        let norm = normalize(&a, &b);
        assert_eq!(norm.genome_a_normalized.get(Metric::SizeBp), 0.5);
        assert_eq!(norm.genome_b_normalized.get(Metric::SizeBp), 0.5);
        assert_eq!(norm.genome_a_normalized.get(Metric::GcContent), 0.0);
        assert_eq!(norm.genome_b_normalized.get(Metric::GcContent), 1.0);
        assert_eq!(norm.genome_a_normalized.get(Metric::AtContent), 1.0);
        assert_eq!(norm.genome_b_normalized.get(Metric::AtContent), 0.0);
    }

    #[test]
    fn swapping_inputs_mirrors_output() {
        let a = metric_set(500, 33.33);
        let b = MetricSet {
            n_count: 7,
            ..metric_set(1500, 51.2)
        };
        let ab = normalize(&a, &b);
        let ba = normalize(&b, &a);
        assert_eq!(ab.genome_a_normalized, ba.genome_b_normalized);
        assert_eq!(ab.genome_b_normalized, ba.genome_a_normalized);
    }

    #[test]
    fn values_stay_in_unit_range() {
        let a = metric_set(3, 12.5);
        let b = MetricSet {
            mol_weight: 0.0,
            tm_wallace: 0.0,
            ..metric_set(7, 99.99)
        };
        let norm = normalize(&a, &b);
        for side in [norm.genome_a_normalized, norm.genome_b_normalized] {
            assert!(side.0.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }
}
