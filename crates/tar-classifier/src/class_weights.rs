/// Per-sample weights `n / (2 · n_class)` so both classes carry equal total
/// weight. Returns all-ones when either class is absent.
pub fn balanced_class_weights(labels: &[bool]) -> Vec<f64> {
    let n = labels.len() as f64;
    let positives = labels.iter().filter(|&&l| l).count() as f64;
    let negatives = n - positives;
    if positives == 0.0 || negatives == 0.0 {
        return vec![1.0; labels.len()];
    }
    let w_pos = n / (2.0 * positives);
    let w_neg = n / (2.0 * negatives);
    labels
        .iter()
        .map(|&l| if l { w_pos } else { w_neg })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minority_class_is_upweighted() {
        let w = balanced_class_weights(&[true, false, false, false]);
        assert_eq!(w, vec![2.0, 2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0]);
    }

    #[test]
    fn balanced_labels_get_unit_weight() {
        let w = balanced_class_weights(&[true, false, true, false]);
        assert!(w.iter().all(|&x| (x - 1.0).abs() < 1e-12));
    }

    #[test]
    fn class_totals_are_equal() {
        let labels = [true, true, false, false, false, false, false];
        let w = balanced_class_weights(&labels);
        let pos: f64 = labels.iter().zip(&w).filter(|(l, _)| **l).map(|(_, w)| w).sum();
        let neg: f64 = labels.iter().zip(&w).filter(|(l, _)| !**l).map(|(_, w)| w).sum();
        assert!((pos - neg).abs() < 1e-12);
    }
}
