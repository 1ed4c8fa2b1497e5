//! Chart math for the cross-entropy explorer, kept free of UI types so it
//! can be unit-tested directly.

/// Visible loss axis range. The curve and the clamp both use it.
pub const LOSS_MIN: f64 = 0.0;
pub const LOSS_MAX: f64 = 5.0;

/// Sampling step for the p = e^-x curve.
pub const CURVE_STEP: f64 = 0.01;

/// Valid range for the class count N.
pub const CLASSES_MIN: u32 = 2;
pub const CLASSES_MAX: u32 = 100_000;

/// Target probabilities marked with static dashed reference lines.
pub const TARGET_PROB_REFS: [f64; 3] = [0.9, 0.8, 0.7];

/// Values derived from one pointer position over the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSample {
    /// Loss x, clamped to the visible axis.
    pub loss: f64,
    /// p = e^-x, the probability assigned to the true class.
    pub target_prob: f64,
    /// (1 - p) / (N - 1), uniform-remainder average over the other classes.
    pub others_avg: f64,
}

impl HoverSample {
    /// Evaluate the cross-hair at a raw pointer x. `num_classes` >= 2 is
    /// guaranteed by the spinner range, so the division is always defined.
    pub fn at(raw_loss: f64, num_classes: u32) -> Self {
        let loss = raw_loss.clamp(LOSS_MIN, LOSS_MAX);
        let target_prob = (-loss).exp();
        let others_avg = (1.0 - target_prob) / (num_classes - 1) as f64;
        Self {
            loss,
            target_prob,
            others_avg,
        }
    }

    /// Tooltip lines, each value to 4 decimal places.
    pub fn tooltip_lines(&self) -> [(&'static str, String); 3] {
        [
            ("Loss:", format!("{:.4}", self.loss)),
            ("Target Prob:", format!("{:.4}", self.target_prob)),
            ("Others Avg Prob:", format!("{:.4}", self.others_avg)),
        ]
    }
}

/// Loss at which a uniform random guess lands: -ln(1/N) = ln(N).
pub fn random_guess_loss(num_classes: u32) -> f64 {
    (num_classes as f64).ln()
}

/// The fixed curve p = e^-x over [LOSS_MIN, LOSS_MAX], endpoints included.
pub fn loss_curve() -> Vec<[f64; 2]> {
    let steps = ((LOSS_MAX - LOSS_MIN) / CURVE_STEP).round() as usize;
    (0..=steps)
        .map(|i| {
            let x = LOSS_MIN + i as f64 * CURVE_STEP;
            [x, (-x).exp()]
        })
        .collect()
}

/// Endpoints of a vertical reference segment from y=0 to y=1 at the given
/// loss. For x beyond LOSS_MAX the segment is still built; the plot clips it.
pub fn vertical_segment(x: f64) -> Vec<[f64; 2]> {
    vec![[x, 0.0], [x, 1.0]]
}

/// Loss values of the static target-probability references.
pub fn target_ref_losses() -> [f64; 3] {
    TARGET_PROB_REFS.map(|p| -p.ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn random_guess_loss_is_ln_n() {
        for n in [CLASSES_MIN, 3, 10, 1000, CLASSES_MAX] {
            let x = random_guess_loss(n);
            assert!(close(x, (n as f64).ln()));
            assert!(x >= 2f64.ln());
        }
    }

    #[test]
    fn random_guess_loss_max_n_is_off_axis_but_finite() {
        let x = random_guess_loss(CLASSES_MAX);
        assert!((x - 11.5129).abs() < 1e-4);
        assert!(x > LOSS_MAX);
        // Building the segment for an off-axis baseline must not panic.
        let seg = vertical_segment(x);
        assert_eq!(seg, vec![[x, 0.0], [x, 1.0]]);
    }

    #[test]
    fn hover_clamps_raw_loss_to_axis() {
        assert!(close(HoverSample::at(7.2, 2).loss, 5.0));
        assert!(close(HoverSample::at(-3.0, 2).loss, 0.0));
        assert!(close(HoverSample::at(2.5, 2).loss, 2.5));
    }

    #[test]
    fn hover_probability_stays_in_range() {
        for i in 0..=100 {
            let raw = -2.0 + i as f64 * 0.1; // sweeps past both clamp edges
            let s = HoverSample::at(raw, 7);
            assert!(s.target_prob <= 1.0 && s.target_prob >= (-5.0f64).exp());
            assert!(s.others_avg >= 0.0);
        }
    }

    #[test]
    fn hover_at_zero_loss_two_classes() {
        let s = HoverSample::at(0.0, 2);
        assert!(close(s.target_prob, 1.0));
        assert!(close(s.others_avg, 0.0));
    }

    #[test]
    fn hover_at_unit_loss_ten_classes() {
        let s = HoverSample::at(1.0, 10);
        assert!(close(s.target_prob, (-1.0f64).exp()));
        assert!(close(s.others_avg, (1.0 - (-1.0f64).exp()) / 9.0));
        let [(_, loss), (_, p), (_, others)] = s.tooltip_lines();
        assert_eq!(loss, "1.0000");
        assert_eq!(p, "0.3679");
        assert_eq!(others, "0.0702");
    }

    #[test]
    fn curve_spans_axis_and_decreases() {
        let curve = loss_curve();
        let first = curve.first().unwrap();
        let last = curve.last().unwrap();
        assert!(close(first[0], LOSS_MIN) && close(first[1], 1.0));
        assert!(close(last[0], LOSS_MAX) && close(last[1], (-LOSS_MAX).exp()));
        for w in curve.windows(2) {
            assert!(w[1][1] < w[0][1]);
        }
    }

    #[test]
    fn target_refs_match_their_probabilities() {
        let losses = target_ref_losses();
        for (x, p) in losses.iter().zip(TARGET_PROB_REFS) {
            assert!(close((-x).exp(), p));
            assert!(*x >= LOSS_MIN && *x <= LOSS_MAX);
        }
    }
}
