//! Linear tick location

const AUTO_BINS: u32 = 8;
const AUTO_STEPS: &[f64] = &[1.0, 2.0, 2.5, 5.0];
const MAX_TICKS: i64 = 4 * AUTO_BINS as i64;

/// Ticks of a linear axis spanning `start..=end`, and the step between them.
///
/// Ticks are multiples of the step, chosen among `{1, 2, 2.5, 5} × 10^n`
/// so that the span holds at most about 8 intervals.
/// Returns no tick if the span is empty, not finite, or too narrow to be
/// divided in normal floating point steps.
pub fn locate(start: f64, end: f64) -> (Vec<f64>, f64) {
    let span = end - start;
    if !(span.is_finite() && span > 0.0) {
        return (Vec::new(), 0.0);
    }
    let target_step = span / AUTO_BINS as f64;

    // getting quite about where we need to be
    let scale = 10f64.powf(target_step.log10().div_euclid(1.0));
    if !(target_step.is_normal() && scale.is_normal()) {
        return (Vec::new(), 0.0);
    }

    let step = {
        let mut stepper = Stepper::new(AUTO_STEPS, scale);
        while stepper.step() > target_step {
            stepper.next_smaller();
        }
        while stepper.step() < target_step {
            stepper.next_bigger();
        }
        stepper.step()
    };

    let first = (start / step - 1e-9).ceil() as i64;
    let last = (end / step + 1e-9).floor() as i64;
    if last.saturating_sub(first) > MAX_TICKS {
        return (Vec::new(), 0.0);
    }
    let ticks = (first..=last).map(|i| snap_zero(i as f64 * step)).collect();
    (ticks, step)
}

/// Format a tick value with the number of decimals required by `step`
pub fn format(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10()).ceil() as usize
    } else {
        0
    };
    // 2.5 multiples need one more decimal
    let decimals = if is_close((step * 10f64.powi(decimals as i32)).fract(), 0.0) {
        decimals
    } else {
        decimals + 1
    };
    format!("{:.*}", decimals, snap_zero(value))
}

fn snap_zero(value: f64) -> f64 {
    if value.abs() < 1e-12 { 0.0 } else { value }
}

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[derive(Debug, Clone, Copy)]
struct Stepper<'a> {
    steps: &'a [f64],
    idx: usize,
    scale: f64,
}

impl<'a> Stepper<'a> {
    fn new(steps: &'a [f64], scale: f64) -> Self {
        Stepper {
            steps,
            scale,
            idx: 0,
        }
    }

    fn step(&self) -> f64 {
        self.steps[self.idx] * self.scale
    }

    fn next_smaller(&mut self) {
        if self.idx == 0 {
            self.idx = self.steps.len();
            self.scale *= 0.1;
        }
        self.idx -= 1;
    }

    fn next_bigger(&mut self) {
        self.idx += 1;
        if self.idx == self.steps.len() {
            self.idx = 0;
            self.scale *= 10.0;
        }
    }
}
