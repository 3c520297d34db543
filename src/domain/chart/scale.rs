//! Band and linear scales with the rounding rules of d3-scale.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Discrete band per item, evenly spread over a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is used for both the inner gaps and the outer edges, bands are centered.
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = count as f64;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self { count, start, step, bandwidth: step * (1.0 - padding) }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of band `index`
    pub fn position(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.start + self.step * index as f64)
    }

    pub fn center(&self, index: usize) -> Option<f64> {
        self.position(index).map(|x| x + self.bandwidth / 2.0)
    }
}

/// Continuous value to pixel mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// A collapsed domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Extend the domain outward to round tick boundaries.
    pub fn nice(&self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        if !(start.is_finite() && stop.is_finite()) || stop <= start || count == 0 {
            return *self;
        }

        let mut previous: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if previous == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous = Some(step);
        }

        Self { domain: (start, stop), range: self.range }
    }

    /// Round tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        if start == stop {
            return vec![start];
        }
        if count == 0 || !(start.is_finite() && stop.is_finite()) || stop < start {
            return Vec::new();
        }

        let Some((i1, i2, inc)) = tick_spec(start, stop, count) else {
            return Vec::new();
        };
        if i2 < i1 {
            return Vec::new();
        }
        (0..=(i2 - i1) as i64)
            .map(|i| {
                let k = i1 + i as f64;
                if inc < 0.0 { k / -inc } else { k * inc }
            })
            .collect()
    }

    /// Decimal places that keep the ticks of `ticks(count)` apart, as d3's default tick format picks them.
    pub fn tick_precision(&self, count: usize) -> usize {
        let (start, stop) = self.domain;
        let inc = tick_increment(start.min(stop), start.max(stop), count);
        if inc < 0.0 { (-inc).log10().ceil() as usize } else { 0 }
    }
}

/// `(i1, i2, inc)`: tick indices and increment; a negative increment stands for `1 / -inc`.
fn tick_spec(start: f64, stop: f64, count: usize) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    if !power.is_finite() {
        return None;
    }
    let error = step / 10f64.powf(power);
    let factor = factor_for(error);

    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        Some((i1, i2, -inc))
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        Some((i1, i2, inc))
    }
}

fn factor_for(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Tick step for `count` ticks over `[start, stop]`; negative means `1 / -step`.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count).map(|(_, _, inc)| inc).unwrap_or(0.0)
}
