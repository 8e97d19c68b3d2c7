//! Pure domain → range mappings for chart geometry. Every scale is a plain
//! value parameterized at construction; nothing here touches the DOM.

/// Ten distinguishable categorical colors, assigned cyclically.
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Affine interpolation from a numeric domain onto a numeric range. Values
/// outside the domain extrapolate; callers clamp explicitly if they need to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            // Degenerate domain collapses to the range midpoint.
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Rounded tick values covering the domain, stepped on a 1-2-5 grid.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || d0 == d1 {
            return vec![d0];
        }
        let (lo, hi) = if d0 < d1 { (d0, d1) } else { (d1, d0) };
        let step = tick_step(lo, hi, count);
        if step <= 0.0 || !step.is_finite() {
            return vec![lo];
        }
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count.max(1) as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    base * factor
}

/// Evenly spaced bins for an ordered set of categories over `[0, width]`.
/// Each category gets a bin of `width / n`; the band occupies the bin minus
/// the padding fraction, centered within it.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    width: f64,
    padding: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, width: f64, padding: f64) -> Self {
        Self {
            domain,
            width,
            padding,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    fn step(&self) -> f64 {
        if self.domain.is_empty() {
            0.0
        } else {
            self.width / self.domain.len() as f64
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start offset of the category's band, or `None` for a category not in
    /// the domain.
    pub fn offset(&self, category: &str) -> Option<f64> {
        let index = self.domain.iter().position(|c| c == category)?;
        Some(index as f64 * self.step() + self.step() * self.padding / 2.0)
    }

    /// Center of the category's band (tick anchor).
    pub fn center(&self, category: &str) -> Option<f64> {
        Some(self.offset(category)? + self.bandwidth() / 2.0)
    }
}

/// Radius encoding over `[0, max]`: interpolation runs on the square root
/// of the normalized value, so area rather than radius tracks the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    pub max: f64,
    pub range: (f64, f64),
}

impl SqrtScale {
    pub fn new(max: f64, range: (f64, f64)) -> Self {
        Self { max, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.max <= 0.0 {
            return r0;
        }
        let t = (value / self.max).max(0.0).sqrt();
        r0 + t * (r1 - r0)
    }
}

/// Categorical color assignment over [`CATEGORY_PALETTE`], first lookup
/// wins. Assignments hold for the lifetime of one scale (one render pass);
/// a fresh scale may hand the same category a different color when the
/// first-appearance order has changed. That instability is accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdinalColorScale {
    seen: Vec<String>,
}

impl OrdinalColorScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&mut self, key: &str) -> &'static str {
        let index = match self.seen.iter().position(|k| k == key) {
            Some(index) => index,
            None => {
                self.seen.push(key.to_string());
                self.seen.len() - 1
            }
        };
        CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
    }
}

/// Minimum and maximum of the finite values, if any.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut result: Option<(f64, f64)> = None;
    for value in values {
        if !value.is_finite() {
            continue;
        }
        result = Some(match result {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        });
    }
    result
}

/// Maximum of the finite values, if any.
pub fn max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    extent(values).map(|(_, hi)| hi)
}
