/// Round an amount to a precision a cook can actually measure
///
/// | amount        | step |
/// |---------------|------|
/// | < 1           | 1/8  |
/// | 1 ..= 10      | 1/4  |
/// | 10 < a <= 100 | 1/2  |
/// | > 100         | 1    |
///
/// The bands depend on magnitude only, so the caller is expected to pick a
/// unit where they make sense (grams rather than kilograms).
#[inline]
pub fn round_for_cooking(amount: f64) -> f64 {
    if amount < 1.0 {
        return round_to_step(amount, 8.0);
    }

    if amount <= 10.0 {
        return round_to_step(amount, 4.0);
    }

    if amount <= 100.0 {
        return round_to_step(amount, 2.0);
    }

    amount.round()
}

/// Round to the nearest `1 / steps_per_unit`
#[inline]
fn round_to_step(amount: f64, steps_per_unit: f64) -> f64 {
    (amount * steps_per_unit).round() / steps_per_unit
}
