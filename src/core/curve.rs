//! Rationale Bézier-Kurve beliebigen Grades mit gemeinsamem Innengewicht.
//!
//! Für `n = points.len() - 1` gilt
//! `c_i = w_i · C(n,i) · t^i · (1-t)^(n-i)` mit `w_0 = w_n = 1` und
//! `w_i = weight` für alle inneren Punkte. Das Ergebnis ist
//! `Σ c_i / S · P_i` mit `S = Σ c_i`, bzw. `Σ c_i · P_i` wenn `S == 0`.

use super::combinatorics;
use glam::Vec3;

/// Basis-Koeffizienten `c_i` für `point_count` Kontrollpunkte an Parameter `t`.
///
/// Die Endpunkte tragen immer Gewicht 1, damit die Kurve sie unabhängig
/// vom Gewicht interpoliert. Gerechnet wird in `f64`; ist `C(n, i)` selbst
/// dort nicht mehr endlich, läuft der Term über den Logarithmus.
pub fn basis_coefficients(point_count: usize, weight: f32, t: f32) -> Vec<f64> {
    if point_count == 0 {
        return Vec::new();
    }
    let n = point_count - 1;
    let t = t as f64;
    let inv = 1.0 - t;
    let weight = weight as f64;

    (0..=n)
        .map(|i| {
            let w = if i == 0 || i == n { 1.0 } else { weight };
            w * bernstein(n, i, t, inv)
        })
        .collect()
}

fn bernstein(n: usize, i: usize, t: f64, inv: f64) -> f64 {
    let binom = combinatorics::binomial(n, i);
    if binom.is_finite() {
        return binom * t.powi(i as i32) * inv.powi((n - i) as i32);
    }

    // 0^0 = 1 wie bei powi, sonst ln(0) = -inf → Term 0
    let power_ln = |base: f64, exp: usize| {
        if exp == 0 {
            0.0
        } else {
            exp as f64 * base.abs().ln()
        }
    };
    let sign = if (t < 0.0 && i % 2 == 1) != (inv < 0.0 && (n - i) % 2 == 1) {
        -1.0
    } else {
        1.0
    };
    sign * (combinatorics::ln_binomial(n, i) + power_ln(t, i) + power_ln(inv, n - i)).exp()
}

/// Evaluiert die Kurve an Parameter `t`.
///
/// `t` außerhalb von `[0, 1]` wird nicht abgelehnt, sondern extrapoliert.
/// Eine leere Punktliste ergibt den Ursprung.
pub fn evaluate(points: &[Vec3], weight: f32, t: f32) -> Vec3 {
    let coefs = basis_coefficients(points.len(), weight, t);
    let sum: f64 = coefs.iter().sum();

    // Summe 0 (z.B. Gewicht 0 bei innen dominiertem t): unnormiert übernehmen
    let scale = if sum == 0.0 { 1.0 } else { 1.0 / sum };

    coefs
        .iter()
        .zip(points)
        .fold(Vec3::ZERO, |acc, (&c, &p)| acc + p * (c * scale) as f32)
}

/// Tastet die Kurve in `steps` gleichmäßigen Parameterschritten ab.
///
/// Liefert `steps + 1` Punkte für `t = i / steps`. `steps == 0` wird wie 1 behandelt.
pub fn sample(points: &[Vec3], weight: f32, steps: u32) -> Vec<Vec3> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| evaluate(points, weight, i as f32 / steps as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> Vec<Vec3> {
        vec![
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_endpoints_are_interpolated_for_any_weight() {
        let points = vec![
            Vec3::new(1.5, -2.0, 0.0),
            Vec3::new(0.3, 4.0, 0.0),
            Vec3::new(-2.0, 1.0, 0.0),
            Vec3::new(3.0, 3.0, 0.0),
            Vec3::new(-0.7, -0.2, 0.0),
        ];
        for weight in [0.0, 0.25, 1.0, 3.0, 50.0] {
            assert_eq!(evaluate(&points, weight, 0.0), points[0]);
            assert_eq!(evaluate(&points, weight, 1.0), points[4]);
        }
    }

    #[test]
    fn test_quadratic_midpoint() {
        let p = evaluate(&triangle(), 1.0, 0.5);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, -0.25, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_higher_weight_pulls_towards_interior_point() {
        let points = triangle();
        let plain = evaluate(&points, 1.0, 0.5);
        let heavy = evaluate(&points, 10.0, 0.5);
        assert!(heavy.distance(points[1]) < plain.distance(points[1]));
    }

    #[test]
    fn test_zero_weight_gives_chord_blend() {
        // Gewicht 0: nur die Endpunkte tragen bei, normiert auf deren Summe
        let points = triangle();
        let p = evaluate(&points, 0.0, 0.5);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_sum_falls_back_to_unnormalized_sum() {
        // Negatives Gewicht hebt die Summe bei t=0.5 exakt auf: 0.25 - 0.5 + 0.25
        let points = triangle();
        let coefs = basis_coefficients(3, -1.0, 0.5);
        assert_eq!(coefs.iter().sum::<f64>(), 0.0);

        let p = evaluate(&points, -1.0, 0.5);
        let expected = points[0] * 0.25 + points[1] * -0.5 + points[2] * 0.25;
        assert_relative_eq!(p.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(p.y, expected.y, epsilon = 1e-6);
    }

    #[test]
    fn test_sample_count_and_parameters() {
        let samples = sample(&triangle(), 1.0, 2);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(samples[2], Vec3::new(-1.0, 0.0, 0.0));
        assert_relative_eq!(samples[1].y, -0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_sample_zero_steps_is_clamped() {
        assert_eq!(sample(&triangle(), 1.0, 0).len(), 2);
    }

    fn wave(count: usize) -> Vec<Vec3> {
        (0..count)
            .map(|i| Vec3::new(i as f32 * 0.1, (i as f32 * 0.7).sin(), 0.0))
            .collect()
    }

    #[test]
    fn test_high_degree_keeps_endpoints_and_stays_finite() {
        // C(n, n/2) übersteigt f32::MAX ab n = 132
        for count in [133, 140, 171, 200] {
            let points = wave(count);
            for weight in [0.5, 1.0, 4.0] {
                assert_eq!(evaluate(&points, weight, 0.0), points[0]);
                assert_eq!(evaluate(&points, weight, 1.0), points[count - 1]);
                let mid = evaluate(&points, weight, 0.5);
                assert!(mid.is_finite(), "n={count} w={weight}: {mid:?}");
            }
        }
    }

    #[test]
    fn test_degree_beyond_f64_binomial_uses_log_terms() {
        // C(1200, 600) ist auch in f64 unendlich
        let points = wave(1201);
        assert_eq!(evaluate(&points, 1.0, 0.0), points[0]);
        assert_eq!(evaluate(&points, 1.0, 1.0), points[1200]);

        let mid = evaluate(&points, 1.0, 0.5);
        assert!(mid.is_finite());
        // Symmetrische Basis bei t = 0.5: x liegt in der Mitte der Geraden
        assert_relative_eq!(mid.x, 60.0, epsilon = 1e-2);
    }

    #[test]
    fn test_log_terms_match_direct_terms() {
        let direct = 120.0 * 0.3_f64.powi(3) * 0.7_f64.powi(7);
        let via_log =
            (combinatorics::ln_binomial(10, 3) + 3.0 * 0.3_f64.ln() + 7.0 * 0.7_f64.ln()).exp();
        assert_relative_eq!(direct, via_log, max_relative = 1e-10);
    }

    #[test]
    fn test_parameter_outside_unit_interval_extrapolates() {
        let p = evaluate(&triangle(), 1.0, 1.5);
        assert!(p.is_finite());
    }
}
