//! Fakultäten und Binomialkoeffizienten für die Bernstein-Basis.
//!
//! Die Fakultäten liegen als `f64` in einer festen Tabelle bis einschließlich
//! [`FACTORIAL_CEILING`] (170! ist die größte endliche `f64`-Fakultät).
//! Bis 22! sind die Werte exakt, darüber mit `f64`-Rundung. Für Grade
//! oberhalb der Tabelle wird der Binomialkoeffizient multiplikativ berechnet;
//! das bleibt bis etwa n = 1029 endlich. Darüber rechnet die Kurvenauswertung
//! mit [`ln_binomial`].

use std::sync::LazyLock;

/// Größtes `n`, für das `n!` in `f64` endlich darstellbar ist.
pub const FACTORIAL_CEILING: usize = 170;

/// Vorberechnete Fakultätstabelle `0! ..= FACTORIAL_CEILING!`.
#[derive(Debug, Clone)]
pub struct FactorialTable {
    values: Vec<f64>,
}

impl FactorialTable {
    /// Baut die Tabelle einmalig bis zur festen Obergrenze auf.
    pub fn new() -> Self {
        let mut values = Vec::with_capacity(FACTORIAL_CEILING + 1);
        let mut acc = 1.0_f64;
        values.push(acc);
        for n in 1..=FACTORIAL_CEILING {
            acc *= n as f64;
            values.push(acc);
        }
        Self { values }
    }

    /// Liefert `n!`. Oberhalb der Tabelle: `f64::INFINITY`.
    pub fn factorial(&self, n: usize) -> f64 {
        self.values.get(n).copied().unwrap_or(f64::INFINITY)
    }

    /// Binomialkoeffizient `C(n, i) = n! / (i! · (n-i)!)`.
    ///
    /// `i > n` ergibt 0.
    pub fn binomial(&self, n: usize, i: usize) -> f64 {
        if i > n {
            return 0.0;
        }
        if n <= FACTORIAL_CEILING {
            return self.values[n] / (self.values[i] * self.values[n - i]);
        }

        // Multiplikativ über den kürzeren Zweig, bleibt deutlich länger endlich
        let k = i.min(n - i);
        (1..=k).fold(1.0_f64, |acc, j| acc * (n - k + j) as f64 / j as f64)
    }
}

impl Default for FactorialTable {
    fn default() -> Self {
        Self::new()
    }
}

static FACTORIALS: LazyLock<FactorialTable> = LazyLock::new(FactorialTable::new);

/// `n!` aus der gemeinsamen Tabelle.
pub fn factorial(n: usize) -> f64 {
    FACTORIALS.factorial(n)
}

/// `C(n, i)` aus der gemeinsamen Tabelle.
pub fn binomial(n: usize, i: usize) -> f64 {
    FACTORIALS.binomial(n, i)
}

/// `ln C(n, i)`, summiert statt multipliziert. `i > n` ergibt `-inf`.
pub fn ln_binomial(n: usize, i: usize) -> f64 {
    if i > n {
        return f64::NEG_INFINITY;
    }
    let k = i.min(n - i);
    (1..=k).map(|j| ((n - k + j) as f64 / j as f64).ln()).sum()
}
