//! Statistiques élémentaires sur des tranches de nombres

/// Valeur convertible en `f64` pour les calculs de moyenne et de variance
pub trait Numeric: Copy + PartialOrd {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(impl Numeric for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_numeric!(u8, u32, u64, usize, i32, i64, f64);

/// Somme des valeurs
pub fn sum<T: Numeric>(values: &[T]) -> f64 {
    values.iter().map(|v| v.to_f64()).sum()
}

/// Moyenne, `None` si vide
pub fn mean<T: Numeric>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(values) / values.len() as f64)
}

/// Variance échantillon (`n - 1`) ou population (`n`)
///
/// La variance échantillon d'une seule valeur vaut 0.
pub fn variance<T: Numeric>(values: &[T], sample: bool) -> Option<f64> {
    let m = mean(values)?;
    let n = values.len();
    let ss: f64 = values.iter().map(|v| (v.to_f64() - m).powi(2)).sum();
    let denom = if sample { n - 1 } else { n };
    if denom == 0 {
        return Some(0.0);
    }
    Some(ss / denom as f64)
}

pub fn min<T: Numeric>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .fold(None, |acc, v| match acc {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
}

pub fn max<T: Numeric>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}
