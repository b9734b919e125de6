// src/generator.rs
//! Общий контракт доменных генераторов
//!
//! Каждый генератор умеет две вещи: `generate` и `validate`. Генерация сама себя
//! не проверяет: вызывающая сторона обязана вызвать `validate` и решить,
//! перегенерировать ли с другим сидом.

use crate::error::Result;
use crate::params::GenerationParams;

pub trait Generator: Send + Sync {
    type Output;

    /// Полный результат или ошибка `InvalidParameter`, частичных результатов нет.
    fn generate(&self, seed: i64, params: &GenerationParams) -> Result<Self::Output>;

    /// `InvariantViolation` с конкретным нарушенным инвариантом.
    fn validate(&self, output: &Self::Output) -> Result<()>;

    /// `generate`, затем `validate`.
    fn generate_validated(&self, seed: i64, params: &GenerationParams) -> Result<Self::Output> {
        let output = self.generate(seed, params)?;
        self.validate(&output)?;
        Ok(output)
    }
}

/// Строит коллекцию из `count` независимых элементов.
///
/// Каждый элемент зависит только от своего индекса, поэтому параллельная сборка
/// (`parallel`) даёт тот же результат в том же порядке, что и последовательная.
pub(crate) fn generate_indexed<T, F>(count: usize, make: F) -> Vec<T>
where
    T: Send,
    F: Fn(u64) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..count as u64).into_par_iter().map(make).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..count as u64).map(make).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_generation_keeps_index_order() {
        let values = generate_indexed(100, |i| i * 2);
        assert_eq!(values.len(), 100);
        assert!(values.iter().enumerate().all(|(i, &v)| v == i as u64 * 2));
    }
}
