use rand_distr::{Distribution, Normal, NormalError, Uniform, uniform};

use crate::source::Source;

pub enum Distributions {
    Uniform(Uniform<i64>),
    Normal(Normal<f64>),
    Ternary,
}

impl Distributions {
    /// Uniform over `[-bound, bound]`.
    pub fn uniform(bound: i64) -> Result<Self, uniform::Error> {
        Ok(Distributions::Uniform(Uniform::new_inclusive(-bound, bound)?))
    }

    /// Centered normal with standard deviation `sigma`.
    pub fn normal(sigma: f64) -> Result<Self, NormalError> {
        Ok(Distributions::Normal(Normal::new(0.0, sigma)?))
    }

    pub fn sample_i64(&self, source: &mut Source) -> i64 {
        match self {
            Distributions::Uniform(dist) => dist.sample(source),
            Distributions::Normal(dist) => dist.sample(source).round() as i64,
            Distributions::Ternary => source.next_u64n(3, 3) as i64 - 1,
        }
    }

    pub fn sample_f64(&self, source: &mut Source) -> f64 {
        match self {
            Distributions::Uniform(dist) => dist.sample(source) as f64,
            Distributions::Normal(dist) => dist.sample(source),
            Distributions::Ternary => (source.next_u64n(3, 3) as i64 - 1) as f64,
        }
    }

    /// Fills `out` with samples truncated to `i32`. Keep bounds within `i32` to avoid wrapping.
    pub fn fill_i32(&self, source: &mut Source, out: &mut [i32]) {
        out.iter_mut().for_each(|x| *x = self.sample_i64(source) as i32);
    }

    pub fn fill_i64(&self, source: &mut Source, out: &mut [i64]) {
        out.iter_mut().for_each(|x| *x = self.sample_i64(source));
    }

    pub fn fill_f64(&self, source: &mut Source, out: &mut [f64]) {
        out.iter_mut().for_each(|x| *x = self.sample_f64(source));
    }
}

#[cfg(test)]
mod tests {
    use super::Distributions;
    use crate::source::Source;

    #[test]
    fn uniform_respects_bound() {
        let dist = Distributions::uniform(10).unwrap();
        let mut source = Source::new([3u8; 32]);
        let mut out = vec![0i64; 512];
        dist.fill_i64(&mut source, &mut out);
        assert!(out.iter().all(|x| (-10..=10).contains(x)));
    }

    #[test]
    fn ternary_yields_minus_one_zero_one() {
        let mut source = Source::new([4u8; 32]);
        let mut out = vec![0i32; 512];
        Distributions::Ternary.fill_i32(&mut source, &mut out);
        assert!(out.iter().all(|x| (-1..=1).contains(x)));
        assert!(out.contains(&-1) && out.contains(&0) && out.contains(&1));
    }

    #[test]
    fn normal_rejects_negative_sigma() {
        assert!(Distributions::normal(-1.0).is_err());
    }
}
