pub trait Lookup {
    /// evaluates single point
    /// defined separately by each table type
    fn lookup(&mut self, x: f64) -> f64;

    /// evaluates `xs` into `out` without allocating
    /// stops at the shorter of the two slices
    #[inline]
    fn lookup_into(&mut self, xs: &[f64], out: &mut [f64]) {
        for (yq, &xq) in out.iter_mut().zip(xs) {
            *yq = self.lookup(xq);
        }
    }

    /// evaluates many points
    #[inline]
    fn lookup_many(&mut self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.lookup(xq)).collect()
    }
}
