/// A type that collects the steps taken by an algorithm, such as the rewrite rules applied by
/// [`simplify_with_steps`](crate::symbolic::simplify_with_steps).
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. This
/// is what [`simplify`](crate::symbolic::simplify()) uses when the steps are not wanted.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
