/// Receives progress updates from long-running analyses.
pub trait ProgressListener {
    fn start(&mut self) {}
    /// `fraction` is between `0.0` and `1.0`.
    fn progress(&mut self, fraction: f64);
    fn finish(&mut self) {}
}

impl<F> ProgressListener for F
where
    F: FnMut(f64),
{
    fn progress(&mut self, fraction: f64) {
        self(fraction)
    }
}
