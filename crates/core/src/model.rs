/// A callable model that maps an input to an output.
///
/// Each algorithm variant is a `Model`, so the timing harness and the
/// command-line front end can drive iterative and recursive variants through
/// the same interface.
///
/// The input is taken by value. A variant is free to hand its input back
/// unchanged when no work is needed.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input fails the model's precondition check.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
