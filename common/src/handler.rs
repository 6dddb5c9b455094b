//! [`Handler`] abstractions.

/// Executable handler.
///
/// Handlers here are synchronous and infallible: invalid input is normalized
/// by the handler itself rather than reported back to the caller.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(&mut self, args: Args) -> Self::Ok;
}
