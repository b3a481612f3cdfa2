//! The single-slot observer callback.

use crate::core::TransitionResult;

/// Callback invoked once per `apply`, synchronously, with its outcome.
///
/// Closures receive ownership of the result so they can move the
/// transition (and its side effect) wherever the consumer needs it.
///
/// The `Send` bound keeps [`StateMachine`](crate::machine::StateMachine)
/// `Send` whenever its state, event and side-effect types are, so a machine
/// can be moved to another thread or kept behind a `Mutex`. The price is
/// that the observer cannot capture single-threaded sinks such as
/// `Rc<RefCell<_>>`; share them through `Arc<Mutex<_>>` instead.
pub type Observer<S, E, F> = Box<dyn FnMut(TransitionResult<S, E, F>) + Send>;

/// Box a closure as an [`Observer`].
///
/// Saves callers from spelling out the trait object type.
///
/// # Example
///
/// ```rust
/// use tabula::machine::{observer, Observer};
///
/// let log: Observer<u8, char, ()> = observer(|result| {
///     if let Err(error) = result {
///         eprintln!("{error}");
///     }
/// });
/// # drop(log);
/// ```
pub fn observer<S, E, F, C>(callback: C) -> Observer<S, E, F>
where
    C: FnMut(TransitionResult<S, E, F>) + Send + 'static,
{
    Box::new(callback)
}
