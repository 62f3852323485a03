//! Invocation interception: wrap a target behind the same capability
//! interface it already implements, timing each forwarded call.
//!
//! The wrapper is behavior-preserving. Callers holding an
//! [`Intercepted`] see exactly what the target would have returned; the
//! only additions are the hook side effects.

use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::Colorize;

use crate::error::InterceptError;

/// Capability interface shared by a target and its interceptor.
pub trait Operation {
    type Output;

    /// Performs the action and reports its result.
    fn execute(&self) -> Self::Output;
}

/// Before/after seam wrapped around every forwarded call.
///
/// `before` captures state (e.g. a start timestamp) that `after` consumes
/// together with a borrow of the call's output.
pub trait CallHook<Out>: Send + Sync {
    type State;

    fn before(&self) -> Self::State;
    fn after(&self, state: Self::State, output: &Out);
}

/// Receives one record per timed call.
pub trait TimingSink: Send + Sync {
    fn record(&self, elapsed: Duration);
}

/// Default sink: prints the elapsed time to the console.
pub struct ConsoleTimingSink;

impl TimingSink for ConsoleTimingSink {
    fn record(&self, elapsed: Duration) {
        println!("{} {}ms", "It's spent".yellow(), elapsed.as_millis());
    }
}

/// Hook that reports each call's elapsed wall-clock time to a sink.
pub struct TimingHook {
    sink: Arc<dyn TimingSink>,
}

impl TimingHook {
    pub fn new(sink: Arc<dyn TimingSink>) -> Self {
        TimingHook { sink }
    }
}

impl Default for TimingHook {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleTimingSink))
    }
}

impl<Out> CallHook<Out> for TimingHook {
    type State = Instant;

    fn before(&self) -> Instant {
        Instant::now()
    }

    fn after(&self, started: Instant, _output: &Out) {
        self.sink.record(started.elapsed());
    }
}

/// Transparent wrapper: implements the target's capability interface and
/// forwards every call through a [`CallHook`].
pub struct Intercepted<T, H> {
    target: T,
    hook: H,
}

impl<T, H> Intercepted<T, H>
where
    T: Operation,
    H: CallHook<T::Output>,
{
    pub fn new(target: T, hook: H) -> Self {
        Intercepted { target, hook }
    }

    /// Unwraps the interceptor, returning the target.
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T, H> Operation for Intercepted<T, H>
where
    T: Operation,
    H: CallHook<T::Output>,
{
    type Output = T::Output;

    /// Forwards to the target and returns its output unchanged.
    ///
    /// The after-hook runs only on normal return. A panicking target
    /// propagates immediately and no record is emitted for that call; an
    /// `Err` returned as a value is a normal return and is still timed.
    fn execute(&self) -> T::Output {
        let state = self.hook.before();
        let output = self.target.execute();
        self.hook.after(state, &output);
        output
    }
}

/// Timing interceptor: the shipped specialization of [`Intercepted`].
pub type Timed<T> = Intercepted<T, TimingHook>;

impl<T: Operation> Intercepted<T, TimingHook> {
    /// Wraps `target`, reporting each call's elapsed time to the console.
    pub fn wrap(target: T) -> Self {
        Intercepted::new(target, TimingHook::default())
    }

    /// Wraps `target`, reporting to the supplied sink.
    pub fn wrap_with(target: T, sink: Arc<dyn TimingSink>) -> Self {
        Intercepted::new(target, TimingHook::new(sink))
    }
}

/// Builder for [`Timed`] where the target arrives late.
///
/// [`TimedBuilder::build`] validates that a target was actually supplied,
/// which is where a missing target surfaces as an error rather than a type
/// mismatch.
#[must_use = "a builder does nothing unless you call `.build()`"]
pub struct TimedBuilder<T> {
    target: Option<T>,
    sink: Option<Arc<dyn TimingSink>>,
}

impl<T: Operation> TimedBuilder<T> {
    pub fn new() -> Self {
        TimedBuilder {
            target: None,
            sink: None,
        }
    }

    pub fn target(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn TimingSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Fails with [`InterceptError::InvalidTarget`] if no target was supplied.
    pub fn build(self) -> Result<Timed<T>, InterceptError> {
        let target = self.target.ok_or(InterceptError::InvalidTarget)?;
        let hook = match self.sink {
            Some(sink) => TimingHook::new(sink),
            None => TimingHook::default(),
        };
        Ok(Intercepted::new(target, hook))
    }
}

impl<T: Operation> Default for TimedBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread;

    struct SlowAnswer;

    impl Operation for SlowAnswer {
        type Output = u32;

        fn execute(&self) -> u32 {
            thread::sleep(Duration::from_millis(10));
            42
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        samples: Mutex<Vec<Duration>>,
    }

    impl RecordingSink {
        fn samples(&self) -> Vec<Duration> {
            self.samples.lock().unwrap().clone()
        }
    }

    impl TimingSink for RecordingSink {
        fn record(&self, elapsed: Duration) {
            self.samples.lock().unwrap().push(elapsed);
        }
    }

    #[test]
    fn test_result_passes_through_and_elapsed_recorded() {
        let sink = Arc::new(RecordingSink::default());
        let timed = Timed::wrap_with(SlowAnswer, sink.clone());

        assert_eq!(timed.execute(), 42);

        let samples = sink.samples();
        assert_eq!(samples.len(), 1);
        assert!(samples[0] >= Duration::from_millis(10));
    }

    #[test]
    fn test_each_call_records_one_sample() {
        let sink = Arc::new(RecordingSink::default());
        let timed = Timed::wrap_with(SlowAnswer, sink.clone());

        timed.execute();
        timed.execute();

        assert_eq!(sink.samples().len(), 2);
    }

    #[test]
    fn test_wrapper_is_substitutable_for_target() {
        fn run<O: Operation<Output = u32>>(op: &O) -> u32 {
            op.execute()
        }

        assert_eq!(run(&SlowAnswer), 42);
        assert_eq!(run(&Timed::wrap(SlowAnswer)), 42);
    }

    #[test]
    fn test_err_output_is_a_normal_return() {
        struct Failing;

        impl Operation for Failing {
            type Output = Result<u32, String>;

            fn execute(&self) -> Result<u32, String> {
                Err("disk offline".to_string())
            }
        }

        let sink = Arc::new(RecordingSink::default());
        let timed = Timed::wrap_with(Failing, sink.clone());

        assert_eq!(timed.execute(), Err("disk offline".to_string()));
        assert_eq!(sink.samples().len(), 1);
    }

    #[test]
    fn test_build_without_target_fails() {
        let result = TimedBuilder::<SlowAnswer>::new().build();
        assert!(matches!(result, Err(InterceptError::InvalidTarget)));
    }

    #[test]
    fn test_build_with_target_forwards_calls() {
        let sink = Arc::new(RecordingSink::default());
        let timed = TimedBuilder::new()
            .target(SlowAnswer)
            .sink(sink.clone())
            .build()
            .unwrap();

        assert_eq!(timed.execute(), 42);
        assert_eq!(sink.samples().len(), 1);
    }

    #[test]
    fn test_into_inner_returns_target() {
        let timed = Timed::wrap(SlowAnswer);
        let target = timed.into_inner();
        assert_eq!(target.execute(), 42);
    }
}
