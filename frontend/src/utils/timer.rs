use futures::future::{AbortHandle, Abortable, Aborted};
use leptos::*;
use std::{collections::HashMap, future::Future};

/// Calls `tick` every `millis` milliseconds until the owning view is disposed.
#[cfg(target_arch = "wasm32")]
pub fn use_interval(millis: u32, tick: impl FnMut() + 'static) {
    let interval = gloo_timers::callback::Interval::new(millis, tick);
    hold_until_cleanup(interval, |interval| {
        interval.cancel();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_interval(_millis: u32, _tick: impl FnMut() + 'static) {}

/// Runs `callback` once after `millis` milliseconds unless the owning view
/// is disposed first.
#[cfg(target_arch = "wasm32")]
pub fn run_after(millis: u32, callback: impl FnOnce() + 'static) {
    let timeout = gloo_timers::callback::Timeout::new(millis, callback);
    hold_until_cleanup(timeout, |timeout| {
        timeout.cancel();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_after(_millis: u32, _callback: impl FnOnce() + 'static) {}

/// Keeps `handle` alive until the current owner is cleaned up, then hands it
/// to `release`. Without an owner the handle is leaked and never released.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn hold_until_cleanup<T: 'static>(handle: T, release: impl FnOnce(T) + 'static) {
    if Owner::current().is_some() {
        on_cleanup(move || release(handle));
    } else {
        std::mem::forget(handle);
    }
}

/// Tracks the requests a view started and aborts the unfinished ones
/// when the view is cleaned up.
#[derive(Clone, Copy)]
pub struct RequestScope {
    in_flight: StoredValue<HashMap<u64, AbortHandle>>,
    next_id: StoredValue<u64>,
}

impl RequestScope {
    pub fn new() -> Self {
        let in_flight = store_value(HashMap::<u64, AbortHandle>::new());
        on_cleanup(move || {
            in_flight.try_update_value(|handles| {
                for (_, handle) in handles.drain() {
                    handle.abort();
                }
            });
        });
        Self {
            in_flight,
            next_id: store_value(0),
        }
    }

    /// Runs `request` until it finishes or the scope is cleaned up.
    pub async fn run<F: Future>(self, request: F) -> Result<F::Output, Aborted> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.in_flight.update_value(|handles| {
            handles.insert(id, handle);
        });
        let result = Abortable::new(request, registration).await;
        self.in_flight.try_update_value(|handles| handles.remove(&id));
        if result.is_err() {
            log::debug!("request dropped after unmount");
        }
        result
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.try_with_value(HashMap::len).unwrap_or(0)
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn interval_is_inert_off_the_browser() {
        with_runtime(|| {
            let ticks = create_rw_signal(0);
            use_interval(1000, move || ticks.update(|n| *n += 1));
            assert_eq!(ticks.get_untracked(), 0);
        });
    }

    #[test]
    fn held_handle_is_released_when_owner_reruns() {
        with_runtime(|| {
            let generation = create_rw_signal(0u32);
            let released = store_value(Vec::<u32>::new());
            create_isomorphic_effect(move |_| {
                let current = generation.get();
                hold_until_cleanup(current, move |held| {
                    released.update_value(|list| list.push(held));
                });
            });
            assert!(released.get_value().is_empty());

            generation.set(1);
            assert_eq!(released.get_value(), vec![0]);
        });
    }

    #[test]
    fn finished_requests_leave_the_scope() {
        with_runtime(|| {
            let scope = RequestScope::new();
            let value = futures::executor::block_on(scope.run(async { 7 }));
            assert_eq!(value, Ok(7));
            assert_eq!(scope.in_flight(), 0);
        });
    }

    #[test]
    fn rerun_of_owner_aborts_pending_requests() {
        with_runtime(|| {
            let generation = create_rw_signal(0);
            let latest = store_value(None::<RequestScope>);
            create_isomorphic_effect(move |_| {
                generation.get();
                latest.set_value(Some(RequestScope::new()));
            });
            let scope = latest.get_value().expect("scope created by effect");
            let request = scope.run(futures::future::pending::<()>());
            futures::pin_mut!(request);
            let waker = futures::task::noop_waker();
            let mut cx = std::task::Context::from_waker(&waker);
            assert!(request.as_mut().poll(&mut cx).is_pending());
            assert_eq!(scope.in_flight(), 1);

            generation.set(1);
            assert_eq!(
                request.as_mut().poll(&mut cx),
                std::task::Poll::Ready(Err(Aborted))
            );
        });
    }

    #[test]
    fn aborted_maps_to_api_error() {
        let error: crate::api::ApiError = Aborted.into();
        assert_eq!(error.code, "ABORTED");
    }
}
