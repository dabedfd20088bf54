//! Tokio Runtime Bridge
//!
//! reqwest and `tokio::fs` need a tokio reactor, and GPUI tasks do not run on
//! one. Content I/O is handed to a small dedicated runtime and its output is
//! awaited from whatever executor the caller is on.
//!
//! ```text
//! Workspace task (GPUI executor)
//!       │  composer.load_components(..)
//!       ▼
//! ContentBackend::list / read_text
//!       │  run_in_tokio(..)
//!       ▼
//! "minee-io" worker threads
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

/// Worker threads serving content requests
const IO_THREADS: usize = 2;

static IO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn io_runtime() -> &'static Runtime {
    IO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(IO_THREADS)
            .thread_name("minee-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime for content I/O")
    })
}

/// Run `future` on the I/O runtime and await its output.
///
/// A panic inside `future` resumes on the awaiting side.
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    match io_runtime().spawn(future).await {
        Ok(output) => output,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => panic!("content I/O task cancelled: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_runs_tokio_timers_from_foreign_executor() {
        let value = block_on(run_in_tokio(async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            7
        }));
        assert_eq!(value, 7);
    }

    #[test]
    fn test_panic_reaches_the_caller() {
        let outcome = std::panic::catch_unwind(|| {
            block_on(run_in_tokio(async {
                panic!("boom");
            }))
        });
        assert!(outcome.is_err());
    }
}
