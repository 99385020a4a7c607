// search-core/src/debounce.rs
//! 防抖定时器
//!
//! 同一时刻最多只有一个待执行任务：每次 `schedule` 都会取消上一个任务，
//! 并从本次调用起重新等待完整的窗口。

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct Debouncer {
    delay: Duration,
    /// 后台任务句柄（可取消）
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `fire` once `delay` has passed without another `schedule` call.
    ///
    /// Outside a tokio runtime there is no timer to wait on, so `fire` runs
    /// inline.
    pub fn schedule<F>(&self, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_with(|| fire);
    }

    /// Like `schedule`, but `arm` builds the callback while the pending slot
    /// is locked.
    ///
    /// Concurrent callers are serialized: whoever arms last also owns the
    /// task left in the slot.
    pub fn schedule_with<A, F>(&self, arm: A)
    where
        A: FnOnce() -> F,
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.lock();
        let fire = arm();

        let Ok(runtime) = Handle::try_current() else {
            tracing::debug!("[防抖] 没有 tokio 运行时，立即执行");
            if let Some(previous) = pending.take() {
                previous.abort();
            }
            drop(pending);
            fire();
            return;
        };

        let delay = self.delay;
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            fire();
        });

        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    /// 取消待执行任务，返回是否确实取消了一个尚未完成的任务
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock().as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
