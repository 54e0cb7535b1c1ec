use futures::future::{self, FutureExt, LocalBoxFuture, Shared};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

/// Outcome shared by every caller of [`MaterialsCache::ensure`]; `None` when loading failed.
pub type Dataset = Option<Rc<Value>>;

type PendingLoad = Shared<LocalBoxFuture<'static, Dataset>>;

enum LoadState {
    Uninitialized,
    Pending(PendingLoad),
    Loaded(Rc<Value>),
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Uninitialized,
    Pending,
    Loaded,
    Failed,
}

/// Page-lifetime memo for the materials dataset.
///
/// The loader runs on the first `ensure` call only. Callers arriving while it
/// is in flight await the same shared future, and a failure is final.
pub struct MaterialsCache {
    state: Rc<RefCell<LoadState>>,
    loads: Cell<u32>,
}

impl Default for MaterialsCache {
    fn default() -> Self {
        MaterialsCache::new()
    }
}

impl MaterialsCache {
    pub fn new() -> MaterialsCache {
        MaterialsCache {
            state: Rc::new(RefCell::new(LoadState::Uninitialized)),
            loads: Cell::new(0),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        match &*self.state.borrow() {
            LoadState::Uninitialized => LoadPhase::Uninitialized,
            LoadState::Pending(_) => LoadPhase::Pending,
            LoadState::Loaded(_) => LoadPhase::Loaded,
            LoadState::Failed => LoadPhase::Failed,
        }
    }

    /// Number of times a loader has been started; never exceeds one.
    pub fn load_count(&self) -> u32 {
        self.loads.get()
    }

    /// The settled dataset, if loading has finished successfully.
    pub fn dataset(&self) -> Dataset {
        match &*self.state.borrow() {
            LoadState::Loaded(v) => Some(v.clone()),
            _ => None,
        }
    }

    pub fn ensure<F, Fut>(&self, load: F) -> LocalBoxFuture<'static, Dataset>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<Value>> + 'static,
    {
        let mut state = self.state.borrow_mut();
        match &*state {
            LoadState::Loaded(v) => return future::ready(Some(v.clone())).boxed_local(),
            LoadState::Failed => return future::ready(None).boxed_local(),
            LoadState::Pending(shared) => return shared.clone().boxed_local(),
            LoadState::Uninitialized => {}
        }
        self.loads.set(self.loads.get() + 1);
        let slot = Rc::downgrade(&self.state);
        let fut = load();
        let shared = async move {
            let data = fut.await.map(Rc::new);
            if let Some(slot) = slot.upgrade() {
                *slot.borrow_mut() = match &data {
                    Some(v) => LoadState::Loaded(v.clone()),
                    None => LoadState::Failed,
                };
            }
            data
        }
        .boxed_local()
        .shared();
        *state = LoadState::Pending(shared.clone());
        shared.boxed_local()
    }
}
