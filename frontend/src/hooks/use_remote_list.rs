use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::state::content::{load_list, LoadState};
use crate::utils::api::HttpTransport;
use crate::utils::mount_guard::MountGuard;

/// Fetches the list behind `path` once per mount. Stays in the loading state
/// until the request settles; failures settle to an empty list.
#[hook]
pub fn use_remote_list<T>(path: &'static str) -> LoadState<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let state = use_state(LoadState::<T>::pending);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::new();
                let alive = guard.clone();
                spawn_local(async move {
                    if let Some(loaded) = alive.settle(load_list::<T, _>(&HttpTransport, path)).await {
                        state.set(loaded);
                    }
                });
                move || guard.unmount()
            },
            (),
        );
    }
    (*state).clone()
}
