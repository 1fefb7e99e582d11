use std::rc::Rc;

use yew::prelude::*;

use crate::components::composite::fault_boundary::Fault;

/// Loads a bundled seed once per mount. A malformed seed is reported as a
/// fault and renders as an empty collection.
#[hook]
pub fn use_seed<T: 'static>(
    load: fn() -> shared::Result<Vec<T>>,
    on_fault: Callback<Fault>,
) -> Rc<Vec<T>> {
    let loaded = use_memo((), move |_| load().map(Rc::new).map_err(Fault::from));

    {
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            if let Err(fault) = &*loaded {
                on_fault.emit(fault.clone());
            }
        });
    }

    match &*loaded {
        Ok(records) => records.clone(),
        Err(_) => Rc::default(),
    }
}
