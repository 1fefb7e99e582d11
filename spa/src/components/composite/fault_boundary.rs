use std::fmt;
use std::rc::Rc;

use shared::AppError;
use yew::prelude::*;

/// A reported error, shared between the reporter and the boundary.
#[derive(Debug, Clone)]
pub struct Fault(Rc<AppError>);

impl Fault {
    pub fn error(&self) -> &AppError {
        &self.0
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<AppError> for Fault {
    fn from(value: AppError) -> Self {
        Self(Rc::new(value))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub fault: Option<Fault>,
    pub on_reset: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Shows a recovery prompt instead of its children while a fault is pending.
#[function_component(FaultBoundary)]
pub fn fault_boundary(props: &Props) -> Html {
    if props.fault.is_none() {
        return props.children.clone();
    }

    let on_try_again = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="min-vh-100 d-flex align-items-center justify-content-center">
            <div class="card shadow p-5 text-center">
                <h1 class="h3 mb-3">{"Oops, something went wrong."}</h1>
                <p class="text-body-secondary mb-4">
                    {"We're sorry for the inconvenience. Please try refreshing the page."}
                </p>
                <button class="btn btn-primary" onclick={on_try_again}>{"Try again"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faults_compare_by_identity() {
        let fault = Fault::from(AppError::NavigationUnavailable);
        let other = Fault::from(AppError::NavigationUnavailable);
        assert_eq!(fault, fault.clone());
        assert_ne!(fault, other);
        assert_eq!(fault.to_string(), "navigation_unavailable");
    }
}
