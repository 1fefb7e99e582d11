use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container text-center py-5">
            <h1 class="display-1 fw-bold">{"404"}</h1>
            <p class="lead mb-4">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Landing} classes={classes!("btn", "btn-primary")}>
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
