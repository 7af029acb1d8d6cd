use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="card">
            <h2>{"Page not found"}</h2>
            <Link<Route> to={Route::StudentList}>{"Back to students"}</Link<Route>>
        </div>
    }
}
