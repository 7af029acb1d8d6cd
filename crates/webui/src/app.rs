use crate::components::{
    department_list_page::DepartmentListPage, enrollment_list_page::EnrollmentListPage,
    not_found::NotFound, student_list_page::StudentListPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

pub const TITLE: &str = "Student Management System";

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/students")]
    StudentList,
    #[at("/departments")]
    DepartmentList,
    #[at("/enrollments")]
    EnrollmentList,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn render(route: Route) -> Html {
        match route {
            Route::Home => html! { <Redirect<Route> to={Route::StudentList} /> },
            Route::StudentList => html! { <StudentListPage /> },
            Route::DepartmentList => html! { <DepartmentListPage /> },
            Route::EnrollmentList => html! { <EnrollmentListPage /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }

    /// Entries of the navigation bar, in display order.
    pub fn navigation() -> [(Route, &'static str); 3] {
        [
            (Route::StudentList, "Students"),
            (Route::DepartmentList, "Departments"),
            (Route::EnrollmentList, "Enrollments"),
        ]
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    let current = use_route::<Route>();

    let links = Route::navigation()
        .into_iter()
        .map(|(route, label)| {
            let active = current.as_ref() == Some(&route);
            html! {
                <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                    { label }
                </Link<Route>>
            }
        })
        .collect::<Html>();

    html! {
        <nav class="navbar">
            <div class="nav-content">
                <h1 class="nav-title">{ TITLE }</h1>
                <div class="nav-links">{ links }</div>
            </div>
        </nav>
    }
}

/// Mounted only after the configuration has been loaded.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app-container">
            <BrowserRouter>
                <Nav />
                <main class="main-content">
                    <Switch<Route> render={Route::render} />
                </main>
            </BrowserRouter>
        </div>
    }
}
