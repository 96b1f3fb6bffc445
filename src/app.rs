use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Navbar, ProtectedRoute};
use crate::hooks::SessionProvider;
use crate::views::{
    DashboardView, LoginView, MenuView, ProfileView, RegisterView, ResetPasswordView,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/profile")]
    Profile,
    #[at("/menu")]
    Menu,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::ResetPassword => html! { <ResetPasswordView /> },
        Route::Profile => html! {
            <ProtectedRoute><ProfileView /></ProtectedRoute>
        },
        Route::Menu => html! {
            <ProtectedRoute><MenuView /></ProtectedRoute>
        },
        Route::Dashboard => html! {
            <ProtectedRoute><DashboardView /></ProtectedRoute>
        },
        Route::NotFound => html! { <h1>{"404 – Not Found"}</h1> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                // La navbar es visible en todas las rutas
                <Navbar />
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}
