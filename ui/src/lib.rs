use payloads::{APIClient, UserIdentity};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

pub mod auth;
pub mod components;
pub mod contexts;
pub mod hooks;
pub mod logs;
pub mod navigation;
pub mod pages;
pub mod payment_status;
pub mod services;
pub mod state;
pub mod utils;

use auth::Session;
use components::{RequireAuth, ToastContainer, layout::MainLayout};
use contexts::ToastProvider;
use hooks::use_session_bootstrap;
use pages::{
    DashboardPage, NotFoundPage, PaymentPage, SignInPage, SpaceDetailPage,
    SpacesPage,
};
pub use state::{AuthState, State};

/// API client for the hosted backend, carrying the stored access token if
/// there is one. The address and project key are taken from the build
/// environment; the address falls back to the page's own origin.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(str::to_string)
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();
    let api_key = option_env!("BACKEND_ANON_KEY").unwrap_or_default();

    let client = APIClient::new(address, api_key);
    match auth::stored_access_token() {
        Some(token) => client.with_access_token(token),
        None => client,
    }
}

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Spaces,
    #[at("/spaces/:space_id")]
    SpaceDetail { space_id: String },
    #[at("/sign-in")]
    SignIn,
    #[at("/dashboard")]
    Dashboard,
    #[at("/payment/:reservation_id")]
    Payment { reservation_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AppRoutes />
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[function_component]
fn AppRoutes() -> Html {
    use_session_bootstrap();
    let (state, _) = use_store::<State>();
    let session = state.session();

    let render = Callback::from(move |route: Route| switch(route, &session));

    html! {
        <MainLayout>
            <Switch<Route> {render} />
        </MainLayout>
    }
}

/// Protected routes get the current session handed to their gate.
fn switch(route: Route, session: &Session) -> Html {
    match route {
        Route::Spaces => html! { <SpacesPage /> },
        Route::SpaceDetail { space_id } => {
            html! { <SpaceDetailPage {space_id} /> }
        }
        Route::SignIn => html! { <SignInPage /> },
        Route::Dashboard => html! {
            <RequireAuth
                session={session.clone()}
                render={Callback::from(|user: UserIdentity| html! {
                    <DashboardPage {user} />
                })}
            />
        },
        Route::Payment { reservation_id } => html! {
            <RequireAuth session={session.clone()}>
                <PaymentPage {reservation_id} />
            </RequireAuth>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
