use payloads::UserIdentity;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{GateDecision, GateTransitions, Session};

/// Renders its children only for a signed-in session.
///
/// While the session is still resolving a placeholder is shown. Once it is
/// known to be signed out the visitor is sent to the sign-in page, replacing
/// the current history entry, and nothing is rendered.
///
/// Two modes:
/// 1. Children: wraps content that does not need the user
/// 2. Render prop: hands the signed-in `UserIdentity` to its content
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub session: Session,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub render: Option<Callback<UserIdentity, Html>>,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let navigator = use_navigator();
    let decision = GateDecision::from(&props.session);
    let transitions = use_mut_ref(GateTransitions::default);

    // The redirect fires once per transition into the signed-out state
    // rather than on every render.
    use_effect_with(decision, move |decision| {
        if let Some(navigator) = navigator {
            transitions.borrow_mut().observe(*decision, &navigator);
        }
    });

    match (decision, &props.session.user) {
        (GateDecision::Loading, _) => html! {
            <div class="text-center py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 \
                            border-2 border-neutral-900 \
                            dark:border-neutral-100 border-t-transparent \
                            dark:border-t-transparent"></div>
            </div>
        },
        (GateDecision::Render, Some(user)) => match &props.render {
            Some(render) => render.emit(user.clone()),
            None => html! { <>{for props.children.iter()}</> },
        },
        (GateDecision::Redirect | GateDecision::Render, _) => html! {},
    }
}
