use yew_router::navigator::Navigator;

use crate::Route;

/// Path-based navigation. `push` adds a history entry, `replace` overwrites
/// the current one.
pub trait Navigate {
    fn push(&self, route: &Route);
    fn replace(&self, route: &Route);
}

impl Navigate for Navigator {
    fn push(&self, route: &Route) {
        Navigator::push(self, route);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn replace(&self, route: &Route) {
        Navigator::replace(self, route);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::Navigate;
    use crate::Route;

    #[derive(Debug, Clone, PartialEq)]
    pub enum NavigationCall {
        Push(Route),
        Replace(Route),
    }

    /// Records navigation instead of touching browser history.
    #[derive(Default)]
    pub struct RecordingNavigator {
        calls: RefCell<Vec<NavigationCall>>,
    }

    impl RecordingNavigator {
        pub fn calls(&self) -> Vec<NavigationCall> {
            self.calls.borrow().clone()
        }

        pub fn pushed(&self) -> Vec<Route> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    NavigationCall::Push(route) => Some(route),
                    NavigationCall::Replace(_) => None,
                })
                .collect()
        }

        pub fn replaced(&self) -> Vec<Route> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    NavigationCall::Replace(route) => Some(route),
                    NavigationCall::Push(_) => None,
                })
                .collect()
        }
    }

    impl Navigate for RecordingNavigator {
        fn push(&self, route: &Route) {
            self.calls
                .borrow_mut()
                .push(NavigationCall::Push(route.clone()));
        }

        fn replace(&self, route: &Route) {
            self.calls
                .borrow_mut()
                .push(NavigationCall::Replace(route.clone()));
        }
    }
}
