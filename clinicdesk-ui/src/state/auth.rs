//! Session Context
//!
//! Wraps the core [`SessionStore`] for the component tree. The store owns
//! persistence; a signal mirrors its current session so views re-render on
//! login and logout.

use std::cell::RefCell;
use std::rc::Rc;

use clinicdesk::{Identity, Role, Session, SessionError, SessionStore};
use leptos::*;

use super::storage::LocalStorage;

#[derive(Clone)]
pub struct AuthContext {
    store: Rc<RefCell<SessionStore<LocalStorage>>>,
    /// Current session, kept in step with the store by a subscription
    pub session: RwSignal<Option<Session>>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.as_ref().map(|s| s.role))
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.with(|s| s.as_ref().map(|s| s.identity.clone()))
    }

    /// Persist the identity returned by a login call.
    pub fn login(&self, identity: Identity, role: Role) -> Result<(), SessionError> {
        self.store.borrow_mut().login(identity, role)
    }

    pub fn logout(&self) {
        self.store.borrow_mut().logout();
    }
}

/// Restore the session from local storage and provide it as context.
pub fn provide_auth() {
    let mut store = SessionStore::restore(LocalStorage);
    let session = create_rw_signal(store.session().cloned());

    store.subscribe(move |current| session.set(current.cloned()));

    provide_context(AuthContext {
        store: Rc::new(RefCell::new(store)),
        session,
    });
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found")
}
