//! View Router
//!
//! The page on screen is one value of a closed enum. There is no URL
//! routing and no history; every "back" goes to the initiatives feed.

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Initiatives,
    Login,
    Register,
    CreateInitiative,
    Account,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Initiatives,
        View::Login,
        View::Register,
        View::CreateInitiative,
        View::Account,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Initiatives => "initiatives",
            View::Login => "login",
            View::Register => "register",
            View::CreateInitiative => "create_initiative",
            View::Account => "account",
        }
    }

    /// Next view after `event`. Every event has a fixed target, so the
    /// current view only matters for logging.
    pub fn after(self, event: RouteEvent) -> View {
        let next = match event {
            RouteEvent::Navigate(target) => target,
            RouteEvent::LoginSucceeded => View::Initiatives,
            RouteEvent::InitiativeCreated => View::Initiatives,
            RouteEvent::LoggedOut => View::Initiatives,
            RouteEvent::RegistrationCompleted => View::Login,
        };
        if next != self {
            tracing::debug!(from = self.as_str(), to = next.as_str(), ?event, "view change");
        }
        next
    }
}

/// Things that move the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEvent {
    /// A navigation button or link
    Navigate(View),
    LoginSucceeded,
    InitiativeCreated,
    LoggedOut,
    /// Fired once the registration success message has been shown
    RegistrationCompleted,
}
