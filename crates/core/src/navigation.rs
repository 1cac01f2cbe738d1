//! Role-gated navigation entries for the user menu

use crate::session::Session;

/// One entry in the user menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, route: &'static str) -> Self {
        Self { label, route }
    }
}

pub const ADMIN_LINKS: [NavLink; 5] = [
    NavLink::new("Profile", "/dashboard"),
    NavLink::new("User management", "/admin"),
    NavLink::new("Tickets", "/admin/soporte"),
    NavLink::new("Home", "/"),
    NavLink::new("Help", "/ayuda"),
];

pub const STANDARD_LINKS: [NavLink; 4] = [
    NavLink::new("Profile", "/dashboard"),
    NavLink::new("Home", "/"),
    NavLink::new("Help", "/ayuda"),
    NavLink::new("Support", "/soporte"),
];

/// What the header renders for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// No session: a single login button
    LoginTrigger,
    /// Menu of links; logout is always appended by the view
    Menu {
        display_name: String,
        initial: String,
        admin: bool,
        links: &'static [NavLink],
    },
}

impl Navigation {
    pub fn for_session(session: Option<&Session>) -> Self {
        let Some(session) = session else {
            return Self::LoginTrigger;
        };
        let admin = session.is_admin();
        Self::Menu {
            display_name: session.display_name().to_string(),
            initial: session.initial(),
            admin,
            links: if admin { &ADMIN_LINKS } else { &STANDARD_LINKS },
        }
    }

    pub fn links(&self) -> &'static [NavLink] {
        match self {
            Self::LoginTrigger => &[],
            Self::Menu { links, .. } => links,
        }
    }
}
