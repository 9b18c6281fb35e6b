#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Features,
    Specs,
    Contact,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Features, Page::Specs, Page::Contact];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Features => "features",
            Page::Specs => "specs",
            Page::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Specs => "Specs",
            Page::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }
}

/// Plain identifier switch used by the page outlet. An identifier outside
/// the known set selects nothing.
pub fn route(id: &str) -> Option<Page> {
    Page::from_id(id)
}

/// One row of the navigation menu as the view renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

/// Which page is showing and whether the mobile menu is expanded.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NavState {
    current: Page,
    mobile_menu_open: bool,
}

impl NavState {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Switches to the page named by `id`, falling back to home when the
    /// identifier is unknown. Returns the page that is now current.
    pub fn set_current_page(&mut self, id: &str) -> Page {
        let page = Page::from_id(id).unwrap_or_else(|| {
            log::warn!("Unknown page identifier {:?}, showing home", id);
            Page::Home
        });
        self.current = page;
        page
    }

    /// Page chosen from the collapsible mobile list; the list closes behind it.
    pub fn set_current_page_from_mobile(&mut self, id: &str) -> Page {
        let page = self.set_current_page(id);
        self.mobile_menu_open = false;
        page
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn entries(&self) -> Vec<NavEntry> {
        Page::ALL
            .into_iter()
            .map(|page| NavEntry {
                page,
                label: page.label(),
                active: self.is_active(page),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_with_menu_closed() {
        let nav = NavState::default();
        assert_eq!(nav.current(), Page::Home);
        assert!(!nav.mobile_menu_open());
    }

    #[test]
    fn every_known_id_selects_one_page_and_one_entry() {
        for page in Page::ALL {
            let mut nav = NavState::default();
            assert_eq!(nav.set_current_page(page.id()), page);

            let outlets: Vec<Page> = Page::ALL
                .into_iter()
                .filter(|candidate| route(nav.current().id()) == Some(*candidate))
                .collect();
            assert_eq!(outlets, vec![page]);

            let active: Vec<NavEntry> = nav.entries().into_iter().filter(|e| e.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].page, page);
        }
    }

    #[test]
    fn raw_router_selects_nothing_for_unknown_id() {
        assert_eq!(route("pricing"), None);
        assert_eq!(route(""), None);
        assert_eq!(route("Home"), None);
    }

    #[test]
    fn controller_falls_back_to_home_for_unknown_id() {
        let mut nav = NavState::default();
        nav.set_current_page("specs");
        assert_eq!(nav.set_current_page("pricing"), Page::Home);
        assert!(nav.is_active(Page::Home));
        assert_eq!(nav.entries().iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn mobile_choice_closes_the_menu_but_desktop_choice_does_not() {
        let mut nav = NavState::default();
        nav.toggle_mobile_menu();
        assert!(nav.mobile_menu_open());

        nav.set_current_page("features");
        assert!(nav.mobile_menu_open());

        nav.set_current_page_from_mobile("contact");
        assert_eq!(nav.current(), Page::Contact);
        assert!(!nav.mobile_menu_open());
    }

    #[test]
    fn entries_follow_menu_order() {
        let labels: Vec<&str> = NavState::default().entries().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Home", "Features", "Specs", "Contact"]);
    }
}
