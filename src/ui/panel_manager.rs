use crate::data::page::PageId;
use std::collections::BTreeMap;

/// The three visibility markers carried by every managed element:
/// hidden/visible, fade/fade-in, and active/inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMarkers {
    pub hidden: bool,
    pub fade: bool,
    pub fade_in: bool,
    pub active: bool,
}

impl Default for PanelMarkers {
    fn default() -> Self {
        PanelMarkers {
            hidden: true,
            fade: true,
            fade_in: false,
            active: false,
        }
    }
}

/// Keeps at most one content panel visible at a time, plus the header-info
/// widget group whenever the Summary page is requested. The manager carries
/// no notion of a current page beyond the markers themselves; rendering code
/// reads the markers back each frame.
#[derive(Debug)]
pub struct PanelManager {
    panels: BTreeMap<PageId, PanelMarkers>,
    header_info: Vec<PanelMarkers>,
}

impl PanelManager {
    /// Create a manager for the given set of registered panels and a fixed
    /// number of header-info widgets. Everything starts hidden.
    pub fn new(pages: &[PageId], header_widgets: usize) -> Self {
        let mut panels = BTreeMap::new();
        for page in pages {
            panels.insert(*page, PanelMarkers::default());
        }
        PanelManager {
            panels,
            header_info: vec![PanelMarkers::default(); header_widgets],
        }
    }

    /// Activate the panel named by an arbitrary identifier string. Unknown
    /// identifiers, and known identifiers with no registered panel, leave
    /// every panel hidden rather than preserving the previous one.
    pub fn activate(&mut self, identifier: &str) {
        tracing::debug!("Panel activation requested for {identifier}");
        self.hide_all();
        match PageId::try_from(identifier) {
            Ok(page) => self.reveal(page),
            Err(_) => (),
        }
    }

    /// Typed twin of activate(), used by the navigation buttons.
    pub fn activate_page(&mut self, page: PageId) {
        self.hide_all();
        self.reveal(page);
    }

    fn hide_all(&mut self) {
        for markers in self.panels.values_mut() {
            markers.fade = true;
            markers.hidden = true;
            markers.active = false;
        }
        for markers in self.header_info.iter_mut() {
            markers.hidden = true;
        }
    }

    fn reveal(&mut self, page: PageId) {
        if page == PageId::Summary {
            for markers in self.header_info.iter_mut() {
                markers.hidden = false;
            }
        }
        if let Some(markers) = self.panels.get_mut(&page) {
            markers.hidden = false;
            markers.fade = false;
            markers.fade_in = true;
            markers.active = true;
        }
    }

    /// The page whose panel currently carries the active marker, if any.
    pub fn active_page(&self) -> Option<PageId> {
        self.panels
            .iter()
            .find(|(_, markers)| markers.active)
            .map(|(page, _)| *page)
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.markers(page).is_some_and(|markers| markers.active)
    }

    /// Whether the header-info widget group is currently shown.
    pub fn header_visible(&self) -> bool {
        !self.header_info.is_empty() && self.header_info.iter().all(|markers| !markers.hidden)
    }

    pub fn markers(&self, page: PageId) -> Option<&PanelMarkers> {
        self.panels.get(&page)
    }
}
