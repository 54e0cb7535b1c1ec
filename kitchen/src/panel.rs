/// Open/close state of the side panel plus the hotspot driving its content.
///
/// Each open hands out an [`OpenTicket`]; a later open or an effective close
/// invalidates it, so results arriving for an earlier click can be dropped.
#[derive(Clone, Debug, Default)]
pub struct PanelState {
    open: bool,
    active: Option<usize>,
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenTicket {
    pub hotspot: usize,
    generation: u64,
}

impl PanelState {
    pub fn new() -> PanelState {
        PanelState::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Makes `hotspot` the only active hotspot.
    /// The panel itself opens on [`complete`](Self::complete).
    pub fn activate(&mut self, hotspot: usize) -> OpenTicket {
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(hotspot);
        OpenTicket { hotspot, generation: self.generation }
    }

    pub fn is_current(&self, ticket: &OpenTicket) -> bool {
        ticket.generation == self.generation && self.active == Some(ticket.hotspot)
    }

    /// Opens the panel for a still-current ticket; stale tickets return false.
    pub fn complete(&mut self, ticket: &OpenTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.open = true;
        true
    }

    /// Closes an open panel and returns the hotspot that was active.
    /// `None` means the panel was already closed and nothing changed.
    pub fn close(&mut self) -> Option<Option<usize>> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.generation = self.generation.wrapping_add(1);
        Some(self.active.take())
    }
}
